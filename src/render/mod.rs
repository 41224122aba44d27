pub mod renderer;

pub use renderer::{Renderer, score_text};
