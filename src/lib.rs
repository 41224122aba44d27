//! Terminal Snake
//!
//! This library provides:
//! - Core game logic (game module): movement, collisions, food, scoring, speed
//! - A one-shot tick scheduler (clock module)
//! - Keyboard mapping (input module) and TUI rendering (render module)
//! - The interactive game loop (modes module)

pub mod clock;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
