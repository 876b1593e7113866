//! Snake Arena - grid-based multiplayer snake with computer rivals
//!
//! This library provides:
//! - Core simulation (game module): grid occupancy, multi-snake movement
//!   and collision resolution, food spawning, greedy AI steering
//! - TUI rendering (render module)
//! - Keyboard input mapping (input module)
//! - Session timing shown in the HUD (metrics module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
