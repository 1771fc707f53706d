//! Buttons: the clickable units a session is played with.
//!
//! Each button carries a fixed identity (its creation index) and a display
//! state that flips between numbered and blank. Buttons never call back into
//! the game; clicks reach the game through the surface's dispatch table.

pub mod button;
pub mod set;

pub use button::{random_placement, Button, DisplayState, Placement};
pub use set::{ButtonSet, Order};
