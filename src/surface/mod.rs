//! Rendering surface boundary.
//!
//! The game never touches a display directly. It drives a `Surface`
//! through the stateless operations in `stage`, and receives clicks back
//! through a `ClickDispatch` table that maps surface elements to button
//! identities.
//!
//! ## Implementations
//!
//! - `Canvas`: in-memory surface with flow layout and hit testing, used by
//!   headless front-ends and tests.
//!
//! Front-ends for real displays implement `Surface` themselves.

pub mod canvas;
pub mod dispatch;
pub mod stage;

pub use canvas::{Canvas, ElementView};
pub use dispatch::ClickDispatch;

use serde::{Deserialize, Serialize};

use crate::button::Button;
use crate::core::Size;

/// Opaque handle to an element on a surface.
///
/// Handles are issued by the surface on `append` and are only meaningful to
/// the surface that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementHandle(pub u32);

impl std::fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Element({})", self.0)
    }
}

/// Kind of user-visible notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notice {
    Start,
    Validation,
    Success,
    Failure,
}

/// A display that can hold button elements.
pub trait Surface {
    /// Visible area buttons must stay inside.
    fn viewport(&self) -> Size;

    /// Remove every element.
    fn clear(&mut self);

    /// Add an element for `button` and return its handle.
    fn append(&mut self, button: &Button) -> ElementHandle;

    /// Redraw an element after its button changed label or placement.
    fn render(&mut self, element: ElementHandle, button: &Button);

    /// Show a message to the player.
    fn notify(&mut self, notice: Notice, text: &str);
}
