//! A single clickable button.
//!
//! ## Lifecycle
//!
//! 1. **Created** numbered, in flow layout, not yet on any surface
//! 2. **Appended** to a surface, which hands back an `ElementHandle`
//! 3. **Scrambled** to absolute positions, then **hidden**
//! 4. **Revealed** one by one as the player clicks correctly (or all at once on failure)

use serde::{Deserialize, Serialize};

use crate::core::{ButtonId, Color, GameRng, Position, Size};
use crate::surface::ElementHandle;

/// What the button face shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayState {
    /// Shows identity + 1.
    Numbered,
    /// Shows nothing.
    Blank,
}

/// How the surface lays the button out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// Relative positioning: the surface flows buttons in append order.
    Flow,
    /// Absolute positioning at a top-left corner.
    At(Position),
}

/// One clickable unit with a fixed identity and mutable display state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    id: ButtonId,
    color: Color,
    size: Size,
    display: DisplayState,
    placement: Placement,
    element: Option<ElementHandle>,
}

impl Button {
    /// Create a numbered button in flow layout.
    #[must_use]
    pub fn create(id: ButtonId, size: Size, color: Color) -> Self {
        Self {
            id,
            color,
            size,
            display: DisplayState::Numbered,
            placement: Placement::Flow,
            element: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> ButtonId {
        self.id
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn display(&self) -> DisplayState {
        self.display
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Surface element this button is rendered as, once appended.
    #[must_use]
    pub fn element(&self) -> Option<ElementHandle> {
        self.element
    }

    pub(crate) fn attach(&mut self, element: ElementHandle) {
        self.element = Some(element);
    }

    /// Number currently shown, if any.
    #[must_use]
    pub fn label(&self) -> Option<u32> {
        match self.display {
            DisplayState::Numbered => Some(self.id.label()),
            DisplayState::Blank => None,
        }
    }

    /// Text currently shown on the face.
    #[must_use]
    pub fn label_text(&self) -> String {
        self.label().map(|n| n.to_string()).unwrap_or_default()
    }

    pub fn hide_number(&mut self) {
        self.display = DisplayState::Blank;
    }

    pub fn reveal_number(&mut self) {
        self.display = DisplayState::Numbered;
    }

    /// Return to relative (flow) positioning.
    pub fn arrange(&mut self) {
        self.placement = Placement::Flow;
    }

    /// Position absolutely at `(x, y)`.
    pub fn place_at(&mut self, x: u32, y: u32) {
        self.placement = Placement::At(Position::new(x, y));
    }

    /// Pick a random position that keeps this button inside `viewport`.
    pub fn random_position(&self, viewport: Size, rng: &mut GameRng) -> Position {
        random_placement(viewport, self.size, rng)
    }
}

/// Uniform position in `[0, vw - ew] x [0, vh - eh]`.
///
/// Axes where the element is larger than the viewport collapse to 0.
pub fn random_placement(viewport: Size, element: Size, rng: &mut GameRng) -> Position {
    let max = viewport.max_origin(element);
    Position::new(rng.gen_up_to(max.x), rng.gen_up_to(max.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(id: u32) -> Button {
        Button::create(ButtonId(id), Size::new(160, 80), Color::rgb(1, 2, 3))
    }

    #[test]
    fn test_create_is_numbered_and_flowed() {
        let b = button(2);
        assert_eq!(b.id(), ButtonId(2));
        assert_eq!(b.label(), Some(3));
        assert_eq!(b.label_text(), "3");
        assert_eq!(b.placement(), Placement::Flow);
        assert_eq!(b.element(), None);
    }

    #[test]
    fn test_hide_and_reveal() {
        let mut b = button(0);
        b.hide_number();
        assert_eq!(b.display(), DisplayState::Blank);
        assert_eq!(b.label(), None);
        assert_eq!(b.label_text(), "");

        b.reveal_number();
        assert_eq!(b.label(), Some(1));
    }

    #[test]
    fn test_place_at_and_arrange() {
        let mut b = button(0);
        b.place_at(10, 20);
        assert_eq!(b.placement(), Placement::At(Position::new(10, 20)));

        b.arrange();
        assert_eq!(b.placement(), Placement::Flow);
    }

    #[test]
    fn test_random_placement_exact_fit() {
        let mut rng = GameRng::new(1);
        for _ in 0..20 {
            let pos = random_placement(Size::new(160, 80), Size::new(160, 80), &mut rng);
            assert_eq!(pos, Position::new(0, 0));
        }
    }

    #[test]
    fn test_random_position_within_viewport() {
        let b = button(0);
        let mut rng = GameRng::new(9);
        for _ in 0..200 {
            let pos = b.random_position(Size::new(400, 300), &mut rng);
            assert!(pos.x <= 240);
            assert!(pos.y <= 220);
        }
    }
}
