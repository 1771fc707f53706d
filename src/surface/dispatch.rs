//! Click dispatch table.
//!
//! Maps surface elements back to button identities so the game can judge a
//! click without the button holding any reference to the game.

use rustc_hash::FxHashMap;

use super::ElementHandle;
use crate::button::ButtonSet;
use crate::core::ButtonId;

/// Element handle → button identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickDispatch {
    routes: FxHashMap<ElementHandle, ButtonId>,
}

impl ClickDispatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route every attached button in `buttons`.
    #[must_use]
    pub fn for_buttons(buttons: &ButtonSet) -> Self {
        let routes = buttons
            .iter()
            .filter_map(|b| b.element().map(|e| (e, b.id())))
            .collect();
        Self { routes }
    }

    pub fn insert(&mut self, element: ElementHandle, id: ButtonId) {
        self.routes.insert(element, id);
    }

    /// Identity of the button rendered as `element`.
    #[must_use]
    pub fn resolve(&self, element: ElementHandle) -> Option<ButtonId> {
        self.routes.get(&element).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::Button;
    use crate::core::{Color, Size};

    #[test]
    fn test_for_buttons_skips_unattached() {
        let mut set = ButtonSet::build(3, |id| Button::create(id, Size::new(1, 1), Color::default()));
        set.get_mut(ButtonId(0)).unwrap().attach(ElementHandle(10));
        set.get_mut(ButtonId(2)).unwrap().attach(ElementHandle(12));

        let dispatch = ClickDispatch::for_buttons(&set);
        assert_eq!(dispatch.len(), 2);
        assert_eq!(dispatch.resolve(ElementHandle(10)), Some(ButtonId(0)));
        assert_eq!(dispatch.resolve(ElementHandle(12)), Some(ButtonId(2)));
        assert_eq!(dispatch.resolve(ElementHandle(11)), None);
    }

    #[test]
    fn test_insert() {
        let mut dispatch = ClickDispatch::new();
        assert!(dispatch.is_empty());
        dispatch.insert(ElementHandle(1), ButtonId(4));
        assert_eq!(dispatch.resolve(ElementHandle(1)), Some(ButtonId(4)));
    }
}
