//! Identity-keyed button storage and identity sequences.

use smallvec::SmallVec;

use super::button::Button;
use crate::core::ButtonId;

/// Ordered sequence of button identities.
///
/// Sessions hold at most a handful of buttons, so this stays inline.
pub type Order = SmallVec<[ButtonId; 8]>;

/// Buttons of one session, stored in identity order.
///
/// `ButtonSet` is the only owner of `Button` records; orders refer to
/// buttons by `ButtonId`, never by position in some other list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonSet {
    buttons: Vec<Button>,
}

impl ButtonSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set of `count` buttons with identities `0..count`.
    pub fn build(count: u32, mut make: impl FnMut(ButtonId) -> Button) -> Self {
        let buttons = ButtonId::sequence(count)
            .map(|id| {
                let button = make(id);
                assert_eq!(button.id(), id, "button factory must preserve identity");
                button
            })
            .collect();
        Self { buttons }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ButtonId) -> Option<&Button> {
        self.buttons.get(id.index())
    }

    pub fn get_mut(&mut self, id: ButtonId) -> Option<&mut Button> {
        self.buttons.get_mut(id.index())
    }

    #[must_use]
    pub fn contains(&self, id: ButtonId) -> bool {
        id.index() < self.buttons.len()
    }

    /// Identities in creation order.
    #[must_use]
    pub fn creation_order(&self) -> Order {
        self.buttons.iter().map(Button::id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Button> {
        self.buttons.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Button> {
        self.buttons.iter_mut()
    }
}

impl<'a> IntoIterator for &'a ButtonSet {
    type Item = &'a Button;
    type IntoIter = std::slice::Iter<'a, Button>;

    fn into_iter(self) -> Self::IntoIter {
        self.buttons.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Size};

    fn make(id: ButtonId) -> Button {
        Button::create(id, Size::new(10, 10), Color::default())
    }

    #[test]
    fn test_build_in_identity_order() {
        let set = ButtonSet::build(5, make);
        assert_eq!(set.len(), 5);
        for (i, button) in set.iter().enumerate() {
            assert_eq!(button.id(), ButtonId(i as u32));
        }
        assert_eq!(
            set.creation_order().as_slice(),
            &[ButtonId(0), ButtonId(1), ButtonId(2), ButtonId(3), ButtonId(4)]
        );
    }

    #[test]
    fn test_lookup() {
        let mut set = ButtonSet::build(3, make);
        assert!(set.contains(ButtonId(2)));
        assert!(!set.contains(ButtonId(3)));
        assert!(set.get(ButtonId(3)).is_none());

        set.get_mut(ButtonId(1)).unwrap().hide_number();
        assert_eq!(set.get(ButtonId(1)).unwrap().label(), None);
        assert_eq!(set.get(ButtonId(0)).unwrap().label(), Some(1));
    }

    #[test]
    fn test_empty() {
        let set = ButtonSet::new();
        assert!(set.is_empty());
        assert!(set.creation_order().is_empty());
    }

    #[test]
    #[should_panic(expected = "button factory must preserve identity")]
    fn test_build_rejects_mismatched_identity() {
        let _ = ButtonSet::build(2, |_| make(ButtonId(9)));
    }
}
