//! Stateless stage operations over a `Surface`.
//!
//! Each operation updates the buttons it touches and then redraws their
//! elements, so a surface always mirrors the button records.

use super::{ClickDispatch, Surface};
use crate::button::{Button, ButtonSet};
use crate::core::{ButtonId, Color, GameRng};

fn redraw<S: Surface + ?Sized>(surface: &mut S, button: &Button) {
    if let Some(element) = button.element() {
        surface.render(element, button);
    }
}

/// Remove every element from the surface.
pub fn clear<S: Surface + ?Sized>(surface: &mut S) {
    surface.clear();
}

/// Append `button` to the surface and remember its element.
pub fn add_button<S: Surface + ?Sized>(surface: &mut S, button: &mut Button) {
    let element = surface.append(button);
    button.attach(element);
}

/// Initial arrangement: every button in relative (flow) layout.
pub fn arrange<S: Surface + ?Sized>(surface: &mut S, buttons: &mut ButtonSet) {
    for button in buttons.iter_mut() {
        button.arrange();
        redraw(surface, button);
    }
}

/// Move every button to a random position inside the viewport.
pub fn scramble<S: Surface + ?Sized>(surface: &mut S, buttons: &mut ButtonSet, rng: &mut GameRng) {
    let viewport = surface.viewport();
    for button in buttons.iter_mut() {
        let pos = button.random_position(viewport, rng);
        button.place_at(pos.x, pos.y);
        redraw(surface, button);
    }
}

/// Blank every label.
pub fn hide_numbers<S: Surface + ?Sized>(surface: &mut S, buttons: &mut ButtonSet) {
    for button in buttons.iter_mut() {
        button.hide_number();
        redraw(surface, button);
    }
}

/// Build the click dispatch table for the buttons on the surface.
#[must_use]
pub fn make_clickable(buttons: &ButtonSet) -> ClickDispatch {
    ClickDispatch::for_buttons(buttons)
}

/// Reveal one button's number. Returns false for an unknown identity.
pub fn reveal<S: Surface + ?Sized>(surface: &mut S, buttons: &mut ButtonSet, id: ButtonId) -> bool {
    match buttons.get_mut(id) {
        Some(button) => {
            button.reveal_number();
            redraw(surface, button);
            true
        }
        None => false,
    }
}

/// Reveal the numbers of every identity in `order`.
pub fn reveal_order<S: Surface + ?Sized>(surface: &mut S, buttons: &mut ButtonSet, order: &[ButtonId]) {
    for &id in order {
        reveal(surface, buttons, id);
    }
}

/// Uniformly random opaque color.
pub fn random_color(rng: &mut GameRng) -> Color {
    Color::rgb(rng.gen_byte(), rng.gen_byte(), rng.gen_byte())
}
