//! In-memory surface.
//!
//! `Canvas` keeps one `ElementView` per appended button, lays flow elements
//! out left to right (wrapping at the viewport width), and hit-tests points
//! so a headless front-end can click at coordinates.

use std::fmt;

use super::{ElementHandle, Notice, Surface};
use crate::button::{Button, Placement};
use crate::core::{ButtonId, Color, Position, Rect, Size};

/// What the canvas shows for one element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementView {
    pub handle: ElementHandle,
    pub button: ButtonId,
    pub label: String,
    pub color: Color,
    pub size: Size,
    pub placement: Placement,
}

impl ElementView {
    fn from_button(handle: ElementHandle, button: &Button) -> Self {
        Self {
            handle,
            button: button.id(),
            label: button.label_text(),
            color: button.color(),
            size: button.size(),
            placement: button.placement(),
        }
    }
}

/// Headless `Surface` implementation.
#[derive(Clone, Debug)]
pub struct Canvas {
    viewport: Size,
    next_handle: u32,
    elements: Vec<ElementView>,
    notices: Vec<(Notice, String)>,
    renders: usize,
}

impl Canvas {
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            next_handle: 0,
            elements: Vec::new(),
            notices: Vec::new(),
            renders: 0,
        }
    }

    /// Change the visible area (e.g. on window resize).
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in append (paint) order.
    pub fn views(&self) -> impl Iterator<Item = &ElementView> {
        self.elements.iter()
    }

    #[must_use]
    pub fn view(&self, handle: ElementHandle) -> Option<&ElementView> {
        self.elements.iter().find(|v| v.handle == handle)
    }

    /// Element currently showing `id`.
    #[must_use]
    pub fn view_of(&self, id: ButtonId) -> Option<&ElementView> {
        self.elements.iter().find(|v| v.button == id)
    }

    /// Every notice shown so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> &[(Notice, String)] {
        &self.notices
    }

    #[must_use]
    pub fn last_notice(&self) -> Option<&(Notice, String)> {
        self.notices.last()
    }

    /// Number of `render` calls received.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// On-screen rectangle of an element.
    #[must_use]
    pub fn bounds(&self, handle: ElementHandle) -> Option<Rect> {
        let mut cursor = Position::default();
        let mut row_height = 0;

        for view in &self.elements {
            let rect = match view.placement {
                Placement::At(pos) => Rect::new(pos, view.size),
                Placement::Flow => {
                    if cursor.x > 0 && cursor.x.saturating_add(view.size.width) > self.viewport.width {
                        cursor = Position::new(0, cursor.y.saturating_add(row_height));
                        row_height = 0;
                    }
                    let rect = Rect::new(cursor, view.size);
                    cursor.x = cursor.x.saturating_add(view.size.width);
                    row_height = row_height.max(view.size.height);
                    rect
                }
            };
            if view.handle == handle {
                return Some(rect);
            }
        }
        None
    }

    /// Topmost element under `point`.
    #[must_use]
    pub fn hit_test(&self, point: Position) -> Option<ElementHandle> {
        self.elements
            .iter()
            .rev()
            .map(|v| v.handle)
            .find(|&h| self.bounds(h).is_some_and(|r| r.contains(point)))
    }
}

impl Surface for Canvas {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn append(&mut self, button: &Button) -> ElementHandle {
        let handle = ElementHandle(self.next_handle);
        self.next_handle += 1;
        self.elements.push(ElementView::from_button(handle, button));
        handle
    }

    fn render(&mut self, element: ElementHandle, button: &Button) {
        self.renders += 1;
        if let Some(view) = self.elements.iter_mut().find(|v| v.handle == element) {
            *view = ElementView::from_button(element, button);
        }
    }

    fn notify(&mut self, notice: Notice, text: &str) {
        self.notices.push((notice, text.to_string()));
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "canvas {}", self.viewport)?;
        for view in &self.elements {
            let label = if view.label.is_empty() { "_" } else { view.label.as_str() };
            match self.bounds(view.handle) {
                Some(rect) => writeln!(f, "  [{label}] {} at {}", view.color, rect.origin)?,
                None => writeln!(f, "  [{label}] {}", view.color)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(id: u32) -> Button {
        Button::create(ButtonId(id), Size::new(100, 50), Color::rgb(9, 9, 9))
    }

    #[test]
    fn test_append_issues_unique_handles() {
        let mut canvas = Canvas::new(Size::new(500, 500));
        let a = canvas.append(&button(0));
        let b = canvas.append(&button(1));
        assert_ne!(a, b);
        assert_eq!(canvas.len(), 2);

        canvas.clear();
        assert!(canvas.is_empty());
        let c = canvas.append(&button(0));
        assert_ne!(c, a);
    }

    #[test]
    fn test_flow_layout_wraps() {
        let mut canvas = Canvas::new(Size::new(250, 500));
        let handles: Vec<_> = (0..3).map(|i| canvas.append(&button(i))).collect();

        assert_eq!(canvas.bounds(handles[0]).unwrap().origin, Position::new(0, 0));
        assert_eq!(canvas.bounds(handles[1]).unwrap().origin, Position::new(100, 0));
        assert_eq!(canvas.bounds(handles[2]).unwrap().origin, Position::new(0, 50));
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut canvas = Canvas::new(Size::new(500, 500));
        let mut first = button(0);
        let mut second = button(1);
        first.place_at(10, 10);
        second.place_at(20, 20);
        let a = canvas.append(&first);
        let b = canvas.append(&second);

        assert_eq!(canvas.hit_test(Position::new(15, 15)), Some(a));
        assert_eq!(canvas.hit_test(Position::new(25, 25)), Some(b));
        assert_eq!(canvas.hit_test(Position::new(400, 400)), None);
    }

    #[test]
    fn test_render_updates_view() {
        let mut canvas = Canvas::new(Size::new(500, 500));
        let mut b = button(2);
        let handle = canvas.append(&b);

        b.hide_number();
        canvas.render(handle, &b);

        assert_eq!(canvas.view(handle).unwrap().label, "");
        assert_eq!(canvas.render_count(), 1);
        assert_eq!(canvas.view_of(ButtonId(2)).unwrap().handle, handle);
    }

    #[test]
    fn test_notices() {
        let mut canvas = Canvas::new(Size::new(1, 1));
        canvas.notify(Notice::Start, "go");
        canvas.notify(Notice::Failure, "nope");
        assert_eq!(canvas.notices().len(), 2);
        assert_eq!(canvas.last_notice(), Some(&(Notice::Failure, "nope".to_string())));
    }

    #[test]
    fn test_display_lists_elements() {
        let mut canvas = Canvas::new(Size::new(500, 500));
        canvas.append(&button(0));
        let text = canvas.to_string();
        assert!(text.starts_with("canvas 500x500"));
        assert!(text.contains("[1] #090909 at (0, 0)"));
    }
}
