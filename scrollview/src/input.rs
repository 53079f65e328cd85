use crossterm::event::{Event as CrosstermEvent, MouseButton, MouseEvent, MouseEventKind};
use log::debug;

use crate::event::ViewEvent;
use crate::layout::Rect;
use crate::view::ScrollView;

/// Translates raw host events into typed [`ViewEvent`] payloads for a
/// widget occupying `rect` on screen. Owns the transient state of an
/// in-progress thumb drag; everything else is stateless mapping.
///
/// Toolkit callback registration ends here: the widget itself never sees a
/// crossterm type.
#[derive(Debug)]
pub struct InputMap {
    rect: Rect,
    /// Row offset within the thumb where an active drag grabbed it.
    grab: Option<u16>,
}

impl InputMap {
    pub fn new(rect: Rect) -> Self {
        Self { rect, grab: None }
    }

    /// Update the widget's on-screen rectangle after the host re-laid it
    /// out. An active drag survives the move.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn map(&mut self, event: &CrosstermEvent, view: &ScrollView) -> Option<ViewEvent> {
        match event {
            CrosstermEvent::Mouse(mouse) => self.map_mouse(mouse, view),
            _ => None,
        }
    }

    fn map_mouse(&mut self, mouse: &MouseEvent, view: &ScrollView) -> Option<ViewEvent> {
        let (x, y) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::ScrollUp if self.rect.contains(x, y) => {
                Some(ViewEvent::WheelScrolled { delta: -1 })
            }
            MouseEventKind::ScrollDown if self.rect.contains(x, y) => {
                Some(ViewEvent::WheelScrolled { delta: 1 })
            }

            MouseEventKind::Down(MouseButton::Left) => self.begin_drag(x, y, view),

            MouseEventKind::Drag(MouseButton::Left) => {
                let grab = self.grab?;
                // Mouse position minus the grab point gives the thumb
                // start; rows above the track map to offset 0.
                let track_pos = y.saturating_sub(grab).saturating_sub(self.rect.y);
                let offset = view.scrollbar().offset_at(track_pos, self.rect.height);
                Some(ViewEvent::ScrollbarDragged { offset })
            }

            MouseEventKind::Up(MouseButton::Left) => {
                self.grab = None;
                None
            }

            _ => None,
        }
    }

    fn begin_drag(&mut self, x: u16, y: u16, view: &ScrollView) -> Option<ViewEvent> {
        if !view.is_overflowing() || !self.on_scrollbar(x, y) {
            return None;
        }

        let track = self.rect.height;
        let (thumb_pos, thumb_size) = view.scrollbar().thumb(track);
        let thumb_start = self.rect.y + thumb_pos;
        let on_thumb = y >= thumb_start && y < thumb_start + thumb_size;

        if on_thumb {
            // Grab the thumb where it was clicked; movement comes from
            // subsequent drag events.
            self.grab = Some(y - thumb_start);
            debug!("thumb grabbed at row {} (grab {})", y, y - thumb_start);
            None
        } else {
            // Track click: jump so the thumb centers on the click, then
            // keep dragging from its middle.
            self.grab = Some(thumb_size / 2);
            let track_pos = (y - self.rect.y).saturating_sub(thumb_size / 2);
            let offset = view.scrollbar().offset_at(track_pos, track);
            debug!("track click at row {y} -> offset {offset}");
            Some(ViewEvent::ScrollbarDragged { offset })
        }
    }

    /// The scrollbar occupies the rightmost column of the widget.
    fn on_scrollbar(&self, x: u16, y: u16) -> bool {
        self.rect.width > 0
            && x == self.rect.right() - 1
            && y >= self.rect.y
            && y < self.rect.bottom()
    }
}
