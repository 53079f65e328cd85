use crate::layout::Rect;

/// Typed event payloads consumed by the widget.
///
/// The host toolkit's raw callbacks stop at the `input`/`terminal` layer;
/// geometry logic only ever sees these, so it can be driven directly in
/// tests without a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// The content area changed size. Carries the occupied rectangle as
    /// observed by the host; the widget recomputes the authoritative
    /// bounding box from its own children.
    ContentResized { area: Rect },
    /// The scrollbar was dragged to an absolute content offset.
    ScrollbarDragged { offset: u16 },
    /// Wheel input over the viewport, in content rows.
    WheelScrolled { delta: i16 },
    /// The viewport itself was resized.
    ViewportResized { width: u16, height: u16 },
}
