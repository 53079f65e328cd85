use std::ops::Range;

use log::debug;

use crate::event::ViewEvent;
use crate::label::Label;
use crate::layout::Rect;
use crate::scrollbar::Scrollbar;

/// A fixed-size viewport onto a vertically stacked content area that may
/// be taller than the viewport, with a scrollbar kept consistent with the
/// content's actual extent and the current scroll offset.
///
/// All geometry is maintained eagerly: every content mutation recomputes
/// the bounding box and re-syncs the scrollbar in the same call, so the
/// scrollbar range is never stale when a drag event arrives. Out-of-range
/// requests are corrected by clamping, never rejected.
#[derive(Debug, Default)]
pub struct ScrollView {
    width: u16,
    height: u16,
    scroll_y: u16,
    children: Vec<Label>,
    child_rects: Vec<Rect>,
    content: Rect,
    scrollbar: Scrollbar,
}

impl ScrollView {
    /// An empty view: no children, offset 0, scrollbar bound to the
    /// viewport with an empty range.
    pub fn new(width: u16, height: u16) -> Self {
        let mut view = Self {
            width,
            height,
            ..Default::default()
        };
        view.scrollbar.sync(0, height, 0);
        view
    }

    /// Append a child to the content area. Recomputes the bounding box and
    /// updates the scrollbar range before returning.
    pub fn add_child(&mut self, label: Label) {
        self.children.push(label);
        self.on_content_resized();
    }

    /// Remove the child at `index`, shrinking the content area. A
    /// non-existent index is a no-op, not an error.
    pub fn remove_child(&mut self, index: usize) -> Option<Label> {
        if index >= self.children.len() {
            return None;
        }
        let removed = self.children.remove(index);
        self.on_content_resized();
        Some(removed)
    }

    /// Recompute the content bounding box as the union of all child
    /// extents, then clamp the scroll offset against the new geometry and
    /// re-sync the scrollbar. Returns whether anything observable changed;
    /// calling again without an intervening mutation changes nothing.
    pub fn on_content_resized(&mut self) -> bool {
        let content_changed = self.recompute_bounding_box();
        let clamped = self.clamp_offset();
        self.sync_scrollbar();
        content_changed || clamped
    }

    /// Set the scroll offset from a scrollbar drag. The requested offset
    /// is clamped to the valid range; user drags routinely overshoot and
    /// are silently corrected.
    pub fn on_scrollbar_dragged(&mut self, requested: u16) -> bool {
        let clamped = requested.min(self.max_scroll());
        if clamped != requested {
            debug!("drag offset {requested} clamped to {clamped}");
        }
        self.set_offset(clamped)
    }

    /// Scroll by a signed number of rows (wheel input), clamped to the
    /// valid range at both ends.
    pub fn scroll_by(&mut self, delta: i16) -> bool {
        let target = (self.scroll_y as i32 + delta as i32).clamp(0, self.max_scroll() as i32);
        self.set_offset(target as u16)
    }

    /// The viewport itself changed size. Content geometry is unaffected,
    /// but the valid offset range shrinks or grows with the viewport, so
    /// the offset is re-clamped and the scrollbar re-synced.
    pub fn on_viewport_resized(&mut self, width: u16, height: u16) -> bool {
        let resized = width != self.width || height != self.height;
        self.width = width;
        self.height = height;
        let clamped = self.clamp_offset();
        self.sync_scrollbar();
        if resized {
            debug!("viewport resized to {width}x{height}");
        }
        resized || clamped
    }

    /// Dispatch a typed event payload. Returns whether any geometry
    /// changed, so the host knows to redraw the clipped region.
    pub fn handle(&mut self, event: &ViewEvent) -> bool {
        match *event {
            ViewEvent::ContentResized { area } => {
                // The host's observation is advisory; the child list is
                // the authoritative source for the bounding box.
                debug!("content resize reported as {area:?}");
                self.on_content_resized()
            }
            ViewEvent::ScrollbarDragged { offset } => self.on_scrollbar_dragged(offset),
            ViewEvent::WheelScrolled { delta } => self.scroll_by(delta),
            ViewEvent::ViewportResized { width, height } => self.on_viewport_resized(width, height),
        }
    }

    /// The rectangle driving the scrollbar range:
    /// `(0, 0, content_width, content_height)`.
    pub fn scroll_region(&self) -> Rect {
        Rect::from_size(self.content.width, self.content.height)
    }

    pub fn scroll_y(&self) -> u16 {
        self.scroll_y
    }

    pub fn viewport_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn content_size(&self) -> (u16, u16) {
        (self.content.width, self.content.height)
    }

    pub fn max_scroll(&self) -> u16 {
        self.content.height.saturating_sub(self.height)
    }

    pub fn is_overflowing(&self) -> bool {
        self.content.height > self.height
    }

    pub fn children(&self) -> &[Label] {
        &self.children
    }

    /// Each child's rectangle in content coordinates, matching the cached
    /// bounding box.
    pub fn child_rects(&self) -> &[Rect] {
        &self.child_rects
    }

    pub fn scrollbar(&self) -> &Scrollbar {
        &self.scrollbar
    }

    /// The content rows currently inside the viewport: the placement of
    /// the content surface's visible window.
    pub fn visible_rows(&self) -> Range<u16> {
        let start = self.scroll_y;
        let end = (self.scroll_y.saturating_add(self.height)).min(self.content.height);
        start..end.max(start)
    }

    /// Stack children from row 0 and take the union of their extents.
    /// Returns whether the bounding box moved.
    fn recompute_bounding_box(&mut self) -> bool {
        let mut rects = Vec::with_capacity(self.children.len());
        let mut bounds = Rect::default();
        let mut y = 0u16;

        for child in &self.children {
            let rect = Rect::new(0, y, child.width(), child.rows());
            bounds = bounds.union(rect);
            y = y.saturating_add(child.rows());
            rects.push(rect);
        }
        // Zero-width children have degenerate rects the union skips, but
        // they still occupy their rows.
        bounds.height = bounds.height.max(y);

        let changed = bounds != self.content || rects != self.child_rects;
        if changed {
            debug!(
                "bounding box {}x{} -> {}x{} ({} children)",
                self.content.width,
                self.content.height,
                bounds.width,
                bounds.height,
                self.children.len()
            );
        }
        self.content = bounds;
        self.child_rects = rects;
        changed
    }

    fn clamp_offset(&mut self) -> bool {
        let max = self.max_scroll();
        if self.scroll_y > max {
            debug!("offset {} clamped to {} after shrink", self.scroll_y, max);
            self.scroll_y = max;
            true
        } else {
            false
        }
    }

    fn set_offset(&mut self, offset: u16) -> bool {
        let changed = offset != self.scroll_y;
        self.scroll_y = offset;
        self.sync_scrollbar();
        changed
    }

    fn sync_scrollbar(&mut self) {
        self.scrollbar
            .sync(self.content.height, self.height, self.scroll_y);
    }
}
