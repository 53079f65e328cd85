use log::debug;

/// Scrollbar state: the content extent it covers, the current offset into
/// that extent, and the visible extent that drives thumb sizing.
///
/// The bar is a one-way control and a one-way display: drags are mapped
/// back to content offsets with [`offset_at`](Self::offset_at), offset
/// changes move the thumb via [`thumb`](Self::thumb). `sync` keeps all
/// three fields consistent with the owning viewport in a single call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scrollbar {
    range: u16,
    position: u16,
    viewport: u16,
}

impl Scrollbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update range, viewport extent, and position together. The position
    /// is clamped against the new range so the thumb can never point past
    /// the content.
    pub fn sync(&mut self, range: u16, viewport: u16, position: u16) {
        self.range = range;
        self.viewport = viewport;
        self.position = position.min(range.saturating_sub(viewport));
        debug!(
            "scrollbar sync range={} viewport={} position={}",
            self.range, self.viewport, self.position
        );
    }

    pub fn range(&self) -> u16 {
        self.range
    }

    pub fn position(&self) -> u16 {
        self.position
    }

    pub fn viewport(&self) -> u16 {
        self.viewport
    }

    pub fn max_scroll(&self) -> u16 {
        self.range.saturating_sub(self.viewport)
    }

    /// Thumb `(position, size)` on a track of `track` cells.
    ///
    /// Size is proportional to the visible share of the content, at least
    /// one cell; position scales the offset over the remaining track.
    pub fn thumb(&self, track: u16) -> (u16, u16) {
        if track == 0 {
            return (0, 0);
        }

        let size = if self.range > 0 {
            ((self.viewport as u32 * track as u32) / self.range as u32)
                .max(1)
                .min(track as u32) as u16
        } else {
            track
        };

        let max_scroll = self.max_scroll();
        let scroll_range = track - size;
        let pos = if max_scroll > 0 && scroll_range > 0 {
            ((self.position as u32 * scroll_range as u32) / max_scroll as u32)
                .min(scroll_range as u32) as u16
        } else {
            0
        };

        (pos, size)
    }

    /// Inverse of [`thumb`](Self::thumb): map a thumb start position on the
    /// track back to a content offset. Out-of-track positions clamp to the
    /// nearest extreme.
    pub fn offset_at(&self, track_pos: u16, track: u16) -> u16 {
        let (_, size) = self.thumb(track);
        let scroll_range = track.saturating_sub(size);
        if scroll_range == 0 {
            return 0;
        }

        let max_scroll = self.max_scroll();
        let pos = track_pos.min(scroll_range);
        ((pos as u32 * max_scroll as u32) / scroll_range as u32).min(max_scroll as u32) as u16
    }
}
