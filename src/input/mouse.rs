/// Tracks cursor position and whether a camera drag is in progress.
#[derive(Debug, Clone, Default)]
pub(crate) struct DragState {
    pub(crate) mouse_pos: (f32, f32),
    pub(crate) is_dragging: bool,
    /// Set once a cursor position has been observed; until then there is
    /// no baseline to measure a delta from.
    has_position: bool,
}

impl DragState {
    /// Begin a drag from the last known cursor position.
    ///
    /// If no position is known yet, the next cursor event becomes the
    /// baseline and produces no delta.
    pub(crate) fn begin(&mut self) {
        self.is_dragging = true;
    }

    /// End the current drag, if any.
    pub(crate) fn end(&mut self) {
        self.is_dragging = false;
    }

    /// Record a new cursor position and return the delta from the previous
    /// one. The first position ever seen yields a zero delta.
    pub(crate) fn handle_mouse_position(
        &mut self,
        x: f32,
        y: f32,
    ) -> (f32, f32) {
        let delta = if self.has_position {
            (x - self.mouse_pos.0, y - self.mouse_pos.1)
        } else {
            (0.0, 0.0)
        };
        self.mouse_pos = (x, y);
        self.has_position = true;
        delta
    }
}
