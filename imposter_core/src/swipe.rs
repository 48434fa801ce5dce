/// Upward drag, in pixels, that opens a card.
pub const THRESH: f32 = 200.0;
/// Displacement is clamped to this many pixels.
pub const MAX: f32 = 260.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeOutcome {
    /// Released at or past the threshold. The card is open.
    Opened,
    /// Released short of the threshold; the overlay snaps back.
    SnappedBack,
    /// Pointer-up without a preceding pointer-down.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwipeState {
    start_y: Option<f32>,
    displacement: f32,
    opened: bool,
}

impl SwipeState {
    pub fn new() -> Self {
        SwipeState::default()
    }

    pub fn displacement(&self) -> f32 {
        self.displacement
    }

    pub fn opened(&self) -> bool {
        self.opened
    }

    pub fn dragging(&self) -> bool {
        self.start_y.is_some()
    }

    pub fn pointer_down(&mut self, y: f32) {
        self.start_y = Some(y);
    }

    /// Screen coordinates grow downwards, so an upward drag is `start - y`.
    pub fn pointer_move(&mut self, y: f32) {
        if let Some(start) = self.start_y {
            self.displacement = (start - y).clamp(0.0, MAX);
        }
    }

    pub fn pointer_up(&mut self) -> SwipeOutcome {
        if self.start_y.take().is_none() {
            return SwipeOutcome::Ignored;
        }
        if self.displacement >= THRESH {
            self.opened = true;
            SwipeOutcome::Opened
        } else {
            self.displacement = 0.0;
            SwipeOutcome::SnappedBack
        }
    }

    /// Overlay offset in percent; presentation only.
    pub fn progress_percent(&self) -> f32 {
        if self.opened {
            return 100.0;
        }
        (self.displacement / MAX * 100.0).min(100.0)
    }

    pub fn reset(&mut self) {
        *self = SwipeState::default();
    }
}
