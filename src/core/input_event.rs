//! Input deltas polled from the display each tick.

/// Accumulated input since the previous poll.
///
/// Notes:
/// - `dx`/`dy` are movement deltas (encoder detents); positive `dy` is "down"/"forward".
/// - `select`/`cancel` are edges: true at most once per discrete press.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct InputEvent {
    pub dx: i32,
    pub dy: i32,
    pub select: bool,
    pub cancel: bool,
}

impl InputEvent {
    pub fn new(dx: i32, dy: i32, select: bool, cancel: bool) -> Self {
        Self {
            dx,
            dy,
            select,
            cancel,
        }
    }

    pub fn scroll(dy: i32) -> Self {
        Self {
            dy,
            ..Self::default()
        }
    }

    pub fn select() -> Self {
        Self {
            select: true,
            ..Self::default()
        }
    }

    pub fn cancel() -> Self {
        Self {
            cancel: true,
            ..Self::default()
        }
    }

    /// True when nothing happened since the last poll.
    pub fn is_empty(&self) -> bool {
        self.dx == 0 && self.dy == 0 && !self.select && !self.cancel
    }

    /// Fold a later event into this one, as a display accumulating between polls would.
    pub fn merge(&mut self, other: InputEvent) {
        self.dx = self.dx.saturating_add(other.dx);
        self.dy = self.dy.saturating_add(other.dy);
        self.select |= other.select;
        self.cancel |= other.cancel;
    }
}

/// Which delta moves focus while no component holds capture.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

impl Axis {
    pub fn delta(self, event: &InputEvent) -> i32 {
        match self {
            Axis::Horizontal => event.dx,
            Axis::Vertical => event.dy,
        }
    }
}
