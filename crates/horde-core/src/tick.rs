/// Per-frame input handed down from the game loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    /// Frame counter, used for diagnostics only.
    pub tick: u64,
    /// Elapsed time since the previous frame.
    pub dt_seconds: f32,
}

impl TickContext {
    pub fn new(tick: u64, dt_seconds: f32) -> Self {
        Self { tick, dt_seconds }
    }

    /// Context for the following frame with the same frame time.
    pub fn next(self) -> Self {
        Self {
            tick: self.tick.wrapping_add(1),
            dt_seconds: self.dt_seconds,
        }
    }
}
