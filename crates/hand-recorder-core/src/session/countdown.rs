/// Outcome of a single countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownTick {
    /// New display value, if the tick changed it.
    pub changed: Option<u32>,
    /// The countdown reached zero and will not tick again until restarted.
    pub finished: bool,
}

/// Cosmetic seconds-remaining display.
///
/// Each tick shows the pending count and then decrements it, so the first
/// tick after a restart leaves the display unchanged and every later tick
/// lowers it by one until it reaches zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    pending: u32,
    displayed: u32,
    running: bool,
}

impl Countdown {
    /// A stopped countdown showing `start`.
    pub fn new(start: u32) -> Self {
        Self {
            pending: start,
            displayed: start,
            running: false,
        }
    }

    /// Show `start` again and resume ticking from it.
    pub fn restart(&mut self, start: u32) {
        self.pending = start;
        self.displayed = start;
        self.running = true;
    }

    /// Advance one period.
    pub fn tick(&mut self) -> CountdownTick {
        if !self.running {
            return CountdownTick {
                changed: None,
                finished: true,
            };
        }

        let shown = self.pending;
        let changed = (shown != self.displayed).then_some(shown);
        self.displayed = shown;

        if self.pending == 0 {
            self.running = false;
        } else {
            self.pending -= 1;
        }

        CountdownTick {
            changed,
            finished: !self.running,
        }
    }

    /// Value currently on display.
    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    /// Whether ticks still have an effect.
    pub fn is_running(&self) -> bool {
        self.running
    }
}
