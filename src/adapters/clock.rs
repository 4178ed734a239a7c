use crate::domain::ports::Clock;
use chrono::{Datelike, Local};

/// Wall-clock year source used by real mounts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}
