use chrono::Utc;

use crate::model::task::TaskId;

pub type Clock = Box<dyn Fn() -> u64>;

/// Hands out strictly increasing ids.
///
/// Ids follow the millisecond clock when it is ahead, so they stay comparable
/// with timestamp ids already on disk, but two calls within the same tick (or
/// after the clock steps back) still get distinct values.
pub struct IdSequence {
    last: u64,
    clock: Clock,
}

impl IdSequence {
    pub fn new(floor: u64) -> Self {
        Self::with_clock(floor, Box::new(system_millis))
    }

    pub fn with_clock(floor: u64, clock: Clock) -> Self {
        Self { last: floor, clock }
    }

    /// `None` once the id space is used up.
    pub fn next_id(&mut self) -> Option<TaskId> {
        let next = (self.clock)().max(self.last.checked_add(1)?);
        self.last = next;
        Some(TaskId(next))
    }

    pub fn last(&self) -> u64 {
        self.last
    }
}

fn system_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}
