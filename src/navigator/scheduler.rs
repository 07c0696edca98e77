// SPDX-License-Identifier: MPL-2.0
//! Delayed tasks on a virtual millisecond clock.
//!
//! The navigator never sleeps. Every delayed action (settling the incoming
//! panel, releasing the animation lock, firing a debounced wheel event) is an
//! entry here, and the host decides when time moves forward by calling
//! [`Scheduler::pop_due`] with the current clock value.

/// Handle returned by [`Scheduler::schedule`], used for cancellation.
///
/// Handles increase monotonically, so they also encode insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Work the navigator defers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Task {
    /// Bring the incoming panel to its centred, opaque resting state.
    SettleIncoming { section: usize },
    /// Clear the animation lock so the next transition may start.
    ReleaseLock,
    /// Last wheel event of a burst; `delta_y` uses the browser sign convention.
    WheelFire { delta_y: f32 },
}

/// A task with its due time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scheduled {
    pub handle: TimerHandle,
    pub due_ms: u64,
    pub task: Task,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    entries: Vec<Scheduled>,
    next_id: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `task` to run once the clock reaches `due_ms`.
    pub fn schedule(&mut self, due_ms: u64, task: Task) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Scheduled {
            handle,
            due_ms,
            task,
        });
        handle
    }

    /// Drops a pending task. Returns `false` if it already ran or never existed.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        self.entries.len() != before
    }

    /// Removes and returns the earliest task due at or before `now_ms`.
    ///
    /// Ties on the due time are broken by insertion order.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Scheduled> {
        let position = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due_ms <= now_ms)
            .min_by_key(|(_, entry)| (entry.due_ms, entry.handle))
            .map(|(position, _)| position)?;
        Some(self.entries.swap_remove(position))
    }

    /// Earliest pending due time, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|entry| entry.due_ms).min()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
