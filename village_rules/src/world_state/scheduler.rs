//! Tick-based scheduler for work that must run on a later tick.

use serde::{Deserialize, Serialize};

/// Runs queued tasks once their delay (in ticks) has elapsed.
///
/// Tasks are plain data; whoever drains the scheduler decides how to run them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scheduler<T> {
    current_tick: u64,
    queue: Vec<ScheduledTask<T>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScheduledTask<T> {
    due_tick: u64,
    task: T,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            current_tick: 0,
            queue: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to run `delay_ticks` ticks from now. A delay of zero runs
    /// on the next advance.
    pub fn schedule(&mut self, delay_ticks: u64, task: T) {
        self.queue.push(ScheduledTask {
            due_tick: self.current_tick + delay_ticks.max(1),
            task,
        });
    }

    /// Advance one tick and return every task now due, in scheduling order.
    pub fn advance(&mut self) -> Vec<T> {
        self.current_tick += 1;
        let now = self.current_tick;

        let (due, pending): (Vec<_>, Vec<_>) =
            self.queue.drain(..).partition(|entry| entry.due_tick <= now);
        self.queue = pending;

        due.into_iter().map(|entry| entry.task).collect()
    }

    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}
