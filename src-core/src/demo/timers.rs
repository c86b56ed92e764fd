//! Cancellable scheduled tasks on a caller-supplied millisecond clock.
//!
//! Nothing here reads wall time. The owner passes `now` in, which keeps the
//! walkthrough deterministic under test and lets the browser drive it from
//! `Date.now()`.

pub type Millis = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// What a task does when it fires. Interpreted by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Matching animation reached 100%.
    MatchingComplete,
    /// Leave the matching screen for the results screen.
    AutoAdvance,
    /// Rotate the results carousel.
    AutoRotate,
    /// Finish a like: reset the restaurant decision and open screen 5.
    CommitLike,
}

#[derive(Debug, Clone)]
struct ScheduledTask {
    id: TaskId,
    due: Millis,
    period: Option<Millis>,
    kind: TaskKind,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Millis, kind: TaskKind) -> TaskId {
        self.push(due, None, kind)
    }

    /// First fire at `due`, then every `period` until cancelled.
    pub fn schedule_every(&mut self, due: Millis, period: Millis, kind: TaskKind) -> TaskId {
        self.push(due, Some(period.max(1)), kind)
    }

    fn push(&mut self, due: Millis, period: Option<Millis>, kind: TaskKind) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            id,
            due,
            period,
            kind,
        });
        id
    }

    /// Returns false when the task already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn next_due(&self) -> Option<Millis> {
        self.tasks.iter().map(|t| t.due).min()
    }

    /// Remove and return the earliest task due at or before `now`.
    /// Ties go to the task scheduled first. Repeating tasks are re-armed
    /// one period after their due time and keep their id.
    pub fn pop_due(&mut self, now: Millis) -> Option<(TaskId, TaskKind, Millis)> {
        let idx = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(i, _)| i)?;

        let task = &self.tasks[idx];
        let fired = (task.id, task.kind, task.due);
        let period = task.period;
        match period {
            Some(period) => self.tasks[idx].due += period,
            None => {
                self.tasks.remove(idx);
            }
        }
        Some(fired)
    }
}
