//! Delayed actions tied to a session id.
//!
//! Every run start or restart moves to a new session id. Tasks queued under
//! an older id are dropped instead of firing against the new run.

#[derive(Debug, Clone)]
struct ScheduledTask<A> {
    due_ms: u64,
    session_id: u64,
    seq: u64,
    action: A,
}

#[derive(Debug, Clone)]
pub struct Scheduler<A> {
    tasks: Vec<ScheduledTask<A>>,
    session_id: u64,
    next_seq: u64,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            session_id: 0,
            next_seq: 0,
        }
    }

    pub fn session_id(&self) -> u64 {
        self.session_id
    }

    /// Start a new session; everything queued so far becomes stale.
    pub fn begin_session(&mut self) -> u64 {
        self.session_id += 1;
        let stale = self.tasks.len();
        self.tasks.clear();
        if stale > 0 {
            log::debug!("dropped {} stale timers at session {}", stale, self.session_id);
        }
        self.session_id
    }

    /// Queue `action` to fire `delay_ms` after `now_ms` in the current session.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, action: A) {
        self.tasks.push(ScheduledTask {
            due_ms: now_ms.saturating_add(delay_ms),
            session_id: self.session_id,
            seq: self.next_seq,
            action,
        });
        self.next_seq += 1;
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Remove and return actions due at `now_ms`, oldest deadline first.
    /// Tasks from earlier sessions are discarded.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<A> {
        let current = self.session_id;
        self.tasks.retain(|t| t.session_id == current);

        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|t| t.due_ms <= now_ms);
        self.tasks = pending;

        due.sort_by_key(|t| (t.due_ms, t.seq));
        due.into_iter().map(|t| t.action).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0, 300, "c");
        scheduler.schedule(0, 100, "a");
        scheduler.schedule(0, 100, "b");

        assert!(scheduler.drain_due(99).is_empty());
        assert_eq!(scheduler.drain_due(100), vec!["a", "b"]);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.drain_due(1000), vec!["c"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_new_session_cancels_stale_tasks() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0, 100, "restart");
        let id = scheduler.begin_session();
        assert_eq!(id, 1);
        assert!(scheduler.drain_due(10_000).is_empty());

        scheduler.schedule(0, 100, "fresh");
        assert_eq!(scheduler.drain_due(100), vec!["fresh"]);
    }

    #[test]
    fn test_fires_once() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(50, 50, 1u8);
        assert_eq!(scheduler.drain_due(100), vec![1]);
        assert!(scheduler.drain_due(200).is_empty());
    }
}
