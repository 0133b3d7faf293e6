//! Note id assignment.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use notes_core::NoteId;

/// Issues note ids from creation timestamps.
///
/// Ids are millisecond timestamps, bumped past the last issued value so that
/// one generator never hands out the same id twice, even within a millisecond
/// or across a backwards clock step. Generators in different processes are
/// not coordinated.
#[derive(Debug, Default)]
pub struct NoteIdGenerator {
    last: AtomicU64,
}

impl NoteIdGenerator {
    /// Create a generator that has issued nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the id for a note created at `at`.
    pub fn issue(&self, at: DateTime<Utc>) -> NoteId {
        let now = u64::try_from(at.timestamp_millis()).unwrap_or(0);
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return NoteId::from_millis(next),
                Err(current) => last = current,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn millis(id: &NoteId) -> u64 {
        id.as_str().parse().unwrap()
    }

    #[test]
    fn test_id_is_creation_millis() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let id = NoteIdGenerator::new().issue(at);
        assert_eq!(id.as_str(), "1700000000123");
    }

    #[test]
    fn test_same_millisecond_still_increases() {
        let ids = NoteIdGenerator::new();
        let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let a = ids.issue(at);
        let b = ids.issue(at);
        let c = ids.issue(at);
        assert_eq!(millis(&b), millis(&a) + 1);
        assert_eq!(millis(&c), millis(&b) + 1);
    }

    #[test]
    fn test_clock_step_back_does_not_repeat() {
        let ids = NoteIdGenerator::new();
        let a = ids.issue(Utc.timestamp_millis_opt(2_000).unwrap());
        let b = ids.issue(Utc.timestamp_millis_opt(1_000).unwrap());
        assert!(millis(&b) > millis(&a));
    }

    #[test]
    fn test_concurrent_issue_is_unique() {
        let ids = Arc::new(NoteIdGenerator::new());
        let at = Utc::now();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = ids.clone();
                std::thread::spawn(move || (0..100).map(|_| ids.issue(at)).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<NoteId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let total = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), total);
    }
}
