use std::sync::atomic::{AtomicBool, Ordering};

/// Coarse "properties changed" flag read by the replication pass
///
/// Every property setter marks it; the replication pass consumes it. The
/// consume is a single atomic swap so a mutation racing a flush is never lost:
/// it either lands before the swap (and is flushed) or after (and stays set).
#[derive(Debug, Default)]
pub struct DirtyFlag {
    dirty: AtomicBool,
}

impl DirtyFlag {
    /// A clean flag
    pub fn new() -> Self {
        Self {
            dirty: AtomicBool::new(false),
        }
    }

    #[inline]
    pub fn mark(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Return whether the flag was set and clear it
    #[inline]
    pub fn consume_and_clear(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }
}

impl Clone for DirtyFlag {
    fn clone(&self) -> Self {
        Self {
            dirty: AtomicBool::new(self.is_dirty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_starts_clean() {
        assert!(!DirtyFlag::new().is_dirty());
        assert!(!DirtyFlag::default().is_dirty());
    }

    #[test]
    fn test_mark_then_consume() {
        let flag = DirtyFlag::new();
        flag.mark();
        flag.mark();
        assert!(flag.is_dirty());
        assert!(flag.consume_and_clear());
        assert!(!flag.is_dirty());
        assert!(!flag.consume_and_clear());
    }

    #[test]
    fn test_concurrent_marks_are_not_lost() {
        let flag = Arc::new(DirtyFlag::new());
        let writer = {
            let flag = Arc::clone(&flag);
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    flag.mark();
                }
            })
        };

        let mut observed = 0;
        for _ in 0..1000 {
            if flag.consume_and_clear() {
                observed += 1;
            }
        }
        writer.join().expect("writer thread panicked");
        if flag.consume_and_clear() {
            observed += 1;
        }

        // The final mark must be observed by someone
        assert!(observed >= 1);
        assert!(!flag.is_dirty());
    }
}
