use std::sync::Arc;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicBool, Ordering};

static GLOBAL: LazyLock<LoadLatch> = LazyLock::new(LoadLatch::new);

/// One-way "loading started" flag shared by every component on a page.
///
/// Clones share the flag. Once started it is never reset.
#[derive(Debug, Clone, Default)]
pub struct LoadLatch {
    started: Arc<AtomicBool>,
}

impl LoadLatch {
    /// A fresh, unstarted latch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide latch.
    #[must_use]
    pub fn global() -> Self {
        GLOBAL.clone()
    }

    /// Atomically marks the latch started. Returns `true` only for the caller that won.
    pub fn try_start(&self) -> bool {
        self.started.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_ok()
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_first_caller_wins() {
        let latch = LoadLatch::new();
        assert!(!latch.is_started());
        assert!(latch.try_start());
        assert!(!latch.try_start());
        assert!(latch.clone().is_started());
    }

    #[test]
    fn concurrent_callers_start_it_once() {
        let latch = LoadLatch::new();
        let winners = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|_| {
                    let latch = latch.clone();
                    scope.spawn(move || latch.try_start())
                })
                .collect();
            handles.into_iter().map(|h| h.join().is_ok_and(|won| won)).filter(|won| *won).count()
        });
        assert_eq!(winners, 1);
    }

    #[test]
    fn global_is_shared() {
        assert!(Arc::ptr_eq(&LoadLatch::global().started, &LoadLatch::global().started));
    }
}
