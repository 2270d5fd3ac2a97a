//! Timer Ownership
//!
//! A repeating timer belongs to the view that started it. [`TimerGuard`]
//! holds the cancel action and runs it exactly once: on an explicit
//! [`TimerGuard::cancel`] or when the guard is dropped with its owner.

/// Cancels a running timer when dropped
#[must_use = "dropping the guard cancels the timer immediately"]
pub struct TimerGuard<F: FnOnce()> {
    cancel: Option<F>,
}

impl<F: FnOnce()> TimerGuard<F> {
    pub fn new(cancel: F) -> Self {
        Self { cancel: Some(cancel) }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    /// Stop the timer now; later calls and the drop do nothing
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl<F: FnOnce()> Drop for TimerGuard<F> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotator::TitleRotation;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Hand-driven stand-in for a browser interval
    struct ManualInterval {
        running: Rc<Cell<bool>>,
    }

    impl ManualInterval {
        fn start() -> Self {
            Self { running: Rc::new(Cell::new(true)) }
        }

        fn fire(&self, rotation: &RefCell<TitleRotation>) {
            if self.running.get() {
                rotation.borrow_mut().tick();
            }
        }

        fn guard(&self) -> TimerGuard<impl FnOnce()> {
            let running = self.running.clone();
            TimerGuard::new(move || running.set(false))
        }
    }

    fn rotation() -> RefCell<TitleRotation> {
        RefCell::new(TitleRotation::new(vec!["a".to_string(), "b".to_string(), "c".to_string()]).unwrap())
    }

    #[test]
    fn test_dropping_guard_stops_ticks() {
        let rotation = rotation();
        let interval = ManualInterval::start();
        let guard = interval.guard();

        interval.fire(&rotation);
        interval.fire(&rotation);
        assert_eq!(rotation.borrow().current_index(), 2);

        drop(guard);
        interval.fire(&rotation);
        interval.fire(&rotation);
        assert_eq!(rotation.borrow().current_index(), 2);
    }

    #[test]
    fn test_cancel_runs_once() {
        let calls = Cell::new(0);
        {
            let mut guard = TimerGuard::new(|| calls.set(calls.get() + 1));
            assert!(guard.is_active());
            guard.cancel();
            assert!(!guard.is_active());
            guard.cancel();
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_guard_alive_keeps_ticking() {
        let rotation = rotation();
        let interval = ManualInterval::start();
        let _guard = interval.guard();

        for _ in 0..4 {
            interval.fire(&rotation);
        }
        assert_eq!(rotation.borrow().current_index(), 1);
    }
}
