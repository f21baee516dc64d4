// Timer seam: components schedule through `Scheduler` so the cancel-on-drop
// rules can be exercised without a browser.

use gloo::timers::callback::{Interval, Timeout};

pub trait Scheduler {
    /// Cancels the one-shot when dropped.
    type Once;
    /// Cancels the recurring task when dropped.
    type Every;

    fn after(&self, millis: u32, task: Box<dyn FnOnce()>) -> Self::Once;

    fn every(&self, millis: u32, task: Box<dyn FnMut()>) -> Self::Every;
}

/// `setTimeout` / `setInterval` through gloo.
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Once = Timeout;
    type Every = Interval;

    fn after(&self, millis: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(millis, task)
    }

    fn every(&self, millis: u32, task: Box<dyn FnMut()>) -> Interval {
        Interval::new(millis, task)
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::Scheduler;

    type OnceSlot = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;
    type EverySlot = Rc<RefCell<Option<Box<dyn FnMut()>>>>;

    /// Queues tasks until the test fires them. Dropping a handle empties its
    /// slot, the same way clearing a browser timer does.
    #[derive(Default)]
    pub struct ManualScheduler {
        once: RefCell<Vec<(u32, OnceSlot)>>,
        every: RefCell<Vec<(u32, EverySlot)>>,
    }

    pub struct OnceHandle(OnceSlot);

    impl Drop for OnceHandle {
        fn drop(&mut self) {
            self.0.borrow_mut().take();
        }
    }

    pub struct EveryHandle(EverySlot);

    impl Drop for EveryHandle {
        fn drop(&mut self) {
            self.0.borrow_mut().take();
        }
    }

    impl ManualScheduler {
        pub fn once_delays(&self) -> Vec<u32> {
            self.once.borrow().iter().map(|(ms, _)| *ms).collect()
        }

        pub fn every_periods(&self) -> Vec<u32> {
            self.every.borrow().iter().map(|(ms, _)| *ms).collect()
        }

        /// Runs every one-shot that is still live; returns how many ran.
        pub fn fire_once(&self) -> usize {
            let tasks: Vec<_> = self
                .once
                .borrow()
                .iter()
                .filter_map(|(_, slot)| slot.borrow_mut().take())
                .collect();
            let ran = tasks.len();
            tasks.into_iter().for_each(|task| task());
            ran
        }

        /// One period of every live recurring task; returns how many ran.
        pub fn tick_every(&self) -> usize {
            let slots: Vec<_> = self.every.borrow().iter().map(|(_, s)| s.clone()).collect();
            let mut ran = 0;
            for slot in slots {
                if let Some(task) = slot.borrow_mut().as_mut() {
                    task();
                    ran += 1;
                }
            }
            ran
        }
    }

    impl Scheduler for ManualScheduler {
        type Once = OnceHandle;
        type Every = EveryHandle;

        fn after(&self, millis: u32, task: Box<dyn FnOnce()>) -> OnceHandle {
            let slot: OnceSlot = Rc::new(RefCell::new(Some(task)));
            self.once.borrow_mut().push((millis, slot.clone()));
            OnceHandle(slot)
        }

        fn every(&self, millis: u32, task: Box<dyn FnMut()>) -> EveryHandle {
            let slot: EverySlot = Rc::new(RefCell::new(Some(task)));
            self.every.borrow_mut().push((millis, slot.clone()));
            EveryHandle(slot)
        }
    }
}
