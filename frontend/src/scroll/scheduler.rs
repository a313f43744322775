use gloo_timers::callback::Timeout;

/// Something that can run a callback once after a delay.
///
/// Dropping the returned handle cancels the callback if it has not fired
/// yet. Dropping a handle whose callback already ran is a no-op.
pub trait Scheduler {
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` backed scheduler used in the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

#[cfg(test)]
pub mod manual {
    //! Virtual clock for driving timer based code from tests.

    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::Scheduler;

    struct Pending {
        id: u64,
        due: u64,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: Cell<u64>,
        next_id: Cell<u64>,
        queue: RefCell<Vec<Pending>>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<Clock>,
    }

    pub struct ManualHandle {
        id: u64,
        clock: Rc<Clock>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.clock.queue.borrow_mut().retain(|p| p.id != self.id);
        }
    }

    impl ManualScheduler {
        pub fn now(&self) -> u64 {
            self.clock.now.get()
        }

        pub fn pending(&self) -> usize {
            self.clock.queue.borrow().len()
        }

        /// Moves the clock forward, firing due callbacks in deadline order.
        pub fn advance(&self, ms: u64) {
            let target = self.clock.now.get() + ms;
            loop {
                let next = {
                    let mut queue = self.clock.queue.borrow_mut();
                    let earliest = queue
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.id))
                        .map(|(i, _)| i);
                    earliest.map(|i| queue.remove(i))
                };
                match next {
                    Some(pending) => {
                        self.clock.now.set(pending.due);
                        (pending.callback)();
                    }
                    None => break,
                }
            }
            self.clock.now.set(target);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let id = self.clock.next_id.get();
            self.clock.next_id.set(id + 1);
            self.clock.queue.borrow_mut().push(Pending {
                id,
                due: self.clock.now.get() + u64::from(delay_ms),
                callback,
            });
            ManualHandle {
                id,
                clock: self.clock.clone(),
            }
        }
    }
}
