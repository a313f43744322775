//! Full-page section scrolling.
//!
//! `ScrollController` owns the index of the visible section and turns wheel,
//! keyboard and indicator input into at most one transition per cool-down.
//! Requests that arrive while a transition is running, or that would not
//! change the index, are dropped without any notification.

pub mod hook;
pub mod input;
pub mod listener;
pub mod scheduler;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::debug;
use yew::Callback;

use crate::config::ScrollConfig;
use scheduler::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Sign of a vertical wheel delta. Zero (and NaN) is no gesture.
    pub fn from_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Direction::Forward)
        } else if delta_y < 0.0 {
            Some(Direction::Backward)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub current_index: usize,
    pub locked: bool,
}

pub struct ScrollController<S: Scheduler + 'static> {
    inner: Rc<Inner<S>>,
}

struct Inner<S: Scheduler> {
    section_count: usize,
    coalesce_window_ms: u32,
    transition_lock_ms: u32,
    scheduler: S,
    on_change: Callback<usize>,
    state: Cell<ScrollState>,
    active: Cell<bool>,
    pending_wheel: Cell<Option<Direction>>,
    coalesce_timer: RefCell<Option<S::Handle>>,
    lock_timer: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler + 'static> ScrollController<S> {
    /// A section count of zero is treated as a single section.
    pub fn new(config: ScrollConfig, scheduler: S, on_change: Callback<usize>) -> Self {
        Self {
            inner: Rc::new(Inner {
                section_count: config.section_count.max(1),
                coalesce_window_ms: config.coalesce_window_ms,
                transition_lock_ms: config.transition_lock_ms,
                scheduler,
                on_change,
                state: Cell::new(ScrollState::default()),
                active: Cell::new(true),
                pending_wheel: Cell::new(None),
                coalesce_timer: RefCell::new(None),
                lock_timer: RefCell::new(None),
            }),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> ScrollState {
        self.inner.state.get()
    }

    pub fn current_index(&self) -> usize {
        self.inner.state.get().current_index
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.inner.state.get().locked
    }

    #[cfg(test)]
    pub fn section_count(&self) -> usize {
        self.inner.section_count
    }

    pub fn last_index(&self) -> usize {
        self.inner.section_count - 1
    }

    /// Moves one section in `direction`, clamped to the ends of the list.
    /// Returns whether a transition started.
    pub fn request_move(&self, direction: Direction) -> bool {
        self.inner.request_move(direction)
    }

    /// Jumps straight to `index`. Out-of-range indices are ignored.
    pub fn go_to(&self, index: usize) -> bool {
        self.inner.transition_to(index)
    }

    /// Feeds one raw wheel delta into the coalescing window.
    ///
    /// Every non-zero delta restarts the window; once it elapses a single
    /// move is requested in the direction of the last delta seen.
    pub fn on_wheel(&self, delta_y: f64) -> bool {
        let inner = &self.inner;
        if !inner.active.get() {
            return false;
        }
        let Some(direction) = Direction::from_delta(delta_y) else {
            return false;
        };
        inner.pending_wheel.set(Some(direction));

        let weak = Rc::downgrade(inner);
        let handle = inner.scheduler.schedule(
            inner.coalesce_window_ms,
            Box::new(move || with_live(&weak, |inner| inner.flush_wheel())),
        );
        // replacing the previous handle cancels its timer
        inner.coalesce_timer.replace(Some(handle));
        true
    }

    /// Cancels both timers and stops accepting input. Safe to call twice.
    pub fn teardown(&self) {
        let inner = &self.inner;
        if inner.active.replace(false) {
            debug!("scroll controller torn down at section {}", self.current_index());
        }
        inner.pending_wheel.set(None);
        drop(inner.coalesce_timer.take());
        drop(inner.lock_timer.take());
    }
}

impl<S: Scheduler + 'static> Drop for ScrollController<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn with_live<S: Scheduler + 'static>(weak: &Weak<Inner<S>>, f: impl FnOnce(&Rc<Inner<S>>)) {
    if let Some(inner) = weak.upgrade() {
        if inner.active.get() {
            f(&inner);
        }
    }
}

impl<S: Scheduler + 'static> Inner<S> {
    fn request_move(self: &Rc<Self>, direction: Direction) -> bool {
        let current = self.state.get().current_index;
        let target = match direction {
            Direction::Forward => (current + 1).min(self.section_count - 1),
            Direction::Backward => current.saturating_sub(1),
        };
        self.transition_to(target)
    }

    fn transition_to(self: &Rc<Self>, target: usize) -> bool {
        if !self.active.get() {
            return false;
        }
        let state = self.state.get();
        if state.locked {
            debug!("dropping request for section {} while transitioning", target);
            return false;
        }
        if target >= self.section_count || target == state.current_index {
            return false;
        }

        self.state.set(ScrollState {
            current_index: target,
            locked: true,
        });

        let weak = Rc::downgrade(self);
        let handle = self.scheduler.schedule(
            self.transition_lock_ms,
            Box::new(move || with_live(&weak, |inner| inner.unlock())),
        );
        self.lock_timer.replace(Some(handle));

        debug!("section {} -> {}", state.current_index, target);
        self.on_change.emit(target);
        true
    }

    fn unlock(&self) {
        let mut state = self.state.get();
        state.locked = false;
        self.state.set(state);
    }

    fn flush_wheel(self: &Rc<Self>) {
        if let Some(direction) = self.pending_wheel.take() {
            self.request_move(direction);
        }
    }
}
