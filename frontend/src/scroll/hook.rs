use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, KeyboardEvent, WheelEvent};
use yew::prelude::*;

use super::input::KeyIntent;
use super::listener::WindowListener;
use super::scheduler::BrowserScheduler;
use super::{Direction, ScrollController};
use crate::config::ScrollConfig;

/// What a view gets back from [`use_full_page_scroll`].
#[derive(Clone)]
pub struct FullPageScroll {
    pub current_index: usize,
    controller: Rc<ScrollController<BrowserScheduler>>,
}

impl PartialEq for FullPageScroll {
    fn eq(&self, other: &Self) -> bool {
        self.current_index == other.current_index && Rc::ptr_eq(&self.controller, &other.controller)
    }
}

impl FullPageScroll {
    pub fn is_last(&self) -> bool {
        self.current_index == self.controller.last_index()
    }

    /// Indicator clicks. Bypasses wheel coalescing but not the lock.
    pub fn on_select(&self) -> Callback<usize> {
        let controller = self.controller.clone();
        Callback::from(move |index: usize| {
            controller.go_to(index);
        })
    }

    pub fn on_move(&self) -> Callback<Direction> {
        let controller = self.controller.clone();
        Callback::from(move |direction: Direction| {
            controller.request_move(direction);
        })
    }
}

/// Drives a full-page scroll from window wheel and keydown events.
///
/// The listeners live as long as the calling component. Unmounting removes
/// them and cancels any pending coalesce or lock timer.
#[hook]
pub fn use_full_page_scroll(config: ScrollConfig) -> FullPageScroll {
    let current = use_state_eq(|| 0usize);

    let controller = {
        let setter = current.setter();
        use_memo(
            move |config: &ScrollConfig| {
                ScrollController::new(
                    *config,
                    BrowserScheduler,
                    Callback::from(move |index| setter.set(index)),
                )
            },
            config,
        )
    };

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                let listeners = register_listeners(controller.clone());
                move || {
                    drop(listeners);
                    controller.teardown();
                }
            },
            config,
        );
    }

    FullPageScroll {
        current_index: *current,
        controller,
    }
}

fn register_listeners(controller: Rc<ScrollController<BrowserScheduler>>) -> Vec<WindowListener> {
    let Some(window) = web_sys::window() else {
        warn!("no window, full-page scrolling disabled");
        return Vec::new();
    };

    let mut listeners = Vec::with_capacity(2);

    let wheel_controller = controller.clone();
    listeners.extend(WindowListener::new(&window, "wheel", move |event: WheelEvent| {
        wheel_controller.on_wheel(event.delta_y());
    }));

    listeners.extend(WindowListener::new(&window, "keydown", move |event: KeyboardEvent| {
        if typing_in_input(&event) {
            return;
        }
        if let Some(intent) = KeyIntent::from_key(&event.key()) {
            event.prevent_default();
            intent.dispatch(&controller);
        }
    }));

    listeners
}

fn typing_in_input(event: &KeyboardEvent) -> bool {
    event
        .target()
        .map_or(false, |target| target.dyn_ref::<HtmlInputElement>().is_some())
}
