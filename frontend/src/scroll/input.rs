use super::scheduler::Scheduler;
use super::{Direction, ScrollController};

/// What a key press asks the controller to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyIntent {
    Move(Direction),
    First,
    Last,
}

impl KeyIntent {
    /// Maps a `KeyboardEvent.key` value. Unmapped keys return `None` and must
    /// be left to the browser.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "PageDown" => Some(KeyIntent::Move(Direction::Forward)),
            "ArrowUp" | "PageUp" => Some(KeyIntent::Move(Direction::Backward)),
            "Home" => Some(KeyIntent::First),
            "End" => Some(KeyIntent::Last),
            _ => None,
        }
    }

    pub fn dispatch<S: Scheduler + 'static>(self, controller: &ScrollController<S>) -> bool {
        match self {
            KeyIntent::Move(direction) => controller.request_move(direction),
            KeyIntent::First => controller.go_to(0),
            KeyIntent::Last => controller.go_to(controller.last_index()),
        }
    }
}
