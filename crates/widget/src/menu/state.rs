//! Menu state for tracking the active item and the pending deferred actions

use crate::core::Timer;
use crate::core::id::Id;
use crate::core::mouse::Cursor;
use crate::core::time::Instant;
use crate::menu::tree::{ListKey, NodeKey};

/// Mutable interaction state of a [`Menu`](crate::Menu).
#[derive(Debug)]
pub(in crate::menu) struct State {
    /// The focused item; at most one in the whole tree
    pub(in crate::menu) active: Option<NodeKey>,
    /// The list used as context for sibling navigation
    pub(in crate::menu) active_menu: ListKey,
    pub(in crate::menu) active_descendant: Option<Id>,
    pub(in crate::menu) disabled: bool,
    pub(in crate::menu) frozen: bool,
    /// The prefix kept for type-ahead search, lowercase
    pub(in crate::menu) filter: Option<String>,
    pub(in crate::menu) cursor: Cursor,
    pub(in crate::menu) hovered: Option<NodeKey>,
    /// Opens a submenu once the pointer rests on its item
    pub(in crate::menu) open_task: Timer<ListKey>,
    /// Closes the submenus nested in a list
    pub(in crate::menu) close_task: Timer<ListKey>,
    pub(in crate::menu) blur_task: Timer<NodeKey>,
    pub(in crate::menu) filter_task: Timer<()>,
}

impl State {
    pub(in crate::menu) fn new(root: ListKey, disabled: bool, frozen: bool) -> Self {
        Self {
            active: None,
            active_menu: root,
            active_descendant: None,
            disabled,
            frozen,
            filter: None,
            cursor: Cursor::Unavailable,
            hovered: None,
            open_task: Timer::new(),
            close_task: Timer::new(),
            blur_task: Timer::new(),
            filter_task: Timer::new(),
        }
    }

    pub(in crate::menu) fn is_inactive(&self) -> bool {
        self.disabled || self.frozen
    }

    /// Returns the earliest deadline among the pending tasks.
    pub(in crate::menu) fn next_deadline(&self) -> Option<Instant> {
        [
            self.open_task.deadline(),
            self.close_task.deadline(),
            self.blur_task.deadline(),
            self.filter_task.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    pub(in crate::menu) fn cancel_all(&mut self) {
        let _ = self.open_task.cancel();
        let _ = self.close_task.cancel();
        let _ = self.blur_task.cancel();
        let _ = self.filter_task.cancel();
    }
}
