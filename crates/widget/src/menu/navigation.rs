//! Keyboard navigation between items and lists
use crate::core::Shell;
use crate::core::time::Instant;
use crate::menu::tree::{ListKey, NodeKey};
use crate::menu::widget::{Menu, Origin};

impl<Message> Menu<Message>
where
    Message: Clone,
{
    /// Focuses the next item of the active menu, wrapping to the first one.
    pub fn next(&mut self, now: Instant, shell: &mut Shell<'_, Message>) {
        self.tick(now, shell);

        let items = self.items(self.state.active_menu);

        let target = match self.position_of(&items) {
            Some(index) => items.get(index + 1).or(items.first()),
            None => items.first(),
        };

        if let Some(target) = target.copied() {
            self.focus(target, Origin::Keyboard, now, shell);
        }
    }

    /// Focuses the previous item of the active menu, wrapping to the last one.
    pub fn previous(&mut self, now: Instant, shell: &mut Shell<'_, Message>) {
        self.tick(now, shell);

        let items = self.items(self.state.active_menu);

        let target = match self.position_of(&items) {
            Some(index) => index
                .checked_sub(1)
                .and_then(|index| items.get(index))
                .or(items.last()),
            None => items.last(),
        };

        if let Some(target) = target.copied() {
            self.focus(target, Origin::Keyboard, now, shell);
        }
    }

    /// Moves the focus one page down.
    ///
    /// Without a scrollbar, this jumps to the last item. From the last item
    /// it wraps to the first one.
    pub fn next_page(&mut self, now: Instant, shell: &mut Shell<'_, Message>) {
        self.tick(now, shell);

        let list = self.state.active_menu;
        let items = self.items(list);

        let target = match self.position_of(&items) {
            Some(index) if index + 1 < items.len() => {
                if self.tree.has_scroll(list) {
                    let base = self.tree.nodes[items[index]].bounds.y;
                    let height = self.tree.lists[list].size.height;

                    items[index + 1..]
                        .iter()
                        .find(|item| self.tree.nodes[**item].bounds.y - base - height >= 0.0)
                        .or(items.last())
                } else {
                    items.last()
                }
            }
            _ => items.first(),
        };

        if let Some(target) = target.copied() {
            self.focus(target, Origin::Keyboard, now, shell);
        }
    }

    /// Moves the focus one page up.
    ///
    /// Without a scrollbar, this jumps to the first item. From the first item
    /// it wraps to the last one.
    pub fn previous_page(&mut self, now: Instant, shell: &mut Shell<'_, Message>) {
        self.tick(now, shell);

        let list = self.state.active_menu;
        let items = self.items(list);

        let target = match self.position_of(&items) {
            Some(index) if index > 0 => {
                if self.tree.has_scroll(list) {
                    let base = self.tree.nodes[items[index]].bounds.y;
                    let height = self.tree.lists[list].size.height;

                    items[..index]
                        .iter()
                        .rev()
                        .find(|item| self.tree.nodes[**item].bounds.y - base + height <= 0.0)
                        .or(items.first())
                } else {
                    items.first()
                }
            }
            _ => items.last(),
        };

        if let Some(target) = target.copied() {
            self.focus(target, Origin::Keyboard, now, shell);
        }
    }

    /// Closes the list of the active item and focuses the item owning it.
    ///
    /// Returns false if the active item is in the root menu.
    pub fn left(&mut self, now: Instant, shell: &mut Shell<'_, Message>) -> bool {
        self.tick(now, shell);

        let Some(active) = self.state.active else {
            return false;
        };

        let list = self.tree.nodes[active].list;

        let Some(owner) = self.tree.lists[list].parent else {
            return false;
        };

        if !self.is_item(owner) {
            return false;
        }

        self.focus(owner, Origin::Keyboard, now, shell);
        self.hide_list(list, shell);

        true
    }

    /// Opens the submenu of the active item and focuses its first item.
    ///
    /// Returns false if there is no submenu to enter.
    pub fn right(&mut self, now: Instant, shell: &mut Shell<'_, Message>) -> bool {
        self.tick(now, shell);

        let Some(submenu) = self
            .state
            .active
            .and_then(|active| self.tree.nodes[active].submenu)
        else {
            return false;
        };

        let Some(first) = self.first_item(submenu) else {
            return false;
        };

        self.open_submenu(submenu, shell);
        self.focus(first, Origin::Keyboard, now, shell);

        true
    }

    /// Returns true if the active item is the first item of its list.
    pub fn is_first(&self) -> bool {
        self.state.active.is_some_and(|active| {
            let list = self.tree.nodes[active].list;
            self.items(list).first() == Some(&active)
        })
    }

    /// Returns true if the active item is the last item of its list.
    pub fn is_last(&self) -> bool {
        self.state.active.is_some_and(|active| {
            let list = self.tree.nodes[active].list;
            self.items(list).last() == Some(&active)
        })
    }

    /// Returns the items of a list, in order.
    pub(in crate::menu) fn items(&self, list: ListKey) -> Vec<NodeKey> {
        self.tree.list(list).map_or_else(Vec::new, |list| {
            list.children
                .iter()
                .copied()
                .filter(|child| self.is_item(*child))
                .collect()
        })
    }

    pub(in crate::menu) fn first_item(&self, list: ListKey) -> Option<NodeKey> {
        self.items(list).first().copied()
    }

    fn position_of(&self, items: &[NodeKey]) -> Option<usize> {
        let active = self.state.active?;

        items.iter().position(|item| *item == active)
    }
}
