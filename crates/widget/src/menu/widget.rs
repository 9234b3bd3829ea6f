//! The [`Menu`] widget and its focus state machine

use crate::core::event::Event;
use crate::core::id::{self, Id};
use crate::core::keyboard::{self, key::Named};
use crate::core::mouse::{self, Cursor};
use crate::core::time::Instant;
use crate::core::{Point, Rectangle, Shell, window};
use crate::menu::position::{Placement, Position};
use crate::menu::settings::Settings;
use crate::menu::state::State;
use crate::menu::tree::{Entry, ListKey, Node, NodeKey, Tree};

use rustc_hash::FxHashSet;

use std::cmp::Reverse;
use std::rc::Rc;

/// Suffix of the id given to an active item without an explicit one.
const ACTIVE_DESCENDANT: &str = "activedescendant";

/// What caused an item to gain focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The pointer moved over the item.
    ///
    /// Items owning a submenu open it after the configured delay.
    Pointer,
    /// Keyboard navigation or an API call.
    Keyboard,
}

/// A hierarchical, keyboard-navigable menu.
///
/// The [`Menu`] owns its [`Tree`] and tracks a single active item. It is fed
/// with host events through [`Menu::update`] and talks back through a
/// [`Shell`]: notifications are published as messages, and the next redraw
/// is requested at the earliest pending deadline so deferred actions fire
/// on time.
#[allow(missing_debug_implementations)]
pub struct Menu<Message> {
    pub(in crate::menu) tree: Tree,
    pub(in crate::menu) id: Id,
    pub(in crate::menu) settings: Settings,
    pub(in crate::menu) position: Position,
    pub(in crate::menu) state: State,
    on_focus: Option<Box<dyn Fn(NodeKey) -> Message>>,
    on_blur: Option<Message>,
    on_select: Option<Box<dyn Fn(NodeKey) -> Message>>,
}

impl<Message> Menu<Message>
where
    Message: Clone,
{
    /// Creates a new [`Menu`] over the given [`Tree`].
    ///
    /// Ids are generated by a generator owned by this [`Menu`]; use
    /// [`Menu::with_generator`] to share one between several menus.
    pub fn new(tree: Tree, settings: Settings) -> Self {
        Self::with_generator(tree, settings, &mut id::Generator::new())
    }

    /// Creates a new [`Menu`], drawing its id from the given generator
    /// when the [`Settings`] do not provide one.
    pub fn with_generator(tree: Tree, settings: Settings, ids: &mut id::Generator) -> Self {
        let id = settings
            .id
            .as_deref()
            .map_or_else(|| ids.unique(), Id::from);

        let state = State::new(tree.root(), settings.disabled, settings.frozen);

        let mut menu = Self {
            tree,
            id,
            position: Position::Static(settings.position),
            settings,
            state,
            on_focus: None,
            on_blur: None,
            on_select: None,
        };

        menu.refresh();
        menu
    }

    /// Sets the message produced when an item gains focus.
    #[must_use]
    pub fn on_focus(mut self, on_focus: impl Fn(NodeKey) -> Message + 'static) -> Self {
        self.on_focus = Some(Box::new(on_focus));
        self
    }

    /// Sets the message produced when the active item loses focus.
    #[must_use]
    pub fn on_blur(mut self, on_blur: Message) -> Self {
        self.on_blur = Some(on_blur);
        self
    }

    /// Sets the message produced when an item is selected.
    #[must_use]
    pub fn on_select(mut self, on_select: impl Fn(NodeKey) -> Message + 'static) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    /// Sets the positioning strategy of submenus.
    #[must_use]
    pub fn position(mut self, position: impl Into<Position>) -> Self {
        self.position = position.into();
        self
    }

    /// Computes the [`Placement`] of every submenu from the item opening it.
    #[must_use]
    pub fn position_with(mut self, f: impl Fn(&Node) -> Placement + 'static) -> Self {
        self.position = Position::Dynamic(Rc::new(f));
        self
    }

    /// Returns the [`Tree`] of the [`Menu`].
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Returns the [`Id`] of the [`Menu`].
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Returns the [`Settings`] of the [`Menu`].
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the active item, if any.
    pub fn active(&self) -> Option<NodeKey> {
        self.state.active
    }

    /// Returns the list currently used for sibling navigation.
    pub fn active_menu(&self) -> ListKey {
        self.state.active_menu
    }

    /// Returns the id assistive technologies should report as the active
    /// descendant of the [`Menu`].
    pub fn active_descendant(&self) -> Option<&Id> {
        self.state.active_descendant.as_ref()
    }

    /// Returns true if the [`Menu`] ignores user input.
    pub fn is_inactive(&self) -> bool {
        self.state.is_inactive()
    }

    /// Returns true if the given [`ListKey`] is shown.
    pub fn is_open(&self, list: ListKey) -> bool {
        self.tree.list(list).is_some_and(|list| list.visible)
    }

    /// Returns the position of a list, as last placed by the [`Menu`].
    pub fn placement_of(&self, list: ListKey) -> Option<Point> {
        self.tree.list(list).map(|list| list.position)
    }

    /// Returns the submenus that are currently shown.
    pub fn open_submenus(&self) -> Vec<ListKey> {
        let root = self.tree.root();

        self.tree
            .walk()
            .into_iter()
            .filter(|list| *list != root && self.is_open(*list))
            .collect()
    }

    /// Returns the earliest instant at which a deferred action is due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.next_deadline()
    }

    /// Appends an [`Entry`] to a list.
    ///
    /// The new nodes take part in navigation after the next [`Menu::refresh`].
    pub fn push(&mut self, list: ListKey, entry: Entry) -> Option<NodeKey> {
        self.tree.push(list, entry)
    }

    /// Removes a node and its submenu from the [`Menu`].
    ///
    /// Removing the active item clears it silently.
    pub fn remove(&mut self, node: NodeKey) -> bool {
        let removed = self.tree.remove(node);

        if removed.is_empty() {
            return false;
        }

        if self.state.active.is_some_and(|active| removed.contains(&active)) {
            self.state.active = None;
            self.state.active_descendant = None;

            let _ = self.state.blur_task.cancel();
        }

        if self.state.hovered.is_some_and(|hovered| removed.contains(&hovered)) {
            self.state.hovered = None;
        }

        for task in [&mut self.state.open_task, &mut self.state.close_task] {
            if task
                .action()
                .is_some_and(|list| !self.tree.lists.contains_key(*list))
            {
                let _ = task.cancel();
            }
        }

        if !self.tree.lists.contains_key(self.state.active_menu) {
            self.state.active_menu = self.tree.root();
        }

        true
    }

    /// Sets the viewport of a list, in window coordinates.
    ///
    /// Submenus are moved again by their [`Placement`] every time they open.
    pub fn set_viewport(&mut self, list: ListKey, viewport: Rectangle) {
        if let Some(list) = self.tree.lists.get_mut(list) {
            list.position = viewport.position();
            list.size = viewport.size();
        }
    }

    /// Sets the bounds of a node, relative to the content of its list.
    pub fn set_bounds(&mut self, node: NodeKey, bounds: Rectangle) {
        if let Some(node) = self.tree.nodes.get_mut(node) {
            node.bounds = bounds;
        }
    }

    /// Scrolls the content of a list.
    pub fn set_scroll_offset(&mut self, list: ListKey, offset: f32) {
        let max = self.max_scroll_offset(list);

        if let Some(list) = self.tree.lists.get_mut(list) {
            list.scroll_offset = offset.clamp(0.0, max);
        }
    }

    /// Adapts the nodes and submenus added since the last refresh.
    ///
    /// New submenus start hidden; new nodes matching the item selector
    /// become items.
    pub fn refresh(&mut self) {
        let root = self.tree.root();

        for list in self.tree.walk() {
            let entry = &mut self.tree.lists[list];

            if !entry.adapted {
                entry.adapted = true;
                entry.visible = list == root;
            }

            for child in &entry.children {
                let node = &mut self.tree.nodes[*child];

                if !node.adapted && node.tag == self.settings.item_selector {
                    node.adapted = true;
                }
            }
        }

        log::trace!("menu {}: refreshed {} nodes", self.id, self.tree.len());
    }

    /// Detaches the [`Menu`], canceling every pending action and
    /// restoring the visual state of its [`Tree`].
    pub fn destroy(mut self) -> Tree {
        self.state.cancel_all();

        for node in self.tree.nodes.values_mut() {
            node.adapted = false;
            node.focused = false;
            node.highlighted = false;
        }

        for list in self.tree.lists.values_mut() {
            list.adapted = false;
            list.scroll_offset = 0.0;
        }

        log::debug!("menu {}: destroyed", self.id);

        self.tree
    }

    /// Freezes the [`Menu`]; it ignores user input until unfrozen.
    pub fn freeze(&mut self) {
        self.state.frozen = true;
    }

    /// Unfreezes the [`Menu`].
    pub fn unfreeze(&mut self) {
        self.state.frozen = false;
    }

    /// Sets whether the [`Menu`] is disabled; a disabled menu ignores user input.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.state.disabled = disabled;
    }

    /// Focuses an item, blurring the current one.
    ///
    /// Any pending blur is canceled, so it can never clear the new item.
    pub fn focus(
        &mut self,
        item: NodeKey,
        origin: Origin,
        now: Instant,
        shell: &mut Shell<'_, Message>,
    ) {
        self.tick(now, shell);

        if !self.is_item(item) {
            return;
        }

        self.release_focus();
        self.reveal(item, shell);
        self.scroll_into_view(item);

        let descendant = self.tree.nodes[item]
            .id
            .clone()
            .unwrap_or_else(|| self.id.derive(ACTIVE_DESCENDANT));

        let node = &mut self.tree.nodes[item];
        node.focused = true;

        let list = node.list;
        let submenu = node.submenu;

        self.state.active = Some(item);
        self.state.active_menu = list;
        self.state.active_descendant = Some(descendant);

        match submenu {
            Some(submenu) if origin == Origin::Pointer => {
                let _ = self
                    .state
                    .open_task
                    .schedule(now, self.settings.delay, submenu);
            }
            _ => {
                let _ = self
                    .state
                    .close_task
                    .schedule(now, self.settings.delay, list);
            }
        }

        log::debug!("menu {}: focus {item:?} ({origin:?})", self.id);

        if let Some(on_focus) = &self.on_focus {
            shell.publish(on_focus(item));
        }

        self.request_redraw(shell);
    }

    /// Blurs the active item once the blur delay elapses.
    ///
    /// Focusing an item before then cancels the blur.
    pub fn blur(&mut self, now: Instant, shell: &mut Shell<'_, Message>) {
        self.tick(now, shell);

        let Some(active) = self.state.active else {
            return;
        };

        let _ = self.state.close_task.cancel();
        let _ = self.state.open_task.cancel();
        let _ = self
            .state
            .blur_task
            .schedule(now, self.settings.blur_delay, active);

        log::trace!("menu {}: blur of {active:?} scheduled", self.id);

        self.request_redraw(shell);
    }

    /// Shows a submenu next to the active item, hiding every other
    /// submenu that does not contain it.
    pub fn open_submenu(&mut self, submenu: ListKey, shell: &mut Shell<'_, Message>) {
        let Some(owner) = self.tree.list(submenu).and_then(|list| list.parent) else {
            return;
        };

        let root = self.tree.root();
        let keep: FxHashSet<ListKey> = self.tree.ancestors(submenu).into_iter().collect();

        for list in self.tree.walk() {
            if list != root && !keep.contains(&list) {
                self.hide_list(list, shell);
            }
        }

        self.place(submenu, self.state.active.unwrap_or(owner));

        let first = self.first_item(submenu);
        self.tree.lists[submenu].visible = true;

        if let Some(first) = first {
            self.tree.nodes[first].highlighted = true;
        }

        log::debug!("menu {}: open {submenu:?}", self.id);

        shell.invalidate_layout();
    }

    /// Hides the submenus below the list of the active item.
    ///
    /// The active item keeps its focus.
    pub fn close_submenu(&mut self, shell: &mut Shell<'_, Message>) {
        let list = self
            .state
            .active
            .map_or(self.state.active_menu, |active| self.tree.nodes[active].list);

        self.close_under(list, shell);
    }

    /// Hides the whole [`Menu`] and clears its focus.
    pub fn close_all(&mut self, shell: &mut Shell<'_, Message>) {
        let _ = self.state.open_task.cancel();
        let _ = self.state.close_task.cancel();

        for list in self.tree.walk() {
            self.hide_list(list, shell);
        }

        for node in self.tree.nodes.values_mut() {
            node.highlighted = false;
        }

        self.clear_focus(shell);
        self.state.active_menu = self.tree.root();

        log::debug!("menu {}: closed", self.id);

        self.request_redraw(shell);
    }

    /// Shows the root menu without focusing anything.
    pub fn show_first(&mut self, shell: &mut Shell<'_, Message>) {
        let root = self.tree.root();
        self.tree.lists[root].visible = true;

        shell.invalidate_layout();
    }

    /// Shows the root menu if hidden, closes everything otherwise.
    pub fn toggle_all(&mut self, shell: &mut Shell<'_, Message>) {
        if self.is_open(self.tree.root()) {
            self.close_all(shell);
        } else {
            self.show_first(shell);
        }
    }

    /// Selects the active item: the [`Menu`] closes, then the item is
    /// published through [`Menu::on_select`].
    pub fn select(&mut self, shell: &mut Shell<'_, Message>) {
        let item = self.state.active;

        self.close_all(shell);

        let Some(item) = item else {
            return;
        };

        log::debug!("menu {}: select {item:?}", self.id);

        if let Some(on_select) = &self.on_select {
            shell.publish(on_select(item));
        }
    }

    /// Fires the deferred actions that are due at `now`.
    pub fn tick(&mut self, now: Instant, shell: &mut Shell<'_, Message>) {
        if let Some(list) = self.state.close_task.poll(now) {
            self.close_under(list, shell);
        }

        if let Some(submenu) = self.state.open_task.poll(now) {
            let parent = self
                .tree
                .list(submenu)
                .and_then(|list| list.parent)
                .map(|owner| self.tree.nodes[owner].list);

            if let Some(parent) = parent {
                self.close_under(parent, shell);
            }

            self.open_submenu(submenu, shell);
        }

        if let Some(item) = self.state.blur_task.poll(now) {
            log::trace!("menu {}: blur of {item:?} due", self.id);

            self.clear_focus(shell);
        }

        if self.state.filter_task.poll(now).is_some() {
            self.state.filter = None;
        }

        self.request_redraw(shell);
    }

    /// Processes a host [`Event`].
    ///
    /// Every event fires the deferred actions that are due first. Pointer
    /// and keyboard events are ignored while the [`Menu`] is inactive.
    pub fn update(&mut self, event: &Event, now: Instant, shell: &mut Shell<'_, Message>) {
        if let Event::Window(window::Event::RedrawRequested(now)) = event {
            self.tick(*now, shell);
            return;
        }

        // Deadlines may have passed without a redraw in between
        self.tick(now, shell);

        if self.is_inactive() {
            return;
        }

        match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.on_cursor_moved(*position, now, shell);
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                self.state.cursor = Cursor::Unavailable;

                if self.state.hovered.take().is_some() {
                    self.blur(now, shell);
                }
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                self.on_click(now, shell);
            }
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                self.on_key_pressed(key, *modifiers, now, shell);
            }
            _ => {}
        }

        self.request_redraw(shell);
    }

    fn on_cursor_moved(&mut self, position: Point, now: Instant, shell: &mut Shell<'_, Message>) {
        self.state.cursor = Cursor::Available(position);

        let hovered = self.item_at(position);

        if hovered == self.state.hovered {
            return;
        }

        if self.state.hovered.take().is_some() {
            self.blur(now, shell);
        }

        if let Some(item) = hovered {
            self.state.hovered = Some(item);
            self.focus(item, Origin::Pointer, now, shell);
        }
    }

    fn on_click(&mut self, now: Instant, shell: &mut Shell<'_, Message>) {
        let Some(item) = self.state.cursor.position().and_then(|p| self.item_at(p)) else {
            return;
        };

        // It is possible to click an item without hovering it first
        if self.state.active != Some(item) {
            self.focus(item, Origin::Pointer, now, shell);
        }

        self.select(shell);

        shell.prevent_default();
        shell.capture_event();
    }

    fn on_key_pressed(
        &mut self,
        key: &keyboard::Key,
        modifiers: keyboard::Modifiers,
        now: Instant,
        shell: &mut Shell<'_, Message>,
    ) {
        match key {
            keyboard::Key::Named(Named::PageUp) => {
                self.previous_page(now, shell);
                shell.capture_event();
            }
            keyboard::Key::Named(Named::PageDown) => {
                self.next_page(now, shell);
                shell.capture_event();
            }
            keyboard::Key::Named(Named::ArrowUp) => {
                self.previous(now, shell);
                shell.capture_event();
            }
            keyboard::Key::Named(Named::ArrowDown) => {
                self.next(now, shell);
                shell.capture_event();
            }
            keyboard::Key::Named(Named::ArrowLeft | Named::Escape) => {
                if self.left(now, shell) {
                    shell.capture_event();
                }
            }
            keyboard::Key::Named(Named::ArrowRight) => {
                if self.right(now, shell) {
                    shell.capture_event();
                }
            }
            keyboard::Key::Named(Named::Enter) => {
                self.select(shell);
                shell.capture_event();
            }
            _ => {
                let Some(character) = key.to_char() else {
                    return;
                };

                if modifiers.is_shortcut() {
                    return;
                }

                shell.capture_event();
                self.type_ahead(character, now, shell);

                return;
            }
        }

        shell.prevent_default();
    }

    pub(in crate::menu) fn is_item(&self, key: NodeKey) -> bool {
        self.tree
            .node(key)
            .is_some_and(|node| node.adapted && !node.disabled)
    }

    /// Returns the deepest visible item under the given position.
    fn item_at(&self, position: Point) -> Option<NodeKey> {
        let mut lists: Vec<ListKey> = self
            .tree
            .walk()
            .into_iter()
            .filter(|list| self.is_open(*list))
            .collect();

        lists.sort_by_key(|list| Reverse(self.tree.ancestors(*list).len()));

        lists.into_iter().find_map(|list| {
            let entry = &self.tree.lists[list];

            if !entry.viewport().contains(position) {
                return None;
            }

            entry.children.iter().copied().find(|child| {
                self.is_item(*child)
                    && self
                        .tree
                        .screen_bounds(*child)
                        .is_some_and(|bounds| bounds.contains(position))
            })
        })
    }

    /// Drops the focus of the active item without notifying, canceling
    /// every deferred action tied to it.
    fn release_focus(&mut self) {
        let _ = self.state.blur_task.cancel();
        let _ = self.state.close_task.cancel();
        let _ = self.state.open_task.cancel();

        if let Some(node) = self
            .state
            .active
            .take()
            .and_then(|previous| self.tree.nodes.get_mut(previous))
        {
            node.focused = false;
        }
    }

    /// Clears the active item right away and notifies the blur.
    pub(in crate::menu) fn clear_focus(&mut self, shell: &mut Shell<'_, Message>) {
        let _ = self.state.blur_task.cancel();

        let Some(active) = self.state.active.take() else {
            return;
        };

        if let Some(node) = self.tree.nodes.get_mut(active) {
            node.focused = false;
        }

        self.state.active_descendant = None;

        log::debug!("menu {}: blur {active:?}", self.id);

        if let Some(on_blur) = &self.on_blur {
            shell.publish(on_blur.clone());
        }
    }

    /// Shows every hidden list containing the item, and hides the lists
    /// of other branches.
    ///
    /// Submenus nested below the list of the item are left to its
    /// close task.
    fn reveal(&mut self, item: NodeKey, shell: &mut Shell<'_, Message>) {
        let list = self.tree.nodes[item].list;
        let ancestors = self.tree.ancestors(list);

        let keep: FxHashSet<ListKey> = ancestors
            .iter()
            .copied()
            .chain(self.tree.descendants(list))
            .collect();

        for other in self.tree.walk() {
            if !keep.contains(&other) {
                self.hide_list(other, shell);
            }
        }

        for list in ancestors.into_iter().rev() {
            if self.tree.lists[list].visible {
                continue;
            }

            if let Some(owner) = self.tree.lists[list].parent {
                self.place(list, owner);
            }

            self.tree.lists[list].visible = true;
            shell.invalidate_layout();
        }
    }

    /// Moves a submenu next to its anchor item.
    fn place(&mut self, list: ListKey, anchor: NodeKey) {
        let Some(bounds) = self.tree.screen_bounds(anchor) else {
            return;
        };

        let placement = self.position.placement(&self.tree.nodes[anchor]);
        let entry = &mut self.tree.lists[list];

        entry.position = placement.resolve(bounds, entry.size);
        entry.scroll_offset = 0.0;
    }

    /// Hides a list and every submenu nested in it, clearing their markers
    /// and the focus they may contain.
    pub(in crate::menu) fn hide_list(&mut self, list: ListKey, shell: &mut Shell<'_, Message>) {
        // Innermost first, so the active menu falls back to a shown list
        for submenu in self.tree.descendants(list).into_iter().rev() {
            self.hide_one(submenu, shell);
        }

        self.hide_one(list, shell);
    }

    fn hide_one(&mut self, list: ListKey, shell: &mut Shell<'_, Message>) {
        let Some(entry) = self.tree.lists.get_mut(list) else {
            return;
        };

        if !entry.visible {
            return;
        }

        entry.visible = false;

        let parent = entry.parent;

        for child in &entry.children {
            self.tree.nodes[*child].highlighted = false;
        }

        if self
            .state
            .active
            .is_some_and(|active| self.tree.nodes[active].list == list)
        {
            self.clear_focus(shell);
        }

        if self.state.active_menu == list {
            self.state.active_menu = parent.map_or(self.tree.root(), |owner| {
                self.tree.nodes[owner].list
            });
        }

        shell.invalidate_layout();
    }

    /// Hides every submenu nested in a list and clears its markers.
    fn close_under(&mut self, list: ListKey, shell: &mut Shell<'_, Message>) {
        for submenu in self.tree.descendants(list).into_iter().rev() {
            self.hide_one(submenu, shell);
        }

        if let Some(entry) = self.tree.lists.get(list) {
            for child in &entry.children {
                self.tree.nodes[*child].highlighted = false;
            }
        }
    }

    fn scroll_into_view(&mut self, item: NodeKey) {
        let node = &self.tree.nodes[item];
        let list = node.list;
        let bounds = node.bounds;

        if !self.tree.has_scroll(list) {
            return;
        }

        let max = self.max_scroll_offset(list);
        let entry = &mut self.tree.lists[list];
        let offset = bounds.y - entry.scroll_offset;

        if offset < 0.0 {
            entry.scroll_offset += offset;
        } else if offset + bounds.height > entry.size.height {
            entry.scroll_offset += offset - entry.size.height + bounds.height;
        }

        entry.scroll_offset = entry.scroll_offset.clamp(0.0, max);
    }

    fn max_scroll_offset(&self, list: ListKey) -> f32 {
        let height = self.tree.list(list).map_or(0.0, |list| list.size.height);

        (self.tree.content_height(list) - height).max(0.0)
    }

    pub(in crate::menu) fn request_redraw(&self, shell: &mut Shell<'_, Message>) {
        if let Some(deadline) = self.state.next_deadline() {
            shell.request_redraw_at(deadline);
        }
    }
}
