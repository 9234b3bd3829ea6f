//! A tree structure for the entries of a hierarchical menu

use crate::core::id::Id;
use crate::core::{Point, Rectangle, Size, Vector};

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// The key of a [`Node`] in a [`Tree`].
    pub struct NodeKey;

    /// The key of a [`List`] in a [`Tree`].
    pub struct ListKey;
}

/// The tag given to entries created with [`Entry::item`].
pub const ITEM_TAG: &str = "a";

/// A declarative description of a menu entry, used to build a [`Tree`].
///
/// An entry with children owns a submenu.
#[derive(Debug, Clone)]
pub struct Entry {
    tag: String,
    text: String,
    id: Option<Id>,
    disabled: bool,
    children: Option<Vec<Entry>>,
}

impl Entry {
    /// Creates a selectable entry with the given label.
    pub fn item(text: impl Into<String>) -> Self {
        Self {
            tag: ITEM_TAG.to_owned(),
            text: text.into(),
            id: None,
            disabled: false,
            children: None,
        }
    }

    /// Creates a selectable entry that owns a submenu.
    pub fn with_children(text: impl Into<String>, children: Vec<Entry>) -> Self {
        Self {
            children: Some(children),
            ..Self::item(text)
        }
    }

    /// Creates a plain text entry, like a group heading.
    ///
    /// The default item selector does not match it.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            tag: String::from("span"),
            ..Self::item(text)
        }
    }

    /// Creates a separator.
    pub fn separator() -> Self {
        Self {
            tag: String::from("hr"),
            ..Self::item(String::new())
        }
    }

    /// Sets the tag of the [`Entry`], matched against the item selector.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Sets the explicit [`Id`] of the [`Entry`].
    #[must_use]
    pub fn id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets whether the [`Entry`] is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// An entry of a [`List`].
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) tag: String,
    pub(crate) text: String,
    pub(crate) id: Option<Id>,
    pub(crate) disabled: bool,
    pub(crate) list: ListKey,
    pub(crate) submenu: Option<ListKey>,
    /// Bounds relative to the content of its list
    pub(crate) bounds: Rectangle,
    pub(crate) adapted: bool,
    pub(crate) focused: bool,
    pub(crate) highlighted: bool,
}

impl Node {
    /// Returns the tag of the [`Node`].
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the visible text of the [`Node`].
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the explicit [`Id`] of the [`Node`], if any.
    pub fn id(&self) -> Option<&Id> {
        self.id.as_ref()
    }

    /// Returns true if the [`Node`] is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns the [`List`] containing the [`Node`].
    pub fn list(&self) -> ListKey {
        self.list
    }

    /// Returns the submenu owned by the [`Node`], if any.
    pub fn submenu(&self) -> Option<ListKey> {
        self.submenu
    }

    /// Returns the bounds of the [`Node`] relative to the content of its [`List`].
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Returns true if the menu adapted the [`Node`] as an item.
    pub fn is_item(&self) -> bool {
        self.adapted
    }

    /// Returns true if the [`Node`] carries the focus marker.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns true if the [`Node`] carries the "active" marker.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

/// An ordered list of nodes: the root menu or a submenu.
#[derive(Debug, Clone)]
pub struct List {
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,
    pub(crate) visible: bool,
    pub(crate) adapted: bool,
    pub(crate) position: Point,
    pub(crate) size: Size,
    pub(crate) scroll_offset: f32,
}

impl List {
    fn new(parent: Option<NodeKey>) -> Self {
        Self {
            parent,
            children: Vec::new(),
            visible: true,
            adapted: false,
            position: Point::ORIGIN,
            size: Size::ZERO,
            scroll_offset: 0.0,
        }
    }

    /// Returns the [`Node`] owning this [`List`], or `None` for the root.
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Returns the nodes of the [`List`], in order.
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Returns true if the [`List`] is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the position of the viewport of the [`List`].
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the size of the viewport of the [`List`].
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the bounds of the viewport of the [`List`].
    pub fn viewport(&self) -> Rectangle {
        Rectangle::new(self.position, self.size)
    }

    /// Returns the current scroll offset of the [`List`].
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }
}

/// The content of a menu: nested lists of nodes.
#[derive(Debug, Clone)]
pub struct Tree {
    pub(crate) nodes: SlotMap<NodeKey, Node>,
    pub(crate) lists: SlotMap<ListKey, List>,
    root: ListKey,
}

impl Tree {
    /// Creates a [`Tree`] whose root menu holds the given entries.
    pub fn new(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut lists = SlotMap::with_key();
        let root = lists.insert(List::new(None));

        let mut tree = Self {
            nodes: SlotMap::with_key(),
            lists,
            root,
        };

        for entry in entries {
            let _ = tree.push(root, entry);
        }

        tree
    }

    /// Returns the root [`List`].
    pub fn root(&self) -> ListKey {
        self.root
    }

    /// Returns the [`Node`] with the given key.
    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Returns the [`List`] with the given key.
    pub fn list(&self, key: ListKey) -> Option<&List> {
        self.lists.get(key)
    }

    /// Returns the number of nodes in the [`Tree`].
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the [`Tree`] has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends an [`Entry`], and its children, to the given [`List`].
    ///
    /// Returns `None` if the [`List`] does not exist.
    pub fn push(&mut self, list: ListKey, entry: Entry) -> Option<NodeKey> {
        if !self.lists.contains_key(list) {
            return None;
        }

        let Entry {
            tag,
            text,
            id,
            disabled,
            children,
        } = entry;

        let key = self.nodes.insert(Node {
            tag,
            text,
            id,
            disabled,
            list,
            submenu: None,
            bounds: Rectangle::default(),
            adapted: false,
            focused: false,
            highlighted: false,
        });

        self.lists[list].children.push(key);

        if let Some(children) = children {
            let submenu = self.lists.insert(List::new(Some(key)));
            self.nodes[key].submenu = Some(submenu);

            for child in children {
                let _ = self.push(submenu, child);
            }
        }

        Some(key)
    }

    /// Removes a [`Node`] together with its submenu.
    ///
    /// Returns the removed keys; empty if the [`Node`] does not exist.
    pub fn remove(&mut self, key: NodeKey) -> Vec<NodeKey> {
        let Some(node) = self.nodes.get(key) else {
            return Vec::new();
        };

        let list = node.list;
        self.lists[list].children.retain(|child| *child != key);

        let mut removed = Vec::new();
        let mut pending = vec![key];

        while let Some(key) = pending.pop() {
            let Some(node) = self.nodes.remove(key) else {
                continue;
            };

            if let Some(submenu) = node.submenu.and_then(|submenu| self.lists.remove(submenu)) {
                pending.extend(submenu.children);
            }

            removed.push(key);
        }

        removed
    }

    /// Finds the first node, in depth-first order, with the given text.
    pub fn find(&self, text: &str) -> Option<NodeKey> {
        self.walk()
            .into_iter()
            .flat_map(|list| self.lists[list].children.iter().copied())
            .find(|key| self.nodes[*key].text == text)
    }

    /// Returns every [`List`] in depth-first order, starting at the root.
    pub fn walk(&self) -> Vec<ListKey> {
        let mut order = Vec::with_capacity(self.lists.len());
        let mut pending = vec![self.root];

        while let Some(list) = pending.pop() {
            order.push(list);

            pending.extend(
                self.lists[list]
                    .children
                    .iter()
                    .rev()
                    .filter_map(|child| self.nodes[*child].submenu),
            );
        }

        order
    }

    /// Returns the lists nested anywhere below the given [`List`], excluding it.
    pub fn descendants(&self, list: ListKey) -> Vec<ListKey> {
        let mut found = Vec::new();
        let mut pending = vec![list];

        while let Some(list) = pending.pop() {
            let Some(current) = self.lists.get(list) else {
                continue;
            };

            for submenu in current
                .children
                .iter()
                .filter_map(|child| self.nodes[*child].submenu)
            {
                found.push(submenu);
                pending.push(submenu);
            }
        }

        found
    }

    /// Returns the given [`List`] followed by all the lists containing it,
    /// up to the root.
    pub fn ancestors(&self, list: ListKey) -> Vec<ListKey> {
        let mut chain = Vec::new();
        let mut current = Some(list);

        while let Some(list) = current {
            let Some(entry) = self.lists.get(list) else {
                break;
            };

            chain.push(list);
            current = entry.parent.map(|parent| self.nodes[parent].list);
        }

        chain
    }

    /// Returns the total height of the content of a [`List`].
    pub fn content_height(&self, list: ListKey) -> f32 {
        self.lists.get(list).map_or(0.0, |list| {
            list.children
                .iter()
                .map(|child| self.nodes[*child].bounds.bottom())
                .fold(0.0, f32::max)
        })
    }

    /// Returns true if the content of a [`List`] overflows its viewport.
    pub fn has_scroll(&self, list: ListKey) -> bool {
        self.lists
            .get(list)
            .is_some_and(|entry| entry.size.height < self.content_height(list))
    }

    /// Returns the bounds of a [`Node`] in window coordinates.
    pub fn screen_bounds(&self, key: NodeKey) -> Option<Rectangle> {
        let node = self.nodes.get(key)?;
        let list = self.lists.get(node.list)?;

        Some(node.bounds + (list.position - Point::ORIGIN) - Vector::new(0.0, list.scroll_offset))
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new([])
    }
}
