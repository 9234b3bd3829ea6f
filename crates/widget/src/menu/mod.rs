//! A hierarchical, keyboard-navigable [`Menu`]
//!
//! A [`Menu`] is built from a [`Tree`] of entries. Items owning a submenu
//! open it when the pointer rests on them, or when entered with the
//! keyboard.
//!
//! # Example
//!
//! ```
//! use icy_menu_widget::core::keyboard::{self, key::Named};
//! use icy_menu_widget::core::time::Instant;
//! use icy_menu_widget::core::{Event, Shell};
//! use icy_menu_widget::menu::{Entry, Menu, NodeKey, Settings, Tree};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Message {
//!     Selected(NodeKey),
//! }
//!
//! let tree = Tree::new([
//!     Entry::item("Open"),
//!     Entry::with_children("Recent", vec![Entry::item("notes.txt")]),
//!     Entry::item("Quit"),
//! ]);
//!
//! let quit = tree.find("Quit").expect("quit");
//! let mut menu = Menu::new(tree, Settings::default()).on_select(Message::Selected);
//!
//! let mut messages = Vec::new();
//! let mut shell = Shell::new(&mut messages);
//! let now = Instant::now();
//!
//! for key in [Named::ArrowUp, Named::Enter] {
//!     menu.update(&Event::Keyboard(keyboard::Event::key_pressed(key)), now, &mut shell);
//! }
//!
//! assert_eq!(messages, vec![Message::Selected(quit)]);
//! ```
mod filter;
mod navigation;
mod position;
mod settings;
mod state;
mod tree;
mod widget;

#[cfg(test)]
mod tests;

pub use position::{Placement, Position};
pub use settings::Settings;
pub use tree::{Entry, ITEM_TAG, List, ListKey, Node, NodeKey, Tree};
pub use widget::{Menu, Origin};

#[cfg(feature = "serde")]
pub use settings::Error;
