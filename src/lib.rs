//! A hierarchical, keyboard-navigable menu.
//!
//! The [`Menu`] tracks a single active item across nested lists, opens and
//! closes submenus with a small delay, and supports type-ahead search. It
//! does not draw anything: the host feeds it [`Event`]s, reports the
//! geometry of its lists, and reacts to the messages it publishes through
//! a [`Shell`].
//!
//! Deferred actions never sleep. After every call, the [`Menu`] asks the
//! [`Shell`] for a redraw at its next deadline, and fires whatever is due
//! when the host sends the matching [`window::Event::RedrawRequested`].
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/iced-rs/iced/9ab6923e943f784985e9ef9ca28b10278297225d/docs/logo.svg"
)]
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_menu_core as core;
pub use icy_menu_widget as widget;

pub use crate::core::{
    Alignment, Event, Id, Point, Rectangle, Shell, Size, Timer, Vector, alignment, event, id,
    keyboard, mouse, time, window,
};
pub use crate::widget::menu::{self, Entry, Menu, Origin, Placement, Settings, Tree};
