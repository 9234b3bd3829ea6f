//! The menu widget of [icy_menu].
//!
//! [icy_menu]: https://github.com/mkrueger/icy
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/iced-rs/iced/9ab6923e943f784985e9ef9ca28b10278297225d/docs/logo.svg"
)]
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_menu_core as core;

pub mod menu;

pub use menu::Menu;
