//! The core library of [icy_menu].
//!
//! This library holds basic types that can be reused and re-exported by the
//! menu widget: geometry, input events, the [`Shell`] a widget talks to, and
//! the cancelable [`Timer`] used to model deferred actions.
//!
//! [icy_menu]: https://github.com/mkrueger/icy
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/iced-rs/iced/9ab6923e943f784985e9ef9ca28b10278297225d/docs/logo.svg"
)]
pub mod alignment;
pub mod event;
pub mod id;
pub mod keyboard;
pub mod mouse;
pub mod time;
pub mod timer;
pub mod window;

mod point;
mod rectangle;
mod shell;
mod size;
mod vector;

pub use alignment::Alignment;
pub use event::Event;
pub use id::Id;
pub use point::Point;
pub use rectangle::Rectangle;
pub use shell::Shell;
pub use size::Size;
pub use timer::Timer;
pub use vector::Vector;
