use crate::keyboard::{Key, Modifiers};

use smol_str::SmolStr;

/// A keyboard event.
///
/// _**Note:** This type is largely incomplete! If you need to track
/// additional events, feel free to open an issue and share your use case!_
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard key was pressed.
    KeyPressed {
        /// The key pressed.
        key: Key,

        /// The state of the modifier keys.
        modifiers: Modifiers,

        /// The text produced by the key press, if any.
        text: Option<SmolStr>,
    },

    /// A keyboard key was released.
    KeyReleased {
        /// The key released.
        key: Key,

        /// The state of the modifier keys.
        modifiers: Modifiers,
    },

    /// The keyboard modifiers have changed.
    ModifiersChanged(Modifiers),
}

impl Event {
    /// Creates a [`Event::KeyPressed`] without modifiers.
    pub fn key_pressed(key: impl Into<Key>) -> Self {
        let key = key.into();
        let text = key.to_char().map(|c| SmolStr::new(c.encode_utf8(&mut [0; 4])));

        Self::KeyPressed {
            key,
            modifiers: Modifiers::default(),
            text,
        }
    }
}
