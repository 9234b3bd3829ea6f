//! Identify keyboard keys.
use smol_str::SmolStr;

/// A key on the keyboard.
///
/// This is mostly the `Key` type found in [`winit`], trimmed down to the
/// keys a menu cares about.
///
/// [`winit`]: https://docs.rs/winit/0.30/winit/keyboard/enum.Key.html
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key<C = SmolStr> {
    /// A key with an established name.
    Named(Named),

    /// A key string that corresponds to the character typed by the user, taking into account the
    /// user’s current locale setting, and any system-level keyboard mapping overrides that are in
    /// effect.
    Character(C),

    /// An unidentified key.
    Unidentified,
}

impl Key {
    /// Convert `Key::Character(SmolStr)` to `Key::Character(&str)` so you can more easily match on
    /// `Key`. All other variants remain unchanged.
    pub fn as_ref(&self) -> Key<&str> {
        match self {
            Self::Named(named) => Key::Named(*named),
            Self::Character(c) => Key::Character(c.as_ref()),
            Self::Unidentified => Key::Unidentified,
        }
    }

    /// Returns the single character this [`Key`] produces, if any.
    ///
    /// [`Named::Space`] produces a blank.
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Named(Named::Space) => Some(' '),
            Self::Character(c) => {
                let mut chars = c.chars();

                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_control() => Some(c),
                    _ => None,
                }
            }
            Self::Named(_) | Self::Unidentified => None,
        }
    }
}

impl From<Named> for Key {
    fn from(named: Named) -> Self {
        Self::Named(named)
    }
}

/// A named key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Named {
    Alt,
    Control,
    Shift,
    Super,
    Enter,
    Tab,
    Space,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    End,
    Home,
    PageDown,
    PageUp,
    Backspace,
    Delete,
    Escape,
    F1,
    F10,
}
