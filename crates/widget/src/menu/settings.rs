//! Configure a menu.
use crate::core::time::Duration;
use crate::menu::position::Placement;
use crate::menu::tree::ITEM_TAG;

/// The settings of a [`Menu`](crate::Menu).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// The identifier of the menu.
    ///
    /// A unique one is generated when `None`.
    pub id: Option<String>,

    /// The tag a node must carry to count as a menu item.
    pub item_selector: String,

    /// The placement of submenus relative to the item opening them.
    pub position: Placement,

    /// How long the pointer has to rest on an item before its submenu opens.
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub delay: Duration,

    /// How long a blur is deferred, absorbing quick pointer exits.
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub blur_delay: Duration,

    /// How long typed characters are kept for type-ahead search.
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub filter_timeout: Duration,

    /// Whether the menu ignores all user input.
    pub disabled: bool,

    /// Whether the menu is frozen; a frozen menu ignores all user input.
    pub frozen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            id: None,
            item_selector: ITEM_TAG.to_owned(),
            position: Placement::default(),
            delay: Duration::from_millis(150),
            blur_delay: Duration::from_millis(200),
            filter_timeout: Duration::from_millis(1000),
            disabled: false,
            frozen: false,
        }
    }
}

#[cfg(feature = "serde")]
impl Settings {
    /// Parses [`Settings`] from RON; missing fields keep their default.
    ///
    /// ```
    /// use icy_menu_widget::menu::Settings;
    ///
    /// let settings = Settings::from_ron("(item_selector: \"li\", delay: 300)").unwrap();
    ///
    /// assert_eq!(settings.item_selector, "li");
    /// assert_eq!(settings.delay.as_millis(), 300);
    /// assert_eq!(settings.blur_delay.as_millis(), 200);
    /// ```
    pub fn from_ron(source: &str) -> Result<Self, Error> {
        Ok(ron::from_str(source)?)
    }
}

/// An error loading [`Settings`].
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source is not valid RON, or does not describe [`Settings`].
    #[error("invalid menu settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[cfg(feature = "serde")]
mod millis {
    use crate::core::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        duration: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
