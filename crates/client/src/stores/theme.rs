//! Persisted light/dark theme preference.

use std::sync::{Arc, PoisonError, RwLock};

use crate::storage::{KeyValueStorage, THEME_KEY};

/// UI color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything but "dark" falls back to light.
    #[must_use]
    fn from_stored(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }
}

/// Owns the theme preference, persisted under the `theme` storage key.
pub struct ThemeStore {
    storage: Arc<dyn KeyValueStorage>,
    theme: RwLock<Theme>,
}

impl ThemeStore {
    /// Create the store, restoring a persisted preference if present.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let theme = storage
            .get(THEME_KEY)
            .map(|value| Theme::from_stored(&value))
            .unwrap_or_default();

        Self {
            storage,
            theme: RwLock::new(theme),
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        *self.theme.read().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn is_dark_mode(&self) -> bool {
        self.theme() == Theme::Dark
    }

    /// Flip the theme and persist the new value.
    pub fn toggle_theme(&self) {
        let mut theme = self.theme.write().unwrap_or_else(PoisonError::into_inner);
        *theme = match *theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.storage.set(THEME_KEY, theme.as_str());
    }
}
