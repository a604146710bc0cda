use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::storage::{KeyValueStore, StorageError, THEME_KEY};

/// Site color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light backgrounds.
    Light,
    /// Dark backgrounds; used until the visitor picks.
    #[default]
    Dark,
}

impl Theme {
    /// Stored/attribute spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything other than `light`/`dark` is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Whether this is the dark scheme.
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Read the saved preference, falling back to the default on missing or
    /// invalid values.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match store.get(THEME_KEY) {
            Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(err) => {
                warn!(error = %err, "failed to read theme preference");
                Theme::default()
            },
        }
    }

    /// Save this theme as the preference.
    pub fn persist<S: KeyValueStore + ?Sized>(self, store: &S) -> Result<(), StorageError> {
        store.set(THEME_KEY, self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;
    use crate::storage::{KeyValueStore, MemoryStore, THEME_KEY};

    #[test]
    fn defaults_to_dark_when_unset_or_invalid() {
        assert_eq!(Theme::load(&MemoryStore::new()), Theme::Dark);
        assert_eq!(Theme::load(&MemoryStore::with_entry(THEME_KEY, "sepia")), Theme::Dark);
    }

    #[test]
    fn toggle_round_trips_through_storage() {
        let store = MemoryStore::with_entry(THEME_KEY, "light");
        let current = Theme::load(&store);
        assert_eq!(current, Theme::Light);

        let next = current.toggled();
        next.persist(&store).expect("persist");
        assert_eq!(store.get(THEME_KEY).expect("get").as_deref(), Some("dark"));
        assert_eq!(Theme::load(&store), Theme::Dark);
    }
}
