//! Theme
//!
//! Light/dark preference, persisted under a single storage key.

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything other than `"dark"` (including nothing stored) is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Body class for the dark palette
    pub fn body_class(self) -> Option<&'static str> {
        self.is_dark().then_some("dark-mode")
    }

    /// The button offers the other theme
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "☀️ Toggle Theme",
            Theme::Light => "🌙 Toggle Theme",
        }
    }
}
