pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Saved preference wins; otherwise follow the system color scheme.
    pub fn from_saved(saved: Option<&str>, prefers_dark: bool) -> Self {
        match saved.map(str::trim) {
            Some("dark") => Self::Dark,
            Some("light") => Self::Light,
            _ if prefers_dark => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_preference_overrides_system() {
        assert_eq!(Theme::from_saved(Some("light"), true), Theme::Light);
        assert_eq!(Theme::from_saved(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn unknown_or_missing_preference_follows_system() {
        assert_eq!(Theme::from_saved(None, true), Theme::Dark);
        assert_eq!(Theme::from_saved(Some("sepia"), false), Theme::Light);
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().as_str(), "light");
    }
}
