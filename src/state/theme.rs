//! Light/dark theme preference.

use serde::{Deserialize, Serialize};

/// The two supported color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    Light,
    Dark,
}

impl ThemeSetting {
    /// The opposite setting.
    pub fn flipped(self) -> Self {
        match self {
            ThemeSetting::Light => ThemeSetting::Dark,
            ThemeSetting::Dark => ThemeSetting::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeSetting::Light => "light",
            ThemeSetting::Dark => "dark",
        }
    }
}

/// Resolve the startup theme: stored preference wins, then the system
/// dark-mode preference, then light.
pub fn initial_theme(stored: Option<ThemeSetting>, system_prefers_dark: bool) -> ThemeSetting {
    match stored {
        Some(theme) => theme,
        None if system_prefers_dark => ThemeSetting::Dark,
        None => ThemeSetting::Light,
    }
}

/// Query the OS color-scheme preference. Unknown or undetectable counts
/// as "no preference".
pub fn system_prefers_dark() -> bool {
    matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_theme_wins_over_system() {
        assert_eq!(
            initial_theme(Some(ThemeSetting::Light), true),
            ThemeSetting::Light
        );
        assert_eq!(
            initial_theme(Some(ThemeSetting::Dark), false),
            ThemeSetting::Dark
        );
    }

    #[test]
    fn test_system_preference_used_when_nothing_stored() {
        assert_eq!(initial_theme(None, true), ThemeSetting::Dark);
    }

    #[test]
    fn test_defaults_to_light() {
        assert_eq!(initial_theme(None, false), ThemeSetting::Light);
    }

    #[test]
    fn test_flipped_round_trips() {
        assert_eq!(ThemeSetting::Light.flipped(), ThemeSetting::Dark);
        assert_eq!(ThemeSetting::Light.flipped().flipped(), ThemeSetting::Light);
    }
}
