//! Accessibility preferences: theme, font size, high contrast.
//!
//! DESIGN
//! ======
//! Each preference lives under its own key so a bad value in one never
//! resets the others. Unknown or missing values fall back to defaults.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use serde::{Deserialize, Serialize};

use crate::store::{KvStore, StoreError};

pub const THEME_KEY: &str = "theme";
pub const FONT_SIZE_KEY: &str = "fontSize";
pub const HIGH_CONTRAST_KEY: &str = "highContrast";

/// Available root font sizes in px, smallest first.
pub const FONT_SIZES: [u32; 6] = [14, 16, 18, 20, 22, 24];

const FONT_LABELS: [&str; 6] = ["Small", "Normal", "Large", "Larger", "Extra large", "Huge"];

const DEFAULT_FONT_INDEX: usize = 1;

/// Color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// `<meta name="theme-color">` value for this theme.
    #[must_use]
    pub fn meta_color(self) -> &'static str {
        match self {
            Self::Light => "#0d6efd",
            Self::Dark => "#121212",
        }
    }
}

/// How a font-size control was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStep {
    Increase,
    Decrease,
    Reset,
}

/// Position on the [`FONT_SIZES`] scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontScale {
    index: usize,
}

impl Default for FontScale {
    fn default() -> Self {
        Self { index: DEFAULT_FONT_INDEX }
    }
}

impl FontScale {
    /// Scale position for a px value, if it is one of [`FONT_SIZES`].
    #[must_use]
    pub fn from_px(px: u32) -> Option<Self> {
        FONT_SIZES.iter().position(|&s| s == px).map(|index| Self { index })
    }

    #[must_use]
    pub fn px(self) -> u32 {
        FONT_SIZES[self.index]
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        FONT_LABELS[self.index]
    }

    /// Move along the scale, clamping at both ends.
    #[must_use]
    pub fn step(self, step: FontStep) -> Self {
        let index = match step {
            FontStep::Increase => (self.index + 1).min(FONT_SIZES.len() - 1),
            FontStep::Decrease => self.index.saturating_sub(1),
            FontStep::Reset => DEFAULT_FONT_INDEX,
        };
        Self { index }
    }
}

/// All accessibility preferences for one browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    /// `None` until the user picks one; the page then follows the system.
    pub theme: Option<Theme>,
    pub font: FontScale,
    pub high_contrast: bool,
}

impl Preferences {
    /// Read every preference, falling back per key.
    #[must_use]
    pub fn load(store: &impl KvStore) -> Self {
        let read = |key: &str| match store.get(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("could not read preference `{key}`: {e}");
                None
            }
        };
        Self {
            theme: read(THEME_KEY).as_deref().and_then(Theme::parse),
            font: read(FONT_SIZE_KEY)
                .and_then(|v| v.trim().parse::<u32>().map_or(None, FontScale::from_px))
                .unwrap_or_default(),
            high_contrast: read(HIGH_CONTRAST_KEY).is_some_and(|v| v == "true"),
        }
    }

    /// Theme to render, using `system_dark` when no choice is stored.
    #[must_use]
    pub fn effective_theme(&self, system_dark: bool) -> Theme {
        self.theme
            .unwrap_or(if system_dark { Theme::Dark } else { Theme::Light })
    }

    /// Store an explicit theme choice.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the write fails.
    pub fn set_theme(&mut self, store: &mut impl KvStore, theme: Theme) -> Result<(), StoreError> {
        self.theme = Some(theme);
        store.set(THEME_KEY, theme.as_str())
    }

    /// Step the font size and store the new px value.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the write fails.
    pub fn step_font(&mut self, store: &mut impl KvStore, step: FontStep) -> Result<FontScale, StoreError> {
        self.font = self.font.step(step);
        store.set(FONT_SIZE_KEY, &self.font.px().to_string())?;
        Ok(self.font)
    }

    /// Flip high contrast and store it. Returns the new value.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the write fails.
    pub fn toggle_high_contrast(&mut self, store: &mut impl KvStore) -> Result<bool, StoreError> {
        self.high_contrast = !self.high_contrast;
        store.set(HIGH_CONTRAST_KEY, if self.high_contrast { "true" } else { "false" })?;
        Ok(self.high_contrast)
    }
}
