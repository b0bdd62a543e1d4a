//! Persisted display preferences.
//!
//! Theme, typing animation and the background/audio toggles. The session
//! controller applies [`SpecialAction`](crate::SpecialAction)s here; each
//! change is written through to the store immediately.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_TYPING_SPEED, storage_keys};
use crate::storage::{KeyValueStore, load_json_or, save_json};

/// Terminal color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Hacker,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Light, Theme::Hacker];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Hacker => "hacker",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// Requested state for an on/off preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Switch {
    On,
    Off,
    Toggle,
}

impl Switch {
    /// Parses an optional `on`/`off` argument; anything absent means toggle.
    pub fn from_arg(arg: Option<&str>) -> Option<Self> {
        match arg.map(str::to_lowercase).as_deref() {
            None => Some(Self::Toggle),
            Some("on") => Some(Self::On),
            Some("off") => Some(Self::Off),
            Some(_) => None,
        }
    }

    /// The new value given the current one.
    pub fn apply(self, current: bool) -> bool {
        match self {
            Self::On => true,
            Self::Off => false,
            Self::Toggle => !current,
        }
    }
}

/// User preferences, hydrated from and written through to a store.
#[derive(Clone)]
pub struct Preferences {
    theme: Theme,
    typing_animation: bool,
    typing_speed: u32,
    matrix_enabled: bool,
    audio_enabled: bool,
    store: Arc<dyn KeyValueStore>,
}

impl Preferences {
    /// Loads every preference, using defaults for missing or corrupt keys.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let s = store.as_ref();
        Self {
            theme: load_json_or(s, storage_keys::THEME, Theme::default()),
            typing_animation: load_json_or(s, storage_keys::TYPING_ANIMATION, false),
            typing_speed: load_json_or(s, storage_keys::TYPING_SPEED, DEFAULT_TYPING_SPEED),
            matrix_enabled: load_json_or(s, storage_keys::MATRIX_ENABLED, false),
            audio_enabled: load_json_or(s, storage_keys::AUDIO_ENABLED, false),
            store,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn typing_animation(&self) -> bool {
        self.typing_animation
    }

    pub fn typing_speed(&self) -> u32 {
        self.typing_speed
    }

    pub fn matrix_enabled(&self) -> bool {
        self.matrix_enabled
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        save_json(self.store.as_ref(), storage_keys::THEME, &theme);
    }

    pub fn set_typing_animation(&mut self, enabled: bool) {
        self.typing_animation = enabled;
        save_json(self.store.as_ref(), storage_keys::TYPING_ANIMATION, &enabled);
    }

    pub fn set_typing_speed(&mut self, speed: u32) {
        self.typing_speed = speed;
        save_json(self.store.as_ref(), storage_keys::TYPING_SPEED, &speed);
    }

    /// Applies `switch` to the Matrix background and returns the new state.
    pub fn set_matrix(&mut self, switch: Switch) -> bool {
        self.matrix_enabled = switch.apply(self.matrix_enabled);
        save_json(
            self.store.as_ref(),
            storage_keys::MATRIX_ENABLED,
            &self.matrix_enabled,
        );
        self.matrix_enabled
    }

    /// Applies `switch` to audio effects and returns the new state.
    pub fn set_audio(&mut self, switch: Switch) -> bool {
        self.audio_enabled = switch.apply(self.audio_enabled);
        save_json(
            self.store.as_ref(),
            storage_keys::AUDIO_ENABLED,
            &self.audio_enabled,
        );
        self.audio_enabled
    }
}

impl fmt::Debug for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preferences")
            .field("theme", &self.theme)
            .field("typing_animation", &self.typing_animation)
            .field("typing_speed", &self.typing_speed)
            .field("matrix_enabled", &self.matrix_enabled)
            .field("audio_enabled", &self.audio_enabled)
            .finish_non_exhaustive()
    }
}
