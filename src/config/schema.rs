use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tracklist/config.toml` or
/// `~/.config/tracklist/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACKLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub queue: QueueSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            queue: QueueSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueueSettings {
    /// How many upcoming entries queue listings show by default
    /// (the `amount` the host passes to `Playlist::peek`).
    pub peek_amount: usize,
    /// Cap on how many tracks a single batch add may submit.
    /// Set to 0 for no cap.
    pub max_batch: usize,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            peek_amount: 5,
            max_batch: 0,
        }
    }
}
