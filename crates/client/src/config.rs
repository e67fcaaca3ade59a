//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// How events are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NarrationMode {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for NarrationMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown narration mode `{other}`")),
        }
    }
}

/// Settings for the terminal client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Fixed RNG seed; `None` draws a fresh one.
    pub seed: Option<u64>,
    /// Pause after each round so fights can be followed.
    pub round_delay: Duration,
    pub narration: NarrationMode,
    /// Log file directory; logs go to stderr when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            seed: None,
            round_delay: Duration::from_millis(Self::DEFAULT_ROUND_DELAY_MS),
            narration: NarrationMode::Text,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_ROUND_DELAY_MS: u64 = 400;

    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_SEED` - RNG seed (default: random)
    /// - `ARENA_ROUND_DELAY_MS` - pause between rounds (default: 400)
    /// - `ARENA_NARRATION` - `text` or `json` (default: text)
    /// - `ARENA_LOG_DIR` - write logs to `<dir>/arena.log` (default: stderr)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    ///
    /// Malformed values are ignored and the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_var::<u64>(&lookup, "ARENA_SEED") {
            config.seed = Some(seed);
        }
        if let Some(delay) = read_var::<u64>(&lookup, "ARENA_ROUND_DELAY_MS") {
            config.round_delay = Duration::from_millis(delay);
        }
        if let Some(mode) = read_var::<NarrationMode>(&lookup, "ARENA_NARRATION") {
            config.narration = mode;
        }
        if let Some(dir) = lookup("ARENA_LOG_DIR").filter(|dir| !dir.trim().is_empty()) {
            config.log_dir = Some(PathBuf::from(dir));
        }

        config
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    lookup(key)?.trim().parse().ok()
}
