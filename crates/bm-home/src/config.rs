//! Host configuration.
//!
//! | Variable            | Meaning                                           |
//! |---------------------|---------------------------------------------------|
//! | `BM_PROPS`          | initial properties as JSON (`{"userID", "token"}`) |
//! | `BM_USER_ID`        | overrides `userID`                                |
//! | `BM_TOKEN`          | overrides `token`                                 |
//! | `BM_WINDOW`         | `WIDTHxHEIGHT`, default `390x844`                 |
//! | `BM_REDUCED_MOTION` | `1`/`true` shows the end of the entrance at once  |

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_USER_ID: &str = "12345678";
pub const DEFAULT_TOKEN: &str = "secretToken";
pub const DEFAULT_WINDOW: (u32, u32) = (390, 844);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid initial properties: {0}")]
    Props(#[from] serde_json::Error),
    #[error("invalid window size {0:?}, expected WIDTHxHEIGHT")]
    Window(String),
    #[error("invalid value {value:?} for {key}")]
    Flag { key: &'static str, value: String },
}

/// Properties the embedding application passes to the screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenInputs {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub token: String,
}

impl Default for ScreenInputs {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            token: DEFAULT_TOKEN.to_string(),
        }
    }
}

impl ScreenInputs {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HostConfig {
    pub props: ScreenInputs,
    pub window: (u32, u32),
    /// `false` when the platform has animations turned off.
    pub animations: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            props: ScreenInputs::default(),
            window: DEFAULT_WINDOW,
            animations: true,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset variables keep defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut cfg = HostConfig::default();
        if let Some(json) = get("BM_PROPS") {
            cfg.props = ScreenInputs::from_json(&json)?;
        }
        if let Some(id) = get("BM_USER_ID") {
            cfg.props.user_id = id;
        }
        if let Some(token) = get("BM_TOKEN") {
            cfg.props.token = token;
        }
        if let Some(w) = get("BM_WINDOW") {
            cfg.window = parse_window(&w)?;
        }
        if let Some(v) = get("BM_REDUCED_MOTION") {
            cfg.animations = !parse_flag("BM_REDUCED_MOTION", &v)?;
        }
        Ok(cfg)
    }
}

pub fn parse_window(s: &str) -> Result<(u32, u32), ConfigError> {
    let bad = || ConfigError::Window(s.to_string());
    let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(bad)?;
    let w: u32 = w.trim().parse().map_err(|_| bad())?;
    let h: u32 = h.trim().parse().map_err(|_| bad())?;
    if w == 0 || h == 0 {
        return Err(bad());
    }
    Ok((w, h))
}

fn parse_flag(key: &'static str, v: &str) -> Result<bool, ConfigError> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Flag {
            key,
            value: v.to_string(),
        }),
    }
}
