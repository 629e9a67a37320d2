//! The BM home screen.
//!
//! A single screen with a welcome card, the embedding app's user info, a tap
//! counter, a feature list and a refresh button, plus fade/slide/scale
//! entrance animations. [`Screen`] mounts it into a composition;
//! [`Host`] is a headless host that owns the clock, timers and alerts and
//! turns taps into frames.
//!
//! ```rust
//! use bm_home::{Host, HostConfig};
//!
//! let mut host = Host::new(HostConfig::default())?;
//! host.tap_counter()?;
//! assert_eq!(host.snapshot().map(|s| s.counter), Some(1));
//! assert_eq!(host.alerts().front().map(|a| a.message), Some("计数器: 1".to_string()));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod command;
pub mod config;
pub mod entrance;
pub mod host;
pub mod inspect;
pub mod screen;
pub mod state;
pub mod strings;
pub mod theme;
pub mod token;
pub mod view;

pub use command::{Command, CommandError};
pub use config::{ConfigError, HostConfig, ScreenInputs};
pub use entrance::{Entrance, EntranceFrame};
pub use host::Host;
pub use screen::{Screen, ScreenEnv};
pub use state::{InteractionSnapshot, InteractionState, RefreshPhase};
pub use token::format_token;
