use std::str::FromStr;

use thiserror::Error;
use web_time::Duration;

/// One line of the driver's stdin protocol.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Tap the control with this label.
    Tap(String),
    Counter,
    Refresh,
    /// Advance virtual time.
    Wait(Duration),
    Scroll(f32),
    /// Print the view outline.
    Dump,
    Scene,
    Controls,
    Alerts,
    /// `ok`: confirm the alert on screen.
    Confirm,
    State,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("bad argument {arg:?} for `{command}`")]
    BadArgument { command: &'static str, arg: String },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };
        let arg = |command: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(command))
            } else {
                Ok(rest)
            }
        };
        let bad = |command: &'static str| CommandError::BadArgument {
            command,
            arg: rest.to_string(),
        };

        Ok(match word {
            "" => return Err(CommandError::Empty),
            "tap" => Command::Tap(arg("tap")?.to_string()),
            "counter" => Command::Counter,
            "refresh" => Command::Refresh,
            "wait" => {
                let ms: u64 = arg("wait")?.parse().map_err(|_| bad("wait"))?;
                Command::Wait(Duration::from_millis(ms))
            }
            "scroll" => Command::Scroll(arg("scroll")?.parse().map_err(|_| bad("scroll"))?),
            "dump" => Command::Dump,
            "scene" => Command::Scene,
            "controls" => Command::Controls,
            "alerts" => Command::Alerts,
            "ok" => Command::Confirm,
            "state" => Command::State,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        })
    }
}
