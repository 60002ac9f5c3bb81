//! Engine commands

use std::fmt;

/// An engine command as received from a consumer
///
/// Anything other than `START` or `STOP` is kept as `Other` so it can be
/// forwarded upstream as the error sentinel instead of being rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EngineCommand {
    Start,
    Stop,
    Other(String),
}

impl EngineCommand {
    pub fn as_str(&self) -> &str {
        match self {
            EngineCommand::Start => "START",
            EngineCommand::Stop => "STOP",
            EngineCommand::Other(raw) => raw,
        }
    }
}

impl From<&str> for EngineCommand {
    fn from(raw: &str) -> Self {
        match raw {
            "START" => EngineCommand::Start,
            "STOP" => EngineCommand::Stop,
            other => EngineCommand::Other(other.to_string()),
        }
    }
}

impl From<String> for EngineCommand {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "START" => EngineCommand::Start,
            "STOP" => EngineCommand::Stop,
            _ => EngineCommand::Other(raw),
        }
    }
}

impl fmt::Display for EngineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
