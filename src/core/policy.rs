//! Call-site logging policy

use super::{
    error::{DispatchError, Result},
    verbosity::Verbosity,
    writer::LineWriter,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Which sink a policy routes its rendered block to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SinkMode {
    Console = 1,
    File = 2,
    Database = 3,
    Queue = 4,
}

impl SinkMode {
    pub fn to_str(&self) -> &'static str {
        match self {
            SinkMode::Console => "console",
            SinkMode::File => "file",
            SinkMode::Database => "database",
            SinkMode::Queue => "queue",
        }
    }

    /// Numeric code as carried by call-site annotations
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Map a raw annotation code to a mode.
    ///
    /// Unknown codes are a configuration defect and surface as
    /// `DispatchError::UnknownMode`; the dispatcher itself only ever sees
    /// validated modes.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            1 => Ok(SinkMode::Console),
            2 => Ok(SinkMode::File),
            3 => Ok(SinkMode::Database),
            4 => Ok(SinkMode::Queue),
            _ => Err(DispatchError::unknown_mode(code)),
        }
    }
}

impl fmt::Display for SinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for SinkMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(SinkMode::Console),
            "file" => Ok(SinkMode::File),
            "database" | "db" => Ok(SinkMode::Database),
            "queue" | "mq" => Ok(SinkMode::Queue),
            _ => Err(format!("Invalid sink mode: '{}'", s)),
        }
    }
}

/// Declarative logging settings attached to one call site.
///
/// The optional `target` redirects every line of the rendered block to an
/// alternate writer for that invocation; absent, the dispatcher's default
/// writer is used.
#[derive(Clone)]
pub struct LoggingPolicy {
    pub level: Verbosity,
    pub mode: SinkMode,
    pub target: Option<Arc<dyn LineWriter>>,
}

impl LoggingPolicy {
    pub fn new(level: Verbosity, mode: SinkMode) -> Self {
        Self {
            level,
            mode,
            target: None,
        }
    }

    /// Build a policy from the raw integer codes an annotation carries.
    ///
    /// The level code clamps into range; an unknown mode code is an error.
    pub fn from_codes(level_code: i32, mode_code: i32) -> Result<Self> {
        Ok(Self::new(
            Verbosity::from_code(level_code),
            SinkMode::from_code(mode_code)?,
        ))
    }

    /// Redirect this call's output to an alternate writer
    #[must_use]
    pub fn with_target(mut self, target: Arc<dyn LineWriter>) -> Self {
        self.target = Some(target);
        self
    }
}

impl fmt::Debug for LoggingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingPolicy")
            .field("level", &self.level)
            .field("mode", &self.mode)
            .field("target", &self.target.as_ref().map(|_| "<writer>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_codes() {
        assert_eq!(SinkMode::from_code(1).unwrap(), SinkMode::Console);
        assert_eq!(SinkMode::from_code(4).unwrap(), SinkMode::Queue);
        assert_eq!(SinkMode::Queue.code(), 4);
    }

    #[test]
    fn test_unknown_mode_code_is_an_error() {
        let err = SinkMode::from_code(99).unwrap_err();
        assert!(matches!(err, DispatchError::UnknownMode { code: 99 }));
    }

    #[test]
    fn test_policy_from_codes() {
        let policy = LoggingPolicy::from_codes(2, 3).unwrap();
        assert_eq!(policy.level, Verbosity::Detailed);
        assert_eq!(policy.mode, SinkMode::Database);
        assert!(policy.target.is_none());

        assert!(LoggingPolicy::from_codes(1, 0).is_err());
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("MQ".parse::<SinkMode>(), Ok(SinkMode::Queue));
        assert!("syslog".parse::<SinkMode>().is_err());
    }
}
