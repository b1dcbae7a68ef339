use std::fmt;

use thiserror::Error;

/// One of the three upstream calls composing the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    IpLookup,
    Geolocation,
    FlyoverSchedule,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::IpLookup => write!(f, "IP"),
            Stage::Geolocation => write!(f, "coordinates for IP"),
            Stage::FlyoverSchedule => write!(f, "flyover times"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SpotterError {
    #[error("transport failure when fetching {stage}: {source}")]
    Transport {
        stage: Stage,
        #[source]
        source: reqwest::Error,
    },

    #[error("Status Code {status} when fetching {stage}. Response: {body}")]
    UpstreamStatus {
        stage: Stage,
        status: u16,
        body: String,
    },

    #[error("unexpected payload when fetching {stage}: {source}")]
    Parse {
        stage: Stage,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl SpotterError {
    /// Stage the error arose in, for upstream-call errors.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            SpotterError::Transport { stage, .. }
            | SpotterError::UpstreamStatus { stage, .. }
            | SpotterError::Parse { stage, .. } => Some(*stage),
            SpotterError::InvalidConfigValue { .. } => None,
        }
    }

    /// Process exit code, one per error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            SpotterError::InvalidConfigValue { .. } => 1,
            SpotterError::Transport { .. } => 2,
            SpotterError::UpstreamStatus { .. } => 3,
            SpotterError::Parse { .. } => 4,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SpotterError::Transport { .. } => "Check your network connection and try again",
            SpotterError::UpstreamStatus { .. } => {
                "The upstream service rejected the request; wait a moment and retry"
            }
            SpotterError::Parse { .. } => {
                "The upstream service returned an unexpected payload; check the endpoint URL"
            }
            SpotterError::InvalidConfigValue { .. } => "Fix the endpoint flags and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, SpotterError>;
