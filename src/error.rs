//! Boundary errors
//!
//! The engines themselves are total over their typed inputs and never fail.
//! Everything here comes from turning outside data (tags, JSON bodies,
//! environment settings, files) into those typed inputs.

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "message")]
pub enum GuidanceError {
  #[error("Unknown {kind}: {value}")]
  UnknownTag { kind: String, value: String },

  #[error("Invalid setting {key}={value}")]
  InvalidSetting { key: String, value: String },

  #[error("Invalid request: {0}")]
  InvalidRequest(String),

  #[error("IO error: {0}")]
  Io(String),
}

impl GuidanceError {
  pub fn unknown_tag(kind: &str, value: &str) -> Self {
    GuidanceError::UnknownTag {
      kind: kind.to_string(),
      value: value.to_string(),
    }
  }

  pub fn invalid_setting(key: &str, value: &str) -> Self {
    GuidanceError::InvalidSetting {
      key: key.to_string(),
      value: value.to_string(),
    }
  }
}

// Convert serde_json::Error to GuidanceError
impl From<serde_json::Error> for GuidanceError {
  fn from(e: serde_json::Error) -> Self {
    GuidanceError::InvalidRequest(e.to_string())
  }
}

impl From<std::io::Error> for GuidanceError {
  fn from(e: std::io::Error) -> Self {
    GuidanceError::Io(e.to_string())
  }
}

pub type Result<T> = std::result::Result<T, GuidanceError>;
