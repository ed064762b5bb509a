use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Failure reported by the player collaborator.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PlayerError {
    /// The player instance could not be created.
    Connect(String),
    /// A transport control request was rejected.
    Request(String),
    /// The stream ended with a fault.
    Stream(String),
}

impl PlayerError {
    pub fn message(&self) -> String {
        match &self {
            PlayerError::Connect(message) => format!("Failed to connect: {}", message),
            PlayerError::Request(message) => format!("Control request rejected: {}", message),
            PlayerError::Stream(message) => format!("Stream failed: {}", message),
        }
    }
    pub fn code(&self) -> u32 {
        match &self {
            PlayerError::Connect(_) => 1,
            PlayerError::Request(_) => 2,
            PlayerError::Stream(_) => 3,
        }
    }
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Serialize for PlayerError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("PlayerError", 2)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}
