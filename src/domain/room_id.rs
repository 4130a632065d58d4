use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier the vacuum uses for a room segment.
///
/// Firmwares disagree on the type: some number their segments, some name
/// them. Both forms pass through unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoomId {
    Num(i64),
    Str(String),
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomId::Num(n) => write!(f, "{}", n),
            RoomId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RoomId {
    fn from(n: i64) -> Self {
        RoomId::Num(n)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        RoomId::Str(s.to_string())
    }
}
