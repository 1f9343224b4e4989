//! Best-so-far events streamed while solving.

use std::time::Duration;

use raises_core::{Group, Successes};
use serde::{Serialize, Serializer};

/// A new best grouping, sent each time the incumbent strictly improves.
///
/// Scores include successes reserved by the reduction pass; groups cover
/// only the searched dice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Improvement {
    pub score: Successes,
    pub groups: Vec<Group>,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
    pub nodes_explored: u64,
}

pub(crate) fn serialize_millis<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}
