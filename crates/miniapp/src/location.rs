//! Wire representation of a point of interest.

use serde::{Deserialize, Serialize};

/// A location record as served by `GET /api/locations`.
///
/// `status` stays a free string on the client; anything other than
/// `"active"` renders with the inactive treatment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Opaque unique identifier assigned by the server.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Street address.
    pub address: String,
    /// Category text.
    #[serde(rename = "type")]
    pub kind: String,
    /// Lifecycle status string.
    pub status: String,
    /// Optional description, `null` on the wire when absent.
    pub description: Option<String>,
    /// Latitude in WGS84.
    pub lat: f64,
    /// Longitude in WGS84.
    pub lng: f64,
}

impl Location {
    /// Whether the record carries the active status.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}
