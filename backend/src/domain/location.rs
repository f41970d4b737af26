//! Location records and their lifecycle types.
//!
//! A location is a point of interest shown as a marker on the city map. The
//! store assigns identifiers on insert; coordinates are free-form floats with
//! no range validation at this layer (the map view assumes the city bounding
//! box, the store does not enforce it).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Two-valued lifecycle status for a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationStatus {
    /// The location is open and shown with the active treatment.
    #[default]
    Active,
    /// The location is closed or otherwise dormant.
    Inactive,
}

impl LocationStatus {
    /// Wire representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for LocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when parsing an unknown status string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown location status: {value}")]
pub struct StatusParseError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for LocationStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(StatusParseError {
                value: other.to_owned(),
            }),
        }
    }
}

/// A stored point of interest.
///
/// ## Invariants
/// - `id` is assigned by the store on insert, unique across the collection,
///   and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Opaque unique identifier assigned by the store.
    pub id: String,
    /// Display title of the point of interest.
    pub title: String,
    /// Street address.
    pub address: String,
    /// Category text, serialised as `type` on the wire.
    pub kind: String,
    /// Lifecycle status.
    pub status: LocationStatus,
    /// Optional free-text description; absent is stored as `None`.
    pub description: Option<String>,
    /// Latitude in WGS84.
    pub lat: f64,
    /// Longitude in WGS84.
    pub lng: f64,
}

impl Location {
    /// Materialise a record from creation fields and a store-assigned id.
    #[must_use]
    pub fn from_new(id: impl Into<String>, fields: NewLocation) -> Self {
        Self {
            id: id.into(),
            title: fields.title,
            address: fields.address,
            kind: fields.kind,
            status: fields.status,
            description: fields.description,
            lat: fields.lat,
            lng: fields.lng,
        }
    }
}

/// Fields accepted when creating a location. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    /// Display title of the point of interest.
    pub title: String,
    /// Street address.
    pub address: String,
    /// Category text.
    pub kind: String,
    /// Lifecycle status, defaulting to [`LocationStatus::Active`].
    pub status: LocationStatus,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Latitude in WGS84.
    pub lat: f64,
    /// Longitude in WGS84.
    pub lng: f64,
}

/// Partial update merged onto an existing record.
///
/// `None` fields leave the stored value untouched. The nested option on
/// `description` distinguishes "leave unchanged" (`None`) from "clear to
/// null" (`Some(None)`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement address.
    pub address: Option<String>,
    /// Replacement category text.
    pub kind: Option<String>,
    /// Replacement status.
    pub status: Option<LocationStatus>,
    /// Replacement description, with `Some(None)` clearing it.
    pub description: Option<Option<String>>,
    /// Replacement latitude.
    pub lat: Option<f64>,
    /// Replacement longitude.
    pub lng: Option<f64>,
}

impl LocationPatch {
    /// Merge the supplied fields onto `location`, leaving the rest as-is.
    pub fn apply_to(&self, location: &mut Location) {
        if let Some(title) = &self.title {
            location.title = title.clone();
        }
        if let Some(address) = &self.address {
            location.address = address.clone();
        }
        if let Some(kind) = &self.kind {
            location.kind = kind.clone();
        }
        if let Some(status) = self.status {
            location.status = status;
        }
        if let Some(description) = &self.description {
            location.description = description.clone();
        }
        if let Some(lat) = self.lat {
            location.lat = lat;
        }
        if let Some(lng) = self.lng {
            location.lng = lng;
        }
    }
}
