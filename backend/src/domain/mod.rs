//! Domain primitives and aggregates.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers. Keep types immutable where practical and document
//! invariants in each type's Rustdoc. Transport concerns (serde shapes,
//! status codes) live in the inbound adapter, not here.

pub mod error;
pub mod location;
pub mod ports;
pub mod user;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::location::{Location, LocationPatch, LocationStatus, NewLocation, StatusParseError};
pub use self::user::{NewUser, User};
