//! Headless model of the Zelenogorsk Telegram mini-app.
//!
//! The rendering layer (tiles, DOM, Telegram WebApp JS object) lives outside
//! this crate; here we model the state and behaviour of each UI component so
//! the interaction logic is testable on its own:
//!
//! - [`mapview`] — the map widget: markers, bounds, zoom, ambient signals.
//! - [`panel`] — the marker detail overlay and its share/directions actions.
//! - [`shell`] — the host page: selection state, fetching, refresh timing.
//! - [`host`] — the capability-detection boundary towards the enclosing
//!   chat-app host, with a browser fallback.
//! - [`events`] — the explicit event bus replacing window-level dispatch.
//! - [`client`] — the HTTP client for the locations API.

pub mod client;
pub mod events;
pub mod host;
pub mod location;
pub mod mapview;
pub mod panel;
pub mod shell;

pub use location::Location;
