//! Headless model of the interactive city map widget.
//!
//! Tile rendering happens elsewhere; this module tracks what the widget
//! would show: the current view, the marker set, and reactions to ambient
//! signals from the event bus.

use tracing::debug;

use crate::events::{MapEvents, MapSignal, Subscription};
use crate::location::Location;

/// Default zoom when the map first opens.
pub const INITIAL_ZOOM: u8 = 14;
/// Lower zoom limit.
pub const MIN_ZOOM: u8 = 12;
/// Upper zoom limit.
pub const MAX_ZOOM: u8 = 18;
/// Zoom applied when centring on the device position.
pub const LOCATE_ZOOM: u8 = 16;

/// Geographic centre of Zelenogorsk.
pub const CITY_CENTER: (f64, f64) = (56.120, 94.560);

/// Rectangular extent of the city.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityBounds {
    /// South-west corner as (lat, lng).
    pub south_west: (f64, f64),
    /// North-east corner as (lat, lng).
    pub north_east: (f64, f64),
}

/// The Zelenogorsk city extent used for panning limits and locate checks.
pub const CITY_BOUNDS: CityBounds = CityBounds {
    south_west: (56.100, 94.520),
    north_east: (56.140, 94.600),
};

impl CityBounds {
    /// Whether a point falls inside the extent.
    #[must_use]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.south_west.0
            && lat <= self.north_east.0
            && lng >= self.south_west.1
            && lng <= self.north_east.1
    }

    /// Nearest point inside the extent.
    #[must_use]
    pub fn clamp(&self, lat: f64, lng: f64) -> (f64, f64) {
        (
            lat.clamp(self.south_west.0, self.north_east.0),
            lng.clamp(self.south_west.1, self.north_east.1),
        )
    }
}

/// Whether panning is restricted to the city extent.
///
/// The embedded map locks the view to the city; the standalone variant lets
/// the user roam. Both behaviours are kept behind this switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsMode {
    /// Keep the view inside [`CityBounds`].
    #[default]
    Clamp,
    /// Allow the view to leave the city extent.
    Unrestricted,
}

/// Configuration the widget is mounted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    /// Initial view centre as (lat, lng).
    pub center: (f64, f64),
    /// Initial zoom level.
    pub zoom: u8,
    /// Panning restriction.
    pub bounds_mode: BoundsMode,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: CITY_CENTER,
            zoom: INITIAL_ZOOM,
            bounds_mode: BoundsMode::Clamp,
        }
    }
}

/// Marker-tap callback. Receives the record behind the tapped marker.
pub type MarkerCallback = Box<dyn FnMut(Location) + Send>;

/// State of a mounted map widget.
///
/// Holds a bus subscription for its whole lifetime; dropping the widget
/// detaches it, so remounting never accumulates stale listeners.
pub struct MapView {
    config: MapConfig,
    center: (f64, f64),
    zoom: u8,
    markers: Vec<Location>,
    on_activate: MarkerCallback,
    signals: Subscription,
    size_invalidations: u64,
    loaded: bool,
}

impl MapView {
    /// Mount the widget against the shared event bus.
    #[must_use]
    pub fn new(config: MapConfig, events: &MapEvents, on_activate: MarkerCallback) -> Self {
        Self {
            center: config.center,
            zoom: config.zoom,
            config,
            markers: Vec::new(),
            on_activate,
            signals: events.subscribe(),
            size_invalidations: 0,
            loaded: false,
        }
    }

    /// Current view centre as (lat, lng).
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    /// Current zoom level.
    #[must_use]
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Whether the widget still awaits its first data set.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        !self.loaded
    }

    /// Records currently shown as markers.
    #[must_use]
    pub fn markers(&self) -> &[Location] {
        &self.markers
    }

    /// Times the widget was told to recalculate its size.
    #[must_use]
    pub fn size_invalidations(&self) -> u64 {
        self.size_invalidations
    }

    /// Replace the marker set with the given records.
    ///
    /// The whole layer is rebuilt rather than diffed, matching how the
    /// rendering side clears and re-adds markers on every refresh.
    pub fn set_locations(&mut self, locations: Vec<Location>) {
        debug!(count = locations.len(), "rebuilding marker layer");
        self.markers = locations;
        self.loaded = true;
    }

    /// Simulate a tap on the marker for `id`.
    ///
    /// Returns `false` when no marker carries that id.
    pub fn activate_marker(&mut self, id: &str) -> bool {
        let Some(location) = self.markers.iter().find(|l| l.id == id).cloned() else {
            return false;
        };
        (self.on_activate)(location);
        true
    }

    /// Move the view, honouring the zoom limits and the bounds mode.
    pub fn set_view(&mut self, lat: f64, lng: f64, zoom: u8) {
        self.center = match self.config.bounds_mode {
            BoundsMode::Clamp => CITY_BOUNDS.clamp(lat, lng),
            BoundsMode::Unrestricted => (lat, lng),
        };
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Apply every signal published since the last call.
    pub fn pump_events(&mut self) {
        for signal in self.signals.drain() {
            match signal {
                MapSignal::CenterOnUser { lat, lng, zoom } => self.set_view(lat, lng, zoom),
                MapSignal::ViewportChanged => self.size_invalidations += 1,
            }
        }
    }
}
