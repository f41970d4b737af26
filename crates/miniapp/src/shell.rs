//! Page-level state: fetching, selection, refresh timing, floating controls.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, channel};
use std::time::Duration;

use tracing::{info, warn};

use crate::client::{ClientError, LocationsClient};
use crate::events::{MapEvents, MapSignal};
use crate::host::HostAdapter;
use crate::location::Location;
use crate::mapview::{CITY_BOUNDS, CITY_CENTER, INITIAL_ZOOM, LOCATE_ZOOM, MapConfig, MapView};
use crate::panel::DetailsPanel;

/// Minimum time the refresh spinner stays visible.
///
/// A refresh that completes instantly would read as a broken button, so
/// the spinner is held for at least this long.
pub const REFRESH_SPINNER_MIN: Duration = Duration::from_millis(1000);

/// Alert shown when the device position falls outside the city.
pub const OUTSIDE_CITY_ALERT: &str = "Вы находитесь за пределами Зеленогорска";
/// Alert shown when the device position cannot be determined.
pub const GEOLOCATION_FAILED_ALERT: &str = "Не удалось определить местоположение";
/// Alert shown when the platform offers no geolocation at all.
pub const GEOLOCATION_UNSUPPORTED_ALERT: &str = "Геолокация не поддерживается";

/// Outcome of asking the device for its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DevicePosition {
    /// Resolved coordinates as (lat, lng).
    At(f64, f64),
    /// The lookup ran and failed.
    Unavailable,
    /// The platform has no geolocation capability.
    Unsupported,
}

/// Top-level state of the mini-app page.
///
/// Owns the map widget and the detail panel, and routes marker activations
/// from the former into the latter.
pub struct Shell {
    client: Arc<dyn LocationsClient>,
    host: Arc<dyn HostAdapter>,
    map: MapView,
    panel: DetailsPanel,
    activations: Receiver<Location>,
    refreshing: bool,
}

impl Shell {
    /// Assemble the page around its collaborators.
    #[must_use]
    pub fn new(
        client: Arc<dyn LocationsClient>,
        host: Arc<dyn HostAdapter>,
        events: &MapEvents,
    ) -> Self {
        let (tx, activations) = channel();
        let map = MapView::new(
            MapConfig::default(),
            events,
            Box::new(move |location| {
                // The shell may already be gone during teardown.
                let _ = tx.send(location);
            }),
        );
        Self {
            client,
            host,
            map,
            panel: DetailsPanel::new(),
            activations,
            refreshing: false,
        }
    }

    /// Initial data load after mounting.
    ///
    /// # Errors
    /// Returns the client error when the backend cannot be reached; the
    /// marker layer is left untouched in that case.
    pub async fn start(&mut self) -> Result<(), ClientError> {
        let locations = self.client.list().await?;
        info!(count = locations.len(), "initial location load");
        self.map.set_locations(locations);
        Ok(())
    }

    /// Re-fetch the collection, holding the spinner for its minimum time.
    ///
    /// # Errors
    /// Returns the client error when the re-fetch fails; the previous
    /// marker set stays on screen.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        self.refreshing = true;
        let started = tokio::time::Instant::now();
        let outcome = self.client.list().await;
        if let Some(remaining) = REFRESH_SPINNER_MIN.checked_sub(started.elapsed()) {
            tokio::time::sleep(remaining).await;
        }
        self.refreshing = false;
        match outcome {
            Ok(locations) => {
                self.map.set_locations(locations);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "location refresh failed");
                Err(err)
            }
        }
    }

    /// Whether a refresh is in flight.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Apply pending bus signals and marker activations.
    pub fn pump(&mut self) {
        self.map.pump_events();
        while let Ok(location) = self.activations.try_recv() {
            self.panel.open(location);
        }
    }

    /// The map widget.
    #[must_use]
    pub fn map(&self) -> &MapView {
        &self.map
    }

    /// Mutable access to the map widget.
    pub fn map_mut(&mut self) -> &mut MapView {
        &mut self.map
    }

    /// The detail panel.
    #[must_use]
    pub fn panel(&self) -> &DetailsPanel {
        &self.panel
    }

    /// Dismiss the detail panel.
    pub fn close_details(&mut self) {
        self.panel.close();
    }

    /// Share the selected record through the host.
    pub fn share_selected(&self) {
        self.panel.share(self.host.as_ref());
    }

    /// Number of markers currently shown.
    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.map.markers().len()
    }

    /// Name shown in the header for the current user.
    #[must_use]
    pub fn user_display_name(&self) -> String {
        self.host
            .user()
            .unwrap_or_default()
            .display_name()
            .to_owned()
    }
}

/// The locate button floating over the map.
pub struct FloatingControls {
    events: MapEvents,
    host: Arc<dyn HostAdapter>,
}

impl FloatingControls {
    /// Wire the controls to the bus and the host.
    #[must_use]
    pub fn new(events: MapEvents, host: Arc<dyn HostAdapter>) -> Self {
        Self { events, host }
    }

    /// Handle a locate request with the resolved device position.
    ///
    /// A position inside the city centres the map on it at the locate zoom.
    /// A position outside falls back to the city centre with an alert.
    /// Failed and unsupported lookups raise their own alerts without moving
    /// anywhere new.
    pub fn center_on_device(&self, position: DevicePosition) {
        match position {
            DevicePosition::At(lat, lng) if CITY_BOUNDS.contains(lat, lng) => {
                self.events.publish(MapSignal::CenterOnUser {
                    lat,
                    lng,
                    zoom: LOCATE_ZOOM,
                });
            }
            DevicePosition::At(_, _) => {
                self.host.show_alert(OUTSIDE_CITY_ALERT);
                self.events.publish(MapSignal::CenterOnUser {
                    lat: CITY_CENTER.0,
                    lng: CITY_CENTER.1,
                    zoom: INITIAL_ZOOM,
                });
            }
            DevicePosition::Unavailable => self.host.show_alert(GEOLOCATION_FAILED_ALERT),
            DevicePosition::Unsupported => self.host.show_alert(GEOLOCATION_UNSUPPORTED_ALERT),
        }
    }
}
