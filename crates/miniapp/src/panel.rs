//! Detail overlay shown when a marker is activated.

use crate::host::HostAdapter;
use crate::location::Location;

/// Status label shown for active records.
pub const STATUS_ACTIVE: &str = "Активен";
/// Status label shown for every other record.
pub const STATUS_INACTIVE: &str = "Неактивен";

/// Overlay state: hidden, or showing one record.
#[derive(Default)]
pub struct DetailsPanel {
    current: Option<Location>,
}

impl DetailsPanel {
    /// Create the panel in its hidden state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the panel for `location`, replacing any previous record.
    pub fn open(&mut self, location: Location) {
        self.current = Some(location);
    }

    /// Hide the panel.
    pub fn close(&mut self) {
        self.current = None;
    }

    /// Whether the overlay is currently shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Render-ready view of the shown record, if any.
    #[must_use]
    pub fn view(&self) -> Option<PanelView<'_>> {
        self.current.as_ref().map(PanelView::new)
    }

    /// Forward the shown record as a share text to the host.
    ///
    /// No-op while hidden.
    pub fn share(&self, host: &dyn HostAdapter) {
        if let Some(view) = self.view() {
            host.share_text(&view.share_text());
        }
    }
}

/// Presentation of one record inside the panel.
pub struct PanelView<'a> {
    location: &'a Location,
}

impl<'a> PanelView<'a> {
    fn new(location: &'a Location) -> Self {
        Self { location }
    }

    /// The record behind the view.
    #[must_use]
    pub fn location(&self) -> &Location {
        self.location
    }

    /// Human-readable status label.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.location.is_active() {
            STATUS_ACTIVE
        } else {
            STATUS_INACTIVE
        }
    }

    /// Share text: title, address, and description on separate lines.
    ///
    /// A missing description leaves the third line empty rather than
    /// dropping it.
    #[must_use]
    pub fn share_text(&self) -> String {
        format!(
            "{}\n{}\n{}",
            self.location.title,
            self.location.address,
            self.location.description.as_deref().unwrap_or_default()
        )
    }

    /// External directions link for the record's coordinates.
    #[must_use]
    pub fn directions_url(&self) -> String {
        format!(
            "https://maps.google.com/maps?daddr={},{}",
            self.location.lat, self.location.lng
        )
    }
}
