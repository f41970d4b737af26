//! Capability-detection boundary towards the enclosing chat-app host.
//!
//! When the mini-app runs inside the Telegram WebApp container, identity and
//! native dialogs come from the host; outside it, the UI must stay fully
//! usable with browser-grade fallbacks. The boundary is a polymorphic
//! adapter selected once at startup, not a hard dependency.

use std::sync::Arc;

use tracing::info;

use crate::events::{MapEvents, MapSignal};

/// Header colour applied to the host chrome on startup.
pub const HEADER_COLOR: &str = "#0088CC";
/// Background colour applied to the host chrome on startup.
pub const BACKGROUND_COLOR: &str = "#FFFFFF";

const FALLBACK_DISPLAY_NAME: &str = "Пользователь";

/// Identity fields exposed by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostUser {
    /// Given name, when the host shares it.
    pub first_name: Option<String>,
    /// Account username, when the host shares it.
    pub username: Option<String>,
}

impl HostUser {
    /// Name shown in the navigation header, with a generic fallback.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.first_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or(FALLBACK_DISPLAY_NAME)
    }
}

/// Raw surface of the Telegram WebApp container.
///
/// Implemented by whatever glue layer bridges to the real JS object; tests
/// implement it with recording stubs.
pub trait TelegramBridge: Send + Sync {
    /// Identity of the current user, if the host shares one.
    fn init_user(&self) -> Option<HostUser>;
    /// Signal that the app has finished loading.
    fn ready(&self);
    /// Ask the host to expand the web view.
    fn expand(&self);
    /// Set the host header colour.
    fn set_header_color(&self, color: &str);
    /// Set the host background colour.
    fn set_background_color(&self, color: &str);
    /// Share a text through the host share sheet.
    fn share_message(&self, text: &str);
    /// Show a native alert dialog.
    fn show_alert(&self, message: &str);
    /// Show a native confirm dialog and return the choice.
    fn show_confirm(&self, message: &str) -> bool;
}

/// Host capabilities consumed by the shell and panel.
pub trait HostAdapter: Send + Sync {
    /// Current user identity, if any.
    fn user(&self) -> Option<HostUser>;
    /// Forward a share text to the host.
    fn share_text(&self, text: &str);
    /// Raise a blocking alert.
    fn show_alert(&self, message: &str);
    /// Raise a blocking confirm and return the choice.
    fn show_confirm(&self, message: &str) -> bool;
}

/// Adapter used inside the Telegram WebApp container.
///
/// Construction performs the startup handshake: ready, expand, and the two
/// theme colours. Viewport-change notifications from the container are fed
/// through [`TelegramHost::handle_viewport_change`], which republishes them
/// on the map event bus.
pub struct TelegramHost {
    bridge: Arc<dyn TelegramBridge>,
    events: MapEvents,
}

impl TelegramHost {
    /// Wrap the bridge and run the startup handshake.
    #[must_use]
    pub fn new(bridge: Arc<dyn TelegramBridge>, events: MapEvents) -> Self {
        bridge.ready();
        bridge.expand();
        bridge.set_header_color(HEADER_COLOR);
        bridge.set_background_color(BACKGROUND_COLOR);
        Self { bridge, events }
    }

    /// Forward a container viewport change to the map widget.
    pub fn handle_viewport_change(&self) {
        self.events.publish(MapSignal::ViewportChanged);
    }
}

impl HostAdapter for TelegramHost {
    fn user(&self) -> Option<HostUser> {
        self.bridge.init_user()
    }

    fn share_text(&self, text: &str) {
        self.bridge.share_message(text);
    }

    fn show_alert(&self, message: &str) {
        self.bridge.show_alert(message);
    }

    fn show_confirm(&self, message: &str) -> bool {
        self.bridge.show_confirm(message)
    }
}

/// Fallback adapter for plain browsers.
///
/// Dialogs degrade to log lines and a fixed confirm outcome so the UI keeps
/// functioning outside the host environment.
pub struct BrowserHost {
    confirm_outcome: bool,
}

impl Default for BrowserHost {
    fn default() -> Self {
        Self {
            confirm_outcome: true,
        }
    }
}

impl BrowserHost {
    /// Create the fallback adapter accepting confirms by default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the outcome returned by [`HostAdapter::show_confirm`].
    #[must_use]
    pub fn with_confirm_outcome(mut self, outcome: bool) -> Self {
        self.confirm_outcome = outcome;
        self
    }
}

impl HostAdapter for BrowserHost {
    fn user(&self) -> Option<HostUser> {
        None
    }

    fn share_text(&self, text: &str) {
        info!(text, "share requested outside host environment");
    }

    fn show_alert(&self, message: &str) {
        info!(message, "alert outside host environment");
    }

    fn show_confirm(&self, message: &str) -> bool {
        info!(message, outcome = self.confirm_outcome, "confirm outside host environment");
        self.confirm_outcome
    }
}

/// Select the adapter once at startup based on host presence.
#[must_use]
pub fn detect(bridge: Option<Arc<dyn TelegramBridge>>, events: &MapEvents) -> Arc<dyn HostAdapter> {
    match bridge {
        Some(bridge) => Arc::new(TelegramHost::new(bridge, events.clone())),
        None => {
            info!("running outside the Telegram WebApp environment");
            Arc::new(BrowserHost::new())
        }
    }
}
