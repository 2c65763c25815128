//! Local view state.
//!
//! [`ViewerState`] is driven by three inputs: the initial REST fetch,
//! push events from the server, and the user's own commands. Time is
//! passed in explicitly so alert expiry can be tested without sleeping.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use jeevansetu_types::{PushEvent, ResourceKind, Snapshot};
use tracing::debug;

use crate::config::ViewerConfig;
use crate::district::District;
use crate::error::ViewerError;
use crate::intel::{self, ResourceIntel};
use crate::log::ActivityLog;
use crate::role::Role;

/// Logged once the first snapshot arrives.
pub const MSG_INITIAL_SYNC: &str = "Initial data sync completed.";
/// Logged on every pushed snapshot.
pub const MSG_UPDATE: &str = "IoT node resource update received.";
/// Prefix for logged server alerts.
pub const MSG_ALERT_PREFIX: &str = "AI Alert: ";
/// Logged after a surge request succeeds.
pub const MSG_SURGE: &str = "Emergency surge executed by Admin.";
/// Logged after a reset request succeeds.
pub const MSG_RESET: &str = "System reset performed.";
/// Logged by the cyber-attack drill.
pub const MSG_TAMPERING: &str = "⚠ Suspicious data tampering attempt detected.";
/// Banner shown by the cyber-attack drill.
pub const CYBER_ALERT: &str = "🚨 Cyber Anomaly Detected - Node Isolated";

/// The banner currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveAlert {
    /// Alert text.
    pub message: String,
    /// When it was raised.
    pub raised_at: Instant,
}

/// Everything the viewer displays.
#[derive(Debug, Clone)]
pub struct ViewerState {
    snapshot: Option<Snapshot>,
    alert: Option<ActiveAlert>,
    log: ActivityLog,
    role: Role,
    district: District,
    last_updated: Option<DateTime<Local>>,
    alert_ttl: Duration,
}

impl ViewerState {
    /// Empty state: no snapshot yet, Public role, configured district.
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            snapshot: None,
            alert: None,
            log: ActivityLog::new(),
            role: Role::default(),
            district: config.district,
            last_updated: None,
            alert_ttl: config.alert_ttl,
        }
    }

    // -- server input -----------------------------------------------------

    /// Install the snapshot fetched at startup.
    pub fn initial_sync(&mut self, snapshot: Snapshot) {
        self.replace_snapshot(snapshot);
        self.log.push(MSG_INITIAL_SYNC);
    }

    /// Apply one push event.
    pub fn apply_event(&mut self, event: PushEvent, now: Instant) {
        match event {
            PushEvent::UpdateData(snapshot) => {
                self.replace_snapshot(snapshot);
                self.log.push(MSG_UPDATE);
            }
            PushEvent::Alert(message) => {
                self.log.push(format!("{MSG_ALERT_PREFIX}{message}"));
                self.raise_alert(message, now);
            }
        }
    }

    fn replace_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = Some(snapshot);
        self.last_updated = Some(Local::now());
    }

    // -- alert banner -------------------------------------------------------

    /// Show `message`, replacing any current banner and restarting the
    /// expiry clock.
    pub fn raise_alert(&mut self, message: impl Into<String>, now: Instant) {
        self.alert = Some(ActiveAlert {
            message: message.into(),
            raised_at: now,
        });
    }

    /// The banner text, if one is showing and has not expired.
    pub fn active_alert(&self, now: Instant) -> Option<&str> {
        self.alert
            .as_ref()
            .filter(|a| now.saturating_duration_since(a.raised_at) < self.alert_ttl)
            .map(|a| a.message.as_str())
    }

    /// Drop an expired banner. Returns `true` if one was removed.
    pub fn expire_alert(&mut self, now: Instant) -> bool {
        let expired = self
            .alert
            .as_ref()
            .is_some_and(|a| now.saturating_duration_since(a.raised_at) >= self.alert_ttl);
        if expired {
            debug!("Alert banner expired");
            self.alert = None;
        }
        expired
    }

    // -- local controls -----------------------------------------------------

    /// Fail unless the role is Admin.
    pub const fn require_admin(&self, action: &'static str) -> Result<(), ViewerError> {
        if self.role.is_admin() {
            Ok(())
        } else {
            Err(ViewerError::AdminRequired { action })
        }
    }

    /// Log a successful surge request.
    pub fn record_surge(&mut self) {
        self.log.push(MSG_SURGE);
    }

    /// Log a successful reset request.
    pub fn record_reset(&mut self) {
        self.log.push(MSG_RESET);
    }

    /// Run the local cyber-attack drill: one log entry and a banner.
    /// Nothing is sent to the server.
    pub fn simulate_cyber_attack(&mut self, now: Instant) -> Result<(), ViewerError> {
        self.require_admin("attack")?;
        self.log.push(MSG_TAMPERING);
        self.raise_alert(CYBER_ALERT, now);
        Ok(())
    }

    /// Switch role.
    pub const fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Switch district.
    pub const fn set_district(&mut self, district: District) {
        self.district = district;
    }

    /// Intelligence view for one resource, if the snapshot has it.
    pub fn intel(&self, kind: ResourceKind) -> Option<ResourceIntel> {
        self.snapshot
            .as_ref()
            .and_then(|s| s.value_of(kind))
            .map(|value| intel::assess(kind.to_string(), value))
    }

    // -- accessors -----------------------------------------------------------

    /// The latest snapshot, if any has arrived.
    pub const fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// The activity log.
    pub const fn log(&self) -> &ActivityLog {
        &self.log
    }

    /// Current role.
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Current district.
    pub const fn district(&self) -> District {
        self.district
    }

    /// Wall-clock time of the last snapshot change.
    pub const fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }
}
