//! Device snapshot types reported by a power-supply data source.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of power-supply device.
///
/// Unrecognized kinds from upstream deserialize to [`DeviceKind::Other`]
/// instead of failing the whole device list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    LinePower,
    Battery,
    Ups,
    Monitor,
    Mouse,
    Keyboard,
    Pda,
    Phone,
    MediaPlayer,
    Tablet,
    Computer,
    #[default]
    #[serde(other)]
    Other,
}

impl DeviceKind {
    /// Raw identifier token, matching the serialized form.
    pub fn id(&self) -> &'static str {
        match self {
            DeviceKind::LinePower => "line_power",
            DeviceKind::Battery => "battery",
            DeviceKind::Ups => "ups",
            DeviceKind::Monitor => "monitor",
            DeviceKind::Mouse => "mouse",
            DeviceKind::Keyboard => "keyboard",
            DeviceKind::Pda => "pda",
            DeviceKind::Phone => "phone",
            DeviceKind::MediaPlayer => "media_player",
            DeviceKind::Tablet => "tablet",
            DeviceKind::Computer => "computer",
            DeviceKind::Other => "other",
        }
    }

    /// Human-readable display name. Falls back to the raw identifier for
    /// kinds without a fixed name.
    pub fn label(&self) -> &'static str {
        match self {
            DeviceKind::LinePower => "AC adapter",
            DeviceKind::Battery => "Battery",
            DeviceKind::Ups => "UPS",
            DeviceKind::Monitor => "Monitor",
            DeviceKind::Mouse => "Mouse",
            DeviceKind::Keyboard => "Keyboard",
            DeviceKind::Pda => "PDA",
            DeviceKind::Phone => "Cell phone",
            DeviceKind::MediaPlayer => "Media player",
            DeviceKind::Tablet => "Tablet",
            DeviceKind::Computer => "Computer",
            DeviceKind::Other => self.id(),
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Charge state of a single device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeviceState {
    Charging,
    Discharging,
    FullyCharged,
    Empty,
    PendingCharge,
    PendingDischarge,
    #[default]
    #[serde(other)]
    Unknown,
}

impl DeviceState {
    pub fn is_charging(&self) -> bool {
        matches!(self, DeviceState::Charging)
    }

    pub fn is_discharging(&self) -> bool {
        matches!(self, DeviceState::Discharging)
    }

    /// Charging or discharging, i.e. the battery is actually in use.
    pub fn is_active(&self) -> bool {
        matches!(self, DeviceState::Charging | DeviceState::Discharging)
    }
}

/// Point-in-time report of one device.
///
/// Snapshots are value objects: a device-list update replaces the whole
/// collection, it never mutates an existing snapshot in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DeviceSnapshot {
    /// Opaque stable identity (object path on the source side).
    pub path: String,
    pub kind: DeviceKind,
    pub state: DeviceState,
    /// Charge level in `[0, 100]`.
    pub percentage: f32,
    /// Estimated seconds to empty (discharging) or to full (charging).
    /// Zero means unknown or not applicable.
    pub time_secs: u64,
    /// Icon name last reported by the source, used as a severity hint.
    pub icon_hint: String,
}

/// Configured policy for whether a status indicator should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityMode {
    /// Show whenever at least one battery is present.
    #[default]
    AlwaysIfPresent,
    /// Show only while a battery is charging or discharging.
    OnlyWhileInUse,
    /// Never show.
    Never,
}

impl VisibilityMode {
    pub fn label(&self) -> &'static str {
        match self {
            VisibilityMode::AlwaysIfPresent => "Always (if present)",
            VisibilityMode::OnlyWhileInUse => "Only while in use",
            VisibilityMode::Never => "Never",
        }
    }
}

impl fmt::Display for VisibilityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
