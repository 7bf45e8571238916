//! Primary device selection.
//!
//! Scans the whole device set and picks the single battery whose status
//! should drive the indicator.

use glint_protocol::{DeviceKind, DeviceSnapshot, DeviceState};
use tracing::debug;

/// Picks the primary device, or `None` when no battery qualifies.
///
/// Priority encodes urgency: a discharging battery always outranks a
/// charging one, because discharge implies imminent power loss. Among
/// discharging batteries the smallest remaining time wins; among charging
/// ones the largest time-to-full wins, except that a charging battery
/// reporting no time at all is assumed broken and needs attention first.
/// Batteries in any other state are an idle fallback.
pub fn select_primary(devices: &[DeviceSnapshot]) -> Option<&DeviceSnapshot> {
    let mut discharging: Option<&DeviceSnapshot> = None;
    let mut min_discharge_time = u64::MAX;
    let mut charging: Option<&DeviceSnapshot> = None;
    let mut max_charge_time = 0u64;
    let mut broken_charging: Option<&DeviceSnapshot> = None;
    let mut idle: Option<&DeviceSnapshot> = None;

    for device in devices {
        // Empty battery bays show up as unknown devices at 0%
        if device.state == DeviceState::Unknown && device.percentage == 0.0 {
            continue;
        }

        if device.kind != DeviceKind::Battery {
            continue;
        }

        match device.state {
            DeviceState::Discharging => {
                if device.time_secs < min_discharge_time {
                    min_discharge_time = device.time_secs;
                    discharging = Some(device);
                }
            }
            DeviceState::Charging => {
                if device.time_secs == 0 {
                    broken_charging = Some(device);
                } else if device.time_secs > max_charge_time {
                    max_charge_time = device.time_secs;
                    charging = Some(device);
                }
            }
            _ => {
                idle = Some(device);
            }
        }
    }

    let primary = discharging.or(broken_charging).or(charging).or(idle);
    match primary {
        Some(device) => debug!(path = %device.path, state = ?device.state, "selected primary device"),
        None => debug!("no primary device in set"),
    }
    primary
}
