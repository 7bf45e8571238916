//! Status text for the primary device: panel label, menu text, and the
//! accessible description.

use glint_protocol::{DeviceKind, DeviceState};
use tracing::warn;

use crate::timefmt::format_duration;

/// The three strings derived for one device. All fields are always
/// populated; an empty string means the presentation layer renders nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusText {
    /// Compact panel form, e.g. `0:25` or `(5%)`.
    pub short_details: String,
    /// Menu form, e.g. `Battery (0:25 left)`.
    pub details: String,
    /// Accessible form, includes the percentage when credible.
    pub accessible_name: String,
}

/// Display name for a device kind.
///
/// Kinds without a fixed display name fall back to their raw identifier so
/// an odd upstream device still renders something sensible.
pub fn device_display_name(kind: DeviceKind) -> &'static str {
    if kind == DeviceKind::Other {
        warn!(kind = kind.id(), "device kind has no display name");
    }
    kind.label()
}

/// Builds the status strings for one device.
///
/// A positive time estimate is only meaningful while charging or
/// discharging; every other state ignores it and falls through to the
/// timeless phrasing, so callers always get populated strings back.
pub fn build_status_text(
    name: &str,
    time_secs: u64,
    state: DeviceState,
    percentage: f32,
) -> StatusText {
    if time_secs > 0 && state.is_active() {
        let time = format_duration(time_secs);

        if state == DeviceState::Charging {
            return StatusText {
                short_details: format!("({})", time.short),
                details: format!("{} ({} to charge)", name, time.short),
                accessible_name: format!(
                    "{} ({} to charge ({:.0}%))",
                    name, time.detailed, percentage
                ),
            };
        }

        // Discharging. Estimates beyond twelve hours are not credible, so
        // the long forms degrade to the bare device name.
        if time_secs > 43200 {
            return StatusText {
                short_details: time.short,
                details: name.to_string(),
                accessible_name: name.to_string(),
            };
        }

        return StatusText {
            short_details: time.short.clone(),
            details: format!("{} ({} left)", name, time.short),
            accessible_name: format!("{} ({} left ({:.0}%))", name, time.detailed, percentage),
        };
    }

    if state == DeviceState::FullyCharged {
        let details = format!("{} (charged)", name);
        return StatusText {
            short_details: String::new(),
            accessible_name: details.clone(),
            details,
        };
    }

    if percentage > 0.0 {
        let details = format!("{} ({:.0}%)", name, percentage);
        return StatusText {
            short_details: format!("({:.0}%)", percentage),
            accessible_name: details.clone(),
            details,
        };
    }

    let details = format!("{} (not present)", name);
    StatusText {
        short_details: "(not present)".to_string(),
        accessible_name: details.clone(),
        details,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(device_display_name(DeviceKind::Battery), "Battery");
        assert_eq!(device_display_name(DeviceKind::LinePower), "AC adapter");
        assert_eq!(device_display_name(DeviceKind::Other), "other");
    }

    #[test]
    fn test_charging_with_time() {
        let text = build_status_text("Battery", 3900, DeviceState::Charging, 80.0);
        assert_eq!(text.short_details, "(1:05)");
        assert_eq!(text.details, "Battery (1:05 to charge)");
        assert_eq!(
            text.accessible_name,
            "Battery (1 hour 5 minutes to charge (80%))"
        );
    }

    #[test]
    fn test_discharging_with_time() {
        let text = build_status_text("Battery", 1500, DeviceState::Discharging, 55.0);
        assert_eq!(text.short_details, "0:25");
        assert_eq!(text.details, "Battery (0:25 left)");
        assert_eq!(text.accessible_name, "Battery (25 minutes left (55%))");
    }

    #[test]
    fn test_long_discharge_estimate_is_suppressed() {
        let text = build_status_text("Battery", 43201, DeviceState::Discharging, 90.0);
        assert_eq!(text.short_details, "12:00");
        assert_eq!(text.details, "Battery");
        assert_eq!(text.accessible_name, "Battery");
    }

    #[test]
    fn test_twelve_hours_exactly_still_shows_time() {
        let text = build_status_text("Battery", 43200, DeviceState::Discharging, 90.0);
        assert_eq!(text.details, "Battery (12:00 left)");
    }

    #[test]
    fn test_fully_charged() {
        let text = build_status_text("Battery", 0, DeviceState::FullyCharged, 100.0);
        assert_eq!(text.short_details, "");
        assert_eq!(text.details, "Battery (charged)");
        assert_eq!(text.accessible_name, "Battery (charged)");
    }

    #[test]
    fn test_percentage_only() {
        let text = build_status_text("Mouse", 0, DeviceState::Discharging, 45.4);
        assert_eq!(text.short_details, "(45%)");
        assert_eq!(text.details, "Mouse (45%)");
        assert_eq!(text.accessible_name, "Mouse (45%)");
    }

    #[test]
    fn test_not_present() {
        let text = build_status_text("Battery", 0, DeviceState::Unknown, 0.0);
        assert_eq!(text.short_details, "(not present)");
        assert_eq!(text.details, "Battery (not present)");
    }

    #[test]
    fn test_pending_charge_ignores_time() {
        // Time estimates are undefined outside charging/discharging; the
        // pending states take the timeless phrasing instead.
        let text = build_status_text("Battery", 600, DeviceState::PendingCharge, 75.0);
        assert_eq!(text.short_details, "(75%)");
        assert_eq!(text.details, "Battery (75%)");
        assert_eq!(text.accessible_name, "Battery (75%)");
    }
}
