//! Icon selection for the primary device.
//!
//! Produces a themed-icon fallback chain; the presentation layer picks the
//! first name its icon theme can resolve.

use glint_protocol::{DeviceKind, DeviceState, IconChain, DEFAULT_ICON};

/// Charge severity reported by a source icon hint.
///
/// Sources encode severity in the icon names they hand us
/// (`battery-caution-symbolic`, `battery-good`, ...). Parsing happens once
/// here; the selector itself only ever switches on the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintSeverity {
    Caution,
    Low,
    Good,
    Full,
}

impl HintSeverity {
    pub fn from_hint(hint: &str) -> Self {
        if hint.contains("caution") {
            HintSeverity::Caution
        } else if hint.contains("low") {
            HintSeverity::Low
        } else if hint.contains("good") {
            HintSeverity::Good
        } else {
            HintSeverity::Full
        }
    }

    /// Coarse percentage bucket used in legacy gpm icon names.
    pub fn bucket(&self) -> &'static str {
        match self {
            HintSeverity::Caution => "000",
            HintSeverity::Low => "040",
            HintSeverity::Good => "080",
            HintSeverity::Full => "100",
        }
    }

    pub fn word(&self) -> &'static str {
        match self {
            HintSeverity::Caution => "caution",
            HintSeverity::Low => "low",
            HintSeverity::Good => "good",
            HintSeverity::Full => "full",
        }
    }
}

/// True when the hint names a critically low icon (the red ones).
fn hint_reports_critical(hint: &str) -> bool {
    hint.contains("000") || hint.contains("020") || hint.contains("caution")
}

/// Selects the icon chain for a device.
///
/// Batteries in a charge-related state get a synthesized chain; everything
/// else uses the source's hint verbatim. A discharging battery whose hint
/// is already critical keeps a "low" icon as long as more than 30 minutes
/// remain, so a comfortable estimate never flashes the critical icon.
/// The override keys off the incoming hint's severity, not the bucket
/// recomputed here.
pub fn select_icon(
    kind: DeviceKind,
    state: DeviceState,
    time_secs: u64,
    icon_hint: &str,
) -> IconChain {
    if kind == DeviceKind::Battery {
        match state {
            DeviceState::FullyCharged => {
                return [
                    "battery-charged",
                    "battery-full-charged-symbolic",
                    "battery-full-charged",
                    "gpm-battery-charged",
                    "gpm-battery-100-charging",
                ]
                .into_iter()
                .collect();
            }
            DeviceState::Charging => {
                return [
                    "battery-000-charging",
                    "battery-caution-charging-symbolic",
                    "battery-caution-charging",
                    "gpm-battery-000-charging",
                ]
                .into_iter()
                .collect();
            }
            DeviceState::Discharging => {
                let severity = if time_secs > 30 * 60 && hint_reports_critical(icon_hint) {
                    HintSeverity::Low
                } else {
                    HintSeverity::from_hint(icon_hint)
                };
                return discharging_chain(severity);
            }
            _ => {}
        }
    }

    if icon_hint.is_empty() {
        return [DEFAULT_ICON].into_iter().collect();
    }
    [icon_hint].into_iter().collect()
}

fn discharging_chain(severity: HintSeverity) -> IconChain {
    [
        format!("battery-{}", severity.word()),
        format!("battery-{}-symbolic", severity.word()),
        format!("battery-{}", severity.bucket()),
        format!("gpm-battery-{}", severity.bucket()),
    ]
    .into_iter()
    .collect()
}
