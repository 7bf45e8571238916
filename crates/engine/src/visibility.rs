//! Indicator visibility policy.

use glint_protocol::{DeviceKind, DeviceSnapshot, VisibilityMode};
use tracing::debug;

/// Decides whether any status indicator should be shown for this device
/// set under the configured mode. `Never` short-circuits without scanning.
pub fn should_show(mode: VisibilityMode, devices: &[DeviceSnapshot]) -> bool {
    if mode == VisibilityMode::Never {
        return false;
    }

    let (total, in_use) = count_batteries(devices);

    let visible = match mode {
        VisibilityMode::AlwaysIfPresent => total > 0,
        VisibilityMode::OnlyWhileInUse => in_use > 0,
        VisibilityMode::Never => unreachable!(),
    };

    debug!(mode = %mode, total, in_use, visible, "visibility recomputed");
    visible
}

fn count_batteries(devices: &[DeviceSnapshot]) -> (usize, usize) {
    let mut total = 0;
    let mut in_use = 0;

    for device in devices {
        if device.kind == DeviceKind::Battery {
            total += 1;
            if device.state.is_active() {
                in_use += 1;
            }
        }
    }

    (total, in_use)
}
