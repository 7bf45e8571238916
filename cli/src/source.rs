//! Local battery source: maps `starship-battery` readings into the
//! device snapshots the engine consumes.

use glint_protocol::{DeviceKind, DeviceSnapshot, DeviceState};
use starship_battery::units::ratio::percent;
use starship_battery::units::time::second;
use starship_battery::{Manager, State};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("battery backend error: {0}")]
    Backend(#[from] starship_battery::Error),
}

pub struct DeviceSource {
    manager: Manager,
}

impl DeviceSource {
    pub fn new() -> Result<Self, SourceError> {
        Ok(Self {
            manager: Manager::new()?,
        })
    }

    /// Reads all batteries and returns a complete snapshot list.
    ///
    /// Individual unreadable batteries are skipped rather than failing the
    /// whole list, so the engine always receives a fully-constructed set.
    pub fn snapshot(&self) -> Result<Vec<DeviceSnapshot>, SourceError> {
        let mut devices = Vec::new();

        for (index, battery) in self.manager.batteries()?.enumerate() {
            let battery = match battery {
                Ok(battery) => battery,
                Err(e) => {
                    debug!(index, error = %e, "skipping unreadable battery");
                    continue;
                }
            };

            let state = map_state(battery.state());
            let percentage = battery.state_of_charge().get::<percent>();
            let time_secs = match state {
                DeviceState::Charging => battery
                    .time_to_full()
                    .map(|t| t.get::<second>() as u64)
                    .unwrap_or(0),
                DeviceState::Discharging => battery
                    .time_to_empty()
                    .map(|t| t.get::<second>() as u64)
                    .unwrap_or(0),
                _ => 0,
            };

            let path = match battery.serial_number().map(str::trim) {
                Some(serial) if !serial.is_empty() => format!("battery_{}", serial),
                _ => format!("battery_{}", index),
            };

            devices.push(DeviceSnapshot {
                path,
                kind: DeviceKind::Battery,
                state,
                percentage,
                time_secs,
                icon_hint: icon_hint_for(percentage, state),
            });
        }

        debug!(count = devices.len(), "batteries read");
        Ok(devices)
    }
}

fn map_state(state: State) -> DeviceState {
    match state {
        State::Charging => DeviceState::Charging,
        State::Discharging => DeviceState::Discharging,
        State::Full => DeviceState::FullyCharged,
        State::Empty => DeviceState::Empty,
        State::Unknown => DeviceState::Unknown,
    }
}

/// Names the icon the way upower does, which is what the engine's
/// severity parsing expects.
fn icon_hint_for(percentage: f32, state: DeviceState) -> String {
    if state == DeviceState::FullyCharged {
        return "battery-full-charged-symbolic".to_string();
    }

    let level = if percentage <= 10.0 {
        "caution"
    } else if percentage <= 30.0 {
        "low"
    } else if percentage <= 60.0 {
        "good"
    } else {
        "full"
    };

    if state == DeviceState::Charging {
        format!("battery-{}-charging-symbolic", level)
    } else {
        format!("battery-{}-symbolic", level)
    }
}
