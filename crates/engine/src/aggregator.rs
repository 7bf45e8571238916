//! The aggregator: owns the current device set and everything derived
//! from it.
//!
//! All state lives here and is replaced as a unit on every update, so the
//! published primary device can never go stale relative to the device list.

use glint_protocol::{DeviceSnapshot, StatusPresentation, VisibilityMode};
use tracing::debug;

use crate::icon::select_icon;
use crate::primary::select_primary;
use crate::text::{build_status_text, device_display_name};
use crate::visibility::should_show;

/// Receives the aggregator's outbound events.
///
/// Methods default to no-ops; implement only what the presentation layer
/// needs. `visibility_changed` fires on value changes only, the other two
/// fire on every recomputation.
pub trait StatusObserver {
    fn presentation_changed(&mut self, _presentation: &StatusPresentation) {}
    fn no_primary_device(&mut self) {}
    fn visibility_changed(&mut self, _visible: bool) {}
}

/// Owns the device set and derives primary device, presentation, and
/// visibility from it.
///
/// Not internally synchronized: the caller must deliver `set_devices` /
/// `set_visibility_mode` calls serially (wrap the whole aggregator in a
/// mutex if updates can arrive concurrently).
pub struct StatusAggregator {
    devices: Vec<DeviceSnapshot>,
    primary: Option<DeviceSnapshot>,
    presentation: Option<StatusPresentation>,
    visibility_mode: VisibilityMode,
    visible: bool,
    observers: Vec<Box<dyn StatusObserver>>,
}

impl StatusAggregator {
    /// Creates an empty aggregator. The indicator starts hidden;
    /// `visibility_changed` fires once the first device set warrants
    /// showing it.
    pub fn new(visibility_mode: VisibilityMode) -> Self {
        Self {
            devices: Vec::new(),
            primary: None,
            presentation: None,
            visibility_mode,
            visible: false,
            observers: Vec::new(),
        }
    }

    pub fn register(&mut self, observer: Box<dyn StatusObserver>) {
        self.observers.push(observer);
    }

    /// Replaces the entire device set and recomputes everything derived
    /// from it. Snapshot order is preserved from the source.
    pub fn set_devices(&mut self, devices: Vec<DeviceSnapshot>) {
        debug!(count = devices.len(), "device set replaced");
        self.devices = devices;
        self.refresh_primary();
        self.refresh_visibility();
    }

    /// Applies a new visibility policy and re-evaluates visibility, even
    /// when the device set is unchanged.
    pub fn set_visibility_mode(&mut self, mode: VisibilityMode) {
        self.visibility_mode = mode;
        self.refresh_visibility();
    }

    pub fn devices(&self) -> &[DeviceSnapshot] {
        &self.devices
    }

    pub fn primary(&self) -> Option<&DeviceSnapshot> {
        self.primary.as_ref()
    }

    pub fn presentation(&self) -> Option<&StatusPresentation> {
        self.presentation.as_ref()
    }

    pub fn visibility_mode(&self) -> VisibilityMode {
        self.visibility_mode
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn refresh_primary(&mut self) {
        let primary = select_primary(&self.devices).cloned();

        match &primary {
            Some(device) => {
                let presentation = presentation_for(device);
                for observer in &mut self.observers {
                    observer.presentation_changed(&presentation);
                }
                self.presentation = Some(presentation);
            }
            None => {
                debug!("no primary device; presentation falls back to default");
                for observer in &mut self.observers {
                    observer.no_primary_device();
                }
                self.presentation = None;
            }
        }

        self.primary = primary;
    }

    fn refresh_visibility(&mut self) {
        let visible = should_show(self.visibility_mode, &self.devices);
        if visible != self.visible {
            self.visible = visible;
            for observer in &mut self.observers {
                observer.visibility_changed(visible);
            }
        }
    }
}

fn presentation_for(device: &DeviceSnapshot) -> StatusPresentation {
    let name = device_display_name(device.kind);
    let text = build_status_text(name, device.time_secs, device.state, device.percentage);
    let icon = select_icon(device.kind, device.state, device.time_secs, &device.icon_hint);

    StatusPresentation {
        short_text: text.short_details,
        detailed_text: text.details,
        accessible_text: text.accessible_name,
        icon,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glint_protocol::{DeviceKind, DeviceState};
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Presentation(String),
        NoPrimary,
        Visibility(bool),
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Event>>>);

    impl Recorder {
        fn events(&self) -> Vec<Event> {
            self.0.borrow().clone()
        }
    }

    impl StatusObserver for Recorder {
        fn presentation_changed(&mut self, presentation: &StatusPresentation) {
            self.0
                .borrow_mut()
                .push(Event::Presentation(presentation.detailed_text.clone()));
        }

        fn no_primary_device(&mut self) {
            self.0.borrow_mut().push(Event::NoPrimary);
        }

        fn visibility_changed(&mut self, visible: bool) {
            self.0.borrow_mut().push(Event::Visibility(visible));
        }
    }

    fn battery(state: DeviceState, percentage: f32, time_secs: u64, hint: &str) -> DeviceSnapshot {
        DeviceSnapshot {
            path: "/battery_BAT0".to_string(),
            kind: DeviceKind::Battery,
            state,
            percentage,
            time_secs,
            icon_hint: hint.to_string(),
        }
    }

    #[test]
    fn test_discharging_battery_end_to_end() {
        let mut aggregator = StatusAggregator::new(VisibilityMode::OnlyWhileInUse);
        aggregator.set_devices(vec![battery(
            DeviceState::Discharging,
            55.0,
            1500,
            "battery-good-symbolic",
        )]);

        let presentation = aggregator.presentation().unwrap();
        assert_eq!(presentation.short_text, "0:25");
        assert_eq!(presentation.detailed_text, "Battery (0:25 left)");
        assert_eq!(
            presentation.accessible_text,
            "Battery (25 minutes left (55%))"
        );
        assert_eq!(presentation.icon.first(), Some("battery-good"));
        assert!(aggregator.is_visible());
    }

    #[test]
    fn test_fully_charged_battery_end_to_end() {
        let mut aggregator = StatusAggregator::new(VisibilityMode::AlwaysIfPresent);
        aggregator.set_devices(vec![battery(
            DeviceState::FullyCharged,
            100.0,
            0,
            "battery-charged",
        )]);

        let presentation = aggregator.presentation().unwrap();
        assert_eq!(presentation.short_text, "");
        assert_eq!(presentation.detailed_text, "Battery (charged)");
        assert!(aggregator.is_visible());
    }

    #[test]
    fn test_identical_update_is_idempotent() {
        let devices = vec![battery(
            DeviceState::Discharging,
            55.0,
            1500,
            "battery-good-symbolic",
        )];

        let mut aggregator = StatusAggregator::new(VisibilityMode::AlwaysIfPresent);
        aggregator.set_devices(devices.clone());
        let first = aggregator.presentation().unwrap().clone();
        aggregator.set_devices(devices);
        let second = aggregator.presentation().unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_observer_sees_presentation_and_visibility() {
        let recorder = Recorder::default();
        let mut aggregator = StatusAggregator::new(VisibilityMode::AlwaysIfPresent);
        aggregator.register(Box::new(recorder.clone()));

        aggregator.set_devices(vec![battery(
            DeviceState::Discharging,
            55.0,
            1500,
            "battery-good-symbolic",
        )]);

        assert_eq!(
            recorder.events(),
            vec![
                Event::Presentation("Battery (0:25 left)".to_string()),
                Event::Visibility(true),
            ]
        );
    }

    #[test]
    fn test_visibility_fires_only_on_change() {
        let recorder = Recorder::default();
        let mut aggregator = StatusAggregator::new(VisibilityMode::AlwaysIfPresent);
        aggregator.register(Box::new(recorder.clone()));

        let devices = vec![battery(DeviceState::FullyCharged, 100.0, 0, "")];
        aggregator.set_devices(devices.clone());
        aggregator.set_devices(devices);

        let visibility_events: Vec<_> = recorder
            .events()
            .into_iter()
            .filter(|e| matches!(e, Event::Visibility(_)))
            .collect();
        assert_eq!(visibility_events, vec![Event::Visibility(true)]);
    }

    #[test]
    fn test_no_primary_fires_and_hides() {
        let recorder = Recorder::default();
        let mut aggregator = StatusAggregator::new(VisibilityMode::AlwaysIfPresent);
        aggregator.register(Box::new(recorder.clone()));

        aggregator.set_devices(vec![battery(DeviceState::Discharging, 55.0, 1500, "")]);
        aggregator.set_devices(Vec::new());

        assert!(aggregator.primary().is_none());
        assert!(aggregator.presentation().is_none());
        assert!(!aggregator.is_visible());
        assert_eq!(
            recorder.events(),
            vec![
                Event::Presentation("Battery (0:25 left)".to_string()),
                Event::Visibility(true),
                Event::NoPrimary,
                Event::Visibility(false),
            ]
        );
    }

    #[test]
    fn test_mode_change_reevaluates_without_new_devices() {
        let recorder = Recorder::default();
        let mut aggregator = StatusAggregator::new(VisibilityMode::AlwaysIfPresent);
        aggregator.register(Box::new(recorder.clone()));

        aggregator.set_devices(vec![battery(DeviceState::FullyCharged, 100.0, 0, "")]);
        assert!(aggregator.is_visible());

        aggregator.set_visibility_mode(VisibilityMode::OnlyWhileInUse);
        assert!(!aggregator.is_visible());

        aggregator.set_visibility_mode(VisibilityMode::Never);
        // Already hidden, no extra event
        let visibility_events: Vec<_> = recorder
            .events()
            .into_iter()
            .filter(|e| matches!(e, Event::Visibility(_)))
            .collect();
        assert_eq!(
            visibility_events,
            vec![Event::Visibility(true), Event::Visibility(false)]
        );
    }

    #[test]
    fn test_no_battery_kinds_mean_no_primary_and_hidden() {
        let mut aggregator = StatusAggregator::new(VisibilityMode::AlwaysIfPresent);
        aggregator.set_devices(vec![DeviceSnapshot {
            path: "/line_power_AC".to_string(),
            kind: DeviceKind::LinePower,
            state: DeviceState::Unknown,
            percentage: 0.0,
            time_secs: 0,
            icon_hint: "ac-adapter-symbolic".to_string(),
        }]);

        assert!(aggregator.primary().is_none());
        assert!(!aggregator.is_visible());
    }
}
