//! Device aggregation and status derivation for glint.
//!
//! This crate turns an unordered list of power-supply device snapshots into
//! a single coherent status: which device best represents overall power
//! state, what text and icon describe it, and whether any indicator should
//! be shown at all.
//!
//! All policy here is pure and synchronous. Data fetching and rendering are
//! the caller's concern; feed completed snapshot lists into
//! [`StatusAggregator::set_devices`] and observe the results.
//!
//! # Example
//!
//! ```
//! use glint_engine::StatusAggregator;
//! use glint_protocol::{DeviceKind, DeviceSnapshot, DeviceState, VisibilityMode};
//!
//! let mut aggregator = StatusAggregator::new(VisibilityMode::AlwaysIfPresent);
//! aggregator.set_devices(vec![DeviceSnapshot {
//!     path: "/org/freedesktop/UPower/devices/battery_BAT0".into(),
//!     kind: DeviceKind::Battery,
//!     state: DeviceState::Discharging,
//!     percentage: 55.0,
//!     time_secs: 1500,
//!     icon_hint: "battery-good-symbolic".into(),
//! }]);
//!
//! let presentation = aggregator.presentation().unwrap();
//! assert_eq!(presentation.short_text, "0:25");
//! assert!(aggregator.is_visible());
//! ```

mod aggregator;
mod icon;
mod primary;
mod text;
mod timefmt;
mod visibility;

pub use aggregator::{StatusAggregator, StatusObserver};
pub use icon::{select_icon, HintSeverity};
pub use primary::select_primary;
pub use text::{build_status_text, device_display_name, StatusText};
pub use timefmt::{format_duration, FormattedTime};
pub use visibility::should_show;
