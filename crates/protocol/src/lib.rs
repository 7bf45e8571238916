mod device;
mod presentation;

pub use device::{DeviceKind, DeviceSnapshot, DeviceState, VisibilityMode};
pub use presentation::{IconChain, StatusPresentation, DEFAULT_ICON};
