pub mod apps;
pub mod components;
pub mod geometry;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;

pub use components::DesktopShell;
pub use geometry::{initial_placement, DeviceClass, Viewport};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
