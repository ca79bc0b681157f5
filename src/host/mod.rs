//! Host boundary module orchestrator.
//!
//! Everything the facade consumes from the native environment crosses this
//! seam: the capability-level read, the window-style lookup, the base-class
//! forwards, and the opaque handles the native menu system passes through.

mod core;

pub use core::{
    FeatureId, HostBackend, HostConfig, LayoutId, LayoutParams, NativeMenu, NativeMenuItem,
    SavedState, ViewHandle, WindowStyle,
};
