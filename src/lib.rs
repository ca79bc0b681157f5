//! Tier-adaptive screen facade.
//!
//! One [`Screen`] presents a stable API to application code while the host
//! environment's lifecycle and command-menu capabilities differ by
//! capability tier. A strategy variant is selected once, at creation, from
//! the detected tier; every host event is then arbitrated between the host
//! base behavior, the active strategy, and the application hooks.

pub mod command_bar;
pub mod error;
pub mod host;
pub mod logging;
pub mod screen;
pub mod strategy;

pub use command_bar::{BarState, CommandBar, SharedBarState};
pub use error::{Result, ScreenError};
pub use host::{
    FeatureId, HostBackend, HostConfig, LayoutId, LayoutParams, NativeMenu, NativeMenuItem,
    SavedState, ViewHandle, WindowStyle,
};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use screen::audit::{
    NullScreenAudit, ScreenAudit, ScreenAuditEvent, ScreenAuditEventBuilder, ScreenAuditStage,
};
pub use screen::{CommandMenuInflater, Screen, ScreenConfig};
pub use strategy::{
    CapabilityTier, CommandMenuHooks, CompatDecorStrategy, NATIVE_BAR_LEVEL, NATIVE_DECOR_LEVEL,
    NativeBarStrategy, NativeDecorStrategy, NoopCommandMenuHooks, ScreenStrategy, StrategyContext,
    StrategyFactory, select_strategy,
};
