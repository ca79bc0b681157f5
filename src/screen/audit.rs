//! Screen lifecycle audit hooks.
//!
//! Lightweight instrumentation so hosts can observe the major transitions of
//! a screen without contorting the arbitration paths. Records capture a
//! stage identifier plus structured metadata for downstream logging,
//! buffering, or visualization.

use std::time::SystemTime;

use serde_json::Value;

/// Distinct checkpoints emitted by [`Screen`](super::Screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAuditStage {
    /// A strategy was selected for the detected capability tier.
    StrategySelected,
    /// Screen creation completed; the strategy saw `on_create`.
    ScreenCreated,
    /// The command bar was materialized by the active strategy.
    CommandBarCreated,
    /// The command bar accessor reset a previously materialized bar.
    CommandBarDiscarded,
    /// The command menu was invalidated.
    MenuInvalidated,
    /// A title change was propagated to the strategy.
    TitlePropagated,
    /// The screen was torn down.
    ScreenDestroyed,
}

/// Structured audit entry.
#[derive(Debug, Clone)]
pub struct ScreenAuditEvent {
    pub timestamp: SystemTime,
    pub stage: ScreenAuditStage,
    pub details: Vec<(String, Value)>,
}

impl ScreenAuditEvent {
    fn new(stage: ScreenAuditStage) -> Self {
        Self {
            timestamp: SystemTime::now(),
            stage,
            details: Vec::new(),
        }
    }
}

/// Builder helper to append fields ergonomically.
pub struct ScreenAuditEventBuilder {
    event: ScreenAuditEvent,
}

impl ScreenAuditEventBuilder {
    pub fn new(stage: ScreenAuditStage) -> Self {
        Self {
            event: ScreenAuditEvent::new(stage),
        }
    }

    pub fn detail(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.event.details.push((key.into(), value));
        self
    }

    pub fn finish(self) -> ScreenAuditEvent {
        self.event
    }
}

/// Trait implemented by any audit sink.
pub trait ScreenAudit: Send + Sync {
    fn record(&self, event: ScreenAuditEvent);
}

/// Default no-op implementation used when auditing is disabled.
#[derive(Debug, Default)]
pub struct NullScreenAudit;

impl ScreenAudit for NullScreenAudit {
    fn record(&self, _event: ScreenAuditEvent) {}
}
