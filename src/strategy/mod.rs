//! Tier strategies: the capability contract and its selection.
//!
//! The host exposes a single integer capability level. At screen creation
//! that level is mapped onto a closed [`CapabilityTier`] set, newest tier
//! first, and exactly one strategy variant is constructed for the screen's
//! lifetime. Every lifecycle and command-menu event the screen routes to the
//! strategy arrives with a [`StrategyContext`] carrying the host's "super"
//! escape hatches and the application hooks, so strategies never hold a
//! back-reference to the screen.

use std::sync::Arc;

use serde_json::Value;

use crate::command_bar::CommandBar;
use crate::error::Result;
use crate::host::{
    FeatureId, HostBackend, HostConfig, LayoutId, LayoutParams, NativeMenu, NativeMenuItem,
    SavedState, ViewHandle, WindowStyle,
};
use crate::logging::{LogLevel, Logger, event_with_fields};

mod variants;

pub use variants::{CompatDecorStrategy, NativeBarStrategy, NativeDecorStrategy};

/// Capability level at which the host provides a native command bar.
pub const NATIVE_BAR_LEVEL: u32 = 11;
/// Capability level at which the host decor hosts the bar natively.
pub const NATIVE_DECOR_LEVEL: u32 = 14;

/// Closed set of host capability tiers, ordered oldest to newest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CapabilityTier {
    /// Baseline: no native bar or menu support; everything is synthesized.
    Compat,
    /// Native command bar, but the menu pipeline needs shimming.
    NativeBar,
    /// Native decor carries the bar and menu machinery directly.
    NativeDecor,
}

impl CapabilityTier {
    /// Total mapping from the raw host capability level. The baseline tier
    /// matches unconditionally, so every integer selects a tier.
    pub fn from_level(level: u32) -> Self {
        if level >= NATIVE_DECOR_LEVEL {
            CapabilityTier::NativeDecor
        } else if level >= NATIVE_BAR_LEVEL {
            CapabilityTier::NativeBar
        } else {
            CapabilityTier::Compat
        }
    }

    /// Whether the host natively supports command-menu invalidation.
    pub fn has_native_bar(self) -> bool {
        self >= CapabilityTier::NativeBar
    }

    pub fn label(self) -> &'static str {
        match self {
            CapabilityTier::Compat => "compat",
            CapabilityTier::NativeBar => "native_bar",
            CapabilityTier::NativeDecor => "native_decor",
        }
    }
}

/// Application override points for command-menu content.
///
/// Implementors customize the menu without ever seeing tiers or strategies;
/// defaults allow display and consume nothing.
pub trait CommandMenuHooks: Send {
    /// Build the command menu the first time it is shown. Return `false` to
    /// suppress display.
    fn on_create_command_menu(&mut self, _menu: &mut NativeMenu) -> bool {
        true
    }

    /// Refresh the command menu right before every display. Return `false`
    /// to suppress display.
    fn on_prepare_command_menu(&mut self, _menu: &mut NativeMenu) -> bool {
        true
    }

    /// An item on the primary command panel was selected. Return `true` to
    /// consume it.
    fn on_command_item_selected(&mut self, _item: &NativeMenuItem) -> bool {
        false
    }

    /// An item on any other panel was selected; receives the raw feature id.
    fn on_command_menu_item_selected(
        &mut self,
        _feature: FeatureId,
        _item: &NativeMenuItem,
    ) -> bool {
        false
    }
}

/// Default hooks: display everything, consume nothing.
#[derive(Debug, Default)]
pub struct NoopCommandMenuHooks;

impl CommandMenuHooks for NoopCommandMenuHooks {}

/// Per-call capabilities handed to the active strategy.
///
/// Carries the host base-class escapes (the "super" calls), the application
/// hooks, the window style read at creation, and the optional logger.
pub struct StrategyContext<'a> {
    host: &'a mut dyn HostBackend,
    hooks: &'a mut dyn CommandMenuHooks,
    logger: Option<&'a Logger>,
    style: WindowStyle,
}

impl<'a> StrategyContext<'a> {
    pub(crate) fn new(
        host: &'a mut dyn HostBackend,
        hooks: &'a mut dyn CommandMenuHooks,
        logger: Option<&'a Logger>,
        style: WindowStyle,
    ) -> Self {
        Self {
            host,
            hooks,
            logger,
            style,
        }
    }

    /// Window style flags read once at screen creation.
    pub fn window_style(&self) -> WindowStyle {
        self.style
    }

    pub fn hooks(&mut self) -> &mut dyn CommandMenuHooks {
        self.hooks
    }

    pub fn super_set_content_view(&mut self, view: ViewHandle) {
        self.host.base_set_content_view(view);
    }

    pub fn super_set_content_layout(&mut self, layout: LayoutId) {
        self.host.base_set_content_layout(layout);
    }

    pub fn super_set_content_view_with_params(&mut self, view: ViewHandle, params: LayoutParams) {
        self.host.base_set_content_view_with_params(view, params);
    }

    pub fn super_add_content_view(&mut self, view: ViewHandle, params: LayoutParams) {
        self.host.base_add_content_view(view, params);
    }

    pub fn super_request_window_feature(&mut self, feature: FeatureId) -> bool {
        self.host.base_request_window_feature(feature)
    }

    pub fn super_create_panel_menu(&mut self, feature: FeatureId, menu: &mut NativeMenu) -> bool {
        self.host.base_create_panel_menu(feature, menu)
    }

    pub fn super_prepare_panel(
        &mut self,
        feature: FeatureId,
        view: Option<&ViewHandle>,
        menu: &mut NativeMenu,
    ) -> bool {
        self.host.base_prepare_panel(feature, view, menu)
    }

    pub fn log(
        &self,
        level: LogLevel,
        target: &str,
        message: &str,
        fields: impl IntoIterator<Item = (String, Value)>,
    ) {
        if let Some(logger) = self.logger {
            let _ = logger.log_event(event_with_fields(level, target, message, fields));
        }
    }
}

/// Contract every tier variant implements.
///
/// A strategy is bound 1:1 to one screen for the screen's lifetime. The
/// screen owns every arbitration decision; a strategy only ever sees the
/// events the screen routed to it.
pub trait ScreenStrategy: Send {
    fn name(&self) -> &str;

    fn tier(&self) -> CapabilityTier;

    /// Construct a new command bar for this tier. The screen enforces the
    /// at-most-once contract; the strategy performs no caching of its own.
    fn create_command_bar(&mut self, ctx: &mut StrategyContext<'_>) -> CommandBar;

    fn on_create(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        saved: Option<&SavedState>,
    ) -> Result<()>;

    fn on_post_create(
        &mut self,
        _ctx: &mut StrategyContext<'_>,
        _saved: Option<&SavedState>,
    ) -> Result<()> {
        Ok(())
    }

    fn on_configuration_changed(
        &mut self,
        _ctx: &mut StrategyContext<'_>,
        _config: &HostConfig,
    ) -> Result<()> {
        Ok(())
    }

    fn set_content_view(&mut self, ctx: &mut StrategyContext<'_>, view: ViewHandle);

    fn set_content_layout(&mut self, ctx: &mut StrategyContext<'_>, layout: LayoutId);

    fn set_content_view_with_params(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        view: ViewHandle,
        params: LayoutParams,
    );

    fn add_content_view(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        view: ViewHandle,
        params: LayoutParams,
    );

    /// Negotiate a window feature. Returns `false` once content is installed
    /// or for an unsupported feature id; the refusal is reported, not fatal.
    fn request_window_feature(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        feature: FeatureId,
    ) -> bool;

    /// Propagate a title change to the command bar if one exists; otherwise
    /// stash it for the bar's eventual materialization.
    fn set_title(&mut self, ctx: &mut StrategyContext<'_>, title: &str);

    /// Mark the command menu stale so it is rebuilt on next display.
    fn invalidate_command_menu(&mut self, ctx: &mut StrategyContext<'_>);

    fn on_create_panel_view(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        feature: FeatureId,
    ) -> Option<ViewHandle>;

    fn on_create_panel_menu(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        feature: FeatureId,
        menu: &mut NativeMenu,
    ) -> bool;

    fn on_prepare_panel(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        feature: FeatureId,
        view: Option<&ViewHandle>,
        menu: &mut NativeMenu,
    ) -> bool;

    /// Route an item selection. The primary panel maps onto the dedicated
    /// hook; every other feature id reaches the raw hook unchanged.
    fn on_menu_item_selected(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        feature: FeatureId,
        item: &NativeMenuItem,
    ) -> bool {
        if feature == FeatureId::OPTIONS_PANEL {
            ctx.hooks().on_command_item_selected(item)
        } else {
            ctx.hooks().on_command_menu_item_selected(feature, item)
        }
    }
}

/// Factory type letting callers override strategy construction, primarily so
/// tests can inject recording strategies.
pub type StrategyFactory = Arc<dyn Fn(CapabilityTier) -> Box<dyn ScreenStrategy> + Send + Sync>;

/// Map a tier onto its strategy variant. Exhaustive over the closed tier
/// set; evaluated exactly once per screen, at creation.
pub fn select_strategy(tier: CapabilityTier) -> Box<dyn ScreenStrategy> {
    match tier {
        CapabilityTier::NativeDecor => Box::new(NativeDecorStrategy::new()),
        CapabilityTier::NativeBar => Box::new(NativeBarStrategy::new()),
        CapabilityTier::Compat => Box::new(CompatDecorStrategy::new()),
    }
}
