//! The application-facing screen object.
//!
//! `Screen` owns one strategy, the lazily-materialized command bar, and the
//! cached menu inflater. Every lifecycle and command-menu event arriving
//! from the host passes through the arbitration rules here: each event type
//! has its own handoff between the host base behavior, the active strategy,
//! and the application hooks. The rules are deliberate and asymmetric; none
//! of them is a plain pass-through.

use std::sync::Arc;

use serde_json::{Value, json};

use crate::command_bar::CommandBar;
use crate::error::{Result, ScreenError};
use crate::host::{
    FeatureId, HostBackend, HostConfig, LayoutId, LayoutParams, NativeMenu, NativeMenuItem,
    SavedState, ViewHandle, WindowStyle,
};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::strategy::{
    CapabilityTier, CommandMenuHooks, NoopCommandMenuHooks, ScreenStrategy, StrategyContext,
    StrategyFactory, select_strategy,
};

pub mod audit;

use audit::{NullScreenAudit, ScreenAudit, ScreenAuditEventBuilder, ScreenAuditStage};

const LIFECYCLE_TARGET: &str = "screen::lifecycle";
const MENU_TARGET: &str = "screen::menu";
const BAR_TARGET: &str = "screen::bar";

/// Configuration knobs for a screen.
#[derive(Clone)]
pub struct ScreenConfig {
    /// Optional structured logger.
    pub logger: Option<Logger>,
    /// Audit sink receiving lifecycle checkpoints.
    pub audit: Arc<dyn ScreenAudit>,
    /// Override for strategy construction. Tests use this to inject
    /// recording strategies; production code leaves it `None`.
    pub strategy_factory: Option<StrategyFactory>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            logger: None,
            audit: Arc::new(NullScreenAudit),
            strategy_factory: None,
        }
    }
}

/// Facade over the native menu-inflation mechanism.
///
/// Constructed lazily by [`Screen::menu_inflater`] and cached for the
/// screen's lifetime; inflation itself is host machinery behind the
/// boundary.
#[derive(Debug, Clone, Copy)]
pub struct CommandMenuInflater {
    tier: CapabilityTier,
}

impl CommandMenuInflater {
    fn new(tier: CapabilityTier) -> Self {
        Self { tier }
    }

    pub fn tier(&self) -> CapabilityTier {
        self.tier
    }
}

fn strategy_ctx<'a>(
    host: &'a mut Box<dyn HostBackend>,
    hooks: &'a mut Box<dyn CommandMenuHooks>,
    logger: Option<&'a Logger>,
    style: WindowStyle,
) -> StrategyContext<'a> {
    StrategyContext::new(&mut **host, &mut **hooks, logger, style)
}

/// One application screen, bound to one strategy for its lifetime.
pub struct Screen {
    host: Box<dyn HostBackend>,
    hooks: Box<dyn CommandMenuHooks>,
    strategy: Box<dyn ScreenStrategy>,
    tier: CapabilityTier,
    style: WindowStyle,
    command_bar: Option<CommandBar>,
    menu_inflater: Option<CommandMenuInflater>,
    config: ScreenConfig,
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screen")
            .field("tier", &self.tier)
            .field("style", &self.style)
            .field("command_bar", &self.command_bar.is_some())
            .field("menu_inflater", &self.menu_inflater.is_some())
            .finish_non_exhaustive()
    }
}

impl Screen {
    /// Create a screen with default hooks and configuration.
    pub fn create(host: Box<dyn HostBackend>, saved: Option<&SavedState>) -> Result<Self> {
        Self::create_with(
            host,
            Box::new(NoopCommandMenuHooks),
            ScreenConfig::default(),
            saved,
        )
    }

    /// Create a screen. The ordering here is fixed: host base creation runs
    /// first because strategy selection depends on state it establishes,
    /// then the capability level is read and the strategy selected, then the
    /// window style flags are read, and only then does the strategy see
    /// `on_create`.
    pub fn create_with(
        mut host: Box<dyn HostBackend>,
        mut hooks: Box<dyn CommandMenuHooks>,
        config: ScreenConfig,
        saved: Option<&SavedState>,
    ) -> Result<Self> {
        host.base_create(saved);

        let level = host
            .capability_level()
            .map_err(|err| ScreenError::CapabilityUnreadable(err.to_string()))?;
        let tier = CapabilityTier::from_level(level);
        let mut strategy = match &config.strategy_factory {
            Some(factory) => factory(tier),
            None => select_strategy(tier),
        };

        let style = host
            .window_style()
            .map_err(|err| ScreenError::StyleUnreadable(err.to_string()))?;

        let mut selected = ScreenAuditEventBuilder::new(ScreenAuditStage::StrategySelected);
        selected.detail("tier", json!(tier.label()));
        selected.detail("strategy", json!(strategy.name()));
        config.audit.record(selected.finish());

        {
            let mut ctx = strategy_ctx(&mut host, &mut hooks, config.logger.as_ref(), style);
            strategy.on_create(&mut ctx, saved)?;
        }

        if let Some(logger) = config.logger.as_ref() {
            let _ = logger.log_event(event_with_fields(
                LogLevel::Info,
                LIFECYCLE_TARGET,
                "screen_created",
                [
                    json_kv("level", json!(level)),
                    json_kv("tier", json!(tier.label())),
                    json_kv("strategy", json!(strategy.name())),
                    json_kv("has_command_bar", json!(style.has_command_bar)),
                    json_kv("overlay_command_bar", json!(style.overlay_command_bar)),
                ],
            ));
        }
        config
            .audit
            .record(ScreenAuditEventBuilder::new(ScreenAuditStage::ScreenCreated).finish());

        Ok(Self {
            host,
            hooks,
            strategy,
            tier,
            style,
            command_bar: None,
            menu_inflater: None,
            config,
        })
    }

    pub fn tier(&self) -> CapabilityTier {
        self.tier
    }

    pub fn window_style(&self) -> WindowStyle {
        self.style
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Command bar accessor. Presence is recomputed on every call: while the
    /// window style asks for a bar, the bar is materialized on first access
    /// and reused afterwards; otherwise any previously materialized bar is
    /// discarded and `None` returned.
    pub fn command_bar(&mut self) -> Option<&CommandBar> {
        if self.style.wants_command_bar() {
            if self.command_bar.is_none() {
                let bar = {
                    let mut ctx = strategy_ctx(
                        &mut self.host,
                        &mut self.hooks,
                        self.config.logger.as_ref(),
                        self.style,
                    );
                    self.strategy.create_command_bar(&mut ctx)
                };
                self.log(
                    LogLevel::Info,
                    BAR_TARGET,
                    "command_bar_materialized",
                    [
                        json_kv("tier", json!(self.tier.label())),
                        json_kv("overlay", json!(bar.overlay())),
                    ],
                );
                self.audit(ScreenAuditStage::CommandBarCreated, Vec::new());
                self.command_bar = Some(bar);
            }
        } else if self.command_bar.take().is_some() {
            self.log(
                LogLevel::Debug,
                BAR_TARGET,
                "command_bar_discarded",
                std::iter::empty(),
            );
            self.audit(ScreenAuditStage::CommandBarDiscarded, Vec::new());
        }
        self.command_bar.as_ref()
    }

    /// Menu inflater accessor: constructed once, cached for the screen's
    /// lifetime.
    pub fn menu_inflater(&mut self) -> &CommandMenuInflater {
        let tier = self.tier;
        self.menu_inflater
            .get_or_insert_with(|| CommandMenuInflater::new(tier))
    }

    pub fn set_content_view(&mut self, view: ViewHandle) {
        let mut ctx = strategy_ctx(
            &mut self.host,
            &mut self.hooks,
            self.config.logger.as_ref(),
            self.style,
        );
        self.strategy.set_content_view(&mut ctx, view);
    }

    pub fn set_content_layout(&mut self, layout: LayoutId) {
        let mut ctx = strategy_ctx(
            &mut self.host,
            &mut self.hooks,
            self.config.logger.as_ref(),
            self.style,
        );
        self.strategy.set_content_layout(&mut ctx, layout);
    }

    pub fn set_content_view_with_params(&mut self, view: ViewHandle, params: LayoutParams) {
        let mut ctx = strategy_ctx(
            &mut self.host,
            &mut self.hooks,
            self.config.logger.as_ref(),
            self.style,
        );
        self.strategy
            .set_content_view_with_params(&mut ctx, view, params);
    }

    pub fn add_content_view(&mut self, view: ViewHandle, params: LayoutParams) {
        let mut ctx = strategy_ctx(
            &mut self.host,
            &mut self.hooks,
            self.config.logger.as_ref(),
            self.style,
        );
        self.strategy.add_content_view(&mut ctx, view, params);
    }

    /// Negotiate an extended window feature before content installation.
    pub fn request_window_feature(&mut self, feature: FeatureId) -> bool {
        let mut ctx = strategy_ctx(
            &mut self.host,
            &mut self.hooks,
            self.config.logger.as_ref(),
            self.style,
        );
        self.strategy.request_window_feature(&mut ctx, feature)
    }

    pub fn on_post_create(&mut self, saved: Option<&SavedState>) -> Result<()> {
        self.host.base_post_create(saved);
        let mut ctx = strategy_ctx(
            &mut self.host,
            &mut self.hooks,
            self.config.logger.as_ref(),
            self.style,
        );
        self.strategy.on_post_create(&mut ctx, saved)
    }

    pub fn on_configuration_changed(&mut self, config: &HostConfig) -> Result<()> {
        self.host.base_configuration_changed(config);
        let mut ctx = strategy_ctx(
            &mut self.host,
            &mut self.hooks,
            self.config.logger.as_ref(),
            self.style,
        );
        self.strategy.on_configuration_changed(&mut ctx, config)
    }

    pub fn on_title_changed(&mut self, title: &str, color: Option<u32>) {
        self.host.base_title_changed(title, color);
        {
            let mut ctx = strategy_ctx(
                &mut self.host,
                &mut self.hooks,
                self.config.logger.as_ref(),
                self.style,
            );
            self.strategy.set_title(&mut ctx, title);
        }
        self.audit(
            ScreenAuditStage::TitlePropagated,
            vec![("title".to_string(), json!(title))],
        );
    }

    /// Invalidate the command menu. Tiers without native bar support need
    /// the host's own invalidation as well; tiers with native support would
    /// double-invalidate, so the host call is skipped there. The strategy
    /// invalidation always runs.
    pub fn invalidate_command_menu(&mut self) {
        let forwarded_to_host = !self.tier.has_native_bar();
        if forwarded_to_host {
            self.host.base_invalidate_command_menu();
        }
        {
            let mut ctx = strategy_ctx(
                &mut self.host,
                &mut self.hooks,
                self.config.logger.as_ref(),
                self.style,
            );
            self.strategy.invalidate_command_menu(&mut ctx);
        }
        self.log(
            LogLevel::Debug,
            MENU_TARGET,
            "menu_invalidated",
            [json_kv("host_forward", json!(forwarded_to_host))],
        );
        self.audit(ScreenAuditStage::MenuInvalidated, Vec::new());
    }

    /// Panel-view creation: only the options panel reaches the strategy;
    /// every other feature id goes to the host base directly.
    pub fn on_create_panel_view(&mut self, feature: FeatureId) -> Option<ViewHandle> {
        if feature == FeatureId::OPTIONS_PANEL {
            let mut ctx = strategy_ctx(
                &mut self.host,
                &mut self.hooks,
                self.config.logger.as_ref(),
                self.style,
            );
            self.strategy.on_create_panel_view(&mut ctx, feature)
        } else {
            self.host.base_create_panel_view(feature)
        }
    }

    pub fn on_create_panel_menu(&mut self, feature: FeatureId, menu: &mut NativeMenu) -> bool {
        let mut ctx = strategy_ctx(
            &mut self.host,
            &mut self.hooks,
            self.config.logger.as_ref(),
            self.style,
        );
        self.strategy.on_create_panel_menu(&mut ctx, feature, menu)
    }

    pub fn on_prepare_panel(
        &mut self,
        feature: FeatureId,
        view: Option<&ViewHandle>,
        menu: &mut NativeMenu,
    ) -> bool {
        let mut ctx = strategy_ctx(
            &mut self.host,
            &mut self.hooks,
            self.config.logger.as_ref(),
            self.style,
        );
        self.strategy
            .on_prepare_panel(&mut ctx, feature, view, menu)
    }

    /// Item selection: the strategy gets first refusal; the host base runs
    /// only if the strategy did not consume the event.
    pub fn on_menu_item_selected(&mut self, feature: FeatureId, item: &NativeMenuItem) -> bool {
        let consumed = {
            let mut ctx = strategy_ctx(
                &mut self.host,
                &mut self.hooks,
                self.config.logger.as_ref(),
                self.style,
            );
            self.strategy.on_menu_item_selected(&mut ctx, feature, item)
        };
        if consumed {
            self.log(
                LogLevel::Debug,
                MENU_TARGET,
                "item_consumed_by_strategy",
                [json_kv("feature", json!(feature.0))],
            );
            return true;
        }
        self.host.base_menu_item_selected(feature, item)
    }

    fn log(
        &self,
        level: LogLevel,
        target: &str,
        message: &str,
        fields: impl IntoIterator<Item = (String, Value)>,
    ) {
        if let Some(logger) = self.config.logger.as_ref() {
            let _ = logger.log_event(event_with_fields(level, target, message, fields));
        }
    }

    fn audit(&self, stage: ScreenAuditStage, details: Vec<(String, Value)>) {
        let mut builder = ScreenAuditEventBuilder::new(stage);
        for (key, value) in details {
            builder.detail(key, value);
        }
        self.config.audit.record(builder.finish());
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        self.log(
            LogLevel::Debug,
            LIFECYCLE_TARGET,
            "screen_destroyed",
            std::iter::empty(),
        );
        self.audit(ScreenAuditStage::ScreenDestroyed, Vec::new());
    }
}

#[cfg(test)]
impl Screen {
    /// Style flags are read once at creation and never recomputed; this
    /// override exists solely to exercise the reset path of `command_bar`.
    fn override_window_style(&mut self, style: WindowStyle) {
        self.style = style;
    }
}
