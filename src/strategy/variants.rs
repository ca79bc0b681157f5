use std::collections::HashSet;

use serde_json::json;

use crate::command_bar::{CommandBar, SharedBarState};
use crate::error::Result;
use crate::host::{FeatureId, LayoutId, LayoutParams, NativeMenu, SavedState, ViewHandle};
use crate::logging::{LogLevel, json_kv};

use super::{CapabilityTier, ScreenStrategy, StrategyContext};

const LOG_TARGET: &str = "screen::strategy";

fn is_bar_feature(feature: FeatureId) -> bool {
    feature == FeatureId::COMMAND_BAR || feature == FeatureId::COMMAND_BAR_OVERLAY
}

/// Bookkeeping every variant carries: the content-install gate for feature
/// negotiation, negotiated features, a title stashed until the bar
/// materializes, the menu-stale flag, and the shared bar handle once a bar
/// exists.
#[derive(Default)]
struct StrategyCore {
    content_installed: bool,
    features: HashSet<FeatureId>,
    pending_title: Option<String>,
    menu_stale: bool,
    bar: Option<SharedBarState>,
}

impl StrategyCore {
    fn install_content(&mut self) {
        self.content_installed = true;
    }

    /// Check a feature request against the negotiation rules. Refusals are
    /// reported to the caller via `false` and logged, never raised.
    fn can_negotiate(
        &self,
        ctx: &StrategyContext<'_>,
        feature: FeatureId,
        supported: bool,
    ) -> bool {
        if !supported {
            ctx.log(
                LogLevel::Warn,
                LOG_TARGET,
                "feature_unsupported",
                [json_kv("feature", json!(feature.0))],
            );
            return false;
        }
        if self.content_installed {
            ctx.log(
                LogLevel::Warn,
                LOG_TARGET,
                "feature_after_content_install",
                [json_kv("feature", json!(feature.0))],
            );
            return false;
        }
        true
    }

    fn record_feature(&mut self, feature: FeatureId) {
        self.features.insert(feature);
    }

    fn propagate_title(&mut self, title: &str) {
        match &self.bar {
            Some(state) => {
                if let Ok(mut bar) = state.write() {
                    bar.set_title(title);
                }
            }
            None => self.pending_title = Some(title.to_string()),
        }
    }

    fn materialize_bar(&mut self, tier: CapabilityTier, overlay: bool) -> CommandBar {
        let bar = CommandBar::new(tier, overlay, self.pending_title.take());
        self.bar = Some(bar.state_handle());
        bar
    }

    fn invalidate(&mut self) {
        self.menu_stale = true;
    }

    fn take_stale(&mut self) -> bool {
        std::mem::take(&mut self.menu_stale)
    }
}

/// Newest tier: the native decor hosts the bar and the menu machinery.
///
/// Content installs and feature requests forward straight through the host
/// escapes, and an allowed options menu is handed back to the native
/// machinery after the hooks populate it.
pub struct NativeDecorStrategy {
    core: StrategyCore,
}

impl NativeDecorStrategy {
    pub fn new() -> Self {
        Self {
            core: StrategyCore::default(),
        }
    }
}

impl Default for NativeDecorStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenStrategy for NativeDecorStrategy {
    fn name(&self) -> &str {
        "strategy.native_decor"
    }

    fn tier(&self) -> CapabilityTier {
        CapabilityTier::NativeDecor
    }

    fn create_command_bar(&mut self, ctx: &mut StrategyContext<'_>) -> CommandBar {
        self.core
            .materialize_bar(self.tier(), ctx.window_style().overlay_command_bar)
    }

    fn on_create(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        _saved: Option<&SavedState>,
    ) -> Result<()> {
        ctx.log(
            LogLevel::Debug,
            LOG_TARGET,
            "strategy_ready",
            [json_kv("tier", json!(self.tier().label()))],
        );
        Ok(())
    }

    fn set_content_view(&mut self, ctx: &mut StrategyContext<'_>, view: ViewHandle) {
        ctx.super_set_content_view(view);
        self.core.install_content();
    }

    fn set_content_layout(&mut self, ctx: &mut StrategyContext<'_>, layout: LayoutId) {
        ctx.super_set_content_layout(layout);
        self.core.install_content();
    }

    fn set_content_view_with_params(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        view: ViewHandle,
        params: LayoutParams,
    ) {
        ctx.super_set_content_view_with_params(view, params);
        self.core.install_content();
    }

    fn add_content_view(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        view: ViewHandle,
        params: LayoutParams,
    ) {
        ctx.super_add_content_view(view, params);
        self.core.install_content();
    }

    fn request_window_feature(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        feature: FeatureId,
    ) -> bool {
        if !self.core.can_negotiate(ctx, feature, is_bar_feature(feature)) {
            return false;
        }
        let enabled = ctx.super_request_window_feature(feature);
        if enabled {
            self.core.record_feature(feature);
        }
        enabled
    }

    fn set_title(&mut self, _ctx: &mut StrategyContext<'_>, title: &str) {
        self.core.propagate_title(title);
    }

    fn invalidate_command_menu(&mut self, _ctx: &mut StrategyContext<'_>) {
        self.core.invalidate();
    }

    fn on_create_panel_view(
        &mut self,
        _ctx: &mut StrategyContext<'_>,
        _feature: FeatureId,
    ) -> Option<ViewHandle> {
        // The native panel supplies its own view.
        None
    }

    fn on_create_panel_menu(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        feature: FeatureId,
        menu: &mut NativeMenu,
    ) -> bool {
        if feature == FeatureId::OPTIONS_PANEL {
            let allow = ctx.hooks().on_create_command_menu(menu);
            if allow {
                ctx.super_create_panel_menu(feature, menu);
            }
            allow
        } else {
            ctx.super_create_panel_menu(feature, menu)
        }
    }

    fn on_prepare_panel(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        feature: FeatureId,
        view: Option<&ViewHandle>,
        menu: &mut NativeMenu,
    ) -> bool {
        if feature == FeatureId::OPTIONS_PANEL {
            self.core.take_stale();
            let allow = ctx.hooks().on_prepare_command_menu(menu);
            if allow {
                ctx.super_prepare_panel(feature, view, menu);
            }
            allow
        } else {
            ctx.super_prepare_panel(feature, view, menu)
        }
    }
}

/// Middle tier: the host provides a native bar, but the options-menu
/// pipeline is shimmed — the hooks drive it directly, without handing the
/// menu back to the native machinery.
pub struct NativeBarStrategy {
    core: StrategyCore,
}

impl NativeBarStrategy {
    pub fn new() -> Self {
        Self {
            core: StrategyCore::default(),
        }
    }
}

impl Default for NativeBarStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenStrategy for NativeBarStrategy {
    fn name(&self) -> &str {
        "strategy.native_bar"
    }

    fn tier(&self) -> CapabilityTier {
        CapabilityTier::NativeBar
    }

    fn create_command_bar(&mut self, ctx: &mut StrategyContext<'_>) -> CommandBar {
        self.core
            .materialize_bar(self.tier(), ctx.window_style().overlay_command_bar)
    }

    fn on_create(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        _saved: Option<&SavedState>,
    ) -> Result<()> {
        ctx.log(
            LogLevel::Debug,
            LOG_TARGET,
            "strategy_ready",
            [json_kv("tier", json!(self.tier().label()))],
        );
        Ok(())
    }

    fn set_content_view(&mut self, ctx: &mut StrategyContext<'_>, view: ViewHandle) {
        ctx.super_set_content_view(view);
        self.core.install_content();
    }

    fn set_content_layout(&mut self, ctx: &mut StrategyContext<'_>, layout: LayoutId) {
        ctx.super_set_content_layout(layout);
        self.core.install_content();
    }

    fn set_content_view_with_params(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        view: ViewHandle,
        params: LayoutParams,
    ) {
        ctx.super_set_content_view_with_params(view, params);
        self.core.install_content();
    }

    fn add_content_view(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        view: ViewHandle,
        params: LayoutParams,
    ) {
        ctx.super_add_content_view(view, params);
        self.core.install_content();
    }

    fn request_window_feature(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        feature: FeatureId,
    ) -> bool {
        if !self.core.can_negotiate(ctx, feature, is_bar_feature(feature)) {
            return false;
        }
        let enabled = ctx.super_request_window_feature(feature);
        if enabled {
            self.core.record_feature(feature);
        }
        enabled
    }

    fn set_title(&mut self, _ctx: &mut StrategyContext<'_>, title: &str) {
        self.core.propagate_title(title);
    }

    fn invalidate_command_menu(&mut self, _ctx: &mut StrategyContext<'_>) {
        self.core.invalidate();
    }

    fn on_create_panel_view(
        &mut self,
        _ctx: &mut StrategyContext<'_>,
        _feature: FeatureId,
    ) -> Option<ViewHandle> {
        None
    }

    fn on_create_panel_menu(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        feature: FeatureId,
        menu: &mut NativeMenu,
    ) -> bool {
        if feature == FeatureId::OPTIONS_PANEL {
            ctx.hooks().on_create_command_menu(menu)
        } else {
            ctx.super_create_panel_menu(feature, menu)
        }
    }

    fn on_prepare_panel(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        feature: FeatureId,
        view: Option<&ViewHandle>,
        menu: &mut NativeMenu,
    ) -> bool {
        if feature == FeatureId::OPTIONS_PANEL {
            self.core.take_stale();
            ctx.hooks().on_prepare_command_menu(menu)
        } else {
            ctx.super_prepare_panel(feature, view, menu)
        }
    }
}

/// Baseline tier: no native bar at all. The strategy synthesizes a
/// compatible sub-decor, tracks negotiated features itself, and builds its
/// own options panel view, rebuilding it after invalidation.
pub struct CompatDecorStrategy {
    core: StrategyCore,
    decor_synthesized: bool,
    panel_view: Option<ViewHandle>,
}

impl CompatDecorStrategy {
    pub fn new() -> Self {
        Self {
            core: StrategyCore::default(),
            decor_synthesized: false,
            panel_view: None,
        }
    }

    fn ensure_sub_decor(&mut self, ctx: &mut StrategyContext<'_>) {
        if self.decor_synthesized || !ctx.window_style().wants_command_bar() {
            return;
        }
        self.decor_synthesized = true;
        ctx.log(
            LogLevel::Debug,
            LOG_TARGET,
            "sub_decor_synthesized",
            [json_kv(
                "overlay",
                json!(ctx.window_style().overlay_command_bar),
            )],
        );
    }

    fn build_panel_view(&mut self, ctx: &mut StrategyContext<'_>, feature: FeatureId) {
        self.panel_view = Some(ViewHandle::new(feature.0 as u64));
        ctx.log(
            LogLevel::Debug,
            LOG_TARGET,
            "panel_view_synthesized",
            [json_kv("feature", json!(feature.0))],
        );
    }
}

impl Default for CompatDecorStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenStrategy for CompatDecorStrategy {
    fn name(&self) -> &str {
        "strategy.compat_decor"
    }

    fn tier(&self) -> CapabilityTier {
        CapabilityTier::Compat
    }

    fn create_command_bar(&mut self, ctx: &mut StrategyContext<'_>) -> CommandBar {
        self.ensure_sub_decor(ctx);
        self.core
            .materialize_bar(self.tier(), ctx.window_style().overlay_command_bar)
    }

    fn on_create(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        _saved: Option<&SavedState>,
    ) -> Result<()> {
        ctx.log(
            LogLevel::Debug,
            LOG_TARGET,
            "strategy_ready",
            [json_kv("tier", json!(self.tier().label()))],
        );
        Ok(())
    }

    fn on_post_create(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        _saved: Option<&SavedState>,
    ) -> Result<()> {
        self.ensure_sub_decor(ctx);
        Ok(())
    }

    fn set_content_view(&mut self, ctx: &mut StrategyContext<'_>, view: ViewHandle) {
        self.ensure_sub_decor(ctx);
        ctx.super_set_content_view(view);
        self.core.install_content();
    }

    fn set_content_layout(&mut self, ctx: &mut StrategyContext<'_>, layout: LayoutId) {
        self.ensure_sub_decor(ctx);
        ctx.super_set_content_layout(layout);
        self.core.install_content();
    }

    fn set_content_view_with_params(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        view: ViewHandle,
        params: LayoutParams,
    ) {
        self.ensure_sub_decor(ctx);
        ctx.super_set_content_view_with_params(view, params);
        self.core.install_content();
    }

    fn add_content_view(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        view: ViewHandle,
        params: LayoutParams,
    ) {
        self.ensure_sub_decor(ctx);
        ctx.super_add_content_view(view, params);
        self.core.install_content();
    }

    fn request_window_feature(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        feature: FeatureId,
    ) -> bool {
        if !self.core.can_negotiate(ctx, feature, is_bar_feature(feature)) {
            return false;
        }
        // Synthesized support: the feature set is tracked locally, no
        // native negotiation happens.
        self.core.record_feature(feature);
        true
    }

    fn set_title(&mut self, _ctx: &mut StrategyContext<'_>, title: &str) {
        self.core.propagate_title(title);
    }

    fn invalidate_command_menu(&mut self, _ctx: &mut StrategyContext<'_>) {
        self.core.invalidate();
    }

    fn on_create_panel_view(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        feature: FeatureId,
    ) -> Option<ViewHandle> {
        if feature != FeatureId::OPTIONS_PANEL {
            return None;
        }
        if self.core.take_stale() || self.panel_view.is_none() {
            self.build_panel_view(ctx, feature);
        }
        self.panel_view
    }

    fn on_create_panel_menu(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        feature: FeatureId,
        menu: &mut NativeMenu,
    ) -> bool {
        if feature == FeatureId::OPTIONS_PANEL {
            ctx.hooks().on_create_command_menu(menu)
        } else {
            ctx.super_create_panel_menu(feature, menu)
        }
    }

    fn on_prepare_panel(
        &mut self,
        ctx: &mut StrategyContext<'_>,
        feature: FeatureId,
        view: Option<&ViewHandle>,
        menu: &mut NativeMenu,
    ) -> bool {
        if feature == FeatureId::OPTIONS_PANEL {
            ctx.hooks().on_prepare_command_menu(menu)
        } else {
            ctx.super_prepare_panel(feature, view, menu)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::host::{HostBackend, NativeMenuItem, WindowStyle};
    use crate::strategy::{CommandMenuHooks, NoopCommandMenuHooks};

    #[derive(Default)]
    struct HostState {
        calls: Vec<String>,
    }

    struct TestHost {
        state: Arc<Mutex<HostState>>,
        grant_features: bool,
    }

    impl TestHost {
        fn new(state: Arc<Mutex<HostState>>) -> Self {
            Self {
                state,
                grant_features: true,
            }
        }

        fn record(&self, call: &str) {
            self.state.lock().unwrap().calls.push(call.to_string());
        }
    }

    impl HostBackend for TestHost {
        fn capability_level(&self) -> crate::Result<u32> {
            Ok(0)
        }

        fn window_style(&self) -> crate::Result<WindowStyle> {
            Ok(WindowStyle::default())
        }

        fn base_set_content_view(&mut self, _view: ViewHandle) {
            self.record("set_content_view");
        }

        fn base_request_window_feature(&mut self, _feature: FeatureId) -> bool {
            self.record("request_window_feature");
            self.grant_features
        }

        fn base_create_panel_menu(&mut self, _feature: FeatureId, _menu: &mut NativeMenu) -> bool {
            self.record("create_panel_menu");
            true
        }

        fn base_prepare_panel(
            &mut self,
            _feature: FeatureId,
            _view: Option<&ViewHandle>,
            _menu: &mut NativeMenu,
        ) -> bool {
            self.record("prepare_panel");
            true
        }
    }

    #[derive(Default)]
    struct HookState {
        create_calls: u32,
        item_calls: u32,
        raw_calls: u32,
    }

    struct TestHooks {
        state: Arc<Mutex<HookState>>,
        allow_menu: bool,
    }

    impl TestHooks {
        fn new(state: Arc<Mutex<HookState>>, allow_menu: bool) -> Self {
            Self { state, allow_menu }
        }
    }

    impl CommandMenuHooks for TestHooks {
        fn on_create_command_menu(&mut self, _menu: &mut NativeMenu) -> bool {
            self.state.lock().unwrap().create_calls += 1;
            self.allow_menu
        }

        fn on_command_item_selected(&mut self, _item: &NativeMenuItem) -> bool {
            self.state.lock().unwrap().item_calls += 1;
            true
        }

        fn on_command_menu_item_selected(
            &mut self,
            _feature: FeatureId,
            _item: &NativeMenuItem,
        ) -> bool {
            self.state.lock().unwrap().raw_calls += 1;
            false
        }
    }

    fn bar_style() -> WindowStyle {
        WindowStyle {
            has_command_bar: true,
            overlay_command_bar: false,
        }
    }

    #[test]
    fn feature_negotiation_closes_after_content_install() {
        let host_state = Arc::new(Mutex::new(HostState::default()));
        let mut host = TestHost::new(host_state.clone());
        let mut hooks = NoopCommandMenuHooks;
        let mut strategy = NativeDecorStrategy::new();

        let mut ctx = StrategyContext::new(&mut host, &mut hooks, None, bar_style());
        assert!(strategy.request_window_feature(&mut ctx, FeatureId::COMMAND_BAR));
        strategy.set_content_view(&mut ctx, ViewHandle::new(1));
        assert!(!strategy.request_window_feature(&mut ctx, FeatureId::COMMAND_BAR_OVERLAY));

        let calls = host_state.lock().unwrap().calls.clone();
        assert_eq!(calls, vec!["request_window_feature", "set_content_view"]);
    }

    #[test]
    fn unsupported_feature_rejected_without_host_consult() {
        let host_state = Arc::new(Mutex::new(HostState::default()));
        let mut host = TestHost::new(host_state.clone());
        let mut hooks = NoopCommandMenuHooks;
        let mut strategy = NativeBarStrategy::new();

        let mut ctx = StrategyContext::new(&mut host, &mut hooks, None, bar_style());
        assert!(!strategy.request_window_feature(&mut ctx, FeatureId(3)));
        assert!(host_state.lock().unwrap().calls.is_empty());
    }

    #[test]
    fn compat_negotiates_features_without_native_window() {
        let host_state = Arc::new(Mutex::new(HostState::default()));
        let mut host = TestHost::new(host_state.clone());
        host.grant_features = false;
        let mut hooks = NoopCommandMenuHooks;
        let mut strategy = CompatDecorStrategy::new();

        let mut ctx = StrategyContext::new(&mut host, &mut hooks, None, bar_style());
        assert!(
            strategy.request_window_feature(&mut ctx, FeatureId::COMMAND_BAR),
            "baseline tier synthesizes feature support itself"
        );
        assert!(host_state.lock().unwrap().calls.is_empty());
    }

    #[test]
    fn pending_title_applied_when_bar_materializes() {
        let host_state = Arc::new(Mutex::new(HostState::default()));
        let mut host = TestHost::new(host_state);
        let mut hooks = NoopCommandMenuHooks;
        let mut strategy = CompatDecorStrategy::new();
        let mut ctx = StrategyContext::new(&mut host, &mut hooks, None, bar_style());

        strategy.set_title(&mut ctx, "stashed");
        let bar = strategy.create_command_bar(&mut ctx);
        assert_eq!(bar.title().as_deref(), Some("stashed"));

        strategy.set_title(&mut ctx, "live");
        assert_eq!(bar.title().as_deref(), Some("live"));
    }

    #[test]
    fn native_decor_merges_allowed_menu_into_native_machinery() {
        let host_state = Arc::new(Mutex::new(HostState::default()));
        let hook_state = Arc::new(Mutex::new(HookState::default()));
        let mut host = TestHost::new(host_state.clone());
        let mut hooks = TestHooks::new(hook_state.clone(), true);
        let mut strategy = NativeDecorStrategy::new();
        let mut ctx = StrategyContext::new(&mut host, &mut hooks, None, bar_style());

        let mut menu = NativeMenu::new(7);
        assert!(strategy.on_create_panel_menu(&mut ctx, FeatureId::OPTIONS_PANEL, &mut menu));
        assert_eq!(hook_state.lock().unwrap().create_calls, 1);
        assert_eq!(
            host_state.lock().unwrap().calls,
            vec!["create_panel_menu"],
            "allowed menu is handed back to the native machinery"
        );
    }

    #[test]
    fn native_decor_suppressed_menu_skips_native_machinery() {
        let host_state = Arc::new(Mutex::new(HostState::default()));
        let hook_state = Arc::new(Mutex::new(HookState::default()));
        let mut host = TestHost::new(host_state.clone());
        let mut hooks = TestHooks::new(hook_state, false);
        let mut strategy = NativeDecorStrategy::new();
        let mut ctx = StrategyContext::new(&mut host, &mut hooks, None, bar_style());

        let mut menu = NativeMenu::new(7);
        assert!(!strategy.on_create_panel_menu(&mut ctx, FeatureId::OPTIONS_PANEL, &mut menu));
        assert!(host_state.lock().unwrap().calls.is_empty());
    }

    #[test]
    fn native_bar_drives_menu_pipeline_without_native_merge() {
        let host_state = Arc::new(Mutex::new(HostState::default()));
        let hook_state = Arc::new(Mutex::new(HookState::default()));
        let mut host = TestHost::new(host_state.clone());
        let mut hooks = TestHooks::new(hook_state.clone(), true);
        let mut strategy = NativeBarStrategy::new();
        let mut ctx = StrategyContext::new(&mut host, &mut hooks, None, bar_style());

        let mut menu = NativeMenu::new(9);
        assert!(strategy.on_create_panel_menu(&mut ctx, FeatureId::OPTIONS_PANEL, &mut menu));
        assert_eq!(hook_state.lock().unwrap().create_calls, 1);
        assert!(host_state.lock().unwrap().calls.is_empty());
    }

    #[test]
    fn non_options_panel_menu_goes_to_host() {
        let host_state = Arc::new(Mutex::new(HostState::default()));
        let hook_state = Arc::new(Mutex::new(HookState::default()));
        let mut host = TestHost::new(host_state.clone());
        let mut hooks = TestHooks::new(hook_state.clone(), true);
        let mut strategy = NativeBarStrategy::new();
        let mut ctx = StrategyContext::new(&mut host, &mut hooks, None, bar_style());

        let mut menu = NativeMenu::new(2);
        assert!(strategy.on_create_panel_menu(&mut ctx, FeatureId(5), &mut menu));
        assert_eq!(hook_state.lock().unwrap().create_calls, 0);
        assert_eq!(host_state.lock().unwrap().calls, vec!["create_panel_menu"]);
    }

    #[test]
    fn compat_synthesizes_panel_view_and_rebuilds_when_stale() {
        let host_state = Arc::new(Mutex::new(HostState::default()));
        let mut host = TestHost::new(host_state);
        let mut hooks = NoopCommandMenuHooks;
        let mut strategy = CompatDecorStrategy::new();
        let mut ctx = StrategyContext::new(&mut host, &mut hooks, None, bar_style());

        let first = strategy.on_create_panel_view(&mut ctx, FeatureId::OPTIONS_PANEL);
        assert!(first.is_some());

        strategy.invalidate_command_menu(&mut ctx);
        let rebuilt = strategy.on_create_panel_view(&mut ctx, FeatureId::OPTIONS_PANEL);
        assert!(rebuilt.is_some());

        assert!(
            strategy
                .on_create_panel_view(&mut ctx, FeatureId(5))
                .is_none(),
            "only the options panel is synthesized"
        );
    }

    #[test]
    fn item_selection_maps_options_panel_onto_dedicated_hook() {
        let host_state = Arc::new(Mutex::new(HostState::default()));
        let hook_state = Arc::new(Mutex::new(HookState::default()));
        let mut host = TestHost::new(host_state);
        let mut hooks = TestHooks::new(hook_state.clone(), true);
        let mut strategy = NativeDecorStrategy::new();
        let mut ctx = StrategyContext::new(&mut host, &mut hooks, None, bar_style());

        let item = NativeMenuItem::new(42);
        assert!(strategy.on_menu_item_selected(&mut ctx, FeatureId::OPTIONS_PANEL, &item));
        assert!(!strategy.on_menu_item_selected(&mut ctx, FeatureId(6), &item));

        let hooks_seen = hook_state.lock().unwrap();
        assert_eq!(hooks_seen.item_calls, 1);
        assert_eq!(hooks_seen.raw_calls, 1);
    }
}
