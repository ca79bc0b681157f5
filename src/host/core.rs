use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Identifies a host window feature or panel.
///
/// The numbering mirrors the host convention: the options panel is feature
/// zero, the extended command-bar features live in the compat range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureId(pub i32);

impl FeatureId {
    /// The primary options/command panel.
    pub const OPTIONS_PANEL: FeatureId = FeatureId(0);
    /// Requests a decorative command bar in the window decor.
    pub const COMMAND_BAR: FeatureId = FeatureId(8);
    /// Requests a command bar that overlays window content.
    pub const COMMAND_BAR_OVERLAY: FeatureId = FeatureId(9);
}

/// Opaque handle to a native view. The facade never looks inside; it only
/// forwards handles between the host and the active strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewHandle(u64);

impl ViewHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Opaque resource identifier for a host layout definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutId(pub u32);

/// Host layout parameters, mirrored verbatim from the host convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    pub width: i32,
    pub height: i32,
}

impl LayoutParams {
    pub const MATCH_PARENT: i32 = -1;
    pub const WRAP_CONTENT: i32 = -2;

    pub fn fill() -> Self {
        Self {
            width: Self::MATCH_PARENT,
            height: Self::MATCH_PARENT,
        }
    }
}

/// Opaque persisted-state bag handed through lifecycle callbacks. Contents
/// belong to the host and application; the facade forwards it untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedState(Map<String, Value>);

impl SavedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Opaque host configuration snapshot delivered on configuration changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostConfig(Map<String, Value>);

impl HostConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Opaque native menu handle. Hosts and inflaters populate it; the facade
/// only carries it between host callbacks, hooks, and strategies.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NativeMenu {
    token: u64,
}

impl NativeMenu {
    pub fn new(token: u64) -> Self {
        Self { token }
    }

    pub fn token(&self) -> u64 {
        self.token
    }
}

/// Opaque native menu item handle, forwarded unchanged on selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeMenuItem {
    token: u64,
}

impl NativeMenuItem {
    pub fn new(token: u64) -> Self {
        Self { token }
    }

    pub fn token(&self) -> u64 {
        self.token
    }
}

/// Window style flags read once per screen creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowStyle {
    /// The window is styled to carry a command bar.
    pub has_command_bar: bool,
    /// The command bar overlays window content instead of stacking above it.
    pub overlay_command_bar: bool,
}

impl WindowStyle {
    pub fn wants_command_bar(&self) -> bool {
        self.has_command_bar || self.overlay_command_bar
    }
}

/// Injected stand-in for the native base class and its environment.
///
/// The screen owns a boxed backend and calls through it for everything the
/// original base class would have done itself: the `base_*` methods are the
/// "super" calls of the host convention. Readers (`capability_level`,
/// `window_style`) are consulted exactly once, during screen creation, and a
/// failure there is fatal to creation.
///
/// Default implementations make the base class inert, so test hosts only
/// implement what they assert on. A production backend overrides every
/// forward it supports.
pub trait HostBackend: Send {
    fn capability_level(&self) -> Result<u32>;

    fn window_style(&self) -> Result<WindowStyle>;

    fn base_create(&mut self, _saved: Option<&SavedState>) {}

    fn base_post_create(&mut self, _saved: Option<&SavedState>) {}

    fn base_configuration_changed(&mut self, _config: &HostConfig) {}

    fn base_title_changed(&mut self, _title: &str, _color: Option<u32>) {}

    fn base_invalidate_command_menu(&mut self) {}

    fn base_create_panel_view(&mut self, _feature: FeatureId) -> Option<ViewHandle> {
        None
    }

    fn base_create_panel_menu(&mut self, _feature: FeatureId, _menu: &mut NativeMenu) -> bool {
        false
    }

    fn base_prepare_panel(
        &mut self,
        _feature: FeatureId,
        _view: Option<&ViewHandle>,
        _menu: &mut NativeMenu,
    ) -> bool {
        false
    }

    fn base_menu_item_selected(&mut self, _feature: FeatureId, _item: &NativeMenuItem) -> bool {
        false
    }

    /// Negotiate a feature with the native window. Tiers with native bar
    /// support route feature requests here; the baseline tier records
    /// features itself and never calls this.
    fn base_request_window_feature(&mut self, _feature: FeatureId) -> bool {
        false
    }

    fn base_set_content_view(&mut self, _view: ViewHandle) {}

    fn base_set_content_layout(&mut self, _layout: LayoutId) {}

    fn base_set_content_view_with_params(&mut self, _view: ViewHandle, _params: LayoutParams) {}

    fn base_add_content_view(&mut self, _view: ViewHandle, _params: LayoutParams) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_style_wants_bar_when_either_flag_set() {
        let mut style = WindowStyle::default();
        assert!(!style.wants_command_bar());
        style.has_command_bar = true;
        assert!(style.wants_command_bar());
        let overlay_only = WindowStyle {
            has_command_bar: false,
            overlay_command_bar: true,
        };
        assert!(overlay_only.wants_command_bar());
    }

    #[test]
    fn feature_constants_are_distinct() {
        assert_ne!(FeatureId::OPTIONS_PANEL, FeatureId::COMMAND_BAR);
        assert_ne!(FeatureId::COMMAND_BAR, FeatureId::COMMAND_BAR_OVERLAY);
    }
}
