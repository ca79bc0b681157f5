use std::sync::{Arc, RwLock};

use crate::strategy::CapabilityTier;

/// Mutable bar state shared between the screen-owned facade and the strategy
/// that created it. Title propagation flows through this cell so strategies
/// never need a back-reference to the screen.
#[derive(Debug, Default)]
pub struct BarState {
    title: Option<String>,
    visible: bool,
}

impl BarState {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

pub type SharedBarState = Arc<RwLock<BarState>>;

/// Facade over the decorative command bar.
///
/// Physically constructed at most once per screen, by the active strategy,
/// on the first `Screen::command_bar` access while the window style asks for
/// a bar. Cloning the facade clones the handle, not the bar.
#[derive(Debug, Clone)]
pub struct CommandBar {
    state: SharedBarState,
    overlay: bool,
    tier: CapabilityTier,
}

impl CommandBar {
    pub(crate) fn new(tier: CapabilityTier, overlay: bool, initial_title: Option<String>) -> Self {
        let state = Arc::new(RwLock::new(BarState {
            title: initial_title,
            visible: true,
        }));
        Self {
            state,
            overlay,
            tier,
        }
    }

    pub fn title(&self) -> Option<String> {
        self.state.read().ok().and_then(|bar| bar.title.clone())
    }

    pub fn set_title(&self, title: impl Into<String>) {
        if let Ok(mut bar) = self.state.write() {
            bar.title = Some(title.into());
        }
    }

    pub fn show(&self) {
        if let Ok(mut bar) = self.state.write() {
            bar.visible = true;
        }
    }

    pub fn hide(&self) {
        if let Ok(mut bar) = self.state.write() {
            bar.visible = false;
        }
    }

    pub fn is_showing(&self) -> bool {
        self.state.read().map(|bar| bar.visible).unwrap_or(false)
    }

    /// Whether the bar overlays window content rather than stacking above it.
    pub fn overlay(&self) -> bool {
        self.overlay
    }

    pub fn tier(&self) -> CapabilityTier {
        self.tier
    }

    pub(crate) fn state_handle(&self) -> SharedBarState {
        Arc::clone(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bar_is_visible_with_initial_title() {
        let bar = CommandBar::new(CapabilityTier::Compat, false, Some("home".into()));
        assert!(bar.is_showing());
        assert_eq!(bar.title().as_deref(), Some("home"));
        assert!(!bar.overlay());
    }

    #[test]
    fn title_changes_propagate_through_shared_handle() {
        let bar = CommandBar::new(CapabilityTier::NativeDecor, true, None);
        let handle = bar.state_handle();

        bar.set_title("settings");
        assert_eq!(
            handle.read().unwrap().title(),
            Some("settings"),
            "facade writes must be visible through the strategy's handle"
        );

        handle.write().unwrap().set_title("renamed");
        assert_eq!(bar.title().as_deref(), Some("renamed"));
    }

    #[test]
    fn show_hide_toggles_visibility() {
        let bar = CommandBar::new(CapabilityTier::NativeBar, false, None);
        bar.hide();
        assert!(!bar.is_showing());
        bar.show();
        assert!(bar.is_showing());
    }
}
