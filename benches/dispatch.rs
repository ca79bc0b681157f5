use criterion::{Criterion, black_box, criterion_group, criterion_main};
use screen_compat::{
    CapabilityTier, FeatureId, HostBackend, NativeMenu, NativeMenuItem, Result, Screen,
    WindowStyle, select_strategy,
};

struct BenchHost {
    level: u32,
}

impl HostBackend for BenchHost {
    fn capability_level(&self) -> Result<u32> {
        Ok(self.level)
    }

    fn window_style(&self) -> Result<WindowStyle> {
        Ok(WindowStyle {
            has_command_bar: true,
            overlay_command_bar: false,
        })
    }

    fn base_request_window_feature(&mut self, _feature: FeatureId) -> bool {
        true
    }

    fn base_menu_item_selected(&mut self, _feature: FeatureId, _item: &NativeMenuItem) -> bool {
        true
    }
}

fn screen_menu_pipeline(c: &mut Criterion) {
    c.bench_function("screen_menu_pipeline", |b| {
        b.iter(|| {
            for level in [5u32, 11, 20] {
                let host = BenchHost { level };
                let mut screen = Screen::create(Box::new(host), None).expect("screen");
                screen.request_window_feature(FeatureId::COMMAND_BAR);
                screen.command_bar();
                let mut menu = NativeMenu::new(1);
                screen.on_create_panel_menu(FeatureId::OPTIONS_PANEL, &mut menu);
                screen.on_prepare_panel(FeatureId::OPTIONS_PANEL, None, &mut menu);
                screen.invalidate_command_menu();
                black_box(
                    screen.on_menu_item_selected(FeatureId::OPTIONS_PANEL, &NativeMenuItem::new(2)),
                );
            }
        });
    });
}

fn strategy_selection(c: &mut Criterion) {
    c.bench_function("strategy_selection", |b| {
        b.iter(|| {
            for level in 0u32..32 {
                let tier = CapabilityTier::from_level(black_box(level));
                black_box(select_strategy(tier).name().len());
            }
        });
    });
}

criterion_group!(benches, screen_menu_pipeline, strategy_selection);
criterion_main!(benches);
