use {
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, Key, SidePanel, TopBottomPanel},
    },
    serde::{Deserialize, Serialize},
};

use crate::{
    Cli,
    config::DF,
    domain::ChainId,
    models::Dataset,
    ui::{
        CorrelationCache, PlotView, SeriesToggle, SeriesVisibility, UI_CONFIG, UI_TEXT, render_chain_selector,
        render_correlations, render_series_toggles, render_table_summary, setup_custom_visuals,
    },
};

const SHORTCUTS: [(Key, SeriesToggle); 4] = [
    (Key::Num1, SeriesToggle::StakingRewards),
    (Key::Num2, SeriesToggle::Tvl),
    (Key::Num3, SeriesToggle::Price),
    (Key::Num4, SeriesToggle::StakedAmount),
];

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) selected_chain: ChainId,
    pub(crate) visibility: SeriesVisibility,
    #[serde(skip)]
    pub(crate) dataset: Dataset,
    #[serde(skip)]
    pub(crate) plot_view: PlotView,
    #[serde(skip)]
    pub(crate) correlations: CorrelationCache,
}

impl Default for App {
    fn default() -> Self {
        Self {
            selected_chain: ChainId::default(),
            visibility: SeriesVisibility::default(),
            dataset: Dataset::new(),
            plot_view: PlotView::new(),
            correlations: CorrelationCache::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli, dataset: Dataset) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        setup_custom_visuals(&cc.egui_ctx);

        // CLI choice beats the persisted one
        if let Some(chain) = args.chain {
            app.selected_chain = chain;
        }
        app.dataset = dataset;
        app.plot_view = PlotView::new();
        app
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        ctx.input(|i| {
            for (key, toggle) in SHORTCUTS {
                if i.key_pressed(key) {
                    self.visibility.toggle(toggle);
                    if DF.log_selection {
                        log::info!("Toggled {:?} -> {:?}", toggle, self.visibility);
                    }
                }
            }
        });
    }

    fn render_top_panel(&mut self, ctx: &Context) {
        let available: Vec<ChainId> = self.dataset.chains().collect();
        TopBottomPanel::top("top_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.heading(&UI_TEXT.app_title);
                ui.horizontal(|ui| {
                    if render_chain_selector(ui, &mut self.selected_chain, &available)
                        && DF.log_selection
                    {
                        log::info!("Selected chain {}", self.selected_chain);
                    }
                    ui.separator();
                    render_series_toggles(ui, &mut self.visibility);
                });
            });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("side_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .default_width(UI_CONFIG.side_panel_width)
            .show(ctx, |ui| {
                if let Some(table) = self.dataset.get(self.selected_chain) {
                    render_table_summary(ui, table);
                    ui.separator();
                    render_correlations(ui, self.correlations.get(table));
                }
                ui.separator();
                ui.small(&UI_TEXT.sp_shortcuts_hint);
            });
    }

    fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| match self.dataset.get(self.selected_chain) {
                Some(table) => {
                    if self.visibility == SeriesVisibility::NONE {
                        ui.small(&UI_TEXT.cp_no_series);
                    }
                    self.plot_view.show_chart(ui, table, &self.visibility);
                }
                None => {
                    ui.label(&UI_TEXT.cp_missing_chain);
                }
            });
    }
}

impl eframe::App for App {
    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Disable text selection globally.
        ctx.style_mut(|s| s.interaction.selectable_labels = false);

        self.handle_global_shortcuts(ctx);
        self.render_top_panel(ctx);
        self.render_side_panel(ctx);
        self.render_central_panel(ctx);
    }
}
