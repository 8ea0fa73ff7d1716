mod components;
pub mod config;
mod layout;

use app_core::chart::ChartSpec;
use app_core::dispatch::Dispatcher;
use launch_table::LaunchTable;

use self::components::{
    payload_scatter, success_pie, Controls, FilterState, PayloadScatter, SuccessPie,
};
use self::layout::{Layout, PAYLOAD_SCATTER, PAYLOAD_SLIDER, SITE_DROPDOWN, SUCCESS_PIE};

pub struct EguiApp {
    table: LaunchTable,
    layout: Layout,
    controls: Controls,
    success_pie: SuccessPie,
    payload_scatter: PayloadScatter,
    dispatcher: Dispatcher<LaunchTable, FilterState, ChartSpec>,
}

impl EguiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, table: LaunchTable) -> Self {
        let layout = Layout::build(&table);
        let controls = Controls::new(&layout);

        let mut dispatcher = Dispatcher::new();
        dispatcher.subscribe(&[SITE_DROPDOWN], SUCCESS_PIE, success_pie::reduce);
        dispatcher.subscribe(
            &[SITE_DROPDOWN, PAYLOAD_SLIDER],
            PAYLOAD_SCATTER,
            payload_scatter::reduce,
        );

        Self {
            table,
            layout,
            controls,
            success_pie: Default::default(),
            payload_scatter: Default::default(),
            dispatcher,
        }
    }

    /// Reruns the reducers whose inputs changed and routes the recomputed
    /// specs to their chart placeholders.
    fn run_dispatch(&mut self) {
        if !self.dispatcher.has_work() {
            return;
        }
        for (output, spec) in self.dispatcher.dispatch(&self.table, self.controls.filter()) {
            if output == SUCCESS_PIE {
                self.success_pie.update_spec(spec);
            } else if output == PAYLOAD_SCATTER {
                self.payload_scatter.update_spec(spec);
            } else {
                log::warn!("no chart placeholder bound to output '{output}'");
            }
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Widget changes recorded during the previous frame are handled
        // before anything is drawn, so the charts below are current.
        self.run_dispatch();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.menu(ui, ctx);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.central_panel(ui);
        });

        if self.dispatcher.has_work() {
            ctx.request_repaint();
        }
    }
}

impl EguiApp {
    fn central_panel(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| ui.heading(self.layout.title));
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            if let Some(id) = self.controls.render_site_selector(&self.layout, ui) {
                self.dispatcher.mark_changed(id);
            }
            ui.add_space(8.0);
            self.success_pie.render(ui);

            ui.separator();
            if let Some(id) = self.controls.render_payload_selector(&self.layout, ui) {
                self.dispatcher.mark_changed(id);
            }
            ui.add_space(8.0);
            self.payload_scatter.render(ui);
        });
    }

    fn menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::widgets::global_theme_preference_buttons(ui);
            });
        });
    }
}
