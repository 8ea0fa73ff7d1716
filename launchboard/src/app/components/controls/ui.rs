use app_core::dispatch::WidgetId;

use crate::app::layout::{Layout, PAYLOAD_SLIDER, SITE_DROPDOWN};

use super::logic::reconcile_range;
use super::SiteFilter;

impl super::Controls {
    /// Renders the site dropdown. Returns the widget id if the selection
    /// changed this frame.
    pub fn render_site_selector(&mut self, layout: &Layout, ui: &mut egui::Ui) -> Option<WidgetId> {
        let mut changed = None;
        ui.horizontal(|ui| {
            ui.label("Launch Site:");
            egui::ComboBox::from_id_salt(SITE_DROPDOWN.0)
                .selected_text(self.selected_site_label().to_owned())
                .show_ui(ui, |ui| {
                    for option in layout.site_options.iter() {
                        let response = ui.selectable_value(
                            &mut self.filter.site,
                            option.value.clone(),
                            &option.label,
                        );
                        if response.changed() {
                            changed = Some(SITE_DROPDOWN);
                        }
                    }
                });
        });
        changed
    }

    /// Renders the payload range selector as a pair of stepped sliders.
    /// Returns the widget id if either end moved this frame.
    pub fn render_payload_selector(
        &mut self,
        layout: &Layout,
        ui: &mut egui::Ui,
    ) -> Option<WidgetId> {
        let selector = &layout.payload_selector;
        let [mut low, mut high] = self.filter.payload_range;

        ui.label("Payload range (kg):");
        let low_response = ui.add(
            egui::Slider::new(&mut low, selector.min..=selector.max)
                .step_by(selector.step)
                .text("min"),
        );
        let high_response = ui.add(
            egui::Slider::new(&mut high, selector.min..=selector.max)
                .step_by(selector.step)
                .text("max"),
        );
        ui.horizontal(|ui| {
            for mark in selector.marks.iter() {
                ui.weak(format!("{mark:.0}"));
            }
        });

        if !(low_response.changed() || high_response.changed()) {
            return None;
        }
        self.filter.payload_range = reconcile_range(
            low,
            high,
            low_response.changed(),
            high_response.changed(),
        );
        Some(PAYLOAD_SLIDER)
    }

    fn selected_site_label(&self) -> &str {
        match &self.filter.site {
            SiteFilter::All => "All Sites",
            SiteFilter::Site(name) => name,
        }
    }
}
