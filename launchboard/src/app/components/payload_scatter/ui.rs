use app_core::chart::ChartSpec;
use egui_plot::{Legend, MarkerShape, Points};

use crate::app::components::auto_color;

impl super::PayloadScatter {
    pub fn render(&self, ui: &mut egui::Ui) {
        let Some(ChartSpec::Scatter {
            title,
            x_label,
            y_label,
            points,
        }) = &self.spec
        else {
            ui.weak("waiting for data");
            return;
        };

        ui.vertical_centered(|ui| ui.strong(title));

        // One series per booster category, in first-seen order so colors are
        // stable within a render.
        let mut series: Vec<(&str, Vec<[f64; 2]>)> = Vec::new();
        for point in points {
            let xy = [point.x, point.y];
            match series
                .iter_mut()
                .find(|(category, _)| *category == point.category)
            {
                Some((_, xys)) => xys.push(xy),
                None => series.push((point.category.as_str(), vec![xy])),
            }
        }

        egui_plot::Plot::new("success-payload-scatter-chart")
            .legend(Legend::default())
            .x_axis_label(x_label)
            .y_axis_label(y_label)
            .include_y(-0.25)
            .include_y(1.25)
            .height(280.0)
            .show(ui, |plot_ui| {
                for (idx, (category, xys)) in series.into_iter().enumerate() {
                    plot_ui.points(
                        Points::new(xys)
                            .name(category)
                            .color(auto_color(idx as i32))
                            .shape(MarkerShape::Circle)
                            .radius(4.0),
                    );
                }
            });
    }
}
