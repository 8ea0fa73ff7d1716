use app_core::chart::ChartSpec;
use egui_plot::{Legend, PlotPoints, Polygon};

use crate::app::components::auto_color;

const SEGMENTS_PER_TURN: usize = 128;

impl super::SuccessPie {
    pub fn render(&self, ui: &mut egui::Ui) {
        let Some(ChartSpec::Pie { title, slices }) = &self.spec else {
            ui.weak("waiting for data");
            return;
        };

        ui.vertical_centered(|ui| ui.strong(title));
        let total: f64 = slices.iter().map(|slice| slice.value).sum();

        egui_plot::Plot::new("success-pie-chart")
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .include_x(-1.3)
            .include_x(1.3)
            .include_y(-1.3)
            .include_y(1.3)
            .legend(Legend::default())
            .height(280.0)
            .show(ui, |plot_ui| {
                if total <= 0.0 {
                    return;
                }
                // Slices start at twelve o'clock and run clockwise.
                let mut angle = std::f64::consts::FRAC_PI_2;
                for (idx, slice) in slices.iter().enumerate() {
                    let sweep = std::f64::consts::TAU * slice.value / total;
                    // A zero-valued slice has no area; it still occupies its
                    // color index so colors stay stable across selections.
                    if slice.value > 0.0 {
                        plot_ui.polygon(
                            slice_polygon(angle, sweep)
                                .fill_color(auto_color(idx as i32))
                                .name(format!("{} ({})", slice.label, slice.value)),
                        );
                    }
                    angle -= sweep;
                }
            });
    }
}

fn slice_polygon(start: f64, sweep: f64) -> Polygon {
    let steps = ((sweep / std::f64::consts::TAU * SEGMENTS_PER_TURN as f64).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let theta = start - sweep * (i as f64 / steps as f64);
        points.push([theta.cos(), theta.sin()]);
    }
    Polygon::new(PlotPoints::from(points))
}
