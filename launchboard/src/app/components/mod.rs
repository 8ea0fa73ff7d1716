pub mod controls;
pub mod payload_scatter;
pub mod success_pie;

pub use controls::{Controls, FilterState, SiteFilter};
pub use payload_scatter::PayloadScatter;
pub use success_pie::SuccessPie;

pub fn auto_color(color_idx: i32) -> egui::Color32 {
    // analog to egui_plot
    let golden_ratio = (5.0_f32.sqrt() - 1.0) / 2.0; // 0.61803398875
    let h = color_idx as f32 * golden_ratio;
    egui::epaint::Hsva::new(h, 0.85, 0.5, 1.0).into()
}
