mod logic;
mod ui;

pub use logic::reduce;

use app_core::chart::ChartSpec;

/// Placeholder for the payload/outcome scatter chart; caches the most recent
/// spec for redrawing between recomputations.
#[derive(Default)]
pub struct PayloadScatter {
    spec: Option<ChartSpec>,
}

impl PayloadScatter {
    pub fn update_spec(&mut self, spec: ChartSpec) {
        self.spec = Some(spec);
    }
}
