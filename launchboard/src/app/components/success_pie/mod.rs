mod logic;
mod ui;

pub use logic::reduce;

use app_core::chart::ChartSpec;

/// Placeholder for the success pie chart. Caches the most recent spec so the
/// chart can be redrawn between recomputations; the spec itself is replaced
/// wholesale whenever the dispatcher reruns the reducer.
#[derive(Default)]
pub struct SuccessPie {
    spec: Option<ChartSpec>,
}

impl SuccessPie {
    pub fn update_spec(&mut self, spec: ChartSpec) {
        self.spec = Some(spec);
    }
}
