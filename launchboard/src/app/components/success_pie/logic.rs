use app_core::chart::{ChartSpec, PieSlice};
use launch_table::LaunchTable;

use crate::app::components::{FilterState, SiteFilter};

/// Computes the success pie chart for the current site selection.
///
/// With the `All` sentinel the chart shows one slice per known site, valued
/// by that site's success count. With a specific site it shows the two
/// slices "Success" and "Failure" for that site; the failure count is
/// derived from the row count, so a site without a single success still
/// renders correctly. A selection matching no rows yields an empty pie.
pub fn reduce(table: &LaunchTable, filter: &FilterState) -> ChartSpec {
    match &filter.site {
        SiteFilter::All => {
            let slices = table
                .sites()
                .iter()
                .map(|site| {
                    let successes = table
                        .records()
                        .iter()
                        .filter(|record| &record.site == site && record.success)
                        .count();
                    PieSlice::new(site.clone(), successes as f64)
                })
                .collect();
            ChartSpec::Pie {
                title: "Successful Launches by Site".into(),
                slices,
            }
        }
        SiteFilter::Site(name) => {
            let mut rows = 0_u64;
            let mut successes = 0_u64;
            for record in table.records().iter().filter(|record| &record.site == name) {
                rows += 1;
                if record.success {
                    successes += 1;
                }
            }
            let slices = if rows == 0 {
                Vec::new()
            } else {
                vec![
                    PieSlice::new("Success".into(), successes as f64),
                    PieSlice::new("Failure".into(), (rows - successes) as f64),
                ]
            };
            ChartSpec::Pie {
                title: format!("Launch Results at {name}"),
                slices,
            }
        }
    }
}
