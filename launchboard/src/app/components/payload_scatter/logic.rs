use app_core::chart::{ChartSpec, ScatterPoint};
use launch_table::LaunchTable;

use crate::app::components::{FilterState, SiteFilter};

/// Computes the payload/outcome scatter chart for the current site selection
/// and payload range. The range is inclusive on both ends; the site filter
/// only ever narrows the result. One point per surviving row, grouped for
/// coloring by booster version category.
pub fn reduce(table: &LaunchTable, filter: &FilterState) -> ChartSpec {
    let [low, high] = filter.payload_range;
    let points = table
        .records()
        .iter()
        .filter(|record| record.payload_mass >= low && record.payload_mass <= high)
        .filter(|record| filter.site.matches(&record.site))
        .map(|record| {
            ScatterPoint::new(
                record.payload_mass,
                if record.success { 1.0 } else { 0.0 },
                record.booster_category.clone(),
            )
        })
        .collect();

    let title = match &filter.site {
        SiteFilter::All => format!("Launch Success between {low} and {high} (kg)"),
        SiteFilter::Site(name) => {
            format!("Launch Success between {low} and {high} (kg) from the {name} site")
        }
    };

    ChartSpec::Scatter {
        title,
        x_label: "Payload Mass (kg)".into(),
        y_label: "class".into(),
        points,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use launch_table::LaunchRecord;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn record(site: &str, success: bool, payload_mass: f64) -> LaunchRecord {
        LaunchRecord {
            site: site.into(),
            success,
            payload_mass,
            booster_category: "FT".into(),
        }
    }

    fn table() -> LaunchTable {
        LaunchTable::from_records(vec![
            record("SiteA", true, 4000.0),
            record("SiteA", false, 6000.0),
            record("SiteB", true, 3000.0),
        ])
        .unwrap()
    }

    fn filter(site: SiteFilter, payload_range: [f64; 2]) -> FilterState {
        FilterState {
            site,
            payload_range,
        }
    }

    fn points(spec: &ChartSpec) -> &[ScatterPoint] {
        match spec {
            ChartSpec::Scatter { points, .. } => points,
            other => panic!("expected a scatter spec, got {other:?}"),
        }
    }

    #[test]
    fn test_range_is_inclusive_on_both_ends() {
        init();
        let table = table();
        let spec = reduce(&table, &filter(SiteFilter::All, [3000.0, 6000.0]));
        assert_eq!(points(&spec).len(), 3);

        let spec = reduce(&table, &filter(SiteFilter::All, [3000.0, 4000.0]));
        let payloads: Vec<f64> = points(&spec).iter().map(|p| p.x).collect();
        assert_eq!(payloads, [4000.0, 3000.0]);
    }

    #[test]
    fn test_rows_outside_range_are_excluded() {
        init();
        let table = table();
        let spec = reduce(&table, &filter(SiteFilter::All, [0.0, 5000.0]));
        let payloads: Vec<f64> = points(&spec).iter().map(|p| p.x).collect();
        assert_eq!(payloads, [4000.0, 3000.0]);
        let outcomes: Vec<f64> = points(&spec).iter().map(|p| p.y).collect();
        assert_eq!(outcomes, [1.0, 1.0]);
    }

    #[test]
    fn test_site_filter_narrows_never_widens() {
        init();
        let table = table();
        let all = reduce(&table, &filter(SiteFilter::All, [0.0, 10000.0]));
        for site in table.sites() {
            let narrowed = reduce(
                &table,
                &filter(SiteFilter::Site(site.clone()), [0.0, 10000.0]),
            );
            for point in points(&narrowed) {
                assert!(points(&all).contains(point));
            }
        }
    }

    #[test]
    fn test_title_states_bounds_and_site() {
        init();
        let table = table();
        let spec = reduce(&table, &filter(SiteFilter::All, [0.0, 5000.0]));
        assert_eq!(spec.title(), "Launch Success between 0 and 5000 (kg)");

        let spec = reduce(
            &table,
            &filter(SiteFilter::Site("SiteA".into()), [0.0, 5000.0]),
        );
        assert_eq!(
            spec.title(),
            "Launch Success between 0 and 5000 (kg) from the SiteA site"
        );
    }

    #[test]
    fn test_identical_inputs_give_identical_specs() {
        init();
        let table = table();
        let filter = filter(SiteFilter::Site("SiteB".into()), [1000.0, 9000.0]);
        assert_eq!(reduce(&table, &filter), reduce(&table, &filter));
    }
}
