//! Static widget declarations. Built once from the loaded table before the
//! first frame and never changed afterwards.

use app_core::dispatch::WidgetId;
use derive_new::new;
use launch_table::LaunchTable;

use super::components::SiteFilter;

pub const SITE_DROPDOWN: WidgetId = WidgetId("site-dropdown");
pub const PAYLOAD_SLIDER: WidgetId = WidgetId("payload-slider");
pub const SUCCESS_PIE: WidgetId = WidgetId("success-pie-chart");
pub const PAYLOAD_SCATTER: WidgetId = WidgetId("success-payload-scatter-chart");

pub const PAYLOAD_MIN: f64 = 0.0;
pub const PAYLOAD_MAX: f64 = 10000.0;
pub const PAYLOAD_STEP: f64 = 1000.0;

#[derive(Debug, new)]
pub struct DropdownOption {
    pub label: String,
    pub value: SiteFilter,
}

#[derive(Debug)]
pub struct RangeSelector {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
    pub default: [f64; 2],
}

#[derive(Debug)]
pub struct Layout {
    pub title: &'static str,
    pub site_options: Vec<DropdownOption>,
    pub payload_selector: RangeSelector,
}

impl Layout {
    pub fn build(table: &LaunchTable) -> Self {
        let mut site_options = vec![DropdownOption::new("All Sites".into(), SiteFilter::All)];
        site_options.extend(table.sites().iter().map(|site| {
            // Sites display under their own name.
            DropdownOption::new(site.clone(), SiteFilter::Site(site.clone()))
        }));

        let (min, max) = table.payload_bounds();
        let marks = (0..)
            .map(|i| i as f64 * PAYLOAD_STEP)
            .take_while(|mark| *mark <= PAYLOAD_MAX)
            .collect();

        Self {
            title: "SpaceX Launch Records Dashboard",
            site_options,
            payload_selector: RangeSelector {
                min: PAYLOAD_MIN,
                max: PAYLOAD_MAX,
                step: PAYLOAD_STEP,
                marks,
                default: [min.max(PAYLOAD_MIN), max.min(PAYLOAD_MAX)],
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use launch_table::LaunchRecord;

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
            record("SiteB", true, 3000.0),
            record("SiteA", true, 4000.0),
            record("SiteA", false, 6000.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_dropdown_lists_all_sentinel_then_each_site() {
        let layout = Layout::build(&table());
        let labels: Vec<&str> = layout
            .site_options
            .iter()
            .map(|option| option.label.as_str())
            .collect();
        assert_eq!(labels, ["All Sites", "SiteA", "SiteB"]);
        assert_eq!(layout.site_options[0].value, SiteFilter::All);
        assert_eq!(layout.site_options[1].value, SiteFilter::Site("SiteA".into()));
    }

    #[test]
    fn test_payload_selector_defaults_to_loaded_bounds() {
        let layout = Layout::build(&table());
        assert_eq!(layout.payload_selector.default, [3000.0, 6000.0]);
        assert_eq!(layout.payload_selector.min, 0.0);
        assert_eq!(layout.payload_selector.max, 10000.0);
    }

    #[test]
    fn test_payload_selector_marks_every_step() {
        let layout = Layout::build(&table());
        assert_eq!(layout.payload_selector.marks.len(), 11);
        assert_eq!(layout.payload_selector.marks.first(), Some(&0.0));
        assert_eq!(layout.payload_selector.marks.last(), Some(&10000.0));
    }
}
