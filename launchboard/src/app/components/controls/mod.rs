mod logic;
mod ui;

use crate::app::layout::Layout;

/// Site selection of the dropdown. `All` is the sentinel for "no site
/// filter"; `Site` carries one exact site name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SiteFilter {
    All,
    Site(String),
}

impl SiteFilter {
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(name) => name == site,
        }
    }
}

/// Current values of the two input widgets. Owned here; reducers see it by
/// reference per invocation and keep nothing between invocations.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    pub site: SiteFilter,
    pub payload_range: [f64; 2],
}

pub struct Controls {
    filter: FilterState,
}

impl Controls {
    pub fn new(layout: &Layout) -> Self {
        Self {
            filter: FilterState {
                site: SiteFilter::All,
                payload_range: layout.payload_selector.default,
            },
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }
}
