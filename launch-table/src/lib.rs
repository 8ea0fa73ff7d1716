#![warn(clippy::all, rust_2018_idioms)]

//! Loads the launch records dataset into an immutable in-memory table.
//!
//! The table is read exactly once at process start. Loading is all-or-nothing:
//! a missing file, a missing column, an unparsable field or an empty table all
//! fail the load, there are no partial results.

use std::io::Read;
use std::path::Path;

use app_core::string_error::ErrorStringExt;
use serde::Deserialize;

/// One row of the launch dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    pub success: bool,
    pub payload_mass: f64,
    pub booster_category: String,
}

// Row as found in the CSV file; validated into `LaunchRecord`. Columns not
// listed here are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass: f64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

impl TryFrom<RawRecord> for LaunchRecord {
    type Error = String;

    fn try_from(raw: RawRecord) -> Result<Self, String> {
        let success = match raw.class {
            0 => false,
            1 => true,
            other => return Err(format!("'class' must be 0 or 1, found {other}")),
        };
        if !raw.payload_mass.is_finite() || raw.payload_mass < 0.0 {
            return Err(format!(
                "'Payload Mass (kg)' must be a non-negative number, found {}",
                raw.payload_mass
            ));
        }
        Ok(LaunchRecord {
            site: raw.site,
            success,
            payload_mass: raw.payload_mass,
            booster_category: raw.booster_category,
        })
    }
}

/// The dataset, loaded once at startup and read-only afterwards.
#[derive(Clone, Debug)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    payload_bounds: (f64, f64),
    sites: Vec<String>,
}

impl LaunchTable {
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let reader = csv::Reader::from_path(path).err_to_string("unable to open launch dataset")?;
        let records = decode(reader)?;
        log::debug!("loaded {} launch records from {:?}", records.len(), path);
        Self::from_records(records)
    }

    pub fn from_csv(text: &str) -> Result<Self, String> {
        let reader = csv::Reader::from_reader(text.as_bytes());
        Self::from_records(decode(reader)?)
    }

    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, String> {
        if records.is_empty() {
            return Err("launch dataset contains no rows".into());
        }
        let payload_bounds = records
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), record| {
                (lo.min(record.payload_mass), hi.max(record.payload_mass))
            });
        let mut sites: Vec<String> = records.iter().map(|record| record.site.clone()).collect();
        sites.sort();
        sites.dedup();
        Ok(Self {
            records,
            payload_bounds,
            sites,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Minimum and maximum payload mass across all rows, computed at load.
    pub fn payload_bounds(&self) -> (f64, f64) {
        self.payload_bounds
    }

    /// Distinct site names, sorted.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }
}

fn decode<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<LaunchRecord>, String> {
    let mut records = Vec::new();
    for (row, raw) in reader.deserialize::<RawRecord>().enumerate() {
        // Rows are 1-based in error messages, with the header on top.
        let raw = raw.err_to_string(&format!("unable to parse dataset row {}", row + 1))?;
        let record =
            LaunchRecord::try_from(raw).err_to_string(&format!("invalid dataset row {}", row + 1))?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod test {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    const SAMPLE: &str = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1,4000,FT
CCAFS LC-40,0,6000,v1.1
VAFB SLC-4E,1,3000,FT
KSC LC-39A,0,500,B4
";

    #[test]
    fn test_loads_all_rows() {
        init();
        let table = LaunchTable::from_csv(SAMPLE).unwrap();
        assert_eq!(table.records().len(), 4);
        let first = &table.records()[0];
        assert_eq!(first.site, "CCAFS LC-40");
        assert!(first.success);
        assert_eq!(first.payload_mass, 4000.0);
        assert_eq!(first.booster_category, "FT");
    }

    #[test]
    fn test_payload_bounds_computed_at_load() {
        init();
        let table = LaunchTable::from_csv(SAMPLE).unwrap();
        assert_eq!(table.payload_bounds(), (500.0, 6000.0));
    }

    #[test]
    fn test_sites_sorted_and_distinct() {
        init();
        let table = LaunchTable::from_csv(SAMPLE).unwrap();
        assert_eq!(table.sites(), ["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        init();
        let text = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category
1,CCAFS LC-40,1,2500,FT
";
        let table = LaunchTable::from_csv(text).unwrap();
        assert_eq!(table.records().len(), 1);
    }

    #[test]
    fn test_outcome_outside_zero_one_is_fatal() {
        init();
        let text = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,2,4000,FT
";
        let error = LaunchTable::from_csv(text).unwrap_err();
        assert!(error.contains("row 1"), "unexpected error: {error}");
    }

    #[test]
    fn test_negative_payload_is_fatal() {
        init();
        let text = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1,-10,FT
";
        assert!(LaunchTable::from_csv(text).is_err());
    }

    #[test]
    fn test_unparsable_field_is_fatal() {
        init();
        let text = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,one,4000,FT
";
        assert!(LaunchTable::from_csv(text).is_err());
    }

    #[test]
    fn test_missing_column_is_fatal() {
        init();
        let text = "\
Launch Site,class
CCAFS LC-40,1
";
        assert!(LaunchTable::from_csv(text).is_err());
    }

    #[test]
    fn test_empty_table_is_fatal() {
        init();
        let text = "Launch Site,class,Payload Mass (kg),Booster Version Category\n";
        assert!(LaunchTable::from_csv(text).is_err());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        init();
        assert!(LaunchTable::from_path(Path::new("/no/such/file.csv")).is_err());
    }
}
