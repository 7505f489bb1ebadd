//! Run and timestep records.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::error::{DiscoveryError, DiscoveryResult};

/// Format of timestep identifiers and data file stems.
pub const TIMESTEP_FORMAT: &str = "%Y-%m-%dT%H%M";

/// Extension of model data files.
pub const DATA_FILE_EXT: &str = ".om";

/// One model run folder, e.g. `data_spatial/ecmwf_ifs/2025/12/13/0600Z/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunDescriptor {
    /// Bucket prefix of the run, with trailing slash.
    pub prefix: String,
    /// Initialisation time of the run.
    pub datetime: NaiveDateTime,
    /// Run folder name, e.g. `0600Z`.
    pub run_label: String,
}

impl RunDescriptor {
    /// Parse a `.../YYYY/MM/DD/HHMMZ/` prefix. Returns `None` if the last
    /// four path segments do not form a valid date and run hour.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        let parts: Vec<&str> = prefix.trim_end_matches('/').split('/').collect();
        if parts.len() < 4 {
            return None;
        }
        let [year, month, day, run] = &parts[parts.len() - 4..] else {
            return None;
        };

        let date = NaiveDate::from_ymd_opt(
            year.parse().ok()?,
            month.parse().ok()?,
            day.parse().ok()?,
        )?;
        let hour: u32 = run.get(..2)?.parse().ok()?;
        let datetime = date.and_hms_opt(hour, 0, 0)?;

        Some(Self {
            prefix: prefix.to_string(),
            datetime,
            run_label: run.to_string(),
        })
    }

    /// Key of this run's data file for `valid_time`.
    pub fn file_key(&self, valid_time: NaiveDateTime) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            valid_time.format(TIMESTEP_FORMAT),
            DATA_FILE_EXT
        )
    }

    /// Valid time `hours` after initialisation.
    pub fn valid_time(&self, hours: i64) -> NaiveDateTime {
        self.datetime + Duration::hours(hours)
    }
}

/// One entry of the assembled time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimestepRecord {
    /// Valid time formatted with [`TIMESTEP_FORMAT`]; unique in a series.
    pub timestep: String,
    pub datetime: NaiveDateTime,
    /// Label of the run the data comes from.
    pub run_label: String,
    pub run_datetime: NaiveDateTime,
    pub url: String,
}

impl TimestepRecord {
    pub fn new(valid_time: NaiveDateTime, run: &RunDescriptor, url: String) -> Self {
        Self {
            timestep: valid_time.format(TIMESTEP_FORMAT).to_string(),
            datetime: valid_time,
            run_label: run.run_label.clone(),
            run_datetime: run.datetime,
            url,
        }
    }

    /// Last path segment of the URL.
    pub fn file_name(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or(&self.url)
    }
}

/// Valid time encoded in a data file key such as
/// `data_spatial/ecmwf_ifs/2025/12/13/0600Z/2025-12-13T0900.om`.
pub fn parse_timestep_key(key: &str) -> DiscoveryResult<NaiveDateTime> {
    let name = key.rsplit('/').next().unwrap_or(key);
    let stem = name.strip_suffix(DATA_FILE_EXT).unwrap_or(name);
    NaiveDateTime::parse_from_str(stem, TIMESTEP_FORMAT)
        .map_err(|_| DiscoveryError::InvalidKey(key.to_string()))
}
