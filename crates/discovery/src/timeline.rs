//! Assembly of a continuous timestep series from successive runs.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::model::ModelPolicy;
use crate::records::{parse_timestep_key, RunDescriptor, TimestepRecord, DATA_FILE_EXT};

/// Build the time series for `runs` (any order).
///
/// The newest run contributes every `.om` key in `latest_run_files`. Each
/// earlier run, newest first, contributes the policy's backfill hours as
/// synthesized keys. A timestep already taken by a newer run is skipped.
/// The result is sorted by valid time.
pub fn build_timesteps(
    policy: ModelPolicy,
    runs: &[RunDescriptor],
    latest_run_files: &[String],
    base_url: &str,
) -> Vec<TimestepRecord> {
    let mut ordered: Vec<&RunDescriptor> = runs.iter().collect();
    ordered.sort_by(|a, b| b.datetime.cmp(&a.datetime));

    let Some((latest, earlier)) = ordered.split_first() else {
        return Vec::new();
    };

    let base_url = base_url.trim_end_matches('/');
    let mut seen = HashSet::new();
    let mut timesteps = Vec::new();

    for key in latest_run_files.iter().filter(|k| k.ends_with(DATA_FILE_EXT)) {
        let valid_time = match parse_timestep_key(key) {
            Ok(t) => t,
            Err(e) => {
                warn!(error = %e, "Skipping unrecognised file in latest run");
                continue;
            }
        };
        let record = TimestepRecord::new(valid_time, latest, format!("{}/{}", base_url, key));
        if seen.insert(record.timestep.clone()) {
            timesteps.push(record);
        }
    }
    debug!(
        run = %latest.run_label,
        timesteps = timesteps.len(),
        "Added latest run"
    );

    for run in earlier {
        for &hours in policy.backfill_hours() {
            let valid_time = run.valid_time(hours);
            let url = format!("{}/{}", base_url, run.file_key(valid_time));
            let record = TimestepRecord::new(valid_time, run, url);
            if seen.insert(record.timestep.clone()) {
                timesteps.push(record);
            }
        }
    }

    timesteps.sort_by_key(|t| t.datetime);
    timesteps
}
