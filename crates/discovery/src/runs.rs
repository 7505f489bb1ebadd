//! Walking the year/month/day/run folder tree of a model.

use tracing::{debug, info, warn};

use crate::error::DiscoveryResult;
use crate::listing::BucketListing;
use crate::model::ModelPolicy;
use crate::records::RunDescriptor;

/// All runs available for `model`, oldest first.
///
/// Entries at the year level that are not all digits (such as
/// `latest.json` markers) are skipped, as are run folders whose path does
/// not parse as a date and hour.
pub async fn discover_runs<L>(listing: &L, model: ModelPolicy) -> DiscoveryResult<Vec<RunDescriptor>>
where
    L: BucketListing + ?Sized,
{
    let root = model.data_prefix();
    let mut runs = Vec::new();

    for year in listing.list_prefixes(&root).await? {
        if !is_numeric_segment(&year) {
            debug!(prefix = %year, "Skipping non-year entry");
            continue;
        }

        for month in listing.list_prefixes(&year).await? {
            for day in listing.list_prefixes(&month).await? {
                for run_prefix in listing.list_prefixes(&day).await? {
                    match RunDescriptor::from_prefix(&run_prefix) {
                        Some(run) => runs.push(run),
                        None => warn!(prefix = %run_prefix, "Skipping unparseable run folder"),
                    }
                }
            }
        }
    }

    runs.sort_by_key(|r| r.datetime);
    info!(model = %model, runs = runs.len(), "Discovered runs");
    Ok(runs)
}

/// Whether the last path segment of `prefix` is a non-empty run of digits.
fn is_numeric_segment(prefix: &str) -> bool {
    let segment = prefix.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}
