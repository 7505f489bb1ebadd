//! End-to-end tests of run discovery, series assembly and verification
//! against an in-memory bucket.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use discovery::{
    build_timesteps, discover_runs, verify, BucketListing, DiscoveryError, DiscoveryResult,
    HeadProbe, ModelPolicy, RunDescriptor, VerifyStatus,
};

const BASE: &str = "https://bucket.example";
const ROOT: &str = "data_spatial/ecmwf_ifs/";

// ============================================================================
// Fakes
// ============================================================================

/// Folder tree held in memory; unknown prefixes list as empty.
#[derive(Default)]
struct MemoryListing {
    prefixes: BTreeMap<String, Vec<String>>,
    keys: BTreeMap<String, Vec<String>>,
}

impl MemoryListing {
    fn folder(mut self, parent: &str, children: &[&str]) -> Self {
        self.prefixes.insert(
            parent.to_string(),
            children.iter().map(|c| format!("{}{}/", parent, c)).collect(),
        );
        self
    }

    fn files(mut self, prefix: &str, names: &[&str]) -> Self {
        self.keys.insert(
            prefix.to_string(),
            names.iter().map(|n| format!("{}{}", prefix, n)).collect(),
        );
        self
    }
}

#[async_trait]
impl BucketListing for MemoryListing {
    async fn list_prefixes(&self, prefix: &str) -> DiscoveryResult<Vec<String>> {
        Ok(self.prefixes.get(prefix).cloned().unwrap_or_default())
    }

    async fn list_keys(&self, prefix: &str) -> DiscoveryResult<Vec<String>> {
        Ok(self.keys.get(prefix).cloned().unwrap_or_default())
    }
}

struct FailingListing;

#[async_trait]
impl BucketListing for FailingListing {
    async fn list_prefixes(&self, _prefix: &str) -> DiscoveryResult<Vec<String>> {
        Err(DiscoveryError::Status {
            url: BASE.to_string(),
            status: 503,
        })
    }

    async fn list_keys(&self, _prefix: &str) -> DiscoveryResult<Vec<String>> {
        Ok(Vec::new())
    }
}

/// Answers 200 unless the URL has a scripted response.
#[derive(Default)]
struct ScriptedProbe {
    responses: HashMap<String, Result<u16, String>>,
}

#[async_trait]
impl HeadProbe for ScriptedProbe {
    async fn head(&self, url: &str) -> Result<u16, String> {
        self.responses.get(url).cloned().unwrap_or(Ok(200))
    }
}

// ============================================================================
// Helper functions
// ============================================================================

fn bucket() -> MemoryListing {
    MemoryListing::default()
        .folder(ROOT, &["2025", "latest"])
        .folder("data_spatial/ecmwf_ifs/2025/", &["12"])
        .folder("data_spatial/ecmwf_ifs/2025/12/", &["12", "13"])
        .folder("data_spatial/ecmwf_ifs/2025/12/12/", &["1800Z"])
        .folder("data_spatial/ecmwf_ifs/2025/12/13/", &["0000Z", "0600Z", "bogus"])
        .files(
            "data_spatial/ecmwf_ifs/2025/12/13/0600Z/",
            &[
                "2025-12-13T0600.om",
                "2025-12-13T0700.om",
                "2025-12-13T0800.om",
                "2025-12-13T0900.om",
                "meta.json",
            ],
        )
}

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

async fn series(
    listing: &MemoryListing,
    model: ModelPolicy,
) -> (Vec<RunDescriptor>, Vec<discovery::TimestepRecord>) {
    let runs = discover_runs(listing, model).await.unwrap();
    let latest = runs.last().unwrap();
    let files = listing.list_keys(&latest.prefix).await.unwrap();
    let timesteps = build_timesteps(model, &runs, &files, BASE);
    (runs, timesteps)
}

// ============================================================================
// Run discovery
// ============================================================================

#[tokio::test]
async fn test_discovers_runs_in_order() {
    let runs = discover_runs(&bucket(), ModelPolicy::EcmwfIfs).await.unwrap();

    let times: Vec<_> = runs.iter().map(|r| r.datetime).collect();
    assert_eq!(
        times,
        vec![
            dt("2025-12-12 18:00"),
            dt("2025-12-13 00:00"),
            dt("2025-12-13 06:00")
        ]
    );
    assert_eq!(runs[2].run_label, "0600Z");
    assert_eq!(runs[2].prefix, "data_spatial/ecmwf_ifs/2025/12/13/0600Z/");
}

#[tokio::test]
async fn test_other_model_sees_nothing() {
    let runs = discover_runs(&bucket(), ModelPolicy::EcmwfIfs025).await.unwrap();
    assert!(runs.is_empty());
}

#[tokio::test]
async fn test_listing_failure_propagates() {
    let err = discover_runs(&FailingListing, ModelPolicy::EcmwfIfs)
        .await
        .unwrap_err();
    assert!(err.is_transient());
}

// ============================================================================
// Series assembly
// ============================================================================

#[tokio::test]
async fn test_hourly_series_is_contiguous() {
    let (_, timesteps) = series(&bucket(), ModelPolicy::EcmwfIfs).await;

    assert_eq!(timesteps.len(), 16);
    assert_eq!(timesteps.first().unwrap().timestep, "2025-12-12T1800");
    assert_eq!(timesteps.last().unwrap().timestep, "2025-12-13T0900");
    for pair in timesteps.windows(2) {
        assert_eq!(pair[1].datetime - pair[0].datetime, chrono::Duration::hours(1));
    }
}

#[tokio::test]
async fn test_record_sources() {
    let (_, timesteps) = series(&bucket(), ModelPolicy::EcmwfIfs).await;
    let by_name: HashMap<_, _> = timesteps.iter().map(|t| (t.timestep.as_str(), t)).collect();

    let backfilled = by_name["2025-12-13T0300"];
    assert_eq!(backfilled.run_label, "0000Z");
    assert_eq!(backfilled.run_datetime, dt("2025-12-13 00:00"));
    assert_eq!(
        backfilled.url,
        "https://bucket.example/data_spatial/ecmwf_ifs/2025/12/13/0000Z/2025-12-13T0300.om"
    );

    let listed = by_name["2025-12-13T0800"];
    assert_eq!(listed.run_label, "0600Z");
    assert_eq!(listed.file_name(), "2025-12-13T0800.om");

    let previous_day = by_name["2025-12-12T2300"];
    assert_eq!(previous_day.run_label, "1800Z");
}

#[tokio::test]
async fn test_three_hourly_backfill() {
    let listing = bucket()
        .folder("data_spatial/ecmwf_ifs025/", &["2025"])
        .folder("data_spatial/ecmwf_ifs025/2025/", &["12"])
        .folder("data_spatial/ecmwf_ifs025/2025/12/", &["13"])
        .folder("data_spatial/ecmwf_ifs025/2025/12/13/", &["0000Z", "0600Z"])
        .files(
            "data_spatial/ecmwf_ifs025/2025/12/13/0600Z/",
            &["2025-12-13T0600.om", "2025-12-13T0900.om"],
        );
    let (_, timesteps) = series(&listing, ModelPolicy::EcmwfIfs025).await;

    let names: Vec<_> = timesteps.iter().map(|t| t.timestep.as_str()).collect();
    assert_eq!(
        names,
        vec!["2025-12-13T0000", "2025-12-13T0300", "2025-12-13T0600", "2025-12-13T0900"]
    );
}

#[test]
fn test_newer_run_wins_duplicates() {
    let older = RunDescriptor::from_prefix("m/2025/12/13/0000Z/").unwrap();
    let newer = RunDescriptor::from_prefix("m/2025/12/13/0600Z/").unwrap();
    let files = vec![
        "m/2025/12/13/0600Z/2025-12-13T0400.om".to_string(),
        "m/2025/12/13/0600Z/2025-12-13T0600.om".to_string(),
    ];

    // Order of the input runs does not matter
    let timesteps = build_timesteps(ModelPolicy::EcmwfIfs, &[newer, older], &files, BASE);
    let names: Vec<_> = timesteps.iter().map(|t| t.timestep.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "2025-12-13T0000",
            "2025-12-13T0100",
            "2025-12-13T0200",
            "2025-12-13T0300",
            "2025-12-13T0400",
            "2025-12-13T0500",
            "2025-12-13T0600"
        ]
    );
    let four = timesteps.iter().find(|t| t.timestep == "2025-12-13T0400").unwrap();
    assert_eq!(four.run_label, "0600Z");
}

#[test]
fn test_records_serialize() {
    let run = RunDescriptor::from_prefix("m/2025/12/13/0600Z/").unwrap();
    let files = vec!["m/2025/12/13/0600Z/2025-12-13T0600.om".to_string()];
    let timesteps = build_timesteps(ModelPolicy::EcmwfIfs, &[run], &files, BASE);

    let json = serde_json::to_value(&timesteps[0]).unwrap();
    assert_eq!(json["timestep"], "2025-12-13T0600");
    assert_eq!(json["run_label"], "0600Z");
    assert_eq!(json["datetime"], "2025-12-13T06:00:00");
}

// ============================================================================
// Verification
// ============================================================================

#[tokio::test]
async fn test_verify_reports_each_item() {
    let (_, timesteps) = series(&bucket(), ModelPolicy::EcmwfIfs).await;
    let mut probe = ScriptedProbe::default();
    probe
        .responses
        .insert(timesteps[0].url.clone(), Ok(404));
    probe
        .responses
        .insert(timesteps[15].url.clone(), Err("connection reset".to_string()));

    let results = verify(&probe, &timesteps, 10, 3).await;
    let indices: Vec<_> = results.iter().map(|r| r.index).collect();
    assert_eq!(indices, discovery::verification_sample(16, 10));

    assert_eq!(results[0].status, VerifyStatus::Fail("404".to_string()));
    assert_eq!(
        results.last().unwrap().status,
        VerifyStatus::Fail("connection reset".to_string())
    );
    assert!(results[1..results.len() - 1].iter().all(|r| r.status.is_ok()));
}

#[test]
fn test_verify_empty_series() {
    let probe = ScriptedProbe::default();
    let results = tokio_test::block_on(verify(&probe, &[], 10, 4));
    assert!(results.is_empty());
}

#[test]
fn test_unknown_model() {
    assert!(matches!(
        "icon_global".parse::<ModelPolicy>(),
        Err(DiscoveryError::UnknownModel(_))
    ));
}
