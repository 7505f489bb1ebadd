//! Discovery of model runs in a public S3 bucket and assembly of a
//! continuous timestep series from them.
//!
//! The bucket is laid out as `data_spatial/{model}/YYYY/MM/DD/HHMMZ/`, with
//! one `YYYY-MM-DDTHHMM.om` file per forecast step in each run folder.
//!
//! ```no_run
//! # async fn run() -> discovery::DiscoveryResult<()> {
//! use discovery::{build_timesteps, discover_runs, BucketListing, DiscoveryConfig, ModelPolicy, S3Listing};
//!
//! let model: ModelPolicy = "ecmwf_ifs".parse()?;
//! let listing = S3Listing::new(DiscoveryConfig::from_env())?;
//! let runs = discover_runs(&listing, model).await?;
//! if let Some(latest) = runs.last() {
//!     let files = listing.list_keys(&latest.prefix).await?;
//!     let series = build_timesteps(model, &runs, &files, &listing.config().base_url);
//!     println!("{} timesteps", series.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod listing;
pub mod model;
pub mod records;
pub mod runs;
pub mod timeline;
pub mod verify;

pub use config::DiscoveryConfig;
pub use error::{DiscoveryError, DiscoveryResult};
pub use listing::{parse_list_response, BucketListing, ListPage, S3Listing};
pub use model::ModelPolicy;
pub use records::{parse_timestep_key, RunDescriptor, TimestepRecord, TIMESTEP_FORMAT};
pub use runs::discover_runs;
pub use timeline::build_timesteps;
pub use verify::{verification_sample, verify, HeadProbe, Verification, VerifyStatus};
