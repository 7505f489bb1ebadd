//! Per-model gap-filling policies.

use std::fmt;
use std::str::FromStr;

use crate::error::DiscoveryError;

/// How a model's timestep series is assembled from its runs.
///
/// The newest run contributes every file it has. Each earlier run fills the
/// gap before the next run with its first few forecast hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelPolicy {
    /// Hourly output: hours 0 through 5 of each earlier run.
    EcmwfIfs,
    /// Three-hourly output: hours 0 and 3 of each earlier run.
    EcmwfIfs025,
}

impl ModelPolicy {
    pub const ALL: [ModelPolicy; 2] = [ModelPolicy::EcmwfIfs, ModelPolicy::EcmwfIfs025];

    pub fn name(&self) -> &'static str {
        match self {
            Self::EcmwfIfs => "ecmwf_ifs",
            Self::EcmwfIfs025 => "ecmwf_ifs025",
        }
    }

    /// Forecast hours taken from every run except the newest.
    pub fn backfill_hours(&self) -> &'static [i64] {
        match self {
            Self::EcmwfIfs => &[0, 1, 2, 3, 4, 5],
            Self::EcmwfIfs025 => &[0, 3],
        }
    }

    /// Bucket prefix holding the model's runs.
    pub fn data_prefix(&self) -> String {
        format!("data_spatial/{}/", self.name())
    }
}

impl FromStr for ModelPolicy {
    type Err = DiscoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| DiscoveryError::UnknownModel(s.to_string()))
    }
}

impl fmt::Display for ModelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
