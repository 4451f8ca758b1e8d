// Service regions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Region hosting the processing service's storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Oregon,
    Seoul,
    Singapore,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Oregon, Region::Seoul, Region::Singapore];

    pub fn name(&self) -> &'static str {
        match self {
            Region::Oregon => "oregon",
            Region::Seoul => "seoul",
            Region::Singapore => "singapore",
        }
    }

    /// Service-side region identifier
    pub fn region_code(&self) -> &'static str {
        match self {
            Region::Oregon => "RG004",
            Region::Seoul => "RG011",
            Region::Singapore => "RG013",
        }
    }

    /// Matching AWS region
    pub fn aws_code(&self) -> &'static str {
        match self {
            Region::Oregon => "us-west-2",
            Region::Seoul => "ap-northeast-2",
            Region::Singapore => "ap-southeast-1",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Region {
    type Err = DomainError;

    /// Accepts the region name, region code or AWS code, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Region::ALL
            .into_iter()
            .find(|region| {
                [region.name(), region.region_code(), region.aws_code()]
                    .iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(needle))
            })
            .ok_or_else(|| DomainError::invalid(format!("Unknown region '{}'", needle)))
    }
}
