//! Commitment balance across drivers
//!
//! Shares are percentages of all commitments whose primary driver is each
//! driver. Bands are strict: exactly 50 % is not over-concentrated and
//! exactly 10 % is not under-represented.

use crate::ids::DriverId;
use crate::pyramid::StrategyPyramid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Share above which a driver holds too many commitments
pub const OVER_CONCENTRATION_PERCENT: f64 = 50.0;

/// Share below which a driver holds too few commitments
pub const UNDER_REPRESENTATION_PERCENT: f64 = 10.0;

/// One driver's slice of the commitments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverShare {
    /// Driver
    pub driver_id: DriverId,
    /// Driver name at the time of the check
    pub driver_name: String,
    /// Commitments with this driver as primary
    pub commitments: usize,
    /// Percentage of all commitments, 0-100
    pub percentage: f64,
}

/// Kind of imbalance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// More than half of all commitments
    OverConcentrated,
    /// Some, but less than a tenth of all commitments
    UnderRepresented,
    /// No commitments at all
    NoCommitments,
}

impl BalanceStatus {
    /// Classify a percentage, `None` when within the healthy band
    #[must_use]
    pub fn classify(commitments: usize, percentage: f64) -> Option<Self> {
        if commitments == 0 {
            Some(BalanceStatus::NoCommitments)
        } else if percentage > OVER_CONCENTRATION_PERCENT {
            Some(BalanceStatus::OverConcentrated)
        } else if percentage < UNDER_REPRESENTATION_PERCENT {
            Some(BalanceStatus::UnderRepresented)
        } else {
            None
        }
    }
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BalanceStatus::OverConcentrated => "over-concentrated",
            BalanceStatus::UnderRepresented => "under-represented",
            BalanceStatus::NoCommitments => "no commitments",
        })
    }
}

/// A driver outside the healthy band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceFinding {
    /// The driver's share
    pub share: DriverShare,
    /// What is wrong with it
    pub status: BalanceStatus,
}

impl StrategyPyramid {
    /// Per-driver commitment shares, empty when there are no commitments
    #[must_use]
    pub fn driver_shares(&self) -> Vec<DriverShare> {
        let total = self.iconic_commitments.len();
        if total == 0 {
            return Vec::new();
        }

        #[allow(clippy::cast_precision_loss)]
        let total = total as f64;
        self.strategic_drivers
            .iter()
            .map(|driver| {
                let commitments = self.commitments_by_driver(driver.id).len();
                #[allow(clippy::cast_precision_loss)]
                let percentage = (commitments as f64 * 100.0) / total;
                DriverShare {
                    driver_id: driver.id,
                    driver_name: driver.name.clone(),
                    commitments,
                    percentage,
                }
            })
            .collect()
    }

    /// Drivers whose share falls outside the healthy band
    #[must_use]
    pub fn balance_findings(&self) -> Vec<BalanceFinding> {
        self.driver_shares()
            .into_iter()
            .filter_map(|share| {
                BalanceStatus::classify(share.commitments, share.percentage)
                    .map(|status| BalanceFinding { share, status })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_strict() {
        assert_eq!(BalanceStatus::classify(5, 50.0), None);
        assert_eq!(
            BalanceStatus::classify(6, 60.0),
            Some(BalanceStatus::OverConcentrated)
        );
        assert_eq!(BalanceStatus::classify(1, 10.0), None);
        assert_eq!(
            BalanceStatus::classify(1, 9.9),
            Some(BalanceStatus::UnderRepresented)
        );
        assert_eq!(
            BalanceStatus::classify(0, 0.0),
            Some(BalanceStatus::NoCommitments)
        );
    }
}
