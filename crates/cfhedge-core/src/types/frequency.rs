//! Reset and payment frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of regular periods per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Annual (1 per year)
    Annual,
    /// Semi-annual (2 per year)
    SemiAnnual,
    /// Quarterly (4 per year)
    #[default]
    Quarterly,
    /// Monthly (12 per year)
    Monthly,
}

impl Frequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Returns the number of months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }

    /// Frequency whose period is `months` long, if it divides a year evenly
    /// into one of the supported counts.
    #[must_use]
    pub fn from_months(months: u32) -> Option<Self> {
        match months {
            12 => Some(Frequency::Annual),
            6 => Some(Frequency::SemiAnnual),
            3 => Some(Frequency::Quarterly),
            1 => Some(Frequency::Monthly),
            _ => None,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}
