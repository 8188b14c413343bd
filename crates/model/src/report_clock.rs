//! Footer report clock.

use bevy::prelude::*;
use chrono::{Local, NaiveDate};

/// Date stamped in the dashboard footer.
///
/// `Default` reads the wall clock once when the resource is created; tests
/// construct it with [`ReportClock::fixed`] instead.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ReportClock {
    pub data_updated: NaiveDate,
}

impl Default for ReportClock {
    fn default() -> Self {
        Self {
            data_updated: Local::now().date_naive(),
        }
    }
}

impl ReportClock {
    /// A clock pinned to a known date.
    pub fn fixed(data_updated: NaiveDate) -> Self {
        Self { data_updated }
    }

    /// Footer display form, day/month/year without zero padding.
    pub fn formatted(&self) -> String {
        self.data_updated.format("%-d/%-m/%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_date_formats_deterministically() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).expect("valid date");
        let clock = ReportClock::fixed(date);
        assert_eq!(clock.formatted(), "9/3/2025");
    }

    #[test]
    fn test_fixed_date_double_digit() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date");
        let clock = ReportClock::fixed(date);
        assert_eq!(clock.formatted(), "31/12/2024");
    }
}
