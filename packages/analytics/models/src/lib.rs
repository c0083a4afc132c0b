#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Insight result types.
//!
//! An [`InsightBundle`] holds the descriptive statistics computed over a
//! record set: hour, weekday and month histograms, ranked categories and
//! areas, and the peak-hour / high-risk-day heuristics derived from them.

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Day of week in calendar order, Sunday first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum DayOfWeek {
    /// Sunday
    Sunday,
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
}

impl DayOfWeek {
    /// Returns all variants in calendar order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Sunday,
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
        ]
    }

    /// Zero-based position in the week, Sunday = 0.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Sun => Self::Sunday,
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
        }
    }
}

/// Month of year in calendar order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum MonthOfYear {
    /// January
    January,
    /// February
    February,
    /// March
    March,
    /// April
    April,
    /// May
    May,
    /// June
    June,
    /// July
    July,
    /// August
    August,
    /// September
    September,
    /// October
    October,
    /// November
    November,
    /// December
    December,
}

impl MonthOfYear {
    /// Returns all variants in calendar order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::January,
            Self::February,
            Self::March,
            Self::April,
            Self::May,
            Self::June,
            Self::July,
            Self::August,
            Self::September,
            Self::October,
            Self::November,
            Self::December,
        ]
    }

    /// Looks up a month from its zero-based index (`0` = January).
    #[must_use]
    pub fn from_index0(index: u32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::all().get(i))
            .copied()
    }
}

/// Incident count for one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourCount {
    /// Hour of day, `0..=23`.
    pub hour: u32,
    /// Number of incidents.
    pub count: u64,
}

/// Incident count for one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCount {
    /// Day of week.
    pub day: DayOfWeek,
    /// Number of incidents.
    pub count: u64,
}

/// Incident count for one month of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCount {
    /// Month of year.
    pub month: MonthOfYear,
    /// Number of incidents.
    pub count: u64,
}

/// Count of incidents in a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    /// Category label as it appears on the records.
    pub category: String,
    /// Number of incidents.
    pub count: u64,
}

/// Count of incidents in a single named area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaCount {
    /// Area name as it appears on the records.
    pub area: String,
    /// Number of incidents.
    pub count: u64,
}

/// Descriptive statistics over a record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightBundle {
    /// All 24 hours, ranked by count (highest first, ties by lower hour).
    pub peak_hours: Vec<HourCount>,
    /// All 7 days in calendar order.
    pub day_of_week: Vec<DayCount>,
    /// Categories ranked by count (ties in first-seen order).
    pub top_categories: Vec<CategoryCount>,
    /// All 12 months in calendar order.
    pub monthly: Vec<MonthCount>,
    /// Areas ranked by count (ties in first-seen order).
    pub top_areas: Vec<AreaCount>,
    /// The three busiest hours. Descriptive only, not a forecast.
    pub predicted_peak_hours: Vec<u32>,
    /// Days whose count is strictly above the daily mean, calendar order.
    pub high_risk_days: Vec<DayOfWeek>,
    /// Records flagged as accidents.
    pub accident_count: u64,
    /// Records flagged as sensitive-zone incidents.
    pub sensitive_zone_count: u64,
    /// Number of records aggregated.
    pub total_records: u64,
    /// When this bundle was produced.
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn weekday_conversion_is_sunday_first() {
        assert_eq!(DayOfWeek::from(Weekday::Sun).index(), 0);
        assert_eq!(DayOfWeek::from(Weekday::Sat).index(), 6);
        for (i, day) in DayOfWeek::all().iter().enumerate() {
            assert_eq!(day.index(), i);
        }
    }

    #[test]
    fn month_index_lookup() {
        assert_eq!(MonthOfYear::from_index0(0), Some(MonthOfYear::January));
        assert_eq!(MonthOfYear::from_index0(11), Some(MonthOfYear::December));
        assert_eq!(MonthOfYear::from_index0(12), None);
    }

    #[test]
    fn labels_round_trip_through_strum() {
        assert_eq!(DayOfWeek::Wednesday.to_string(), "Wednesday");
        assert_eq!(DayOfWeek::from_str("Friday").unwrap(), DayOfWeek::Friday);
        assert_eq!(MonthOfYear::March.as_ref(), "March");
        assert_eq!(
            serde_json::to_value(MonthOfYear::May).unwrap(),
            serde_json::json!("May")
        );
    }
}
