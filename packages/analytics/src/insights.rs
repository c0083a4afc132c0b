//! Insight bundle generation.

use chrono::{DateTime, Utc};
use incident_map_analytics_models::{
    AreaCount, CategoryCount, DayCount, DayOfWeek, HourCount, InsightBundle, MonthCount,
    MonthOfYear,
};
use incident_map_incident_models::IncidentRecord;

/// Number of hours reported in [`InsightBundle::predicted_peak_hours`].
pub const PREDICTED_PEAK_HOURS: usize = 3;

/// Generates insights, stamping them with the current time.
///
/// See [`generate_insights_at`].
#[must_use]
pub fn generate_insights(records: &[IncidentRecord]) -> InsightBundle {
    generate_insights_at(records, Utc::now())
}

/// Aggregates `records` into an [`InsightBundle`].
///
/// An empty record set yields zeroed histograms, empty rankings, and no
/// high-risk days.
#[must_use]
pub fn generate_insights_at(
    records: &[IncidentRecord],
    generated_at: DateTime<Utc>,
) -> InsightBundle {
    let peak_hours = rank_hours(&hour_histogram(records));
    let day_of_week = day_histogram(records);
    let high_risk_days = above_average_days(&day_of_week);

    let predicted_peak_hours = peak_hours
        .iter()
        .take(PREDICTED_PEAK_HOURS)
        .map(|h| h.hour)
        .collect();

    let top_categories = rank_labels(records.iter().map(|r| r.category.as_str()))
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();

    let top_areas = rank_labels(records.iter().map(|r| r.area.as_str()))
        .into_iter()
        .map(|(area, count)| AreaCount { area, count })
        .collect();

    let bundle = InsightBundle {
        peak_hours,
        day_of_week,
        top_categories,
        monthly: month_histogram(records),
        top_areas,
        predicted_peak_hours,
        high_risk_days,
        accident_count: count_where(records, |r| r.is_accident),
        sensitive_zone_count: count_where(records, |r| r.is_sensitive_zone),
        total_records: records.len() as u64,
        generated_at,
    };

    log::debug!(
        "Generated insights over {} records ({} categories, {} areas)",
        bundle.total_records,
        bundle.top_categories.len(),
        bundle.top_areas.len()
    );

    bundle
}

fn count_where(records: &[IncidentRecord], predicate: impl Fn(&IncidentRecord) -> bool) -> u64 {
    records.iter().filter(|r| predicate(r)).count() as u64
}

fn hour_histogram(records: &[IncidentRecord]) -> [u64; 24] {
    let mut buckets = [0_u64; 24];
    for record in records {
        // `hour()` is always 0..=23 for a valid `NaiveDateTime`.
        if let Some(bucket) = usize::try_from(record.hour())
            .ok()
            .and_then(|h| buckets.get_mut(h))
        {
            *bucket += 1;
        }
    }
    buckets
}

/// All 24 hours, highest count first; the stable sort leaves ties in
/// ascending hour order.
fn rank_hours(buckets: &[u64; 24]) -> Vec<HourCount> {
    let mut hours: Vec<HourCount> = (0_u32..)
        .zip(buckets.iter())
        .map(|(hour, &count)| HourCount { hour, count })
        .collect();
    hours.sort_by(|a, b| b.count.cmp(&a.count));
    hours
}

fn day_histogram(records: &[IncidentRecord]) -> Vec<DayCount> {
    let mut buckets = [0_u64; 7];
    for record in records {
        buckets[DayOfWeek::from(record.weekday()).index()] += 1;
    }

    DayOfWeek::all()
        .iter()
        .zip(buckets)
        .map(|(&day, count)| DayCount { day, count })
        .collect()
}

fn month_histogram(records: &[IncidentRecord]) -> Vec<MonthCount> {
    let mut buckets = [0_u64; 12];
    for record in records {
        if let Some(bucket) = usize::try_from(record.month0())
            .ok()
            .and_then(|m| buckets.get_mut(m))
        {
            *bucket += 1;
        }
    }

    MonthOfYear::all()
        .iter()
        .zip(buckets)
        .map(|(&month, count)| MonthCount { month, count })
        .collect()
}

/// Days whose count strictly exceeds the mean over all seven buckets.
#[allow(clippy::cast_precision_loss)]
fn above_average_days(days: &[DayCount]) -> Vec<DayOfWeek> {
    if days.is_empty() {
        return Vec::new();
    }

    let total: u64 = days.iter().map(|d| d.count).sum();
    let mean = total as f64 / days.len() as f64;

    days.iter()
        .filter(|d| d.count as f64 > mean)
        .map(|d| d.day)
        .collect()
}

/// Counts labels and ranks them by count, highest first. Ties keep the
/// order in which the labels were first seen. Blank labels are not counted.
fn rank_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = Vec::new();

    for label in labels.map(str::trim).filter(|label| !label.is_empty()) {
        match counts.iter_mut().find(|(seen, _)| seen.as_str() == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label.to_string(), 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
