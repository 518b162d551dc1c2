//! Adaptive time histogram over a content batch.
//!
//! The histogram always describes the full pre-filter population, so
//! the date slider keeps its shape while the user narrows the window.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use lumex_model::MediaItem;
use serde::{Deserialize, Serialize};

/// Upper bound on the number of buckets a width may produce before the
/// next coarser width is tried.
const MAX_BUCKETS: i64 = 26;

const HOUR_SECONDS: i64 = 3_600;
const DAY_SECONDS: i64 = 24 * HOUR_SECONDS;

/// Candidate bucket widths, finest to coarsest.
///
/// `approx_seconds` is only used to pick a width; actual bucket
/// boundaries for `Month` and `Years` follow the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketWidth {
    Hour,
    Day,
    Month,
    Years(u32),
}

impl BucketWidth {
    pub const LADDER: [BucketWidth; 10] = [
        BucketWidth::Hour,
        BucketWidth::Day,
        BucketWidth::Month,
        BucketWidth::Years(1),
        BucketWidth::Years(2),
        BucketWidth::Years(5),
        BucketWidth::Years(10),
        BucketWidth::Years(20),
        BucketWidth::Years(50),
        BucketWidth::Years(100),
    ];

    pub fn approx_seconds(&self) -> i64 {
        match self {
            BucketWidth::Hour => HOUR_SECONDS,
            BucketWidth::Day => DAY_SECONDS,
            BucketWidth::Month => 30 * DAY_SECONDS,
            BucketWidth::Years(years) => i64::from(*years) * 365 * DAY_SECONDS,
        }
    }

    /// Smallest width that keeps the span under [`MAX_BUCKETS`] buckets,
    /// or the coarsest width when even that is too fine.
    pub fn for_span_millis(span_millis: i64) -> BucketWidth {
        for width in Self::LADDER {
            if span_millis < width.approx_seconds() * MAX_BUCKETS * 1_000 {
                return width;
            }
        }
        BucketWidth::Years(100)
    }

    pub fn resolution(&self) -> LabelResolution {
        match self {
            BucketWidth::Hour => LabelResolution::HourOfDay,
            BucketWidth::Day => LabelResolution::Weekday,
            BucketWidth::Month => LabelResolution::YearMonth,
            BucketWidth::Years(_) => LabelResolution::Year,
        }
    }

    /// Floors a timestamp to this width's bucket boundary, in UTC.
    pub fn floor(&self, millis: i64) -> i64 {
        match self {
            BucketWidth::Hour | BucketWidth::Day => {
                let width_millis = self.approx_seconds() * 1_000;
                millis - millis.rem_euclid(width_millis)
            }
            BucketWidth::Month => {
                let date = utc(millis);
                ymd_millis(date.year(), date.month())
            }
            BucketWidth::Years(years) => {
                let year = utc(millis).year();
                ymd_millis(align_year(year, *years), 1)
            }
        }
    }

    /// Bucket index of `millis` relative to a floored `anchor_millis`.
    ///
    /// Month and year widths step through the calendar rather than
    /// dividing by an approximate width, so a 28-day February and a
    /// 31-day January each count as exactly one month.
    fn index_of(&self, anchor_millis: i64, millis: i64) -> usize {
        let index = match self {
            BucketWidth::Hour | BucketWidth::Day => {
                let width_millis = self.approx_seconds() * 1_000;
                (millis - anchor_millis).div_euclid(width_millis)
            }
            BucketWidth::Month => {
                let anchor = utc(anchor_millis);
                let date = utc(millis);
                i64::from(date.year() - anchor.year()) * 12
                    + i64::from(date.month())
                    - i64::from(anchor.month())
            }
            BucketWidth::Years(years) => {
                let anchor_year = utc(anchor_millis).year();
                let year = align_year(utc(millis).year(), *years);
                i64::from(year - anchor_year) / i64::from(*years)
            }
        };
        index.max(0) as usize
    }

    /// Start of the bucket `steps` widths after a floored anchor.
    fn advance(&self, anchor_millis: i64, steps: i64) -> i64 {
        match self {
            BucketWidth::Hour | BucketWidth::Day => {
                anchor_millis + steps * self.approx_seconds() * 1_000
            }
            BucketWidth::Month => {
                let anchor = utc(anchor_millis);
                let months = i64::from(anchor.year()) * 12
                    + i64::from(anchor.month() - 1)
                    + steps;
                let year = months.div_euclid(12);
                let month = months.rem_euclid(12) as u32 + 1;
                ymd_millis(year as i32, month)
            }
            BucketWidth::Years(years) => {
                let anchor_year = utc(anchor_millis).year();
                let offset = steps * i64::from(*years);
                ymd_millis(anchor_year + offset as i32, 1)
            }
        }
    }
}

fn align_year(year: i32, width_years: u32) -> i32 {
    year - year.rem_euclid(width_years as i32)
}

fn utc(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH)
}

fn ymd_millis(year: i32, month: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .map(|date| date.timestamp_millis())
        .unwrap_or(0)
}

/// How a renderer should label buckets of a given width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelResolution {
    Year,
    YearMonth,
    Weekday,
    HourOfDay,
}

impl LabelResolution {
    /// Date-format pattern a UI layer is expected to render with.
    pub fn date_pattern(&self) -> &'static str {
        match self {
            LabelResolution::Year => "y",
            LabelResolution::YearMonth => "y MMM",
            LabelResolution::Weekday => "EEE",
            LabelResolution::HourOfDay => "HH",
        }
    }
}

/// One column of the capture-time histogram.
///
/// `end` is exclusive and always equals the next bucket's `start`.
/// `series_max` repeats the tallest count of the series on every bucket
/// so columns can be scaled without a second pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub start: i64,
    pub end: i64,
    pub resolution: LabelResolution,
    pub count: usize,
    pub series_max: usize,
}

/// Buckets `items` by capture time at an adaptive width.
///
/// Buckets are contiguous from the floored minimum to the bucket of the
/// maximum; intermediate buckets with no items are present with a zero
/// count. A series that would collapse into a single column is returned
/// empty, as is one for fewer than two items.
pub fn build_histogram(items: &[MediaItem]) -> Vec<HistogramBucket> {
    let timestamps: Vec<i64> = items.iter().map(|item| item.taken_at).collect();
    let (Some(&min), Some(&max)) =
        (timestamps.iter().min(), timestamps.iter().max())
    else {
        return Vec::new();
    };

    let width = BucketWidth::for_span_millis(max - min);
    let anchor = width.floor(min);

    let mut counts: Vec<usize> = Vec::new();
    for &taken_at in &timestamps {
        let index = width.index_of(anchor, taken_at);
        if counts.len() <= index {
            counts.resize(index + 1, 0);
        }
        counts[index] += 1;
    }

    if counts.len() <= 1 {
        return Vec::new();
    }

    let series_max = counts.iter().copied().max().unwrap_or(0);
    let resolution = width.resolution();
    counts
        .iter()
        .enumerate()
        .map(|(index, &count)| HistogramBucket {
            start: width.advance(anchor, index as i64),
            end: width.advance(anchor, index as i64 + 1),
            resolution,
            count,
            series_max,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> MediaItem {
        MediaItem::new(
            format!("{year}-{month}-{day}-{hour}-{minute}.jpg"),
            Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
                .unwrap()
                .timestamp_millis(),
        )
    }

    #[test]
    fn empty_input_yields_no_histogram() {
        assert!(build_histogram(&[]).is_empty());
    }

    #[test]
    fn identical_timestamps_collapse_and_suppress_the_series() {
        let items =
            vec![at(2024, 6, 1, 12, 0), at(2024, 6, 1, 12, 0), at(2024, 6, 1, 12, 0)];
        assert!(build_histogram(&items).is_empty());
    }

    #[test]
    fn three_hour_span_buckets_by_hour() {
        let items = vec![
            at(2024, 6, 1, 10, 5),
            at(2024, 6, 1, 11, 30),
            at(2024, 6, 1, 12, 45),
        ];
        let histogram = build_histogram(&items);

        assert_eq!(histogram.len(), 3);
        assert!(histogram
            .iter()
            .all(|bucket| bucket.resolution == LabelResolution::HourOfDay));
        assert_eq!(
            histogram[0].start,
            Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0)
                .unwrap()
                .timestamp_millis()
        );
        assert!(histogram.iter().all(|bucket| bucket.count == 1));
    }

    #[test]
    fn sparse_hours_produce_zero_count_gap_buckets() {
        let items = vec![at(2024, 6, 1, 0, 10), at(2024, 6, 1, 5, 50)];
        let histogram = build_histogram(&items);

        assert_eq!(histogram.len(), 6);
        let counts: Vec<_> =
            histogram.iter().map(|bucket| bucket.count).collect();
        assert_eq!(counts, [1, 0, 0, 0, 0, 1]);
        assert!(histogram.iter().all(|bucket| bucket.series_max == 1));
    }

    #[test]
    fn buckets_are_contiguous() {
        let items = vec![
            at(2024, 6, 1, 0, 10),
            at(2024, 6, 2, 5, 0),
            at(2024, 6, 9, 23, 59),
        ];
        let histogram = build_histogram(&items);

        assert!(!histogram.is_empty());
        for pair in histogram.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn day_span_floors_to_utc_midnight_with_weekday_labels() {
        let items = vec![at(2024, 6, 1, 3, 0), at(2024, 6, 3, 22, 0)];
        let histogram = build_histogram(&items);

        assert_eq!(histogram.len(), 3);
        assert_eq!(histogram[0].resolution, LabelResolution::Weekday);
        assert_eq!(histogram[0].resolution.date_pattern(), "EEE");
        assert_eq!(
            histogram[0].start,
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0)
                .unwrap()
                .timestamp_millis()
        );
    }

    #[test]
    fn month_buckets_follow_calendar_boundaries() {
        // 20 months apart; a fixed 30-day width would drift across
        // February and split months in two.
        let items = vec![
            at(2023, 1, 31, 23, 0),
            at(2023, 2, 1, 0, 30),
            at(2024, 2, 28, 12, 0),
            at(2024, 3, 1, 0, 0),
            at(2024, 8, 15, 9, 0),
        ];
        let histogram = build_histogram(&items);

        assert!(histogram
            .iter()
            .all(|bucket| bucket.resolution == LabelResolution::YearMonth));
        // Jan 2023 through Aug 2024 inclusive.
        assert_eq!(histogram.len(), 20);
        assert_eq!(
            histogram[0].start,
            Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
                .unwrap()
                .timestamp_millis()
        );
        assert_eq!(histogram[0].count, 1);
        assert_eq!(histogram[1].count, 1);
        let feb_2024 = &histogram[13];
        assert_eq!(
            feb_2024.start,
            Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0)
                .unwrap()
                .timestamp_millis()
        );
        assert_eq!(feb_2024.count, 1);
        let mar_2024 = &histogram[14];
        assert_eq!(mar_2024.count, 1);
    }

    #[test]
    fn multi_year_widths_align_the_anchor_year() {
        // ~38 years: too many buckets at 1y, 20 buckets at 2y.
        let items = vec![at(1985, 3, 1, 0, 0), at(2023, 7, 1, 0, 0)];
        let histogram = build_histogram(&items);

        assert_eq!(histogram[0].resolution, LabelResolution::Year);
        // 2-year buckets anchor on even years: 1985 floors to 1984.
        assert_eq!(
            histogram[0].start,
            Utc.with_ymd_and_hms(1984, 1, 1, 0, 0, 0)
                .unwrap()
                .timestamp_millis()
        );
        assert_eq!(histogram.len(), 20);
    }

    #[test]
    fn spans_beyond_the_ladder_fall_back_to_the_coarsest_width() {
        let items = vec![at(1000, 1, 1, 0, 0), at(3800, 1, 1, 0, 0)];
        let histogram = build_histogram(&items);

        // 2800 years at 100y each: buckets for 1000..=3800.
        assert_eq!(histogram.len(), 29);
        assert_eq!(histogram[0].resolution, LabelResolution::Year);
        assert_eq!(
            histogram[0].start,
            Utc.with_ymd_and_hms(1000, 1, 1, 0, 0, 0)
                .unwrap()
                .timestamp_millis()
        );
    }

    #[test]
    fn series_max_repeats_the_tallest_count() {
        let items = vec![
            at(2024, 6, 1, 10, 0),
            at(2024, 6, 1, 10, 20),
            at(2024, 6, 1, 10, 40),
            at(2024, 6, 1, 11, 30),
        ];
        let histogram = build_histogram(&items);

        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram[0].count, 3);
        assert_eq!(histogram[1].count, 1);
        assert!(histogram.iter().all(|bucket| bucket.series_max == 3));
    }
}
