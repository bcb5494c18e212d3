use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::modules::time_logs::core::interval::{
    ActivityInterval, TimestampError, parse_timestamp,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error(transparent)]
    Timestamp(#[from] TimestampError),

    #[error("unparsable date bound: {0}")]
    DateBound(String),
}

/// Inclusive calendar-day bounds, applied to interval start times only.
///
/// An interval that starts inside the range but ends outside it is kept
/// whole. Compatibility behavior: do not tighten this to also check end
/// times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Both bounds as `YYYY-MM-DD`. A range is only ever built from two
    /// bounds; a single supplied bound means no filtering at all.
    pub fn parse(start: &str, end: &str) -> Result<Self, ReportError> {
        let parse_day = |raw: &str| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| ReportError::DateBound(raw.to_string()))
        };
        Ok(Self {
            start: parse_day(start)?,
            end: parse_day(end)?,
        })
    }

    fn contains(&self, instant: NaiveDateTime) -> bool {
        let lo = self.start.and_hms_opt(0, 0, 0).unwrap_or_default();
        let hi = self.end.and_hms_opt(23, 59, 59).unwrap_or_default();
        instant >= lo && instant <= hi
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub date: String,
    pub activity_name: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
}

/// The aggregated report: one row per completed interval, per-activity
/// totals in first-seen order, and the grand total in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub activity_totals: Vec<(String, i64)>,
    pub total_ms: i64,
}

impl Report {
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("Date,Activity Name,Start Time,End Time,Duration\n");
        for row in &self.rows {
            csv.push_str(&format!(
                "{},\"{}\",{},{},{}\n",
                row.date, row.activity_name, row.start_time, row.end_time, row.duration
            ));
        }

        csv.push_str("\nActivity Totals\nActivity Name,Total Duration\n");
        for (activity, ms) in &self.activity_totals {
            csv.push_str(&format!("\"{}\",{}\n", activity, format_duration(*ms)));
        }

        csv.push_str("\nTotal Hours Worked\n");
        csv.push_str(&format!("Total,{}\n", format_duration(self.total_ms)));
        csv
    }
}

/// Whole minutes only, floor semantics. `"{h}h {m}m"` once an hour is
/// reached, bare `"{m}m"` below that. Sub-minute spans render as `"0m"`.
pub fn format_duration(ms: i64) -> String {
    let minutes = ms.div_euclid(60_000);
    let hours = minutes.div_euclid(60);
    if hours > 0 {
        format!("{hours}h {}m", minutes - hours * 60)
    } else {
        format!("{minutes}m")
    }
}

/// Turns completed activity intervals into a CSV time report.
///
/// Pure transformation: no I/O, deterministic for a given input order.
/// Intervals without an end timestamp are dropped before anything else
/// happens; any unparsable timestamp fails the whole build with no partial
/// output.
pub struct ReportBuilder {
    intervals: Vec<ActivityInterval>,
    range: Option<DateRange>,
}

impl ReportBuilder {
    pub fn new(intervals: Vec<ActivityInterval>) -> Self {
        Self {
            intervals,
            range: None,
        }
    }

    pub fn date_range(mut self, range: Option<DateRange>) -> Self {
        self.range = range;
        self
    }

    pub fn build(self) -> Result<Report, ReportError> {
        let mut completed = Vec::with_capacity(self.intervals.len());
        for interval in self.intervals {
            let Some(end_raw) = interval.end_time.as_deref() else {
                continue;
            };
            let start = parse_timestamp(&interval.start_time)?;
            let end = parse_timestamp(end_raw)?;
            if let Some(range) = self.range {
                if !range.contains(start) {
                    continue;
                }
            }
            completed.push((start, end, interval.activity_name));
        }

        // Stable sort: equal start times keep their input order.
        completed.sort_by_key(|(start, ..)| *start);

        let mut rows = Vec::with_capacity(completed.len());
        let mut activity_totals: Vec<(String, i64)> = Vec::new();
        let mut total_ms = 0i64;

        for (start, end, activity_name) in completed {
            let ms = (end - start).num_milliseconds();
            rows.push(ReportRow {
                date: start.format("%-m/%-d/%Y").to_string(),
                start_time: start.format("%I:%M %p").to_string(),
                end_time: end.format("%I:%M %p").to_string(),
                duration: format_duration(ms),
                activity_name: activity_name.clone(),
            });

            match activity_totals.iter_mut().find(|(name, _)| *name == activity_name) {
                Some((_, total)) => *total += ms,
                None => activity_totals.push((activity_name, ms)),
            }
            total_ms += ms;
        }

        Ok(Report {
            rows,
            activity_totals,
            total_ms,
        })
    }
}
