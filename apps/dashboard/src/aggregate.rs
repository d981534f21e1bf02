//! Chart and table data derived from the cached job list.
//!
//! Everything here is a pure function of its input and is recomputed on
//! every render.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use jobquest_core::{JobStatus, ParseStatusError};

use crate::models::Job;

/// Count of records per status, indexed in `JobStatus::ALL` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts([usize; 4]);

impl StatusCounts {
    pub fn get(&self, status: JobStatus) -> usize {
        self.0[index_of(status)]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (JobStatus, usize)> + '_ {
        JobStatus::ALL
            .into_iter()
            .map(move |status| (status, self.get(status)))
    }
}

fn index_of(status: JobStatus) -> usize {
    match status {
        JobStatus::Applied => 0,
        JobStatus::Interview => 1,
        JobStatus::Offer => 2,
        JobStatus::Rejected => 3,
    }
}

/// One slice of the status distribution chart.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSlice {
    pub status: JobStatus,
    pub value: usize,
    /// Fraction of all records, 0.0 when there are none.
    pub share: f64,
}

/// One bar of the per-month chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyCount {
    /// `MM/YY`, e.g. `11/25`.
    pub label: String,
    pub count: usize,
}

/// Table filter: everything, or a single status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(JobStatus),
}

impl StatusFilter {
    pub fn matches(&self, job: &Job) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => job.status == *status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(StatusFilter::All);
        }
        s.parse::<JobStatus>().map(StatusFilter::Only)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All"),
            StatusFilter::Only(status) => write!(f, "{status}"),
        }
    }
}

pub fn status_counts(jobs: &[Job]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for job in jobs {
        counts.0[index_of(job.status)] += 1;
    }
    counts
}

pub fn status_slices(counts: &StatusCounts) -> Vec<StatusSlice> {
    let total = counts.total();
    counts
        .iter()
        .map(|(status, value)| StatusSlice {
            status,
            value,
            share: if total == 0 {
                0.0
            } else {
                value as f64 / total as f64
            },
        })
        .collect()
}

/// Parses an API timestamp. `None` for anything that is not RFC 3339.
pub fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Records per calendar month (UTC), oldest month first. Records whose
/// timestamp cannot be parsed are left out.
pub fn monthly_counts(jobs: &[Job]) -> Vec<MonthlyCount> {
    let mut by_month: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for created in jobs.iter().filter_map(|job| parse_created_at(&job.created_at)) {
        *by_month.entry((created.year(), created.month())).or_default() += 1;
    }

    by_month
        .into_iter()
        .map(|((year, month), count)| MonthlyCount {
            label: format!("{:02}/{:02}", month, year.rem_euclid(100)),
            count,
        })
        .collect()
}

pub fn filter_jobs(jobs: &[Job], filter: StatusFilter) -> Vec<&Job> {
    jobs.iter().filter(|job| filter.matches(job)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str, status: JobStatus, created_at: &str) -> Job {
        Job {
            id: id.to_string(),
            company: format!("Company {id}"),
            role: "Engineer".to_string(),
            location: None,
            status,
            created_at: created_at.to_string(),
        }
    }

    fn sample() -> Vec<Job> {
        vec![
            job("1", JobStatus::Applied, "2025-11-03T09:00:00Z"),
            job("2", JobStatus::Offer, "2024-12-31T23:59:59Z"),
            job("3", JobStatus::Applied, "not a date"),
            job("4", JobStatus::Rejected, "2025-01-15T12:00:00+00:00"),
            job("5", JobStatus::Interview, "2025-11-20T18:30:00Z"),
            job("6", JobStatus::Applied, "2025-01-02T00:00:00Z"),
        ]
    }

    #[test]
    fn test_status_counts_partition_the_list() {
        let jobs = sample();
        let counts = status_counts(&jobs);
        assert_eq!(counts.get(JobStatus::Applied), 3);
        assert_eq!(counts.get(JobStatus::Interview), 1);
        assert_eq!(counts.get(JobStatus::Offer), 1);
        assert_eq!(counts.get(JobStatus::Rejected), 1);
        assert_eq!(counts.total(), jobs.len());
    }

    #[test]
    fn test_status_counts_of_empty_list() {
        let counts = status_counts(&[]);
        assert_eq!(counts.total(), 0);
        assert!(counts.iter().all(|(_, n)| n == 0));
    }

    #[test]
    fn test_status_slices_follow_canonical_order() {
        let slices = status_slices(&status_counts(&sample()));
        let order: Vec<JobStatus> = slices.iter().map(|s| s.status).collect();
        assert_eq!(order, JobStatus::ALL.to_vec());
        assert!((slices[0].share - 0.5).abs() < f64::EPSILON);
        let total: f64 = slices.iter().map(|s| s.share).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_status_slices_of_empty_list_have_zero_share() {
        let slices = status_slices(&StatusCounts::default());
        assert!(slices.iter().all(|s| s.value == 0 && s.share == 0.0));
    }

    #[test]
    fn test_monthly_counts_sorted_and_labelled() {
        let months = monthly_counts(&sample());
        let labels: Vec<&str> = months.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["12/24", "01/25", "11/25"]);
        let counts: Vec<usize> = months.iter().map(|m| m.count).collect();
        assert_eq!(counts, vec![1, 2, 2]);
    }

    #[test]
    fn test_monthly_counts_ignore_input_order() {
        let mut reversed = sample();
        reversed.reverse();
        assert_eq!(monthly_counts(&reversed), monthly_counts(&sample()));
    }

    #[test]
    fn test_invalid_timestamp_only_drops_out_of_monthly_counts() {
        let jobs = vec![job("1", JobStatus::Offer, "yesterday")];
        assert!(monthly_counts(&jobs).is_empty());
        assert_eq!(status_counts(&jobs).get(JobStatus::Offer), 1);
    }

    #[test]
    fn test_offset_timestamps_are_bucketed_in_utc() {
        let jobs = vec![job("1", JobStatus::Applied, "2025-03-01T01:00:00+02:00")];
        assert_eq!(monthly_counts(&jobs)[0].label, "02/25");
    }

    #[test]
    fn test_filter_jobs() {
        let jobs = sample();
        assert_eq!(filter_jobs(&jobs, StatusFilter::All).len(), jobs.len());
        let offers = filter_jobs(&jobs, StatusFilter::Only(JobStatus::Offer));
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].id, "2");
    }

    #[test]
    fn test_status_filter_parses_all_and_statuses() {
        assert_eq!("All".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "Rejected".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(JobStatus::Rejected))
        );
        assert!("all".parse::<StatusFilter>().is_err());
    }
}
