//! Plain-text rendering of a `DashboardView`.

use std::fmt::Write;

use chrono::Local;

use crate::aggregate::parse_created_at;
use crate::models::Job;
use crate::state::{DashboardView, LOADING};

const TITLE: &str = "JobQuest – Job Application Tracker";
const SUBTITLE: &str = "Track all your job and internship applications in one place.";
const BAR_WIDTH: usize = 30;
const MONTHLY_EMPTY: &str = "Add a few applications to see this chart.";
const TABLE_EMPTY: &str = "No applications yet for this filter.";
const HEADERS: [&str; 6] = ["Company", "Role", "Location", "Status", "Created At", "Id"];

pub fn render(view: &DashboardView<'_>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_dashboard(&mut out, view);
    out
}

fn write_dashboard(out: &mut String, view: &DashboardView<'_>) -> std::fmt::Result {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{SUBTITLE}")?;
    if let Some(banner) = view.banner {
        writeln!(out)?;
        writeln!(out, "! {banner}")?;
    }

    writeln!(out)?;
    writeln!(out, "== Overview ==")?;
    writeln!(out, "{} total applications", view.total)?;
    let summary: Vec<String> = view
        .counts
        .iter()
        .map(|(status, n)| format!("{status}: {n}"))
        .collect();
    writeln!(out, "{}", summary.join("  "))?;

    writeln!(out)?;
    writeln!(out, "== By Status ==")?;
    for slice in &view.slices {
        let filled = (slice.share * BAR_WIDTH as f64).round() as usize;
        writeln!(
            out,
            "{:<10} {:<width$} {:>3} ({:>5.1}%)",
            slice.status.as_str(),
            "█".repeat(filled),
            slice.value,
            slice.share * 100.0,
            width = BAR_WIDTH
        )?;
    }

    writeln!(out)?;
    writeln!(out, "== Applications per Month ==")?;
    if view.monthly.is_empty() {
        writeln!(out, "{MONTHLY_EMPTY}")?;
    } else {
        let max = view.monthly.iter().map(|m| m.count).max().unwrap_or(1).max(1);
        for month in &view.monthly {
            let filled = (month.count * BAR_WIDTH).div_ceil(max);
            writeln!(
                out,
                "{:<6} {:<width$} {}",
                month.label,
                "█".repeat(filled),
                month.count,
                width = BAR_WIDTH
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "== Applications (filter: {}) ==", view.filter)?;
    if view.loading && view.total == 0 {
        writeln!(out, "{LOADING}")?;
    } else if view.rows.is_empty() {
        writeln!(out, "{TABLE_EMPTY}")?;
    } else {
        write_table(out, &view.rows)?;
    }
    Ok(())
}

fn write_table(out: &mut String, rows: &[&Job]) -> std::fmt::Result {
    let cells: Vec<[String; 6]> = rows.iter().map(|job| row_cells(job)).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &HEADERS.map(String::from), &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("  "))?;
    for row in &cells {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row(out: &mut String, row: &[String; 6], widths: &[usize; 6]) -> std::fmt::Result {
    let padded: Vec<String> = row
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    writeln!(out, "{}", padded.join("  ").trim_end())
}

fn row_cells(job: &Job) -> [String; 6] {
    [
        job.company.clone(),
        job.role.clone(),
        job.location
            .clone()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| "-".to_string()),
        job.status.to_string(),
        display_created_at(&job.created_at),
        job.id.clone(),
    ]
}

/// Local wall-clock time, or the raw value when it does not parse.
fn display_created_at(raw: &str) -> String {
    match parse_created_at(raw) {
        Some(created) => created.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use jobquest_core::JobStatus;

    use super::*;
    use crate::aggregate::{
        filter_jobs, monthly_counts, status_counts, status_slices, StatusFilter,
    };

    fn job(id: &str, company: &str, status: JobStatus, created_at: &str) -> Job {
        Job {
            id: id.to_string(),
            company: company.to_string(),
            role: "Engineer".to_string(),
            location: None,
            status,
            created_at: created_at.to_string(),
        }
    }

    fn view_of<'a>(jobs: &'a [Job], filter: StatusFilter, loading: bool) -> DashboardView<'a> {
        let counts = status_counts(jobs);
        DashboardView {
            banner: None,
            loading,
            total: jobs.len(),
            counts,
            slices: status_slices(&counts),
            monthly: monthly_counts(jobs),
            filter,
            rows: filter_jobs(jobs, filter),
        }
    }

    #[test]
    fn test_empty_dashboard_shows_placeholders() {
        let out = render(&view_of(&[], StatusFilter::All, false));
        assert!(out.contains("0 total applications"));
        assert!(out.contains(MONTHLY_EMPTY));
        assert!(out.contains(TABLE_EMPTY));
    }

    #[test]
    fn test_loading_message_while_first_load_is_pending() {
        let out = render(&view_of(&[], StatusFilter::All, true));
        assert!(out.contains(LOADING));
        assert!(!out.contains(TABLE_EMPTY));
    }

    #[test]
    fn test_banner_is_rendered() {
        let mut view = view_of(&[], StatusFilter::All, false);
        view.banner = Some("Failed to load jobs from server");
        assert!(render(&view).contains("! Failed to load jobs from server"));
    }

    #[test]
    fn test_table_lists_filtered_rows() {
        let jobs = vec![
            job("a1", "Google", JobStatus::Applied, "2025-11-02T10:00:00Z"),
            job("b2", "Meta", JobStatus::Offer, "bogus"),
        ];
        let out = render(&view_of(&jobs, StatusFilter::Only(JobStatus::Offer), false));
        assert!(out.contains("Meta"));
        assert!(out.contains("bogus"));
        assert!(!out.contains("Google "));
        assert!(out.contains("Applied: 1  Interview: 0  Offer: 1  Rejected: 0"));
        assert!(out.contains("11/25"));
    }

    #[test]
    fn test_missing_location_renders_dash() {
        let cells = row_cells(&job("a1", "Google", JobStatus::Applied, "x"));
        assert_eq!(cells[2], "-");
    }

    #[test]
    fn test_unparseable_timestamp_is_shown_raw() {
        assert_eq!(display_created_at("yesterday"), "yesterday");
    }
}
