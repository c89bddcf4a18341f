//! Plain-text rendering of the list view.

use colored::{ColoredString, Colorize};

use sample_tracker_core::form::DATE_FORMAT;
use sample_tracker_core::{ListOptions, ListView, PageControls, Sample, SampleStatus, Theme};

pub const TITLE: &str = "My Sample Management Dashboard";

const HEADERS: [&str; 5] = ["Sample ID", "Sample Name", "Sample Type", "Collected On", "Status"];
const WIDTHS: [usize; 5] = [10, 24, 12, 13, 12];

/// Status badge; colors follow the pending / processing / completed palette.
pub fn status_badge(status: SampleStatus) -> ColoredString {
    let text = format!("{:<width$}", status.to_string(), width = WIDTHS[4]);
    match status {
        SampleStatus::Pending => text.yellow(),
        SampleStatus::Processing => text.blue(),
        SampleStatus::Completed => text.green(),
    }
}

fn header_row(theme: Theme) -> String {
    let line: String = HEADERS
        .iter()
        .zip(WIDTHS)
        .map(|(h, w)| format!("{:<w$}", h, w = w))
        .collect::<Vec<_>>()
        .join(" ");
    let styled = match theme {
        Theme::Light => line.bold().black().on_white(),
        Theme::Dark => line.bold().bright_white().on_black(),
    };
    styled.to_string()
}

fn sample_row(sample: &Sample) -> String {
    let name: String = sample.name.chars().take(WIDTHS[1]).collect();
    format!(
        "{:<w0$} {:<w1$} {:<w2$} {:<w3$} {}",
        sample.id,
        name,
        sample.sample_type.to_string(),
        sample.collected_on.format(DATE_FORMAT).to_string(),
        status_badge(sample.status),
        w0 = WIDTHS[0],
        w1 = WIDTHS[1],
        w2 = WIDTHS[2],
        w3 = WIDTHS[3],
    )
}

/// `Prev 1 [2] 3 Next`, with disabled arrows dimmed.
pub fn page_controls(controls: &PageControls) -> String {
    let arrow = |label: &str, enabled: bool| {
        if enabled {
            label.normal().to_string()
        } else {
            label.dimmed().to_string()
        }
    };

    let mut parts = vec![arrow("Prev", controls.prev_enabled)];
    parts.extend(controls.pages.iter().map(|p| {
        if p.active {
            format!("[{}]", p.number).bold().to_string()
        } else {
            p.number.to_string()
        }
    }));
    parts.push(arrow("Next", controls.next_enabled));
    parts.join(" ")
}

/// One-line summary of the active controls.
pub fn summary(view: &ListView, options: &ListOptions) -> String {
    let query = if options.query.is_empty() {
        "-".to_string()
    } else {
        format!("\"{}\"", options.query)
    };
    format!(
        "search: {} | status: {} | sort: {} {} | page {} of {} ({} samples)",
        query,
        options.status_filter,
        options.sort_key,
        options.sort_order.label(),
        view.current_page,
        view.total_pages.max(1),
        view.total_matches,
    )
}

/// Render the whole dashboard page.
pub fn render_dashboard(view: &ListView, options: &ListOptions, theme: Theme) -> String {
    let mut out = Vec::new();
    out.push(format!("{}  ({})", TITLE.bold(), theme.toggle_label()));
    out.push(summary(view, options));
    out.push(String::new());
    out.push(header_row(theme));

    if view.is_empty() {
        out.push("No samples found.".italic().to_string());
    } else {
        out.extend(view.rows.iter().map(sample_row));
    }

    out.push(String::new());
    out.push(page_controls(&view.controls));
    out.join("\n")
}
