//! Plain-text rendering of the channel KPI report.
//!
//! Rendering is pure: `main` fetches, this module formats, so the layout
//! can be tested against a fixed clock and time zone.

use std::fmt::{Display, Write};

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use ytops_core::{
    compute_kpis, custom_window, filter_by_title, month_window, today_window, ChannelId,
    FormatSplit, KpiResult, TimeWindow, VideoRecord,
};

#[derive(Debug, Clone, Default)]
pub(crate) struct ReportOptions {
    pub short_threshold_secs: u64,
    /// Custom range start; defaults to the first of the current month.
    pub from: Option<NaiveDate>,
    /// Custom range end, inclusive; defaults to today.
    pub to: Option<NaiveDate>,
    pub search: Option<String>,
}

/// Renders the report for `videos` as seen at `now` in `now`'s time zone.
///
/// # Errors
///
/// Returns an error if the custom range is inverted or a window boundary
/// cannot be represented in the time zone.
pub(crate) fn render<Tz>(
    channel_id: &ChannelId,
    videos: &[VideoRecord],
    now: &DateTime<Tz>,
    options: &ReportOptions,
) -> anyhow::Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let threshold = options.short_threshold_secs;
    let keyword = options.search.as_deref().unwrap_or("");
    let selected = filter_by_title(videos, keyword);

    let today = now.date_naive();
    let first_of_month = today.with_day(1).unwrap_or(today);
    let from = options.from.unwrap_or(first_of_month);
    let to = options.to.unwrap_or(today);

    let rows = [
        (format!("Today ({today})"), today_window(now)?),
        (
            format!("This Month ({first_of_month} .. {today})"),
            month_window(now)?,
        ),
        (
            format!("Custom Range ({from} .. {to})"),
            custom_window(&now.timezone(), from, to)?,
        ),
    ];

    let mut out = String::new();
    let split = FormatSplit::of(selected.iter().copied(), threshold);
    writeln!(out, "Channel   {channel_id}")?;
    writeln!(
        out,
        "Loaded    {} uploads: {} videos, {} shorts",
        split.total, split.videos, split.shorts
    )?;
    if !keyword.trim().is_empty() {
        writeln!(out, "Filter    title contains \"{}\"", keyword.trim())?;
    }
    writeln!(out, "Timezone  UTC{}", now.format("%:z"))?;

    for (index, (label, window)) in rows.iter().enumerate() {
        let kpis = compute_kpis(selected.iter().copied(), window, threshold);
        writeln!(out)?;
        write_row(&mut out, label, window, &kpis)?;
        if index == 0 && kpis.count_total == 0 {
            writeln!(out, "! No post today.")?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "Note: shorts are inferred from duration (<= {threshold}s); the API has no format flag."
    )?;
    writeln!(
        out,
        "Note: the YouTube Data API exposes no shares metric, so shares are not reported."
    )?;
    Ok(out)
}

fn write_row(
    out: &mut String,
    label: &str,
    window: &TimeWindow,
    kpis: &KpiResult<'_>,
) -> std::fmt::Result {
    writeln!(out, "== {label} ==")?;
    tracing::debug!(
        start = %window.start(),
        end = %window.end(),
        posts = kpis.count_total,
        "rendering window"
    );
    writeln!(
        out,
        "Posts: {} ({} videos, {} shorts)",
        kpis.count_total, kpis.count_videos, kpis.count_shorts
    )?;
    write_standout(out, "Most liked", kpis.most_liked)?;
    write_standout(out, "Most commented", kpis.most_commented)
}

fn write_standout(out: &mut String, label: &str, video: Option<&VideoRecord>) -> std::fmt::Result {
    let Some(video) = video else {
        return writeln!(out, "{label}: -");
    };
    writeln!(out, "{label}: {}", video.title)?;
    writeln!(out, "    {}", video.url())?;
    writeln!(
        out,
        "    likes {}, comments {}",
        video.likes, video.comments
    )?;
    if let Some(thumbnail) = &video.thumbnail {
        writeln!(out, "    thumbnail {thumbnail}")?;
    }
    Ok(())
}
