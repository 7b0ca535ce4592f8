//! KPI aggregation over a fetched upload list.

use crate::video::VideoRecord;
use crate::window::TimeWindow;

/// Counts and standout uploads for one reporting window.
///
/// Borrows from the record list it was computed over; recompute rather than
/// store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiResult<'a> {
    /// In-window records, in input order.
    pub items: Vec<&'a VideoRecord>,
    pub count_total: usize,
    /// Long-form: duration strictly above the threshold.
    pub count_videos: usize,
    /// Short-form: duration at or below the threshold.
    pub count_shorts: usize,
    pub most_liked: Option<&'a VideoRecord>,
    pub most_commented: Option<&'a VideoRecord>,
}

/// Long/short split over an arbitrary set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatSplit {
    pub total: usize,
    pub videos: usize,
    pub shorts: usize,
}

impl FormatSplit {
    #[must_use]
    pub fn of<'a, I>(videos: I, short_threshold_secs: u64) -> Self
    where
        I: IntoIterator<Item = &'a VideoRecord>,
    {
        videos
            .into_iter()
            .fold(Self::default(), |mut split, video| {
                split.total += 1;
                if video.is_short(short_threshold_secs) {
                    split.shorts += 1;
                } else {
                    split.videos += 1;
                }
                split
            })
    }
}

/// Computes window KPIs over `videos`.
///
/// Records without a publish time never fall inside a window. Ties for most
/// liked / most commented go to the record that comes first in `videos`.
#[must_use]
pub fn compute_kpis<'a, I>(
    videos: I,
    window: &TimeWindow,
    short_threshold_secs: u64,
) -> KpiResult<'a>
where
    I: IntoIterator<Item = &'a VideoRecord>,
{
    let items: Vec<&VideoRecord> = videos
        .into_iter()
        .filter(|v| v.published_at.is_some_and(|ts| window.contains(ts)))
        .collect();

    let split = FormatSplit::of(items.iter().copied(), short_threshold_secs);
    let most_liked = first_max_by(&items, |v| v.likes);
    let most_commented = first_max_by(&items, |v| v.comments);

    KpiResult {
        count_total: split.total,
        count_videos: split.videos,
        count_shorts: split.shorts,
        most_liked,
        most_commented,
        items,
    }
}

/// Keeps records whose title contains `keyword`, ignoring case.
///
/// A blank keyword keeps every record.
#[must_use]
pub fn filter_by_title<'a, I>(videos: I, keyword: &str) -> Vec<&'a VideoRecord>
where
    I: IntoIterator<Item = &'a VideoRecord>,
{
    let needle = keyword.trim().to_lowercase();
    videos
        .into_iter()
        .filter(|v| needle.is_empty() || v.title.to_lowercase().contains(&needle))
        .collect()
}

/// Arg-max that keeps the earliest candidate on ties.
///
/// `Iterator::max_by_key` returns the last maximum, hence the explicit fold.
fn first_max_by<'a, F>(items: &[&'a VideoRecord], key: F) -> Option<&'a VideoRecord>
where
    F: Fn(&VideoRecord) -> u64,
{
    items.iter().copied().fold(None, |best, candidate| match best {
        Some(current) if key(candidate) <= key(current) => Some(current),
        _ => Some(candidate),
    })
}

#[cfg(test)]
#[path = "kpi_test.rs"]
mod tests;
