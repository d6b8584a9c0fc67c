//! Producer award-interval analysis.
//!
//! Computes, for every producer credited on more than one winning film, the
//! gap in years between consecutive wins, then selects every interval tied
//! at the global minimum and maximum. The whole computation runs over an
//! owned snapshot of the winning records and holds no state between calls.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::db::models::MovieRecord;
use crate::db::repository::{MovieRepository, RepositoryError};

/// One gap between two consecutive wins credited to the same producer.
///
/// The serialized field names are part of the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardInterval {
    pub producer: String,
    pub interval: i32,
    #[serde(rename = "previousWin")]
    pub previous_win: i32,
    #[serde(rename = "followingWin")]
    pub following_win: i32,
}

/// The tie-sets at the global minimum and maximum interval.
///
/// Either side holds more than one entry when several producer intervals
/// share the extremum value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardIntervalsData {
    pub min: Vec<AwardInterval>,
    pub max: Vec<AwardInterval>,
}

/// Errors from the interval analysis.
#[derive(Debug, thiserror::Error)]
pub enum IntervalsError {
    /// No producer is credited on more than one winning film, so no interval
    /// exists. The HTTP layer surfaces this as a not-found response.
    #[error("No producer with multiple awards found")]
    NoRepeatWinners,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Split a raw producer credit into individual trimmed names.
///
/// " and " is treated as a separator wherever it appears, so a producer name
/// containing the word "and" between spaces is split apart. That mirrors how
/// the movie list encodes joint credits; empty pieces (e.g. from a trailing
/// comma) are dropped.
pub(crate) fn split_producers(raw: &str) -> Vec<String> {
    raw.replace(" and ", ",")
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Group win years by producer, in order of each producer's first appearance.
///
/// Producer identity is exact string equality after trimming; duplicate
/// credits for the same name merge into one entry.
pub(crate) fn group_wins(winners: &[MovieRecord]) -> Vec<(String, Vec<i32>)> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<i32>)> = Vec::new();

    for movie in winners {
        for producer in split_producers(&movie.producers) {
            match slots.get(&producer) {
                Some(&slot) => groups[slot].1.push(movie.year),
                None => {
                    slots.insert(producer.clone(), groups.len());
                    groups.push((producer, vec![movie.year]));
                }
            }
        }
    }

    groups
}

/// Emit one interval per consecutive pair of sorted win years.
///
/// Producers with fewer than two wins contribute nothing. Duplicate win
/// years are legal and produce a zero-length interval.
pub(crate) fn extract_intervals(groups: Vec<(String, Vec<i32>)>) -> Vec<AwardInterval> {
    let mut intervals = Vec::new();

    for (producer, mut years) in groups {
        if years.len() < 2 {
            continue;
        }
        years.sort();
        for pair in years.windows(2) {
            intervals.push(AwardInterval {
                producer: producer.clone(),
                interval: pair[1] - pair[0],
                previous_win: pair[0],
                following_win: pair[1],
            });
        }
    }

    intervals
}

/// Collect every interval tied at the global minimum and maximum.
///
/// All records at each extremum are returned, not just the first one found.
pub(crate) fn select_extrema(
    intervals: &[AwardInterval],
) -> Result<AwardIntervalsData, IntervalsError> {
    if intervals.is_empty() {
        return Err(IntervalsError::NoRepeatWinners);
    }

    let (min_value, max_value) = intervals.iter().fold((i32::MAX, i32::MIN), |(lo, hi), i| {
        (lo.min(i.interval), hi.max(i.interval))
    });

    Ok(AwardIntervalsData {
        min: intervals
            .iter()
            .filter(|i| i.interval == min_value)
            .cloned()
            .collect(),
        max: intervals
            .iter()
            .filter(|i| i.interval == max_value)
            .cloned()
            .collect(),
    })
}

/// Run the full analysis over the repository's winning records.
///
/// Every call rebuilds the producer grouping and interval sequence from a
/// fresh snapshot; nothing is cached across calls.
pub async fn award_intervals<R>(repo: &R) -> Result<AwardIntervalsData, IntervalsError>
where
    R: MovieRepository + ?Sized,
{
    let winners = repo.fetch_winning_movies().await?;
    let intervals = extract_intervals(group_wins(&winners));
    select_extrema(&intervals)
}
