use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A single leaderboard position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderBoard {
    pub rank: u32,
    pub name: String,
    pub points: i64,
}

/// Order leaderboard entries by rank, breaking ties by name.
pub fn sort_leaderboard(entries: impl IntoIterator<Item = LeaderBoard>) -> Vec<LeaderBoard> {
    entries
        .into_iter()
        .sorted_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.name.cmp(&b.name)))
        .collect()
}
