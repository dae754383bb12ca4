use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A member of the executive committee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecomMember {
    pub name: String,
    pub year: u32,
    pub academic_year: u32,
    pub batch: String,
    pub role: String,
    pub upload_image: String,
    pub social_link: String,
}

/// Executive committee members keyed by group (usually the academic year).
pub type ExecomList = BTreeMap<String, Vec<ExecomMember>>;

/// Group members by academic year, keeping each group in input order.
pub fn group_execom_by_academic_year(
    members: impl IntoIterator<Item = ExecomMember>,
) -> ExecomList {
    members
        .into_iter()
        .into_group_map_by(|m| m.academic_year.to_string())
        .into_iter()
        .collect()
}
