use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::{ClubError, Result};

/// Viewer-scoped envelope returned by the events endpoint.
///
/// Only `events` is required. Everything the server sends is kept, so
/// serializing the list reproduces the received body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<String>,
    pub events: Vec<Event>,
    /// Fields this crate does not model, kept as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A club event together with the viewer's registration context.
///
/// Apart from `id`, fields are whatever the server chose to send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_open: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_registration_full: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_lead: Option<TeamMember>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_members: Option<Vec<TeamMember>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_team_lead: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_members: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_registrations: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    /// Fields this crate does not model, kept as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Allowed team size for an event; `1..=1` means individual participation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSize {
    pub min: u32,
    pub max: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A team member reference, also used for the team lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    pub fn event_start(&self) -> Result<NaiveDateTime> {
        combine_date_time(
            required(&self.event_start_date, "eventStartDate")?,
            required(&self.event_start_time, "eventStartTime")?,
        )
    }

    pub fn event_end(&self) -> Result<NaiveDateTime> {
        combine_date_time(
            required(&self.event_end_date, "eventEndDate")?,
            required(&self.event_end_time, "eventEndTime")?,
        )
    }

    pub fn registration_start(&self) -> Result<NaiveDateTime> {
        combine_date_time(
            required(&self.reg_start_date, "regStartDate")?,
            required(&self.reg_start_time, "regStartTime")?,
        )
    }

    pub fn registration_end(&self) -> Result<NaiveDateTime> {
        combine_date_time(
            required(&self.reg_end_date, "regEndDate")?,
            required(&self.reg_end_time, "regEndTime")?,
        )
    }

    pub fn is_team_event(&self) -> bool {
        self.team.as_ref().is_some_and(|team| team.max > 1)
    }

    /// Remaining registration slots, if the server reported both counts.
    pub fn seats_left(&self) -> Option<u32> {
        let max = self.max_registrations?;
        let current = self.current_members?;
        Some(max.saturating_sub(current))
    }
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str> {
    value.as_deref().ok_or(ClubError::MissingField { field })
}

/// Join an ISO date (`%Y-%m-%d`) with a time given as `%H:%M:%S` or `%H:%M`.
fn combine_date_time(date: &str, time: &str) -> Result<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")?;
    let time = time.trim();
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))?;
    Ok(date.and_time(time))
}
