//! JSON feed to `AgendaSnapshot` converter.
//!
//! The host fetches the feed document and hands it over as a string or a
//! `serde_json::Value`; this crate owns the wire format and the
//! classifier/normalizer that turns raw records into canonical items.

use agenda_core::{AgendaError, AgendaItem, AgendaSnapshot, Category};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

/// One feed entry, wire names preserved exactly.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub date: String,
    pub due: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    /// Interactivity kill switch; both feed spellings are accepted.
    #[serde(rename = "no-click", alias = "noClick", default)]
    pub no_click: bool,
}

/// Builds a snapshot from a feed document string.
pub fn load_feed_str(document_json: &str, today: NaiveDate) -> Result<AgendaSnapshot, AgendaError> {
    let value: Value =
        serde_json::from_str(document_json).map_err(|err| AgendaError::Parse(err.to_string()))?;
    load_feed_value(&value, today)
}

/// Builds a snapshot from an already parsed feed document.
///
/// `today` is the reference date captured once per load cycle; the
/// day-relative flags are computed against it, never against the wall clock.
pub fn load_feed_value(document: &Value, today: NaiveDate) -> Result<AgendaSnapshot, AgendaError> {
    let records = document
        .get("items")
        .and_then(Value::as_array)
        .ok_or(AgendaError::MissingItems)?;

    let mut items = Vec::with_capacity(records.len());
    for record in records {
        let record: RawRecord = serde_json::from_value(record.clone())
            .map_err(|err| AgendaError::Parse(err.to_string()))?;
        items.push(normalize_record(&record, today)?);
    }

    Ok(AgendaSnapshot::new(today, items))
}

/// Turns one raw record into its canonical item.
pub fn normalize_record(record: &RawRecord, today: NaiveDate) -> Result<AgendaItem, AgendaError> {
    let calendar_date = parse_date_label(&record.date)?;
    let due_minutes = parse_due(&record.due)?;

    let display_title = record
        .title
        .clone()
        .or_else(|| record.sub.clone())
        .unwrap_or_default();
    // The info fallback reads the raw title field, not the substituted one.
    let display_info = record
        .info
        .clone()
        .or_else(|| record.title.clone())
        .unwrap_or_default();

    Ok(AgendaItem {
        category: classify(record.kind.as_deref()),
        date_label: record.date.clone(),
        calendar_date,
        due_label: record.due.clone(),
        due_minutes,
        duration: record.duration.clone(),
        subject: record.sub.clone().unwrap_or_default(),
        display_title,
        display_info,
        detail: record.text.clone().unwrap_or_default(),
        color: record.color.clone(),
        no_click: record.no_click,
        is_today: calendar_date == today,
        is_tomorrow: Some(calendar_date) == today.succ_opt(),
    })
}

/// Parses `DD.MM.YY` (optional trailing dots) into a date in century 2000+YY.
/// Malformed labels are a hard error for the whole load; there is no
/// skip-and-continue and no silent default.
pub fn parse_date_label(label: &str) -> Result<NaiveDate, AgendaError> {
    let invalid = || AgendaError::InvalidDate(label.to_string());

    let mut parts = label.trim_end_matches('.').split('.');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let day: u32 = day.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let year: i32 = year.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(2000 + year, month, day).ok_or_else(invalid)
}

/// Parses `HH:MM` into minutes since midnight. Shape and numericness are
/// validated; the hour value itself is not range-checked.
pub fn parse_due(label: &str) -> Result<u32, AgendaError> {
    let invalid = || AgendaError::InvalidTime(label.to_string());

    let mut parts = label.split(':');
    let (Some(hours), Some(minutes), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;

    Ok(hours * 60 + minutes)
}

/// Total mapping from the raw `type` string to a category. Unknown, empty
/// and missing values all land on `Other`.
pub fn classify(kind: Option<&str>) -> Category {
    let Some(kind) = kind else {
        return Category::Other;
    };
    match kind.trim().to_lowercase().as_str() {
        "te" | "test" => Category::Test,
        "dev" | "devoir" => Category::Homework,
        "autre" => Category::Other,
        "annonce" => Category::Announcement,
        "annulé" | "annule" | "annulation" | "annulee" | "annulée" => Category::Cancelled,
        _ => Category::Other,
    }
}
