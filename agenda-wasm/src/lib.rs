//! Framework-neutral WASM <-> JavaScript bridge.
//!
//! The host fetches the feed itself and hands the parsed document over; a
//! fetch failure therefore never reaches this crate and the previously
//! rendered view stays untouched.

use agenda_core::{
    AgendaConfig, AgendaError, AgendaSnapshot, CategoryFilter, FilterState, SubjectFilter,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
struct JsAgendaConfig {
    #[serde(default)]
    debounce_ms: Option<u32>,
}

impl From<JsAgendaConfig> for AgendaConfig {
    fn from(cfg: JsAgendaConfig) -> Self {
        let mut base = AgendaConfig::default();
        if let Some(ms) = cfg.debounce_ms {
            base.debounce_ms = ms;
        }
        base
    }
}

/// Filter object as hosts pass it: `{category, subject}`, both optional.
/// The category uses the chip vocabulary (`all`, `dev`, `te`, `autre`,
/// `annule`); the subject is a verbatim name or `all`.
#[derive(Deserialize)]
struct JsFilterState {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    subject: Option<String>,
}

impl From<JsFilterState> for FilterState {
    fn from(js: JsFilterState) -> Self {
        let category = match js.category.as_deref() {
            Some("dev") => CategoryFilter::Homework,
            Some("te") => CategoryFilter::Test,
            Some("autre") => CategoryFilter::OtherOrAnnouncement,
            Some("annule") => CategoryFilter::Cancelled,
            _ => CategoryFilter::All,
        };
        let subject = match js.subject {
            None => SubjectFilter::All,
            Some(name) if name == "all" => SubjectFilter::All,
            Some(name) => SubjectFilter::Only(name),
        };
        FilterState { category, subject }
    }
}

/// Loads a feed document and returns the serialized snapshot, subject list
/// included, so the host can populate its selector and re-view later.
#[wasm_bindgen]
pub fn load_agenda(feed: JsValue, today: Option<String>) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let snapshot = load(feed, today)?;
    to_value(&snapshot)
        .map_err(|err| JsValue::from_str(&format!("Could not serialize snapshot: {err}")))
}

/// One-shot load-and-view for hosts that refetch on every filter change.
#[wasm_bindgen]
pub fn build_agenda_view(
    feed: JsValue,
    filter: Option<JsValue>,
    today: Option<String>,
) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let snapshot = load(feed, today)?;
    let mut state = parse_filter(filter)?;
    state.revalidate(&snapshot.subjects);

    to_value(&snapshot.view(&state))
        .map_err(|err| JsValue::from_str(&format!("Could not serialize view: {err}")))
}

/// Re-views an already loaded snapshot under a new filter state.
#[wasm_bindgen]
pub fn view_agenda(snapshot: JsValue, filter: Option<JsValue>) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let snapshot: AgendaSnapshot = from_value(snapshot)
        .map_err(|err| JsValue::from_str(&format!("Unreadable snapshot: {err}")))?;
    let mut state = parse_filter(filter)?;
    state.revalidate(&snapshot.subjects);

    to_value(&snapshot.view(&state))
        .map_err(|err| JsValue::from_str(&format!("Could not serialize view: {err}")))
}

/// Effective configuration after folding host overrides onto the defaults.
#[wasm_bindgen]
pub fn agenda_config(overrides: Option<JsValue>) -> Result<JsValue, JsValue> {
    let config = match overrides {
        Some(js) => {
            let js: JsAgendaConfig = from_value(js)
                .map_err(|err| JsValue::from_str(&format!("Unreadable config: {err}")))?;
            AgendaConfig::from(js)
        }
        None => AgendaConfig::default(),
    };
    to_value(&config)
        .map_err(|err| JsValue::from_str(&format!("Could not serialize config: {err}")))
}

fn load(feed: JsValue, today: Option<String>) -> Result<AgendaSnapshot, JsValue> {
    let document = from_value::<serde_json::Value>(feed)
        .map_err(|err| JsValue::from_str(&format!("Unreadable feed document: {err}")))?;
    let today = parse_today(today)?;

    agenda_feed::load_feed_value(&document, today)
        .map_err(|err| JsValue::from_str(&format_agenda_error(err)))
}

fn parse_filter(filter: Option<JsValue>) -> Result<FilterState, JsValue> {
    match filter {
        Some(js) => {
            let js: JsFilterState = from_value(js)
                .map_err(|err| JsValue::from_str(&format!("Unreadable filter: {err}")))?;
            Ok(js.into())
        }
        None => Ok(FilterState::default()),
    }
}

/// The reference date is injectable for tests; absent an override it is
/// captured from the host clock once per load.
fn parse_today(today: Option<String>) -> Result<NaiveDate, JsValue> {
    match today {
        Some(iso) => NaiveDate::parse_from_str(&iso, "%Y-%m-%d")
            .map_err(|err| JsValue::from_str(&format!("Unreadable reference date: {err}"))),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn format_agenda_error(err: AgendaError) -> String {
    format!("Agenda error: {err}")
}
