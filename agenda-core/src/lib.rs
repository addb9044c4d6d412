//! Core data model, view pipeline and presentation mapping for the agenda.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tunable knobs shared by the rendering hosts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgendaConfig {
    /// Window (ms) coalescing rapid filter changes into one visible update.
    pub debounce_ms: u32,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self { debounce_ms: 160 }
    }
}

/// Canonical event kind. Every raw `type` string maps to exactly one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Homework,
    Test,
    Other,
    Announcement,
    Cancelled,
}

impl Category {
    /// Short key used for badge CSS classes, same vocabulary as the feed.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Homework => "dev",
            Category::Test => "te",
            Category::Other => "autre",
            Category::Announcement => "annonce",
            Category::Cancelled => "annule",
        }
    }

    /// French display label for the badge.
    pub fn label(self) -> &'static str {
        match self {
            Category::Homework => "Devoir",
            Category::Test => "Test",
            Category::Other => "Autre",
            Category::Announcement => "Annonce",
            Category::Cancelled => "Annulé",
        }
    }

    /// Cancellations and announcements never get the today/tomorrow emphasis.
    fn allows_pulse(self) -> bool {
        !matches!(self, Category::Cancelled | Category::Announcement)
    }
}

/// One normalized agenda entry. Immutable once the feed adapter built it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgendaItem {
    pub category: Category,
    /// Verbatim raw date label, reproduced as the group separator text.
    pub date_label: String,
    pub calendar_date: NaiveDate,
    /// Verbatim raw `HH:MM` label shown in the time column.
    pub due_label: String,
    pub due_minutes: u32,
    pub duration: Option<String>,
    /// Raw subject name, empty when the record carried none.
    pub subject: String,
    pub display_title: String,
    pub display_info: String,
    /// Free-text detail for the modal.
    pub detail: String,
    /// Explicit tone override from the feed.
    pub color: Option<String>,
    pub no_click: bool,
    pub is_today: bool,
    pub is_tomorrow: bool,
}

impl AgendaItem {
    /// Visual tone: explicit override first, then the per-category default.
    pub fn tone(&self) -> &str {
        if let Some(color) = &self.color {
            return color;
        }
        match self.category {
            Category::Test => "red",
            Category::Announcement => "yellow",
            Category::Cancelled | Category::Other => "neutral",
            Category::Homework => "blue",
        }
    }

    /// Cancelled and explicitly flagged records never open the detail view.
    pub fn is_interactive(&self) -> bool {
        !(self.no_click || matches!(self.category, Category::Cancelled))
    }
}

/// Category axis of the filter, one chip per variant.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Homework,
    Test,
    /// Other and Announcement are presented as one filter bucket.
    OtherOrAnnouncement,
    Cancelled,
}

impl CategoryFilter {
    fn keeps(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Homework => category == Category::Homework,
            CategoryFilter::Test => category == Category::Test,
            CategoryFilter::OtherOrAnnouncement => {
                matches!(category, Category::Other | Category::Announcement)
            }
            CategoryFilter::Cancelled => category == Category::Cancelled,
        }
    }
}

/// Subject axis of the filter. `Only` compares exactly, case-sensitive.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubjectFilter {
    #[default]
    All,
    Only(String),
}

impl SubjectFilter {
    fn keeps(&self, subject: &str) -> bool {
        match self {
            SubjectFilter::All => true,
            SubjectFilter::Only(wanted) => subject == wanted,
        }
    }
}

/// The only mutable state the pipeline reads. Session-owned, never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub subject: SubjectFilter,
}

impl FilterState {
    /// Drops a subject selection that a freshly loaded feed no longer carries.
    pub fn revalidate(&mut self, subjects: &[String]) {
        if let SubjectFilter::Only(selected) = &self.subject {
            if !subjects.iter().any(|s| s == selected) {
                self.subject = SubjectFilter::All;
            }
        }
    }
}

/// Everything one load cycle produced. Items stay in feed order; views are
/// derived on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgendaSnapshot {
    /// Reference date the load was computed against.
    pub loaded_on: NaiveDate,
    pub items: Vec<AgendaItem>,
    /// Deduplicated selector options over every loaded item, fr-CH ordering.
    pub subjects: Vec<String>,
}

impl AgendaSnapshot {
    pub fn new(loaded_on: NaiveDate, items: Vec<AgendaItem>) -> Self {
        let subjects = subject_options(&items);
        Self {
            loaded_on,
            items,
            subjects,
        }
    }

    /// Applies the filter state and produces the grouped, ordered view.
    pub fn view(&self, filter: &FilterState) -> AgendaView {
        let mut kept: Vec<&AgendaItem> = self
            .items
            .iter()
            .filter(|item| item.calendar_date >= self.loaded_on)
            .filter(|item| filter.category.keeps(item.category))
            .filter(|item| filter.subject.keeps(&item.subject))
            .collect();
        // Stable, so feed order stays the tertiary key.
        kept.sort_by_key(|item| (item.calendar_date, item.due_minutes));

        let mut entries = Vec::with_capacity(kept.len());
        let mut last_label: Option<&str> = None;
        for item in kept {
            let separator = if last_label != Some(item.date_label.as_str()) {
                last_label = Some(item.date_label.as_str());
                Some(item.date_label.clone())
            } else {
                None
            };
            entries.push(ViewEntry {
                separator,
                display: EntryDisplay::for_item(item),
                item: item.clone(),
            });
        }

        let summary = summary_text(entries.len(), filter.category);
        let empty_state = if entries.is_empty() {
            empty_state(filter.category)
        } else {
            None
        };

        AgendaView {
            entries,
            summary,
            empty_state,
        }
    }
}

/// One row of the rendered list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewEntry {
    /// Raw date label, present whenever it changes from the previous entry.
    pub separator: Option<String>,
    pub item: AgendaItem,
    pub display: EntryDisplay,
}

/// Filtered, sorted, grouped result of one render cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgendaView {
    pub entries: Vec<ViewEntry>,
    pub summary: String,
    /// Canned message, present only when the filtered view is empty.
    pub empty_state: Option<EmptyState>,
}

impl AgendaView {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position-based lookup used by the presentation layer on selection.
    pub fn select(&self, index: usize) -> Selection<'_> {
        match self.entries.get(index) {
            None => Selection::Missing,
            Some(entry) if !entry.display.interactive => Selection::Inert,
            Some(entry) => Selection::Open(&entry.item),
        }
    }
}

/// Outcome of a position lookup from the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a> {
    /// Interactive item, full record available for the detail view.
    Open(&'a AgendaItem),
    /// Cancelled or no-click item, nothing opens.
    Inert,
    /// Index beyond the last produced view.
    Missing,
}

/// Display attributes derived per item. Pure function of item state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntryDisplay {
    pub tone: String,
    pub label: String,
    /// Badge CSS key (`dev`, `te`, `autre`, `annonce`, `annule`).
    pub badge: String,
    pub pulse_today: bool,
    pub pulse_tomorrow: bool,
    pub interactive: bool,
    /// Body line under the title; suppressed for cancellations.
    pub info_line: Option<String>,
}

impl EntryDisplay {
    pub fn for_item(item: &AgendaItem) -> Self {
        let pulse = item.category.allows_pulse();
        Self {
            tone: item.tone().to_string(),
            label: item.category.label().to_string(),
            badge: item.category.slug().to_string(),
            pulse_today: item.is_today && pulse,
            pulse_tomorrow: !item.is_today && item.is_tomorrow && pulse,
            interactive: item.is_interactive(),
            info_line: match item.category {
                Category::Cancelled => None,
                _ => Some(item.display_info.clone()),
            },
        }
    }
}

/// Modal content derived from one selected item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailView {
    /// "Subject · Label", or just the label when the subject is empty.
    pub heading: String,
    pub title: String,
    /// "date · due" line.
    pub meta: String,
    pub body: String,
    pub badge: String,
    pub badge_label: String,
}

impl DetailView {
    pub fn for_item(item: &AgendaItem) -> Self {
        let label = item.category.label();
        let heading = if item.subject.is_empty() {
            label.to_string()
        } else {
            format!("{} · {label}", item.subject)
        };
        Self {
            heading,
            title: item.display_title.clone(),
            meta: format!("{} · {}", item.date_label, item.due_label),
            body: item.detail.clone(),
            badge: item.category.slug().to_string(),
            badge_label: label.to_string(),
        }
    }
}

/// Canned message for a filtered view with zero entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmptyState {
    pub title: String,
    pub text: String,
}

pub fn empty_state(filter: CategoryFilter) -> Option<EmptyState> {
    let (title, text) = match filter {
        CategoryFilter::All => return None,
        CategoryFilter::Homework => (
            "Aucun devoir !",
            "Félicitations ! Une belle journée vous attend.",
        ),
        CategoryFilter::Test => ("Aucun test !", "Rien à préparer pour l’instant."),
        CategoryFilter::Cancelled => (
            "Tous les cours sont maintenus.",
            "Aucune annulation prévue.",
        ),
        CategoryFilter::OtherOrAnnouncement => {
            ("Aucun événement.", "Aucune information complémentaire.")
        }
    };
    Some(EmptyState {
        title: title.to_string(),
        text: text.to_string(),
    })
}

/// Headline above the list, e.g. "3 devoirs" or "Tous les résultats".
pub fn summary_text(count: usize, filter: CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => "Tous les résultats".to_string(),
        CategoryFilter::OtherOrAnnouncement => "Autres résultats".to_string(),
        narrowed => {
            let (singular, plural) = summary_noun(narrowed);
            let noun = if count <= 1 { singular } else { plural };
            format!("{count} {noun}")
        }
    }
}

fn summary_noun(filter: CategoryFilter) -> (&'static str, &'static str) {
    match filter {
        CategoryFilter::Homework => ("devoir", "devoirs"),
        CategoryFilter::Test => ("test", "tests"),
        CategoryFilter::Cancelled => ("annulé", "annulés"),
        _ => ("résultat", "résultats"),
    }
}

/// Deduplicated, non-empty subjects across all loaded items. Never computed
/// from a filtered view, so the selector does not shrink on filter changes.
pub fn subject_options(items: &[AgendaItem]) -> Vec<String> {
    let mut subjects: Vec<String> = Vec::new();
    for item in items {
        if item.subject.is_empty() {
            continue;
        }
        if !subjects.iter().any(|s| s == &item.subject) {
            subjects.push(item.subject.clone());
        }
    }
    subjects.sort_by(|a, b| compare_fr(a, b));
    subjects
}

/// fr-CH-style ordering: case and diacritics fold into the primary key,
/// the raw string breaks ties.
pub fn compare_fr(a: &str, b: &str) -> Ordering {
    fold_fr(a).cmp(&fold_fr(b)).then_with(|| a.cmp(b))
}

fn fold_fr(input: &str) -> String {
    let mut folded = String::with_capacity(input.len());
    for c in input.chars().flat_map(char::to_lowercase) {
        match c {
            'à' | 'â' | 'ä' => folded.push('a'),
            'ç' => folded.push('c'),
            'é' | 'è' | 'ê' | 'ë' => folded.push('e'),
            'î' | 'ï' => folded.push('i'),
            'ô' | 'ö' => folded.push('o'),
            'û' | 'ù' | 'ü' => folded.push('u'),
            'œ' => folded.push_str("oe"),
            'æ' => folded.push_str("ae"),
            other => folded.push(other),
        }
    }
    folded
}

/// Load-cycle failure. A record-level parse error aborts the whole load so a
/// partially built view is never rendered.
#[derive(Debug, thiserror::Error)]
pub enum AgendaError {
    #[error("feed document carries no items list")]
    MissingItems,
    #[error("invalid date label {0:?}")]
    InvalidDate(String),
    #[error("invalid due time {0:?}")]
    InvalidTime(String),
    #[error("unreadable feed: {0}")]
    Parse(String),
}

/// Snapshot with no items (mock/testing).
pub fn empty_snapshot(loaded_on: NaiveDate) -> AgendaSnapshot {
    AgendaSnapshot::new(loaded_on, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(label: &str, day: NaiveDate, due: u32, category: Category, sub: &str) -> AgendaItem {
        AgendaItem {
            category,
            date_label: label.to_string(),
            calendar_date: day,
            due_label: format!("{:02}:{:02}", due / 60, due % 60),
            due_minutes: due,
            duration: None,
            subject: sub.to_string(),
            display_title: format!("{sub} entry"),
            display_info: "info".to_string(),
            detail: "detail".to_string(),
            color: None,
            no_click: false,
            is_today: false,
            is_tomorrow: false,
        }
    }

    fn snapshot(today: NaiveDate, items: Vec<AgendaItem>) -> AgendaSnapshot {
        AgendaSnapshot::new(today, items)
    }

    #[test]
    fn past_items_never_surface() {
        let today = date(2025, 3, 4);
        let snap = snapshot(
            today,
            vec![
                item("03.03.25", date(2025, 3, 3), 480, Category::Homework, "Maths"),
                item("04.03.25", date(2025, 3, 4), 480, Category::Homework, "Maths"),
                item("05.03.25", date(2025, 3, 5), 480, Category::Homework, "Maths"),
            ],
        );
        let view = snap.view(&FilterState::default());
        assert_eq!(view.len(), 2);
        assert!(view.entries.iter().all(|e| e.item.calendar_date >= today));
    }

    #[test]
    fn other_filter_keeps_announcements_too() {
        let today = date(2025, 3, 4);
        let snap = snapshot(
            today,
            vec![
                item("05.03.25", date(2025, 3, 5), 480, Category::Other, "A"),
                item("05.03.25", date(2025, 3, 5), 490, Category::Announcement, "B"),
                item("05.03.25", date(2025, 3, 5), 500, Category::Test, "C"),
            ],
        );
        let filter = FilterState {
            category: CategoryFilter::OtherOrAnnouncement,
            subject: SubjectFilter::All,
        };
        let view = snap.view(&filter);
        assert_eq!(view.len(), 2);
        assert_eq!(view.summary, "Autres résultats");
    }

    #[test]
    fn subject_filter_is_exact_and_case_sensitive() {
        let today = date(2025, 3, 4);
        let snap = snapshot(
            today,
            vec![
                item("05.03.25", date(2025, 3, 5), 480, Category::Homework, "Maths"),
                item("05.03.25", date(2025, 3, 5), 490, Category::Homework, "maths"),
            ],
        );
        let filter = FilterState {
            category: CategoryFilter::All,
            subject: SubjectFilter::Only("Maths".to_string()),
        };
        let view = snap.view(&filter);
        assert_eq!(view.len(), 1);
        assert_eq!(view.entries[0].item.subject, "Maths");
    }

    #[test]
    fn sort_is_date_then_due_then_feed_order() {
        let today = date(2025, 3, 4);
        let mut third = item("06.03.25", date(2025, 3, 6), 480, Category::Homework, "A");
        third.display_title = "third".to_string();
        let mut first = item("05.03.25", date(2025, 3, 5), 600, Category::Homework, "B");
        first.display_title = "first".to_string();
        let mut tie_a = item("05.03.25", date(2025, 3, 5), 600, Category::Homework, "C");
        tie_a.display_title = "tie-a".to_string();
        let mut early = item("05.03.25", date(2025, 3, 5), 480, Category::Homework, "D");
        early.display_title = "early".to_string();

        let snap = snapshot(today, vec![third, first, tie_a, early]);
        let view = snap.view(&FilterState::default());
        let titles: Vec<&str> = view
            .entries
            .iter()
            .map(|e| e.item.display_title.as_str())
            .collect();
        // Ties at (date, due) keep feed order: "first" was fed before "tie-a".
        assert_eq!(titles, ["early", "first", "tie-a", "third"]);
    }

    #[test]
    fn separator_appears_once_per_label_run() {
        let today = date(2025, 3, 4);
        let snap = snapshot(
            today,
            vec![
                item("05.03.25", date(2025, 3, 5), 480, Category::Homework, "A"),
                item("05.03.25", date(2025, 3, 5), 490, Category::Homework, "B"),
                item("06.03.25", date(2025, 3, 6), 480, Category::Homework, "C"),
            ],
        );
        let view = snap.view(&FilterState::default());
        let seps: Vec<Option<&str>> = view
            .entries
            .iter()
            .map(|e| e.separator.as_deref())
            .collect();
        assert_eq!(seps, [Some("05.03.25"), None, Some("06.03.25")]);
    }

    #[test]
    fn separator_follows_raw_label_not_calendar_date() {
        let today = date(2025, 3, 4);
        let snap = snapshot(
            today,
            vec![
                item("05.03.25", date(2025, 3, 5), 480, Category::Homework, "A"),
                item("05.03.25.", date(2025, 3, 5), 490, Category::Homework, "B"),
            ],
        );
        let view = snap.view(&FilterState::default());
        assert_eq!(view.entries[0].separator.as_deref(), Some("05.03.25"));
        assert_eq!(view.entries[1].separator.as_deref(), Some("05.03.25."));
    }

    #[test]
    fn summary_counts_singular_and_plural() {
        assert_eq!(summary_text(0, CategoryFilter::Homework), "0 devoir");
        assert_eq!(summary_text(1, CategoryFilter::Homework), "1 devoir");
        assert_eq!(summary_text(2, CategoryFilter::Homework), "2 devoirs");
        assert_eq!(summary_text(3, CategoryFilter::Test), "3 tests");
        assert_eq!(summary_text(2, CategoryFilter::Cancelled), "2 annulés");
        assert_eq!(summary_text(5, CategoryFilter::All), "Tous les résultats");
    }

    #[test]
    fn empty_states_exist_for_every_filter_but_all() {
        assert!(empty_state(CategoryFilter::All).is_none());
        let homework = empty_state(CategoryFilter::Homework).unwrap();
        assert_eq!(homework.title, "Aucun devoir !");
        assert_eq!(
            homework.text,
            "Félicitations ! Une belle journée vous attend."
        );
        assert!(empty_state(CategoryFilter::Test).is_some());
        assert!(empty_state(CategoryFilter::Cancelled).is_some());
        assert!(empty_state(CategoryFilter::OtherOrAnnouncement).is_some());
    }

    #[test]
    fn empty_view_carries_message_only_for_narrowed_filters() {
        let today = date(2025, 3, 4);
        let snap = snapshot(today, Vec::new());

        let all = snap.view(&FilterState::default());
        assert!(all.is_empty());
        assert!(all.empty_state.is_none());

        let tests = snap.view(&FilterState {
            category: CategoryFilter::Test,
            subject: SubjectFilter::All,
        });
        assert_eq!(tests.empty_state.unwrap().title, "Aucun test !");
    }

    #[test]
    fn cancelled_items_render_muted_and_inert() {
        let today = date(2025, 3, 4);
        let mut cancelled = item("04.03.25", today, 480, Category::Cancelled, "Maths");
        cancelled.is_today = true;
        let snap = snapshot(today, vec![cancelled]);
        let view = snap.view(&FilterState::default());
        let display = &view.entries[0].display;

        assert_eq!(display.tone, "neutral");
        assert_eq!(display.label, "Annulé");
        assert!(display.info_line.is_none());
        assert!(!display.interactive);
        // Today's date notwithstanding, cancellations never pulse.
        assert!(!display.pulse_today);
        assert_eq!(view.select(0), Selection::Inert);
    }

    #[test]
    fn explicit_color_overrides_category_tone() {
        let mut it = item("05.03.25", date(2025, 3, 5), 480, Category::Test, "Maths");
        it.color = Some("green".to_string());
        assert_eq!(it.tone(), "green");
        it.color = None;
        assert_eq!(it.tone(), "red");
    }

    #[test]
    fn pulse_flags_follow_day_and_category() {
        let today = date(2025, 3, 4);
        let mut hw_today = item("04.03.25", today, 480, Category::Homework, "A");
        hw_today.is_today = true;
        let display = EntryDisplay::for_item(&hw_today);
        assert!(display.pulse_today);
        assert!(!display.pulse_tomorrow);

        let mut hw_tomorrow = item("05.03.25", date(2025, 3, 5), 480, Category::Homework, "A");
        hw_tomorrow.is_tomorrow = true;
        let display = EntryDisplay::for_item(&hw_tomorrow);
        assert!(!display.pulse_today);
        assert!(display.pulse_tomorrow);

        let mut annonce = item("04.03.25", today, 480, Category::Announcement, "A");
        annonce.is_today = true;
        let display = EntryDisplay::for_item(&annonce);
        assert!(!display.pulse_today && !display.pulse_tomorrow);
    }

    #[test]
    fn selection_contract_covers_all_outcomes() {
        let today = date(2025, 3, 4);
        let open = item("05.03.25", date(2025, 3, 5), 480, Category::Homework, "A");
        let mut flagged = item("05.03.25", date(2025, 3, 5), 490, Category::Homework, "B");
        flagged.no_click = true;
        let snap = snapshot(today, vec![open, flagged]);
        let view = snap.view(&FilterState::default());

        match view.select(0) {
            Selection::Open(found) => assert_eq!(found.subject, "A"),
            other => panic!("expected Open, got {other:?}"),
        }
        assert_eq!(view.select(1), Selection::Inert);
        assert_eq!(view.select(7), Selection::Missing);
    }

    #[test]
    fn detail_view_prefixes_subject_when_present() {
        let it = item("05.03.25", date(2025, 3, 5), 495, Category::Test, "Maths");
        let detail = DetailView::for_item(&it);
        assert_eq!(detail.heading, "Maths · Test");
        assert_eq!(detail.meta, "05.03.25 · 08:15");
        assert_eq!(detail.badge, "te");

        let anonymous = item("05.03.25", date(2025, 3, 5), 495, Category::Other, "");
        assert_eq!(DetailView::for_item(&anonymous).heading, "Autre");
    }

    #[test]
    fn subject_options_dedup_and_collate() {
        let items = vec![
            item("05.03.25", date(2025, 3, 5), 480, Category::Homework, "Français"),
            item("05.03.25", date(2025, 3, 5), 490, Category::Homework, "Économie"),
            item("05.03.25", date(2025, 3, 5), 500, Category::Homework, "Allemand"),
            item("05.03.25", date(2025, 3, 5), 510, Category::Homework, "Français"),
            item("05.03.25", date(2025, 3, 5), 520, Category::Homework, ""),
        ];
        let subjects = subject_options(&items);
        assert_eq!(subjects, ["Allemand", "Économie", "Français"]);
    }

    #[test]
    fn subject_list_ignores_the_category_filter() {
        let today = date(2025, 3, 4);
        let snap = snapshot(
            today,
            vec![
                item("05.03.25", date(2025, 3, 5), 480, Category::Homework, "Maths"),
                item("05.03.25", date(2025, 3, 5), 490, Category::Test, "Chimie"),
            ],
        );
        // The selector options come from the snapshot, not from any view.
        assert_eq!(snap.subjects, ["Chimie", "Maths"]);
    }

    #[test]
    fn revalidate_resets_vanished_subject() {
        let subjects = vec!["Maths".to_string(), "Chimie".to_string()];
        let mut state = FilterState {
            category: CategoryFilter::Test,
            subject: SubjectFilter::Only("Maths".to_string()),
        };
        state.revalidate(&subjects);
        assert_eq!(state.subject, SubjectFilter::Only("Maths".to_string()));

        state.subject = SubjectFilter::Only("Latin".to_string());
        state.revalidate(&subjects);
        assert_eq!(state.subject, SubjectFilter::All);
        // The category axis is untouched by revalidation.
        assert_eq!(state.category, CategoryFilter::Test);
    }
}
