//! Yew rendering of the agenda list for WebAssembly hosts.

#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use std::rc::Rc;

    use crate::styles;
    use agenda_core::{
        AgendaConfig, AgendaItem, AgendaSnapshot, Category, CategoryFilter, DetailView,
        EmptyState, FilterState, Selection, SubjectFilter, ViewEntry,
    };
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{console, HtmlSelectElement};
    use yew::events::Event;
    use yew::prelude::*;
    use yew::TargetCast;

    /// Debounced swap in flight: the timeout handle plus its callback, kept
    /// alive until it either fires or gets cancelled by the next change.
    struct PendingSwap {
        handle: i32,
        _closure: Closure<dyn FnMut()>,
    }

    #[derive(Properties, PartialEq)]
    pub struct AgendaViewProps {
        pub snapshot: AgendaSnapshot,
        #[prop_or_default]
        pub config: AgendaConfig,
    }

    #[function_component(AgendaApp)]
    fn agenda_app(props: &AgendaViewProps) -> Html {
        let snapshot = &props.snapshot;
        let debounce_ms = props.config.debounce_ms;

        use_effect_with((), |_| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Err(err) = styles::ensure_styles(&document) {
                    console::error_1(&err);
                }
            }
            || ()
        });

        // Chips and the selector reflect this state immediately; the visible
        // list follows once the debounce window elapses.
        let filters = use_state(FilterState::default);
        let applied = use_state(FilterState::default);
        let fading = use_state(|| false);
        let selected = use_state(|| Option::<AgendaItem>::None);
        let pending = use_mut_ref(|| Option::<PendingSwap>::None);

        // A freshly loaded feed may have dropped the selected subject.
        {
            let filters = filters.clone();
            let applied = applied.clone();
            use_effect_with(snapshot.subjects.clone(), move |subjects: &Vec<String>| {
                let mut next = (*filters).clone();
                next.revalidate(subjects);
                if next != *filters {
                    filters.set(next);
                }
                let mut next = (*applied).clone();
                next.revalidate(subjects);
                if next != *applied {
                    applied.set(next);
                }
                || ()
            });
        }

        // Each trigger schedules the swap and cancels the previous pending
        // one, so rapid changes coalesce into a single visible update.
        let schedule = {
            let applied = applied.clone();
            let fading = fading.clone();
            let pending = pending.clone();
            Callback::from(move |next: FilterState| {
                fading.set(true);
                let Some(window) = web_sys::window() else {
                    applied.set(next);
                    fading.set(false);
                    return;
                };
                if let Some(previous) = pending.borrow_mut().take() {
                    window.clear_timeout_with_handle(previous.handle);
                }
                let closure = {
                    let applied = applied.clone();
                    let fading = fading.clone();
                    Closure::<dyn FnMut()>::new(move || {
                        applied.set(next.clone());
                        fading.set(false);
                    })
                };
                match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    debounce_ms as i32,
                ) {
                    Ok(handle) => {
                        *pending.borrow_mut() = Some(PendingSwap {
                            handle,
                            _closure: closure,
                        });
                    }
                    Err(err) => console::error_1(&err),
                }
            })
        };

        let on_category = {
            let filters = filters.clone();
            let schedule = schedule.clone();
            Callback::from(move |category: CategoryFilter| {
                let mut next = (*filters).clone();
                next.category = category;
                filters.set(next.clone());
                schedule.emit(next);
            })
        };

        let on_subject = {
            let filters = filters.clone();
            let schedule = schedule.clone();
            Callback::from(move |event: Event| {
                let select: HtmlSelectElement = event.target_unchecked_into();
                let value = select.value();
                let mut next = (*filters).clone();
                next.subject = if value == "all" {
                    SubjectFilter::All
                } else {
                    SubjectFilter::Only(value)
                };
                filters.set(next.clone());
                schedule.emit(next);
            })
        };

        let view = Rc::new(snapshot.view(&applied));

        let on_entry = {
            let selected = selected.clone();
            let view = view.clone();
            Callback::from(move |index: usize| {
                if let Selection::Open(item) = view.select(index) {
                    selected.set(Some(item.clone()));
                }
            })
        };

        let on_close = {
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| selected.set(None))
        };

        let list_class = classes!("agenda-list", fading.then_some("is-fading"));

        html! {
            <div class="agenda-root">
                <header class="agenda-toolbar">
                    { render_chips(&filters, on_category) }
                    { render_subject_select(&snapshot.subjects, &filters, on_subject) }
                </header>
                <p class="agenda-summary">{ view.summary.clone() }</p>
                <section class={list_class} aria-live="polite">
                    {
                        if let Some(empty) = &view.empty_state {
                            render_empty(empty)
                        } else {
                            html! {
                                for view
                                    .entries
                                    .iter()
                                    .enumerate()
                                    .map(|(index, entry)| render_entry(index, entry, on_entry.clone()))
                            }
                        }
                    }
                </section>
                {
                    selected
                        .as_ref()
                        .map(|item| render_modal(item, on_close.clone()))
                        .unwrap_or_default()
                }
            </div>
        }
    }

    fn render_chips(filters: &FilterState, on_pick: Callback<CategoryFilter>) -> Html {
        let options = [
            (CategoryFilter::All, "all", "Tous"),
            (CategoryFilter::Homework, "dev", "Devoirs"),
            (CategoryFilter::Test, "te", "Tests"),
            (CategoryFilter::OtherOrAnnouncement, "autre", "Autres"),
            (CategoryFilter::Cancelled, "annule", "Annulés"),
        ];

        html! {
            <div class="chip-row" role="group" aria-label="Filtrer par catégorie">
                {
                    for options.into_iter().map(|(value, key, label)| {
                        let on_pick = on_pick.clone();
                        let is_on = filters.category == value;
                        let onclick = Callback::from(move |_: MouseEvent| on_pick.emit(value));
                        html! {
                            <button
                                type="button"
                                class={classes!("chip", is_on.then_some("is-on"))}
                                data-filter={key}
                                onclick={onclick}
                            >
                                { label }
                            </button>
                        }
                    })
                }
            </div>
        }
    }

    fn render_subject_select(
        subjects: &[String],
        filters: &FilterState,
        onchange: Callback<Event>,
    ) -> Html {
        let current = match &filters.subject {
            SubjectFilter::All => "all".to_string(),
            SubjectFilter::Only(name) => name.clone(),
        };

        html! {
            <select class="subject-select" aria-label="Filtrer par matière" onchange={onchange}>
                <option value="all" selected={current == "all"}>{ "Toutes les matières" }</option>
                {
                    for subjects.iter().map(|subject| {
                        html! {
                            <option value={subject.clone()} selected={*subject == current}>
                                { subject }
                            </option>
                        }
                    })
                }
            </select>
        }
    }

    fn render_entry(index: usize, entry: &ViewEntry, on_select: Callback<usize>) -> Html {
        let item = &entry.item;
        let display = &entry.display;
        let is_cancelled = matches!(item.category, Category::Cancelled);
        let class = classes!(
            "entry",
            format!("entry--{}", display.tone),
            display.pulse_today.then_some("entry--today"),
            display.pulse_tomorrow.then_some("entry--tomorrow"),
            (!display.interactive).then_some("entry--disabled"),
            is_cancelled.then_some("entry--annule"),
        );
        let onclick = Callback::from(move |_: MouseEvent| on_select.emit(index));

        html! {
            <>
                {
                    entry
                        .separator
                        .as_ref()
                        .map(|label| html! { <div class="daySep">{ label.clone() }</div> })
                        .unwrap_or_default()
                }
                <article class={class} data-index={index.to_string()} onclick={onclick}>
                    <div class="entry__time">
                        <div class="entry__due">{ item.due_label.clone() }</div>
                        {
                            item.duration
                                .as_ref()
                                .map(|d| html! { <div class="entry__duration">{ d.clone() }</div> })
                                .unwrap_or_default()
                        }
                    </div>
                    <div>
                        <h3 class="entry__title">{ item.display_title.clone() }</h3>
                        {
                            display
                                .info_line
                                .as_ref()
                                .map(|text| html! { <p class="entry__text">{ text.clone() }</p> })
                                .unwrap_or_default()
                        }
                        <div class="entry__meta">
                            <span class={classes!("badge", format!("badge--{}", display.badge))}>
                                { display.label.clone() }
                            </span>
                        </div>
                    </div>
                </article>
            </>
        }
    }

    fn render_empty(empty: &EmptyState) -> Html {
        html! {
            <article class="emptyState" aria-disabled="true">
                <h3>{ empty.title.clone() }</h3>
                <p>{ empty.text.clone() }</p>
            </article>
        }
    }

    fn render_modal(item: &AgendaItem, on_close: Callback<MouseEvent>) -> Html {
        let detail = DetailView::for_item(item);
        let backdrop_close = on_close.clone();

        html! {
            <div class="modal is-open" aria-hidden="false">
                <div class="modal__backdrop" onclick={backdrop_close}></div>
                <div class="modal__card" role="dialog" aria-modal="true">
                    <span class="modal__sub">{ detail.heading.clone() }</span>
                    <h2 class="modal__title">{ detail.title.clone() }</h2>
                    <p class="modal__meta">{ detail.meta.clone() }</p>
                    <span class={classes!("badge", format!("badge--{}", detail.badge))}>
                        { detail.badge_label.clone() }
                    </span>
                    <p class="modal__text">{ detail.body.clone() }</p>
                    <button type="button" class="modal__close" onclick={on_close} aria-label="Fermer">
                        { "Fermer" }
                    </button>
                </div>
            </div>
        }
    }

    /// Mounts the agenda component on the element the selector matches.
    #[wasm_bindgen]
    pub fn mount_agenda_view(selector: &str, snapshot: JsValue) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document available"))?;

        let target = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Bad selector: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("No element matches the selector"))?;

        let snapshot: AgendaSnapshot = from_value(snapshot)?;

        yew::Renderer::<AgendaApp>::with_root_and_props(
            target,
            AgendaViewProps {
                snapshot,
                config: AgendaConfig::default(),
            },
        )
        .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_agenda_view;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_agenda_view(_: &str, _: wasm_bindgen::JsValue) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "agenda-ui only supports the wasm32 target",
    ))
}
