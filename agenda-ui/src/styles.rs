#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-agenda-ui]";

/// Default CSS for the component along with easy-to-override design tokens.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --agenda-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --agenda-bg: #ffffff;
  --agenda-card-bg: #ffffff;
  --agenda-card-border: rgba(148, 163, 184, 0.28);
  --agenda-radius: 14px;
  --agenda-text: #1f2933;
  --agenda-muted: #52606d;
  --agenda-heading: #11181c;
  --agenda-surface: #f8fafc;
  --agenda-sep: #64748b;
  --agenda-blue: #2563eb;
  --agenda-blue-bg: rgba(37, 99, 235, 0.08);
  --agenda-red: #b42318;
  --agenda-red-bg: rgba(180, 35, 24, 0.08);
  --agenda-yellow: #b54708;
  --agenda-yellow-bg: rgba(220, 104, 3, 0.1);
  --agenda-neutral: #475467;
  --agenda-neutral-bg: rgba(71, 84, 103, 0.08);
  --agenda-pulse: rgba(37, 99, 235, 0.35);
}

.agenda-root {
  font-family: var(--agenda-font-family);
  background: var(--agenda-bg);
  color: var(--agenda-text);
  border-radius: var(--agenda-radius);
  display: flex;
  flex-direction: column;
  gap: 16px;
  padding: 22px;
  max-width: 680px;
  margin: 0 auto;
}

.agenda-toolbar {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 12px;
}

.chip-row {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
}

.chip {
  border: 1px solid var(--agenda-card-border);
  background: var(--agenda-surface);
  color: var(--agenda-muted);
  border-radius: 999px;
  padding: 6px 14px;
  font-size: 0.85rem;
  cursor: pointer;
  transition: background 0.15s ease, color 0.15s ease;
}

.chip:hover {
  color: var(--agenda-heading);
}

.chip.is-on {
  background: var(--agenda-heading);
  border-color: var(--agenda-heading);
  color: #ffffff;
}

.subject-select {
  margin-left: auto;
  border: 1px solid var(--agenda-card-border);
  border-radius: 10px;
  background: var(--agenda-surface);
  color: var(--agenda-text);
  padding: 6px 10px;
  font-size: 0.85rem;
}

.agenda-summary {
  margin: 0;
  color: var(--agenda-muted);
  font-size: 0.85rem;
  text-transform: uppercase;
  letter-spacing: 0.06em;
}

.agenda-list {
  display: flex;
  flex-direction: column;
  gap: 10px;
  transition: opacity 0.15s ease;
}

.agenda-list.is-fading {
  opacity: 0.35;
}

.daySep {
  margin-top: 8px;
  color: var(--agenda-sep);
  font-size: 0.8rem;
  font-weight: 600;
  letter-spacing: 0.04em;
}

.entry {
  display: grid;
  grid-template-columns: 72px 1fr;
  gap: 14px;
  background: var(--agenda-card-bg);
  border: 1px solid var(--agenda-card-border);
  border-left: 4px solid var(--agenda-neutral);
  border-radius: var(--agenda-radius);
  padding: 14px 16px;
  cursor: pointer;
}

.entry--blue {
  border-left-color: var(--agenda-blue);
  background: var(--agenda-blue-bg);
}

.entry--red {
  border-left-color: var(--agenda-red);
  background: var(--agenda-red-bg);
}

.entry--yellow {
  border-left-color: var(--agenda-yellow);
  background: var(--agenda-yellow-bg);
}

.entry--neutral {
  border-left-color: var(--agenda-neutral);
  background: var(--agenda-neutral-bg);
}

.entry--today {
  animation: agenda-pulse 1.6s ease-in-out infinite;
}

.entry--tomorrow {
  box-shadow: 0 0 0 1px var(--agenda-pulse);
}

.entry--disabled {
  cursor: default;
  opacity: 0.75;
}

.entry--annule .entry__title {
  text-decoration: line-through;
  color: var(--agenda-muted);
}

@keyframes agenda-pulse {
  0%, 100% {
    box-shadow: 0 0 0 0 var(--agenda-pulse);
  }
  50% {
    box-shadow: 0 0 0 4px transparent;
  }
}

.entry__time {
  display: flex;
  flex-direction: column;
  gap: 2px;
}

.entry__due {
  font-weight: 700;
  color: var(--agenda-heading);
}

.entry__duration {
  font-size: 0.78rem;
  color: var(--agenda-muted);
}

.entry__title {
  margin: 0;
  font-size: 1rem;
  color: var(--agenda-heading);
}

.entry__text {
  margin: 4px 0 0;
  font-size: 0.88rem;
  color: var(--agenda-muted);
}

.entry__meta {
  margin-top: 8px;
}

.badge {
  display: inline-block;
  border-radius: 999px;
  padding: 2px 10px;
  font-size: 0.72rem;
  font-weight: 600;
  letter-spacing: 0.03em;
  background: var(--agenda-neutral-bg);
  color: var(--agenda-neutral);
}

.badge--dev {
  background: var(--agenda-blue-bg);
  color: var(--agenda-blue);
}

.badge--te {
  background: var(--agenda-red-bg);
  color: var(--agenda-red);
}

.badge--annonce {
  background: var(--agenda-yellow-bg);
  color: var(--agenda-yellow);
}

.badge--autre,
.badge--annule {
  background: var(--agenda-neutral-bg);
  color: var(--agenda-neutral);
}

.emptyState {
  border: 1px dashed var(--agenda-card-border);
  border-radius: var(--agenda-radius);
  background: var(--agenda-surface);
  padding: 26px;
  text-align: center;
}

.emptyState h3 {
  margin: 0 0 6px;
  color: var(--agenda-heading);
}

.emptyState p {
  margin: 0;
  color: var(--agenda-muted);
  font-size: 0.9rem;
}

.modal {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 40;
}

.modal__backdrop {
  position: absolute;
  inset: 0;
  background: rgba(15, 23, 42, 0.45);
}

.modal__card {
  position: relative;
  background: var(--agenda-card-bg);
  border-radius: var(--agenda-radius);
  box-shadow: 0 24px 48px rgba(15, 23, 42, 0.18);
  padding: 24px;
  width: min(480px, calc(100vw - 32px));
  display: flex;
  flex-direction: column;
  gap: 8px;
}

.modal__sub {
  color: var(--agenda-muted);
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 0.06em;
}

.modal__title {
  margin: 0;
  color: var(--agenda-heading);
}

.modal__meta {
  margin: 0;
  color: var(--agenda-muted);
  font-size: 0.85rem;
}

.modal__text {
  margin: 8px 0 0;
  line-height: 1.5;
}

.modal__close {
  align-self: flex-end;
  margin-top: 12px;
  border: 1px solid var(--agenda-card-border);
  border-radius: 10px;
  background: var(--agenda-surface);
  color: var(--agenda-text);
  padding: 6px 14px;
  cursor: pointer;
}

@media (max-width: 640px) {
  .agenda-root {
    padding: 14px;
  }

  .entry {
    grid-template-columns: 56px 1fr;
    gap: 10px;
    padding: 12px;
  }

  .subject-select {
    margin-left: 0;
    width: 100%;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document has no <head> element"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-agenda-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
