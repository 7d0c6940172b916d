use std::collections::HashMap;

use dioxus::prelude::*;
use types::records::{Category, Period};

/// Search input shared by the list pages. Every page resets to the first
/// page when the query changes, so a narrowed filter can never strand the
/// user on an out-of-range page.
#[component]
pub fn SearchBox(mut query: Signal<String>, mut page: Signal<usize>, placeholder: String) -> Element {
    rsx! {
        div { class: "search-box",
            input {
                class: "form-input",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{query}",
                oninput: move |e| {
                    query.set(e.value());
                    page.set(1);
                },
            }
        }
    }
}

/// Previous/next pagination controls with a "Page x of y" label.
///
/// `current` is the clamped page from the derived view, not the raw page
/// signal; after rows are removed the signal can point past the end, and
/// the label and prev/next arithmetic must follow what is shown.
#[component]
pub fn Pager(mut page: Signal<usize>, current: usize, total_pages: usize) -> Element {
    rsx! {
        div { class: "pager",
            button {
                class: "btn btn-secondary",
                disabled: current <= 1,
                onclick: move |_| page.set(current.saturating_sub(1).max(1)),
                "Previous"
            }
            span { class: "pager-label", "Page {current} of {total_pages}" }
            button {
                class: "btn btn-secondary",
                disabled: current >= total_pages,
                onclick: move |_| page.set((current + 1).min(total_pages)),
                "Next"
            }
        }
    }
}

#[component]
pub fn ConfirmDeleteModal(
    title: String,
    subject: String,
    busy: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| if !busy { on_close.call(()) },
            div { class: "modal modal-sm",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    if !busy {
                        button {
                            class: "modal-close",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                }
                div { class: "modal-body",
                    p { "Are you sure you want to delete " strong { "{subject}" } "?" }
                    p { class: "text-muted", "This action cannot be undone." }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        disabled: busy,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}

/// Per-category figures tagged with the period they were fetched for.
///
/// The fetch loops on the revenue and orders pages outlive a period
/// change; a response that comes back for a previously selected period
/// must not be rendered under the new one, so `insert` drops it.
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodFigures {
    period: Period,
    figures: HashMap<Category, f64>,
}

impl PeriodFigures {
    pub fn new(period: Period) -> Self {
        Self {
            period,
            figures: HashMap::new(),
        }
    }

    /// Record a figure fetched for `period`; ignored if the store has
    /// since been reset for a different period.
    pub fn insert(&mut self, period: Period, category: Category, amount: f64) {
        if period == self.period {
            self.figures.insert(category, amount);
        }
    }

    pub fn get(&self, category: Category) -> Option<f64> {
        self.figures.get(&category).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.figures.len() == Category::ALL.len()
    }

    pub fn total(&self) -> f64 {
        self.figures.values().sum()
    }
}

/// Tanzanian shilling, grouped thousands, no decimals. The backend reports
/// whole-shilling aggregates.
pub fn format_tzs(value: f64) -> String {
    let whole = value.round().abs() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if value < -0.5 { "-" } else { "" };

    format!("{sign}TZS {grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_period_response_is_dropped() {
        let mut figures = PeriodFigures::new(Period::Week);
        figures.insert(Period::Week, Category::Godown, 1_000.0);
        assert_eq!(figures.get(Category::Godown), Some(1_000.0));

        // The user switched to Month while the Week loop was in flight;
        // its late response must not land in the fresh store.
        let mut figures = PeriodFigures::new(Period::Month);
        figures.insert(Period::Week, Category::Godown, 1_000.0);
        assert_eq!(figures.get(Category::Godown), None);

        figures.insert(Period::Month, Category::Godown, 2_500.0);
        assert_eq!(figures.get(Category::Godown), Some(2_500.0));
    }

    #[test]
    fn completeness_and_total_track_the_current_period() {
        let mut figures = PeriodFigures::new(Period::Day);
        for (i, category) in Category::ALL.into_iter().enumerate() {
            assert!(!figures.is_complete());
            figures.insert(Period::Day, category, (i as f64) * 10.0);
            // Rejected inserts must not count towards completeness.
            figures.insert(Period::Month, category, 999.0);
        }
        assert!(figures.is_complete());
        assert_eq!(figures.total(), 150.0);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_tzs(0.0), "TZS 0");
        assert_eq!(format_tzs(950.0), "TZS 950");
        assert_eq!(format_tzs(1_250.0), "TZS 1,250");
        assert_eq!(format_tzs(12_345_678.4), "TZS 12,345,678");
        assert_eq!(format_tzs(-4_500.0), "-TZS 4,500");
    }
}
