use dioxus::prelude::*;
use types::records::{Category, Period};

use crate::use_error;

use super::components::{PeriodFigures, format_tzs};

/// Total order cost per shop category for a selected period. Refetched
/// whenever the period changes; a card shows "Loading..." until its
/// category's figure arrives.
#[component]
pub fn OrdersCost() -> Element {
    let mut error_state = use_error();
    let mut period = use_signal(|| Period::Week);
    let mut totals = use_signal(|| PeriodFigures::new(Period::Week));

    use_effect(move || {
        let selected = *period.read();
        totals.set(PeriodFigures::new(selected));
        spawn(async move {
            for category in Category::ALL {
                let fetched = api::orders_total(category, selected).await;
                // A period change restarts the effect, but this loop runs
                // until the component unmounts; from here on its results
                // and errors belong to the old selection.
                if *period.peek() != selected {
                    return;
                }
                match fetched {
                    Ok(total) => totals.write().insert(selected, category, total),
                    Err(e) => error_state.set_server_error(&e),
                }
            }
        });
    });

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Total Orders Cost" }
                    p { class: "page-subtitle", "Order cost per category for the selected period." }
                }
                div { class: "page-header-actions",
                    select {
                        class: "form-input",
                        value: "{period.read().as_str()}",
                        onchange: move |e| {
                            if let Some(parsed) = Period::parse(&e.value()) {
                                period.set(parsed);
                            }
                        },
                        for option_period in Period::ALL {
                            option { value: "{option_period.as_str()}", "{option_period.label()}" }
                        }
                    }
                }
            }

            div { class: "metric-grid",
                for category in Category::ALL {
                    div { class: "metric-card", key: "{category.slug()}",
                        h2 { class: "metric-title", "{category.label()}" }
                        p { class: "metric-value",
                            if let Some(total) = totals.read().get(category) {
                                "{format_tzs(total)}"
                            } else {
                                "Loading..."
                            }
                        }
                    }
                }
            }
        }
    }
}
