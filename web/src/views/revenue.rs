use dioxus::prelude::*;
use types::records::{Category, Period};

use crate::use_error;

use super::components::{PeriodFigures, format_tzs};

#[component]
pub fn Revenue() -> Element {
    let mut error_state = use_error();
    let mut period = use_signal(|| Period::Month);
    let mut figures = use_signal(|| PeriodFigures::new(Period::Month));

    use_effect(move || {
        let selected = *period.read();
        figures.set(PeriodFigures::new(selected));
        spawn(async move {
            for category in Category::ALL {
                let fetched = api::revenue(category, selected).await;
                // A period change restarts the effect, but this loop runs
                // until the component unmounts; from here on its results
                // and errors belong to the old selection.
                if *period.peek() != selected {
                    return;
                }
                match fetched {
                    Ok(amount) => figures.write().insert(selected, category, amount),
                    Err(e) => error_state.set_server_error(&e),
                }
            }
        });
    });

    let overall = figures.read().total();
    let complete = figures.read().is_complete();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Revenue Overview" }
                    p { class: "page-subtitle", "Revenue per category for the selected period." }
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

            div { class: "metric-card metric-card-wide",
                h2 { class: "metric-title", "Total Revenue ({period.read().label()})" }
                p { class: "metric-value",
                    if complete {
                        "{format_tzs(overall)}"
                    } else {
                        "Loading..."
                    }
                }
            }

            div { class: "metric-grid",
                for category in Category::ALL {
                    div { class: "metric-card", key: "{category.slug()}",
                        h2 { class: "metric-title", "{category.label()}" }
                        p { class: "metric-value",
                            if let Some(amount) = figures.read().get(category) {
                                "{format_tzs(amount)}"
                            } else {
                                "Loading..."
                            }
                        }
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Revenue Chart" }
                }
                div { class: "chart-placeholder", "Chart Placeholder" }
            }
        }
    }
}
