use dioxus::prelude::*;

struct Stat {
    label: &'static str,
    value: &'static str,
    change: &'static str,
    up: bool,
}

const STATS: [Stat; 4] = [
    Stat {
        label: "Total Users",
        value: "2,543",
        change: "+12.5%",
        up: true,
    },
    Stat {
        label: "Revenue",
        value: "TZS 45,231",
        change: "+8.2%",
        up: true,
    },
    Stat {
        label: "Orders",
        value: "1,345",
        change: "-3.1%",
        up: false,
    },
    Stat {
        label: "Conversion Rate",
        value: "2.4%",
        change: "+0.8%",
        up: true,
    },
];

const RECENT_ACTIVITY: [(&str, &str); 4] = [
    ("New user registered", "2 minutes ago"),
    ("Order #1832 completed", "15 minutes ago"),
    ("Stationery stock updated", "1 hour ago"),
    ("Monthly report generated", "3 hours ago"),
];

#[component]
pub fn Overview() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Overview" }
                    p { class: "page-subtitle", "What's happening across the shop." }
                }
            }

            div { class: "metric-grid",
                for stat in STATS {
                    div { class: "card metric-card", key: "{stat.label}",
                        span { class: "metric-label", "{stat.label}" }
                        span { class: "metric-value", "{stat.value}" }
                        span {
                            class: if stat.up { "metric-change metric-up" } else { "metric-change metric-down" },
                            "{stat.change}"
                        }
                    }
                }
            }

            div { class: "overview-grid",
                div { class: "card",
                    div { class: "card-header", h2 { "Sales Trend" } }
                    div { class: "chart-placeholder", "Chart coming soon" }
                }
                div { class: "card",
                    div { class: "card-header", h2 { "Recent Activity" } }
                    ul { class: "activity-list",
                        for (what, when) in RECENT_ACTIVITY {
                            li { class: "activity-item", key: "{what}",
                                span { "{what}" }
                                span { class: "text-muted", "{when}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
