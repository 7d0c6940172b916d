use dioxus::prelude::*;
use jiff::civil::date;
use types::records::AuditLog;
use types::{DEFAULT_PAGE_SIZE, list};

use super::components::{Pager, SearchBox};

#[component]
pub fn AuditLogs() -> Element {
    let mut logs = use_signal(Vec::<AuditLog>::new);
    let mut loading = use_signal(|| true);
    let query = use_signal(String::new);
    let page = use_signal(|| 1usize);

    // No audit endpoint exists yet; the view is wired as if one did, with
    // a loading state and a snapshot loaded on mount.
    use_effect(move || {
        spawn(async move {
            loading.set(true);
            logs.set(sample_logs());
            loading.set(false);
        });
    });

    let view = use_memo(move || {
        list::search(
            logs.read().as_slice(),
            query.read().as_str(),
            *page.read(),
            DEFAULT_PAGE_SIZE,
        )
    });

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Audit Logs" }
                    p { class: "page-subtitle", "Administrative actions, newest first." }
                }
            }

            SearchBox { query, page, placeholder: "Search by user or action" }

            if *loading.read() {
                div { class: "loading", "Loading logs..." }
            } else {
                div { class: "card",
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "User" }
                                    th { "Action" }
                                    th { "Date" }
                                }
                            }
                            tbody {
                                for log in view().rows {
                                    tr { key: "{log.id}",
                                        td { "{log.user}" }
                                        td { "{log.action}" }
                                        td { {log.at.strftime("%b %d, %Y %H:%M").to_string()} }
                                    }
                                }
                            }
                        }
                        if view().is_empty() {
                            p { class: "empty-state", "No logs found" }
                        }
                    }
                    Pager { page, current: view().page, total_pages: view().total_pages }
                }
            }
        }
    }
}

fn sample_logs() -> Vec<AuditLog> {
    let log = |id, user: &str, action: &str, at| AuditLog {
        id,
        user: user.into(),
        action: action.into(),
        at,
    };
    vec![
        log(1, "admin", "Logged in", date(2025, 1, 28).at(9, 0, 0, 0)),
        log(2, "johndoe", "Updated profile", date(2025, 1, 27).at(12, 15, 0, 0)),
        log(3, "janedoe", "Deleted post", date(2025, 1, 25).at(15, 30, 0, 0)),
        log(4, "admin", "Created new user", date(2025, 1, 24).at(8, 0, 0, 0)),
        log(5, "mwaka", "Exported report", date(2025, 1, 23).at(16, 45, 0, 0)),
        log(6, "admin", "Changed user role", date(2025, 1, 22).at(11, 20, 0, 0)),
    ]
}
