use base64::prelude::*;
use dioxus::document::eval;
use dioxus::prelude::*;
use jiff::civil::{Date, date};
use types::Searchable;
use types::list::{self, PageView};
use types::records::{Category, ReportKind, ReportRow, SaleRow, SystemEventRow, UserActivityRow};

use crate::use_error;

use super::components::{Pager, SearchBox};

const REPORTS_PAGE_SIZE: usize = 5;

#[component]
pub fn Reports() -> Element {
    let mut kind = use_signal(|| ReportKind::UserActivity);
    let query = use_signal(String::new);
    let mut page = use_signal(|| 1usize);

    // Same derivation for all three datasets; only the row type differs.
    // Re-derived on every render, as elsewhere.
    let RenderedReport {
        cards,
        page: shown_page,
        total_pages,
    } = match *kind.read() {
        ReportKind::UserActivity => render_report(
            &sample_user_activity(),
            query.read().as_str(),
            *page.read(),
        ),
        ReportKind::Sales => render_report(&sample_sales(), query.read().as_str(), *page.read()),
        ReportKind::SystemEvents => {
            render_report(&sample_system_events(), query.read().as_str(), *page.read())
        }
    };

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Reports" }
                    p { class: "page-subtitle", "Sample report datasets and backend document export." }
                }
            }

            div { class: "toolbar",
                select {
                    class: "form-input",
                    value: "{kind.read().key()}",
                    onchange: move |e| {
                        if let Some(parsed) = ReportKind::parse(&e.value()) {
                            kind.set(parsed);
                            page.set(1);
                        }
                    },
                    for option_kind in ReportKind::ALL {
                        option { value: "{option_kind.key()}", "{option_kind.label()}" }
                    }
                }
                SearchBox { query, page, placeholder: "Search report..." }
            }

            if cards.is_empty() {
                div { class: "empty-state", "No report rows match your search." }
            } else {
                div { class: "report-grid",
                    for card in cards {
                        {card}
                    }
                }
            }
            Pager { page, current: shown_page, total_pages }

            DownloadReportCard {}
        }
    }
}

struct RenderedReport {
    cards: Vec<Element>,
    page: usize,
    total_pages: usize,
}

fn render_report<T: ReportRow + Searchable + Clone>(
    items: &[T],
    query: &str,
    page: usize,
) -> RenderedReport {
    let view: PageView<T> = list::search(items, query, page, REPORTS_PAGE_SIZE);

    let cards = view
        .rows
        .iter()
        .map(|row| {
            rsx! {
                div { class: "report-card",
                    for (label, value) in row.fields() {
                        p { class: "report-field",
                            strong { "{label}: " }
                            "{value}"
                        }
                    }
                }
            }
        })
        .collect();

    RenderedReport {
        cards,
        page: view.page,
        total_pages: view.total_pages,
    }
}

/// Date-range export of the backend-rendered report document for one shop
/// category. The bytes come back through the server function and are fed
/// to the browser as a download; no document is generated client-side.
#[component]
fn DownloadReportCard() -> Element {
    let mut error_state = use_error();
    let mut category = use_signal(|| Category::AnimalFeeding);
    let mut start = use_signal(String::new);
    let mut end = use_signal(String::new);
    let mut downloading = use_signal(|| false);

    let range = use_memo(move || parse_range(start.read().as_str(), end.read().as_str()));
    let can_download = range.read().is_ok();

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Export Report" }
            }
            div { class: "card-body",
                div { class: "toolbar",
                    select {
                        class: "form-input",
                        value: "{category.read().slug()}",
                        onchange: move |e| {
                            if let Some(parsed) = Category::parse(&e.value()) {
                                category.set(parsed);
                            }
                        },
                        for option_category in Category::ALL {
                            option { value: "{option_category.slug()}", "{option_category.label()}" }
                        }
                    }
                    input {
                        class: "form-input",
                        r#type: "date",
                        value: "{start}",
                        oninput: move |e| start.set(e.value()),
                    }
                    input {
                        class: "form-input",
                        r#type: "date",
                        value: "{end}",
                        oninput: move |e| end.set(e.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: !can_download || *downloading.read(),
                        onclick: move |_| {
                            let Ok((start, end)) = *range.read() else {
                                return;
                            };
                            let category = *category.read();
                            spawn(async move {
                                downloading.set(true);
                                match api::report_document(category, start, end).await {
                                    Ok(bytes) => {
                                        let name = format!("{}-report.pdf", category.slug());
                                        if let Err(error) = save_bytes(&name, &bytes).await {
                                            error_state
                                                .set(format!("saving the report failed: {error}"));
                                        }
                                    }
                                    Err(e) => error_state.set_server_error(&e),
                                }
                                downloading.set(false);
                            });
                        },
                        if *downloading.read() { "Exporting..." } else { "Export PDF" }
                    }
                }
                if let Err(issue) = *range.read() {
                    p { class: "text-muted", "{issue}" }
                }
            }
        }
    }
}

fn parse_range(start: &str, end: &str) -> Result<(Date, Date), &'static str> {
    if start.is_empty() || end.is_empty() {
        return Err("Pick a start and end date to export.");
    }
    let start: Date = start.parse().map_err(|_| "Invalid start date.")?;
    let end: Date = end.parse().map_err(|_| "Invalid end date.")?;
    if start > end {
        return Err("Start date must not be after the end date.");
    }

    Ok((start, end))
}

/// Hand the document bytes to the browser as a file download.
async fn save_bytes(name: &str, bytes: &[u8]) -> Result<(), dioxus::document::EvalError> {
    let b64 = BASE64_STANDARD.encode(bytes);
    eval(&download_snippet(name, &b64)).await?;
    Ok(())
}

fn download_snippet(name: &str, b64: &str) -> String {
    format!(
        r#"
        const a = document.createElement("a");
        a.href = "data:application/octet-stream;base64,{b64}";
        a.download = "{name}";
        document.body.appendChild(a);
        a.click();
        a.remove();
        "#
    )
}

fn sample_user_activity() -> Vec<UserActivityRow> {
    let row = |id, name: &str, action: &str, d| UserActivityRow {
        id,
        name: name.into(),
        action: action.into(),
        date: d,
    };
    vec![
        row(1, "John Doe", "Logged in", date(2025, 1, 29)),
        row(2, "Jane Smith", "Updated profile", date(2025, 1, 28)),
        row(3, "Alice Brown", "Logged out", date(2025, 1, 27)),
        row(4, "Tommy Green", "Changed password", date(2025, 1, 26)),
        row(5, "Sara Lee", "Logged in", date(2025, 1, 25)),
        row(6, "Max Adams", "Updated email", date(2025, 1, 24)),
        row(7, "Ella White", "Deleted account", date(2025, 1, 23)),
    ]
}

fn sample_sales() -> Vec<SaleRow> {
    let row = |id, item: &str, amount_usd, d| SaleRow {
        id,
        item: item.into(),
        amount_usd,
        date: d,
    };
    vec![
        row(1, "Laptop", 1200, date(2025, 1, 25)),
        row(2, "Phone", 800, date(2025, 1, 24)),
        row(3, "Headphones", 200, date(2025, 1, 22)),
        row(4, "Tablet", 400, date(2025, 1, 21)),
        row(5, "Smartwatch", 250, date(2025, 1, 20)),
        row(6, "Camera", 1500, date(2025, 1, 19)),
    ]
}

fn sample_system_events() -> Vec<SystemEventRow> {
    let row = |id, event: &str, status: &str, d| SystemEventRow {
        id,
        event: event.into(),
        status: status.into(),
        date: d,
    };
    vec![
        row(1, "System Rebooted", "Success", date(2025, 1, 26)),
        row(2, "Database Backup", "Completed", date(2025, 1, 23)),
        row(3, "User Login Failed", "Failed", date(2025, 1, 22)),
        row(4, "Security Patch Installed", "Success", date(2025, 1, 21)),
        row(5, "Server Shutdown", "Success", date(2025, 1, 20)),
        row(6, "Password Reset", "Completed", date(2025, 1, 19)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_requires_both_dates_in_order() {
        assert!(parse_range("", "2025-01-31").is_err());
        assert!(parse_range("2025-01-02", "2025-01-01").is_err());
        assert!(parse_range("2025-13-01", "2025-12-31").is_err());

        let (start, end) = parse_range("2025-01-01", "2025-01-31").unwrap();
        assert_eq!(start, date(2025, 1, 1));
        assert_eq!(end, date(2025, 1, 31));
    }

    #[test]
    fn download_snippet_embeds_name_and_payload() {
        let js = download_snippet("godown-report.pdf", "QUJD");
        assert!(js.contains(r#"a.download = "godown-report.pdf";"#));
        assert!(js.contains("data:application/octet-stream;base64,QUJD"));
    }

    #[test]
    fn sales_search_spans_pages() {
        // Six sales rows at page size five: searching narrows to one page.
        let view = list::search(&sample_sales(), "camera", 2, REPORTS_PAGE_SIZE);
        assert_eq!(view.total_rows, 1);
        assert_eq!(view.page, 1);
        assert_eq!(view.rows[0].item, "Camera");
    }
}
