use dioxus::prelude::*;
use jiff::civil::date;
use types::records::Message;
use types::{DEFAULT_PAGE_SIZE, list};

use crate::Route;

use super::components::Pager;

#[component]
pub fn Messages() -> Element {
    let mut messages = use_signal(sample_messages);
    let page = use_signal(|| 1usize);

    let view = use_memo(move || {
        list::search(messages.read().as_slice(), "", *page.read(), DEFAULT_PAGE_SIZE)
    });

    let mut toggle_read = move |id: u32| {
        if let Some(message) = messages.write().iter_mut().find(|m| m.id == id) {
            message.read = !message.read;
        }
    };
    let mut delete = move |id: u32| {
        messages.write().retain(|m| m.id != id);
    };

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Messages" }
                    p { class: "page-subtitle", "Support inbox." }
                }
            }

            div { class: "card",
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Subject" }
                                th { "Message" }
                                th { "Status" }
                                th { class: "cell-actions", "Actions" }
                            }
                        }
                        tbody {
                            for message in view().rows {
                                {
                                    let id = message.id;
                                    rsx! {
                                        tr { key: "{id}",
                                            td {
                                                Link { to: Route::MessageDetail { id }, "{message.name}" }
                                            }
                                            td { "{message.subject}" }
                                            td { class: "cell-truncate", "{message.body}" }
                                            td {
                                                span {
                                                    class: if message.read { "badge badge-read" } else { "badge badge-unread" },
                                                    if message.read { "Read" } else { "Unread" }
                                                }
                                            }
                                            td { class: "cell-actions",
                                                button {
                                                    class: "btn btn-link",
                                                    onclick: move |_| toggle_read(id),
                                                    if message.read { "Mark as Unread" } else { "Mark as Read" }
                                                }
                                                button {
                                                    class: "btn btn-link btn-link-danger",
                                                    onclick: move |_| delete(id),
                                                    "Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    if view().is_empty() {
                        p { class: "empty-state", "No messages" }
                    }
                }
                Pager { page, current: view().page, total_pages: view().total_pages }
            }
        }
    }
}

#[component]
pub fn MessageDetail(id: u32) -> Element {
    // Each view owns its own snapshot; the detail page re-derives from the
    // sample set rather than sharing state with the list.
    let message = use_memo(move || sample_messages().into_iter().find(|m| m.id == id));

    rsx! {
        div {
            Link { to: Route::Messages {}, class: "back-link", "← Back to Messages" }

            if let Some(message) = message() {
                div { class: "card",
                    div { class: "card-header",
                        h1 { class: "card-title", "{message.subject}" }
                    }
                    div { class: "card-body",
                        div { class: "form-group",
                            span { class: "form-label", "From" }
                            div { class: "form-value", {format!("{} <{}>", message.name, message.email)} }
                        }
                        div { class: "form-group",
                            span { class: "form-label", "Sent" }
                            div { class: "form-value",
                                {message.sent_at.strftime("%b %d, %Y %I:%M %p").to_string()}
                            }
                        }
                        div { class: "divider" }
                        p { "{message.body}" }
                    }
                }
            } else {
                div { class: "empty-state",
                    h1 { "Message Not Found" }
                    p { "The message you are looking for does not exist." }
                }
            }
        }
    }
}

fn sample_messages() -> Vec<Message> {
    let msg = |id, name: &str, email: &str, subject: &str, body: &str, sent_at, read| Message {
        id,
        name: name.into(),
        email: email.into(),
        subject: subject.into(),
        body: body.into(),
        sent_at,
        read,
    };
    vec![
        msg(
            1,
            "John Doe",
            "johndoe@example.com",
            "Issue with account",
            "I am unable to log in to my account. Please help!",
            date(2025, 1, 29).at(10, 30, 0, 0),
            false,
        ),
        msg(
            2,
            "Jane Smith",
            "janesmith@example.com",
            "Payment issue",
            "I was charged twice for the same subscription.",
            date(2025, 1, 28).at(16, 15, 0, 0),
            true,
        ),
        msg(
            3,
            "Sarah Lee",
            "sarahlee@example.com",
            "Refund request",
            "Can I get a refund for the extra charge?",
            date(2025, 1, 27).at(12, 0, 0, 0),
            false,
        ),
        msg(
            4,
            "Tom Brown",
            "tombrown@example.com",
            "Account blocked",
            "My account has been blocked. Please help me restore it.",
            date(2025, 1, 26).at(15, 40, 0, 0),
            true,
        ),
        msg(
            5,
            "Emma White",
            "emmawhite@example.com",
            "Login issues",
            "I am facing issues while logging in to my account.",
            date(2025, 1, 25).at(6, 30, 0, 0),
            false,
        ),
        msg(
            6,
            "Michael Mwinyi",
            "michaelmwinyi@example.com",
            "Swala la malipo",
            "Nimeshtukiwa kwa malipo mara mbili kwa ajili ya usajili moja.",
            date(2025, 3, 5).at(9, 0, 0, 0),
            false,
        ),
        msg(
            7,
            "Amina Hassan",
            "aminahassan@example.com",
            "Kizuizi cha akaunti",
            "Akaunti yangu imezuiwa. Tafadhali nisaidie kuirejesha.",
            date(2025, 3, 4).at(14, 0, 0, 0),
            false,
        ),
        msg(
            8,
            "Juma Ali",
            "jumaali@example.com",
            "Tatizo la kuingia",
            "Nina matatizo ya kuingia kwenye akaunti yangu.",
            date(2025, 3, 3).at(11, 45, 0, 0),
            true,
        ),
        msg(
            9,
            "Zawadi Ibrahim",
            "zawadiibrahim@example.com",
            "Ombi la kurejesha pesa",
            "Je, naweza kupata kurejeshewa pesa kwa malipo ya ziada?",
            date(2025, 3, 2).at(17, 30, 0, 0),
            false,
        ),
        msg(
            10,
            "Fatima Kazi",
            "fatimakazi@example.com",
            "Tatizo la akaunti",
            "Sijui kwa nini siwezi kuingia kwenye akaunti yangu.",
            date(2025, 3, 1).at(10, 0, 0, 0),
            true,
        ),
        msg(
            11,
            "Neema Joseph",
            "neemajoseph@example.com",
            "Order delay",
            "My hardware order has not arrived after two weeks.",
            date(2025, 2, 27).at(13, 10, 0, 0),
            false,
        ),
        msg(
            12,
            "Baraka Said",
            "barakasaid@example.com",
            "Invoice copy",
            "Please resend the invoice for my stationery order.",
            date(2025, 2, 26).at(8, 50, 0, 0),
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // Deleting the only rows of the last page must leave the view on a
    // page that exists, with the page number it reports matching it.
    #[test]
    fn deleting_the_last_page_falls_back_to_page_one() {
        let mut messages = sample_messages();
        assert_eq!(messages.len(), 12);

        let view = list::search(&messages, "", 2, DEFAULT_PAGE_SIZE);
        assert_eq!(view.rows.len(), 2);

        let doomed: Vec<u32> = view.rows.iter().map(|m| m.id).collect();
        messages.retain(|m| !doomed.contains(&m.id));

        let view = list::search(&messages, "", 2, DEFAULT_PAGE_SIZE);
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.rows.len(), 10);
    }
}
