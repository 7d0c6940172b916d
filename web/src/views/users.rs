use dioxus::prelude::*;
use types::records::{Category, Role, User};
use types::{DEFAULT_PAGE_SIZE, list};

use crate::{Route, use_error};

use super::components::{ConfirmDeleteModal, Pager, SearchBox};

#[component]
pub fn Users() -> Element {
    let mut users = use_signal(Vec::<User>::new);
    let mut loading = use_signal(|| true);
    let mut error_state = use_error();
    let query = use_signal(String::new);
    let page = use_signal(|| 1usize);
    let mut edited = use_signal(|| None::<User>);
    let mut pending_delete = use_signal(|| None::<User>);

    // Fetch on mount; a fresh fetch replaces the whole snapshot.
    use_effect(move || {
        spawn(async move {
            loading.set(true);
            match api::list_users().await {
                Ok(fetched) => users.set(sorted(fetched)),
                Err(e) => error_state.set_server_error(&e),
            }
            loading.set(false);
        });
    });

    let refresh = move || {
        spawn(async move {
            if let Ok(fetched) = api::list_users().await {
                users.set(sorted(fetched));
            }
        });
    };

    let view = use_memo(move || {
        list::search(
            users.read().as_slice(),
            query.read().as_str(),
            *page.read(),
            DEFAULT_PAGE_SIZE,
        )
    });

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Users" }
                    p { class: "page-subtitle", "Accounts registered on the shop backend." }
                }
                div { class: "page-header-actions",
                    Link {
                        to: Route::AddUser {},
                        class: "btn btn-primary",
                        "Add New User"
                    }
                }
            }

            SearchBox { query, page, placeholder: "Search users..." }

            if *loading.read() {
                div { class: "loading", "Loading users..." }
            } else {
                div { class: "card",
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "Email" }
                                    th { "Role" }
                                    th { "Category" }
                                    th { class: "cell-actions", "Actions" }
                                }
                            }
                            tbody {
                                for user in view().rows {
                                    UserRow {
                                        key: "{user.id}",
                                        user: user.clone(),
                                        on_edit: move |u| edited.set(Some(u)),
                                        on_delete: move |u| pending_delete.set(Some(u)),
                                    }
                                }
                            }
                        }
                        if view().is_empty() {
                            p { class: "empty-state", "No users found" }
                        }
                    }
                    Pager { page, current: view().page, total_pages: view().total_pages }
                }
            }
        }

        if let Some(user) = edited() {
            EditUserModal {
                user: user.clone(),
                on_close: move |_| edited.set(None),
                on_saved: move |_| {
                    edited.set(None);
                    refresh();
                },
            }
        }

        if let Some(user) = pending_delete() {
            DeleteUserFlow {
                user: user.clone(),
                on_close: move |_| pending_delete.set(None),
                on_deleted: move |_| {
                    pending_delete.set(None);
                    refresh();
                },
            }
        }
    }
}

fn sorted(mut users: Vec<User>) -> Vec<User> {
    users.sort_unstable_by(|a, b| a.email.cmp(&b.email));
    users
}

#[component]
fn UserRow(user: User, on_edit: EventHandler<User>, on_delete: EventHandler<User>) -> Element {
    let edit_user = user.clone();
    let delete_user = user.clone();

    rsx! {
        tr {
            td { "{user.email}" }
            td {
                span { class: "badge badge-role", "{user.role.label()}" }
            }
            td { "{user.category.label()}" }
            td { class: "cell-actions",
                button {
                    class: "btn btn-link",
                    onclick: move |_| on_edit.call(edit_user.clone()),
                    "Edit"
                }
                button {
                    class: "btn btn-link btn-link-danger",
                    onclick: move |_| on_delete.call(delete_user.clone()),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn EditUserModal(user: User, on_close: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let mut error_state = use_error();
    let mut email = use_signal(|| user.email.clone());
    let mut role = use_signal(|| user.role);
    let mut category = use_signal(|| user.category);
    let mut saving = use_signal(|| false);

    let user_id = user.id.clone();
    let can_submit = !email.read().is_empty();

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "Edit User" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "edit_email", "Email" }
                        input {
                            id: "edit_email",
                            class: "form-input",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "edit_role", "Role" }
                        select {
                            id: "edit_role",
                            class: "form-input",
                            value: "{role.read().as_str()}",
                            onchange: move |e| {
                                if let Some(parsed) = Role::parse(&e.value()) {
                                    role.set(parsed);
                                }
                            },
                            for option_role in Role::ALL {
                                option { value: "{option_role.as_str()}", "{option_role.label()}" }
                            }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "edit_category", "Category" }
                        select {
                            id: "edit_category",
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
                    }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: !can_submit || *saving.read(),
                        onclick: move |_| {
                            let user_id = user_id.clone();
                            let email = email.read().clone();
                            let role = *role.read();
                            let category = *category.read();
                            spawn(async move {
                                saving.set(true);
                                match api::update_user(user_id, email, role, category).await {
                                    Ok(()) => on_saved.call(()),
                                    Err(e) => error_state.set_server_error(&e),
                                }
                                saving.set(false);
                            });
                        },
                        if *saving.read() { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}

#[component]
fn DeleteUserFlow(user: User, on_close: EventHandler<()>, on_deleted: EventHandler<()>) -> Element {
    let mut error_state = use_error();
    let mut deleting = use_signal(|| false);

    let user_id = user.id.clone();

    rsx! {
        ConfirmDeleteModal {
            title: "Delete User",
            subject: user.email.clone(),
            busy: *deleting.read(),
            on_close: move |_| on_close.call(()),
            on_confirm: move |_| {
                let user_id = user_id.clone();
                spawn(async move {
                    deleting.set(true);
                    match api::delete_user(user_id).await {
                        Ok(()) => on_deleted.call(()),
                        Err(e) => error_state.set_server_error(&e),
                    }
                    deleting.set(false);
                });
            },
        }
    }
}
