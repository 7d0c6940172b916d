use dioxus::prelude::*;

/// Local-only profile form. The shop backend has no profile endpoint, so
/// edits live in this view's state until one exists.
#[component]
pub fn Profile() -> Element {
    let mut name = use_signal(|| "Neema Lwena".to_string());
    let mut email = use_signal(|| "neema@dukani.co.tz".to_string());
    let mut password = use_signal(String::new);
    let mut saved = use_signal(|| false);

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Profile" }
                    p { class: "page-subtitle", "Your account settings." }
                }
            }

            if *saved.read() {
                div { class: "notice notice-success", "Profile updated." }
            }

            div { class: "card",
                form {
                    class: "card-body",
                    onsubmit: move |e| {
                        e.prevent_default();
                        password.set(String::new());
                        saved.set(true);
                    },
                    div { class: "form-group",
                        label { class: "form-label", r#for: "profile_name", "Name" }
                        input {
                            id: "profile_name",
                            class: "form-input",
                            r#type: "text",
                            value: "{name}",
                            oninput: move |e| {
                                name.set(e.value());
                                saved.set(false);
                            },
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "profile_email", "Email" }
                        input {
                            id: "profile_email",
                            class: "form-input",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| {
                                email.set(e.value());
                                saved.set(false);
                            },
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "profile_password", "New Password" }
                        input {
                            id: "profile_password",
                            class: "form-input",
                            r#type: "password",
                            placeholder: "Leave blank to keep current password",
                            value: "{password}",
                            oninput: move |e| {
                                password.set(e.value());
                                saved.set(false);
                            },
                        }
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Save Changes" }
                }
            }
        }
    }
}
