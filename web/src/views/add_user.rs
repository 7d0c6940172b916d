use dioxus::prelude::*;
use types::records::{Category, Role};

use crate::{Route, use_error};

/// Create-account form posting to the backend signup endpoint. Field
/// validation happens client-side before the request; backend rejections
/// surface through the error banner.
#[component]
pub fn AddUser() -> Element {
    let mut error_state = use_error();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Employee);
    let mut category = use_signal(|| Category::AnimalFeeding);
    let mut email_error = use_signal(|| None::<&'static str>);
    let mut password_error = use_signal(|| None::<&'static str>);
    let mut creating = use_signal(|| false);

    let submit = move |_| {
        let email_value = email.read().clone();
        let password_value = password.read().clone();

        email_error.set(email_issue(&email_value));
        password_error.set(password_issue(&password_value));
        if email_error.read().is_some() || password_error.read().is_some() {
            return;
        }

        let role = *role.read();
        let category = *category.read();
        spawn(async move {
            creating.set(true);
            match api::create_user(email_value, password_value, role, category).await {
                Ok(()) => {
                    navigator().replace(Route::Users {});
                }
                Err(e) => error_state.set_server_error(&e),
            }
            creating.set(false);
        });
    };

    rsx! {
        div { class: "form-page",
            Link { to: Route::Users {}, class: "back-link", "← Back to Users" }

            div { class: "card",
                div { class: "card-header",
                    h1 { class: "card-title", "Add New User" }
                }
                div { class: "card-body",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Email Address *" }
                        input {
                            id: "email",
                            class: if email_error.read().is_some() { "form-input form-input-error" } else { "form-input" },
                            r#type: "email",
                            placeholder: "user@example.com",
                            value: "{email}",
                            oninput: move |e| {
                                email.set(e.value());
                                email_error.set(None);
                            },
                        }
                        if let Some(issue) = *email_error.read() {
                            p { class: "form-error", "{issue}" }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password *" }
                        input {
                            id: "password",
                            class: if password_error.read().is_some() { "form-input form-input-error" } else { "form-input" },
                            r#type: "password",
                            placeholder: "Create a strong password",
                            value: "{password}",
                            oninput: move |e| {
                                password.set(e.value());
                                password_error.set(None);
                            },
                        }
                        if let Some(issue) = *password_error.read() {
                            p { class: "form-error", "{issue}" }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "role", "Role" }
                        select {
                            id: "role",
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
                        label { class: "form-label", r#for: "category", "Category" }
                        select {
                            id: "category",
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
                    button {
                        class: "btn btn-primary btn-block",
                        disabled: *creating.read(),
                        onclick: submit,
                        if *creating.read() { "Creating User..." } else { "Create User" }
                    }
                }
            }
        }
    }
}

fn email_issue(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some("Email is required")
    } else if !looks_like_email(email) {
        Some("Please enter a valid email address")
    } else {
        None
    }
}

// Mirrors the usual \S+@\S+\.\S+ check: one @, a dot in the domain, no
// whitespace.
fn looks_like_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

fn password_issue(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required")
    } else if password.chars().count() < 6 {
        Some("Password must be at least 6 characters")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        for ok in ["user@example.com", "a.b@shop.co.tz", "x@y.z"] {
            assert!(looks_like_email(ok), "{ok} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "user", "user@", "@example.com", "a b@x.com", "a@b@c.d", "user@nodot"] {
            assert!(!looks_like_email(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn password_needs_six_characters() {
        assert_eq!(password_issue(""), Some("Password is required"));
        assert!(password_issue("12345").is_some());
        assert_eq!(password_issue("123456"), None);
    }
}
