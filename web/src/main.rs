use dioxus::prelude::*;

mod views;

use views::{
    AddUser, AuditLogs, ContentDetail, ContentList, MessageDetail, Messages, OrdersCost, Overview,
    Profile, Reports, Revenue, Users,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AdminLayout)]
        #[route("/")]
        Overview {},
        #[route("/users")]
        Users {},
        #[route("/users/create")]
        AddUser {},
        #[route("/reports")]
        Reports {},
        #[route("/revenue")]
        Revenue {},
        #[route("/orders-cost")]
        OrdersCost {},
        #[route("/messages")]
        Messages {},
        #[route("/messages/:id")]
        MessageDetail { id: u32 },
        #[route("/logs")]
        AuditLogs {},
        #[route("/contents")]
        ContentList {},
        #[route("/contents/:id")]
        ContentDetail { id: u32 },
        #[route("/profile")]
        Profile {},
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            let routes = server::init().await?;

            Ok(dioxus::server::router(App).merge(routes))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Dukani Admin" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    // Detail routes keep their parent list entry highlighted.
    let is_active = matches!(
        (&current_route, &to),
        (Route::Overview {}, Route::Overview {})
            | (Route::Users {}, Route::Users {})
            | (Route::AddUser {}, Route::Users {})
            | (Route::Reports {}, Route::Reports {})
            | (Route::Revenue {}, Route::Revenue {})
            | (Route::OrdersCost {}, Route::OrdersCost {})
            | (Route::Messages {}, Route::Messages {})
            | (Route::MessageDetail { .. }, Route::Messages {})
            | (Route::AuditLogs {}, Route::AuditLogs {})
            | (Route::ContentList {}, Route::ContentList {})
            | (Route::ContentDetail { .. }, Route::ContentList {})
            | (Route::Profile {}, Route::Profile {})
    );

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

/// Error surfaced in the banner. Server-side failures arrive with their
/// context chain already flattened into the message.
#[derive(Clone, Debug, Default)]
pub struct ErrorInfo {
    pub message: String,
}

impl ErrorInfo {
    pub fn from_server_error(err: &ServerFnError) -> Self {
        let message = match err {
            ServerFnError::ServerError { message, .. } => message.clone(),
            other => other.to_string(),
        };

        Self { message }
    }
}

/// Global error state - use `use_error()` to access
#[derive(Clone, Copy)]
pub struct ErrorState(Signal<Option<ErrorInfo>>);

impl ErrorState {
    pub fn set(&mut self, error: impl Into<String>) {
        self.0.set(Some(ErrorInfo {
            message: error.into(),
        }));
    }

    pub fn set_server_error(&mut self, err: &ServerFnError) {
        self.0.set(Some(ErrorInfo::from_server_error(err)));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

/// Get the global error state for setting/clearing errors
pub fn use_error() -> ErrorState {
    use_context::<ErrorState>()
}

#[component]
fn ErrorBanner() -> Element {
    let mut error_state = use_context::<ErrorState>();
    let error = error_state.0.read();

    if let Some(err) = error.as_ref() {
        rsx! {
            div { class: "error-banner",
                div { class: "error-banner-header",
                    span { class: "error-banner-message", "{err.message}" }
                    button {
                        class: "error-banner-close",
                        onclick: move |_| error_state.clear(),
                        "×"
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}

#[component]
fn AdminLayout() -> Element {
    use_context_provider(|| ErrorState(Signal::new(None)));

    rsx! {
        div { class: "app-layout",
            // Sidebar
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    span { class: "sidebar-logo", "Dukani" }
                }
                nav { class: "sidebar-nav",
                    NavLink { to: Route::Overview {}, "Overview" }
                    NavLink { to: Route::Users {}, "Users" }
                    NavLink { to: Route::Reports {}, "Reports" }
                    NavLink { to: Route::Revenue {}, "Revenue" }
                    NavLink { to: Route::OrdersCost {}, "Orders Cost" }
                    NavLink { to: Route::Messages {}, "Messages" }
                    NavLink { to: Route::AuditLogs {}, "Audit Logs" }
                    NavLink { to: Route::ContentList {}, "Content" }
                    NavLink { to: Route::Profile {}, "Profile" }
                }
            }
            // Main content
            main { class: "main-content",
                ErrorBanner {}
                Outlet::<Route> {}
            }
        }
    }
}
