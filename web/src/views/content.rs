use dioxus::prelude::*;
use jiff::civil::date;
use types::records::{Post, PostBody};
use types::{DEFAULT_PAGE_SIZE, list};

use crate::Route;

use super::components::{ConfirmDeleteModal, Pager, SearchBox};

#[component]
pub fn ContentList() -> Element {
    let posts = use_signal(sample_posts);
    let query = use_signal(String::new);
    let page = use_signal(|| 1usize);

    let view = use_memo(move || {
        list::search(
            posts.read().as_slice(),
            query.read().as_str(),
            *page.read(),
            DEFAULT_PAGE_SIZE,
        )
    });

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Content" }
                    p { class: "page-subtitle", "Published posts." }
                }
            }

            SearchBox { query, page, placeholder: "Search posts by title or author..." }

            if view().is_empty() {
                div { class: "empty-state", "No posts found matching your search." }
            } else {
                div { class: "post-list",
                    for post in view().rows {
                        div { class: "card post-card", key: "{post.id}",
                            h2 { class: "post-title", "{post.title}" }
                            p { class: "post-description", "{post.description}" }
                            div { class: "post-footer",
                                span { class: "badge badge-author", "@{post.author}" }
                                Link {
                                    to: Route::ContentDetail { id: post.id },
                                    class: "btn btn-primary",
                                    "View Details"
                                }
                            }
                        }
                    }
                }
            }

            if view().total_pages > 1 {
                Pager { page, current: view().page, total_pages: view().total_pages }
            }
        }
    }
}

#[component]
pub fn ContentDetail(id: u32) -> Element {
    let mut post = use_signal(move || sample_post_bodies().into_iter().find(|p| p.id == id));
    let mut show_edit = use_signal(|| false);
    let mut show_delete_confirm = use_signal(|| false);

    let Some(current) = post() else {
        return rsx! {
            div { class: "empty-state",
                h1 { "Post Not Found" }
                p { "The post you are looking for does not exist." }
                Link { to: Route::ContentList {}, class: "btn btn-primary", "Back to Posts" }
            }
        };
    };

    rsx! {
        div {
            Link { to: Route::ContentList {}, class: "back-link", "← Back to Posts" }

            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "{current.title}" }
                    p { class: "page-subtitle",
                        "By {current.author} · Published on {current.published}"
                    }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| show_edit.set(true),
                        "Edit"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| show_delete_confirm.set(true),
                        "Delete"
                    }
                }
            }

            div { class: "card",
                div { class: "card-body post-content",
                    for paragraph in current.content.split("\n\n") {
                        p { "{paragraph}" }
                    }
                }
            }
        }

        if *show_edit.read() {
            EditPostModal {
                post: current.clone(),
                on_close: move |_| show_edit.set(false),
                on_saved: move |updated| {
                    post.set(Some(updated));
                    show_edit.set(false);
                },
            }
        }

        if *show_delete_confirm.read() {
            ConfirmDeleteModal {
                title: "Delete Post",
                subject: current.title.clone(),
                busy: false,
                on_close: move |_| show_delete_confirm.set(false),
                on_confirm: move |_| {
                    // The sample set is view-local, so deleting just leaves
                    // the detail page.
                    navigator().replace(Route::ContentList {});
                },
            }
        }
    }
}

#[component]
fn EditPostModal(
    post: PostBody,
    on_close: EventHandler<()>,
    on_saved: EventHandler<PostBody>,
) -> Element {
    let mut title = use_signal(|| post.title.clone());
    let mut content = use_signal(|| post.content.clone());
    let mut author = use_signal(|| post.author.clone());

    let original = post.clone();
    let can_submit = !title.read().is_empty() && !author.read().is_empty();

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "Edit Post" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "post_title", "Title" }
                        input {
                            id: "post_title",
                            class: "form-input",
                            r#type: "text",
                            value: "{title}",
                            oninput: move |e| title.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "post_author", "Author" }
                        input {
                            id: "post_author",
                            class: "form-input",
                            r#type: "text",
                            value: "{author}",
                            oninput: move |e| author.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "post_content", "Content" }
                        textarea {
                            id: "post_content",
                            class: "form-input form-textarea",
                            value: "{content}",
                            oninput: move |e| content.set(e.value()),
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
                        disabled: !can_submit,
                        onclick: move |_| {
                            on_saved.call(PostBody {
                                title: title.read().clone(),
                                content: content.read().clone(),
                                author: author.read().clone(),
                                ..original.clone()
                            });
                        },
                        "Save Changes"
                    }
                }
            }
        }
    }
}

fn sample_posts() -> Vec<Post> {
    let post = |id, title: &str, description: &str, author: &str| Post {
        id,
        title: title.into(),
        description: description.into(),
        author: author.into(),
    };
    vec![
        post(
            1,
            "React Mbinu Bora",
            "Jifunze njia bora za kupanga programu za React",
            "Juma_Kilonzo",
        ),
        post(
            2,
            "Mwongozo wa TailwindCSS",
            "Jua kubuni miundo inayobadilika na Tailwind",
            "Amina_Suleiman",
        ),
        post(
            3,
            "Mafunzo ya Kusanidi Vite",
            "Anzisha haraka na Vite na React",
            "Kwame_Osei",
        ),
        post(
            4,
            "Usimamizi wa Hali",
            "Kulinganisha Redux dhidi ya Context API",
            "Fatima_Njoroge",
        ),
        post(
            5,
            "Vidokezo vya Utendaji",
            "Boresha programu zako za React",
            "Chike_Obi",
        ),
        post(
            6,
            "Uchunguzi wa Hooks",
            "Kuelewa Hooks za React",
            "Zawadi_Mwangi",
        ),
        post(
            7,
            "CSS katika JS",
            "Vipengele vya Styled dhidi ya Emotion",
            "Kofi_Adu",
        ),
        post(
            8,
            "Kupima React",
            "Upimaji wa kitengo na Jest",
            "Nia_Dlamini",
        ),
    ]
}

fn sample_post_bodies() -> Vec<PostBody> {
    vec![PostBody {
        id: 1,
        title: "Introduction to React Hooks".into(),
        content: "React Hooks revolutionized the way we write React components by allowing us to use state and other React features without writing a class component.\n\nIntroduced in React 16.8, Hooks provide a more direct API to the React concepts you already know: props, state, context, refs, and lifecycle.\n\nBy using Hooks, developers can write more concise and readable code, reducing the complexity of component logic.".into(),
        author: "Jane Doe".into(),
        published: date(2024, 3, 5),
    }]
}
