use dioxus::prelude::*;

use crate::components::{HistoryOverlay, MenuPanel, NoticeBanner, ProfileOverlay};
use crate::core::state::{AdminFetch, AppEvent, AppState};

#[component]
pub fn Admin() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    let overlays = state.read().overlays;
    let operator = state
        .read()
        .session
        .as_ref()
        .map(|session| session.name.clone())
        .unwrap_or_default();
    let fetch = state.read().admin_fetch;
    let users = state.read().admin_users.clone();

    let status_line = match fetch {
        AdminFetch::Idle | AdminFetch::Queued | AdminFetch::Pending(_) => "Loading users…",
        AdminFetch::Loaded => "Registered users",
        AdminFetch::Failed => "User list unavailable",
    };

    rsx! {
        section { class: "console-shell console-shell--admin",
            header { class: "console-header",
                div {
                    h1 { "Admin Panel: {operator}" }
                    p { class: "console-status", "{status_line}" }
                }
                button {
                    r#type: "button",
                    class: "menu-button",
                    onclick: move |_| state.write().apply(AppEvent::ToggleMenu),
                    "☰"
                }
            }

            if overlays.menu_open {
                MenuPanel {}
            }

            NoticeBanner {}

            if users.is_empty() {
                p { class: "placeholder",
                    match fetch {
                        AdminFetch::Loaded => "No users registered yet.",
                        AdminFetch::Failed => "Couldn't load the user list.",
                        _ => "Fetching the user list…",
                    }
                }
            } else {
                table { class: "user-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Institute" }
                            th { "Role" }
                        }
                    }
                    tbody {
                        for user in users.iter() {
                            tr { key: "{user.email}",
                                td { "{user.name}" }
                                td { "{user.email}" }
                                td { "{user.institute}" }
                                td { "{user.role:?}" }
                            }
                        }
                    }
                }
            }

            if overlays.history_open {
                HistoryOverlay {}
            }
            if overlays.profile_edit_open {
                ProfileOverlay {}
            }
        }
    }
}
