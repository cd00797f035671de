use dioxus::prelude::*;

use crate::components::{NoticeBanner, ThemeToggle};
use crate::core::remote::{HttpRemote, RemoteDataService};
use crate::core::session;
use crate::core::state::{AdminFetch, AppEvent, AppState};

#[component]
pub fn Login() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let remote = use_context::<HttpRemote>();

    let on_submit = move |_| {
        let email = state.read().field("email").to_string();
        let password = state.read().field("password").to_string();
        if email.is_empty() || password.is_empty() {
            return;
        }
        let token = state.write().issue_token();
        let remote = remote.clone();
        spawn(async move {
            match session::authenticate(&remote, &email, &password).await {
                Ok(authenticated) => {
                    state.write().apply(AppEvent::LoginSucceeded {
                        token,
                        session: authenticated,
                    });
                    // Admin logins queue the user-list fetch; run it now so it
                    // fires exactly once per authentication.
                    if state.read().admin_fetch == AdminFetch::Queued {
                        let fetch_token = state.write().issue_token();
                        state
                            .write()
                            .apply(AppEvent::AdminUsersRequested { token: fetch_token });
                        match remote.list_users().await {
                            Ok(users) => state.write().apply(AppEvent::AdminUsersLoaded {
                                token: fetch_token,
                                users,
                            }),
                            Err(_) => state
                                .write()
                                .apply(AppEvent::AdminUsersFailed { token: fetch_token }),
                        }
                    }
                }
                Err(_) => state.write().apply(AppEvent::LoginFailed { token }),
            }
        });
    };

    rsx! {
        section { class: "auth-screen",
            div { class: "auth-card",
                ThemeToggle {}
                h1 { class: "auth-card__title", "🔐 Login" }
                NoticeBanner {}
                input {
                    class: "field",
                    name: "email",
                    placeholder: "Email",
                    value: "{state.read().field(\"email\")}",
                    oninput: move |evt| state.write().apply(AppEvent::FieldChanged {
                        field: "email".to_string(),
                        value: evt.value(),
                    }),
                }
                input {
                    class: "field",
                    name: "password",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{state.read().field(\"password\")}",
                    oninput: move |evt| state.write().apply(AppEvent::FieldChanged {
                        field: "password".to_string(),
                        value: evt.value(),
                    }),
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: on_submit,
                    "Authenticate"
                }
                div { class: "auth-card__links",
                    button {
                        r#type: "button",
                        class: "button button--link",
                        onclick: move |_| state.write().apply(AppEvent::GoToSignup),
                        "Create account"
                    }
                    button {
                        r#type: "button",
                        class: "button button--link",
                        onclick: move |_| state.write().apply(AppEvent::BackToWelcome),
                        "Back"
                    }
                }
            }
        }
    }
}
