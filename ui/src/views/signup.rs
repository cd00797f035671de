use dioxus::prelude::*;

use crate::components::{NoticeBanner, ThemeToggle};
use crate::core::remote::{HttpRemote, SignupRequest};
use crate::core::session;
use crate::core::state::{AppEvent, AppState};

const FIELDS: [(&str, &str, bool); 5] = [
    ("name", "Full name", false),
    ("email", "Email", false),
    ("password", "Set password", true),
    ("phone", "Phone (optional)", false),
    ("institute", "Institute / company (optional)", false),
];

#[component]
pub fn Signup() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let remote = use_context::<HttpRemote>();

    let on_submit = move |_| {
        let request = {
            let current = state.read();
            let optional = |field: &str| {
                let value = current.field(field);
                (!value.is_empty()).then(|| value.to_string())
            };
            SignupRequest {
                name: current.field("name").to_string(),
                email: current.field("email").to_string(),
                password: current.field("password").to_string(),
                phone: optional("phone"),
                institute: optional("institute"),
            }
        };
        if request.name.is_empty() || request.email.is_empty() || request.password.is_empty() {
            return;
        }
        let token = state.write().issue_token();
        let remote = remote.clone();
        spawn(async move {
            match session::register(&remote, &request).await {
                Ok(()) => state.write().apply(AppEvent::SignupSucceeded { token }),
                Err(_) => state.write().apply(AppEvent::SignupFailed { token }),
            }
        });
    };

    rsx! {
        section { class: "auth-screen",
            div { class: "auth-card",
                ThemeToggle {}
                h1 { class: "auth-card__title", "📝 Create Account" }
                NoticeBanner {}
                for (field, placeholder, secret) in FIELDS {
                    input {
                        key: "{field}",
                        class: "field",
                        name: field,
                        r#type: if secret { "password" } else { "text" },
                        placeholder,
                        value: "{state.read().field(field)}",
                        oninput: move |evt| state.write().apply(AppEvent::FieldChanged {
                            field: field.to_string(),
                            value: evt.value(),
                        }),
                    }
                }
                button {
                    r#type: "button",
                    class: "button button--primary button--confirm",
                    onclick: on_submit,
                    "Register User"
                }
                button {
                    r#type: "button",
                    class: "button button--link",
                    onclick: move |_| state.write().apply(AppEvent::GoToLogin),
                    "Already have an account? Login"
                }
            }
        }
    }
}
