use dioxus::prelude::*;

use crate::core::remote::HttpRemote;
use crate::core::session::{self, ProfileEdit};
use crate::core::state::{AppEvent, AppState};

/// Profile editor overlay. The generic form bag carries either detail fields
/// (name/phone/institute) or a password pair; filling in either password
/// field selects the password path, which is validated locally and never
/// leaves this client.
#[component]
pub fn ProfileOverlay() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let remote = use_context::<HttpRemote>();

    let email = state
        .read()
        .session
        .as_ref()
        .map(|session| session.email.clone())
        .unwrap_or_default();

    let on_save = move |_| {
        let remote = remote.clone();
        spawn(async move {
            let (edit, session_copy) = {
                let current = state.read();
                let new_password = current.field("new_password").to_string();
                let confirm_password = current.field("confirm_password").to_string();
                let edit = if !new_password.is_empty() || !confirm_password.is_empty() {
                    ProfileEdit::PasswordChange {
                        new_password,
                        confirm_password,
                    }
                } else {
                    ProfileEdit::Details {
                        name: current.field("name").to_string(),
                        phone: current.field("phone").to_string(),
                        institute: current.field("institute").to_string(),
                    }
                };
                (edit, current.session.clone())
            };
            let Some(mut session_copy) = session_copy else {
                return;
            };
            match session::save_profile(&remote, &mut session_copy, edit.clone()).await {
                Ok(()) => {
                    let event = match edit {
                        ProfileEdit::PasswordChange { .. } => AppEvent::PasswordChangeAccepted,
                        ProfileEdit::Details {
                            name,
                            phone,
                            institute,
                        } => AppEvent::ProfileSaved {
                            name,
                            phone,
                            institute,
                        },
                    };
                    state.write().apply(event);
                }
                Err(error) => state.write().apply(AppEvent::ProfileRejected { error }),
            }
        });
    };

    let text_field = |field: &'static str, placeholder: &'static str| {
        rsx! {
            input {
                class: "field",
                name: field,
                placeholder,
                value: "{state.read().field(field)}",
                oninput: move |evt| state.write().apply(AppEvent::FieldChanged {
                    field: field.to_string(),
                    value: evt.value(),
                }),
            }
        }
    };

    rsx! {
        div { class: "overlay",
            div { class: "overlay__card",
                div { class: "overlay__header",
                    h2 { "👤 Edit profile" }
                    button {
                        r#type: "button",
                        class: "overlay__close",
                        onclick: move |_| state.write().apply(AppEvent::CloseProfileEdit),
                        "✕"
                    }
                }

                input { class: "field", disabled: true, value: "{email}" }
                {text_field("name", "Name")}
                {text_field("phone", "Phone")}
                {text_field("institute", "Institute / company")}

                h3 { class: "overlay__section", "Change password" }
                input {
                    class: "field",
                    name: "new_password",
                    r#type: "password",
                    placeholder: "New password",
                    value: "{state.read().field(\"new_password\")}",
                    oninput: move |evt| state.write().apply(AppEvent::FieldChanged {
                        field: "new_password".to_string(),
                        value: evt.value(),
                    }),
                }
                input {
                    class: "field",
                    name: "confirm_password",
                    r#type: "password",
                    placeholder: "Confirm new password",
                    value: "{state.read().field(\"confirm_password\")}",
                    oninput: move |evt| state.write().apply(AppEvent::FieldChanged {
                        field: "confirm_password".to_string(),
                        value: evt.value(),
                    }),
                }

                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: on_save,
                    "Save"
                }
            }
        }
    }
}
