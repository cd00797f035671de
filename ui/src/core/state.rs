//! Top-level view state machine.
//!
//! All screen selection, session lifetime, form-bag, and notice state is
//! owned by [`AppState`] and mutated only through [`AppState::apply`], so the
//! whole transition table is testable without a renderer. Async work (login,
//! signup, uploads, the admin user list) runs outside the reducer and
//! re-enters it as completion events carrying the [`RequestToken`] that was
//! issued when the request left; tokens that predate the last fence (logout
//! or navigation away from the issuing screen) are discarded, which is what
//! keeps a late response from mutating a state it no longer belongs to.

use std::collections::HashMap;

use crate::core::error::ConsoleError;
use crate::core::remote::UserRecord;
use crate::core::session::{Role, Session};
use crate::core::theme::Theme;

/// The single full-screen mode active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimaryView {
    #[default]
    Welcome,
    Login,
    Signup,
    Dashboard,
    Admin,
}

/// Modal surfaces layered over the primary view. Independent of the primary
/// view and of each other, except that the menu closes when an overlay is
/// opened from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlays {
    pub menu_open: bool,
    pub history_open: bool,
    pub profile_edit_open: bool,
    pub stats_expanded: bool,
}

/// Monotonic handle tying a completion event back to the request that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// The one user-facing notification slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Self::Info(text) | Self::Error(text) => text,
        }
    }
}

/// Lifecycle of the admin user-list fetch. `Queued` is set exactly once, by
/// the admin login transition; the view's effect turns it into `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminFetch {
    #[default]
    Idle,
    Queued,
    Pending(RequestToken),
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Welcome screen's "Initialize System".
    Launch,
    GoToLogin,
    GoToSignup,
    BackToWelcome,
    /// One keystroke into the active form's generic field bag.
    FieldChanged { field: String, value: String },

    LoginSucceeded { token: RequestToken, session: Session },
    LoginFailed { token: RequestToken },
    SignupSucceeded { token: RequestToken },
    SignupFailed { token: RequestToken },
    UploadFailed { token: RequestToken },

    AdminUsersRequested { token: RequestToken },
    AdminUsersLoaded { token: RequestToken, users: Vec<UserRecord> },
    AdminUsersFailed { token: RequestToken },

    ToggleMenu,
    OpenHistory,
    CloseHistory,
    OpenProfileEdit,
    CloseProfileEdit,
    ToggleStatsExpanded,
    ToggleTheme,

    ProfileSaved { name: String, phone: String, institute: String },
    ProfileRejected { error: ConsoleError },
    PasswordChangeAccepted,

    NoticePosted { notice: Notice },
    DismissNotice,
    Logout,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub view: PrimaryView,
    pub overlays: Overlays,
    pub session: Option<Session>,
    pub form: HashMap<String, String>,
    pub notice: Option<Notice>,
    pub theme: Theme,
    pub admin_users: Vec<UserRecord>,
    pub admin_fetch: AdminFetch,
    next_token: u64,
    stale_before: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a token for an outbound request.
    pub fn issue_token(&mut self) -> RequestToken {
        self.next_token += 1;
        RequestToken(self.next_token)
    }

    /// Whether a completion for `token` may still be applied.
    pub fn accepts(&self, token: RequestToken) -> bool {
        token.0 > self.stale_before
    }

    /// Invalidates every token issued so far. Called on any transition that
    /// makes in-flight responses meaningless.
    fn fence_pending(&mut self) {
        self.stale_before = self.next_token;
    }

    pub fn field(&self, name: &str) -> &str {
        self.form.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::Launch => {
                if self.view == PrimaryView::Welcome {
                    self.view = PrimaryView::Login;
                    self.form.clear();
                }
            }
            AppEvent::GoToLogin => {
                if matches!(self.view, PrimaryView::Signup | PrimaryView::Welcome) {
                    self.view = PrimaryView::Login;
                    self.form.clear();
                    self.fence_pending();
                }
            }
            AppEvent::GoToSignup => {
                if self.view == PrimaryView::Login {
                    self.view = PrimaryView::Signup;
                    self.form.clear();
                    self.notice = None;
                    self.fence_pending();
                }
            }
            AppEvent::BackToWelcome => {
                if matches!(self.view, PrimaryView::Login | PrimaryView::Signup) {
                    self.view = PrimaryView::Welcome;
                    self.form.clear();
                    self.fence_pending();
                }
            }
            AppEvent::FieldChanged { field, value } => {
                self.form.insert(field, value);
            }

            AppEvent::LoginSucceeded { token, session } => {
                if !self.accepts(token) || self.view != PrimaryView::Login {
                    self.trace_discard("login success", token);
                    return;
                }
                self.view = match session.role {
                    Role::Admin => PrimaryView::Admin,
                    Role::User => PrimaryView::Dashboard,
                };
                if session.role == Role::Admin {
                    self.admin_fetch = AdminFetch::Queued;
                }
                self.session = Some(session);
                self.form.clear();
                self.notice = None;
            }
            AppEvent::LoginFailed { token } => {
                if self.accepts(token) && self.view == PrimaryView::Login {
                    self.notice =
                        Some(Notice::Error(ConsoleError::InvalidCredentials.to_string()));
                } else {
                    self.trace_discard("login failure", token);
                }
            }
            AppEvent::SignupSucceeded { token } => {
                if !self.accepts(token) || self.view != PrimaryView::Signup {
                    self.trace_discard("signup success", token);
                    return;
                }
                self.view = PrimaryView::Login;
                self.form.clear();
                self.notice = Some(Notice::Info(
                    "Account created. Please log in.".to_string(),
                ));
            }
            AppEvent::SignupFailed { token } => {
                if self.accepts(token) && self.view == PrimaryView::Signup {
                    self.notice = Some(Notice::Error(ConsoleError::SignupRejected.to_string()));
                } else {
                    self.trace_discard("signup failure", token);
                }
            }
            AppEvent::UploadFailed { token } => {
                if self.accepts(token) && self.session.is_some() {
                    self.notice = Some(Notice::Error(ConsoleError::UploadFailed.to_string()));
                } else {
                    self.trace_discard("upload failure", token);
                }
            }

            AppEvent::AdminUsersRequested { token } => {
                if self.admin_fetch == AdminFetch::Queued {
                    self.admin_fetch = AdminFetch::Pending(token);
                }
            }
            AppEvent::AdminUsersLoaded { token, users } => {
                if self.accepts(token) && self.admin_fetch == AdminFetch::Pending(token) {
                    self.admin_users = users;
                    self.admin_fetch = AdminFetch::Loaded;
                } else {
                    self.trace_discard("user list", token);
                }
            }
            AppEvent::AdminUsersFailed { token } => {
                if self.accepts(token) && self.admin_fetch == AdminFetch::Pending(token) {
                    self.admin_fetch = AdminFetch::Failed;
                    self.notice = Some(Notice::Error(ConsoleError::FetchFailed.to_string()));
                } else {
                    self.trace_discard("user list failure", token);
                }
            }

            AppEvent::ToggleMenu => {
                self.overlays.menu_open = !self.overlays.menu_open;
            }
            AppEvent::OpenHistory => {
                self.overlays.history_open = true;
                self.overlays.menu_open = false;
            }
            AppEvent::CloseHistory => {
                self.overlays.history_open = false;
            }
            AppEvent::OpenProfileEdit => {
                self.overlays.profile_edit_open = true;
                self.overlays.menu_open = false;
                // Seed the form bag from the current identity.
                if let Some(session) = &self.session {
                    self.form.clear();
                    self.form.insert("name".into(), session.name.clone());
                    self.form.insert("phone".into(), session.phone.clone());
                    self.form
                        .insert("institute".into(), session.institute.clone());
                }
            }
            AppEvent::CloseProfileEdit => {
                self.overlays.profile_edit_open = false;
            }
            AppEvent::ToggleStatsExpanded => {
                self.overlays.stats_expanded = !self.overlays.stats_expanded;
            }
            AppEvent::ToggleTheme => {
                self.theme = self.theme.toggled();
            }

            AppEvent::ProfileSaved {
                name,
                phone,
                institute,
            } => {
                if let Some(session) = &mut self.session {
                    session.name = name;
                    session.phone = phone;
                    session.institute = institute;
                }
                self.overlays.profile_edit_open = false;
                self.notice = Some(Notice::Info("Profile updated.".to_string()));
            }
            AppEvent::ProfileRejected { error } => {
                self.notice = Some(Notice::Error(error.to_string()));
            }
            AppEvent::PasswordChangeAccepted => {
                self.overlays.profile_edit_open = false;
                self.notice = Some(Notice::Info("Password updated.".to_string()));
            }

            AppEvent::NoticePosted { notice } => {
                self.notice = Some(notice);
            }
            AppEvent::DismissNotice => {
                self.notice = None;
            }
            AppEvent::Logout => {
                if matches!(self.view, PrimaryView::Dashboard | PrimaryView::Admin) {
                    self.view = PrimaryView::Welcome;
                    self.session = None;
                    self.overlays = Overlays::default();
                    self.form.clear();
                    self.notice = None;
                    self.admin_users.clear();
                    self.admin_fetch = AdminFetch::Idle;
                    self.fence_pending();
                }
            }
        }
    }

    fn trace_discard(&self, _what: &str, _token: RequestToken) {
        #[cfg(debug_assertions)]
        println!("[state] discarding stale {_what} response (token {:?})", _token);
    }
}
