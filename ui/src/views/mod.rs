mod admin;
mod dashboard;
mod login;
mod signup;
mod welcome;

pub use admin::Admin;
pub use dashboard::Dashboard;
pub use login::Login;
pub use signup::Signup;
pub use welcome::Welcome;
