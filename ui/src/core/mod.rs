pub mod error;
pub mod format;
pub mod history;
pub mod pipeline;
pub mod platform;
pub mod remote;
pub mod report;
pub mod session;
pub mod state;
pub mod theme;
