//! Shared test double for the backend surface.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;

use ui::core::pipeline::{Metric, MetricValue, StatsSnapshot};
use ui::core::remote::{
    Credentials, LoginReply, ProfileUpdate, RemoteDataService, RemoteFailure, SignupRequest,
    UserRecord,
};
use ui::core::session::Role;

/// Scripted backend: each operation returns its preconfigured result and
/// records that it was called. Single-threaded by construction (tests drive
/// futures with `block_on`), so `RefCell` suffices for the call log.
pub struct MockRemote {
    pub login_reply: Result<LoginReply, RemoteFailure>,
    pub signup_reply: Result<(), RemoteFailure>,
    pub upload_reply: Result<StatsSnapshot, RemoteFailure>,
    pub users_reply: Result<Vec<UserRecord>, RemoteFailure>,
    pub update_reply: Result<(), RemoteFailure>,
    calls: RefCell<Vec<&'static str>>,
}

impl Default for MockRemote {
    fn default() -> Self {
        Self {
            login_reply: Ok(LoginReply {
                name: "Ada".to_string(),
                role: Role::User,
                phone: String::new(),
                institute: String::new(),
            }),
            signup_reply: Ok(()),
            upload_reply: Ok(water_quality_snapshot()),
            users_reply: Ok(Vec::new()),
            update_reply: Ok(()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl MockRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_upload() -> Self {
        Self {
            upload_reply: Err(refused(500)),
            ..Self::default()
        }
    }

    pub fn failing_update() -> Self {
        Self {
            update_reply: Err(refused(502)),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|name| **name == operation)
            .count()
    }

    fn record(&self, operation: &'static str) {
        self.calls.borrow_mut().push(operation);
    }
}

impl RemoteDataService for MockRemote {
    async fn login(&self, _credentials: &Credentials) -> Result<LoginReply, RemoteFailure> {
        self.record("login");
        self.login_reply.clone()
    }

    async fn signup(&self, _request: &SignupRequest) -> Result<(), RemoteFailure> {
        self.record("signup");
        self.signup_reply.clone()
    }

    async fn upload_dataset(
        &self,
        _file_name: &str,
        _bytes: Vec<u8>,
    ) -> Result<StatsSnapshot, RemoteFailure> {
        self.record("upload");
        self.upload_reply.clone()
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, RemoteFailure> {
        self.record("users");
        self.users_reply.clone()
    }

    async fn update_profile(&self, _update: &ProfileUpdate) -> Result<(), RemoteFailure> {
        self.record("update-profile");
        self.update_reply.clone()
    }
}

pub fn refused(status: u16) -> RemoteFailure {
    RemoteFailure {
        status: Some(status),
        detail: format!("server responded with status {status}"),
    }
}

/// A realistic upload response: 120 rows, six metrics, two categories.
pub fn water_quality_snapshot() -> StatsSnapshot {
    let metrics = [
        ("pH avg", MetricValue::Number(7.1)),
        ("Turbidity avg", MetricValue::Number(3.4)),
        ("DO avg", MetricValue::Number(8.2)),
        ("Temp avg", MetricValue::Number(19.5)),
        ("Nitrate avg", MetricValue::Number(1.2)),
        ("Lead max", MetricValue::Text("below detection".to_string())),
    ]
    .into_iter()
    .map(|(label, value)| Metric {
        label: label.to_string(),
        value,
    })
    .collect();

    StatsSnapshot {
        total_count: 120,
        metrics,
        chart_data: BTreeMap::from([("Safe".to_string(), 90.0), ("Unsafe".to_string(), 30.0)]),
    }
}
