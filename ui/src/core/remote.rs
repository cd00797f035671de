//! Client for the backend API.
//!
//! The backend is an opaque HTTP service; every transport, decode, or
//! non-success response collapses into a single [`RemoteFailure`] condition
//! that call sites map onto the user-facing taxonomy in `core::error`.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::pipeline::StatsSnapshot;
use crate::core::session::Role;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// A failed request. `status` is present when an HTTP response arrived and
/// was non-2xx; it is `None` for transport and decode failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFailure {
    pub status: Option<u16>,
    pub detail: String,
}

impl RemoteFailure {
    fn transport(detail: impl fmt::Display) -> Self {
        Self {
            status: None,
            detail: detail.to_string(),
        }
    }

    fn rejected(status: u16) -> Self {
        Self {
            status: Some(status),
            detail: format!("server responded with status {status}"),
        }
    }
}

impl fmt::Display for RemoteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "request failed ({status}): {}", self.detail),
            None => write!(f, "request failed: {}", self.detail),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginReply {
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub institute: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institute: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub institute: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub institute: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Deserialize)]
struct UserListReply {
    users: Vec<UserRecord>,
}

/// Abstract backend surface. The console assumes at most one request per
/// trigger in flight; fencing against late responses happens in the state
/// machine, not here.
pub trait RemoteDataService {
    async fn login(&self, credentials: &Credentials) -> Result<LoginReply, RemoteFailure>;
    async fn signup(&self, request: &SignupRequest) -> Result<(), RemoteFailure>;
    async fn upload_dataset(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StatsSnapshot, RemoteFailure>;
    async fn list_users(&self) -> Result<Vec<UserRecord>, RemoteFailure>;
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), RemoteFailure>;
}

#[derive(Debug, Clone)]
pub struct HttpRemote {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpRemote {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}/", self.base_url.trim_end_matches('/'))
    }
}

impl Default for HttpRemote {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(target_arch = "wasm32")]
impl HttpRemote {
    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, RemoteFailure> {
        let response = gloo_net::http::Request::post(&self.endpoint(path))
            .json(body)
            .map_err(RemoteFailure::transport)?
            .send()
            .await
            .map_err(RemoteFailure::transport)?;
        if !response.ok() {
            return Err(RemoteFailure::rejected(response.status()));
        }
        response.json::<R>().await.map_err(RemoteFailure::transport)
    }

    async fn post_json_ack<B: Serialize>(&self, path: &str, body: &B) -> Result<(), RemoteFailure> {
        let response = gloo_net::http::Request::post(&self.endpoint(path))
            .json(body)
            .map_err(RemoteFailure::transport)?
            .send()
            .await
            .map_err(RemoteFailure::transport)?;
        if !response.ok() {
            return Err(RemoteFailure::rejected(response.status()));
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
impl RemoteDataService for HttpRemote {
    async fn login(&self, credentials: &Credentials) -> Result<LoginReply, RemoteFailure> {
        self.post_json("login", credentials).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), RemoteFailure> {
        self.post_json_ack("signup", request).await
    }

    async fn upload_dataset(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StatsSnapshot, RemoteFailure> {
        use wasm_bindgen::JsValue;

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());
        let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)
            .map_err(|_| RemoteFailure::transport("unable to build upload blob"))?;

        let form = web_sys::FormData::new()
            .map_err(|_| RemoteFailure::transport("unable to build form data"))?;
        form.append_with_blob_and_filename("file", &blob, file_name)
            .map_err(|_| RemoteFailure::transport("unable to attach file"))?;

        let response = gloo_net::http::Request::post(&self.endpoint("upload"))
            .body(JsValue::from(form))
            .map_err(RemoteFailure::transport)?
            .send()
            .await
            .map_err(RemoteFailure::transport)?;
        if !response.ok() {
            return Err(RemoteFailure::rejected(response.status()));
        }
        response
            .json::<StatsSnapshot>()
            .await
            .map_err(RemoteFailure::transport)
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, RemoteFailure> {
        let response = gloo_net::http::Request::get(&self.endpoint("users"))
            .send()
            .await
            .map_err(RemoteFailure::transport)?;
        if !response.ok() {
            return Err(RemoteFailure::rejected(response.status()));
        }
        let reply = response
            .json::<UserListReply>()
            .await
            .map_err(RemoteFailure::transport)?;
        Ok(reply.users)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), RemoteFailure> {
        self.post_json_ack("update-profile", update).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpRemote {
    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, RemoteFailure> {
        let response = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(RemoteFailure::transport)?;
        if !response.status().is_success() {
            return Err(RemoteFailure::rejected(response.status().as_u16()));
        }
        response.json::<R>().await.map_err(RemoteFailure::transport)
    }

    async fn post_json_ack<B: Serialize>(&self, path: &str, body: &B) -> Result<(), RemoteFailure> {
        let response = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(RemoteFailure::transport)?;
        if !response.status().is_success() {
            return Err(RemoteFailure::rejected(response.status().as_u16()));
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RemoteDataService for HttpRemote {
    async fn login(&self, credentials: &Credentials) -> Result<LoginReply, RemoteFailure> {
        self.post_json("login", credentials).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), RemoteFailure> {
        self.post_json_ack("signup", request).await
    }

    async fn upload_dataset(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StatsSnapshot, RemoteFailure> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await
            .map_err(RemoteFailure::transport)?;
        if !response.status().is_success() {
            return Err(RemoteFailure::rejected(response.status().as_u16()));
        }
        response
            .json::<StatsSnapshot>()
            .await
            .map_err(RemoteFailure::transport)
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, RemoteFailure> {
        let response = self
            .client
            .get(self.endpoint("users"))
            .send()
            .await
            .map_err(RemoteFailure::transport)?;
        if !response.status().is_success() {
            return Err(RemoteFailure::rejected(response.status().as_u16()));
        }
        let reply = response
            .json::<UserListReply>()
            .await
            .map_err(RemoteFailure::transport)?;
        Ok(reply.users)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), RemoteFailure> {
        self.post_json_ack("update-profile", update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_slash_terminated() {
        let remote = HttpRemote::new("http://127.0.0.1:8000/api/");
        assert_eq!(remote.endpoint("login"), "http://127.0.0.1:8000/api/login/");
        assert_eq!(
            remote.endpoint("update-profile"),
            "http://127.0.0.1:8000/api/update-profile/"
        );
    }
}
