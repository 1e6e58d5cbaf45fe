//! HTTP endpoint catalogue and request context
//!
//! Both HTTP drivers (web-sys fetch in the browser, reqwest natively) build
//! their calls from [`Endpoint`] so paths, methods and bodies live in one place.
//! Credentials travel in an explicit [`RequestContext`] handed to every call.

use crate::error::{Error, Result};
use crate::types::{AddProcessosRequest, ProcessStatus, StatusUpdate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Row cap for the fetch-all listing; filtering happens client side
pub const FETCH_ALL_LIMIT: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }
}

/// Base URL plus bearer token, passed explicitly to each call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, None)
    }
}

impl RequestContext {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::Config("base_url vazio".into()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "base_url deve começar com http:// ou https://: {}",
                self.base_url
            )));
        }
        Ok(())
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path_and_query())
    }

    /// `Authorization` header value, when a token is present
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }
}

/// The four calls the dashboard makes
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    ListProcessos { skip: u64, limit: u64 },
    ListFolders,
    PatchStatus { id: i64, status: ProcessStatus },
    AddProcessos { folder_id: i64, processo_ids: Vec<i64> },
}

impl Endpoint {
    pub fn fetch_all() -> Self {
        Endpoint::ListProcessos { skip: 0, limit: FETCH_ALL_LIMIT }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListProcessos { .. } | Endpoint::ListFolders => Method::Get,
            Endpoint::PatchStatus { .. } => Method::Patch,
            Endpoint::AddProcessos { .. } => Method::Post,
        }
    }

    pub fn path_and_query(&self) -> String {
        match self {
            Endpoint::ListProcessos { skip, limit } => {
                format!("/processos/?skip={}&limit={}", skip, limit)
            }
            Endpoint::ListFolders => "/folders/".to_string(),
            Endpoint::PatchStatus { id, .. } => format!("/processos/{}/status", id),
            Endpoint::AddProcessos { folder_id, .. } => {
                format!("/folders/{}/add_processos/", folder_id)
            }
        }
    }

    /// JSON request body, if the call has one
    pub fn body(&self) -> Result<Option<String>> {
        let body = match self {
            Endpoint::ListProcessos { .. } | Endpoint::ListFolders => None,
            Endpoint::PatchStatus { status, .. } => {
                Some(serde_json::to_string(&StatusUpdate { status: *status })?)
            }
            Endpoint::AddProcessos { processo_ids, .. } => Some(serde_json::to_string(
                &AddProcessosRequest { processo_ids: processo_ids.clone() },
            )?),
        };
        Ok(body)
    }
}
