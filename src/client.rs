//! Backend API seam
//!
//! [`ProcessApi`] is what the session drives; [`HttpApi`] is the reqwest
//! implementation and `crate::mock::MockApi` the in-memory one.

use async_trait::async_trait;
use processos_common::{
    Endpoint, Error, Folder, Method, ProcessPage, ProcessStatus, RequestContext, Result,
};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::time::Duration;

#[async_trait]
pub trait ProcessApi: Send + Sync {
    async fn list_processos(&self, skip: u64, limit: u64) -> Result<ProcessPage>;

    async fn list_folders(&self) -> Result<Vec<Folder>>;

    async fn patch_status(&self, id: i64, status: ProcessStatus) -> Result<()>;

    /// One batch call for the whole id list
    async fn add_processos(&self, folder_id: i64, processo_ids: &[i64]) -> Result<()>;
}

fn transport(err: reqwest::Error) -> Error {
    Error::Transport(err.to_string())
}

pub struct HttpApi {
    client: reqwest::Client,
    ctx: RequestContext,
}

impl HttpApi {
    pub fn new(ctx: RequestContext, timeout_seconds: u64) -> crate::error::Result<Self> {
        ctx.validate()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self { client, ctx })
    }

    pub fn context(&self) -> &RequestContext {
        &self.ctx
    }

    async fn send(&self, endpoint: &Endpoint) -> Result<String> {
        let url = self.ctx.url(endpoint);
        let mut request = match endpoint.method() {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Patch => self.client.patch(&url),
        };
        if let Some(auth) = self.ctx.authorization() {
            request = request.header(AUTHORIZATION, auth);
        }
        if let Some(body) = endpoint.body()? {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        tracing::debug!(method = endpoint.method().as_str(), %url, "request");
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let text = response.text().await.map_err(transport)?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), %url, "request failed");
            return Err(Error::from_response(status.as_u16(), &text));
        }
        Ok(text)
    }

    async fn send_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        let text = self.send(endpoint).await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl ProcessApi for HttpApi {
    async fn list_processos(&self, skip: u64, limit: u64) -> Result<ProcessPage> {
        self.send_json(&Endpoint::ListProcessos { skip, limit }).await
    }

    async fn list_folders(&self) -> Result<Vec<Folder>> {
        self.send_json(&Endpoint::ListFolders).await
    }

    async fn patch_status(&self, id: i64, status: ProcessStatus) -> Result<()> {
        self.send(&Endpoint::PatchStatus { id, status }).await.map(|_| ())
    }

    async fn add_processos(&self, folder_id: i64, processo_ids: &[i64]) -> Result<()> {
        let endpoint = Endpoint::AddProcessos {
            folder_id,
            processo_ids: processo_ids.to_vec(),
        };
        self.send(&endpoint).await.map(|_| ())
    }
}
