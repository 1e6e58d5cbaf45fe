//! Backend calls over the browser `fetch` API
//!
//! Paths, methods and bodies come from [`Endpoint`]; this module only moves
//! bytes. Every call takes its [`RequestContext`] explicitly.

use futures::try_join;
use processos_common::{
    AssignRequest, Endpoint, Error, FetchPayload, Folder, ProcessPage, RequestContext, Result,
    StatusPatch,
};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn transport(err: JsValue) -> Error {
    Error::Transport(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Issue `endpoint` and return the raw response body on 2xx
async fn call(ctx: &RequestContext, endpoint: &Endpoint) -> Result<String> {
    ctx.validate()?;
    let url = ctx.url(endpoint);

    let opts = RequestInit::new();
    opts.set_method(endpoint.method().as_str());
    opts.set_mode(RequestMode::Cors);
    let body = endpoint.body()?;
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(&url, &opts).map_err(transport)?;
    let headers = request.headers();
    if body.is_some() {
        headers.set("Content-Type", "application/json").map_err(transport)?;
    }
    if let Some(auth) = ctx.authorization() {
        headers.set("Authorization", &auth).map_err(transport)?;
    }

    let window = web_sys::window().ok_or_else(|| Error::Transport("window indisponível".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    let text = JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?
        .as_string()
        .unwrap_or_default();

    if !resp.ok() {
        return Err(Error::from_response(resp.status(), &text));
    }
    Ok(text)
}

async fn call_json<T: DeserializeOwned>(ctx: &RequestContext, endpoint: &Endpoint) -> Result<T> {
    let text = call(ctx, endpoint).await?;
    Ok(serde_json::from_str(&text)?)
}

pub async fn fetch_processos(ctx: &RequestContext) -> Result<ProcessPage> {
    call_json(ctx, &Endpoint::fetch_all()).await
}

pub async fn fetch_folders(ctx: &RequestContext) -> Result<Vec<Folder>> {
    call_json(ctx, &Endpoint::ListFolders).await
}

/// Load processes and folders concurrently; either failure fails the cycle
pub async fn fetch_all(ctx: &RequestContext) -> Result<FetchPayload> {
    let (processos, folders) = try_join!(fetch_processos(ctx), fetch_folders(ctx))?;
    Ok(FetchPayload { processos, folders })
}

pub async fn patch_status(ctx: &RequestContext, patch: &StatusPatch) -> Result<()> {
    let endpoint = Endpoint::PatchStatus { id: patch.id, status: patch.status };
    call(ctx, &endpoint).await.map(|_| ())
}

pub async fn add_processos(ctx: &RequestContext, request: &AssignRequest) -> Result<()> {
    let endpoint = Endpoint::AddProcessos {
        folder_id: request.folder_id,
        processo_ids: request.processo_ids.clone(),
    };
    call(ctx, &endpoint).await.map(|_| ())
}
