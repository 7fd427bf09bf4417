//! Todo API Bindings
//!
//! HTTP wrappers for the four `/todos` endpoints. Request bodies are always
//! `application/json`; `PATCH`/`DELETE` response bodies are not interpreted,
//! success is the 2xx status.

use gloo_net::http::{Request, Response};
use serde::Serialize;

use crate::error::ApiError;
use crate::models::Todo;

/// Partial-update body for the done flag
#[derive(Serialize)]
struct SetDoneArgs {
    #[serde(rename = "isDone")]
    is_done: bool,
}

fn check_status(resp: &Response) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(resp.status()))
    }
}

/// Fetch the full collection.
pub async fn list_todos(api_url: &str) -> Result<Vec<Todo>, ApiError> {
    let resp = Request::get(&format!("{}/todos", api_url)).send().await?;
    check_status(&resp)?;
    let todos = resp.json::<Vec<Todo>>().await?;
    Ok(todos)
}

/// Create a todo. The server ignores the placeholder id and returns the
/// persisted record with its real id.
pub async fn create_todo(api_url: &str, todo: &Todo) -> Result<Todo, ApiError> {
    let resp = Request::post(&format!("{}/todos", api_url))
        .json(todo)?
        .send()
        .await?;
    check_status(&resp)?;
    let created = resp.json::<Todo>().await?;
    Ok(created)
}

/// Patch a todo's done flag.
pub async fn set_done(api_url: &str, id: u32, is_done: bool) -> Result<(), ApiError> {
    let resp = Request::patch(&format!("{}/todos/{}", api_url, id))
        .json(&SetDoneArgs { is_done })?
        .send()
        .await?;
    check_status(&resp)
}

/// Delete a todo by id.
pub async fn delete_todo(api_url: &str, id: u32) -> Result<(), ApiError> {
    let resp = Request::delete(&format!("{}/todos/{}", api_url, id))
        .send()
        .await?;
    check_status(&resp)
}
