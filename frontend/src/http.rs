use async_trait::async_trait;
use serde::de::DeserializeOwned;
use taskboard_shared::{
    ErrorBody, MutationResponse, OverviewStats, SmartSortResponse, StatsResponse, StatusPatch,
    Suggestion, SuggestionsResponse, Task, TaskId, TaskListResponse, TaskPayload, TaskResponse,
};
use tracing::debug;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::api::TaskApi;
use crate::config::ClientConfig;
use crate::error::{ApiError, GENERIC_FAILURE};
use crate::state::Filter;

/// [`TaskApi`] over the browser's `fetch`.
#[derive(Debug, Clone)]
pub struct HttpApi {
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let url = self.config.url(path);
        debug!(%method, %url, "sending request");

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = &body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&url, &opts)
            .map_err(|e| ApiError::Transport(format!("failed to build request: {e:?}")))?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Transport(format!("failed to set header: {e:?}")))?;

        let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?
            .into();

        let text_promise = response
            .text()
            .map_err(|e| ApiError::Transport(format!("failed to read response: {e:?}")))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|e| ApiError::Transport(format!("failed to read response: {e:?}")))?
            .as_string()
            .unwrap_or_default();

        debug!(%url, status = response.status(), "response received");
        decode_response(response.status(), response.ok(), &text)
    }

    async fn send_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        method: &str,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::Transport(format!("failed to serialize request: {e}")))?;
        self.send(method, path, Some(body)).await
    }
}

/// Turns a finished HTTP exchange into the decoded body or an [`ApiError`]
/// carrying the backend's `error` message.
pub fn decode_response<T: DeserializeOwned>(status: u16, ok: bool, body: &str) -> Result<T, ApiError> {
    if !ok {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        return Err(ApiError::Rejected { status, message });
    }
    Ok(serde_json::from_str(body)?)
}

fn log_mutation(response: MutationResponse) {
    if let Some(message) = response.message {
        debug!(%message, "mutation accepted");
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpApi {
    async fn overview_stats(&self) -> Result<OverviewStats, ApiError> {
        let response: StatsResponse = self.send("GET", "/stats/overview", None).await?;
        Ok(response.stats)
    }

    async fn list_tasks(&self, filter: Filter) -> Result<TaskListResponse, ApiError> {
        let path = format!("/tasks?{}", filter.query_string());
        self.send("GET", &path, None).await
    }

    async fn get_task(&self, id: TaskId) -> Result<Task, ApiError> {
        let response: TaskResponse = self.send("GET", &format!("/tasks/{id}"), None).await?;
        Ok(response.task)
    }

    async fn create_task(&self, payload: &TaskPayload) -> Result<(), ApiError> {
        log_mutation(self.send_json("POST", "/tasks", payload).await?);
        Ok(())
    }

    async fn update_task(&self, id: TaskId, payload: &TaskPayload) -> Result<(), ApiError> {
        log_mutation(self.send_json("PUT", &format!("/tasks/{id}"), payload).await?);
        Ok(())
    }

    async fn complete_task(&self, id: TaskId) -> Result<(), ApiError> {
        log_mutation(
            self.send_json("PUT", &format!("/tasks/{id}"), &StatusPatch::completed())
                .await?,
        );
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        log_mutation(self.send("DELETE", &format!("/tasks/{id}"), None).await?);
        Ok(())
    }

    async fn suggestions(&self) -> Result<Vec<Suggestion>, ApiError> {
        let response: SuggestionsResponse = self.send("GET", "/ai/suggestions", None).await?;
        Ok(response.suggestions)
    }

    async fn smart_sort(&self) -> Result<Vec<Task>, ApiError> {
        let response: SmartSortResponse = self.send_json("POST", "/ai/smart-sort", &serde_json::json!({})).await?;
        Ok(response.sorted_tasks)
    }
}
