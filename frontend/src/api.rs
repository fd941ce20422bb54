use async_trait::async_trait;
use taskboard_shared::{
    OverviewStats, Suggestion, Task, TaskId, TaskListResponse, TaskPayload,
};

use crate::controller::Msg;
use crate::error::ApiError;
use crate::state::Filter;

/// Backend operations the dashboard consumes.
#[async_trait(?Send)]
pub trait TaskApi {
    async fn overview_stats(&self) -> Result<OverviewStats, ApiError>;
    async fn list_tasks(&self, filter: Filter) -> Result<TaskListResponse, ApiError>;
    async fn get_task(&self, id: TaskId) -> Result<Task, ApiError>;
    async fn create_task(&self, payload: &TaskPayload) -> Result<(), ApiError>;
    async fn update_task(&self, id: TaskId, payload: &TaskPayload) -> Result<(), ApiError>;
    async fn complete_task(&self, id: TaskId) -> Result<(), ApiError>;
    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError>;
    async fn suggestions(&self) -> Result<Vec<Suggestion>, ApiError>;
    async fn smart_sort(&self) -> Result<Vec<Task>, ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    FetchStats,
    FetchTasks(Filter),
    FetchSuggestions,
    FetchTask(TaskId),
    Create(TaskPayload),
    Update(TaskId, TaskPayload),
    Complete(TaskId),
    Delete(TaskId),
    SmartSort,
}

/// Runs one request and wraps its outcome in the message that reports it.
pub async fn perform<A: TaskApi + ?Sized>(api: &A, request: ApiRequest) -> Msg {
    match request {
        ApiRequest::FetchStats => Msg::StatsLoaded(api.overview_stats().await),
        ApiRequest::FetchTasks(filter) => Msg::TasksLoaded(api.list_tasks(filter).await),
        ApiRequest::FetchSuggestions => Msg::SuggestionsLoaded(api.suggestions().await),
        ApiRequest::FetchTask(id) => Msg::EditLoaded(api.get_task(id).await),
        ApiRequest::Create(payload) => Msg::Saved(api.create_task(&payload).await),
        ApiRequest::Update(id, payload) => Msg::Saved(api.update_task(id, &payload).await),
        ApiRequest::Complete(id) => Msg::Mutated(api.complete_task(id).await),
        ApiRequest::Delete(id) => Msg::Mutated(api.delete_task(id).await),
        ApiRequest::SmartSort => Msg::SmartSorted(api.smart_sort().await),
    }
}
