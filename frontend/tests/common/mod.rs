#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};

use async_trait::async_trait;
use chrono::Utc;
use taskboard_frontend::state::Filter;
use taskboard_frontend::{perform, ApiError, Dashboard, Effect, Msg, TaskApi};
use taskboard_shared::{
    OverviewStats, Priority, Status, Suggestion, Task, TaskId, TaskListResponse, TaskPayload,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Stats,
    List(String),
    Get(TaskId),
    Create(TaskPayload),
    Update(TaskId, TaskPayload),
    Complete(TaskId),
    Delete(TaskId),
    Suggestions,
    SmartSort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Stats,
    List,
    Get,
    Create,
    Update,
    Complete,
    Delete,
    Suggestions,
    SmartSort,
}

/// In-memory backend that records every call.
#[derive(Default)]
pub struct MockApi {
    pub tasks: RefCell<Vec<Task>>,
    pub calls: RefCell<Vec<Call>>,
    pub failing: RefCell<HashSet<Endpoint>>,
    pub smart_order: RefCell<Vec<TaskId>>,
    next_id: RefCell<TaskId>,
}

impl MockApi {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let api = Self::default();
        *api.tasks.borrow_mut() = tasks;
        *api.next_id.borrow_mut() = next;
        api
    }

    pub fn fail(&self, endpoint: Endpoint) {
        self.failing.borrow_mut().insert(endpoint);
    }

    pub fn recover(&self, endpoint: Endpoint) {
        self.failing.borrow_mut().remove(&endpoint);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| matches(c)).count()
    }

    fn enter(&self, call: Call, endpoint: Endpoint) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        if self.failing.borrow().contains(&endpoint) {
            return Err(ApiError::Rejected {
                status: 500,
                message: "Internal server error".to_string(),
            });
        }
        Ok(())
    }

    fn not_found() -> ApiError {
        ApiError::Rejected {
            status: 404,
            message: "Resource not found".to_string(),
        }
    }

    fn apply(task: &mut Task, payload: &TaskPayload) {
        task.title = payload.title.clone();
        task.description = payload.description.clone();
        task.priority = payload.priority;
        task.category = payload.category.clone();
        task.due_date = payload.due_date.clone();
        task.estimated_time = payload.estimated_time;
    }
}

#[async_trait(?Send)]
impl TaskApi for MockApi {
    async fn overview_stats(&self) -> Result<OverviewStats, ApiError> {
        self.enter(Call::Stats, Endpoint::Stats)?;
        let tasks = self.tasks.borrow();
        let count = |status: Status| tasks.iter().filter(|t| t.status == status).count() as u64;
        Ok(OverviewStats {
            total_tasks: tasks.len() as u64,
            pending: count(Status::Pending),
            in_progress: count(Status::InProgress),
            completed: count(Status::Completed),
            ..OverviewStats::default()
        })
    }

    async fn list_tasks(&self, filter: Filter) -> Result<TaskListResponse, ApiError> {
        self.enter(Call::List(filter.query_string()), Endpoint::List)?;
        let tasks: Vec<Task> = self
            .tasks
            .borrow()
            .iter()
            .filter(|t| filter.status.map_or(true, |s| t.status == s))
            .filter(|t| filter.priority.map_or(true, |p| t.priority == p))
            .cloned()
            .collect();
        Ok(TaskListResponse {
            count: tasks.len(),
            tasks,
        })
    }

    async fn get_task(&self, id: TaskId) -> Result<Task, ApiError> {
        self.enter(Call::Get(id), Endpoint::Get)?;
        self.tasks
            .borrow()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn create_task(&self, payload: &TaskPayload) -> Result<(), ApiError> {
        self.enter(Call::Create(payload.clone()), Endpoint::Create)?;
        let id = {
            let mut next = self.next_id.borrow_mut();
            let id = *next;
            *next += 1;
            id
        };
        let mut created = task(id, "", Priority::Medium, Status::Pending);
        Self::apply(&mut created, payload);
        self.tasks.borrow_mut().push(created);
        Ok(())
    }

    async fn update_task(&self, id: TaskId, payload: &TaskPayload) -> Result<(), ApiError> {
        self.enter(Call::Update(id, payload.clone()), Endpoint::Update)?;
        let mut tasks = self.tasks.borrow_mut();
        let target = tasks.iter_mut().find(|t| t.id == id).ok_or_else(Self::not_found)?;
        Self::apply(target, payload);
        Ok(())
    }

    async fn complete_task(&self, id: TaskId) -> Result<(), ApiError> {
        self.enter(Call::Complete(id), Endpoint::Complete)?;
        let mut tasks = self.tasks.borrow_mut();
        let target = tasks.iter_mut().find(|t| t.id == id).ok_or_else(Self::not_found)?;
        target.status = Status::Completed;
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        self.enter(Call::Delete(id), Endpoint::Delete)?;
        let mut tasks = self.tasks.borrow_mut();
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }

    async fn suggestions(&self) -> Result<Vec<Suggestion>, ApiError> {
        self.enter(Call::Suggestions, Endpoint::Suggestions)?;
        let pending = self
            .tasks
            .borrow()
            .iter()
            .filter(|t| t.status == Status::Pending)
            .count();
        Ok(vec![Suggestion {
            kind: "motivation".to_string(),
            icon: "💡".to_string(),
            title: "Tip of the day".to_string(),
            message: format!("{pending} pending"),
            action: None,
        }])
    }

    async fn smart_sort(&self) -> Result<Vec<Task>, ApiError> {
        self.enter(Call::SmartSort, Endpoint::SmartSort)?;
        let tasks = self.tasks.borrow();
        Ok(self
            .smart_order
            .borrow()
            .iter()
            .filter_map(|id| tasks.iter().find(|t| t.id == *id).cloned())
            .collect())
    }
}

/// Answers confirm prompts and collects alerts.
#[derive(Debug)]
pub struct Prompt {
    pub answer: bool,
    pub confirms: Vec<String>,
    pub alerts: Vec<String>,
}

impl Default for Prompt {
    fn default() -> Self {
        Self {
            answer: true,
            confirms: Vec::new(),
            alerts: Vec::new(),
        }
    }
}

pub struct Harness {
    pub dashboard: Dashboard<Utc>,
    pub api: MockApi,
    pub prompt: Prompt,
}

impl Harness {
    pub fn new(api: MockApi) -> Self {
        Self {
            dashboard: Dashboard::new(Utc),
            api,
            prompt: Prompt::default(),
        }
    }

    /// Starts the board and forgets the startup calls.
    pub async fn started(api: MockApi) -> Self {
        let mut harness = Self::new(api);
        harness.send(Msg::Init).await;
        harness.api.clear_calls();
        harness
    }

    /// Dispatches `msg` and runs every resulting effect until none remain.
    pub async fn send(&mut self, msg: Msg) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            for effect in self.dashboard.update(msg) {
                match effect {
                    Effect::Request(request) => queue.push_back(perform(&self.api, request).await),
                    Effect::Alert(message) => self.prompt.alerts.push(message),
                    Effect::Confirm { message, then } => {
                        self.prompt.confirms.push(message);
                        if self.prompt.answer {
                            queue.push_back(*then);
                        }
                    }
                }
            }
        }
    }

    pub fn shown_ids(&self) -> Vec<TaskId> {
        self.dashboard
            .tasks()
            .map(|section| section.tasks.iter().map(|t| t.id).collect())
            .unwrap_or_default()
    }

    pub fn count_label(&self) -> Option<String> {
        self.dashboard.tasks().map(|section| section.count_label.clone())
    }
}

pub fn task(id: TaskId, task_title: &str, priority: Priority, status: Status) -> Task {
    Task {
        id,
        title: task_title.to_string(),
        description: None,
        priority,
        status,
        category: None,
        due_date: None,
        estimated_time: None,
        created_at: None,
        completed_at: None,
        tags: Vec::new(),
    }
}

pub fn sample_tasks() -> Vec<Task> {
    vec![
        task(1, "Write report", Priority::High, Status::Pending),
        task(2, "Water plants", Priority::Low, Status::Completed),
        task(3, "Fix login bug", Priority::Urgent, Status::InProgress),
        task(4, "Book dentist", Priority::Medium, Status::Pending),
    ]
}

pub fn is_refresh_leg(call: &Call) -> bool {
    matches!(call, Call::Stats | Call::List(_) | Call::Suggestions)
}
