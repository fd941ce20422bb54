//! Dashboard state and the update loop that keeps it in sync with the
//! backend.
//!
//! `update` never talks to the network. It changes local state and returns
//! [`Effect`]s; the caller runs them and feeds the resulting [`Msg`]s back.
//! Every displayed task, stat and suggestion comes from a backend response,
//! never from patching what was shown before.

use chrono::TimeZone;
use taskboard_shared::{OverviewStats, Suggestion, Task, TaskId, TaskListResponse};
use tracing::{debug, error, warn};

use crate::api::ApiRequest;
use crate::error::ApiError;
use crate::modal::{self, FormField, Modal, ModalState};
use crate::render::{self, CardAction};
use crate::state::{Filter, ViewState};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

#[derive(Debug, Clone)]
pub enum Msg {
    Init,

    // Refresh legs
    StatsLoaded(Result<OverviewStats, ApiError>),
    TasksLoaded(Result<TaskListResponse, ApiError>),
    SuggestionsLoaded(Result<Vec<Suggestion>, ApiError>),

    // Modal
    NewTask,
    EditLoaded(Result<Task, ApiError>),
    FormInput(FormField, String),
    Submit,
    Saved(Result<(), ApiError>),
    CloseModal,

    // Card buttons
    /// Raw `data-action` / `data-task-id` read by the delegated click listener.
    CardClicked {
        action: Option<String>,
        task_id: Option<String>,
    },
    CardAction(CardAction, TaskId),
    DeleteConfirmed(TaskId),
    Mutated(Result<(), ApiError>),

    // Filters and ordering
    FilterChanged(Filter),
    SmartSort,
    SmartSorted(Result<Vec<Task>, ApiError>),
}

#[derive(Debug, Clone)]
pub enum Effect {
    Request(ApiRequest),
    /// Show an error to the user.
    Alert(String),
    /// Ask the user; dispatch `then` only on a yes.
    Confirm { message: String, then: Box<Msg> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOrder {
    Filtered,
    AiRanked,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskSection {
    pub tasks: Vec<Task>,
    pub count_label: String,
    pub order: TaskOrder,
}

/// The whole client-side state of the task board.
///
/// `zone` is the viewer's time zone; due dates are read and written in it.
#[derive(Debug, Clone)]
pub struct Dashboard<Tz: TimeZone> {
    zone: Tz,
    view: ViewState,
    modal: Modal,
    stats: Option<OverviewStats>,
    tasks: Option<TaskSection>,
    task_failure: Option<String>,
    suggestions: Option<Vec<Suggestion>>,
}

impl<Tz: TimeZone> Dashboard<Tz> {
    pub fn new(zone: Tz) -> Self {
        Self {
            zone,
            view: ViewState::default(),
            modal: Modal::Closed,
            stats: None,
            tasks: None,
            task_failure: None,
            suggestions: None,
        }
    }

    pub fn zone(&self) -> &Tz {
        &self.zone
    }

    pub fn view_state(&self) -> ViewState {
        self.view
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn modal_state(&self) -> ModalState {
        ModalState::of(&self.view, &self.modal)
    }

    pub fn stats(&self) -> Option<&OverviewStats> {
        self.stats.as_ref()
    }

    pub fn tasks(&self) -> Option<&TaskSection> {
        self.tasks.as_ref()
    }

    /// Set when the task list came back in a shape the client cannot show.
    pub fn task_failure(&self) -> Option<&str> {
        self.task_failure.as_deref()
    }

    pub fn suggestions(&self) -> Option<&[Suggestion]> {
        self.suggestions.as_deref()
    }

    /// The refresh triad: stats, tasks under the current filter, and
    /// suggestions, each fetched and applied on its own.
    pub fn refresh_all(&self) -> Vec<Effect> {
        vec![
            Effect::Request(ApiRequest::FetchStats),
            Effect::Request(ApiRequest::FetchTasks(self.view.filter())),
            Effect::Request(ApiRequest::FetchSuggestions),
        ]
    }

    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::Init => self.refresh_all(),

            Msg::StatsLoaded(Ok(stats)) => {
                self.stats = Some(stats);
                vec![]
            }
            Msg::StatsLoaded(Err(err)) => vec![leg_failed("stats", &err)],
            Msg::TasksLoaded(Ok(page)) => {
                debug!(count = page.count, "task list loaded");
                self.task_failure = None;
                self.tasks = Some(TaskSection {
                    count_label: render::count_label(page.count),
                    tasks: page.tasks,
                    order: TaskOrder::Filtered,
                });
                vec![]
            }
            Msg::TasksLoaded(Err(err)) => {
                if let ApiError::Decode(_) = err {
                    self.tasks = None;
                    self.task_failure = Some(err.to_string());
                }
                vec![leg_failed("tasks", &err)]
            }
            Msg::SuggestionsLoaded(Ok(suggestions)) => {
                self.suggestions = Some(suggestions);
                vec![]
            }
            Msg::SuggestionsLoaded(Err(err)) => vec![leg_failed("suggestions", &err)],

            Msg::NewTask => {
                (self.view, self.modal) = modal::open_create(self.view);
                vec![]
            }
            Msg::EditLoaded(Ok(task)) => {
                (self.view, self.modal) = modal::open_edit(self.view, &task, &self.zone);
                vec![]
            }
            Msg::FormInput(field, value) => {
                if let Some(form) = self.modal.form_mut() {
                    form.set(field, value);
                }
                vec![]
            }
            Msg::Submit => {
                let Some(form) = self.modal.form() else {
                    return vec![];
                };
                let payload = form.to_payload();
                let request = match self.view.editing() {
                    Some(id) => ApiRequest::Update(id, payload),
                    None => ApiRequest::Create(payload),
                };
                vec![Effect::Request(request)]
            }
            Msg::Saved(Ok(())) => {
                (self.view, self.modal) = modal::close(self.view);
                self.refresh_all()
            }
            Msg::CloseModal => {
                (self.view, self.modal) = modal::close(self.view);
                vec![]
            }

            Msg::CardClicked { action, task_id } => {
                match render::decode_card_action(action.as_deref(), task_id.as_deref()) {
                    Some((action, id)) => self.update(Msg::CardAction(action, id)),
                    None => vec![],
                }
            }
            Msg::CardAction(CardAction::Complete, id) => {
                vec![Effect::Request(ApiRequest::Complete(id))]
            }
            Msg::CardAction(CardAction::Edit, id) => {
                vec![Effect::Request(ApiRequest::FetchTask(id))]
            }
            Msg::CardAction(CardAction::Delete, id) => vec![Effect::Confirm {
                message: DELETE_PROMPT.to_string(),
                then: Box::new(Msg::DeleteConfirmed(id)),
            }],
            Msg::DeleteConfirmed(id) => vec![Effect::Request(ApiRequest::Delete(id))],
            Msg::Mutated(Ok(())) => self.refresh_all(),

            Msg::FilterChanged(filter) => {
                self.view = self.view.with_filter(filter);
                vec![Effect::Request(ApiRequest::FetchTasks(filter))]
            }
            Msg::SmartSort => vec![Effect::Request(ApiRequest::SmartSort)],
            Msg::SmartSorted(Ok(tasks)) => {
                self.task_failure = None;
                self.tasks = Some(TaskSection {
                    count_label: render::ai_count_label(tasks.len()),
                    tasks,
                    order: TaskOrder::AiRanked,
                });
                vec![]
            }

            Msg::EditLoaded(Err(err))
            | Msg::Saved(Err(err))
            | Msg::Mutated(Err(err))
            | Msg::SmartSorted(Err(err)) => vec![surface(&err)],
        }
    }
}

/// A failed leg leaves its own section alone and never blocks the others.
fn leg_failed(section: &str, err: &ApiError) -> Effect {
    match err {
        ApiError::Decode(_) => error!(section, %err, "backend response broke the contract"),
        _ => warn!(section, %err, "refresh failed"),
    }
    Effect::Alert(err.user_message())
}

fn surface(err: &ApiError) -> Effect {
    warn!(%err, "operation failed");
    Effect::Alert(err.user_message())
}
