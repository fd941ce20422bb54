//! Create/edit modal lifecycle.
//!
//! The modal is either closed or open with a form. Whether an open modal is
//! creating or editing is decided by the edit target held in [`ViewState`];
//! every transition here returns both halves so they cannot drift apart.

use chrono::TimeZone;
use taskboard_shared::{Priority, Task, TaskId, TaskPayload};

use crate::date;
use crate::state::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Priority,
    Category,
    DueDate,
    EstimatedTime,
}

/// Raw control values of the open form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: String,
    pub due_date: String,
    pub estimated_time: String,
}

impl TaskForm {
    pub fn from_task<Tz: TimeZone>(task: &Task, tz: &Tz) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            priority: task.priority,
            category: task.category.clone().unwrap_or_default(),
            due_date: task
                .due_date
                .as_deref()
                .and_then(|raw| date::to_input_value(raw, tz))
                .unwrap_or_default(),
            estimated_time: task
                .estimated_time
                .filter(|m| *m != 0)
                .map(|m| m.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::Description => self.description = value,
            FormField::Priority => self.priority = Priority::parse(&value).unwrap_or_default(),
            FormField::Category => self.category = value,
            FormField::DueDate => self.due_date = value,
            FormField::EstimatedTime => self.estimated_time = value,
        }
    }

    pub fn to_payload(&self) -> TaskPayload {
        fn non_empty(value: &str) -> Option<String> {
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        }

        TaskPayload {
            title: self.title.clone(),
            description: non_empty(&self.description),
            priority: self.priority,
            category: non_empty(&self.category),
            due_date: non_empty(self.due_date.trim()),
            estimated_time: self.estimated_time.trim().parse::<u32>().ok(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Modal {
    #[default]
    Closed,
    Open(TaskForm),
}

impl Modal {
    pub fn form(&self) -> Option<&TaskForm> {
        match self {
            Modal::Open(form) => Some(form),
            Modal::Closed => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut TaskForm> {
        match self {
            Modal::Open(form) => Some(form),
            Modal::Closed => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    OpenCreate,
    OpenEdit(TaskId),
}

impl ModalState {
    pub fn of(view: &ViewState, modal: &Modal) -> Self {
        match (modal, view.editing()) {
            (Modal::Closed, _) => ModalState::Closed,
            (Modal::Open(_), None) => ModalState::OpenCreate,
            (Modal::Open(_), Some(id)) => ModalState::OpenEdit(id),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ModalState::OpenEdit(_) => "Edit Task",
            _ => "New Task",
        }
    }
}

pub fn open_create(view: ViewState) -> (ViewState, Modal) {
    (view.with_editing(None), Modal::Open(TaskForm::default()))
}

/// `task` must be the fresh copy fetched for this edit.
pub fn open_edit<Tz: TimeZone>(view: ViewState, task: &Task, tz: &Tz) -> (ViewState, Modal) {
    (
        view.with_editing(Some(task.id)),
        Modal::Open(TaskForm::from_task(task, tz)),
    )
}

pub fn close(view: ViewState) -> (ViewState, Modal) {
    (view.with_editing(None), Modal::Closed)
}
