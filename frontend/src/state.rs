use taskboard_shared::{Priority, Status, TaskId};

/// Active list filter. `None` means no filter on that dimension and goes
/// out as an empty query value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filter {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
}

impl Filter {
    /// Builds a filter from raw control values; anything unrecognised,
    /// including the empty string, clears that dimension.
    pub fn from_controls(status: &str, priority: &str) -> Self {
        Self {
            status: Status::parse(status),
            priority: Priority::parse(priority),
        }
    }

    pub fn status_value(&self) -> &'static str {
        self.status.map(|s| s.as_str()).unwrap_or("")
    }

    pub fn priority_value(&self) -> &'static str {
        self.priority.map(|p| p.as_str()).unwrap_or("")
    }

    /// `status=...&priority=...`, both keys always present.
    pub fn query_string(&self) -> String {
        format!("status={}&priority={}", self.status_value(), self.priority_value())
    }
}

/// Session-only view state: the filter and the task being edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    filter: Filter,
    editing: Option<TaskId>,
}

impl ViewState {
    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn with_filter(self, filter: Filter) -> Self {
        Self { filter, ..self }
    }

    pub fn with_editing(self, editing: Option<TaskId>) -> Self {
        Self { editing, ..self }
    }
}
