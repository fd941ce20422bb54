use thiserror::Error;

pub const GENERIC_FAILURE: &str = "Request failed";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{message} (HTTP {status})")]
    Rejected { status: u16, message: String },

    #[error("network error: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown to the user. Backend messages pass through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message, .. } => message.clone(),
            ApiError::Transport(_) => GENERIC_FAILURE.to_string(),
            ApiError::Decode(detail) => format!("Unexpected response from server: {detail}"),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("task {task_id} has an unreadable due date {value:?}")]
    InvalidDueDate { task_id: i64, value: String },
}
