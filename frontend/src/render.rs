//! Task and suggestion records mapped to a display model.
//!
//! Nothing here touches the DOM; `view` turns these values into nodes.

use chrono::{DateTime, TimeZone};
use taskboard_shared::{OverviewStats, Priority, Suggestion, Task, TaskId};

use crate::date;
use crate::error::RenderError;

pub const EMPTY_ICON: &str = "📭";
pub const EMPTY_MESSAGE: &str = "No tasks found. Create a new one!";

pub fn priority_icon(priority: Priority) -> &'static str {
    match priority {
        Priority::Urgent => "🔴",
        Priority::High => "🟠",
        Priority::Medium => "🟡",
        Priority::Low => "🟢",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardAction {
    Complete,
    Edit,
    Delete,
}

impl CardAction {
    pub const ALL: [CardAction; 3] = [CardAction::Complete, CardAction::Edit, CardAction::Delete];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardAction::Complete => "complete",
            CardAction::Edit => "edit",
            CardAction::Delete => "delete",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardAction::Complete => "✅ Complete",
            CardAction::Edit => "✏️ Edit",
            CardAction::Delete => "🗑️ Delete",
        }
    }
}

/// Maps the attributes carried by a card button back to the action it
/// stands for. Clicks that did not land on a well-formed button yield `None`.
pub fn decode_card_action(action: Option<&str>, task_id: Option<&str>) -> Option<(CardAction, TaskId)> {
    Some((CardAction::parse(action?)?, task_id?.parse().ok()?))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Priority(Priority),
    Category,
    Time,
    Due,
}

impl BadgeKind {
    pub fn class_name(&self) -> String {
        match self {
            BadgeKind::Priority(priority) => format!("task-badge badge-priority {}", priority.as_str()),
            BadgeKind::Category => "task-badge badge-category".to_string(),
            BadgeKind::Time => "task-badge badge-time".to_string(),
            BadgeKind::Due => "task-badge badge-due".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub kind: BadgeKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskCard {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub badges: Vec<Badge>,
    pub actions: Vec<CardAction>,
}

impl TaskCard {
    pub fn class_name(&self) -> &'static str {
        if self.completed {
            "task-card completed"
        } else {
            "task-card"
        }
    }

    pub fn badge(&self, kind: BadgeKind) -> Option<&Badge> {
        self.badges.iter().find(|badge| badge.kind == kind)
    }

    pub fn has_action(&self, action: CardAction) -> bool {
        self.actions.contains(&action)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskNode {
    Empty { icon: &'static str, message: &'static str },
    Card(TaskCard),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionCard {
    pub class_name: String,
    pub icon: String,
    pub title: String,
    pub message: String,
}

pub fn render_task_card<Tz: TimeZone>(task: &Task, now: &DateTime<Tz>) -> Result<TaskCard, RenderError> {
    let mut badges = vec![Badge {
        kind: BadgeKind::Priority(task.priority),
        text: format!(
            "{} {}",
            priority_icon(task.priority),
            task.priority.as_str().to_uppercase()
        ),
    }];

    if let Some(category) = task.category.as_deref().filter(|c| !c.is_empty()) {
        badges.push(Badge {
            kind: BadgeKind::Category,
            text: format!("📂 {category}"),
        });
    }

    if let Some(minutes) = task.estimated_time.filter(|m| *m != 0) {
        badges.push(Badge {
            kind: BadgeKind::Time,
            text: format!("⏱️ {minutes}min"),
        });
    }

    if let Some(raw) = task.due_date.as_deref().filter(|d| !d.is_empty()) {
        let label = date::due_label(raw, now).ok_or_else(|| RenderError::InvalidDueDate {
            task_id: task.id,
            value: raw.to_string(),
        })?;
        badges.push(Badge {
            kind: BadgeKind::Due,
            text: format!("📅 {label}"),
        });
    }

    let mut actions = Vec::with_capacity(3);
    if !task.is_completed() {
        actions.push(CardAction::Complete);
    }
    actions.push(CardAction::Edit);
    actions.push(CardAction::Delete);

    Ok(TaskCard {
        id: task.id,
        title: task.title.clone(),
        description: task.description.clone().filter(|d| !d.is_empty()),
        completed: task.is_completed(),
        badges,
        actions,
    })
}

/// One node per task in the given order, or a single empty-state node.
pub fn render_task_list<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> Result<Vec<TaskNode>, RenderError> {
    if tasks.is_empty() {
        return Ok(vec![TaskNode::Empty {
            icon: EMPTY_ICON,
            message: EMPTY_MESSAGE,
        }]);
    }

    tasks
        .iter()
        .map(|task| render_task_card(task, now).map(TaskNode::Card))
        .collect()
}

pub fn render_suggestion_list(suggestions: &[Suggestion]) -> Vec<SuggestionCard> {
    suggestions
        .iter()
        .map(|suggestion| SuggestionCard {
            class_name: format!("suggestion-card {}", suggestion.kind),
            icon: suggestion.icon.clone(),
            title: suggestion.title.clone(),
            message: suggestion.message.clone(),
        })
        .collect()
}

pub fn count_label(count: usize) -> String {
    format!("{count} task(s)")
}

pub fn ai_count_label(count: usize) -> String {
    format!("{count} task(s) (AI-ordered)")
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
}

pub fn render_stats(stats: &OverviewStats) -> Vec<StatTile> {
    vec![
        StatTile { label: "Total", value: stats.total_tasks.to_string() },
        StatTile { label: "Pending", value: stats.pending.to_string() },
        StatTile { label: "In Progress", value: stats.in_progress.to_string() },
        StatTile { label: "Completed", value: stats.completed.to_string() },
        StatTile { label: "Completion", value: format!("{:.1}%", stats.completion_rate) },
        StatTile { label: "Urgent Pending", value: stats.urgent_pending.to_string() },
    ]
}
