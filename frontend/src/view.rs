use chrono::{DateTime, TimeZone};
use sauron::{
    html::{attributes::*, *},
    prelude::*,
};
use taskboard_shared::{Priority, Status};
use tracing::error;
use wasm_bindgen::JsCast;

use crate::controller::{Dashboard, Msg, TaskSection};
use crate::modal::{FormField, ModalState, TaskForm};
use crate::render::{self, SuggestionCard, TaskCard, TaskNode};
use crate::state::Filter;

pub fn view_dashboard<Tz: TimeZone>(dashboard: &Dashboard<Tz>, now: &DateTime<Tz>) -> Node<Msg> {
    div(
        [class("container")],
        [
            view_header(),
            view_stats(dashboard),
            view_suggestions(dashboard.suggestions().map(render::render_suggestion_list)),
            view_controls(dashboard.view_state().filter()),
            view_tasks(dashboard.tasks(), dashboard.task_failure(), now),
            view_modal(dashboard.modal_state(), dashboard.modal().form()),
        ],
    )
}

fn view_header() -> Node<Msg> {
    header([class("header")], [
        h1([class("app-title")], [text("🧠 Task Board")]),
        button([
            class("btn btn-primary"),
            r#type("button"),
            on_click(|_| Msg::NewTask),
        ], [text("➕ New Task")]),
    ])
}

fn view_stats<Tz: TimeZone>(dashboard: &Dashboard<Tz>) -> Node<Msg> {
    let tiles = match dashboard.stats() {
        Some(stats) => render::render_stats(stats),
        None => vec![],
    };
    div(
        [class("stats-grid")],
        tiles.into_iter().map(|tile| {
            div([class("stat-card")], [
                p([class("stat-value")], [text(&tile.value)]),
                p([class("stat-label")], [text(tile.label)]),
            ])
        }),
    )
}

fn view_suggestions(cards: Option<Vec<SuggestionCard>>) -> Node<Msg> {
    div(
        [class("suggestions")],
        cards.unwrap_or_default().into_iter().map(|card| {
            div([class(&card.class_name)], [
                div([class("suggestion-header")], [
                    span([class("suggestion-icon")], [text(&card.icon)]),
                    span([class("suggestion-title")], [text(&card.title)]),
                ]),
                p([class("suggestion-message")], [text(&card.message)]),
            ])
        }),
    )
}

fn view_controls(filter: Filter) -> Node<Msg> {
    let current_status = filter.status_value();
    let current_priority = filter.priority_value();

    let status_options = std::iter::once(("", "All statuses"))
        .chain(Status::ALL.into_iter().map(|s| (s.as_str(), status_label(s))));
    let priority_options = std::iter::once(("", "All priorities"))
        .chain(Priority::ALL.into_iter().map(|p| (p.as_str(), p.as_str())));

    div([class("filters")], [
        select(
            [
                class("filter-select"),
                on_input(move |event| {
                    Msg::FilterChanged(Filter::from_controls(&event.value(), current_priority))
                }),
            ],
            status_options.map(|(option_value, option_label)| {
                view_option(option_value, option_label, option_value == current_status)
            }),
        ),
        select(
            [
                class("filter-select"),
                on_input(move |event| {
                    Msg::FilterChanged(Filter::from_controls(current_status, &event.value()))
                }),
            ],
            priority_options.map(|(option_value, option_label)| {
                view_option(option_value, option_label, option_value == current_priority)
            }),
        ),
        button([
            class("btn btn-ai"),
            r#type("button"),
            on_click(|_| Msg::SmartSort),
        ], [text("🤖 Smart Sort")]),
    ])
}

fn view_option(option_value: &str, option_label: &str, is_selected: bool) -> Node<Msg> {
    let mut attrs = vec![value(option_value.to_string())];
    if is_selected {
        attrs.push(selected(true));
    }
    option(attrs, [text(option_label)])
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Pending => "Pending",
        Status::InProgress => "In Progress",
        Status::Completed => "Completed",
    }
}

fn view_tasks<Tz: TimeZone>(
    section: Option<&TaskSection>,
    failure: Option<&str>,
    now: &DateTime<Tz>,
) -> Node<Msg> {
    if let Some(failure) = failure {
        return div([class("tasks-section")], [
            div([class("tasks-container render-error")], [text(&format!("⚠️ {failure}"))]),
        ]);
    }
    let Some(section) = section else {
        return div([class("tasks-section")], [p([class("task-count")], [text("Loading...")])]);
    };

    let body = match render::render_task_list(&section.tasks, now) {
        Ok(nodes) => div(
            [class("tasks-container"), on_click(card_clicked)],
            nodes.into_iter().map(view_task_node),
        ),
        Err(err) => {
            error!(%err, "task list could not be rendered");
            div([class("tasks-container render-error")], [text(&format!("⚠️ {err}"))])
        }
    };

    div([class("tasks-section")], [
        p([class("task-count")], [text(&section.count_label)]),
        body,
    ])
}

fn view_task_node(node: TaskNode) -> Node<Msg> {
    match node {
        TaskNode::Empty { icon, message } => div([class("empty-state")], [
            p([class("empty-icon")], [text(icon)]),
            p([], [text(message)]),
        ]),
        TaskNode::Card(card) => view_task_card(card),
    }
}

fn view_task_card(card: TaskCard) -> Node<Msg> {
    let id = card.id;
    let mut heading = vec![div([class("task-title")], [text(&card.title)])];
    if let Some(description) = &card.description {
        heading.push(div([class("task-description")], [text(description)]));
    }

    div([class(card.class_name())], [
        div([class("task-header")], [div([], heading)]),
        div(
            [class("task-meta")],
            card.badges
                .iter()
                .map(|badge| span([class(&badge.kind.class_name())], [text(&badge.text)])),
        ),
        div(
            [class("task-actions")],
            card.actions.iter().map(|&action| {
                button([
                    class(&format!("task-btn {}", action.as_str())),
                    r#type("button"),
                    attr("data-action", action.as_str()),
                    attr("data-task-id", id.to_string()),
                ], [text(action.label())])
            }),
        ),
    ])
}

/// One listener for every card button: the clicked button's data attributes
/// say what to do and to which task.
fn card_clicked(event: web_sys::MouseEvent) -> Msg {
    let button = event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|target| target.closest("[data-action]").ok().flatten());
    Msg::CardClicked {
        action: button.as_ref().and_then(|b| b.get_attribute("data-action")),
        task_id: button.as_ref().and_then(|b| b.get_attribute("data-task-id")),
    }
}

fn view_modal(state: ModalState, form: Option<&TaskForm>) -> Node<Msg> {
    let Some(form) = form else {
        return div([class("modal")], []);
    };

    div([class("modal active")], [
        div([class("modal-backdrop"), on_click(|_| Msg::CloseModal)], []),
        div([class("modal-content")], [
            div([class("modal-header")], [
                h2([], [text(state.title())]),
                button([
                    class("close-btn"),
                    r#type("button"),
                    on_click(|_| Msg::CloseModal),
                ], [text("✕")]),
            ]),
            div([class("task-form")], [
                input([
                    r#type("text"),
                    placeholder("Title"),
                    value(&form.title),
                    on_input(|event| Msg::FormInput(FormField::Title, event.value())),
                ], []),
                textarea([
                    placeholder("Description"),
                    value(&form.description),
                    on_input(|event| Msg::FormInput(FormField::Description, event.value())),
                ], []),
                select(
                    [on_input(|event| Msg::FormInput(FormField::Priority, event.value()))],
                    Priority::ALL.into_iter().map(|p| {
                        view_option(
                            p.as_str(),
                            &format!("{} {}", render::priority_icon(p), p.as_str()),
                            p == form.priority,
                        )
                    }),
                ),
                input([
                    r#type("text"),
                    placeholder("Category"),
                    value(&form.category),
                    on_input(|event| Msg::FormInput(FormField::Category, event.value())),
                ], []),
                input([
                    r#type("datetime-local"),
                    value(&form.due_date),
                    on_input(|event| Msg::FormInput(FormField::DueDate, event.value())),
                ], []),
                input([
                    r#type("number"),
                    placeholder("Estimated minutes"),
                    value(&form.estimated_time),
                    on_input(|event| Msg::FormInput(FormField::EstimatedTime, event.value())),
                ], []),
                div([class("form-actions")], [
                    button([
                        class("btn btn-secondary"),
                        r#type("button"),
                        on_click(|_| Msg::CloseModal),
                    ], [text("Cancel")]),
                    button([
                        class("btn btn-primary"),
                        r#type("button"),
                        on_click(|_| Msg::Submit),
                    ], [text("Save")]),
                ]),
            ]),
        ]),
    ])
}
