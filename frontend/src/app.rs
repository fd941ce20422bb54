use chrono::Local;
use sauron::prelude::*;
use tracing::{debug, warn};

use crate::api;
use crate::config::ClientConfig;
use crate::controller::{Dashboard, Effect, Msg};
use crate::http::HttpApi;
use crate::view;

/// The browser application: the dashboard core plus the effect runner.
pub struct App {
    dashboard: Dashboard<Local>,
    api: HttpApi,
}

impl App {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            dashboard: Dashboard::new(Local),
            api: HttpApi::new(config),
        }
    }

    fn dispatch(&mut self, msg: Msg) -> Cmd<Msg> {
        let effects = self.dashboard.update(msg);
        self.run(effects)
    }

    fn run(&mut self, effects: Vec<Effect>) -> Cmd<Msg> {
        let mut cmds = Vec::new();
        for effect in effects {
            match effect {
                Effect::Request(request) => {
                    debug!(?request, "queueing request");
                    let api = self.api.clone();
                    cmds.push(Cmd::new(async move { api::perform(&api, request).await }));
                }
                Effect::Alert(message) => alert(&message),
                Effect::Confirm { message, then } => {
                    if confirm(&message) {
                        cmds.push(self.dispatch(*then));
                    }
                }
            }
        }

        if cmds.is_empty() {
            Cmd::none()
        } else {
            Cmd::batch(cmds)
        }
    }
}

impl Application for App {
    type MSG = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        self.dispatch(Msg::Init)
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        self.dispatch(msg)
    }

    fn view(&self) -> Node<Msg> {
        view::view_dashboard(&self.dashboard, &Local::now())
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.alert_with_message(&format!("Error: {message}")) {
            warn!(?err, "alert could not be shown");
        }
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
