pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod date;
pub mod error;
pub mod http;
pub mod modal;
pub mod render;
pub mod state;
pub mod view;

pub use api::{perform, ApiRequest, TaskApi};
pub use config::ClientConfig;
pub use controller::{Dashboard, Effect, Msg, TaskOrder, TaskSection};
pub use error::{ApiError, RenderError};

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    use sauron::prelude::*;

    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    let config = ClientConfig::from_document();
    tracing::info!(api_base = %config.api_base, "starting task board");

    Program::mount_to_body(app::App::new(config));
}
