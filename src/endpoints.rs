use log::{debug, info, warn};
use rocket::{State, form::Form, get, http::Status, post, response::content::RawHtml};
use tokio::sync::Mutex;

use crate::{
    actions::{ActionError, ActionFields, ActionRegistry},
    roster::HttpRoster,
    view::ViewController,
};

/// Everything the page endpoints share: one controller, one registry
pub struct App {
    pub controller: Mutex<ViewController<HttpRoster>>,
    pub registry: ActionRegistry,
}

impl App {
    pub fn new(roster: HttpRoster) -> Self {
        Self {
            controller: Mutex::new(ViewController::new(roster)),
            registry: ActionRegistry::default(),
        }
    }
}

/// Endpoint serving the page, loading the roster on every visit
#[get("/")]
pub async fn index(app: &State<App>) -> RawHtml<String> {
    info!("Request to /");
    let mut controller = app.controller.lock().await;
    if let Err(e) = controller.init().await {
        debug!("Roster load failed: {}", e);
    }
    RawHtml(controller.page())
}

/// Endpoint receiving the page's buttons and form submissions
#[post("/actions/<name>", data = "<fields>")]
pub async fn dispatch_action(
    name: &str,
    fields: Form<ActionFields>,
    app: &State<App>,
) -> Result<RawHtml<String>, Status> {
    info!("Request to /actions/{}", name);

    let action = app.registry.bind(name, &fields).map_err(|e| {
        warn!("Rejected action: {}", e);
        match e {
            ActionError::Unknown(_) => Status::NotFound,
            ActionError::MissingField { .. } => Status::BadRequest,
        }
    })?;

    let mut controller = app.controller.lock().await;
    if let Err(e) = controller.dispatch(action).await {
        debug!("Action '{}' did not complete: {}", name, e);
    }
    Ok(RawHtml(controller.page()))
}
