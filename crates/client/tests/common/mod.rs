//! Shared helpers for integration tests.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use partsmarket_client::storage::{KeyValueStorage, MemoryStorage};
use partsmarket_client::ui::{NoopUi, Route, UiHooks};
use partsmarket_client::{App, ClientConfig};
use wiremock::MockServer;

/// Build an [`App`] against a mock server with the given storage and UI hooks.
pub fn app_with(
    server: &MockServer,
    storage: Arc<dyn KeyValueStorage>,
    ui: Arc<dyn UiHooks>,
) -> App {
    let config = ClientConfig::new(server.uri()).expect("mock server uri is a valid base url");
    App::new(config, storage, ui)
}

/// Build an [`App`] with fresh in-memory storage and no-op UI hooks.
pub fn app(server: &MockServer) -> App {
    app_with(server, Arc::new(MemoryStorage::new()), Arc::new(NoopUi))
}

/// Records every UI signal for assertions.
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub successes: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
    pub routes: Mutex<Vec<Route>>,
}

impl RecordingUi {
    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl UiHooks for RecordingUi {
    fn notify_success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn notify_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}
