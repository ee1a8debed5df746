//! Everything a controller needs to talk to the backend and the user.

use std::rc::Rc;

use serde_json::Value;

use super::config::ConsoleConfig;
use super::dialogs::{BrowserDialogs, Dialogs};
use super::navigation::{BrowserNavigator, PageNavigator};
use super::transport::{ApiRequest, HttpClient, ReqwestClient, Transport, TransportError};

/// Shared through Dioxus context; cheap to clone.
#[derive(Clone)]
pub struct ConsoleEnv {
    pub transport: Transport,
    pub dialogs: Rc<dyn Dialogs>,
    pub navigator: Rc<dyn PageNavigator>,
    pub config: ConsoleConfig,
}

impl ConsoleEnv {
    pub fn new(
        client: Rc<dyn HttpClient>,
        dialogs: Rc<dyn Dialogs>,
        navigator: Rc<dyn PageNavigator>,
        config: ConsoleConfig,
    ) -> Self {
        Self {
            transport: Transport::new(client, config.api_base.clone()),
            dialogs,
            navigator,
            config,
        }
    }

    /// reqwest + `window.alert`/`confirm` + `window.location`.
    pub fn browser(config: ConsoleConfig) -> Self {
        Self::new(
            Rc::new(ReqwestClient::new()),
            Rc::new(BrowserDialogs),
            Rc::new(BrowserNavigator),
            config,
        )
    }

    pub async fn request(&self, request: &ApiRequest) -> Result<Value, TransportError> {
        self.transport.send(request, self.dialogs.as_ref()).await
    }

    /// Like [`ConsoleEnv::request`] but leaves reporting to the caller.
    pub async fn fetch(&self, request: &ApiRequest) -> Result<Value, TransportError> {
        self.transport.fetch(request).await
    }

    pub async fn alert(&self, message: &str) {
        self.dialogs.alert(message).await;
    }

    pub async fn confirm(&self, message: &str) -> bool {
        self.dialogs.confirm(message).await
    }
}
