//! In-memory doubles for the transport, dialog and navigation seams.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use super::config::ConsoleConfig;
use super::dialogs::Dialogs;
use super::env::ConsoleEnv;
use super::navigation::PageNavigator;
use super::transport::{EncodedRequest, HttpClient, NetworkError, RawResponse};

#[derive(Default)]
pub struct FakeHttp {
    responses: RefCell<VecDeque<Result<RawResponse, NetworkError>>>,
    requests: RefCell<Vec<EncodedRequest>>,
}

impl FakeHttp {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn respond(&self, status: u16, status_text: &str, body: &str) {
        self.responses.borrow_mut().push_back(Ok(RawResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }));
    }

    pub fn respond_json(&self, status: u16, body: Value) {
        self.respond(status, "OK", &body.to_string());
    }

    pub fn fail(&self, reason: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(NetworkError(reason.to_string())));
    }

    pub fn requests(&self) -> Vec<EncodedRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpClient for FakeHttp {
    async fn execute(&self, request: EncodedRequest) -> Result<RawResponse, NetworkError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(NetworkError("no response scripted".into())))
    }
}

pub struct RecordingDialogs {
    alerts: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
    answer: Cell<bool>,
}

impl RecordingDialogs {
    pub fn new() -> Rc<Self> {
        Self::answering(true)
    }

    pub fn answering(answer: bool) -> Rc<Self> {
        Rc::new(Self {
            alerts: RefCell::new(Vec::new()),
            confirms: RefCell::new(Vec::new()),
            answer: Cell::new(answer),
        })
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Dialogs for RecordingDialogs {
    async fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    async fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.answer.get()
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    reloads: Cell<usize>,
    redirects: RefCell<Vec<String>>,
    delays: RefCell<Vec<u64>>,
}

impl RecordingNavigator {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn reloads(&self) -> usize {
        self.reloads.get()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }

    pub fn delays(&self) -> Vec<u64> {
        self.delays.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PageNavigator for RecordingNavigator {
    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }

    fn redirect(&self, url: &str) {
        self.redirects.borrow_mut().push(url.to_string());
    }

    async fn reload_after(&self, delay_ms: u64) {
        self.delays.borrow_mut().push(delay_ms);
        self.reload();
    }
}

/// A fully faked environment plus handles to inspect it.
pub struct Harness {
    pub env: ConsoleEnv,
    pub http: Rc<FakeHttp>,
    pub dialogs: Rc<RecordingDialogs>,
    pub navigator: Rc<RecordingNavigator>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_dialogs(RecordingDialogs::new())
    }

    pub fn declining() -> Self {
        Self::with_dialogs(RecordingDialogs::answering(false))
    }

    fn with_dialogs(dialogs: Rc<RecordingDialogs>) -> Self {
        crate::i18n::init();
        let http = FakeHttp::new();
        let navigator = RecordingNavigator::new();
        let env = ConsoleEnv::new(
            http.clone(),
            dialogs.clone(),
            navigator.clone(),
            ConsoleConfig::default().with_api_base("http://console.test"),
        );
        Self {
            env,
            http,
            dialogs,
            navigator,
        }
    }
}
