//! Fakes compartidos por los tests del crate.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::Value;

use crate::error::ApiError;
use crate::services::platform::{NotificationLevel, Navigator, Notifier, Platform, Scheduler};
use crate::services::transport::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::utils::storage::KeyValueStorage;

enum Reply {
    Ready(Result<HttpResponse, ApiError>),
    Deferred(oneshot::Receiver<HttpResponse>),
}

/// Transport con respuestas encoladas por (método, ruta)
#[derive(Default)]
pub(crate) struct FakeTransport {
    replies: RefCell<HashMap<(HttpMethod, String), VecDeque<Reply>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    fn push(&self, method: HttpMethod, path: &str, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    pub fn respond(&self, method: HttpMethod, path: &str, status: u16, body: Value) {
        self.push(method, path, Reply::Ready(Ok(HttpResponse::new(status, body))));
    }

    pub fn fail(&self, method: HttpMethod, path: &str, error: ApiError) {
        self.push(method, path, Reply::Ready(Err(error)));
    }

    /// La respuesta llega cuando el test la envía por el sender
    pub fn defer(&self, method: HttpMethod, path: &str) -> oneshot::Sender<HttpResponse> {
        let (tx, rx) = oneshot::channel();
        self.push(method, path, Reply::Deferred(rx));
        tx
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<HttpRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let key = (request.method, request.path.clone());
        self.requests.borrow_mut().push(request);
        let reply = self
            .replies
            .borrow_mut()
            .get_mut(&key)
            .and_then(VecDeque::pop_front);

        match reply {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Deferred(rx)) => rx
                .await
                .map_err(|_| ApiError::Network("respuesta cancelada".to_string())),
            None => Err(ApiError::Network(format!("sin respuesta para {:?} {}", key.0, key.1))),
        }
    }
}

#[derive(Default)]
pub(crate) struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    pub fail_writes: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with(key: &str, value: &str) -> Rc<Self> {
        let storage = Self::new();
        storage.values.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ApiError> {
        if self.fail_writes.get() {
            return Err(ApiError::Storage("quota".to_string()));
        }
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ApiError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub messages: RefCell<Vec<(NotificationLevel, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

pub(crate) struct FakeNavigator {
    pub path: RefCell<String>,
    pub redirects: RefCell<Vec<String>>,
}

impl FakeNavigator {
    pub fn at(path: &str) -> Self {
        Self {
            path: RefCell::new(path.to_string()),
            redirects: RefCell::new(Vec::new()),
        }
    }
}

impl Navigator for FakeNavigator {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn redirect(&self, path: &str) {
        *self.path.borrow_mut() = path.to_string();
        self.redirects.borrow_mut().push(path.to_string());
    }
}

/// Scheduler que solo ejecuta cuando el test lo pide
#[derive(Default)]
pub(crate) struct ManualScheduler {
    tasks: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.tasks.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    pub fn run_pending(&self) {
        let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
        for (_, task) in tasks {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.tasks.borrow_mut().push((delay_ms, task));
    }
}

/// Plataforma fake con acceso a cada pieza
pub(crate) struct TestPlatform {
    pub navigator: Rc<FakeNavigator>,
    pub notifier: Rc<RecordingNotifier>,
    pub scheduler: Rc<ManualScheduler>,
}

impl TestPlatform {
    pub fn at(path: &str) -> Self {
        Self {
            navigator: Rc::new(FakeNavigator::at(path)),
            notifier: Rc::new(RecordingNotifier::default()),
            scheduler: Rc::new(ManualScheduler::default()),
        }
    }

    pub fn platform(&self) -> Platform {
        Platform {
            navigator: self.navigator.clone(),
            notifier: self.notifier.clone(),
            scheduler: self.scheduler.clone(),
        }
    }

    pub fn notifications(&self) -> Vec<(NotificationLevel, String)> {
        self.notifier.messages.borrow().clone()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.navigator.redirects.borrow().clone()
    }
}
