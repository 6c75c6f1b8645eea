//! Stub ports shared by application and HTTP tests.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tempfile::TempDir;

use crate::domain::document::{artifact_file_name, DocumentRecord};
use crate::ports::{
    AccessToken, Artifact, CompileError, DocumentGenerator, GenerationError, TaskTracker,
    TrackerError,
};

pub(crate) const STUB_PDF: &[u8] = b"%PDF-1.4 stub";

/// Task tracker answering from canned responses keyed by endpoint.
#[derive(Default)]
pub(crate) struct StubTracker {
    responses: HashMap<String, Value>,
    failure: Option<TrackerError>,
    exchanged: Mutex<Vec<String>>,
    requests: Mutex<Vec<(String, String)>>,
}

impl StubTracker {
    pub(crate) fn failing(error: TrackerError) -> Self {
        Self {
            failure: Some(error),
            ..Default::default()
        }
    }

    pub(crate) fn with_response(mut self, endpoint: &str, body: Value) -> Self {
        self.responses.insert(endpoint.to_string(), body);
        self
    }

    pub(crate) fn exchanged_codes(&self) -> Vec<String> {
        self.exchanged.lock().unwrap().clone()
    }

    /// `(token, endpoint)` pairs in request order.
    pub(crate) fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaskTracker for StubTracker {
    fn authorize_url(&self) -> String {
        "https://app.clickup.com/api?client_id=stub&redirect_uri=http%3A%2F%2Flocalhost%2Fcb"
            .to_string()
    }

    async fn exchange_code(&self, code: &str) -> Result<AccessToken, TrackerError> {
        self.exchanged.lock().unwrap().push(code.to_string());
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(AccessToken::new(format!("token-for-{}", code))),
        }
    }

    async fn fetch_json(&self, token: &AccessToken, endpoint: &str) -> Result<Value, TrackerError> {
        self.requests
            .lock()
            .unwrap()
            .push((token.expose().to_string(), endpoint.to_string()));

        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.responses
            .get(endpoint)
            .cloned()
            .ok_or_else(|| TrackerError::Api {
                status: 404,
                message: format!("no stub for {}", endpoint),
            })
    }
}

/// Generator writing a fixed PDF into a fresh temp directory.
#[derive(Default)]
pub(crate) struct StubGenerator {
    fail: bool,
    records: Mutex<Vec<DocumentRecord>>,
}

impl StubGenerator {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub(crate) fn records(&self) -> Vec<DocumentRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentGenerator for StubGenerator {
    async fn generate(&self, record: DocumentRecord) -> Result<Artifact, GenerationError> {
        self.records.lock().unwrap().push(record.clone());

        if self.fail {
            return Err(GenerationError::Compile(CompileError::MissingOutput {
                status: "exit status: 1".to_string(),
                expected: PathBuf::from("/tmp/render-stub/build/output.pdf"),
            }));
        }

        let dir = TempDir::new().map_err(GenerationError::Workspace)?;
        let path = dir
            .path()
            .join(artifact_file_name(&record.title, record.order_date()));
        std::fs::write(&path, STUB_PDF).map_err(GenerationError::Workspace)?;
        Ok(Artifact::new(path, dir))
    }

    async fn is_available(&self) -> bool {
        !self.fail
    }
}
