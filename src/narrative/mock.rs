use std::sync::Mutex;

use super::{CompletionRequest, ServiceError, TextGenerator};

/// Returns a fixed reply and remembers the last request it saw.
pub struct MockTextGenerator {
    response: String,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl MockTextGenerator {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            last_request: Mutex::new(None),
        }
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().ok().and_then(|guard| guard.clone())
    }
}

impl TextGenerator for MockTextGenerator {
    fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError> {
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(request.clone());
        }
        Ok(self.response.clone())
    }
}

/// Always fails with the configured error.
pub struct FailingTextGenerator {
    error: ServiceError,
}

impl FailingTextGenerator {
    pub fn new(error: ServiceError) -> Self {
        Self { error }
    }
}

impl Default for FailingTextGenerator {
    fn default() -> Self {
        Self::new(ServiceError::Unavailable)
    }
}

impl TextGenerator for FailingTextGenerator {
    fn complete(&self, _request: &CompletionRequest) -> Result<String, ServiceError> {
        Err(self.error.clone())
    }
}
