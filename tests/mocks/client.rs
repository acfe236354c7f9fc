use condensa::agent::CompletionClient;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockCompletionClient {
    pub completion: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockCompletionClient {
    pub fn new(completion: &str) -> Self {
        Self {
            completion: completion.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            completion: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl CompletionClient for MockCompletionClient {
    type Error = String;

    async fn complete(&self, _api_key: &str, prompt: &str) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push(prompt.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(msg.clone());
        }
        Ok(self.completion.clone())
    }
}
