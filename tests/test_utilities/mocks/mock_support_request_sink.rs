use eol_report::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock SupportRequestSink for testing that captures submitted requests
#[derive(Default, Clone)]
pub struct MockSupportRequestSink {
    pub submitted: Arc<Mutex<Vec<SupportRequest>>>,
}

impl MockSupportRequestSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_submitted(&self) -> Vec<SupportRequest> {
        self.submitted.lock().unwrap().clone()
    }
}

impl SupportRequestSink for MockSupportRequestSink {
    fn submit(&self, request: &SupportRequest) -> Result<()> {
        self.submitted.lock().unwrap().push(request.clone());
        Ok(())
    }
}
