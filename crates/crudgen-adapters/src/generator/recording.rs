//! Recording generator for testing.

use std::sync::{Arc, Mutex};

use crudgen_core::{application::ports::Generator, error::Result};

/// Test double that records every generator invocation and always succeeds.
///
/// Cloning shares the recording, so a test can keep a handle and assert on
/// what the service invoked through its own clone.
#[derive(Debug, Clone, Default)]
pub struct RecordingGenerator {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded invocation, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Generator for RecordingGenerator {
    fn make_model(&self, class_name: &str) -> Result<()> {
        self.record(format!("make:model {class_name} -m"));
        Ok(())
    }

    fn make_resource(&self, class_name: &str) -> Result<()> {
        self.record(format!("make:resource {class_name}"));
        Ok(())
    }

    fn make_factory(&self, class_name: &str, model: &str) -> Result<()> {
        self.record(format!("make:factory {class_name} --model={model}"));
        Ok(())
    }

    fn make_annotation(&self, model: &str) -> Result<()> {
        self.record(format!("make:annotation {model}"));
        Ok(())
    }
}
