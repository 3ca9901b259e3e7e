// Shared in-memory mock engine for driver integration tests.
//
// Mirrors the sandbox semantics of the real engine: inputs must be staged
// before a transcode, outputs only exist after a successful transcode.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use waveshift_core::{CoreError, CoreResult, TranscodeEngine, TranscodeRequest};

#[derive(Default)]
pub struct MockEngine {
    files: RefCell<HashMap<String, Vec<u8>>>,
    write_calls: RefCell<Vec<String>>,
    transcode_calls: RefCell<Vec<TranscodeRequest>>,
    fail_on_calls: RefCell<Vec<usize>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Default::default()
    }

    /// Makes the nth transcode call (0-based) fail with a simulated error.
    pub fn fail_on_call(&self, index: usize) {
        self.fail_on_calls.borrow_mut().push(index);
    }

    pub fn write_calls(&self) -> Vec<String> {
        self.write_calls.borrow().clone()
    }

    pub fn transcode_calls(&self) -> Vec<TranscodeRequest> {
        self.transcode_calls.borrow().clone()
    }
}

impl TranscodeEngine for MockEngine {
    fn write_input(&self, name: &str, bytes: &[u8]) -> CoreResult<()> {
        self.write_calls.borrow_mut().push(name.to_string());
        self.files
            .borrow_mut()
            .insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    fn transcode(&self, request: &TranscodeRequest) -> CoreResult<()> {
        let call_index = self.transcode_calls.borrow().len();
        self.transcode_calls.borrow_mut().push(request.clone());

        if self.fail_on_calls.borrow().contains(&call_index) {
            return Err(CoreError::OperationFailed(
                "simulated engine failure".to_string(),
            ));
        }

        let input = self
            .files
            .borrow()
            .get(&request.input_name)
            .cloned()
            .ok_or_else(|| {
                CoreError::OperationFailed(format!(
                    "no staged input named {}",
                    request.input_name
                ))
            })?;

        let mut output = b"converted:".to_vec();
        output.extend_from_slice(&input);
        self.files
            .borrow_mut()
            .insert(request.output_name.clone(), output);
        Ok(())
    }

    fn read_output(&self, name: &str) -> CoreResult<Vec<u8>> {
        self.files
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| CoreError::OperationFailed(format!("no staged output named {name}")))
    }
}
