use std::collections::VecDeque;

use crate::Page;

/// Mocked modal dialog surface. Alerts are recorded for tests to drain;
/// prompt responses are scripted ahead of time. A `None` response models
/// the user cancelling the prompt.
#[derive(Debug, Default)]
pub(crate) struct DialogMocks {
    pub(crate) prompt_responses: VecDeque<Option<String>>,
    pub(crate) default_prompt_response: Option<String>,
    pub(crate) alert_messages: Vec<String>,
}

impl Page {
    pub fn enqueue_prompt_response(&mut self, value: Option<&str>) {
        self.dialogs
            .prompt_responses
            .push_back(value.map(std::string::ToString::to_string));
    }

    pub fn set_default_prompt_response(&mut self, value: Option<&str>) {
        self.dialogs.default_prompt_response = value.map(std::string::ToString::to_string);
    }

    pub fn take_alert_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.dialogs.alert_messages)
    }

    pub(crate) fn alert(&mut self, message: &str) {
        self.trace_log(format!("alert: {message}"));
        self.dialogs.alert_messages.push(message.to_string());
    }

    /// Fallback order: queued response, else the configured default
    /// response, else the prompt's own pre-filled default (auto-accept).
    pub(crate) fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        self.trace_log(format!("prompt: {message}"));
        match self.dialogs.prompt_responses.pop_front() {
            Some(response) => response,
            None => self
                .dialogs
                .default_prompt_response
                .clone()
                .or_else(|| Some(default.to_string())),
        }
    }
}
