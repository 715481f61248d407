use std::collections::{HashMap, VecDeque};
use std::error::Error as StdError;
use std::fmt;

mod controller;
mod datefmt;
mod dialog;
mod dom;
mod email;

pub use controller::QUOTES;

use controller::{
    Action, ControllerState, Elements, EventKind, SkillsVisibility, ThemeMode, build_page_tree,
    declared_message_limit,
};
use dialog::DialogMocks;
use dom::{Dom, NodeId, truncate_chars};
use email::EmailShape;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    ElementNotFound(String),
    UnsupportedSelector(String),
    TypeMismatch {
        selector: String,
        expected: String,
        actual: String,
    },
    AssertionFailed {
        selector: String,
        expected: String,
        actual: String,
        dom_snippet: String,
    },
    InvalidArgument(String),
    Regex(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ElementNotFound(selector) => write!(f, "element not found: {selector}"),
            Self::UnsupportedSelector(selector) => write!(f, "unsupported selector: {selector}"),
            Self::TypeMismatch {
                selector,
                expected,
                actual,
            } => write!(
                f,
                "type mismatch for {selector}: expected {expected}, actual {actual}"
            ),
            Self::AssertionFailed {
                selector,
                expected,
                actual,
                dom_snippet,
            } => write!(
                f,
                "assertion failed for {selector}: expected {expected}, actual {actual}, snippet {dom_snippet}"
            ),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::Regex(msg) => write!(f, "regex error: {msg}"),
        }
    }
}

impl StdError for Error {}

#[derive(Debug)]
struct TraceState {
    enabled: bool,
    to_stderr: bool,
    logs: VecDeque<String>,
    log_limit: usize,
}

/// Fully initialized headless profile page: element tree built, the seven
/// interaction handlers bound, counter and date stamp already rendered.
pub struct Page {
    pub(crate) dom: Dom,
    pub(crate) elements: Elements,
    pub(crate) listeners: HashMap<(NodeId, EventKind), Vec<Action>>,
    pub(crate) state: ControllerState,
    pub(crate) dialogs: DialogMocks,
    pub(crate) email_shape: EmailShape,
    pub(crate) active_element: Option<NodeId>,
    pub(crate) opened_at_ms: i64,
    pub(crate) locale: String,
    pub(crate) rng_state: u64,
    trace: TraceState,
}

impl Page {
    /// Opens the page at the Unix epoch in the default locale.
    pub fn new() -> Result<Self> {
        Self::opened_at(0)
    }

    /// Opens the page at the given instant (milliseconds since the Unix
    /// epoch). The clock is fixed for the page's lifetime; the date stamp
    /// is rendered from it once, during construction.
    pub fn opened_at(opened_at_ms: i64) -> Result<Self> {
        Self::opened_at_in_locale(opened_at_ms, datefmt::DEFAULT_LOCALE)
    }

    pub fn opened_at_in_locale(opened_at_ms: i64, locale: &str) -> Result<Self> {
        let mut dom = Dom::new();
        let elements = build_page_tree(&mut dom);
        let message_limit = declared_message_limit(&dom, elements.message_box);
        let mut page = Self {
            dom,
            elements,
            listeners: HashMap::new(),
            state: ControllerState {
                theme: ThemeMode::Light,
                skills: SkillsVisibility::Shown,
                message_limit,
            },
            dialogs: DialogMocks::default(),
            email_shape: EmailShape::new()?,
            active_element: None,
            opened_at_ms,
            locale: locale.to_string(),
            rng_state: 0x9E37_79B9_7F4A_7C15,
            trace: TraceState {
                enabled: false,
                to_stderr: true,
                logs: VecDeque::new(),
                log_limit: 10_000,
            },
        };
        page.bind_controller();
        Ok(page)
    }

    pub fn click(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.dispatch_event(target, EventKind::Click, None)?;
        if self.is_submit_control(target) {
            if let Some(form) = self.form_ancestor(target) {
                self.dispatch_event(form, EventKind::Submit, None)?;
            }
        }
        Ok(())
    }

    pub fn type_text(&mut self, selector: &str, text: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let tag = self
            .dom
            .tag_name(target)
            .map(|tag| tag.to_ascii_lowercase())
            .unwrap_or_else(|| "non-element".to_string());
        if tag != "input" && tag != "textarea" {
            return Err(Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "input or textarea".into(),
                actual: tag,
            });
        }
        self.dom.set_value(target, text);
        self.dispatch_event(target, EventKind::Input, None)
    }

    pub fn press_key(&mut self, selector: &str, key: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.dispatch_event(target, EventKind::KeyUp, Some(key))
    }

    pub fn press_enter(&mut self, selector: &str) -> Result<()> {
        self.press_key(selector, "Enter")
    }

    pub fn submit(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let form = if self
            .dom
            .tag_name(target)
            .map(|tag| tag.eq_ignore_ascii_case("form"))
            .unwrap_or(false)
        {
            Some(target)
        } else {
            self.form_ancestor(target)
        };
        if let Some(form) = form {
            self.dispatch_event(form, EventKind::Submit, None)?;
        }
        Ok(())
    }

    pub fn focus(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.focus_node(target);
        Ok(())
    }

    pub fn blur(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        if self.active_element == Some(target) {
            self.active_element = None;
        }
        Ok(())
    }

    pub fn focused_id(&self) -> Option<String> {
        self.active_element
            .and_then(|node| self.dom.attr(node, "id"))
    }

    pub fn text(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.dom.text_content(target))
    }

    pub fn value(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        let tag = self
            .dom
            .tag_name(target)
            .map(|tag| tag.to_ascii_lowercase())
            .unwrap_or_else(|| "non-element".to_string());
        if tag != "input" && tag != "textarea" {
            return Err(Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "input or textarea".into(),
                actual: tag,
            });
        }
        Ok(self.dom.value(target).unwrap_or_default())
    }

    pub fn has_class(&self, selector: &str, class_name: &str) -> Result<bool> {
        let target = self.select_one(selector)?;
        Ok(self.dom.has_class(target, class_name))
    }

    pub fn assert_text(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.text_content(target);
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_value(&self, selector: &str, expected: &str) -> Result<()> {
        let actual = self.value(selector)?;
        if actual != expected {
            let target = self.select_one(selector)?;
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_exists(&self, selector: &str) -> Result<()> {
        let _ = self.select_one(selector)?;
        Ok(())
    }

    pub fn dump_dom(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.dom.dump_node(target))
    }

    pub fn now_ms(&self) -> i64 {
        self.opened_at_ms
    }

    pub fn set_random_seed(&mut self, seed: u64) {
        self.rng_state = if seed == 0 {
            0xA5A5_A5A5_A5A5_A5A5
        } else {
            seed
        };
    }

    pub fn enable_trace(&mut self, enabled: bool) {
        self.trace.enabled = enabled;
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        self.trace.logs.drain(..).collect()
    }

    pub fn set_trace_stderr(&mut self, enabled: bool) {
        self.trace.to_stderr = enabled;
    }

    pub fn set_trace_log_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::InvalidArgument(
                "set_trace_log_limit requires at least 1 entry".into(),
            ));
        }
        self.trace.log_limit = max_entries;
        while self.trace.logs.len() > self.trace.log_limit {
            self.trace.logs.pop_front();
        }
        Ok(())
    }

    pub(crate) fn trace_log(&mut self, message: String) {
        if !self.trace.enabled {
            return;
        }
        if self.trace.to_stderr {
            eprintln!("[profile_page] {message}");
        }
        self.trace.logs.push_back(message);
        while self.trace.logs.len() > self.trace.log_limit {
            self.trace.logs.pop_front();
        }
    }

    pub(crate) fn add_listener(&mut self, node: NodeId, kind: EventKind, action: Action) {
        self.listeners.entry((node, kind)).or_default().push(action);
    }

    // Synchronous, run-to-completion dispatch: each handler finishes before
    // the next one starts.
    pub(crate) fn dispatch_event(
        &mut self,
        target: NodeId,
        kind: EventKind,
        key: Option<&str>,
    ) -> Result<()> {
        if self.trace.enabled {
            let label = self.node_label(target);
            self.trace_log(format!("event {} {label}", kind.name()));
        }
        let actions = self
            .listeners
            .get(&(target, kind))
            .cloned()
            .unwrap_or_default();
        for action in actions {
            self.run_action(action, key)?;
        }
        Ok(())
    }

    pub(crate) fn focus_node(&mut self, node: NodeId) {
        self.active_element = Some(node);
    }

    fn select_one(&self, selector: &str) -> Result<NodeId> {
        let Some(id) = selector.strip_prefix('#') else {
            return Err(Error::UnsupportedSelector(selector.to_string()));
        };
        self.dom
            .by_id(id)
            .ok_or_else(|| Error::ElementNotFound(selector.to_string()))
    }

    fn is_submit_control(&self, node: NodeId) -> bool {
        let Some(tag) = self.dom.tag_name(node) else {
            return false;
        };
        let kind = self
            .dom
            .attr(node, "type")
            .map(|kind| kind.to_ascii_lowercase());
        if tag.eq_ignore_ascii_case("button") {
            return !matches!(kind.as_deref(), Some("button") | Some("reset"));
        }
        tag.eq_ignore_ascii_case("input") && kind.as_deref() == Some("submit")
    }

    fn form_ancestor(&self, node: NodeId) -> Option<NodeId> {
        let mut cursor = self.dom.parent(node);
        while let Some(current) = cursor {
            if self
                .dom
                .tag_name(current)
                .map(|tag| tag.eq_ignore_ascii_case("form"))
                .unwrap_or(false)
            {
                return Some(current);
            }
            cursor = self.dom.parent(current);
        }
        None
    }

    fn node_label(&self, node: NodeId) -> String {
        if let Some(id) = self.dom.attr(node, "id") {
            return format!("#{id}");
        }
        self.dom
            .tag_name(node)
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| "node".to_string())
    }

    fn node_snippet(&self, node: NodeId) -> String {
        truncate_chars(&self.dom.dump_node(node), 200)
    }
}

#[cfg(test)]
mod tests;
