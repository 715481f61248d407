use crate::dom::{Dom, NodeId};
use crate::{Page, Result, datefmt};

pub(crate) const DARK_MODE_CLASS: &str = "dark-mode";
pub(crate) const HIDDEN_CLASS: &str = "hidden";

const DEFAULT_MESSAGE_LIMIT: usize = 200;

pub const QUOTES: [&str; 6] = [
    "Believe you can and you're halfway there. — Theodore Roosevelt",
    "Don't watch the clock; do what it does. Keep going. — Sam Levenson",
    "Start where you are. Use what you have. Do what you can. — Arthur Ashe",
    "The only way to do great work is to love what you do. — Steve Jobs",
    "You are never too old to set another goal or to dream a new dream. — C.S. Lewis",
    "The future depends on what you do today. — Mahatma Gandhi",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub(crate) fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub(crate) fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Button label names the next available action, not the current mode.
    pub(crate) fn button_label(self) -> &'static str {
        match self {
            Self::Light => "Toggle Dark Mode",
            Self::Dark => "Switch to Light Mode",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SkillsVisibility {
    Shown,
    Hidden,
}

impl SkillsVisibility {
    pub(crate) fn flipped(self) -> Self {
        match self {
            Self::Shown => Self::Hidden,
            Self::Hidden => Self::Shown,
        }
    }

    pub(crate) fn is_hidden(self) -> bool {
        self == Self::Hidden
    }

    pub(crate) fn button_label(self) -> &'static str {
        match self {
            Self::Shown => "Hide Skills",
            Self::Hidden => "Show Skills",
        }
    }
}

#[derive(Debug)]
pub(crate) struct ControllerState {
    pub(crate) theme: ThemeMode,
    pub(crate) skills: SkillsVisibility,
    pub(crate) message_limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum EventKind {
    Click,
    Input,
    Submit,
    KeyUp,
}

impl EventKind {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Input => "input",
            Self::Submit => "submit",
            Self::KeyUp => "keyup",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Action {
    ToggleTheme,
    EditTitle,
    EditTitleOnEnter,
    ToggleSkills,
    RenderCounter,
    ValidateForm,
    PickQuote,
}

/// Startup bindings to the page's named elements, resolved once during
/// construction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Elements {
    pub(crate) body: NodeId,
    pub(crate) theme_btn: NodeId,
    pub(crate) job_title: NodeId,
    pub(crate) edit_job_btn: NodeId,
    pub(crate) toggle_skills_btn: NodeId,
    pub(crate) skills_section: NodeId,
    pub(crate) message_box: NodeId,
    pub(crate) counter: NodeId,
    pub(crate) contact_form: NodeId,
    pub(crate) name_field: NodeId,
    pub(crate) email_field: NodeId,
    pub(crate) send_btn: NodeId,
    pub(crate) date_display: NodeId,
    pub(crate) quote_btn: NodeId,
    pub(crate) quote_display: NodeId,
}

pub(crate) fn build_page_tree(dom: &mut Dom) -> Elements {
    let root = dom.root;
    let body = dom.create_element(root, "body", &[]);

    let header = dom.create_element(body, "header", &[]);
    let heading = dom.create_element(header, "h1", &[]);
    dom.create_text(heading, "Jane Doe");
    let job_title = dom.create_element(header, "p", &[("id", "job-title")]);
    dom.create_text(job_title, "Web Developer");
    let edit_job_btn = dom.create_element(
        header,
        "button",
        &[("id", "editJobBtn"), ("type", "button")],
    );
    dom.create_text(edit_job_btn, "Edit Job Title");
    let theme_btn =
        dom.create_element(header, "button", &[("id", "themeBtn"), ("type", "button")]);
    dom.create_text(theme_btn, ThemeMode::Light.button_label());

    let toggle_skills_btn = dom.create_element(
        body,
        "button",
        &[("id", "toggleSkillsBtn"), ("type", "button")],
    );
    dom.create_text(toggle_skills_btn, SkillsVisibility::Shown.button_label());
    let skills_section = dom.create_element(body, "section", &[("id", "skillsSection")]);
    let skills_list = dom.create_element(skills_section, "ul", &[]);
    for skill in ["HTML", "CSS", "JavaScript", "Accessibility"] {
        let item = dom.create_element(skills_list, "li", &[]);
        dom.create_text(item, skill);
    }

    let contact_form =
        dom.create_element(body, "form", &[("id", "contactForm"), ("action", "#")]);
    let name_field = dom.create_element(
        contact_form,
        "input",
        &[("id", "user-name"), ("type", "text")],
    );
    let email_field = dom.create_element(
        contact_form,
        "input",
        &[("id", "user-email"), ("type", "text")],
    );
    let message_box = dom.create_element(
        contact_form,
        "textarea",
        &[("id", "user-message"), ("maxlength", "200")],
    );
    let counter_line = dom.create_element(contact_form, "p", &[]);
    dom.create_text(counter_line, "Characters left: ");
    let counter = dom.create_element(counter_line, "span", &[("id", "counter")]);
    let send_btn = dom.create_element(
        contact_form,
        "button",
        &[("id", "sendBtn"), ("type", "submit")],
    );
    dom.create_text(send_btn, "Send");

    let quote_btn =
        dom.create_element(body, "button", &[("id", "quoteBtn"), ("type", "button")]);
    dom.create_text(quote_btn, "Inspire Me");
    let quote_display = dom.create_element(body, "p", &[("id", "quoteDisplay")]);

    let footer = dom.create_element(body, "footer", &[]);
    let date_display = dom.create_element(footer, "span", &[("id", "dateDisplay")]);

    Elements {
        body,
        theme_btn,
        job_title,
        edit_job_btn,
        toggle_skills_btn,
        skills_section,
        message_box,
        counter,
        contact_form,
        name_field,
        email_field,
        send_btn,
        date_display,
        quote_btn,
        quote_display,
    }
}

pub(crate) fn declared_message_limit(dom: &Dom, message_box: NodeId) -> usize {
    dom.attr(message_box, "maxlength")
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(DEFAULT_MESSAGE_LIMIT)
}

impl Page {
    pub(crate) fn bind_controller(&mut self) {
        let elements = self.elements;
        self.add_listener(elements.theme_btn, EventKind::Click, Action::ToggleTheme);
        self.add_listener(elements.edit_job_btn, EventKind::Click, Action::EditTitle);
        self.add_listener(
            elements.edit_job_btn,
            EventKind::KeyUp,
            Action::EditTitleOnEnter,
        );
        self.add_listener(
            elements.toggle_skills_btn,
            EventKind::Click,
            Action::ToggleSkills,
        );
        self.add_listener(elements.message_box, EventKind::Input, Action::RenderCounter);
        self.add_listener(elements.contact_form, EventKind::Submit, Action::ValidateForm);
        self.add_listener(elements.quote_btn, EventKind::Click, Action::PickQuote);

        // Immediate initialization: the counter and date stamp must be
        // correct before any user action.
        self.render_counter();
        self.render_date_stamp();
    }

    pub(crate) fn run_action(&mut self, action: Action, key: Option<&str>) -> Result<()> {
        match action {
            Action::ToggleTheme => self.toggle_theme(),
            Action::EditTitle => self.edit_title(),
            Action::EditTitleOnEnter => {
                if key == Some("Enter") {
                    self.edit_title();
                }
            }
            Action::ToggleSkills => self.toggle_skills(),
            Action::RenderCounter => self.render_counter(),
            Action::ValidateForm => self.validate_form()?,
            Action::PickQuote => self.pick_quote(),
        }
        Ok(())
    }

    fn toggle_theme(&mut self) {
        let mode = self.state.theme.flipped();
        self.state.theme = mode;
        if mode.is_dark() {
            self.dom.add_class(self.elements.body, DARK_MODE_CLASS);
        } else {
            self.dom.remove_class(self.elements.body, DARK_MODE_CLASS);
        }
        self.dom
            .set_text_content(self.elements.theme_btn, mode.button_label());
    }

    fn edit_title(&mut self) {
        let current = self
            .dom
            .text_content(self.elements.job_title)
            .trim()
            .to_string();
        let Some(entered) = self.prompt("Enter a new job title:", &current) else {
            return;
        };
        let trimmed = entered.trim();
        if trimmed.is_empty() {
            self.alert("Job title cannot be empty.");
        } else {
            self.dom.set_text_content(self.elements.job_title, trimmed);
        }
    }

    fn toggle_skills(&mut self) {
        let visibility = self.state.skills.flipped();
        self.state.skills = visibility;
        if visibility.is_hidden() {
            self.dom.add_class(self.elements.skills_section, HIDDEN_CLASS);
        } else {
            self.dom
                .remove_class(self.elements.skills_section, HIDDEN_CLASS);
        }
        self.dom
            .set_text_content(self.elements.toggle_skills_btn, visibility.button_label());
    }

    pub(crate) fn render_counter(&mut self) {
        let typed = self
            .dom
            .value(self.elements.message_box)
            .map(|value| value.chars().count())
            .unwrap_or(0);
        let remaining = self.state.message_limit.saturating_sub(typed);
        self.dom
            .set_text_content(self.elements.counter, &remaining.to_string());
    }

    fn validate_form(&mut self) -> Result<()> {
        let name = self
            .dom
            .value(self.elements.name_field)
            .unwrap_or_default()
            .trim()
            .to_string();
        let email = self
            .dom
            .value(self.elements.email_field)
            .unwrap_or_default()
            .trim()
            .to_string();

        if name.is_empty() {
            self.alert("Please enter your name.");
            self.focus_node(self.elements.name_field);
            return Ok(());
        }

        if email.is_empty() {
            self.alert("Please enter your email address.");
            self.focus_node(self.elements.email_field);
            return Ok(());
        }

        if !self.email_shape.is_match(&email)? {
            self.alert("Please enter a valid email address.");
            self.focus_node(self.elements.email_field);
            return Ok(());
        }

        // Demo form: the "send" is the confirmation alert, never a
        // navigation.
        self.alert("Message sent — thank you!");
        for field in [
            self.elements.name_field,
            self.elements.email_field,
            self.elements.message_box,
        ] {
            self.dom.set_value(field, "");
        }
        self.render_counter();
        Ok(())
    }

    pub(crate) fn render_date_stamp(&mut self) {
        let stamp = datefmt::format_long_date(&self.locale, self.opened_at_ms);
        self.dom
            .set_text_content(self.elements.date_display, &stamp);
    }

    fn pick_quote(&mut self) {
        let idx = (self.next_random_f64() * QUOTES.len() as f64) as usize;
        self.dom
            .set_text_content(self.elements.quote_display, QUOTES[idx]);
    }

    // xorshift64*: simple deterministic PRNG for the quote picker.
    pub(crate) fn next_random_f64(&mut self) -> f64 {
        let mut x = self.rng_state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.rng_state = if x == 0 { 0xA5A5_A5A5_A5A5_A5A5 } else { x };
        let out = x.wrapping_mul(0x2545_F491_4F6C_DD1D);
        // Convert top 53 bits to [0.0, 1.0).
        let mantissa = out >> 11;
        (mantissa as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}
