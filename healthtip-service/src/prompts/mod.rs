//! Prompt templates and prompt assembly.
//!
//! Each template variant is pure data: the instruction block sent to the
//! model, the call style it expects on the wire, and the variant's
//! empty-input reply. The active variant is selected by configuration at
//! startup; adding a variant means adding an entry to the registry.

mod templates;

pub use templates::TEMPLATES;

/// Reply substituted when the provider call fails for any reason.
pub const GENERATION_FAILED_REPLY: &str = "Unable to generate response.";

/// Which provider endpoint a template targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStyle {
    /// `/chat/completions`: template as system message, input as user message.
    Chat,
    /// `/completions`: template and labeled input joined into one prompt string.
    Completion,
}

/// One prompt variant. All fields are static data.
#[derive(Debug)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub system_text: &'static str,
    pub call_style: CallStyle,
    /// Literal prefix for the user text in completion-style assembly.
    pub user_label: &'static str,
    /// Reply (and 400 body) when the request carries no usable input.
    pub empty_input_reply: &'static str,
}

/// The prompt actually sent to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptPayload {
    Chat { system: String, user: String },
    Completion { prompt: String },
}

impl PromptTemplate {
    /// Looks up a template by registry name.
    pub fn by_name(name: &str) -> Option<&'static PromptTemplate> {
        TEMPLATES.iter().find(|t| t.name == name)
    }

    /// Registry names, for configuration error messages.
    pub fn known_names() -> Vec<&'static str> {
        TEMPLATES.iter().map(|t| t.name).collect()
    }

    /// Combines the template with already-trimmed user input.
    pub fn assemble(&self, user_input: &str) -> PromptPayload {
        match self.call_style {
            CallStyle::Chat => PromptPayload::Chat {
                system: self.system_text.to_string(),
                user: user_input.to_string(),
            },
            CallStyle::Completion => PromptPayload::Completion {
                prompt: format!("{}\n{}: {}", self.system_text, self.user_label, user_input),
            },
        }
    }
}

/// Removes the literal sentence markers some completion models echo back,
/// then trims surrounding whitespace.
pub fn strip_artifacts(text: &str) -> String {
    text.replace("<s>", "").replace("</s>", "").trim().to_string()
}
