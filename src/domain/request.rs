use serde::{Deserialize, Serialize};

use crate::domain::options::{Audience, MessageType, Scenario, Tone};

pub const DEFAULT_MESSAGE_TYPE: &str = "email";
pub const DEFAULT_SCENARIO: &str = "password_reset";
pub const DEFAULT_AUDIENCE: &str = "customer";
pub const DEFAULT_TONE: &str = "professional";

/// Raw form state as entered and as persisted. Missing keys take the form defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DraftInput {
    pub msg_type: String,
    pub scenario: String,
    pub audience: String,
    pub tone: String,
    pub recipient: String,
    pub your_name: String,
    pub ticket: String,
    pub eta: String,
    pub issue: String,
    pub tried: String,
    pub error: String,
    pub next: String,
}

impl Default for DraftInput {
    fn default() -> Self {
        Self {
            msg_type: DEFAULT_MESSAGE_TYPE.to_string(),
            scenario: DEFAULT_SCENARIO.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
            tone: DEFAULT_TONE.to_string(),
            recipient: String::new(),
            your_name: String::new(),
            ticket: String::new(),
            eta: String::new(),
            issue: String::new(),
            tried: String::new(),
            error: String::new(),
            next: String::new(),
        }
    }
}

impl DraftInput {
    /// Blanks the free-text situation fields, keeping the selectors and the author.
    pub fn cleared(&self) -> Self {
        Self {
            msg_type: self.msg_type.clone(),
            scenario: self.scenario.clone(),
            audience: self.audience.clone(),
            tone: self.tone.clone(),
            your_name: self.your_name.clone(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRequest {
    pub message_type: MessageType,
    pub scenario: Scenario,
    pub audience: Audience,
    pub tone: Tone,
    pub recipient_name: Option<String>,
    pub author_name: Option<String>,
    pub ticket_id: Option<String>,
    pub eta: Option<String>,
    pub issue_summary: Option<String>,
    pub tried_steps: Option<String>,
    pub error_text: Option<String>,
    pub next_step: Option<String>,
}

impl DraftRequest {
    pub fn from_input(input: &DraftInput) -> Self {
        Self {
            message_type: MessageType::from_str(&input.msg_type).unwrap_or(MessageType::Email),
            scenario: Scenario::from_key(&input.scenario),
            audience: Audience::parse(&input.audience),
            tone: Tone::from_str(&input.tone).unwrap_or(Tone::Professional),
            recipient_name: clean(&input.recipient),
            author_name: clean(&input.your_name),
            ticket_id: clean(&input.ticket),
            eta: clean(&input.eta),
            issue_summary: clean(&input.issue),
            tried_steps: clean(&input.tried),
            error_text: clean(&input.error),
            next_step: clean(&input.next),
        }
    }
}

impl From<&DraftInput> for DraftRequest {
    fn from(input: &DraftInput) -> Self {
        Self::from_input(input)
    }
}

/// Trims free text; blank values are treated as absent.
pub fn clean(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
