use serde::{Deserialize, Serialize};

use crate::domain::request::DraftInput;

/// Both outputs of one generate action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedDraft {
    pub draft: String,
    pub prompt: String,
}

/// The last form state together with what was generated from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftSnapshot {
    pub input: DraftInput,
    pub draft: String,
    pub prompt: String,
}

impl DraftSnapshot {
    pub fn new(input: DraftInput, composed: ComposedDraft) -> Self {
        Self {
            input,
            draft: composed.draft,
            prompt: composed.prompt,
        }
    }

    pub fn output(&self, kind: OutputKind) -> &str {
        match kind {
            OutputKind::Draft => &self.draft,
            OutputKind::Prompt => &self.prompt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Draft,
    Prompt,
}

impl OutputKind {
    pub fn copied_message(&self) -> &'static str {
        match self {
            OutputKind::Draft => "Draft copied.",
            OutputKind::Prompt => "AI prompt copied.",
        }
    }
}
