//! Pure text composition for drafts and assistant prompts.

pub mod body;
pub mod chat;
pub mod phrasing;
pub mod prompt;
pub mod ticket;

use crate::domain::options::MessageType;
use crate::domain::request::DraftRequest;
use crate::domain::snapshot::ComposedDraft;

pub fn compose(request: &DraftRequest) -> String {
    match request.message_type {
        MessageType::Email => format!(
            "Subject: {}\n\n{}",
            phrasing::subject(request),
            body::render(request)
        ),
        MessageType::Chat => chat::render(request),
        MessageType::Ticket => ticket::render(request),
    }
}

pub fn compose_prompt(request: &DraftRequest) -> String {
    prompt::render(request)
}

pub fn compose_all(request: &DraftRequest) -> ComposedDraft {
    ComposedDraft {
        draft: compose(request),
        prompt: compose_prompt(request),
    }
}
