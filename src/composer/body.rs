use crate::composer::phrasing::{
    ACCESS_CONFIRMATION, Lines, MANAGER_IMPACT, NO_RETRY_INSTRUCTION, greeting,
    next_step_fallback, signoff, tone_style,
};
use crate::domain::options::{Audience, Scenario};
use crate::domain::request::DraftRequest;

/// Message body shared by email and the long chat version.
pub fn render(request: &DraftRequest) -> String {
    match request.scenario {
        Scenario::OutageUpdate => outage(request),
        Scenario::AccessRequest => access(request),
        _ => generic(request),
    }
}

fn open(request: &DraftRequest) -> Lines {
    let style = tone_style(request.tone);
    let mut lines = Lines::new();
    lines.push(greeting(request.recipient_name.as_deref(), request.tone));
    lines.blank();
    lines.push(style.intro);
    lines
}

fn close(request: &DraftRequest, mut lines: Lines) -> String {
    let style = tone_style(request.tone);
    lines.blank();
    lines.push(style.close);
    lines.blank();
    lines.push(signoff(request.tone, request.author_name.as_deref()));
    lines.finish()
}

fn generic(request: &DraftRequest) -> String {
    let style = tone_style(request.tone);
    let mut lines = open(request);

    lines.labeled("Ticket", request.ticket_id.as_deref());
    lines.labeled("Issue", request.issue_summary.as_deref());
    lines.labeled("Error", request.error_text.as_deref());
    lines.block("What was tried:", request.tried_steps.as_deref());

    lines.blank();
    match request.next_step.as_deref() {
        Some(next) => {
            lines.push("Next step:");
            lines.push(next);
        }
        None => lines.push(next_step_fallback(&style)),
    }

    if let Some(eta) = request.eta.as_deref() {
        lines.blank();
        lines.push(format!("Timeframe: {eta}"));
    }

    if request.audience == Audience::Manager {
        lines.blank();
        lines.push(MANAGER_IMPACT);
    }

    close(request, lines)
}

fn outage(request: &DraftRequest) -> String {
    let mut lines = open(request);
    lines.labeled("Ticket", request.ticket_id.as_deref());
    lines.labeled("Summary", request.issue_summary.as_deref());
    lines.labeled("Timeframe", request.eta.as_deref());
    lines.blank();
    lines.push(NO_RETRY_INSTRUCTION);
    close(request, lines)
}

fn access(request: &DraftRequest) -> String {
    let mut lines = open(request);
    lines.labeled("Ticket", request.ticket_id.as_deref());
    lines.labeled("Request", request.issue_summary.as_deref());
    lines.block("Next step:", request.next_step.as_deref());
    lines.blank();
    lines.push(ACCESS_CONFIRMATION);
    close(request, lines)
}
