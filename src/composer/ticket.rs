use crate::composer::phrasing::{ACCESS_CONFIRMATION, Lines, NO_RETRY_INSTRUCTION};
use crate::domain::options::Scenario;
use crate::domain::request::DraftRequest;

pub const NEXT_ACTION_FALLBACK: &str =
    "Awaiting user confirmation and additional details to continue troubleshooting.";
pub const OUTAGE_MONITORING: &str = "Monitoring service stability and providing periodic updates.";
pub const PRIVACY_REMINDER: &str =
    "Note: Do not store passwords or sensitive personal data in ticket notes.";

/// Internal-facing note for the ticketing system.
pub fn render(request: &DraftRequest) -> String {
    let mut lines = Lines::new();
    lines.push(format!("[{}] Internal update", request.scenario.label()));
    lines.labeled("Ticket", request.ticket_id.as_deref());

    lines.blank();
    lines.labeled("Summary", request.issue_summary.as_deref());
    lines.labeled("Error observed", request.error_text.as_deref());
    lines.block("Actions taken:", request.tried_steps.as_deref());

    lines.blank();
    lines.push("Next action:");
    lines.push(request.next_step.as_deref().unwrap_or(NEXT_ACTION_FALLBACK));

    if let Some(eta) = request.eta.as_deref() {
        lines.blank();
        lines.push(format!("ETA or target: {eta}"));
    }

    match request.scenario {
        Scenario::OutageUpdate => {
            lines.blank();
            lines.push("Outage note:");
            lines.push(OUTAGE_MONITORING);
            lines.push(format!("User guidance: {NO_RETRY_INSTRUCTION}"));
        }
        Scenario::AccessRequest => {
            lines.blank();
            lines.push("Access note:");
            lines.push(format!("Requested from user: {ACCESS_CONFIRMATION}"));
        }
        _ => {}
    }

    lines.blank();
    lines.push(PRIVACY_REMINDER);
    lines.finish()
}
