use crate::composer::body;
use crate::domain::options::Scenario;
use crate::domain::request::DraftRequest;

pub fn render(request: &DraftRequest) -> String {
    format!(
        "Short version:\n{}\n\nLong version:\n{}",
        short_line(request),
        body::render(request)
    )
}

fn short_line(request: &DraftRequest) -> String {
    if request.scenario == Scenario::OutageUpdate {
        let eta = single_line(request.eta.as_deref()).unwrap_or_else(|| "Pending".to_string());
        return format!("Service update: We are investigating an outage. ETA: {eta}.");
    }

    let who = single_line(request.recipient_name.as_deref()).unwrap_or_else(|| "there".to_string());
    let mut parts = vec![format!("Hi {who}. {} update.", request.scenario.label())];
    if let Some(ticket) = single_line(request.ticket_id.as_deref()) {
        parts.push(format!("Ticket: {ticket}."));
    }
    if let Some(issue) = single_line(request.issue_summary.as_deref()) {
        parts.push(format!("Issue: {issue}"));
    }
    if let Some(next) = single_line(request.next_step.as_deref()) {
        parts.push(format!("Next: {next}"));
    }
    if let Some(eta) = single_line(request.eta.as_deref()) {
        parts.push(format!("ETA: {eta}."));
    }
    parts.join(" ")
}

/// Collapses line breaks and whitespace runs so a fragment stays on the short line.
fn single_line(text: Option<&str>) -> Option<String> {
    text.map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
}
