use crate::composer::phrasing::Lines;
use crate::domain::request::DraftRequest;

const PREAMBLE: [&str; 3] = [
    "You are an IT support professional.",
    "Rewrite the message to be clear, concise, and helpful.",
    "Do not include passwords or sensitive personal data.",
];

const OUTPUT_FORMAT: [&str; 3] = [
    "If email, provide a subject line and a clean email body.",
    "If chat, provide a short and long version.",
    "If ticket, provide an internal update with actions taken and next action.",
];

/// Instruction block for an external assistant to rewrite the draft.
pub fn render(request: &DraftRequest) -> String {
    let mut lines = Lines::new();
    PREAMBLE.iter().for_each(|line| lines.push(*line));

    lines.blank();
    lines.push("Requirements:");
    lines.push(format!("Message type: {}", request.message_type.as_str()));
    lines.push(format!("Tone: {}", request.tone.as_str()));
    lines.push(format!("Audience: {}", request.audience.as_str()));
    lines.push(format!("Scenario: {}", request.scenario.label()));
    lines.labeled("Recipient", request.recipient_name.as_deref());
    lines.labeled("Sign as", request.author_name.as_deref());
    lines.labeled("Ticket", request.ticket_id.as_deref());
    lines.labeled("Timeframe", request.eta.as_deref());

    let inputs = [
        ("Issue", request.issue_summary.as_deref()),
        ("Error", request.error_text.as_deref()),
        ("Tried", request.tried_steps.as_deref()),
        ("Next", request.next_step.as_deref()),
    ];
    if inputs.iter().any(|(_, value)| value.is_some()) {
        lines.blank();
        lines.push("Inputs:");
        for (label, value) in inputs {
            lines.labeled(label, value);
        }
    }

    lines.blank();
    lines.push("Output format:");
    OUTPUT_FORMAT.iter().for_each(|line| lines.push(*line));
    lines.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::DraftInput;

    #[test]
    fn enumerates_selectors_and_supplied_fields() {
        let request = DraftRequest::from_input(&DraftInput {
            msg_type: "chat".to_string(),
            tone: "friendly".to_string(),
            audience: "manager".to_string(),
            scenario: "email_issue".to_string(),
            ticket: "T-55".to_string(),
            issue: "Mailbox full".to_string(),
            ..DraftInput::default()
        });
        let prompt = render(&request);
        assert!(prompt.starts_with("You are an IT support professional.\n"));
        assert!(prompt.contains(
            "Requirements:\nMessage type: chat\nTone: friendly\nAudience: manager\nScenario: Email issue\nTicket: T-55\n"
        ));
        assert!(prompt.contains("Inputs:\nIssue: Mailbox full\n\nOutput format:"));
        assert!(!prompt.contains("Error:"));
        assert!(!prompt.contains("Timeframe"));
        assert!(prompt.ends_with(OUTPUT_FORMAT[2]));
    }

    #[test]
    fn lists_recipient_and_sign_off_name_when_set() {
        let request = DraftRequest::from_input(&DraftInput {
            scenario: "follow_up".to_string(),
            recipient: " Sam ".to_string(),
            your_name: "Alex".to_string(),
            eta: "Tomorrow".to_string(),
            ..DraftInput::default()
        });
        assert!(render(&request).contains(
            "Scenario: Follow up\nRecipient: Sam\nSign as: Alex\nTimeframe: Tomorrow\n\nOutput format:"
        ));
    }

    #[test]
    fn omits_inputs_section_when_nothing_supplied() {
        let prompt = render(&DraftRequest::from_input(&DraftInput::default()));
        assert!(!prompt.contains("Inputs:"));
        assert!(!prompt.contains("Recipient:"));
        assert!(!prompt.contains("Sign as:"));
        assert!(prompt.contains("Scenario: Password reset\n\nOutput format:"));
    }
}
