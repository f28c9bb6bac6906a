use crate::domain::options::Tone;
use crate::domain::request::DraftRequest;

pub const DEFAULT_AUTHOR: &str = "IT Support";

pub const NO_RETRY_INSTRUCTION: &str =
    "Please avoid retrying repeatedly while we work on the fix. We will share an update as soon as service is restored.";
pub const ACCESS_CONFIRMATION: &str =
    "Please confirm the access level required and the exact name of the system.";
pub const MANAGER_IMPACT: &str = "Impact: User productivity is affected until service is restored.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneStyle {
    pub intro: &'static str,
    pub ask: &'static str,
    pub close: &'static str,
}

pub fn tone_style(tone: Tone) -> ToneStyle {
    match tone {
        Tone::Professional => ToneStyle {
            intro: "I am reaching out regarding the issue below.",
            ask: "Please",
            close: "If you have questions, reply and I will help.",
        },
        Tone::Friendly => ToneStyle {
            intro: "I hope you are doing well.",
            ask: "When you have a moment, please",
            close: "If anything still looks off, reply and I can help.",
        },
        Tone::Firm => ToneStyle {
            intro: "I am following up on this issue.",
            ask: "Please",
            close: "Reply with the requested information so we can proceed.",
        },
    }
}

pub fn greeting(recipient: Option<&str>, tone: Tone) -> String {
    match (recipient, tone) {
        (None, _) => "Hello,".to_string(),
        (Some(name), Tone::Friendly) => format!("Hi {name},"),
        (Some(name), _) => format!("Hello {name},"),
    }
}

pub fn signoff(tone: Tone, author: Option<&str>) -> String {
    let me = author.unwrap_or(DEFAULT_AUTHOR);
    let closing = match tone {
        Tone::Professional => "Best regards,",
        Tone::Friendly => "Thank you,",
        Tone::Firm => "Regards,",
    };
    format!("{closing}\n{me}")
}

pub fn subject(request: &DraftRequest) -> String {
    let label = request.scenario.label();
    match request.ticket_id.as_deref() {
        Some(ticket) => format!("{label} | {ticket}"),
        None => label.to_string(),
    }
}

pub fn next_step_fallback(style: &ToneStyle) -> String {
    format!(
        "{} confirm whether the issue still happens and what time works to troubleshoot.",
        style.ask
    )
}

/// Newline-joined output that never emits a leading or doubled blank line.
#[derive(Debug, Default)]
pub struct Lines {
    lines: Vec<String>,
}

impl Lines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        if self.lines.last().is_some_and(|last| !last.is_empty()) {
            self.lines.push(String::new());
        }
    }

    pub fn labeled(&mut self, label: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.lines.push(format!("{label}: {value}"));
        }
    }

    pub fn block(&mut self, header: &str, body: Option<&str>) {
        if let Some(body) = body {
            self.blank();
            self.lines.push(header.to_string());
            self.lines.push(body.to_string());
        }
    }

    pub fn finish(mut self) -> String {
        while self.lines.last().is_some_and(|last| last.is_empty()) {
            self.lines.pop();
        }
        self.lines.join("\n")
    }
}
