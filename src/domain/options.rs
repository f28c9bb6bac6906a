#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Email,
    Chat,
    Ticket,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Email => "email",
            MessageType::Chat => "chat",
            MessageType::Ticket => "ticket",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "email" => Some(MessageType::Email),
            "chat" => Some(MessageType::Chat),
            "ticket" => Some(MessageType::Ticket),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Professional,
    Friendly,
    Firm,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Firm => "firm",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "professional" => Some(Tone::Professional),
            "friendly" => Some(Tone::Friendly),
            "firm" => Some(Tone::Firm),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audience {
    Customer,
    Manager,
    Internal,
    Custom(String),
}

impl Audience {
    pub fn as_str(&self) -> &str {
        match self {
            Audience::Customer => "customer",
            Audience::Manager => "manager",
            Audience::Internal => "internal",
            Audience::Custom(value) => value,
        }
    }

    /// Blank input resolves to the customer audience; anything unrecognised is kept as typed.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_lowercase().as_str() {
            "" | "customer" => Audience::Customer,
            "manager" => Audience::Manager,
            "internal" => Audience::Internal,
            _ => Audience::Custom(trimmed.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    PasswordReset,
    AccountLocked,
    MfaIssue,
    VpnIssue,
    EmailIssue,
    PrinterIssue,
    SoftwareInstall,
    AccessRequest,
    OutageUpdate,
    FollowUp,
    General,
}

impl Scenario {
    pub const CATALOG: [Scenario; 10] = [
        Scenario::PasswordReset,
        Scenario::AccountLocked,
        Scenario::MfaIssue,
        Scenario::VpnIssue,
        Scenario::EmailIssue,
        Scenario::PrinterIssue,
        Scenario::SoftwareInstall,
        Scenario::AccessRequest,
        Scenario::OutageUpdate,
        Scenario::FollowUp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::PasswordReset => "password_reset",
            Scenario::AccountLocked => "account_locked",
            Scenario::MfaIssue => "mfa_issue",
            Scenario::VpnIssue => "vpn_issue",
            Scenario::EmailIssue => "email_issue",
            Scenario::PrinterIssue => "printer_issue",
            Scenario::SoftwareInstall => "software_install",
            Scenario::AccessRequest => "access_request",
            Scenario::OutageUpdate => "outage_update",
            Scenario::FollowUp => "follow_up",
            Scenario::General => "general",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::PasswordReset => "Password reset",
            Scenario::AccountLocked => "Account locked",
            Scenario::MfaIssue => "MFA issue",
            Scenario::VpnIssue => "VPN or remote access",
            Scenario::EmailIssue => "Email issue",
            Scenario::PrinterIssue => "Printer issue",
            Scenario::SoftwareInstall => "Software install request",
            Scenario::AccessRequest => "Access request",
            Scenario::OutageUpdate => "Outage update",
            Scenario::FollowUp => "Follow up",
            Scenario::General => "IT support update",
        }
    }

    /// Keys outside the catalog resolve to [`Scenario::General`].
    pub fn from_key(value: &str) -> Self {
        let key = value.trim().to_lowercase();
        Self::CATALOG
            .into_iter()
            .find(|scenario| scenario.as_str() == key)
            .unwrap_or(Scenario::General)
    }
}
