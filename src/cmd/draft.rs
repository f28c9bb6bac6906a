use clap::{Args, ValueEnum};

use crate::context::AppContext;
use crate::domain::request::DraftInput;
use crate::domain::snapshot::{DraftSnapshot, OutputKind};
use crate::error::AppResult;
use crate::workflow::draft::{copy_text, generate_draft};

/// Which generated text a flag refers to.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputArg {
    Draft,
    Prompt,
}

impl From<OutputArg> for OutputKind {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Draft => OutputKind::Draft,
            OutputArg::Prompt => OutputKind::Prompt,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct DraftArgs {
    /// Message type: email, chat or ticket.
    #[arg(short = 't', long = "type")]
    pub msg_type: Option<String>,
    /// Scenario key (see `supportdraft scenarios`).
    #[arg(short, long)]
    pub scenario: Option<String>,
    /// Audience: customer, manager or internal.
    #[arg(short, long)]
    pub audience: Option<String>,
    /// Tone: professional, friendly or firm.
    #[arg(long)]
    pub tone: Option<String>,
    /// Recipient name used in the greeting.
    #[arg(long)]
    pub to: Option<String>,
    /// Your name for the sign-off.
    #[arg(long)]
    pub from: Option<String>,
    /// Ticket or incident number.
    #[arg(long)]
    pub ticket: Option<String>,
    /// Expected timeframe or ETA.
    #[arg(long)]
    pub eta: Option<String>,
    /// Issue description.
    #[arg(long)]
    pub issue: Option<String>,
    /// What was already tried.
    #[arg(long)]
    pub tried: Option<String>,
    /// Error message text.
    #[arg(long)]
    pub error: Option<String>,
    /// Next step to communicate.
    #[arg(long)]
    pub next: Option<String>,
    /// Print only one of the outputs.
    #[arg(long, value_enum)]
    pub only: Option<OutputArg>,
    /// Copy one of the outputs to the clipboard after generating.
    #[arg(long, value_enum)]
    pub copy: Option<OutputArg>,
    /// Do not overwrite the saved last draft.
    #[arg(long)]
    pub no_save: bool,
}

impl DraftArgs {
    /// Overlays the flags that were given onto the base form state.
    pub fn apply(&self, base: DraftInput) -> DraftInput {
        let pick = |flag: &Option<String>, fallback: String| flag.clone().unwrap_or(fallback);
        DraftInput {
            msg_type: pick(&self.msg_type, base.msg_type),
            scenario: pick(&self.scenario, base.scenario),
            audience: pick(&self.audience, base.audience),
            tone: pick(&self.tone, base.tone),
            recipient: pick(&self.to, base.recipient),
            your_name: pick(&self.from, base.your_name),
            ticket: pick(&self.ticket, base.ticket),
            eta: pick(&self.eta, base.eta),
            issue: pick(&self.issue, base.issue),
            tried: pick(&self.tried, base.tried),
            error: pick(&self.error, base.error),
            next: pick(&self.next, base.next),
        }
    }
}

pub async fn run(ctx: &AppContext, args: DraftArgs) -> AppResult<()> {
    let input = args.apply(ctx.config.base_input());
    let outcome = generate_draft(ctx, input, !args.no_save).await?;

    print_outputs(&outcome.snapshot, args.only.map(OutputKind::from));
    eprintln!("{}", outcome.status_message());

    if let Some(kind) = args.copy.map(OutputKind::from) {
        let status = copy_text(ctx, kind, outcome.snapshot.output(kind)).await?;
        eprintln!("{}", status.message());
    }
    Ok(())
}

pub fn print_outputs(snapshot: &DraftSnapshot, only: Option<OutputKind>) {
    match only {
        Some(kind) => println!("{}", snapshot.output(kind)),
        None => {
            println!("=== Draft ===");
            println!("{}", snapshot.draft);
            println!();
            println!("=== AI prompt ===");
            println!("{}", snapshot.prompt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_only_what_was_given() {
        let args = DraftArgs {
            msg_type: Some("chat".to_string()),
            to: Some("Sam".to_string()),
            ..DraftArgs::default()
        };
        let base = DraftInput {
            your_name: "Alex".to_string(),
            tone: "friendly".to_string(),
            ..DraftInput::default()
        };
        let input = args.apply(base);
        assert_eq!(input.msg_type, "chat");
        assert_eq!(input.recipient, "Sam");
        assert_eq!(input.your_name, "Alex");
        assert_eq!(input.tone, "friendly");
        assert_eq!(input.scenario, "password_reset");
    }

    #[test]
    fn output_flags_map_to_output_kinds() {
        assert_eq!(OutputKind::from(OutputArg::Draft), OutputKind::Draft);
        assert_eq!(OutputKind::from(OutputArg::Prompt), OutputKind::Prompt);
        assert_eq!(
            OutputArg::from_str("prompt", true).ok(),
            Some(OutputArg::Prompt)
        );
    }
}
