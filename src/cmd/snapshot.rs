use crate::cmd::draft::print_outputs;
use crate::context::AppContext;
use crate::domain::snapshot::OutputKind;
use crate::error::AppResult;
use crate::workflow::draft::{clear_last, copy_last, restore_last};

pub async fn run_last(ctx: &AppContext) -> AppResult<()> {
    match restore_last(ctx).await? {
        Some(snapshot) => {
            let input = &snapshot.input;
            println!(
                "Type: {} | Scenario: {} | Audience: {} | Tone: {}",
                input.msg_type, input.scenario, input.audience, input.tone
            );
            println!();
            print_outputs(&snapshot, None);
            eprintln!("Restored last draft.");
        }
        None => eprintln!("No saved draft yet."),
    }
    Ok(())
}

pub async fn run_copy(ctx: &AppContext, kind: OutputKind) -> AppResult<()> {
    let status = copy_last(ctx, kind).await?;
    eprintln!("{}", status.message());
    Ok(())
}

pub async fn run_clear(ctx: &AppContext) -> AppResult<()> {
    clear_last(ctx).await?;
    eprintln!("Cleared.");
    Ok(())
}
