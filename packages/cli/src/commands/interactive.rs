use client::{CheckError, CheckSession};
use common::Handle;
use console::{Term, style};
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;

use crate::render::render_result;
use crate::screen::Screen;

/// Prompt for handles until an empty line is entered.
pub async fn run(session: &CheckSession, screen: &Screen, verbose: bool) -> anyhow::Result<()> {
    let term = Term::stderr();
    let theme = ColorfulTheme::default();

    screen.message(&style("Codeforces Cheating Detector").bold().to_string())?;

    loop {
        let raw: String = Input::with_theme(&theme)
            .with_prompt("Codeforces handle (empty to quit)")
            .allow_empty(true)
            .interact_text_on(&term)?;

        if raw.trim().is_empty() {
            break;
        }

        check_handle(session, screen, &raw, verbose).await?;
    }

    Ok(())
}

/// Check one entered handle and show the outcome.
async fn check_handle(
    session: &CheckSession,
    screen: &Screen,
    raw: &str,
    verbose: bool,
) -> anyhow::Result<()> {
    let handle = match Handle::parse(raw) {
        Ok(handle) => handle,
        Err(e) => {
            screen.message(&style(e).yellow().to_string())?;
            return Ok(());
        }
    };

    screen.show_loading(&style("Checking...").dim().to_string())?;
    let outcome = session.check(&handle).await;
    screen.clear_loading()?;

    match outcome {
        Ok(result) => screen.report(&render_result(&result, verbose))?,
        Err(CheckError::Fetch(_)) => {}
        Err(e @ CheckError::InProgress) => screen.message(&style(e).yellow().to_string())?,
    }
    Ok(())
}
