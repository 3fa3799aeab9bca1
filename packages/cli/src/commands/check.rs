use std::process::ExitCode;

use anyhow::Context;
use client::{CheckError, CheckSession};
use common::Handle;

use crate::render::render_result;
use crate::screen::Screen;

/// Exit status when at least one contest was flagged.
pub const EXIT_FLAGGED: u8 = 2;

pub struct CheckArgs {
    pub handle: String,
    pub json: bool,
    pub verbose: bool,
}

/// One-shot check. Exit code: 0 clean, 2 flagged, 1 on failure.
pub async fn run(
    session: &CheckSession,
    screen: &Screen,
    args: CheckArgs,
) -> anyhow::Result<ExitCode> {
    let handle = Handle::parse(&args.handle).context("Invalid handle")?;

    if !args.json {
        screen.show_loading("Checking...")?;
    }
    let outcome = session.check(&handle).await;
    screen.clear_loading()?;

    let result = match outcome {
        Ok(result) => result,
        // The session's notifier has already told the user.
        Err(CheckError::Fetch(_)) => return Ok(ExitCode::FAILURE),
        Err(e @ CheckError::InProgress) => return Err(e.into()),
    };

    if args.json {
        screen.report(&format!("{}\n", serde_json::to_string_pretty(&result)?))?;
    } else {
        screen.report(&render_result(&result, args.verbose))?;
    }

    Ok(if result.is_flagged {
        ExitCode::from(EXIT_FLAGGED)
    } else {
        ExitCode::SUCCESS
    })
}
