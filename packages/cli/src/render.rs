//! Terminal rendering of detection results.

use common::{DetectionResult, FETCH_FAILED_MESSAGE};
use console::style;

/// Human-readable report: the flagged contest list, or the clean message.
pub fn render_result(result: &DetectionResult, verbose: bool) -> String {
    let mut out = String::new();

    if result.is_flagged {
        out.push_str(&format!(
            "{}\n",
            style("Suspicious Activity Detected!").red().bold()
        ));
        out.push_str("This user has skipped contests with IDs:\n");
        for contest in &result.flagged_contests {
            if verbose {
                out.push_str(&format!(
                    "  - Contest ID: {} ({} skipped)\n",
                    contest.contest_id, contest.skipped_submissions
                ));
            } else {
                out.push_str(&format!("  - Contest ID: {}\n", contest.contest_id));
            }
        }
    } else {
        out.push_str(&format!(
            "{}\n",
            style("No suspicious activity detected!").green().bold()
        ));
    }

    if verbose {
        out.push_str(&format!(
            "{}\n",
            style(format!(
                "Checked {} submissions across {} contests.",
                result.submissions_checked, result.contests_checked
            ))
            .dim()
        ));
    }

    out
}

pub fn render_failure() -> String {
    style(FETCH_FAILED_MESSAGE).red().bold().to_string()
}
