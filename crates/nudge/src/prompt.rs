use std::io::{self, BufRead, Write};

use nudge_core::UpdateInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Accepted,
    Dismissed,
    /// Stdin closed before an answer arrived (non-interactive run).
    NoInput,
}

/// Show the update prompt and read the user's answer.
///
/// Dismissible updates offer a yes/no choice defaulting to "later".
/// Mandatory updates only offer the update action.
///
/// # Errors
/// Returns an error when writing the prompt or reading the answer fails.
pub fn prompt_user(
    info: &UpdateInfo,
    dismissible: bool,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<PromptOutcome> {
    writeln!(output, "Version {} is available.", info.version)?;
    if !info.message.is_empty() {
        writeln!(output, "{}", info.message)?;
    }

    if dismissible {
        write!(output, "Update now? [y/N] ")?;
    } else {
        write!(
            output,
            "This update is required. Press Enter to open the store page. "
        )?;
    }
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(PromptOutcome::NoInput);
    }

    if !dismissible {
        return Ok(PromptOutcome::Accepted);
    }

    let answer = answer.trim().to_ascii_lowercase();
    if answer == "y" || answer == "yes" {
        Ok(PromptOutcome::Accepted)
    } else {
        Ok(PromptOutcome::Dismissed)
    }
}
