//! Interactive target prompt

use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{self, BufRead, IsTerminal};

/// Ask the user for the vendor URL to audit
pub fn prompt_target() -> dialoguer::Result<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter Vendor URL to Audit (e.g. https://openai.com)")
        .allow_empty(true)
        .interact_text()
}

/// Read the target from stdin: the prompt on a terminal, else one piped line
pub fn read_target() -> anyhow::Result<String> {
    if io::stdin().is_terminal() {
        return Ok(prompt_target()?);
    }

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
