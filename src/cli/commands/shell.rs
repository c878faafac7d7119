//! Shell completion script generation.

use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::StudyPalError;

/// Generate a completion script for the requested shell.
pub fn completions(args: &CompletionsArgs) -> Result<String, StudyPalError> {
    let shell = shell_from_str(&args.shell).ok_or_else(|| {
        StudyPalError::Config(format!(
            "Unknown shell '{}' (bash, zsh, fish, powershell, elvish)",
            args.shell
        ))
    })?;
    generate_completions(shell)
}

fn generate_completions(shell: Shell) -> Result<String, StudyPalError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate_to(&mut buf, shell, &mut cmd);
    String::from_utf8(buf).map_err(|e| StudyPalError::Config(format!("UTF-8 error: {e}")))
}

fn generate_to<W: Write>(buf: &mut W, shell: Shell, cmd: &mut clap::Command) {
    clap_complete::generate(shell, cmd, "studypal", buf);
}

/// Get shell from string name.
fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}
