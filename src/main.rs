use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use studypal::cli::args::{Cli, Commands};
use studypal::cli::commands;
use studypal::output::TerminalSink;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;
    let mut sink = TerminalSink;

    let output = match cli.command {
        Commands::Init(args) => commands::init(args, format)?,
        Commands::Quest(args) => commands::quest(args.command, &mut sink, format)?,
        Commands::Schedule(args) => commands::schedule(args.command, format)?,
        Commands::Focus(args) => {
            commands::focus(&args)?;
            String::new()
        }
        Commands::Say => commands::say(&mut sink, format)?,
        Commands::ResetAll(args) => commands::reset_all(&args, &mut sink, format)?,
        Commands::Completions(args) => commands::completions(&args)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
