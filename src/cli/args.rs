use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "studypal")]
#[command(about = "A pixel study companion for your terminal")]
#[command(long_about = "studypal - a pixel study companion for your terminal

Keep a weekly class schedule and a quest log, run Pomodoro focus
sessions, and get a little encouragement from your companion along
the way. Everything is stored locally in ~/.studypal/.

QUICK START:
  studypal init --name Robin          Onboard and pick a companion
  studypal quest add \"Finish essay\" --due 2024-12-15
  studypal schedule add Algebra --day mon --time 09:30
  studypal focus                      Start the focus timer

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  studypal <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Onboard: set your name and pick a companion character
    ///
    /// Creates (or replaces) your profile. The companion speaks in the
    /// chosen character's voice everywhere: the focus view, quest
    /// completions, and deadline reminders.
    ///
    /// # Examples
    ///
    ///   studypal init --name Robin
    ///   studypal init --name Robin --character nova
    ///
    /// # Characters
    ///
    ///   pip     Cheerful sprout (default)
    ///   nova    Cool-headed star cat
    ///   mochi   Cozy rice spirit
    Init(InitArgs),

    /// Manage your quest log (add, list, done, clear)
    ///
    /// Quests are tasks with deadlines. Listings show a live countdown;
    /// completing a quest earns a reward line from your companion.
    ///
    /// # Examples
    ///
    ///   studypal quest add "Finish essay" --due 2024-12-15
    ///   studypal quest add "Lab report" --due 2024-12-01 --time 17:00
    ///   studypal quest list
    ///   studypal quest done 1718035200000
    ///   studypal quest clear
    #[command(alias = "q")]
    Quest(QuestArgs),

    /// Manage your weekly class schedule (add, list, remove, clear)
    ///
    /// Entries are sorted by day (Monday first), then start time.
    ///
    /// # Examples
    ///
    ///   studypal schedule add Algebra --day mon --time 09:30
    ///   studypal schedule list
    ///   studypal schedule remove 1718035200000
    ///   studypal schedule clear
    #[command(alias = "sched")]
    Schedule(ScheduleArgs),

    /// Run the interactive Pomodoro focus timer
    ///
    /// Opens a full-screen focus view with the countdown, your companion,
    /// and its speech bubble. Focus phases cycle automatically: every
    /// fourth completed focus earns a long break, the rest short ones.
    ///
    /// # Keys
    ///
    ///   space    start / pause
    ///   f s l    pick focus / short break / long break (while stopped)
    ///   r        reset the whole cycle
    ///   c        poke the companion
    ///   q        quit
    ///
    /// # Examples
    ///
    ///   studypal focus
    ///   studypal focus --mode short
    #[command(alias = "f")]
    Focus(FocusArgs),

    /// Poke the companion for a word of encouragement
    ///
    /// # Examples
    ///
    ///   studypal say
    Say,

    /// Delete ALL studypal data (profile, schedule, quests)
    ///
    /// Asks for confirmation unless --force is given.
    ///
    /// # Examples
    ///
    ///   studypal reset-all
    ///   studypal reset-all --force
    ResetAll(ResetAllArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   studypal completions zsh > ~/.zsh/completions/_studypal
    Completions(CompletionsArgs),
}

/// Arguments for the init command.
#[derive(Args)]
pub struct InitArgs {
    /// Your name
    #[arg(short, long)]
    pub name: String,

    /// Companion character: pip, nova, or mochi
    #[arg(short, long, default_value = "pip")]
    pub character: String,
}

/// Arguments for quest subcommands.
#[derive(Args)]
pub struct QuestArgs {
    #[command(subcommand)]
    pub command: QuestCommands,
}

/// Quest subcommands.
#[derive(Subcommand)]
pub enum QuestCommands {
    /// Add a quest
    Add {
        /// Quest description
        title: String,

        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: String,

        /// Due time (HH:MM); defaults to 23:59
        #[arg(short, long)]
        time: Option<String>,
    },

    /// List all quests with countdowns
    #[command(alias = "ls")]
    List,

    /// Toggle a quest's completed state
    Done {
        /// Quest id (shown in listings)
        id: i64,
    },

    /// Clear all completed quests
    Clear,
}

/// Arguments for schedule subcommands.
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(subcommand)]
    pub command: ScheduleCommands,
}

/// Schedule subcommands.
#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// Add a class to the weekly schedule
    Add {
        /// Subject or class name
        subject: String,

        /// Day of week (mon, tue, ..., sun)
        #[arg(short, long)]
        day: String,

        /// Start time (HH:MM)
        #[arg(short, long)]
        time: String,
    },

    /// List the schedule, sorted by day then time
    #[command(alias = "ls")]
    List,

    /// Remove an entry by id
    Remove {
        /// Entry id (shown in listings)
        id: i64,
    },

    /// Clear the whole schedule
    Clear,
}

/// Arguments for the focus command.
#[derive(Args)]
pub struct FocusArgs {
    /// Initial timer mode: focus, short, or long
    #[arg(short, long)]
    pub mode: Option<String>,
}

/// Arguments for the reset-all command.
#[derive(Args)]
pub struct ResetAllArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the completions command.
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
    pub shell: String,
}
