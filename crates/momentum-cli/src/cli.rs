//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use momentum_core::VERSION;

/// Momentum - a local-first habit and daily-task tracker
#[derive(Parser)]
#[command(name = "momentum")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the tracker store file
    #[arg(short, long, global = true, env = "MOMENTUM_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage tracked habits and the consistency counters
    Habit(HabitArgs),

    /// Manage daily tasks
    Task(TaskArgs),

    /// Show habit and task progress together
    Dashboard(DashboardArgs),

    /// Export the habit report
    Export(ExportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `habit` command group
#[derive(Args)]
pub struct HabitArgs {
    #[command(subcommand)]
    pub command: HabitSubcommand,
}

#[derive(Subcommand)]
pub enum HabitSubcommand {
    /// Commit to a new habit
    Add(HabitAddArgs),

    /// List habits with the current counters
    List(HabitListArgs),

    /// Mark today's habit work as done
    Done(HabitDoneArgs),

    /// Zero the counters for a fresh month
    Reset(HabitResetArgs),

    /// Delete every habit and zero the counters
    Clear(HabitClearArgs),
}

/// Arguments for `habit add`
#[derive(Args)]
pub struct HabitAddArgs {
    /// Habit name
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for `habit list`
#[derive(Args)]
pub struct HabitListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `habit done`
#[derive(Args)]
pub struct HabitDoneArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `habit reset`
#[derive(Args)]
pub struct HabitResetArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `habit clear`
#[derive(Args)]
pub struct HabitClearArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `task` command group
#[derive(Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskSubcommand,
}

#[derive(Subcommand)]
pub enum TaskSubcommand {
    /// Add a daily task
    Add(TaskAddArgs),

    /// List daily tasks
    List(TaskListArgs),

    /// Mark the first task with this name as completed
    Done(TaskUpdateArgs),

    /// Mark the first task with this name as not completed
    Undo(TaskUpdateArgs),

    /// Remove every task with this name
    Remove(TaskUpdateArgs),
}

/// Arguments for `task add`
#[derive(Args)]
pub struct TaskAddArgs {
    /// Task name
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for `task list`
#[derive(Args)]
pub struct TaskListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `task done`, `task undo`, and `task remove`
#[derive(Args)]
pub struct TaskUpdateArgs {
    /// Task name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `dashboard` command
#[derive(Args)]
pub struct DashboardArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Write the report to this path instead of the stamped default
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Print the report to stdout instead of writing a file
    #[arg(long)]
    pub print: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}
