use clap::{Args, Parser, Subcommand, ValueEnum};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "A kanban-style task board with column automations", long_about = None)]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    /// Path to the board file (or set TASKBOARD_FILE)
    #[arg(long, value_name = "FILE", env = "TASKBOARD_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Board operations
    Board(BoardCommand),
    /// Column operations
    Column(ColumnCommand),
    /// Task operations
    Task(TaskCommand),
    /// Automation rule operations
    Automation(AutomationCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Create a new board file with the default columns
    Init {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Seed the board with demo tasks and automation rules
        #[arg(long)]
        sample: bool,
    },
    /// Print the whole board document
    Show,
}

#[derive(Args)]
pub struct ColumnCommand {
    #[command(subcommand)]
    pub action: ColumnAction,
}

#[derive(Subcommand)]
pub enum ColumnAction {
    /// Add a column
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "#e2e8f0")]
        color: String,
        /// Insert before the existing columns instead of after them
        #[arg(long)]
        at_start: bool,
    },
    /// List columns in display order
    List,
    /// Update column properties
    Update {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Delete an empty column
    Delete {
        #[arg(long)]
        id: Uuid,
    },
    /// Move a column into the slot of another column
    Reorder {
        #[arg(long)]
        active_id: Uuid,
        #[arg(long)]
        over_id: Uuid,
    },
}

#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to a column
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        status_id: Uuid,
    },
    /// List tasks, optionally limited to one column
    List {
        #[arg(long)]
        status_id: Option<Uuid>,
    },
    /// Move a task to a column, firing its automation rules
    Move {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        status_id: Uuid,
        #[arg(long, default_value_t = 0)]
        order: i32,
    },
    /// Update task properties
    Update {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a task
    Delete {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Args)]
pub struct AutomationCommand {
    #[command(subcommand)]
    pub action: AutomationCliAction,
}

#[derive(Subcommand)]
pub enum AutomationCliAction {
    /// Add a rule to a column, or to the board with --global
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, value_enum)]
        trigger: TriggerArg,
        /// Column that owns the rule
        #[arg(long, required_unless_present = "global", conflicts_with = "global")]
        status_id: Option<Uuid>,
        /// Attach the rule to the board instead of a column
        #[arg(long)]
        global: bool,
        #[arg(long)]
        from_status_id: Option<Uuid>,
        #[arg(long)]
        to_status_id: Option<Uuid>,
        /// Actions as a JSON array, e.g. '[{"type":"add_tag","config":{"tag":"done"}}]'
        #[arg(long)]
        actions: String,
    },
    /// List every rule on the board
    List,
    /// Enable or disable a column rule
    Toggle {
        #[arg(long)]
        status_id: Uuid,
        #[arg(long)]
        rule_id: Uuid,
        #[arg(long, action = clap::ArgAction::Set)]
        enabled: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TriggerArg {
    MoveTo,
    MoveFrom,
}
