use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use journal_core::{ReportKind, VERSION};

/// Journal - read and edit a plain-text ledger journal from the command line
#[derive(Parser)]
#[command(name = "journal")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the ledger journal file
    #[arg(short, long, global = true, env = "LEDGER_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List transactions, most recent first
    List(ListArgs),

    /// Show a single transaction by ID
    Show(ShowArgs),

    /// Append a new transaction
    Add(TransactionArgs),

    /// Rewrite an existing transaction in place
    Edit(EditArgs),

    /// Delete a transaction
    Delete(DeleteArgs),

    /// List account names
    Accounts(AccountsArgs),

    /// Run a `ledger` report over the journal
    Report(ReportArgs),

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Transaction ID (0 = most recent)
    #[arg(value_name = "ID")]
    pub id: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Transaction fields for `add` and `edit`
#[derive(Args)]
pub struct TransactionArgs {
    /// Date as YYYY/MM/DD (add defaults to today)
    #[arg(long, conflicts_with = "from_json")]
    pub date: Option<String>,

    /// Payee or description
    #[arg(long, conflicts_with = "from_json")]
    pub payee: Option<String>,

    /// Mark the transaction cleared
    #[arg(long, conflicts_with = "from_json")]
    pub cleared: bool,

    /// Posting as ACCOUNT[=AMOUNT][;COMMENT] (repeatable, in order)
    #[arg(short, long, value_name = "POSTING", conflicts_with = "from_json")]
    pub posting: Vec<String>,

    /// Read the whole transaction as JSON from a file, or `-` for stdin
    #[arg(long, value_name = "PATH")]
    pub from_json: Option<String>,

    /// Output the stored transaction as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Transaction ID (0 = most recent)
    #[arg(value_name = "ID")]
    pub id: usize,

    #[command(flatten)]
    pub transaction: TransactionArgs,

    /// Clear the cleared marker
    #[arg(long, conflicts_with_all = ["cleared", "from_json"])]
    pub uncleared: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Transaction ID (0 = most recent)
    #[arg(value_name = "ID")]
    pub id: usize,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Output the removed transaction as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `accounts` command
#[derive(Args)]
pub struct AccountsArgs {
    /// Collect accounts from the journal text instead of running `ledger`
    #[arg(long)]
    pub from_text: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Report kinds exposed on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportName {
    /// Assets and liabilities, two levels deep
    Summary,
    Balance,
    Register,
    /// Expenses against the budget
    Budget,
    /// Cleared and pending balances
    Cleared,
}

impl From<ReportName> for ReportKind {
    fn from(name: ReportName) -> Self {
        match name {
            ReportName::Summary => ReportKind::Summary,
            ReportName::Balance => ReportKind::Balance,
            ReportName::Register => ReportKind::Register,
            ReportName::Budget => ReportKind::Budget,
            ReportName::Cleared => ReportKind::Cleared,
        }
    }
}

/// Arguments for the `report` command
#[derive(Args)]
pub struct ReportArgs {
    #[arg(value_enum, value_name = "REPORT")]
    pub report: ReportName,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `config` command
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Write a default configuration file
    Init(ConfigInitArgs),

    /// Print the configuration file path
    Path,
}

/// Arguments for `config init`
#[derive(Args)]
pub struct ConfigInitArgs {
    /// Journal file to record in the configuration
    #[arg(long, value_name = "PATH")]
    pub journal: Option<String>,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}
