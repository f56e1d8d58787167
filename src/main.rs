use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use budget_analysis::config::{AppPaths, Frontend, InvalidInputPolicy, Settings};
use budget_analysis::display::format_report;
use budget_analysis::export::{export_to_file, ExportFormat};
use budget_analysis::error::BudgetResult;
use budget_analysis::prompt::{DialogPrompter, ScriptedPrompter, TerminalPrompter};
use budget_analysis::session::{run_and_release, run_session, BudgetSummary};

#[derive(Parser)]
#[command(
    name = "budget-analysis",
    version,
    about = "Check a month's expenses against your budget",
    long_about = "budget-analysis asks for your monthly budget and your housing, travel, \
                  and mess expenses, lets you add any extra expenses, and tells you \
                  whether you are under, over, or exactly on budget."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    options: GlobalOptions,
}

#[derive(Args)]
struct GlobalOptions {
    /// Prompt frontend for interactive runs
    #[arg(long, global = true, value_enum)]
    frontend: Option<Frontend>,

    /// Ask again when a reply is not a number instead of aborting
    #[arg(long, global = true)]
    retry: bool,

    /// Maximum number of extra expenses
    #[arg(long, global = true)]
    max_extras: Option<usize>,

    /// Skip the expense breakdown after the outcome message
    #[arg(long, global = true)]
    no_breakdown: bool,

    /// Write the report to this file
    #[arg(long, global = true)]
    export: Option<PathBuf>,

    /// Export format (defaults to the file extension, then json)
    #[arg(long, global = true, value_enum, requires = "export")]
    format: Option<ExportFormat>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl GlobalOptions {
    /// Command-line flags win over the settings file
    fn apply(&self, settings: &mut Settings) {
        if let Some(frontend) = self.frontend {
            settings.frontend = frontend;
        }
        if self.retry {
            settings.on_invalid_input = InvalidInputPolicy::Retry;
        }
        if let Some(max) = self.max_extras {
            settings.max_extra_expenses = Some(max);
        }
        if self.no_breakdown {
            settings.show_breakdown = false;
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run without prompting, taking every amount from flags
    Run(BatchArgs),

    /// Show current configuration and paths
    Config {
        /// Write the settings file with the current values
        #[arg(long)]
        init: bool,
    },
}

#[derive(Args)]
struct BatchArgs {
    /// Monthly budget
    #[arg(long, allow_hyphen_values = true)]
    budget: String,

    /// Housing expenses
    #[arg(long, allow_hyphen_values = true)]
    housing: String,

    /// Travel expenses
    #[arg(long, allow_hyphen_values = true)]
    travel: String,

    /// Mess expenses
    #[arg(long, allow_hyphen_values = true)]
    mess: String,

    /// An extra expense (repeatable)
    #[arg(long = "extra", allow_hyphen_values = true)]
    extras: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AppPaths::new()?;
    let mut settings = Settings::load_or_default(&paths)?;
    cli.options.apply(&mut settings);

    init_logging(cli.options.verbose, settings.frontend);

    match cli.command {
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Settings written to {}", paths.settings_file().display());
                println!();
            }
            print_config(&paths, &settings);
        }
        Some(Commands::Run(args)) => {
            let mut prompter = ScriptedPrompter::for_run(
                args.budget,
                [args.housing, args.travel, args.mess],
                args.extras,
            );
            let summary = aborted(run_session(&mut prompter, &settings.for_batch()))?;
            for message in prompter.messages() {
                println!("{}", message);
            }
            finish(&summary, &settings, &cli.options)?;
        }
        None => {
            let summary = match settings.frontend {
                Frontend::Prompt => run_and_release(TerminalPrompter::stdio(), &settings),
                // The dialogs are torn down, restoring the terminal, before anything is logged
                Frontend::Dialog => run_and_release(DialogPrompter::new()?, &settings),
            };
            let summary = aborted(summary)?;
            finish(&summary, &settings, &cli.options)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, frontend: Frontend) {
    let default_filter = if verbose {
        "budget_analysis=debug"
    } else if frontend == Frontend::Dialog {
        // Keep stderr quiet while dialogs own the screen
        "error"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn aborted(result: BudgetResult<BudgetSummary>) -> Result<BudgetSummary> {
    result
        .inspect_err(|e| error!(error = %e, "Run aborted"))
        .context("Budget analysis aborted")
}

fn finish(summary: &BudgetSummary, settings: &Settings, options: &GlobalOptions) -> Result<()> {
    if settings.show_breakdown {
        println!();
        print!("{}", format_report(summary, &settings.currency_symbol));
    }

    if let Some(path) = &options.export {
        export_to_file(summary, &settings.currency_symbol, path, options.format)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn print_config(paths: &AppPaths, settings: &Settings) {
    println!("budget-analysis Configuration");
    println!("=============================");
    println!("Config directory: {}", paths.config_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:    {}", settings.currency_symbol);
    match settings.max_extra_expenses {
        Some(max) => println!("  Max extra expenses: {}", max),
        None => println!("  Max extra expenses: unlimited"),
    }
    println!("  On invalid input:   {:?}", settings.on_invalid_input);
    println!("  Max attempts:       {}", settings.max_attempts);
    println!("  Frontend:           {:?}", settings.frontend);
    println!("  Show breakdown:     {}", settings.show_breakdown);
}
