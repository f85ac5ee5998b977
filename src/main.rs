use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use techjobs::commands::{list, search, OutputFormat, OutputOptions};
use techjobs::config::UserConfig;
use techjobs::store::JobStore;

#[derive(Parser)]
#[command(name = "techjobs")]
#[command(version = "0.1.0")]
#[command(about = "Search job listings from a CSV file")]
#[command(long_about = None)]
struct Cli {
    /// CSV file with job listings
    #[arg(long = "data", global = true)]
    data: Option<PathBuf>,
    /// Output format
    #[arg(long = "format", value_enum, default_value = "text", global = true)]
    format: OutputFormat,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the distinct values of a column
    List {
        /// Column name (e.g. employer, location)
        column: String,
    },
    /// Print every job listing
    All,
    /// Search listings, in one column or in all of them
    Search {
        /// Case-insensitive search term
        term: String,
        /// Column to search; "all" searches every column unless the data has a column named "all"
        #[arg(short = 'c', long = "column")]
        column: Option<String>,
    },
    /// Print the column names
    Columns,
    /// Generate shell completions (internal)
    #[command(hide = true)]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate man page (internal)
    #[command(hide = true)]
    Man,
}

fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let options = OutputOptions {
        format: cli.format,
        color: atty::is(atty::Stream::Stdout),
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let config = UserConfig::load();
    let store = JobStore::open(config.resolve_data_file(cli.data));

    match cli.command {
        Commands::List { column } => list::handle_list(&store, &column, options, &mut out)?,
        Commands::All => list::handle_all(&store, options, &mut out)?,
        Commands::Search { term, column } => {
            search::handle_search(&store, &term, column.as_deref(), options, &mut out)?
        }
        Commands::Columns => list::handle_columns(&store, options, &mut out)?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut out);
        }
        Commands::Man => {
            let man = clap_mangen::Man::new(Cli::command());
            man.render(&mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
