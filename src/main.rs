use clap::Parser;
use safekeeping::cli::{commands, Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Set {
            ref key,
            ref value,
            ref description,
        } => commands::set::execute(&cli, key, value.as_deref(), description.as_deref()),
        Commands::Get {
            ref key,
            no_newline,
        } => commands::get::execute(&cli, key, no_newline),
        Commands::Describe {
            ref key,
            ref description,
        } => commands::describe::execute(&cli, key, description),
        Commands::List { json } => commands::list::execute(&cli, json),
        Commands::Keys => commands::keys::execute(&cli),
        Commands::Delete { ref key, force } => commands::delete::execute(&cli, key, force),
        Commands::Path => commands::path::execute(&cli),
        Commands::Version => commands::version::execute(),
        Commands::Completions { shell } => commands::completions::execute(shell),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        safekeeping::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

/// Log to stderr. `SAFEKEEPING_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_env("SAFEKEEPING_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("safekeeping={level},warn")));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
