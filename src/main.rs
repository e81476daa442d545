use clap::Parser;
use miette::Result;
use napkin::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head` causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    init_tracing(global.verbose);

    match cli.command {
        Commands::Init(args) => napkin::cli::commands::init::run(args, &global),
        Commands::Customer(cmd) => napkin::cli::commands::customer::run(cmd, &global),
        Commands::Vendor(cmd) => napkin::cli::commands::vendor::run(cmd, &global),
        Commands::Product(cmd) => napkin::cli::commands::product::run(cmd, &global),
        Commands::Order(cmd) => napkin::cli::commands::order::run(cmd, &global),
        Commands::Command(args) => napkin::cli::commands::command::run(args, &global),
        Commands::Form(args) => napkin::cli::commands::form::run(args, &global),
        Commands::Status(args) => napkin::cli::commands::status::run(args, &global),
        Commands::Completions(args) => napkin::cli::commands::completions::run(args),
    }
}

/// Log to stderr; `RUST_LOG` wins, otherwise `--verbose` picks debug over warn
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "napkin=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
