use std::io;
use std::sync::Arc;

use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator};
use colored::Colorize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use resist::application::{DataStore, ResistanceManager, ResistanceModel};
use resist::cli::args::Cli;
use resist::cli::error::CliResult;
use resist::cli::output;
use resist::cli::shell::Shell;
use resist::config::Settings;
use resist::infrastructure::error::InfraError;
use resist::infrastructure::geocoder::ZipGazetteer;
use resist::infrastructure::traits::{Geocoder, RealFileSystem};

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn main() {
    let cli = Cli::parse();

    if let Some(generator) = cli.generator {
        let mut cmd = Cli::command();
        eprintln!("Generating completion file for {generator:?}...");
        print_completions(generator, &mut cmd);
        return;
    }
    if cli.info {
        if let Some(a) = Cli::command().get_author() {
            println!("AUTHOR: {}", a)
        }
        if let Some(v) = Cli::command().get_version() {
            println!("VERSION: {}", v)
        }
        return;
    }

    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("{}", output::error_line(&e));
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("{}", format!("Warning: {}, using defaults", e).yellow());
        Settings::default()
    });

    let geocoder: Arc<dyn Geocoder> = Arc::new(ZipGazetteer);
    let store = DataStore::new(Arc::new(RealFileSystem));
    let manager = ResistanceManager::new(Arc::clone(&geocoder));
    let mut model = ResistanceModel::new();

    // Startup load is fatal; in-session loads only fail their own operation.
    if let Some(path) = &cli.load {
        let snapshot = store.load(path)?;
        model.merge(snapshot);
    }

    let stdin = io::stdin();
    let mut shell = Shell::new(
        stdin.lock(),
        io::stdout(),
        model,
        manager,
        store,
        geocoder,
        settings,
    );
    shell
        .run()
        .map_err(|e| InfraError::io("interactive session", e))?;
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a noisy module filter
    let noisy_modules: [&str; 0] = [];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::ENTER)
        .with_span_events(FmtSpan::CLOSE);

    let filtered_layer = fmt_layer.with_filter(filter).with_filter(module_filter);

    tracing_subscriber::registry().with(filtered_layer).init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resist::util::testing;

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup();
    }

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
