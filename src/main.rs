use colored::Colorize;
use empty_call_benchmark::run_benchmark;

fn main() {
    init_tracing();

    if let Err(e) = run_benchmark() {
        eprintln!("{} {}", "Fatal error:".bold().red(), e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "empty_call_benchmark=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
