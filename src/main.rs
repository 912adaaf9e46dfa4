use clap::Parser;

use ytmood::cli::Cli;

fn main() {
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(err) = ytmood::run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
