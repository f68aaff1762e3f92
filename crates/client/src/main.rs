use clap::Parser;
use fortune_client::{
    api::FortuneClient,
    config::{Config, DEFAULT_CONFIG_PATH},
    menu,
};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fortune", about = "Open and share fortune cookies")]
struct Args {
    /// Path to the client config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fortune_client=warn".into()),
        )
        .init();

    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let client = FortuneClient::new(config.server_url(), config.user.name.clone());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    if let Err(e) = menu::run(&client, &mut input, &mut out) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
