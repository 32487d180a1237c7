use std::io;
use std::process;

use clap::Parser;
use console::style;

use rust_passgen::cli::{handlers, menu, Args, CliCommand};
use rust_passgen::core::config::Config;
use rust_passgen::{logging, utils};

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    if let Some(path) = utils::get_user_env_file() {
        if path.exists() {
            dotenvy::from_path(&path).ok();
        }
    }

    let args = Args::parse();
    let (config, warnings) = Config::load();
    logging::init(&config)?;

    for warning in &warnings {
        log::warn!("{}", warning);
    }

    log::info!("Starting rust_passgen");
    log::debug!("Loaded config: {:?}", config);

    let json = args.json;
    let defaults = config.generation_defaults();
    let mut stdout = io::stdout();

    let outcome = match args.command {
        Some(CliCommand::Generate { options, seed, count }) => handlers::handle_generate(
            &mut stdout,
            &options.apply(defaults),
            seed,
            usize::from(count),
            json,
        ),
        Some(CliCommand::Settings { options }) => {
            handlers::handle_settings(&mut stdout, &options.apply(defaults), json)
        }
        Some(CliCommand::Interactive) | None => menu::run_cli_menu(defaults),
    };

    if let Err(e) = outcome {
        log::error!("{}", e);
        if let Some(message) = handlers::failure_message(&e, json) {
            eprintln!("{} {}", style("❌").red(), style(message).red());
        }
        process::exit(1);
    }

    Ok(())
}
