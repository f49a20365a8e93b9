// Entrypoint for the CLI application.
// - Keeps `main` small: resolve config, fetch, prompt, render.
// - Returns `anyhow::Result` so any fatal error prints its context chain.

use clap::Parser;
use rawg_genres::{api::RawgClient, config::{Cli, Config}, render, ui};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the menu on stdout stays readable. RUST_LOG
    // overrides the default `warn` level.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_cli(Cli::parse())?;
    let api = RawgClient::new(&config)?;

    let spinner = ui::spinner("Fetching genres...");
    let genres = api.genres();
    spinner.finish_and_clear();
    let genres = genres?;

    ui::print_genre_menu(&genres);
    let chosen = ui::choose_genre(&genres)?;

    let spinner = ui::spinner("Fetching games...");
    let games = api.games();
    spinner.finish_and_clear();
    let games = games?;

    let count = render::write_page(&config.output, &chosen.name, &games)?;
    println!("{}", render::summary(count, &config.output));
    Ok(())
}
