//! Headless camel race simulator.

use anyhow::Context;
use camel_core::GameConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod race;

/// Read an optional numeric env var
fn env_number<T>(name: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a number, got {value:?}")),
        Err(_) => Ok(None),
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let defaults = GameConfig::default();
    let player_count = env_number("CAMEL_PLAYERS")?.unwrap_or(defaults.player_count);
    let seed: Option<u64> = env_number("CAMEL_SEED")?;
    let games: u32 = env_number("CAMEL_GAMES")?.unwrap_or(1);

    info!(player_count, games, "Starting camel race simulation...");

    for index in 0..games {
        let config = GameConfig {
            player_count,
            seed: seed.map(|s| s.wrapping_add(u64::from(index))),
        };
        let (game, report) = race::run_race(config)?;

        for (place, (player, points)) in report.standings.iter().enumerate() {
            info!(game = index, place = place + 1, player, points, "final standing");
        }
        println!("{}", game.snapshot().to_json()?);
    }

    Ok(())
}
