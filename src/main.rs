use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bus_seatmap::{config::Config, Cell, SeatId, SeatMap, Selection};

// Просмотрщик схемы салона для оператора: загружает снапшот мест и
// показывает сетки этажей так, как их увидит дашборд
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting seatmap preview");

    let mut json_output = false;
    let mut paths: Vec<PathBuf> = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json_output = true;
        } else {
            paths.push(PathBuf::from(arg));
        }
    }

    let Some(seats_path) = paths.first() else {
        bail!("usage: seatmap-preview <seats.json> [occupancy.json] [--json]");
    };

    let raw = fs::read(seats_path)
        .with_context(|| format!("не удалось прочитать {}", seats_path.display()))?;
    let seatmap = SeatMap::from_json_slice(&raw)?;
    info!(
        "Snapshot loaded: {} seats on {} deck(s)",
        seatmap.len(),
        seatmap.decks().len()
    );

    // Занятость - отдельный JSON-массив id мест (контекст конкретного рейса)
    let occupancy: HashSet<SeatId> = match paths.get(1) {
        Some(path) => {
            let raw = fs::read(path)
                .with_context(|| format!("не удалось прочитать {}", path.display()))?;
            serde_json::from_slice::<Vec<SeatId>>(&raw)
                .context("файл занятости должен быть JSON-массивом id мест")?
                .into_iter()
                .collect()
        }
        None => HashSet::new(),
    };

    let grids = seatmap.grids(&occupancy, &Selection::none(), config.layout.aisle_after_col);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&grids)?);
        return Ok(());
    }

    for (deck, grid) in &grids {
        println!("Этаж {}: {} мест", deck, grid.seat_count());
        for row in &grid.rows {
            println!("  {}", render_row(row));
        }
        println!();
    }

    Ok(())
}

fn render_row(row: &[Cell]) -> String {
    let mut out = String::new();
    for cell in row {
        match cell {
            Some(c) if c.is_reserved => out.push_str("[ x]"),
            Some(c) => out.push_str(&format!("[{:>2}]", c.number)),
            None => out.push_str("    "),
        }
        out.push(' ');
    }
    out.trim_end().to_string()
}
