use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tt_app::{
    AppError, AppResult, build_dashboard, category_counts, fetch_snapshot, load_config,
    load_dashboard, open_store, project_service,
};
use tt_core::Snapshot;
use tt_project::DashboardConfig;

#[derive(Parser)]
#[command(name = "tt-cli")]
#[command(
    about = "TowerTrack CLI - production and shipping status for tower projects",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the config and the fetched records
    Validate {
        /// Path to the dashboard config (YAML or JSON)
        config_path: PathBuf,
    },
    /// Show overall progress and remaining work
    Summary {
        /// Path to the dashboard config (YAML or JSON)
        config_path: PathBuf,
    },
    /// Show the floor x facade project grid
    Grid {
        /// Path to the dashboard config (YAML or JSON)
        config_path: PathBuf,
    },
    /// List production units with their status
    Units {
        /// Path to the dashboard config (YAML or JSON)
        config_path: PathBuf,
    },
    /// List containers grouped by ship
    Containers {
        /// Path to the dashboard config (YAML or JSON)
        config_path: PathBuf,
    },
    /// Export the full dashboard as JSON
    Export {
        /// Path to the dashboard config (YAML or JSON)
        config_path: PathBuf,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Summary { config_path } => cmd_summary(&config_path),
        Commands::Grid { config_path } => cmd_grid(&config_path),
        Commands::Units { config_path } => cmd_units(&config_path),
        Commands::Containers { config_path } => cmd_containers(&config_path),
        Commands::Export {
            config_path,
            output,
        } => cmd_export(&config_path, output.as_deref()),
    }
}

fn load_snapshot(config_path: &Path) -> AppResult<(DashboardConfig, Snapshot)> {
    tracing::debug!(config = %config_path.display(), "loading snapshot");
    let config = load_config(config_path)?;
    let store = open_store(&config, config_path);
    let snapshot = fetch_snapshot(store.as_ref())?;
    Ok((config, snapshot))
}

fn cmd_validate(config_path: &Path) -> AppResult<()> {
    println!("Validating config: {}", config_path.display());
    let (_, snapshot) = load_snapshot(config_path)?;
    project_service::validate_snapshot(&snapshot)?;
    println!(
        "✓ Config and records are valid ({} ships, {} containers, {} units)",
        snapshot.ships.len(),
        snapshot.containers.len(),
        snapshot.units.len()
    );
    Ok(())
}

fn cmd_summary(config_path: &Path) -> AppResult<()> {
    let dashboard = load_dashboard(config_path)?;
    let m = &dashboard.metrics;

    println!("{}", dashboard.name);
    if let Some(taken_at) = &dashboard.taken_at {
        println!("  Snapshot:          {}", taken_at);
    }
    println!("  Overall progress:  {}%", m.overall_progress);
    println!("  Completed:         {} of {} units", m.completed_units, m.total_units);
    println!("  In production:     {} units", m.in_production_units);
    println!("  Ships en route:    {}", dashboard.ship_count);
    println!();
    println!("Remaining until handover");
    println!("  Units remaining:   {}", m.remaining_units);
    println!("  Waiting materials: {} units", m.waiting_units);
    Ok(())
}

fn cmd_grid(config_path: &Path) -> AppResult<()> {
    let dashboard = load_dashboard(config_path)?;
    let grid = &dashboard.grid;

    print!("{:<8}", "Floor");
    for facade in &grid.facades {
        print!("{:<20}", format!("Facade {}", facade));
    }
    println!();

    for row in &grid.rows {
        print!("{:<8}", row.floor);
        for cell in &row.cells {
            let text = match cell {
                Some(unit) => format!("{} ({}) [{:?}]", unit.id, unit.qty, unit.tone),
                None => "-".to_string(),
            };
            print!("{:<20}", text);
        }
        println!();
    }

    if !dashboard.unplaced.is_empty() {
        println!();
        println!("Not on grid: {}", dashboard.unplaced.join(", "));
    }
    Ok(())
}

fn cmd_units(config_path: &Path) -> AppResult<()> {
    let dashboard = load_dashboard(config_path)?;
    if dashboard.units.is_empty() {
        println!("No units found");
        return Ok(());
    }
    for unit in &dashboard.units {
        println!(
            "  {} - floor {}, facade {} - {} units - {} [{}] - {}%",
            unit.id, unit.floor, unit.facade, unit.qty, unit.status, unit.category, unit.progress
        );
    }
    Ok(())
}

fn cmd_containers(config_path: &Path) -> AppResult<()> {
    let (config, snapshot) = load_snapshot(config_path)?;
    let dashboard = build_dashboard(&config, &snapshot);

    if dashboard.containers.is_empty() {
        println!("No containers found");
        return Ok(());
    }
    for manifest in &dashboard.manifests {
        let marker = if manifest.on_map { "" } else { " (not on map)" };
        println!("{}{}", manifest.ship, marker);
        for row in dashboard
            .containers
            .iter()
            .filter(|c| c.ship == manifest.ship)
        {
            println!("  {} - {} [{}]", row.id, row.status, row.category);
        }
    }

    println!();
    let counts: Vec<String> = category_counts(&snapshot)
        .into_iter()
        .map(|(category, n)| format!("{}: {}", category, n))
        .collect();
    println!("By status: {}", counts.join(", "));
    Ok(())
}

fn cmd_export(config_path: &Path, output: Option<&Path>) -> AppResult<()> {
    let dashboard = load_dashboard(config_path)?;
    let json = serde_json::to_string_pretty(&dashboard)?;

    if let Some(path) = output {
        std::fs::write(path, json).map_err(|e| AppError::OutputWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        println!("✓ Exported dashboard to {}", path.display());
    } else {
        println!("{}", json);
    }
    Ok(())
}
