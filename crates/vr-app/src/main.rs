use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use vr_app::app::{self, Action, App};
use vr_app::cli::Cli;
use vr_core::config::ViewerConfig;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config et appliquer les overrides CLI
    let config = resolve_config(&cli)?;

    // 4. Création d'un film vide : pas d'interface
    if let Some(depth) = cli.new {
        let path = app::create_blank(&config, cli.file.as_deref(), depth, cli.out.as_deref())?;
        log::info!("Nouveau film écrit dans {}", path.display());
        return Ok(());
    }

    // 5. Charger le film AVANT de toucher au terminal
    let path = cli
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.movie.filename));
    let app_instance = App::load(&path, config)?;

    // 6. Export : pas d'interface
    if cli.export {
        let out = cli
            .out
            .clone()
            .unwrap_or_else(|| PathBuf::from(&app_instance.movie.info.filename));
        return app_instance.export(&out);
    }

    let action = cli.play.map_or(Action::Navigate, Action::Play);

    // 7. Initialiser le terminal ratatui
    let terminal = ratatui::init();

    // 8. Boucle de session
    let result = app_instance.run(terminal, &action);

    // 9. Restaurer le terminal (TOUJOURS, même en cas d'erreur)
    ratatui::restore();

    result
}

/// Load the config file (defaults if absent), then apply CLI overrides.
fn resolve_config(cli: &Cli) -> Result<ViewerConfig> {
    let mut config = if cli.config.exists() {
        vr_core::config::load_config(&cli.config)?
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        ViewerConfig::default()
    };

    if let Some(w) = cli.cell_width {
        config.cell_width = w;
    }
    if let Some(h) = cli.cell_height {
        config.cell_height = h;
    }
    if cli.debug {
        config.debug = true;
    }
    config.clamp_all();
    Ok(config)
}
