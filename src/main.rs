// src/main.rs
//
// Calculatrice — point d’entrée ligne de commande
// -----------------------------------------------
// - Journal : tracing_subscriber sur stderr (RUST_LOG, défaut "warn")
// - Options : clap (voir app/options.rs)
// - Sortie  : une ligne "<expr> = <valeur>" par expression sur stdout

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod app;

use app::Options;

fn installer_journal() {
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    installer_journal();

    let options = Options::parse();

    if let Err(e) = app::lancer(options) {
        eprintln!("Erreur: {e}");
        std::process::exit(1);
    }
}
