// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + options.rs)
// - Relier options -> état -> noyau -> sortie
//
// Le noyau ne fait jamais d’affichage : tout passe par ici.

pub mod etat;
pub mod options;

pub use etat::AppCalc;
pub use options::Options;

use std::io::{self, Write};

use calculatrice_pile::eval_expression;
use tracing::info;

impl AppCalc {
    /// Évalue chaque expression et écrit une ligne par résultat.
    /// Une erreur d’évaluation est une ligne comme une autre.
    pub fn executer<W: Write>(&self, expressions: &[String], sortie: &mut W) -> io::Result<()> {
        for expr in expressions {
            let resultat = eval_expression(expr);
            writeln!(sortie, "{}", self.ligne(expr, &resultat))?;
        }
        Ok(())
    }
}

/// Point d’entrée applicatif (après parsing des options).
pub fn lancer(options: Options) -> io::Result<()> {
    let app = AppCalc::new(options.decimales);
    info!(
        expressions = options.expressions.len(),
        decimales = app.decimales,
        "démarrage"
    );

    let stdout = io::stdout();
    let mut sortie = stdout.lock();
    app.executer(&options.expressions, &mut sortie)
}
