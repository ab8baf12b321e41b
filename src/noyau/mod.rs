//! Noyau d’évaluation (une seule passe)
//!
//! Organisation interne :
//! - jetons.rs    : normalisation + lecture des nombres / mots-clés
//! - fonction.rs  : sqrt, log (naturel) + domaines
//! - contexte.rs  : opérandes + état en attente d’un niveau de parenthèse
//! - reduction.rs : priorités ^ puis * / puis + -
//! - eval.rs      : balayage, pile de contextes, API publique
//! - erreur.rs    : erreurs typées

pub mod contexte;
pub mod erreur;
pub mod eval;
pub mod fonction;
pub mod jetons;
pub mod reduction;


#[cfg(test)]
mod tests_fuzz_safe;

use num_traits::Float;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{eval_expression, eval_expression_en};

/// Valeur convertie en `f64` pour les messages et la journalisation.
pub(crate) fn valeur_f64<F: Float>(x: F) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
