//! src/app/etat.rs
//!
//! État de présentation (sans noyau).
//!
//! Rôle : garder les paramètres d’affichage et mettre en forme une ligne
//! `"<expr> = <valeur>"` ou `"<expr> = <erreur>"`.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing).
//! - Défense en profondeur : bornes sur le nombre de décimales.

use calculatrice_pile::ErreurCalcul;

/// Décimales affichées par défaut.
pub const DECIMALES_DEFAUT: usize = 4;

/// Au-delà, un f64 n’a plus de chiffres significatifs à montrer.
pub const DECIMALES_MAX: usize = 17;

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub decimales: usize,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            decimales: DECIMALES_DEFAUT,
        }
    }
}

impl AppCalc {
    pub fn new(decimales: usize) -> Self {
        let mut app = Self::default();
        app.set_decimales(decimales);
        app
    }

    /// Garde-fou : limite les décimales.
    pub fn set_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.min(DECIMALES_MAX);
    }

    /// Met en forme le résultat d’une évaluation.
    pub fn ligne(&self, entree: &str, resultat: &Result<f64, ErreurCalcul>) -> String {
        match resultat {
            Ok(v) => format!("{} = {:.*}", entree, self.decimales, v),
            Err(e) => format!("{entree} = {e}"),
        }
    }
}
