// src/noyau/fonction.rs
//
// Fonctions unaires (un seul argument, toujours parenthésé).
//
// Convention : `log` est le logarithme NATUREL (base e) ; `ln` en est un alias.

use num_traits::Float;

use super::erreur::ErreurCalcul;
use super::valeur_f64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Racine,
    Log,
}

/// Mots-clés reconnus (en minuscules), toujours suivis de '('.
pub const MOTS_CLES: &[(&str, Fonction)] = &[
    ("sqrt", Fonction::Racine),
    ("log", Fonction::Log),
    ("ln", Fonction::Log),
];

impl Fonction {
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Racine => "sqrt",
            Fonction::Log => "log",
        }
    }

    /// Applique la fonction, avec contrôle du domaine.
    /// - sqrt : x >= 0
    /// - log  : x > 0
    pub fn appliquer<F: Float>(self, x: F) -> Result<F, ErreurCalcul> {
        let dans_domaine = match self {
            Fonction::Racine => x >= F::zero(),
            Fonction::Log => x > F::zero(),
        };

        // NaN échoue aux deux comparaisons : refusé aussi
        if !dans_domaine {
            return Err(ErreurCalcul::DomaineMathematique {
                fonction: self.nom(),
                valeur: valeur_f64(x),
            });
        }

        Ok(match self {
            Fonction::Racine => x.sqrt(),
            Fonction::Log => x.ln(),
        })
    }
}
