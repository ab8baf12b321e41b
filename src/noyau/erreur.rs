// src/noyau/erreur.rs

use thiserror::Error;

use super::contexte::Operateur;

/// Erreurs d’évaluation : toutes terminales pour l’appel en cours.
///
/// Les valeurs transportées sont converties en `f64` quel que soit le type
/// flottant utilisé par l’évaluateur, pour que le message reste reproductible.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ErreurCalcul {
    #[error("opérateur invalide '{caractere}' (position {position})")]
    OperateurInvalide { caractere: char, position: usize },

    #[error("opérateur '{deja}' déjà spécifié avant '{nouveau}'")]
    OperateurDuplique { deja: Operateur, nouveau: Operateur },

    #[error("opérateur non spécifié avant {valeur}")]
    OperateurManquant { valeur: f64 },

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseFermante,

    #[error("parenthèses non fermées ({profondeur})")]
    ParentheseOuverte { profondeur: usize },

    #[error("division par zéro")]
    DivisionParZero,

    #[error("{} impossible : aucun nombre avant {valeur}", .operation.nom())]
    OperandeManquant { operation: Operateur, valeur: f64 },

    #[error("{fonction} : argument hors domaine ({valeur})")]
    DomaineMathematique { fonction: &'static str, valeur: f64 },

    #[error("nombre invalide '{0}'")]
    NombreInvalide(String),
}
