// src/app/options.rs
//
// Options de la ligne de commande.

use clap::Parser;

use super::etat::DECIMALES_DEFAUT;

#[derive(Parser, Debug)]
#[command(name = "calculatrice")]
#[command(about = "Évalue des expressions arithmétiques (+ - * / ^, parenthèses, sqrt, log)", long_about = None)]
pub struct Options {
    /// Expressions à évaluer (une ligne de sortie par expression).
    /// Un '-' en tête fait partie de l’expression : "-3+1" n’est pas une option.
    #[arg(required = true, allow_hyphen_values = true)]
    pub expressions: Vec<String>,

    /// Nombre de décimales affichées
    #[arg(short, long, env = "CALCULATRICE_DECIMALES", default_value_t = DECIMALES_DEFAUT)]
    pub decimales: usize,
}
