// src/noyau/jetons.rs
//
// Lecture bas niveau pour le balayage en une passe :
// - normalisation (minuscules)
// - littéraux numériques : chiffres [ '.' chiffres ]
// - mots-clés de fonction collés à leur '('
//
// Pas de signe ni d’exposant dans un littéral : le signe passe par le
// modificateur du contexte.

use num_traits::Float;

use super::erreur::ErreurCalcul;
use super::fonction::{Fonction, MOTS_CLES};

/// Met l’expression en minuscules et la découpe en caractères.
pub fn normaliser(s: &str) -> Vec<char> {
    s.to_lowercase().chars().collect()
}

fn lire_chiffres(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Lit un nombre décimal positif à partir de `debut` (qui doit être un chiffre).
/// Retourne la valeur et la position juste après le littéral.
pub fn lire_nombre<F: Float>(chars: &[char], debut: usize) -> Result<(F, usize), ErreurCalcul> {
    let mut i = lire_chiffres(chars, debut);

    if i < chars.len() && chars[i] == '.' {
        i = lire_chiffres(chars, i + 1);
    }

    let texte: String = chars[debut..i].iter().collect();
    let valeur = F::from_str_radix(&texte, 10).map_err(|_| ErreurCalcul::NombreInvalide(texte))?;

    Ok((valeur, i))
}

/// Reconnaît un mot-clé de fonction à `debut`, immédiatement suivi de '('.
/// Retourne la fonction et la position de la '(' (traitée ensuite normalement).
pub fn reconnaitre_fonction(chars: &[char], debut: usize) -> Option<(Fonction, usize)> {
    let reste = &chars[debut..];

    MOTS_CLES.iter().find_map(|(mot, fonction)| {
        let n = mot.chars().count();
        let colle = reste.len() > n
            && reste[n] == '('
            && reste[..n].iter().copied().eq(mot.chars());
        colle.then_some((*fonction, debut + n))
    })
}
