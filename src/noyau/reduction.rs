// src/noyau/reduction.rs
//
// Réduction d’un contexte en un seul nombre, par priorité :
// 1) '^'      de droite à gauche (associativité à droite)
// 2) '*' '/'  de gauche à droite
// 3) '+' '-'  somme finale (Moins = on soustrait la valeur stockée)
//
// Chaque repli écrit le résultat dans l’opérande de gauche (qui garde son
// propre lien) et marque l’opérande de droite `Consomme`.

use num_traits::Float;
use tracing::trace;

use super::contexte::{Lien, Operande, Operateur};
use super::erreur::ErreurCalcul;
use super::valeur_f64;

/// Replie `ops[i]` dans le plus proche opérande non consommé à sa gauche.
/// Retourne l’index de cet opérande.
fn replier<F: Float>(
    ops: &mut [Operande<F>],
    i: usize,
    op: Operateur,
    f: impl Fn(F, F) -> F,
) -> Result<usize, ErreurCalcul> {
    let droite = ops[i].valeur;

    let gauche = ops[..i]
        .iter()
        .rposition(|o| o.lien != Lien::Consomme)
        .ok_or_else(|| ErreurCalcul::OperandeManquant {
            operation: op,
            valeur: valeur_f64(droite),
        })?;

    let resultat = f(ops[gauche].valeur, droite);
    trace!(
        gauche = valeur_f64(ops[gauche].valeur),
        droite = valeur_f64(droite),
        operateur = %op,
        resultat = valeur_f64(resultat),
        "repli"
    );

    ops[gauche].valeur = resultat;
    ops[i] = Operande {
        lien: Lien::Consomme,
        valeur: F::zero(),
    };

    Ok(gauche)
}

/// Réduit la suite d’opérandes d’un contexte (consommée) en une valeur.
pub fn reduire<F: Float>(mut ops: Vec<Operande<F>>) -> Result<F, ErreurCalcul> {
    // 1) puissances, balayage arrière
    let mut i = ops.len();
    while i > 0 {
        i -= 1;
        if ops[i].lien == Lien::Par(Operateur::Puissance) {
            i = replier(&mut ops, i, Operateur::Puissance, F::powf)?;
            // on reprend sur l’opérande qui vient de recevoir le repli
            i += 1;
        }
    }

    // 2) produits / quotients, balayage avant
    for i in 0..ops.len() {
        match ops[i].lien {
            Lien::Par(Operateur::Fois) => {
                replier(&mut ops, i, Operateur::Fois, |a, b| a * b)?;
            }
            Lien::Par(Operateur::Divise) => {
                if ops[i].valeur.is_zero() {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                replier(&mut ops, i, Operateur::Divise, |a, b| a / b)?;
            }
            _ => {}
        }
    }

    // 3) somme
    let total = ops.iter().fold(F::zero(), |acc, o| match o.lien {
        Lien::Par(Operateur::Moins) => acc - o.valeur,
        Lien::Consomme => acc,
        _ => acc + o.valeur,
    });

    Ok(total)
}
