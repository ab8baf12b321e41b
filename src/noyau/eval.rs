//! Noyau — évaluation en une seule passe
//!
//! Balayage gauche -> droite qui lit, applique signes et fonctions, et
//! empile un contexte par parenthèse ouverte. Pas de jetons intermédiaires,
//! pas d’arbre : chaque ')' réduit son contexte et réinjecte le nombre
//! obtenu dans le contexte parent.

use num_traits::Float;
use tracing::{debug, trace};

use super::contexte::{Contexte, Operateur};
use super::erreur::ErreurCalcul;
use super::jetons::{lire_nombre, normaliser, reconnaitre_fonction};
use super::reduction::reduire;
use super::valeur_f64;

/// État d’une évaluation : curseur, contexte actif, contextes suspendus.
///
/// Construit pour un seul appel ; rien n’est partagé entre deux évaluations.
struct Evaluateur<F> {
    chars: Vec<char>,
    position: usize,
    courant: Contexte<F>,
    pile: Vec<Contexte<F>>,
}

impl<F: Float> Evaluateur<F> {
    fn new(expression: &str) -> Self {
        Self {
            chars: normaliser(expression),
            position: 0,
            courant: Contexte::default(),
            pile: Vec::new(),
        }
    }

    fn executer(mut self) -> Result<F, ErreurCalcul> {
        while self.position < self.chars.len() {
            self.etape()?;
        }

        if !self.pile.is_empty() {
            return Err(ErreurCalcul::ParentheseOuverte {
                profondeur: self.pile.len(),
            });
        }

        reduire(self.courant.operandes)
    }

    /// Consomme un élément (nombre, symbole ou mot-clé) à la position courante.
    fn etape(&mut self) -> Result<(), ErreurCalcul> {
        let c = self.chars[self.position];

        if c.is_ascii_digit() {
            let (valeur, suite) = lire_nombre(&self.chars, self.position)?;
            self.position = suite;
            return self.courant.ajouter_operande(valeur);
        }

        let position = self.position;
        self.position += 1;

        match c {
            '(' => self.ouvrir(),
            ')' => self.fermer()?,
            '-' => self.courant.poser_moins(),
            ' ' => {}
            _ => {
                if let Some(op) = Operateur::depuis_symbole(c) {
                    self.courant.poser_operateur(op)?;
                } else if let Some((fonction, parenthese)) =
                    reconnaitre_fonction(&self.chars, position)
                {
                    self.courant.poser_fonction(fonction);
                    // la '(' sera lue à l’étape suivante
                    self.position = parenthese;
                } else {
                    return Err(ErreurCalcul::OperateurInvalide {
                        caractere: c,
                        position,
                    });
                }
            }
        }

        Ok(())
    }

    fn ouvrir(&mut self) {
        let parent = std::mem::take(&mut self.courant);
        self.pile.push(parent);
        trace!(profondeur = self.pile.len(), "ouverture");
    }

    fn fermer(&mut self) -> Result<(), ErreurCalcul> {
        let parent = self.pile.pop().ok_or(ErreurCalcul::ParentheseFermante)?;
        let interieur = std::mem::replace(&mut self.courant, parent);

        let valeur = reduire(interieur.operandes)?;
        trace!(
            profondeur = self.pile.len(),
            valeur = valeur_f64(valeur),
            "fermeture"
        );

        self.courant.ajouter_operande(valeur)
    }
}

/// API publique : évalue une expression en `f64`.
///
/// Exemple : `eval_expression("2^3^2")` donne `Ok(512.0)`.
pub fn eval_expression(expression: &str) -> Result<f64, ErreurCalcul> {
    eval_expression_en::<f64>(expression)
}

/// Même évaluation, dans n’importe quel type flottant.
pub fn eval_expression_en<F: Float>(expression: &str) -> Result<F, ErreurCalcul> {
    debug!(expression, "évaluation");

    let resultat = Evaluateur::<F>::new(expression).executer();

    match &resultat {
        Ok(v) => debug!(expression, resultat = valeur_f64(*v), "évaluée"),
        Err(e) => debug!(expression, erreur = %e, "échec"),
    }

    resultat
}
