// src/noyau/contexte.rs
//
// Contexte = un niveau d’imbrication (parenthèse) :
// - suite d’opérandes dans l’ordre du texte (gauche -> droite)
// - état “en attente” : opérateur, signe (modificateur), fonction
//
// Invariants :
// - l’opérateur en attente est remis à None après chaque opérande ajouté
// - la fonction en attente est consommée par l’opérande suivant
// - un contexte suspendu (empilé) est une valeur autonome, sans partage

use std::fmt;

use num_traits::Float;

use super::erreur::ErreurCalcul;
use super::fonction::Fonction;
use super::valeur_f64;

/// Opérateurs binaires reconnus par le noyau.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
}

impl Operateur {
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            '^' => Some(Operateur::Puissance),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Puissance => '^',
        }
    }

    /// Nom de l’opération (messages d’erreur).
    pub fn nom(self) -> &'static str {
        match self {
            Operateur::Plus => "addition",
            Operateur::Moins => "soustraction",
            Operateur::Fois => "multiplication",
            Operateur::Divise => "division",
            Operateur::Puissance => "puissance",
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

/// Lien d’un opérande avec son voisin de gauche.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lien {
    /// Premier opérande du contexte : rien avant lui.
    Aucun,
    Par(Operateur),
    /// Déjà replié dans un voisin : ne compte plus.
    Consomme,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Operande<F> {
    pub lien: Lien,
    pub valeur: F,
}

#[derive(Clone, Debug)]
pub struct Contexte<F> {
    pub operandes: Vec<Operande<F>>,
    pub operateur: Option<Operateur>,
    pub signe_negatif: bool,
    pub fonction: Option<Fonction>,
}

impl<F> Default for Contexte<F> {
    fn default() -> Self {
        Self {
            operandes: Vec::new(),
            operateur: None,
            signe_negatif: false,
            fonction: None,
        }
    }
}

impl<F: Float> Contexte<F> {
    /// '*', '/', '^' : un seul opérateur binaire par position.
    /// '+' : valeur par défaut, ne remplace jamais un opérateur déjà posé.
    pub fn poser_operateur(&mut self, op: Operateur) -> Result<(), ErreurCalcul> {
        match (op, self.operateur) {
            (Operateur::Plus, Some(_)) => Ok(()),
            (Operateur::Plus, None) => {
                self.operateur = Some(op);
                Ok(())
            }
            (Operateur::Moins, _) => {
                self.poser_moins();
                Ok(())
            }
            (_, Some(deja)) => Err(ErreurCalcul::OperateurDuplique { deja, nouveau: op }),
            (_, None) => {
                self.operateur = Some(op);
                Ok(())
            }
        }
    }

    /// '-' : occupe la case opérateur si elle est libre,
    /// sinon bascule le signe de l’opérande à venir.
    pub fn poser_moins(&mut self) {
        if self.operateur.is_none() {
            self.operateur = Some(Operateur::Moins);
        } else {
            self.signe_negatif = !self.signe_negatif;
        }
    }

    pub fn poser_fonction(&mut self, fonction: Fonction) {
        self.fonction = Some(fonction);
    }

    /// Ajoute une valeur (littéral ou sous-expression réduite) comme opérande.
    ///
    /// Ordre : contrôle de l’opérateur, fonction, signe, puis ajout.
    pub fn ajouter_operande(&mut self, valeur: F) -> Result<(), ErreurCalcul> {
        if !self.operandes.is_empty() && self.operateur.is_none() {
            return Err(ErreurCalcul::OperateurManquant {
                valeur: valeur_f64(valeur),
            });
        }

        let mut valeur = match self.fonction.take() {
            Some(f) => f.appliquer(valeur)?,
            None => valeur,
        };

        if self.signe_negatif {
            valeur = -valeur;
            self.signe_negatif = false;
        }

        let lien = match self.operateur.take() {
            Some(op) => Lien::Par(op),
            None => Lien::Aucun,
        };
        self.operandes.push(Operande { lien, valeur });

        Ok(())
    }
}
