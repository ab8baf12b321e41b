//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le balayage sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte les erreurs attendues (division par zéro, domaine sqrt/log)
//! - invariant clé : même entrée => même sortie, et (x) == x

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::eval_expression;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

/// Erreurs normales sur des expressions bien formées.
fn is_erreur_attendue(e: &ErreurCalcul) -> bool {
    matches!(
        e,
        ErreurCalcul::DivisionParZero | ErreurCalcul::DomaineMathematique { .. }
    )
}

/// Égalité tolérante (NaN == NaN, infinis de même signe).
/// Les erreurs sont comparées par leur message : une valeur NaN y reste égale à elle-même.
fn meme_resultat(a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= 1e-9 * a.abs().max(1.0)
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(10);
    if rng.coin() {
        format!("{entier}.{}", rng.pick(100))
    } else {
        format!("{entier}")
    }
}

fn gen_signe(rng: &mut Rng) -> &'static str {
    match rng.pick(6) {
        0 => "-",
        1 => "--",
        2 => "- -",
        _ => "",
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    let signe = gen_signe(rng);
    match rng.pick(6) {
        0 => format!("{signe}sqrt({})", gen_nombre(rng)),
        1 => format!("{signe}log({})", gen_nombre(rng)),
        _ => format!("{signe}{}", gen_nombre(rng)),
    }
}

fn gen_op(rng: &mut Rng) -> &'static str {
    match rng.pick(9) {
        0 | 1 => " + ",
        2 | 3 => " - ",
        4 | 5 => " * ",
        6 | 7 => " / ",
        _ => "^",
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let n = 1 + rng.pick(4) as usize;
    let mut out = String::new();
    for k in 0..n {
        if k > 0 {
            out.push_str(gen_op(rng));
        }
        let terme = match rng.pick(4) {
            0 => format!("{}({})", gen_signe(rng), gen_expr(rng, depth - 1)),
            1 => format!("sqrt({})", gen_expr(rng, depth - 1)),
            _ => gen_atom(rng),
        };
        out.push_str(&terme);
    }
    out
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_erreurs_attendues() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);

        let premier = eval_expression(&expr);
        let second = eval_expression(&expr);

        match (premier, second) {
            (Ok(a), Ok(b)) => {
                assert!(meme_resultat(a, b), "non déterministe: expr={expr:?}");
                seen_ok += 1;
            }
            (Err(a), Err(b)) => {
                assert!(
                    is_erreur_attendue(&a),
                    "erreur non attendue: expr={expr:?} err={a}"
                );
                assert_eq!(a.to_string(), b.to_string(), "expr={expr:?}");
                seen_err += 1;
            }
            (a, b) => panic!("résultats divergents: expr={expr:?} {a:?} / {b:?}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_parentheses_idempotentes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 2);
        let entoure = format!("((({expr})))");

        match (eval_expression(&expr), eval_expression(&entoure)) {
            (Ok(a), Ok(b)) => assert!(meme_resultat(a, b), "expr={expr:?} {a} != {b}"),
            (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string(), "expr={expr:?}"),
            (a, b) => panic!("expr={expr:?} {a:?} / {b:?}"),
        }
    }
}

#[test]
fn fuzz_safe_majuscules_indifferentes() {
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..100 {
        let expr = gen_expr(&mut rng, 2);
        let maj = expr.to_uppercase();

        match (eval_expression(&expr), eval_expression(&maj)) {
            (Ok(a), Ok(b)) => assert!(meme_resultat(a, b), "expr={expr:?}"),
            (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string(), "expr={expr:?}"),
            (a, b) => panic!("expr={expr:?} {a:?} / {b:?}"),
        }
    }
}

#[test]
fn fuzz_safe_entrees_quelconques_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // Octets au hasard dans l’alphabet (et un peu au-delà) : aucune panique,
    // seulement Ok ou Err.
    let alphabet: Vec<char> = "0123456789.+-*/^() sqrtlog@#x".chars().collect();
    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..400 {
        budget(t0, max);

        let n = rng.pick(24) as usize;
        let expr: String = (0..n)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        let _ = eval_expression(&expr);
    }
}
