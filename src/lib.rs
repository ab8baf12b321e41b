//! Calculatrice à pile
//!
//! Évalue une expression arithmétique en une seule passe gauche -> droite :
//! nombres décimaux, `+ - * / ^`, parenthèses, `sqrt(...)` et `log(...)`.
//!
//! ```
//! use calculatrice_pile::eval_expression;
//!
//! assert_eq!(eval_expression("2^3^2"), Ok(512.0));
//! assert!(eval_expression("4/(1-1)").is_err());
//! ```

pub mod noyau;

pub use noyau::{eval_expression, eval_expression_en, ErreurCalcul};
