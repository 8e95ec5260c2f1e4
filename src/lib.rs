//! Redex
//!
//! Call-by-value, fuel-bounded reducer for a typed lambda calculus front end.
//! Sits between the type checker and code generation: the same single-step
//! semantics normalizes expressions and, with a small step budget, partially
//! evaluates them at compile time.
//!
//! # Example
//!
//! ```rust
//! use redex::syntax::build::*;
//! use redex::{reduce_by, Env};
//!
//! // (\(Pair x y). x) (Pair 1 2)
//! let expr = app(
//!     lam(vec![pcon("Pair", vec![pvar("x"), pvar("y")])], var("x")),
//!     vec![con("Pair", vec![int(1), int(2)])],
//! );
//! assert_eq!(reduce_by(&Env::new(), 100, expr).unwrap(), int(1));
//! ```

#![doc(html_root_url = "https://docs.rs/redex")]
#![warn(rust_2018_idioms)]

pub mod binding;
pub mod eval;
pub mod syntax;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};

pub use eval::{reduce_by, Env, Outcome, ReduceError, Reducer, Reduction, Step};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
