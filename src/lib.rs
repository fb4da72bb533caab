//! Powder - the seed of the Powder standard library
//!
//! # Overview
//!
//! This crate collects the three primitives every later Powder library and
//! user program builds on:
//!
//! - [`Optional`]: a two-variant sum type for presence or absence of a value
//! - [`Iterator`]: the capability of producing elements until exhaustion
//! - [`Vector`]: an owned, growable, contiguous sequence
//!
//! The contracts are deliberately small. `Optional` has exactly two states
//! and no observable third one; `Iterator` needs a single `next` operation
//! and gets `count` for free; `Vector` owns its backing allocation
//! exclusively and keeps `size <= capacity` at all times.
//!
//! # Quick Start
//!
//! ```
//! use powder::{Iterator, Optional, Vector};
//!
//! let mut primes = Vector::new();
//! for p in [2i64, 3, 5, 7] {
//!     primes.push(p);
//! }
//!
//! // Predicate search short-circuits on the first match.
//! assert!(primes.any(|&p| p > 5));
//! assert!(!primes.any(|&p| p > 7));
//!
//! // Any conformer of the iteration capability can be counted generically.
//! let mut elements = primes.iter();
//! assert_eq!((&mut elements).count(), 4);
//! assert_eq!(elements.count(), 0); // exhausted
//!
//! // Extraction with an eager or a lazy fallback.
//! assert_eq!(primes.get(1).value_or_default(&0), &3);
//! assert_eq!(Optional::<i64>::None.value_or(|| 42), 42);
//! ```
//!
//! # Ownership
//!
//! A [`Vector`] releases every live element exactly once when it is dropped,
//! along every exit path. The only failure-adjacent condition in this crate
//! is buffer growth: [`Vector::try_reserve`] signals it explicitly as a
//! [`ReserveError`], while the infallible operations abort at the allocation
//! boundary rather than ignore it.

// Re-export the public API from powder_core
pub use powder_core::iter::{self, Iterator};
pub use powder_core::optional::{self, Optional};
pub use powder_core::vector::{self, IntoIter, Iter, ReserveError, Vector};
