//! Core primitives of the Powder standard library.
//!
//! Three modules, each depending only on the one below it:
//!
//! - [`optional`]: `Optional<T>`, presence or absence of a value (leaf)
//! - [`iter`]: the `Iterator` capability, expressed in terms of `Optional`
//! - [`vector`]: `Vector<T>`, an owned growable sequence that produces
//!   conformers of the iteration capability over its elements
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod iter;
pub mod optional;
pub mod vector;

pub use iter::Iterator;
pub use optional::Optional;
pub use vector::{IntoIter, Iter, ReserveError, Vector};
