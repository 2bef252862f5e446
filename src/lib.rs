#![warn(missing_docs)]
//! Operational transformation for plain text: edit sequences over Unicode
//! codepoints that can be applied, composed, transformed and inverted.
//!
//! Operational Transformation (OT) enables real-time collaborative editing:
//! when two users edit the same document at the same time, their edits are
//! rewritten against each other so that every replica converges on the same
//! string, regardless of the order in which the edits arrive.
//!
//! An edit is a [`Sequence`] of [`Op`]s — retain, delete and insert — built
//! through append primitives that keep it in canonical form, so two
//! descriptions of the same edit are structurally equal. The algebra on top
//! is pure: [`apply`](Sequence::apply) runs an edit against a base string,
//! [`compose`](Sequence::compose) collapses two consecutive edits into one,
//! [`transform`](Sequence::transform) rewrites two concurrent edits into a
//! convergent pair, and [`invert`](Sequence::invert) produces the undo edit.
//!
//! # Usage
//!
//! ```
//! use weft::Sequence;
//!
//! let base = "Hello World";
//!
//! let alice = Sequence::new().retain(5).insert(",").retain(6);
//! let bob = Sequence::new().retain(11).insert("!");
//!
//! let (alice_prime, bob_prime) = alice.transform(&bob).unwrap();
//!
//! assert_eq!(
//!     alice.compose(&bob_prime).unwrap().apply(base).unwrap(),
//!     "Hello, World!",
//! );
//! assert_eq!(
//!     bob.compose(&alice_prime).unwrap().apply(base).unwrap(),
//!     "Hello, World!",
//! );
//! ```
//!
//! All lengths count Unicode codepoints, never bytes or grapheme clusters.
//! The crate performs no I/O and holds no global state; transports, replica
//! coordination and history stacks belong to the layers built on top of it.

mod apply;
mod compose;
mod error;
mod invert;
mod iter;
mod op;
mod seq;
mod transform;
mod wire;

pub use error::Error;
pub use iter::Iter;
pub use op::Op;
pub use seq::Sequence;
