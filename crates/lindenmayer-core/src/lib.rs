//! Lindenmayer-system string rewriting.
//!
//! An L-system starts from an axiom and rewrites it generation by generation:
//! every occurrence of each rule's predecessor is replaced by its successor,
//! simultaneously, across the whole sentence.
//!
//! ## Core Concepts
//!
//! - **Axiom**: the sentence before any rewriting
//! - **Rule**: a `(predecessor, successor)` pair
//! - **Generation**: one application of the full rule set to the sentence
//! - **Sentence**: the result of zero or more generations
//!
//! ## Matching
//!
//! ```text
//! for each position, left to right:
//!     first registered rule whose predecessor matches here → emit successor,
//!                                                            skip predecessor
//!     no rule matches                                      → copy one char
//! ```
//!
//! Successors are never rescanned within the same generation, so `A → AA`
//! turns `A` into `AA`, not `AAAA`.
//!
//! Interpreting the produced sentence (turtle graphics, rendering) is left to
//! the caller.

mod description;
mod error;
mod lsystem;
mod matcher;
mod rule;

pub use description::SystemDescription;
pub use error::{LSystemError, LSystemResult};
pub use lsystem::LSystem;
pub use rule::Rule;
