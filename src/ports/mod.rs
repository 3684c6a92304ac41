//! Port traits defining external boundaries.
//!
//! The runner owns process execution itself; the one seam left to the
//! surrounding application is path-alias resolution. Implementations
//! live in `src/adapters/`.

pub mod alias;

pub use alias::AliasResolver;
