//! Alias-resolver adapters usable out of the box.
//!
//! Hosts with their own alias scheme implement
//! [`AliasResolver`](crate::ports::alias::AliasResolver) directly; these
//! two cover the common cases.

pub mod literal;
pub mod map;

pub use literal::LiteralResolver;
pub use map::MapResolver;
