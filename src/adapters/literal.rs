//! Pass-through alias resolver.

use crate::ports::alias::AliasResolver;

/// Resolver that returns every path unchanged.
///
/// The default for hosts without an alias scheme: entry-point paths are
/// taken as real filesystem paths.
pub struct LiteralResolver;

impl AliasResolver for LiteralResolver {
    fn resolve(&self, path: &str) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(path.to_string())
    }
}
