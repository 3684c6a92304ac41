//! Path-alias resolution port for host-specific indirection.

/// Resolves host-specific path aliases to real paths.
///
/// Entry-point paths may carry an `@alias` prefix understood only by the
/// surrounding application. Abstracting resolution behind a trait lets the
/// host inject its own scheme while the runner stays host-agnostic.
pub trait AliasResolver: Send + Sync {
    /// Resolves `path` to the real path placed in the shell command.
    ///
    /// Paths without an alias come back unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the path carries an alias the resolver does
    /// not know.
    fn resolve(&self, path: &str) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
