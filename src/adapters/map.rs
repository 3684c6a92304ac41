//! Table-backed alias resolver.

use std::collections::HashMap;

use crate::ports::alias::AliasResolver;

/// Resolver backed by a registered `@name` → path table.
///
/// Mirrors the alias scheme of scripted console hosts: with `app`
/// registered as `/srv/app`, `@app/cli` resolves to `/srv/app/cli`.
/// Paths that do not start with `@` pass through verbatim; an
/// unregistered alias is an error rather than a silent literal path.
#[derive(Debug, Default)]
pub struct MapResolver {
    aliases: HashMap<String, String>,
}

impl MapResolver {
    /// Creates an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an alias. A missing leading `@` on `name` is added, so
    /// `register("app", ..)` and `register("@app", ..)` are equivalent.
    pub fn register(&mut self, name: &str, target: impl Into<String>) {
        let key =
            if name.starts_with('@') { name.to_string() } else { format!("@{name}") };
        self.aliases.insert(key, target.into());
    }
}

impl AliasResolver for MapResolver {
    fn resolve(&self, path: &str) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        if !path.starts_with('@') {
            return Ok(path.to_string());
        }

        // Longest registered prefix wins; the boundary must be the end
        // of the path or '/' so `@app` never matches `@apple/cli`.
        let mut best: Option<(&String, &String)> = None;
        for (name, target) in &self.aliases {
            if let Some(rest) = path.strip_prefix(name.as_str()) {
                if (rest.is_empty() || rest.starts_with('/'))
                    && best.map_or(0, |(n, _)| n.len()) < name.len()
                {
                    best = Some((name, target));
                }
            }
        }

        match best {
            Some((name, target)) => Ok(format!("{target}{}", &path[name.len()..])),
            None => Err(format!("Unknown path alias in {path}").into()),
        }
    }
}
