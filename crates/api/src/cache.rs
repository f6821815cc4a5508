//! In-process cache for cacheable single-resource responses.
//!
//! `GET /movies/{id}` is declared cacheable (`public, max-age=3600`), so its
//! serialized body is kept here and served without touching the store until a
//! mutation invalidates it. Invalidation is an explicit post-commit hook:
//! after a successful create/delete/patch the handler invalidates the
//! resource key and the collection key.
//!
//! The cache is a plain `RwLock<HashMap>`; entries are small JSON bodies and
//! the working set is bounded by the catalog size. A shared-nothing restart
//! simply starts cold.

use std::collections::HashMap;
use std::sync::RwLock;

use cinelog_core::types::DbId;

/// `Cache-Control` value for cacheable single-resource responses.
pub const CACHE_CONTROL_PUBLIC_1H: &str = "public, max-age=3600";

/// Cache key for one movie's representation.
pub fn movie_key(id: DbId) -> String {
    format!("/movies/{id}")
}

/// Cache key for the movie collection route.
pub const MOVIE_COLLECTION_KEY: &str = "/movies";

/// Keyed store of serialized response bodies.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: RwLock<HashMap<String, String>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached body by key.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .expect("cache lock poisoned")
            .get(key)
            .cloned()
    }

    /// Store a body under `key`, replacing any previous entry.
    pub fn put(&self, key: String, body: String) {
        self.entries
            .write()
            .expect("cache lock poisoned")
            .insert(key, body);
    }

    /// Drop the entry for `key`, if present.
    pub fn invalidate(&self, key: &str) {
        let removed = self
            .entries
            .write()
            .expect("cache lock poisoned")
            .remove(key)
            .is_some();
        if removed {
            tracing::debug!(key, "cache entry invalidated");
        }
    }

    /// Drop every entry whose key starts with `prefix`.
    ///
    /// Callers invalidating one resource subtree pass a separator-terminated
    /// prefix (`/movies/1/`), so `/movies/10` is not caught by `/movies/1`.
    /// A bare collection key (`/movies`) sweeps everything beneath it.
    pub fn invalidate_prefix(&self, prefix: &str) {
        let mut entries = self.entries.write().expect("cache lock poisoned");
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before - entries.len();
        if removed > 0 {
            tracing::debug!(prefix, removed, "cache entries invalidated by prefix");
        }
    }
}
