//! Function Catalog

use crate::{CategorySummary, FunctionEntry, FunctionSummary, SharedFunction, UnaryFunction};
use algorama_core::{CatalogError, Category, FunctionId};
use parking_lot::{Mutex, RwLock};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Maximum number of names attached to a `NotFound` error
const MAX_SUGGESTIONS: usize = 5;

/// Lowercased, trimmed form used as the lookup key.
///
/// Trimming is part of the key: `" Sigmoid "` and `"sigmoid"` name the same
/// entry, and a name that is only whitespace has an empty key and cannot be
/// registered.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Everything a registration mutates, guarded together
#[derive(Default)]
struct CatalogState {
    by_name: HashMap<String, FunctionEntry>,
    /// Index = ID; authoritative ID -> key mapping
    by_id: Vec<String>,
    /// Bumped on every successful registration
    version: u64,
}

impl CatalogState {
    fn entry_at(&self, index: usize) -> Option<&FunctionEntry> {
        self.by_id.get(index).and_then(|key| self.by_name.get(key))
    }

    fn entries(&self) -> impl Iterator<Item = &FunctionEntry> {
        self.by_id.iter().filter_map(|key| self.by_name.get(key))
    }
}

struct ExportCache {
    version: u64,
    packed: Arc<[u8]>,
}

/// Append-only registry of named unary functions.
///
/// Registration happens in an explicit startup phase (see
/// `algorama_std::load_standard_library`); afterwards the catalog is shared by
/// reference or `Arc` and only read. Late registration is still safe: the
/// name map, the ID list and the version counter change under one write lock,
/// so a reader never sees an ID without its entry.
pub struct FunctionCatalog {
    state: RwLock<CatalogState>,
    export_cache: Mutex<Option<ExportCache>>,
}

impl FunctionCatalog {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CatalogState::default()),
            export_cache: Mutex::new(None),
        }
    }

    /// Builder form of [`register_with`](Self::register_with) for startup routines
    pub fn with_function<F: UnaryFunction + 'static>(
        self,
        name: &str,
        func: F,
        category: Category,
        description: &str,
    ) -> Self {
        self.register_with(name, func, category, description);
        self
    }

    /// Register under the catch-all category with no description
    pub fn register<F: UnaryFunction + 'static>(&self, name: &str, func: F) {
        self.register_with(name, func, Category::All, "");
    }

    /// Register a function. A name already present (case-insensitively) is a
    /// silent no-op: the first entry, including its ID, is kept.
    pub fn register_with<F: UnaryFunction + 'static>(
        &self,
        name: &str,
        func: F,
        category: Category,
        description: &str,
    ) {
        self.insert(name, Arc::new(func), category, description);
    }

    fn insert(&self, name: &str, func: SharedFunction, category: Category, description: &str) {
        let key = normalize_name(name);
        if key.is_empty() {
            tracing::warn!("ignoring registration with empty function name");
            return;
        }

        let mut state = self.state.write();
        if state.by_name.contains_key(&key) {
            tracing::trace!(name = %key, "function already registered");
            return;
        }

        let id = FunctionId::new(state.by_id.len());
        let entry = FunctionEntry {
            name: name.trim().to_string(),
            key: key.clone(),
            id,
            func,
            category,
            description: description.to_string(),
        };
        state.by_name.insert(key.clone(), entry);
        state.by_id.push(key);
        state.version += 1;

        tracing::debug!(name = %name.trim(), %id, category = category.key(), "registered function");
    }

    /// Number of registered functions
    pub fn len(&self) -> usize {
        self.state.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registration counter; changes whenever a new entry is added
    pub fn version(&self) -> u64 {
        self.state.read().version
    }

    // ========== Resolution ==========

    pub fn resolve_id(&self, name: &str) -> Result<FunctionId, CatalogError> {
        let state = self.state.read();
        match state.by_name.get(&normalize_name(name)) {
            Some(entry) => Ok(entry.id),
            None => Err(Self::not_found(&state, name)),
        }
    }

    /// Normalized name of the entry with this ID
    pub fn resolve_name(&self, id: FunctionId) -> Result<String, CatalogError> {
        let state = self.state.read();
        state
            .by_id
            .get(id.index())
            .cloned()
            .ok_or_else(|| CatalogError::out_of_range(id.as_i64(), state.by_id.len()))
    }

    /// Validate an ID received from outside, where it may be negative
    pub fn checked_id(&self, raw: i64) -> Result<FunctionId, CatalogError> {
        let count = self.len();
        usize::try_from(raw)
            .ok()
            .filter(|&index| index < count)
            .map(FunctionId::new)
            .ok_or_else(|| CatalogError::out_of_range(raw, count))
    }

    pub fn lookup(&self, name: &str) -> Option<FunctionEntry> {
        self.state.read().by_name.get(&normalize_name(name)).cloned()
    }

    pub fn lookup_by_id(&self, id: FunctionId) -> Option<FunctionEntry> {
        self.state.read().entry_at(id.index()).cloned()
    }

    /// Callable bound to `id`, without copying the entry's metadata
    pub fn function(&self, id: FunctionId) -> Result<SharedFunction, CatalogError> {
        let state = self.state.read();
        state
            .entry_at(id.index())
            .map(FunctionEntry::function)
            .ok_or_else(|| CatalogError::out_of_range(id.as_i64(), state.by_id.len()))
    }

    // ========== Enumeration ==========

    /// Snapshot of all names, in no particular order
    pub fn list_names(&self) -> Vec<String> {
        self.state.read().by_name.keys().cloned().collect()
    }

    pub fn list_names_in_id_order(&self) -> Vec<String> {
        self.state.read().by_id.clone()
    }

    /// IDs tagged with `category`, ascending. `Category::All` yields every ID.
    pub fn list_ids_in_category(&self, category: Category) -> Vec<FunctionId> {
        self.state
            .read()
            .entries()
            .filter(|e| category.matches(e.category))
            .map(|e| e.id)
            .collect()
    }

    /// IDs in `category` whose name contains `query`, case-insensitively.
    /// An empty query matches every name.
    pub fn search(&self, query: &str, category: Category) -> Vec<FunctionId> {
        let needle = normalize_name(query);
        self.state
            .read()
            .entries()
            .filter(|e| category.matches(e.category) && e.key.contains(&needle))
            .map(|e| e.id)
            .collect()
    }

    /// Names in ID order, each followed by a NUL byte.
    ///
    /// Built once per catalog version and shared afterwards.
    pub fn export_names_packed(&self) -> Arc<[u8]> {
        let state = self.state.read();
        let mut cache = self.export_cache.lock();
        if let Some(cached) = cache.as_ref().filter(|c| c.version == state.version) {
            return Arc::clone(&cached.packed);
        }

        let size = state.by_id.iter().map(|k| k.len() + 1).sum();
        let mut packed = Vec::with_capacity(size);
        for key in &state.by_id {
            packed.extend_from_slice(key.as_bytes());
            packed.push(0);
        }
        let packed: Arc<[u8]> = packed.into();
        tracing::debug!(version = state.version, bytes = packed.len(), "rebuilt name export cache");

        *cache = Some(ExportCache { version: state.version, packed: Arc::clone(&packed) });
        packed
    }

    // ========== Metadata ==========

    /// Metadata for every entry in `category`, in ID order
    pub fn list_functions(&self, category: Category) -> Vec<FunctionSummary> {
        self.state
            .read()
            .entries()
            .filter(|e| category.matches(e.category))
            .map(FunctionEntry::summary)
            .collect()
    }

    pub fn describe(&self, name: &str) -> Result<FunctionSummary, CatalogError> {
        let state = self.state.read();
        match state.by_name.get(&normalize_name(name)) {
            Some(entry) => Ok(entry.summary()),
            None => Err(Self::not_found(&state, name)),
        }
    }

    pub fn describe_id(&self, id: FunctionId) -> Result<FunctionSummary, CatalogError> {
        let state = self.state.read();
        state
            .entry_at(id.index())
            .map(FunctionEntry::summary)
            .ok_or_else(|| CatalogError::out_of_range(id.as_i64(), state.by_id.len()))
    }

    /// Every category with its member count; `All` counts the whole catalog
    pub fn categories(&self) -> Vec<CategorySummary> {
        let state = self.state.read();
        let mut counts: HashMap<Category, usize> = HashMap::new();
        for entry in state.entries() {
            *counts.entry(entry.category).or_default() += 1;
        }

        Category::ALL_CATEGORIES
            .into_iter()
            .map(|category| CategorySummary {
                category,
                label: category.label(),
                count: match category {
                    Category::All => state.by_id.len(),
                    other => counts.get(&other).copied().unwrap_or(0),
                },
            })
            .collect()
    }

    // ========== Suggestions ==========

    fn not_found(state: &CatalogState, name: &str) -> CatalogError {
        CatalogError::not_found(name).with_suggestions(Self::find_similar(state, name))
    }

    /// Registered names resembling `name`, best match first
    fn find_similar(state: &CatalogState, name: &str) -> Vec<String> {
        let query = normalize_name(name);
        if query.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<(&String, usize)> = state
            .by_id
            .iter()
            .map(|key| (key, Self::similarity_score(&query, key)))
            .filter(|(_, score)| *score > 0)
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        matches.into_iter().take(MAX_SUGGESTIONS).map(|(key, _)| key.clone()).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();

        // Without a substring relation, most of the query's letters must appear
        if score == 0 && common * 3 < query_chars.len() * 2 {
            return 0;
        }
        score += common * 2;

        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 {
            score += 5 - len_diff;
        }

        score
    }
}

impl Default for FunctionCatalog {
    fn default() -> Self {
        Self::new()
    }
}
