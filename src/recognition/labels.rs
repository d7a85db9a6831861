use std::collections::HashMap;
use std::io::Read;

use crate::error::SolveError;

/// Bidirectional mapping between glyph symbols (`"7"`, `"+"`, ...) and the
/// classifier's class ids.
///
/// The inverse map is derived at construction and construction fails if two
/// symbols share an id; a duplicate would otherwise corrupt the inverse map
/// silently.
#[derive(Debug, Clone)]
pub struct LabelMap {
    symbol_to_id: HashMap<String, usize>,
    id_to_symbol: HashMap<usize, String>,
}

impl LabelMap {
    /// Build a map from (symbol, id) pairs, enforcing id uniqueness.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, SolveError>
    where
        I: IntoIterator<Item = (String, usize)>,
    {
        let mut symbol_to_id = HashMap::new();
        let mut id_to_symbol = HashMap::new();

        for (symbol, id) in pairs {
            if id_to_symbol.insert(id, symbol.clone()).is_some() {
                return Err(SolveError::DuplicateClassId { id });
            }
            symbol_to_id.insert(symbol, id);
        }

        Ok(Self { symbol_to_id, id_to_symbol })
    }

    /// Load the map from a flat JSON object `{"symbol": id, ...}`.
    pub fn from_reader<R: Read>(reader: R, path: &str) -> Result<Self, SolveError> {
        let raw: HashMap<String, usize> = serde_json::from_reader(reader)
            .map_err(|source| SolveError::ArtifactFormat {
                path: path.to_string(),
                source,
            })?;
        Self::from_pairs(raw)
    }

    pub fn len(&self) -> usize {
        self.symbol_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbol_to_id.is_empty()
    }

    pub fn id_of(&self, symbol: &str) -> Option<usize> {
        self.symbol_to_id.get(symbol).copied()
    }

    pub fn symbol_of(&self, id: usize) -> Option<&str> {
        self.id_to_symbol.get(&id).map(String::as_str)
    }

    /// Map predicted class ids to their symbols, preserving input order.
    pub fn symbols_for(&self, ids: &[usize]) -> Result<Vec<String>, SolveError> {
        ids.iter()
            .map(|&id| {
                self.symbol_of(id)
                    .map(str::to_string)
                    .ok_or(SolveError::UnknownClassId { id })
            })
            .collect()
    }
}
