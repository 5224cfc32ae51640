//! Save/Load document: JSON array of `[index, classificationCode]` pairs.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::state::EntryStore;
use crate::types::{DropKind, DropPair};

/// Classified entries of `route`, in route order.
///
/// Unclassified entries are omitted. Shared by the save file and the
/// submission payload.
pub fn encode_pairs(store: &EntryStore, route: &[usize]) -> CoreResult<Vec<DropPair>> {
    let mut pairs = Vec::new();
    for &index in route {
        if let Some(pair) = DropPair::from_entry(index, store.classification(index)?) {
            pairs.push(pair);
        }
    }
    Ok(pairs)
}

pub fn to_json(pairs: &[DropPair]) -> CoreResult<String> {
    serde_json::to_string(pairs).map_err(|e| CoreError::SerializationError(e.to_string()))
}

/// Parse and validate a save document for a store of `len` entries.
///
/// The whole payload is checked before anything is returned, so callers can
/// apply the result without partial mutation.
///
/// # Errors
/// * `UnexpectedRoot` - valid JSON whose root is not an array
/// * `MalformedPayload` - invalid JSON, bad pair shape, code outside `0..=2`,
///   index `>= len`, or a repeated index
pub fn decode(text: &str, len: usize) -> CoreResult<Vec<(usize, DropKind)>> {
    let root: Value =
        serde_json::from_str(text).map_err(|e| CoreError::MalformedPayload(e.to_string()))?;
    let Value::Array(items) = root else {
        return Err(CoreError::UnexpectedRoot("array".to_string()));
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut pairs = Vec::with_capacity(items.len());
    for (pos, item) in items.iter().enumerate() {
        let (index, drop) = decode_pair(item)
            .ok_or_else(|| CoreError::MalformedPayload(format!("element {pos} is not a valid pair")))?;
        if index >= len {
            return Err(CoreError::MalformedPayload(format!(
                "element {pos}: index {index} out of range (entry count: {len})"
            )));
        }
        if !seen.insert(index) {
            return Err(CoreError::MalformedPayload(format!(
                "element {pos}: index {index} repeated"
            )));
        }
        pairs.push((index, drop));
    }
    Ok(pairs)
}

fn decode_pair(item: &Value) -> Option<(usize, DropKind)> {
    let [index, code] = item.as_array()?.as_slice() else {
        return None;
    };
    let index = usize::try_from(index.as_u64()?).ok()?;
    let drop = DropKind::from_code(code.as_u64()?)?;
    Some((index, drop))
}
