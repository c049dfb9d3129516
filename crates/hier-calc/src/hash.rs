use hier_core::{stable_hash_string, HierError};

use crate::result::HierarchyResult;

/// Canonical hash of a result, ignoring any hash already stored in it.
pub fn hash_result(result: &HierarchyResult) -> Result<String, HierError> {
    let mut blank = result.clone();
    blank.result_hash.clear();
    stable_hash_string(&blank)
}

/// Fills `result_hash` in place.
pub fn seal(mut result: HierarchyResult) -> Result<HierarchyResult, HierError> {
    result.result_hash = hash_result(&result)?;
    Ok(result)
}
