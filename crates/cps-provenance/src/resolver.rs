//! Origin resolution over codebook records.

use cps_model::{CodebookRecord, OriginMap, VariableOrigin};

use crate::patterns::{CREATED_FROM_STRICT, WATCHLIST_CASCADE, extract, extract_first};

/// Sweep every record whose comments mention "created from".
///
/// The containment check and the extraction pattern are not
/// equivalent: a record can pass the first and fail the second, in
/// which case it does not enter the map.
pub fn derived_origins(records: &[CodebookRecord]) -> OriginMap {
    let mut origins = OriginMap::default();
    for record in records {
        let Some(comments) = record.comments.as_deref() else {
            continue;
        };
        if comments.is_empty() || !comments.to_lowercase().contains("created from") {
            continue;
        }
        let Some(original) = extract(CREATED_FROM_STRICT, comments) else {
            continue;
        };
        origins.insert(VariableOrigin {
            variable: record.name.clone(),
            description: record.label.clone(),
            original_variable: Some(original),
            comments: Some(comments.to_string()),
        });
    }
    origins
}

/// Resolve origins for watchlist names only.
///
/// Every watchlist name present in the codebook gets an entry, with a
/// `None` origin when no cascade pattern matches; watchlist names the
/// codebook never mentions get nothing.
pub fn suspicious_origins(records: &[CodebookRecord], watchlist: &[String]) -> OriginMap {
    let mut origins = OriginMap::default();
    for record in records {
        if !watchlist.iter().any(|name| name == &record.name) {
            continue;
        }
        let original = record
            .comments
            .as_deref()
            .and_then(|comments| extract_first(&WATCHLIST_CASCADE, comments));
        origins.insert(VariableOrigin {
            variable: record.name.clone(),
            description: record.label.clone(),
            original_variable: original,
            comments: record.comments.clone(),
        });
    }
    origins
}
