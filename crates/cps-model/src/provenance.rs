//! Derived-variable provenance models.

use serde::{Deserialize, Serialize};

/// Origin information for one derived or renamed variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableOrigin {
    /// The derived variable's name as it appears in the codebook.
    pub variable: String,
    /// The codebook label for the variable (empty when the cell was).
    pub description: String,
    /// The CPS mnemonic extracted from the comments, when one matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_variable: Option<String>,
    /// The raw comments the origin was extracted from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl VariableOrigin {
    pub fn is_resolved(&self) -> bool {
        self.original_variable.is_some()
    }
}

/// Insertion-ordered map of variable origins.
///
/// Keyed by `variable`: the first insertion fixes the entry's position,
/// a later insert for the same name overwrites it in place. Iteration
/// and serialization follow insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OriginMap {
    entries: Vec<VariableOrigin>,
}

impl OriginMap {
    pub fn insert(&mut self, origin: VariableOrigin) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.variable == origin.variable)
        {
            Some(existing) => *existing = origin,
            None => self.entries.push(origin),
        }
    }

    pub fn get(&self, variable: &str) -> Option<&VariableOrigin> {
        self.entries.iter().find(|entry| entry.variable == variable)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VariableOrigin> {
        self.entries.iter()
    }

    /// Entries whose origin was actually extracted.
    pub fn resolved(&self) -> impl Iterator<Item = &VariableOrigin> {
        self.entries.iter().filter(|entry| entry.is_resolved())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin(variable: &str, original: Option<&str>) -> VariableOrigin {
        VariableOrigin {
            variable: variable.to_string(),
            description: String::new(),
            original_variable: original.map(String::from),
            comments: None,
        }
    }

    #[test]
    fn insert_preserves_first_position_and_overwrites() {
        let mut map = OriginMap::default();
        map.insert(origin("HOURLY_WAGE", None));
        map.insert(origin("WEEKS_LAID_OFF", Some("PELAYDUR")));
        map.insert(origin("HOURLY_WAGE", Some("PRERNHLY")));

        assert_eq!(map.len(), 2);
        let names: Vec<&str> = map.iter().map(|e| e.variable.as_str()).collect();
        assert_eq!(names, vec!["HOURLY_WAGE", "WEEKS_LAID_OFF"]);
        assert_eq!(
            map.get("HOURLY_WAGE").and_then(|e| e.original_variable.as_deref()),
            Some("PRERNHLY")
        );
    }

    #[test]
    fn resolved_filters_null_origins() {
        let mut map = OriginMap::default();
        map.insert(origin("REASON_PART_TIME", None));
        map.insert(origin("Work_Experience", Some("PEMLR")));
        assert_eq!(map.len(), 2);
        assert_eq!(map.resolved().count(), 1);
    }
}
