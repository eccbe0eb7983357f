//! Skill allocations and species-granted skill sets

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Skill values at or above this cap are priced at the higher rate.
pub const SKILL_VALUE_SOFT_CAP: i32 = 3;

/// Skill id -> allocated value. Zero means not proficient.
///
/// Stored values are kept as entered; readers see negative values as zero.
/// Ordered so that anything derived from it (line items, issues) is stable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillAllocation(BTreeMap<String, i32>);

impl SkillAllocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, skill_id: impl Into<String>, value: i32) -> Self {
        self.set(skill_id, value);
        self
    }

    pub fn set(&mut self, skill_id: impl Into<String>, value: i32) {
        self.0.insert(skill_id.into(), value);
    }

    pub fn remove(&mut self, skill_id: &str) -> Option<i32> {
        self.0.remove(skill_id)
    }

    /// Normalized value for a skill, zero when absent or negative.
    pub fn value(&self, skill_id: &str) -> i32 {
        self.0.get(skill_id).copied().unwrap_or(0).max(0)
    }

    pub fn is_proficient(&self, skill_id: &str) -> bool {
        self.value(skill_id) > 0
    }

    /// Every entry with its normalized value, zero entries included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.0.iter().map(|(id, v)| (id.as_str(), (*v).max(0)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, i32)> for SkillAllocation {
    fn from_iter<T: IntoIterator<Item = (K, i32)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Skills whose first point the chosen species grants for free.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesSkillSet(BTreeSet<String>);

impl SpeciesSkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, skill_id: &str) -> bool {
        self.0.contains(skill_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<K> for SpeciesSkillSet {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_values_read_as_zero() {
        let skills = SkillAllocation::new().with("athletics", -4).with("stealth", 2);
        assert_eq!(skills.value("athletics"), 0);
        assert!(!skills.is_proficient("athletics"));
        assert_eq!(skills.value("stealth"), 2);
        assert_eq!(skills.value("unknown"), 0);
    }

    #[test]
    fn allocation_is_a_plain_json_object() {
        let skills: SkillAllocation =
            serde_json::from_str(r#"{"stealth": 2, "athletics": 1}"#).unwrap();
        let ids: Vec<&str> = skills.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["athletics", "stealth"]);
    }

    #[test]
    fn species_set_collects_from_ids() {
        let set: SpeciesSkillSet = ["stealth", "insight"].into_iter().collect();
        assert!(set.contains("stealth"));
        assert!(!set.contains("athletics"));
    }
}
