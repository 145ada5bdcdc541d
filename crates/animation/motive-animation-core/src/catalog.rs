//! Animation catalog for pickers and API listings.

use indexmap::IndexMap;
use serde::Serialize;

use crate::ids::{AnimationId, Category};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AnimationInfo {
    pub name: AnimationId,
    pub category: Category,
    pub description: &'static str,
}

impl From<AnimationId> for AnimationInfo {
    fn from(id: AnimationId) -> Self {
        Self {
            name: id,
            category: id.category(),
            description: id.description(),
        }
    }
}

/// Every animation in registry order.
pub fn catalog() -> Vec<AnimationInfo> {
    AnimationId::ALL.iter().copied().map(AnimationInfo::from).collect()
}

/// Animations grouped as motion / effects / special, each group in registry order.
pub fn catalog_by_category() -> IndexMap<Category, Vec<AnimationInfo>> {
    let mut groups: IndexMap<Category, Vec<AnimationInfo>> =
        Category::ALL.iter().map(|c| (*c, Vec::new())).collect();
    for info in catalog() {
        groups.entry(info.category).or_default().push(info);
    }
    groups
}
