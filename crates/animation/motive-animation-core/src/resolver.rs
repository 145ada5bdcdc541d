//! Prompt resolution: free text → canonical animation id.
//!
//! Precedence (first match wins, case-insensitive, input trimmed):
//! 1. exact canonical name
//! 2. exact alias
//! 3. alias phrase contained in the input (alias table order)
//! 4. canonical name contained in the input (registry order)
//!
//! Overlapping substring matches resolve to the earliest registered phrase,
//! not the longest one.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::aliases::AliasTable;
use crate::ids::AnimationId;

/// Which rule produced a resolution.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum MatchKind {
    ExactId,
    ExactAlias,
    AliasSubstring,
    IdSubstring,
}

#[derive(Clone, Debug, Default)]
pub struct PromptResolver {
    aliases: AliasTable,
}

impl PromptResolver {
    pub fn new(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn resolve(&self, input: &str) -> Option<AnimationId> {
        self.resolve_with_kind(input).map(|(id, _)| id)
    }

    pub fn resolve_with_kind(&self, input: &str) -> Option<(AnimationId, MatchKind)> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let hit = AnimationId::from_name(&needle)
            .map(|id| (id, MatchKind::ExactId))
            .or_else(|| {
                self.aliases
                    .get(&needle)
                    .map(|id| (id, MatchKind::ExactAlias))
            })
            .or_else(|| {
                self.aliases
                    .iter()
                    .find(|(phrase, _)| needle.contains(*phrase))
                    .map(|(_, id)| (id, MatchKind::AliasSubstring))
            })
            .or_else(|| {
                AnimationId::ALL
                    .iter()
                    .find(|id| needle.contains(id.name()))
                    .map(|id| (*id, MatchKind::IdSubstring))
            });

        match hit {
            Some((id, kind)) => log::debug!("resolved prompt {input:?} -> {id} ({kind:?})"),
            None => log::debug!("prompt {input:?} did not match any animation"),
        }
        hit
    }
}

fn default_resolver() -> &'static PromptResolver {
    static DEFAULT: OnceLock<PromptResolver> = OnceLock::new();
    DEFAULT.get_or_init(PromptResolver::default)
}

/// Resolve against the built-in alias table.
pub fn resolve(input: &str) -> Option<AnimationId> {
    default_resolver().resolve(input)
}
