//! Canonical animation identifiers.
//!
//! The set is closed: every id has exactly one motion function in the
//! registry (see [`crate::motion`]), so an unknown id can never reach evaluation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnimError;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationId {
    Rotate,
    Spin,
    Bounce,
    Float,
    Pulse,
    Wave,
    Shake,
    Swing,
    Jump,
    Dance,
    Wobble,
    Roll,
    Flip,
    Breathe,
    Walk,
    Orbit,
    Spiral,
    Tornado,
    Earthquake,
    Nod,
    Tilt,
    Heartbeat,
    Zigzag,
    Sway,
    Twist,
    Squash,
    Tumble,
    Hop,
    Wiggle,
}

/// Grouping used by animation pickers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Motion,
    Effects,
    Special,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Motion, Category::Effects, Category::Special];

    pub fn name(self) -> &'static str {
        match self {
            Category::Motion => "motion",
            Category::Effects => "effects",
            Category::Special => "special",
        }
    }
}

impl AnimationId {
    /// Registry order. Substring resolution walks canonical names in this order.
    pub const ALL: [AnimationId; 29] = [
        AnimationId::Rotate,
        AnimationId::Spin,
        AnimationId::Bounce,
        AnimationId::Float,
        AnimationId::Pulse,
        AnimationId::Wave,
        AnimationId::Shake,
        AnimationId::Swing,
        AnimationId::Jump,
        AnimationId::Dance,
        AnimationId::Wobble,
        AnimationId::Roll,
        AnimationId::Flip,
        AnimationId::Breathe,
        AnimationId::Walk,
        AnimationId::Orbit,
        AnimationId::Spiral,
        AnimationId::Tornado,
        AnimationId::Earthquake,
        AnimationId::Nod,
        AnimationId::Tilt,
        AnimationId::Heartbeat,
        AnimationId::Zigzag,
        AnimationId::Sway,
        AnimationId::Twist,
        AnimationId::Squash,
        AnimationId::Tumble,
        AnimationId::Hop,
        AnimationId::Wiggle,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            AnimationId::Rotate => "rotate",
            AnimationId::Spin => "spin",
            AnimationId::Bounce => "bounce",
            AnimationId::Float => "float",
            AnimationId::Pulse => "pulse",
            AnimationId::Wave => "wave",
            AnimationId::Shake => "shake",
            AnimationId::Swing => "swing",
            AnimationId::Jump => "jump",
            AnimationId::Dance => "dance",
            AnimationId::Wobble => "wobble",
            AnimationId::Roll => "roll",
            AnimationId::Flip => "flip",
            AnimationId::Breathe => "breathe",
            AnimationId::Walk => "walk",
            AnimationId::Orbit => "orbit",
            AnimationId::Spiral => "spiral",
            AnimationId::Tornado => "tornado",
            AnimationId::Earthquake => "earthquake",
            AnimationId::Nod => "nod",
            AnimationId::Tilt => "tilt",
            AnimationId::Heartbeat => "heartbeat",
            AnimationId::Zigzag => "zigzag",
            AnimationId::Sway => "sway",
            AnimationId::Twist => "twist",
            AnimationId::Squash => "squash",
            AnimationId::Tumble => "tumble",
            AnimationId::Hop => "hop",
            AnimationId::Wiggle => "wiggle",
        }
    }

    /// Case-sensitive lookup of a canonical name. Prompt text goes through the resolver instead.
    pub fn from_name(name: &str) -> Option<AnimationId> {
        AnimationId::ALL.iter().copied().find(|id| id.name() == name)
    }

    pub fn category(self) -> Category {
        use AnimationId::*;
        match self {
            Rotate | Spin | Bounce | Float | Jump | Walk | Orbit | Spiral | Hop | Zigzag => {
                Category::Motion
            }
            Pulse | Wave | Shake | Swing | Wobble | Breathe | Nod | Tilt | Heartbeat | Sway
            | Squash | Wiggle => Category::Effects,
            Dance | Roll | Flip | Tornado | Earthquake | Twist | Tumble => Category::Special,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AnimationId::Rotate => "Smooth Y-axis rotation",
            AnimationId::Spin => "Fast 360° spinning",
            AnimationId::Bounce => "Vertical bouncing",
            AnimationId::Float => "Gentle hovering",
            AnimationId::Pulse => "Breathing scale effect",
            AnimationId::Wave => "Oscillating motion",
            AnimationId::Shake => "Quick vibration",
            AnimationId::Swing => "Pendulum motion",
            AnimationId::Jump => "Jump with squash/stretch",
            AnimationId::Dance => "Fun dance moves",
            AnimationId::Wobble => "Unstable wobbling",
            AnimationId::Roll => "X-axis rotation",
            AnimationId::Flip => "Flip with bounce",
            AnimationId::Breathe => "Subtle breathing",
            AnimationId::Walk => "Walking motion",
            AnimationId::Orbit => "Circle around the origin",
            AnimationId::Spiral => "Rising and falling helix",
            AnimationId::Tornado => "Fast whirling funnel",
            AnimationId::Earthquake => "Random ground tremor",
            AnimationId::Nod => "Forward nodding",
            AnimationId::Tilt => "Slow side-to-side lean",
            AnimationId::Heartbeat => "Sharp rhythmic pulse",
            AnimationId::Zigzag => "Side-to-side zigzag",
            AnimationId::Sway => "Lazy swaying",
            AnimationId::Twist => "Back-and-forth twisting",
            AnimationId::Squash => "Squash and stretch",
            AnimationId::Tumble => "Tumbling end over end",
            AnimationId::Hop => "Quick little hops",
            AnimationId::Wiggle => "Playful wiggling",
        }
    }

    /// `earthquake` is the only motion that is not a pure function of time.
    #[inline]
    pub fn is_deterministic(self) -> bool {
        !matches!(self, AnimationId::Earthquake)
    }
}

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimationId {
    type Err = AnimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnimationId::from_name(&s.trim().to_lowercase()).ok_or_else(|| {
            AnimError::UnknownAnimation {
                name: s.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique_and_round_trip() {
        let mut seen = std::collections::HashSet::new();
        for id in AnimationId::ALL {
            assert!(seen.insert(id.name()), "duplicate name {}", id.name());
            assert_eq!(AnimationId::from_name(id.name()), Some(id));
            assert_eq!(id.name().parse::<AnimationId>().unwrap(), id);
        }
    }

    #[test]
    fn serde_uses_lowercase_name() {
        let json = serde_json::to_string(&AnimationId::Heartbeat).unwrap();
        assert_eq!(json, "\"heartbeat\"");
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "zoop".parse::<AnimationId>().unwrap_err();
        assert!(matches!(err, AnimError::UnknownAnimation { .. }));
    }

    #[test]
    fn only_earthquake_is_nondeterministic() {
        let random: Vec<_> = AnimationId::ALL
            .iter()
            .filter(|id| !id.is_deterministic())
            .collect();
        assert_eq!(random, vec![&AnimationId::Earthquake]);
    }
}
