//! Natural-language aliases for the canonical animation ids.

use indexmap::IndexMap;

use crate::ids::AnimationId;

/// Built-in aliases in precedence order. Substring resolution walks this
/// list top to bottom, so earlier phrases shadow later ones when both occur
/// in a prompt (e.g. "whirl" is checked before "whirlwind").
///
/// Phrases are matched inside arbitrary text and run before canonical names,
/// so a phrase must not occur inside common words ("rock" in "rocket").
const BUILTIN_ALIASES: &[(&str, AnimationId)] = &[
    ("turn around", AnimationId::Rotate),
    ("revolve", AnimationId::Rotate),
    ("turntable", AnimationId::Rotate),
    ("twirl", AnimationId::Spin),
    ("whirl", AnimationId::Spin),
    ("bouncy", AnimationId::Bounce),
    ("boing", AnimationId::Bounce),
    ("hover", AnimationId::Float),
    ("levitate", AnimationId::Float),
    ("drifting", AnimationId::Float),
    ("throb", AnimationId::Pulse),
    ("grow and shrink", AnimationId::Pulse),
    ("wave hello", AnimationId::Wave),
    ("oscillate", AnimationId::Wave),
    ("vibrate", AnimationId::Shake),
    ("tremble", AnimationId::Shake),
    ("shiver", AnimationId::Shake),
    ("jitter", AnimationId::Shake),
    ("pendulum", AnimationId::Swing),
    ("rock back and forth", AnimationId::Swing),
    ("leap", AnimationId::Jump),
    ("boogie", AnimationId::Dance),
    ("groove", AnimationId::Dance),
    ("wobbly", AnimationId::Wobble),
    ("jiggle", AnimationId::Wobble),
    ("barrel roll", AnimationId::Roll),
    ("somersault", AnimationId::Flip),
    ("backflip", AnimationId::Flip),
    ("breathing", AnimationId::Breathe),
    ("inhale", AnimationId::Breathe),
    ("stroll", AnimationId::Walk),
    ("marching", AnimationId::Walk),
    ("striding", AnimationId::Walk),
    ("circle", AnimationId::Orbit),
    ("helix", AnimationId::Spiral),
    ("corkscrew", AnimationId::Spiral),
    ("twister", AnimationId::Tornado),
    ("whirlwind", AnimationId::Tornado),
    ("cyclone", AnimationId::Tornado),
    ("quake", AnimationId::Earthquake),
    ("tremor", AnimationId::Earthquake),
    ("say yes", AnimationId::Nod),
    ("lean to the side", AnimationId::Tilt),
    ("heart beat", AnimationId::Heartbeat),
    ("zig zag", AnimationId::Zigzag),
    ("zig-zag", AnimationId::Zigzag),
    ("side to side", AnimationId::Sway),
    ("wring", AnimationId::Twist),
    ("squish", AnimationId::Squash),
    ("squeeze", AnimationId::Squash),
    ("stretch", AnimationId::Squash),
    ("cartwheel", AnimationId::Tumble),
    ("fall over", AnimationId::Tumble),
    ("skipping", AnimationId::Hop),
    ("bunny", AnimationId::Hop),
    ("tail wag", AnimationId::Wiggle),
    ("shimmy", AnimationId::Wiggle),
];

/// Insertion-ordered phrase → id table. Keys are stored trimmed and lowercase.
#[derive(Clone, Debug)]
pub struct AliasTable {
    entries: IndexMap<String, AnimationId>,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AliasTable {
    /// An empty table (no aliases at all).
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// The built-in alias set.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (phrase, id) in BUILTIN_ALIASES {
            table.insert(phrase, *id);
        }
        table
    }

    /// Built-ins followed by `extra`, in iteration order.
    pub fn with_extra<'a, I>(extra: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a AnimationId)>,
    {
        let mut table = Self::builtin();
        for (phrase, id) in extra {
            if !table.insert(phrase, *id) {
                log::warn!("alias '{phrase}' is already registered; keeping the earlier mapping");
            }
        }
        table
    }

    /// Append an alias. Returns false (and keeps the existing mapping) when the
    /// phrase is already present or normalizes to an empty string.
    pub fn insert(&mut self, phrase: &str, id: AnimationId) -> bool {
        let key = phrase.trim().to_lowercase();
        if key.is_empty() || self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, id);
        true
    }

    /// Exact lookup. `phrase` must already be normalized.
    #[inline]
    pub fn get(&self, phrase: &str) -> Option<AnimationId> {
        self.entries.get(phrase).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, AnimationId)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
