use std::collections::BTreeSet;

use crate::animation::reveal::Reveal;
use crate::scene::model::{ElementKey, Scene};

/// An element leaving the surface during a rebuild.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Exit {
    /// Element being removed.
    pub key: ElementKey,
    /// Reverse entrance played from the moment of the rebuild, if the old scene animates exits.
    pub reveal: Option<Reveal>,
}

/// Element keys that appear, persist or disappear between two consecutive scenes.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct SceneDiff {
    /// Keys only in the new scene.
    pub entered: Vec<ElementKey>,
    /// Keys present in both scenes.
    pub kept: Vec<ElementKey>,
    /// Keys only in the previous scene.
    pub exited: Vec<Exit>,
}

impl SceneDiff {
    /// Return `true` when the key sets are identical.
    pub fn is_unchanged(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }
}

/// Compare scenes by element key. Kept elements are redrawn at their new positions.
pub fn diff_scenes(prev: Option<&Scene>, next: &Scene) -> SceneDiff {
    let next_keys: BTreeSet<ElementKey> = next.keys().collect();
    let Some(prev) = prev else {
        return SceneDiff {
            entered: next_keys.into_iter().collect(),
            ..SceneDiff::default()
        };
    };
    let prev_keys: BTreeSet<ElementKey> = prev.keys().collect();

    let exited = prev_keys
        .difference(&next_keys)
        .map(|&key| Exit {
            key,
            reveal: if prev.animates_exit {
                prev.reveal_of(key).map(|r| Reveal {
                    delay_secs: 0.0,
                    ..r
                })
            } else {
                None
            },
        })
        .collect();

    SceneDiff {
        entered: next_keys.difference(&prev_keys).copied().collect(),
        kept: next_keys.intersection(&prev_keys).copied().collect(),
        exited,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/diff.rs"]
mod tests;
