//! Key snapshot to paddle intent mapping
//!
//! Each paddle listens to four logical keys. When several are held at once
//! the first one in the paddle's priority list wins and the rest are ignored
//! for that tick: up, down, left, right. Intents are never combined, so a
//! paddle never moves diagonally.

use crate::sim::{Intent, Side, TickInput};

/// The eight keys the game listens to, independent of physical layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    LeftUp,
    LeftDown,
    LeftLeft,
    LeftRight,
    RightUp,
    RightDown,
    RightLeft,
    RightRight,
}

impl LogicalKey {
    pub const ALL: [LogicalKey; 8] = [
        LogicalKey::LeftUp,
        LogicalKey::LeftDown,
        LogicalKey::LeftLeft,
        LogicalKey::LeftRight,
        LogicalKey::RightUp,
        LogicalKey::RightDown,
        LogicalKey::RightLeft,
        LogicalKey::RightRight,
    ];

    #[inline]
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Point-in-time set of held keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySnapshot {
    held: u8,
}

impl KeySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: LogicalKey) {
        self.held |= key.bit();
    }

    pub fn release(&mut self, key: LogicalKey) {
        self.held &= !key.bit();
    }

    #[inline]
    pub fn is_pressed(&self, key: LogicalKey) -> bool {
        self.held & key.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.held == 0
    }

    /// Iterate held keys in declaration order
    pub fn iter(&self) -> impl Iterator<Item = LogicalKey> + '_ {
        LogicalKey::ALL.into_iter().filter(|key| self.is_pressed(*key))
    }
}

impl FromIterator<LogicalKey> for KeySnapshot {
    fn from_iter<T: IntoIterator<Item = LogicalKey>>(iter: T) -> Self {
        let mut snapshot = Self::new();
        for key in iter {
            snapshot.press(key);
        }
        snapshot
    }
}

/// Ordered key-to-intent list for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleBindings {
    pub side: Side,
    /// Checked front to back; first held key decides the intent
    pub priority: [(LogicalKey, Intent); 4],
}

impl PaddleBindings {
    pub const LEFT: Self = Self {
        side: Side::Left,
        priority: [
            (LogicalKey::LeftUp, Intent::Up),
            (LogicalKey::LeftDown, Intent::Down),
            (LogicalKey::LeftLeft, Intent::Left),
            (LogicalKey::LeftRight, Intent::Right),
        ],
    };

    pub const RIGHT: Self = Self {
        side: Side::Right,
        priority: [
            (LogicalKey::RightUp, Intent::Up),
            (LogicalKey::RightDown, Intent::Down),
            (LogicalKey::RightLeft, Intent::Left),
            (LogicalKey::RightRight, Intent::Right),
        ],
    };

    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Left => Self::LEFT,
            Side::Right => Self::RIGHT,
        }
    }

    pub fn resolve(&self, keys: &KeySnapshot) -> Option<Intent> {
        self.priority
            .iter()
            .find(|(key, _)| keys.is_pressed(*key))
            .map(|(_, intent)| *intent)
    }
}

/// Build this tick's paddle intents from the held keys
pub fn map_intents(keys: &KeySnapshot) -> TickInput {
    let resolve = |side| PaddleBindings::for_side(side).resolve(keys);
    TickInput {
        left: resolve(Side::Left),
        right: resolve(Side::Right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keys_no_intents() {
        assert_eq!(map_intents(&KeySnapshot::new()), TickInput::default());
    }

    #[test]
    fn test_each_key_maps_to_its_paddle() {
        for bindings in [PaddleBindings::LEFT, PaddleBindings::RIGHT] {
            assert_eq!(PaddleBindings::for_side(bindings.side), bindings);
            for (key, intent) in bindings.priority {
                let keys: KeySnapshot = [key].into_iter().collect();
                let input = map_intents(&keys);
                let (mine, other) = match bindings.side {
                    Side::Left => (input.left, input.right),
                    Side::Right => (input.right, input.left),
                };
                assert_eq!(mine, Some(intent), "{key:?}");
                assert_eq!(other, None, "{key:?}");
            }
        }
    }

    #[test]
    fn test_priority_order() {
        let keys: KeySnapshot = [
            LogicalKey::LeftRight,
            LogicalKey::LeftDown,
            LogicalKey::LeftLeft,
        ]
        .into_iter()
        .collect();
        assert_eq!(PaddleBindings::LEFT.resolve(&keys), Some(Intent::Down));

        let keys: KeySnapshot = LogicalKey::ALL.into_iter().collect();
        assert_eq!(
            map_intents(&keys),
            TickInput {
                left: Some(Intent::Up),
                right: Some(Intent::Up),
            }
        );

        let keys: KeySnapshot = [LogicalKey::RightRight, LogicalKey::RightLeft]
            .into_iter()
            .collect();
        assert_eq!(PaddleBindings::RIGHT.resolve(&keys), Some(Intent::Left));
    }

    #[test]
    fn test_snapshot_press_release() {
        let mut keys = KeySnapshot::new();
        keys.press(LogicalKey::RightDown);
        keys.press(LogicalKey::LeftUp);
        assert_eq!(
            keys.iter().collect::<Vec<_>>(),
            vec![LogicalKey::LeftUp, LogicalKey::RightDown]
        );

        keys.release(LogicalKey::LeftUp);
        assert!(!keys.is_pressed(LogicalKey::LeftUp));
        keys.release(LogicalKey::RightDown);
        assert!(keys.is_empty());
    }
}
