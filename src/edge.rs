//! Active-keystroke sets and release-edge detection.
//!
//! The identity space is closed and small, so the active set is a bitset
//! indexed by [`KeystrokeId::index`]. Edge detection is a plain set
//! difference between an explicit previous/current pair; release keystrokes
//! exist only for the single frame in which the transition occurred.

use crate::keystroke::KeystrokeId;

/// A set of keystroke identities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeystrokeSet(u32);

impl KeystrokeSet {
    pub const EMPTY: KeystrokeSet = KeystrokeSet(0);

    pub fn insert(&mut self, id: KeystrokeId) {
        self.0 |= 1 << id.index();
    }

    pub fn contains(&self, id: KeystrokeId) -> bool {
        self.0 & (1 << id.index()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Identities present in `self` but not in `other`.
    pub fn difference(&self, other: &KeystrokeSet) -> KeystrokeSet {
        KeystrokeSet(self.0 & !other.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = KeystrokeId> + '_ {
        KeystrokeId::ALL.into_iter().filter(|id| self.contains(*id))
    }
}

impl FromIterator<KeystrokeId> for KeystrokeSet {
    fn from_iter<T: IntoIterator<Item = KeystrokeId>>(iter: T) -> Self {
        let mut set = KeystrokeSet::EMPTY;
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// Identities that were active last frame but are no longer active.
///
/// These are the release edges for the current frame. An identity that was
/// never active in the immediately preceding frame produces no release, so
/// a fresh wrapper emits nothing on its first update.
pub fn released_between(previous: &KeystrokeSet, current: &KeystrokeSet) -> KeystrokeSet {
    previous.difference(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keystroke::{Direction, PadButton};

    fn dir(d: Direction) -> KeystrokeId {
        KeystrokeId::Direction(d)
    }

    fn btn(b: PadButton) -> KeystrokeId {
        KeystrokeId::Button(b)
    }

    #[test]
    fn test_insert_contains_len() {
        let mut set = KeystrokeSet::EMPTY;
        assert!(set.is_empty());

        set.insert(dir(Direction::Forward));
        set.insert(btn(PadButton::A));
        set.insert(btn(PadButton::A));

        assert_eq!(set.len(), 2);
        assert!(set.contains(dir(Direction::Forward)));
        assert!(set.contains(btn(PadButton::A)));
        assert!(!set.contains(btn(PadButton::B)));
    }

    #[test]
    fn test_iter_yields_inserted_identities() {
        let set: KeystrokeSet = [dir(Direction::Up), btn(PadButton::RightTrigger)]
            .into_iter()
            .collect();
        let items: Vec<_> = set.iter().collect();
        assert_eq!(items.len(), 2);
        assert!(items.contains(&dir(Direction::Up)));
        assert!(items.contains(&btn(PadButton::RightTrigger)));
    }

    #[test]
    fn test_release_emitted_only_for_dropped_identities() {
        let previous: KeystrokeSet = [dir(Direction::Forward), btn(PadButton::A)]
            .into_iter()
            .collect();
        let current: KeystrokeSet = [dir(Direction::Neutral), btn(PadButton::A)]
            .into_iter()
            .collect();

        let released = released_between(&previous, &current);
        assert_eq!(released.len(), 1);
        assert!(released.contains(dir(Direction::Forward)));
        assert!(!released.contains(btn(PadButton::A)));
    }

    #[test]
    fn test_no_spurious_releases_from_empty_history() {
        let current: KeystrokeSet = [dir(Direction::Up)].into_iter().collect();
        assert!(released_between(&KeystrokeSet::EMPTY, &current).is_empty());
    }

    #[test]
    fn test_release_window_is_one_frame() {
        let frame1: KeystrokeSet = [btn(PadButton::B)].into_iter().collect();
        let frame2 = KeystrokeSet::EMPTY;
        let frame3 = KeystrokeSet::EMPTY;

        assert!(released_between(&frame1, &frame2).contains(btn(PadButton::B)));
        assert!(released_between(&frame2, &frame3).is_empty());
    }
}
