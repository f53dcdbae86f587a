//! Strongly typed ids for roles, scenes and actors.
//!
//! Roles and actors are numbered from 1, scenes from 0, matching the
//! input format. Each id converts to a 0-based `index()` for table lookups.

use std::fmt;

/// A role id in `1..=role_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoleId(u32);

impl RoleId {
    /// Creates a role id from its 1-based number.
    ///
    /// # Panics
    ///
    /// Panics if `id` is zero.
    pub fn new(id: u32) -> Self {
        assert!(id > 0, "role ids start at 1");
        Self(id)
    }

    /// Creates a role id from a 0-based table index.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns the 0-based table index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An actor id. Real actors use `1..=actor_count`; overflow actors are
/// numbered after them at synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(u32);

impl ActorId {
    /// The first diva.
    pub const DIVA_1: ActorId = ActorId(1);
    /// The second diva.
    pub const DIVA_2: ActorId = ActorId(2);

    /// Creates an actor id from its 1-based number.
    ///
    /// # Panics
    ///
    /// Panics if `id` is zero.
    pub fn new(id: u32) -> Self {
        assert!(id > 0, "actor ids start at 1");
        Self(id)
    }

    /// Creates an actor id from a 0-based table index.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns the 0-based table index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Returns which diva this actor is, if any.
    #[inline]
    pub fn diva(self) -> Option<Diva> {
        match self {
            Self::DIVA_1 => Some(Diva::First),
            Self::DIVA_2 => Some(Diva::Second),
            _ => None,
        }
    }

    #[inline]
    pub fn is_diva(self) -> bool {
        self.diva().is_some()
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scene id in `0..scene_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneId(u32);

impl SceneId {
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the two divas, who must never share a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diva {
    First,
    Second,
}

impl Diva {
    pub const ALL: [Diva; 2] = [Diva::First, Diva::Second];

    /// Returns the actor playing this diva.
    #[inline]
    pub fn actor(self) -> ActorId {
        match self {
            Diva::First => ActorId::DIVA_1,
            Diva::Second => ActorId::DIVA_2,
        }
    }

    /// Returns the other diva.
    #[inline]
    pub fn other(self) -> Diva {
        match self {
            Diva::First => Diva::Second,
            Diva::Second => Diva::First,
        }
    }

    #[inline]
    pub(crate) fn slot(self) -> usize {
        match self {
            Diva::First => 0,
            Diva::Second => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_index_round_trip() {
        let role = RoleId::new(3);
        assert_eq!(role.index(), 2);
        assert_eq!(RoleId::from_index(2), role);
    }

    #[test]
    fn test_diva_lookup() {
        assert_eq!(ActorId::new(1).diva(), Some(Diva::First));
        assert_eq!(ActorId::new(2).diva(), Some(Diva::Second));
        assert_eq!(ActorId::new(3).diva(), None);
        assert_eq!(Diva::First.other().actor(), ActorId::DIVA_2);
    }

    #[test]
    #[should_panic(expected = "role ids start at 1")]
    fn test_zero_role_rejected() {
        let _ = RoleId::new(0);
    }
}
