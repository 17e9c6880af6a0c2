use serde::{Deserialize, Serialize};

/// One of the three cyclically dominant species a cell can hold.
///
/// The discriminants are the species indices used by the win rule:
/// `a` beats `b` iff `(a - b + 3) % 3 == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Species {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Rock, Species::Paper, Species::Scissors];

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Species::Rock),
            1 => Some(Species::Paper),
            2 => Some(Species::Scissors),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns true when `self` converts `other` on contact.
    #[inline]
    #[must_use]
    pub fn beats(self, other: Species) -> bool {
        (self.index() + 3 - other.index()) % 3 == 1
    }

    /// The species this one beats.
    #[must_use]
    pub fn prey(self) -> Species {
        Self::ALL[(self.index() + 2) % 3]
    }

    /// The species that beats this one.
    #[must_use]
    pub fn predator(self) -> Species {
        Self::ALL[(self.index() + 1) % 3]
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Species::Rock => "Rock",
            Species::Paper => "Paper",
            Species::Scissors => "Scissors",
        }
    }

    /// Fixed palette handed to rendering and charting collaborators.
    #[must_use]
    pub fn color_hex(self) -> &'static str {
        match self {
            Species::Rock => "#FF5733",
            Species::Paper => "#33C1FF",
            Species::Scissors => "#75FF33",
        }
    }

    #[must_use]
    pub fn color_rgb(self) -> (u8, u8, u8) {
        match self {
            Species::Rock => (0xFF, 0x57, 0x33),
            Species::Paper => (0x33, 0xC1, 0xFF),
            Species::Scissors => (0x75, 0xFF, 0x33),
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_direction() {
        assert!(Species::Rock.beats(Species::Scissors));
        assert!(Species::Paper.beats(Species::Rock));
        assert!(Species::Scissors.beats(Species::Paper));
        assert!(!Species::Rock.beats(Species::Paper));
    }

    #[test]
    fn test_prey_and_predator_are_consistent() {
        for s in Species::ALL {
            assert!(s.beats(s.prey()));
            assert!(s.predator().beats(s));
            assert_ne!(s.prey(), s.predator());
        }
    }

    #[test]
    fn test_from_index_round_trip() {
        for s in Species::ALL {
            assert_eq!(Species::from_index(s.index()), Some(s));
        }
        assert_eq!(Species::from_index(3), None);
    }

    #[test]
    fn test_palette_matches_hex() {
        for s in Species::ALL {
            let (r, g, b) = s.color_rgb();
            assert_eq!(format!("#{:02X}{:02X}{:02X}", r, g, b), s.color_hex());
        }
    }
}
