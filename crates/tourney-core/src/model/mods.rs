use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Gameplay modifier flags, matching the Bancho `enabled_mods` bit values.
    ///
    /// A game's ambient mods and a score's personal mods combine by union;
    /// the empty set is the identity.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Mods: u32 {
        const NO_FAIL = 1;
        const EASY = 2;
        const TOUCH_DEVICE = 4;
        const HIDDEN = 8;
        const HARD_ROCK = 16;
        const SUDDEN_DEATH = 32;
        const DOUBLE_TIME = 64;
        const RELAX = 128;
        const HALF_TIME = 256;
        const NIGHTCORE = 512;
        const FLASHLIGHT = 1024;
        const SPUN_OUT = 4096;
        const PERFECT = 16384;
        const MIRROR = 1 << 30;
    }
}

const ACRONYMS: &[(Mods, &str)] = &[
    (Mods::NO_FAIL, "NF"),
    (Mods::EASY, "EZ"),
    (Mods::TOUCH_DEVICE, "TD"),
    (Mods::HIDDEN, "HD"),
    (Mods::HARD_ROCK, "HR"),
    (Mods::SUDDEN_DEATH, "SD"),
    (Mods::DOUBLE_TIME, "DT"),
    (Mods::RELAX, "RX"),
    (Mods::HALF_TIME, "HT"),
    (Mods::NIGHTCORE, "NC"),
    (Mods::FLASHLIGHT, "FL"),
    (Mods::SPUN_OUT, "SO"),
    (Mods::PERFECT, "PF"),
    (Mods::MIRROR, "MR"),
];

impl Default for Mods {
    fn default() -> Self {
        Self::empty()
    }
}

impl Mods {
    pub fn from_bits_lossy(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }

    /// Union of two optional mod sets, treating absence as the empty set.
    pub fn combine(a: Option<Mods>, b: Option<Mods>) -> Mods {
        a.unwrap_or_default() | b.unwrap_or_default()
    }
}

impl std::fmt::Display for Mods {
    /// Comma-separated acronym list; the empty set renders as an empty string.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (flag, acronym) in ACRONYMS {
            if self.contains(*flag) {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{}", acronym)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_identity() {
        let hd_hr = Mods::HIDDEN | Mods::HARD_ROCK;
        assert_eq!(Mods::combine(None, Some(hd_hr)), hd_hr);
        assert_eq!(Mods::combine(Some(hd_hr), None), hd_hr);
        assert_eq!(Mods::combine(None, None), Mods::empty());
    }

    #[test]
    fn test_combine_idempotent() {
        let dt = Mods::DOUBLE_TIME;
        assert_eq!(Mods::combine(Some(dt), Some(dt)), dt);
    }

    #[test]
    fn test_combine_union() {
        let merged = Mods::combine(Some(Mods::NO_FAIL), Some(Mods::HIDDEN));
        assert_eq!(merged, Mods::NO_FAIL | Mods::HIDDEN);
    }

    #[test]
    fn test_display() {
        assert_eq!(Mods::empty().to_string(), "");
        assert_eq!((Mods::HIDDEN | Mods::HARD_ROCK).to_string(), "HD, HR");
        assert_eq!(Mods::from_bits_lossy(64).to_string(), "DT");
    }
}
