use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

/// Letter grade for a score, ordered worst to best.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Grade {
    D = 0,
    C = 1,
    B = 2,
    A = 3,
    S = 4,
    #[strum(serialize = "SS")]
    Ss = 5,
}

impl Grade {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Grade from raw judgment counts. Returns `None` when no hits were
    /// judged at all.
    ///
    /// The branches overlap and are evaluated in this exact priority order;
    /// reordering them changes the result at the threshold boundaries.
    pub fn from_hit_counts(miss: u32, count_50: u32, count_100: u32, count_300: u32) -> Option<Self> {
        let total = miss + count_50 + count_100 + count_300;
        if total == 0 {
            return None;
        }

        let t = f64::from(total);
        let c300 = f64::from(count_300);
        let c50 = f64::from(count_50);

        Some(if count_300 == total {
            Self::Ss
        } else if c300 > 0.9 * t && c50 < 0.01 * t && miss == 0 {
            Self::S
        } else if (c300 > 0.8 * t && miss == 0) || c300 > 0.9 * t {
            Self::A
        } else if (c300 > 0.7 * t && miss == 0) || c300 > 0.8 * t {
            Self::B
        } else if c300 > 0.6 * t {
            Self::C
        } else {
            Self::D
        })
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_perfect_is_ss() {
        assert_eq!(Grade::from_hit_counts(0, 0, 0, 100), Some(Grade::Ss));
    }

    #[test]
    fn test_s_boundary() {
        // 91% perfect hits, no 50s, no misses
        assert_eq!(Grade::from_hit_counts(0, 0, 9, 91), Some(Grade::S));
        // exactly 90% fails the strict > comparison
        assert_eq!(Grade::from_hit_counts(0, 0, 10, 90), Some(Grade::A));
        // a single miss drops the miss-free S clause but keeps > 0.9 A
        assert_eq!(Grade::from_hit_counts(1, 0, 8, 91), Some(Grade::A));
        // too many 50s for S
        assert_eq!(Grade::from_hit_counts(0, 2, 7, 91), Some(Grade::A));
    }

    #[test]
    fn test_a_boundary() {
        // miss-free above 80%
        assert_eq!(Grade::from_hit_counts(0, 0, 19, 81), Some(Grade::A));
        // same ratio with a miss only qualifies for B
        assert_eq!(Grade::from_hit_counts(1, 0, 18, 81), Some(Grade::B));
    }

    #[test]
    fn test_b_and_c_boundaries() {
        assert_eq!(Grade::from_hit_counts(0, 0, 29, 71), Some(Grade::B));
        // above 60% with misses present
        assert_eq!(Grade::from_hit_counts(5, 0, 34, 61), Some(Grade::C));
        assert_eq!(Grade::from_hit_counts(10, 10, 30, 50), Some(Grade::D));
    }

    #[test]
    fn test_zero_total_is_none() {
        assert_eq!(Grade::from_hit_counts(0, 0, 0, 0), None);
    }

    #[test]
    fn test_monotonic_in_count_300() {
        // with the other counts fixed, more perfect hits never worsen the grade
        let mut previous = Grade::D;
        for c300 in 0..=200 {
            let grade = Grade::from_hit_counts(2, 3, 10, c300).unwrap();
            assert!(grade >= previous, "grade worsened at count_300 = {}", c300);
            previous = grade;
        }
    }

    #[test]
    fn test_grade_ordering() {
        assert!(Grade::Ss > Grade::S);
        assert!(Grade::S > Grade::A);
        assert!(Grade::D < Grade::C);
    }
}
