//! Derived score statistics: accuracy and letter grade.

mod grade;

pub use grade::Grade;

use crate::error::{Error, Result};
use crate::model::Score;

impl Score {
    /// Total judged hits across all four judgment buckets.
    pub fn total_hits(&self) -> u32 {
        self.count_miss + self.count_50 + self.count_100 + self.count_300
    }

    /// Weighted hit quality in `[0, 1]`.
    ///
    /// Fails with [`Error::InvalidScore`] when no hits were judged, so a
    /// division by zero can never leak out as a silent NaN; callers decide
    /// whether to skip the score or render a blank cell.
    pub fn accuracy(&self) -> Result<f64> {
        let total = self.total_hits();
        if total == 0 {
            return Err(Error::InvalidScore {
                player_id: self.player_id,
            });
        }

        let weighted = 50 * u64::from(self.count_50)
            + 100 * u64::from(self.count_100)
            + 300 * u64::from(self.count_300);
        Ok(weighted as f64 / (300.0 * f64::from(total)))
    }

    /// Letter grade for this score; fails like [`Score::accuracy`] on a
    /// zero judged-hit total.
    pub fn grade(&self) -> Result<Grade> {
        Grade::from_hit_counts(self.count_miss, self.count_50, self.count_100, self.count_300)
            .ok_or(Error::InvalidScore {
                player_id: self.player_id,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Score;

    fn score(miss: u32, c50: u32, c100: u32, c300: u32) -> Score {
        Score {
            player_id: 1,
            score: 0,
            combo: 0,
            count_miss: miss,
            count_50: c50,
            count_100: c100,
            count_300: c300,
            mods: None,
        }
    }

    #[test]
    fn test_accuracy_perfect() {
        assert_eq!(score(0, 0, 0, 300).accuracy().unwrap(), 1.0);
    }

    #[test]
    fn test_accuracy_all_misses() {
        assert_eq!(score(10, 0, 0, 0).accuracy().unwrap(), 0.0);
    }

    #[test]
    fn test_accuracy_weighted() {
        // one of each judgment: (50 + 100 + 300) / (300 * 4)
        let acc = score(1, 1, 1, 1).accuracy().unwrap();
        assert!((acc - 450.0 / 1200.0).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_in_unit_interval() {
        for (miss, c50, c100, c300) in [(3, 5, 7, 11), (0, 1, 0, 0), (100, 0, 0, 1)] {
            let acc = score(miss, c50, c100, c300).accuracy().unwrap();
            assert!((0.0..=1.0).contains(&acc));
        }
    }

    #[test]
    fn test_zero_total_is_invalid() {
        let empty = score(0, 0, 0, 0);
        assert!(matches!(
            empty.accuracy(),
            Err(Error::InvalidScore { player_id: 1 })
        ));
        assert!(matches!(
            empty.grade(),
            Err(Error::InvalidScore { player_id: 1 })
        ));
    }

    #[test]
    fn test_grade_matches_hit_counts() {
        assert_eq!(score(0, 0, 0, 100).grade().unwrap(), Grade::Ss);
        assert_eq!(score(0, 0, 9, 91).grade().unwrap(), Grade::S);
    }
}
