//! Named difficulty levels and their move-selection policies.
//!
//! Each policy picks an index into a scored move list sorted best first.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Grandmaster,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Grandmaster,
    ];

    /// Whether scoring rewards control of the four center squares.
    #[inline]
    pub const fn values_center_control(self) -> bool {
        matches!(self, Difficulty::Advanced | Difficulty::Grandmaster)
    }

    /// Pick an index in `0..len` from a best-first list, or `None` when the
    /// list is empty.
    pub fn select_index<R: Rng + ?Sized>(self, len: usize, rng: &mut R) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(match self {
            Difficulty::Beginner => {
                // Worst 60%.
                let cutoff = (len as f64 * 0.4).floor() as usize;
                rng.random_range(cutoff..len)
            }
            Difficulty::Intermediate => {
                if rng.random::<f64>() < 0.7 {
                    pick_from_top(len, 0.5, rng)
                } else {
                    rng.random_range(0..len)
                }
            }
            Difficulty::Advanced => {
                if rng.random::<f64>() < 0.8 {
                    pick_from_top(len, 0.3, rng)
                } else {
                    rng.random_range(0..len)
                }
            }
            Difficulty::Grandmaster => {
                if rng.random::<f64>() < 0.9 {
                    rng.random_range(0..len.min(3))
                } else {
                    pick_from_top(len, 0.5, rng)
                }
            }
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Grandmaster => "grandmaster",
        }
    }
}

fn pick_from_top<R: Rng + ?Sized>(len: usize, share: f64, rng: &mut R) -> usize {
    let top = ((len as f64 * share).ceil() as usize).clamp(1, len);
    rng.random_range(0..top)
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown difficulty: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::Difficulty;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Grandmaster".parse::<Difficulty>(), Ok(Difficulty::Grandmaster));
        assert_eq!(" beginner ".parse::<Difficulty>(), Ok(Difficulty::Beginner));
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn beginner_never_picks_from_best_forty_percent() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(Difficulty::Beginner.select_index(10, &mut rng) >= Some(4));
        }
    }

    #[test]
    fn every_level_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for difficulty in Difficulty::ALL {
            for len in 1..12 {
                for _ in 0..50 {
                    let index = difficulty.select_index(len, &mut rng).expect("non-empty list");
                    assert!(index < len);
                }
            }
        }
    }

    #[test]
    fn empty_list_yields_no_index() {
        let mut rng = StdRng::seed_from_u64(5);
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.select_index(0, &mut rng), None);
        }
    }

    #[test]
    fn grandmaster_mostly_plays_top_three() {
        let mut rng = StdRng::seed_from_u64(3);
        let top_three = (0..1000)
            .filter(|_| Difficulty::Grandmaster.select_index(40, &mut rng) < Some(3))
            .count();
        assert!(top_three > 800, "top three picked {top_three} times");
    }
}
