//! Partitioning a score into full, partial and empty star units.

use serde::{Deserialize, Serialize};

/// How much of a star unit is filled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StarFill {
    Full,
    /// Filled from the left up to the given fraction in `(0, 1)`.
    Partial(f64),
    Empty,
}

impl StarFill {
    /// Filled share of the unit in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        match self {
            Self::Full => 1.0,
            Self::Partial(f) => *f,
            Self::Empty => 0.0,
        }
    }

    /// Clip boundary of the filled layer, as a percentage of the icon width.
    pub fn clip_percent(&self) -> f64 {
        self.fraction() * 100.0
    }
}

/// One star in the row, tagged with the value it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarUnit {
    /// Value reported when this unit is activated
    pub ordinal: i64,
    pub fill: StarFill,
}

impl StarUnit {
    pub fn new(ordinal: i64, fill: StarFill) -> Self {
        Self { ordinal, fill }
    }
}

/// Split `rating` into star units.
///
/// Produces `floor(rating)` full units, one partial unit when the rating has
/// a fractional part, then empty units up to `max_stars`. The rating is not
/// clamped: a value above `max_stars` yields more than `max_stars` units and
/// a negative value shifts ordinals below 1. `rating` must be finite.
///
/// The full and empty runs are each capped at [`run_limit`] units, so the
/// output never exceeds `4 * max_stars + 1` units however far out of range
/// the rating is.
pub fn partition(rating: f64, max_stars: u32) -> Vec<StarUnit> {
    let floor = rating.floor();
    // Saturates at i64::MIN / i64::MAX for huge magnitudes.
    let full_count = floor as i64;
    let fraction = rating - floor;
    let has_partial = fraction > 0.0;
    let limit = run_limit(max_stars);

    let full_run = full_count.clamp(0, limit);
    let remaining = i64::from(max_stars)
        .saturating_sub(full_count)
        .saturating_sub(i64::from(has_partial))
        .clamp(0, limit);
    let capacity = full_run + i64::from(has_partial) + remaining;
    let mut units = Vec::with_capacity(capacity as usize);

    units.extend((1..=full_run).map(|ordinal| StarUnit::new(ordinal, StarFill::Full)));

    if has_partial {
        units.push(StarUnit::new(full_count.saturating_add(1), StarFill::Partial(fraction)));
    }

    let first_empty = full_count
        .saturating_add(1)
        .saturating_add(i64::from(has_partial));
    units.extend(
        (0..remaining).map(|i| StarUnit::new(first_empty.saturating_add(i), StarFill::Empty)),
    );

    units
}

/// Most full or empty units a single run may hold for `max_stars` stars.
pub fn run_limit(max_stars: u32) -> i64 {
    i64::from(max_stars) * 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(units: &[StarUnit], pred: impl Fn(&StarFill) -> bool) -> usize {
        units.iter().filter(|u| pred(&u.fill)).count()
    }

    #[test]
    fn test_zero_rating_all_empty() {
        let units = partition(0.0, 5);
        assert_eq!(units.len(), 5);
        assert!(units.iter().all(|u| u.fill == StarFill::Empty));
        let ordinals: Vec<i64> = units.iter().map(|u| u.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_max_rating_all_full() {
        let units = partition(5.0, 5);
        assert_eq!(units.len(), 5);
        assert!(units.iter().all(|u| u.fill == StarFill::Full));
    }

    #[test]
    fn test_half_rating() {
        let units = partition(1.5, 5);
        assert_eq!(
            units,
            vec![
                StarUnit::new(1, StarFill::Full),
                StarUnit::new(2, StarFill::Partial(0.5)),
                StarUnit::new(3, StarFill::Empty),
                StarUnit::new(4, StarFill::Empty),
                StarUnit::new(5, StarFill::Empty),
            ]
        );
        assert!((units[1].fill.clip_percent() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_count_matches_max_stars_in_range() {
        for max_stars in 0..=10u32 {
            let steps = max_stars * 8;
            for step in 0..=steps {
                let rating = step as f64 / 8.0;
                let units = partition(rating, max_stars);
                assert_eq!(units.len(), max_stars as usize, "rating {}", rating);
                let ordinals: Vec<i64> = units.iter().map(|u| u.ordinal).collect();
                let expected: Vec<i64> = (1..=max_stars as i64).collect();
                assert_eq!(ordinals, expected, "rating {}", rating);
            }
        }
    }

    #[test]
    fn test_at_most_one_partial() {
        let units = partition(3.25, 5);
        assert_eq!(count(&units, |f| matches!(f, StarFill::Partial(_))), 1);
        assert_eq!(count(&units, |f| *f == StarFill::Full), 3);
        assert_eq!(count(&units, |f| *f == StarFill::Empty), 1);
    }

    #[test]
    fn test_zero_stars() {
        assert!(partition(0.0, 0).is_empty());
    }

    #[test]
    fn test_rating_above_max_is_not_clamped() {
        let units = partition(7.0, 5);
        assert_eq!(units.len(), 7);
        assert!(units.iter().all(|u| u.fill == StarFill::Full));

        let units = partition(5.5, 5);
        assert_eq!(units.len(), 6);
        assert_eq!(units[5], StarUnit::new(6, StarFill::Partial(0.5)));
    }

    #[test]
    fn test_negative_rating_does_not_panic() {
        let units = partition(-2.5, 5);
        // floor(-2.5) = -3, so no full units, a half unit at ordinal -2 and
        // seven empty units after it.
        assert_eq!(count(&units, |f| *f == StarFill::Full), 0);
        assert_eq!(units[0], StarUnit::new(-2, StarFill::Partial(0.5)));
        assert_eq!(count(&units, |f| *f == StarFill::Empty), 7);
        assert_eq!(units.last().map(|u| u.ordinal), Some(5));
    }

    #[test]
    fn test_huge_ratings_are_bounded() {
        for rating in [1e12, 1e19, 1e300] {
            let units = partition(rating, 5);
            assert_eq!(units.len(), 10, "rating {}", rating);
            assert!(units.iter().all(|u| u.fill == StarFill::Full));
            assert_eq!(units.last().map(|u| u.ordinal), Some(10));
        }
    }

    #[test]
    fn test_huge_negative_ratings_are_bounded() {
        for rating in [-1e12, -1e19, -1e300] {
            let units = partition(rating, 5);
            assert_eq!(units.len(), 10, "rating {}", rating);
            assert!(units.iter().all(|u| u.fill == StarFill::Empty));
        }
        let units = partition(-1e300, 5);
        assert_eq!(units[0].ordinal, i64::MIN + 1);
    }

    #[test]
    fn test_run_limit_keeps_modest_overflow() {
        assert_eq!(run_limit(5), 10);
        assert_eq!(partition(10.0, 5).len(), 10);
        assert_eq!(partition(11.0, 5).len(), 10);
        assert!(partition(3.0, 0).is_empty());
    }
}
