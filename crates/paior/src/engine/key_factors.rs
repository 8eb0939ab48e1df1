use super::domain::{SecondaryFactor, SecondaryScores};
use serde::Serialize;

/// Standard deviations above the mean a dynamic must reach to be "key".
pub const KEY_FACTOR_SD_MULTIPLIER: f64 = 1.0;
/// Absolute floor for a dynamic to read as strongly active.
pub const HIGH_FACTOR_FLOOR: u32 = 40;
/// Absolute floor for a dynamic to count among the respondent's top ones.
pub const TOP_FACTOR_FLOOR: u32 = 25;
pub const TOP_FACTOR_LIMIT: usize = 3;
/// Without any dynamic at or above this, the respondent reads as peaceful.
pub const ELEVATED_FACTOR_FLOOR: u32 = 35;

/// Population statistics of the nine secondary scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SecondarySpread {
    pub mean: f64,
    pub std_dev: f64,
    pub threshold: f64,
}

pub fn secondary_spread(secondary: &SecondaryScores) -> SecondarySpread {
    let count = secondary.len();
    if count == 0 {
        return SecondarySpread {
            mean: 0.0,
            std_dev: 0.0,
            threshold: 0.0,
        };
    }

    let count = count as f64;
    let mean = f64::from(secondary.total()) / count;
    let variance = secondary
        .iter()
        .map(|(_, score)| (f64::from(score) - mean).powi(2))
        .sum::<f64>()
        / count;
    let std_dev = variance.sqrt();

    SecondarySpread {
        mean,
        std_dev,
        threshold: mean + KEY_FACTOR_SD_MULTIPLIER * std_dev,
    }
}

/// Dynamics scoring at least one standard deviation above the respondent's
/// own mean, highest first. When every score is equal the deviation is zero
/// and all nine qualify.
pub fn detect_key_factors(secondary: &SecondaryScores) -> Vec<SecondaryFactor> {
    let threshold = secondary_spread(secondary).threshold;
    descending_where(secondary, |score| f64::from(score) >= threshold)
}

/// Dynamics at or above [`HIGH_FACTOR_FLOOR`], highest first.
pub fn high_factors(secondary: &SecondaryScores) -> Vec<SecondaryFactor> {
    descending_where(secondary, |score| score >= HIGH_FACTOR_FLOOR)
}

/// Up to `limit` dynamics at or above [`TOP_FACTOR_FLOOR`], highest first.
pub fn top_factors(secondary: &SecondaryScores, limit: usize) -> Vec<SecondaryFactor> {
    let mut top = descending_where(secondary, |score| score >= TOP_FACTOR_FLOOR);
    top.truncate(limit);
    top
}

/// Dynamics at or above [`ELEVATED_FACTOR_FLOOR`], highest first.
pub fn elevated_factors(secondary: &SecondaryScores) -> Vec<SecondaryFactor> {
    descending_where(secondary, |score| score >= ELEVATED_FACTOR_FLOOR)
}

pub fn has_elevated_factor(secondary: &SecondaryScores) -> bool {
    secondary
        .iter()
        .any(|(_, score)| score >= ELEVATED_FACTOR_FLOOR)
}

fn descending_where<P>(secondary: &SecondaryScores, predicate: P) -> Vec<SecondaryFactor>
where
    P: Fn(u32) -> bool,
{
    let mut selected: Vec<(SecondaryFactor, u32)> = secondary
        .iter()
        .filter(|(_, score)| predicate(*score))
        .collect();
    // Stable: equal scores keep P1..P9 order.
    selected.sort_by(|(_, left), (_, right)| right.cmp(left));
    selected.into_iter().map(|(factor, _)| factor).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(score: u32) -> SecondaryScores {
        SecondaryScores::from_scores(
            SecondaryFactor::ordered()
                .into_iter()
                .map(|factor| (factor, score)),
        )
    }

    #[test]
    fn uniform_scores_flag_every_factor() {
        let secondary = uniform(10);
        let spread = secondary_spread(&secondary);
        assert_eq!(spread.mean, 10.0);
        assert_eq!(spread.std_dev, 0.0);
        assert_eq!(spread.threshold, 10.0);
        assert_eq!(
            detect_key_factors(&secondary),
            SecondaryFactor::ordered().to_vec()
        );
    }

    #[test]
    fn outliers_above_one_deviation_are_flagged_highest_first() {
        let secondary = SecondaryScores::from_scores([
            (SecondaryFactor::Struggle, 20),
            (SecondaryFactor::Rebellion, 20),
            (SecondaryFactor::Perfection, 45),
            (SecondaryFactor::Stubbornness, 20),
            (SecondaryFactor::Distraction, 20),
            (SecondaryFactor::Contentment, 20),
            (SecondaryFactor::Moderation, 20),
            (SecondaryFactor::Dependence, 20),
            (SecondaryFactor::Boredom, 38),
        ]);

        assert_eq!(
            detect_key_factors(&secondary),
            vec![SecondaryFactor::Perfection, SecondaryFactor::Boredom]
        );
    }

    #[test]
    fn high_and_top_use_distinct_absolute_floors() {
        let secondary = SecondaryScores::from_scores([
            (SecondaryFactor::Struggle, 41),
            (SecondaryFactor::Rebellion, 39),
            (SecondaryFactor::Perfection, 30),
            (SecondaryFactor::Stubbornness, 26),
            (SecondaryFactor::Distraction, 25),
            (SecondaryFactor::Contentment, 24),
        ]);

        assert_eq!(high_factors(&secondary), vec![SecondaryFactor::Struggle]);
        assert_eq!(
            top_factors(&secondary, TOP_FACTOR_LIMIT),
            vec![
                SecondaryFactor::Struggle,
                SecondaryFactor::Rebellion,
                SecondaryFactor::Perfection
            ]
        );
        assert_eq!(top_factors(&secondary, 10).len(), 5);
        assert_eq!(
            elevated_factors(&secondary),
            vec![SecondaryFactor::Struggle, SecondaryFactor::Rebellion]
        );
        assert!(has_elevated_factor(&secondary));
    }

    #[test]
    fn equal_scores_keep_canonical_order() {
        let secondary = SecondaryScores::from_scores([
            (SecondaryFactor::Boredom, 42),
            (SecondaryFactor::Struggle, 42),
        ]);
        assert_eq!(
            high_factors(&secondary),
            vec![SecondaryFactor::Struggle, SecondaryFactor::Boredom]
        );
    }

    #[test]
    fn quiet_profile_has_no_elevated_factor() {
        let secondary = uniform(34);
        assert!(!has_elevated_factor(&secondary));
        assert!(high_factors(&secondary).is_empty());
        assert_eq!(top_factors(&secondary, TOP_FACTOR_LIMIT).len(), 3);
    }
}
