use super::answers::AnswerSet;
use super::domain::{PrimaryFactor, PrimaryScores, SecondaryFactor, SecondaryScores};
use serde_json::Value;
use tracing::debug;

const SECONDARY_PREFIX: &str = "P_";

/// Primary and secondary accumulators derived from one answer set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorScores {
    pub primary: PrimaryScores,
    pub secondary: SecondaryScores,
    /// Entries ignored because the value was not a whole number or the
    /// identifier matched no factor. Fractional responses such as `2.5` land
    /// here and contribute nothing to their factor: scores stay integral at
    /// the cost of dropping those answers.
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemTarget {
    Primary(PrimaryFactor),
    Secondary(SecondaryFactor),
}

/// Sums every recognizable response into its factor accumulator.
pub fn aggregate(answers: &AnswerSet) -> FactorScores {
    let mut primary = PrimaryScores::zeroed();
    let mut secondary = SecondaryScores::zeroed();
    let mut skipped = 0;

    for (question_id, raw) in answers.iter() {
        let Some(value) = response_value(raw) else {
            debug!(question_id, "skipping non-numeric answer");
            skipped += 1;
            continue;
        };

        match item_target(question_id) {
            Some(ItemTarget::Primary(factor)) => primary.add(factor, value),
            Some(ItemTarget::Secondary(factor)) => secondary.add(factor, value),
            None => {
                debug!(question_id, "skipping unrecognized question identifier");
                skipped += 1;
            }
        }
    }

    FactorScores {
        primary,
        secondary,
        skipped,
    }
}

fn response_value(raw: &Value) -> Option<u32> {
    let number = match raw {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !number.is_finite() || number < 0.0 || number.fract() != 0.0 || number > u32::MAX as f64 {
        return None;
    }

    Some(number as u32)
}

fn item_target(question_id: &str) -> Option<ItemTarget> {
    if let Some(rest) = question_id.strip_prefix(SECONDARY_PREFIX) {
        let (name, index) = rest.rsplit_once('_')?;
        if !is_item_index(index) {
            return None;
        }
        return SecondaryFactor::from_name(name).map(ItemTarget::Secondary);
    }

    let mut chars = question_id.chars();
    let factor = PrimaryFactor::from_symbol(chars.next()?)?;
    is_item_index(chars.as_str()).then_some(ItemTarget::Primary(factor))
}

fn is_item_index(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}
