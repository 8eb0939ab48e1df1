use crate::engine::domain::{Factor, PrimaryFactor, PrimaryScores, SecondaryFactor, SecondaryScores};
use std::collections::HashMap;

const DELIMITER: char = '$';

/// Score values addressable as `$name$` in report templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderValues {
    values: HashMap<&'static str, u32>,
}

impl PlaceholderValues {
    pub fn from_scores(primary: &PrimaryScores, secondary: &SecondaryScores) -> Self {
        let values = primary
            .iter()
            .map(|(factor, score)| (Factor::placeholder(factor), score))
            .chain(
                secondary
                    .iter()
                    .map(|(factor, score)| (Factor::placeholder(factor), score)),
            )
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.values.get(name).copied()
    }
}

/// Placeholder names the engine understands, whether or not a value is set.
fn is_known_placeholder(name: &str) -> bool {
    PrimaryFactor::all()
        .iter()
        .any(|factor| Factor::placeholder(*factor) == name)
        || SecondaryFactor::all()
            .iter()
            .any(|factor| Factor::placeholder(*factor) == name)
}

/// Replaces every known `$name$` token with its score in one pass.
///
/// Known names missing from `values` render as `0`. Unknown tokens, stray
/// delimiters and all other text are copied through unchanged.
pub fn substitute(template: &str, values: &PlaceholderValues) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(DELIMITER) {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + DELIMITER.len_utf8()..];

        let Some(end) = after_open.find(DELIMITER) else {
            output.push_str(&rest[start..]);
            return output;
        };

        let name = &after_open[..end];
        if is_known_placeholder(name) {
            let score = values.get(name).unwrap_or(0);
            output.push_str(&score.to_string());
            rest = &after_open[end + DELIMITER.len_utf8()..];
        } else {
            // Keep the opening delimiter; the closing one may start a real token.
            output.push(DELIMITER);
            rest = after_open;
        }
    }

    output.push_str(rest);
    output
}

/// True when no known placeholder token survives in `text`.
pub fn is_fully_substituted(text: &str) -> bool {
    PrimaryFactor::all()
        .iter()
        .map(|factor| Factor::placeholder(*factor))
        .chain(
            SecondaryFactor::all()
                .iter()
                .map(|factor| Factor::placeholder(*factor)),
        )
        .all(|name| !text.contains(&format!("{DELIMITER}{name}{DELIMITER}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_values() -> PlaceholderValues {
        let primary = PrimaryScores::from_scores([
            (PrimaryFactor::Drive, 42),
            (PrimaryFactor::Relation, 17),
        ]);
        let secondary = SecondaryScores::from_scores([(SecondaryFactor::Boredom, 31)]);
        PlaceholderValues::from_scores(&primary, &secondary)
    }

    #[test]
    fn replaces_primary_and_secondary_tokens() {
        let text = substitute("A=$A$, R=$R$, O=$O$, P9=$P9$", &sample_values());
        assert_eq!(text, "A=42, R=17, O=0, P9=31");
    }

    #[test]
    fn missing_known_names_render_as_zero() {
        let text = substitute("$P3$ and $I$", &PlaceholderValues::default());
        assert_eq!(text, "0 and 0");
    }

    #[test]
    fn unknown_tokens_and_stray_delimiters_survive() {
        let values = sample_values();
        assert_eq!(substitute("costs $5 or $X$", &values), "costs $5 or $X$");
        assert_eq!(substitute("$P10$ vs $P1$", &values), "$P10$ vs 0");
        assert_eq!(substitute("trailing $", &values), "trailing $");
        assert_eq!(substitute("$$A$", &values), "$42");
    }

    #[test]
    fn repeated_tokens_are_all_replaced() {
        let text = substitute("$A$/$A$/$A$", &sample_values());
        assert_eq!(text, "42/42/42");
        assert!(is_fully_substituted(&text));
        assert!(!is_fully_substituted("left $O$ behind"));
    }

    #[test]
    fn text_without_tokens_is_unchanged() {
        let text = "Plain text with ünïcode and no tokens.";
        assert_eq!(substitute(text, &sample_values()), text);
    }
}
