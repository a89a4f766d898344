//! Business profile inference from content blocks.
//!
//! The blocks are rendered into one bounded, lowercased context string and
//! each profile field is filled from an ordered table of keyword rules.
//! Rules accumulate (every matching rule contributes its phrase, in table
//! order) and each field has a fallback for when nothing matches, so the
//! classifier is total over any non-empty block sequence.

use crate::error::{Error, Result};
use crate::options::Options;
use crate::patterns::{collapse_whitespace, contains_any};
use crate::result::{BusinessProfile, ContentBlock};

/// Appended to the context when it had to be shortened.
pub const TRUNCATION_MARKER: &str = "\n...[truncated]...";

/// Positioning statement used for every profile.
pub const COMPANY_POSITIONING: &str = "The company provides pragmatic technology solutions for teams that want the benefits of modern tooling without running complex infrastructure themselves.";

/// One classification rule: if the context contains any keyword, emit `phrase`.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub any_of: &'static [&'static str],
    pub phrase: &'static str,
}

/// Ordered rules for one profile field plus the phrases used when none match.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub rules: &'static [KeywordRule],
    pub fallback: &'static [&'static str],
}

const fn rule(any_of: &'static [&'static str], phrase: &'static str) -> KeywordRule {
    KeywordRule { any_of, phrase }
}

pub static OFFERINGS: FieldRules = FieldRules {
    rules: &[
        rule(&["hosting", "infrastructure"], "Managed infrastructure and hosting"),
        rule(&["ml ops", "mlops"], "ML Ops tooling"),
        rule(&["deployment", "deploy"], "Model deployment and monitoring"),
    ],
    fallback: &["Software products and related services"],
};

pub static AUDIENCE: FieldRules = FieldRules {
    rules: &[
        rule(&["enterprise", "enterprises"], "Enterprise technology teams"),
        rule(&["saas"], "B2B SaaS companies"),
        rule(&["startup", "founder"], "High-growth startups"),
    ],
    fallback: &["Modern businesses looking to use technology more effectively"],
};

pub static VALUE_PROPOSITIONS: FieldRules = FieldRules {
    rules: &[
        rule(&["faster", "weeks instead of months"], "Faster time-to-value compared to in-house builds"),
        rule(&["secure", "security"], "Security and compliance handled by specialists"),
        // "scal" covers scale, scalable, scaling
        rule(&["scal"], "Scales with demand without manual capacity planning"),
    ],
    fallback: &["Focused on reliable delivery and practical outcomes"],
};

pub static TONE_SIGNALS: FieldRules = FieldRules {
    rules: &[
        rule(&["pragmatic", "practical"], "Pragmatic and down-to-earth"),
        rule(&["partner", "with you"], "Partnership-oriented and supportive"),
    ],
    fallback: &["Professional", "Confident"],
};

/// Render blocks as one line each (`#`-prefixed headings) and shorten the
/// result to at most `max_chars` characters.
///
/// Original casing is kept; see [`ProfileContext`] for the classifier's view.
#[must_use]
pub fn build_compact_context(blocks: &[ContentBlock], max_chars: usize) -> String {
    let lines: Vec<String> = blocks
        .iter()
        .map(|block| match block.level() {
            Some(level) if block.is_heading() => {
                format!("{} {}", "#".repeat(usize::from(level.min(6))), block.text())
            }
            _ => block.text().to_string(),
        })
        .collect();

    shorten(&lines.join("\n"), max_chars, TRUNCATION_MARKER)
}

/// Shorten text to fit in `width` characters, cutting between words.
///
/// Whitespace is always collapsed to single spaces. If the collapsed text
/// is still too long, whole words are dropped from the end until the
/// remaining words plus `placeholder` fit. When not even one word fits, the
/// placeholder alone (leading whitespace trimmed) is returned, which is
/// longer than `width` if `width` is below the placeholder length.
///
/// # Example
///
/// ```rust
/// use brochurist::analyzer::shorten;
///
/// assert_eq!(shorten("Hello   world", 20, " [...]"), "Hello world");
/// assert_eq!(shorten("Hello world and more", 15, " [...]"), "Hello [...]");
/// ```
#[must_use]
pub fn shorten(text: &str, width: usize, placeholder: &str) -> String {
    let collapsed = collapse_whitespace(text);
    if collapsed.chars().count() <= width {
        return collapsed;
    }

    let placeholder_len = placeholder.chars().count();
    let mut out = String::new();
    let mut out_len = 0;

    for word in collapsed.split(' ') {
        let sep = usize::from(!out.is_empty());
        let word_len = word.chars().count();
        if out_len + sep + word_len + placeholder_len > width {
            break;
        }
        if sep == 1 {
            out.push(' ');
        }
        out.push_str(word);
        out_len += sep + word_len;
    }

    if out.is_empty() {
        return placeholder.trim_start().to_string();
    }
    out.push_str(placeholder);
    out
}

/// The bounded, lowercased text every keyword rule is tested against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileContext {
    text: String,
}

impl ProfileContext {
    #[must_use]
    pub fn from_blocks(blocks: &[ContentBlock], max_chars: usize) -> Self {
        let text = build_compact_context(blocks, max_chars).to_lowercase();
        Self { text }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn matches(&self, rule: &KeywordRule) -> bool {
        contains_any(&self.text, rule.any_of)
    }

    /// Phrases of every matching rule in table order, or the fallback.
    #[must_use]
    pub fn classify(&self, field: &FieldRules) -> Vec<String> {
        let matched: Vec<String> = field
            .rules
            .iter()
            .filter(|r| self.matches(r))
            .map(|r| r.phrase.to_string())
            .collect();

        if matched.is_empty() {
            field.fallback.iter().map(|p| (*p).to_string()).collect()
        } else {
            matched
        }
    }
}

/// Infer a business profile using default options.
///
/// Returns [`Error::InvalidInput`] for an empty block sequence; any
/// non-empty sequence produces a complete profile.
///
/// # Example
///
/// ```rust
/// use brochurist::{analyze_business, ContentBlock};
///
/// let blocks = vec![ContentBlock::paragraph("Secure hosting for startups.").unwrap()];
/// let profile = analyze_business(&blocks)?;
/// assert_eq!(profile.target_audience, ["High-growth startups"]);
/// # Ok::<(), brochurist::Error>(())
/// ```
pub fn analyze_business(blocks: &[ContentBlock]) -> Result<BusinessProfile> {
    analyze_business_with_options(blocks, &Options::default())
}

/// Infer a business profile with a custom context budget.
pub fn analyze_business_with_options(blocks: &[ContentBlock], opts: &Options) -> Result<BusinessProfile> {
    if blocks.is_empty() {
        return Err(Error::InvalidInput(
            "No content blocks provided for analysis.".to_string(),
        ));
    }

    let context = ProfileContext::from_blocks(blocks, opts.max_context_chars);

    let profile = BusinessProfile {
        company_positioning: COMPANY_POSITIONING.to_string(),
        core_offerings: context.classify(&OFFERINGS),
        target_audience: context.classify(&AUDIENCE),
        unique_value_propositions: context.classify(&VALUE_PROPOSITIONS),
        brand_tone_signals: context.classify(&TONE_SIGNALS),
    };

    tracing::debug!(
        context_chars = context.as_str().chars().count(),
        offerings = profile.core_offerings.len(),
        audience = profile.target_audience.len(),
        value_props = profile.unique_value_propositions.len(),
        tone = profile.brand_tone_signals.len(),
        "profile classified"
    );
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn para(text: &str) -> ContentBlock {
        ContentBlock::paragraph(text).unwrap()
    }

    #[test]
    fn empty_blocks_are_invalid_input() {
        let err = analyze_business(&[]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn no_keywords_gives_fallbacks() {
        let profile = analyze_business(&[para("We bake bread.")]).unwrap();

        assert_eq!(profile.core_offerings, ["Software products and related services"]);
        assert_eq!(
            profile.target_audience,
            ["Modern businesses looking to use technology more effectively"]
        );
        assert_eq!(
            profile.unique_value_propositions,
            ["Focused on reliable delivery and practical outcomes"]
        );
        assert_eq!(profile.brand_tone_signals, ["Professional", "Confident"]);
        assert_eq!(profile.company_positioning, COMPANY_POSITIONING);
    }

    #[test]
    fn matches_accumulate_in_rule_order() {
        // Keywords appear in reverse rule order in the text.
        let profile = analyze_business(&[para(
            "Deploy models, use our MLOps suite, and rely on managed hosting.",
        )])
        .unwrap();

        assert_eq!(
            profile.core_offerings,
            [
                "Managed infrastructure and hosting",
                "ML Ops tooling",
                "Model deployment and monitoring"
            ]
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let profile = analyze_business(&[ContentBlock::heading(1, "SAAS FOUNDERS").unwrap()]).unwrap();
        assert_eq!(profile.target_audience, ["B2B SaaS companies", "High-growth startups"]);
    }

    #[test]
    fn scal_prefix_catches_variants() {
        for word in ["scale", "scalable", "scaling", "Scalability"] {
            let profile = analyze_business(&[para(word)]).unwrap();
            assert_eq!(
                profile.unique_value_propositions,
                ["Scales with demand without manual capacity planning"],
                "{word}"
            );
        }
    }

    #[test]
    fn tone_rules() {
        let profile = analyze_business(&[para("A practical team that works with you.")]).unwrap();
        assert_eq!(
            profile.brand_tone_signals,
            ["Pragmatic and down-to-earth", "Partnership-oriented and supportive"]
        );
    }

    #[test]
    fn keyword_split_across_lines_still_matches() {
        let blocks = [para("We ship in weeks"), para("instead of months for every client")];
        let profile = analyze_business(&blocks).unwrap();
        assert_eq!(
            profile.unique_value_propositions,
            ["Faster time-to-value compared to in-house builds"]
        );
    }

    #[test]
    fn keywords_past_the_budget_are_ignored() {
        let filler = para(&"lorem ipsum ".repeat(300));
        let late = para("Enterprise security at scale.");
        let profile = analyze_business(&[filler, late]).unwrap();

        assert_eq!(
            profile.target_audience,
            ["Modern businesses looking to use technology more effectively"]
        );
    }

    #[test]
    fn budget_is_configurable() {
        let filler = para(&"lorem ipsum ".repeat(300));
        let late = para("Enterprise security at scale.");
        let opts = Options {
            max_context_chars: 10_000,
            ..Options::default()
        };
        let profile = analyze_business_with_options(&[filler, late], &opts).unwrap();

        assert_eq!(profile.target_audience, ["Enterprise technology teams"]);
    }

    #[test]
    fn compact_context_prefixes_headings() {
        let blocks = [
            ContentBlock::heading(2, "About").unwrap(),
            para("We host things."),
        ];
        // whitespace collapse turns the newline into a space
        assert_eq!(build_compact_context(&blocks, 2000), "## About We host things.");
    }

    #[test]
    fn shorten_respects_width_and_marker() {
        let text = "alpha beta gamma delta epsilon";
        // marker is 18 chars, leaving room for "alpha" only
        let short = shorten(text, 25, TRUNCATION_MARKER);

        assert!(short.chars().count() <= 25);
        assert!(short.ends_with(TRUNCATION_MARKER));
        assert_eq!(short, format!("alpha{TRUNCATION_MARKER}"));
    }

    #[test]
    fn shorten_with_no_room_returns_marker() {
        assert_eq!(shorten("supercalifragilistic", 5, " [..]"), "[..]");
    }

    #[test]
    fn width_below_marker_returns_marker() {
        let short = shorten("alpha beta gamma", 5, TRUNCATION_MARKER);
        assert_eq!(short, "...[truncated]...");
    }

    #[test]
    fn context_is_bounded() {
        let blocks = [para(&"word ".repeat(1000))];
        let context = ProfileContext::from_blocks(&blocks, 2000);
        assert!(context.as_str().chars().count() <= 2000);
        assert!(context.as_str().ends_with("...[truncated]..."));
    }

    #[test]
    fn repeated_mlops_stays_within_budget() {
        let blocks = [para(&"mlops ".repeat(500))];
        let context = ProfileContext::from_blocks(&blocks, 2000);

        assert!(context.as_str().chars().count() <= 2000);
        assert!(context.matches(&OFFERINGS.rules[1]));
    }

    #[test]
    fn both_ml_ops_spellings_match() {
        for text in ["Our MLOps platform", "End-to-end ML Ops for data teams"] {
            let profile = analyze_business(&[para(text)]).unwrap();
            assert_eq!(profile.core_offerings, ["ML Ops tooling"], "{text}");
        }
    }
}
