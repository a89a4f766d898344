//! Result types passed between pipeline stages.
//!
//! Content blocks are produced from HTML, text, or images; the classifier
//! turns them into a [`BusinessProfile`]; the renderer turns that into a
//! [`BrochureSet`].

use serde::Serialize;

/// Structural type of a content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Heading,
    Paragraph,
}

/// A heading or paragraph pulled out of some input, in source order.
///
/// Blocks are immutable once created. The constructors trim the text and
/// refuse blank input, so `text` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    kind: BlockKind,
    level: Option<u8>,
    text: String,
}

impl ContentBlock {
    /// Build a heading block. The level is clamped to `1..=6`.
    ///
    /// Returns `None` if `text` is blank.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brochurist::ContentBlock;
    ///
    /// let block = ContentBlock::heading(9, "  Acme Cloud ").unwrap();
    /// assert_eq!(block.level(), Some(6));
    /// assert_eq!(block.text(), "Acme Cloud");
    /// assert!(ContentBlock::heading(1, "   ").is_none());
    /// ```
    #[must_use]
    pub fn heading(level: u8, text: impl AsRef<str>) -> Option<Self> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            kind: BlockKind::Heading,
            level: Some(level.clamp(1, 6)),
            text: text.to_string(),
        })
    }

    /// Build a paragraph block. Returns `None` if `text` is blank.
    #[must_use]
    pub fn paragraph(text: impl AsRef<str>) -> Option<Self> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            kind: BlockKind::Paragraph,
            level: None,
            text: text.to_string(),
        })
    }

    #[must_use]
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Heading level (1-6), `None` for paragraphs.
    #[must_use]
    pub fn level(&self) -> Option<u8> {
        self.level
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_heading(&self) -> bool {
        self.kind == BlockKind::Heading
    }
}

/// Structured summary of a company inferred from content blocks.
///
/// Every list holds at least one entry and `company_positioning` is never
/// empty; the classifier falls back to generic phrases when no rule fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessProfile {
    pub company_positioning: String,
    pub core_offerings: Vec<String>,
    pub target_audience: Vec<String>,
    pub unique_value_propositions: Vec<String>,
    pub brand_tone_signals: Vec<String>,
}

impl BusinessProfile {
    /// All list-field phrases, in field order.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.core_offerings
            .iter()
            .chain(&self.target_audience)
            .chain(&self.unique_value_propositions)
            .chain(&self.brand_tone_signals)
            .map(String::as_str)
    }
}

/// Reader a brochure is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Customers,
    Investors,
    Partners,
}

impl Audience {
    /// All audiences in output order.
    pub const ALL: [Audience; 3] = [Audience::Customers, Audience::Investors, Audience::Partners];

    /// Lowercase identifier used in file names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Audience::Customers => "customers",
            Audience::Investors => "investors",
            Audience::Partners => "partners",
        }
    }

    /// Capitalized name used in document titles.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Audience::Customers => "Customers",
            Audience::Investors => "Investors",
            Audience::Partners => "Partners",
        }
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three rendered markdown brochures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BrochureSet {
    pub customers: String,
    pub investors: String,
    pub partners: String,
}

impl BrochureSet {
    /// Brochure body for one audience.
    #[must_use]
    pub fn get(&self, audience: Audience) -> &str {
        match audience {
            Audience::Customers => &self.customers,
            Audience::Investors => &self.investors,
            Audience::Partners => &self.partners,
        }
    }

    /// `(audience, body)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Audience, &str)> {
        Audience::ALL.into_iter().map(move |a| (a, self.get(a)))
    }

    /// Standalone markdown document for one audience: a title line followed
    /// by the brochure body.
    #[must_use]
    pub fn to_document(&self, audience: Audience) -> String {
        format!("# {} Brochure\n\n{}\n", audience.title(), self.get(audience).trim())
    }
}

/// Everything produced by one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Blocks produced from the input, in source order.
    pub blocks: Vec<ContentBlock>,

    /// Profile inferred from the blocks.
    pub profile: BusinessProfile,

    /// Brochures rendered from the profile.
    pub brochures: BrochureSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(ContentBlock::paragraph("").is_none());
        assert!(ContentBlock::paragraph(" \n\t ").is_none());
        assert!(ContentBlock::heading(2, "").is_none());
    }

    #[test]
    fn heading_level_is_clamped() {
        assert_eq!(ContentBlock::heading(0, "x").map(|b| b.level()), Some(Some(1)));
        assert_eq!(ContentBlock::heading(7, "x").map(|b| b.level()), Some(Some(6)));
        assert_eq!(ContentBlock::heading(3, "x").map(|b| b.level()), Some(Some(3)));
    }

    #[test]
    fn paragraph_has_no_level() {
        let block = ContentBlock::paragraph("  body text ").unwrap();
        assert_eq!(block.kind(), BlockKind::Paragraph);
        assert_eq!(block.level(), None);
        assert_eq!(block.text(), "body text");
    }

    #[test]
    fn block_serializes_with_type_tag() {
        let block = ContentBlock::heading(1, "Acme").unwrap();
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, r#"{"type":"heading","level":1,"text":"Acme"}"#);

        let para = ContentBlock::paragraph("Body").unwrap();
        let json = serde_json::to_string(&para).unwrap();
        assert_eq!(json, r#"{"type":"paragraph","level":null,"text":"Body"}"#);
    }

    #[test]
    fn brochure_document_has_title_line() {
        let set = BrochureSet {
            customers: "## Hello\n".to_string(),
            ..BrochureSet::default()
        };
        assert_eq!(
            set.to_document(Audience::Customers),
            "# Customers Brochure\n\n## Hello\n"
        );
    }

    #[test]
    fn audiences_iterate_in_fixed_order() {
        let set = BrochureSet::default();
        let order: Vec<_> = set.iter().map(|(a, _)| a.as_str()).collect();
        assert_eq!(order, ["customers", "investors", "partners"]);
    }
}
