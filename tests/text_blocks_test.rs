use brochurist::{blocks_from_text, BlockKind, ContentBlock};

fn summary(blocks: &[ContentBlock]) -> Vec<(BlockKind, Option<u8>, &str)> {
    blocks.iter().map(|b| (b.kind(), b.level(), b.text())).collect()
}

#[test]
fn markdown_title_and_paragraph() {
    let blocks = blocks_from_text(
        "# Acme Cloud\nWe provide secure, scalable infrastructure hosting for enterprises.",
    );

    assert_eq!(
        summary(&blocks),
        [
            (BlockKind::Heading, Some(1), "Acme Cloud"),
            (
                BlockKind::Paragraph,
                None,
                "We provide secure, scalable infrastructure hosting for enterprises."
            ),
        ]
    );
}

#[test]
fn empty_input_still_yields_an_overview() {
    let blocks = blocks_from_text("");

    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].text(), "Company Overview");
    assert_eq!(blocks[0].level(), Some(1));
    assert_eq!(blocks[1].kind(), BlockKind::Paragraph);
}

#[test]
fn pitch_deck_style_text() {
    let text = "\
ACME CLOUD SERVICES\r\n\
\r\n\
## Why teams switch\r\n\
Deploy in minutes\r\n\
Our managed platform lets founders ship without hiring an operations team.\r\n\
Also, it scales,\r\n";

    let blocks = blocks_from_text(text);

    assert_eq!(
        summary(&blocks),
        [
            (BlockKind::Heading, Some(2), "Acme Cloud Services"),
            (BlockKind::Heading, Some(2), "Why teams switch"),
            (BlockKind::Heading, Some(2), "Deploy in minutes"),
            (
                BlockKind::Paragraph,
                None,
                "Our managed platform lets founders ship without hiring an operations team."
            ),
            (BlockKind::Paragraph, None, "Also, it scales,"),
        ]
    );
}

#[test]
fn deep_markdown_levels_are_capped() {
    let blocks = blocks_from_text("######## Very deep heading");
    assert_eq!(blocks[0].level(), Some(6));
    assert_eq!(blocks[0].text(), "Very deep heading");
}

#[test]
fn text_conversion_is_deterministic() {
    let text = "# Acme\nWE BUILD THINGS\nShort line\nA much longer sentence that ends with a period.";
    assert_eq!(blocks_from_text(text), blocks_from_text(text));
}

#[test]
fn no_block_is_ever_blank() {
    for text in ["#", "# \n##\n   \n", "\t\n", "just words", "#\nreal paragraph text here."] {
        let blocks = blocks_from_text(text);
        assert!(!blocks.is_empty(), "{text:?}");
        for block in &blocks {
            assert!(!block.text().trim().is_empty(), "{text:?}");
            if let Some(level) = block.level() {
                assert!((1..=6).contains(&level));
            }
        }
    }
}

#[test]
fn marker_only_text_falls_back_to_company_description() {
    let blocks = blocks_from_text("#\n##");

    assert_eq!(
        summary(&blocks),
        [
            (BlockKind::Heading, Some(1), "Company Description"),
            (BlockKind::Paragraph, None, "#\n##"),
        ]
    );
}
