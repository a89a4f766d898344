use brochurist::{
    analyze_business, blocks_from_text, generate, generate_brochures, write_outputs, Audience,
    Input, Options,
};

const PITCHES: &[&str] = &[
    "# Acme Cloud\nWe provide secure, scalable infrastructure hosting for enterprises.",
    "MLOps for startups. Deploy faster with a practical partner who works with you.",
    "# Corner Bakery\nFresh bread every morning.",
    "",
];

#[test]
fn every_profile_phrase_appears_in_some_brochure() {
    for pitch in PITCHES {
        let profile = analyze_business(&blocks_from_text(pitch)).unwrap();
        let brochures = generate_brochures(&profile);

        for phrase in profile.phrases() {
            assert!(
                brochures.iter().any(|(_, body)| body.contains(phrase)),
                "{phrase:?} missing for {pitch:?}"
            );
        }
        for (_, body) in brochures.iter() {
            assert!(body.contains(&profile.company_positioning));
        }
    }
}

#[test]
fn each_brochure_opens_with_its_hero() {
    let profile = analyze_business(&blocks_from_text(PITCHES[0])).unwrap();
    let brochures = generate_brochures(&profile);

    assert!(brochures.customers.starts_with("## 🚀 Transform Your Business Today"));
    assert!(brochures.investors.starts_with("## 💼 Investment Opportunity"));
    assert!(brochures.partners.starts_with("## 🤝 Let's Build Something Great Together"));
}

#[test]
fn rendering_is_deterministic() {
    let profile = analyze_business(&blocks_from_text(PITCHES[1])).unwrap();
    assert_eq!(generate_brochures(&profile), generate_brochures(&profile));
}

#[test]
fn pipeline_writes_documents_and_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = Input::Text(PITCHES[0].to_string());
    let options = Options::default();

    let report = generate(&input, &options).unwrap();
    let written = write_outputs(&report, dir.path(), &options).unwrap();

    assert_eq!(written.len(), Audience::ALL.len());
    let investors = std::fs::read_to_string(dir.path().join("brochure_investors.md")).unwrap();
    assert!(investors.starts_with("# Investors Brochure\n\n"));
    assert!(investors.contains("Enterprise technology teams"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["blocks"][0]["type"], "heading");
    assert_eq!(json["blocks"][0]["level"], 1);
    assert_eq!(json["blocks"][0]["text"], "Acme Cloud");
    assert_eq!(
        json["profile"]["core_offerings"][0],
        "Managed infrastructure and hosting"
    );
    assert!(json["brochures"]["partners"].is_string());
}
