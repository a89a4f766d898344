//! Brochure rendering.
//!
//! Three fixed markdown templates, one per audience, filled from a
//! [`BusinessProfile`]. Each template caps how many items of a field it shows.

use crate::result::{BrochureSet, BusinessProfile};

/// Render the customer, investor and partner brochures.
///
/// # Example
///
/// ```rust
/// use brochurist::{analyze_business, generate_brochures, ContentBlock};
///
/// let blocks = vec![ContentBlock::paragraph("Managed hosting for SaaS teams.").unwrap()];
/// let brochures = generate_brochures(&analyze_business(&blocks)?);
/// assert!(brochures.customers.contains("Managed infrastructure and hosting"));
/// assert!(brochures.investors.contains("B2B SaaS companies"));
/// # Ok::<(), brochurist::Error>(())
/// ```
#[must_use]
pub fn generate_brochures(profile: &BusinessProfile) -> BrochureSet {
    BrochureSet {
        customers: brochure_for_customers(profile),
        investors: brochure_for_investors(profile),
        partners: brochure_for_partners(profile),
    }
}

/// Markdown assembled line by line, sections separated by blank lines.
#[derive(Default)]
struct Markdown {
    lines: Vec<String>,
}

impl Markdown {
    fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(text.into());
        self
    }

    fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    /// Section heading followed by a blank line.
    fn section(&mut self, heading: &str) -> &mut Self {
        self.line(format!("### {heading}")).blank()
    }

    fn items<F>(&mut self, items: &[String], limit: usize, fmt: F) -> &mut Self
    where
        F: Fn(&str) -> String,
    {
        for item in items.iter().take(limit) {
            self.line(fmt(item.as_str()));
        }
        self
    }

    fn finish(&self) -> String {
        self.lines.join("\n").trim().to_string()
    }
}

fn hero(md: &mut Markdown, title: &str, positioning: &str) {
    md.line(format!("## {title}"))
        .blank()
        .line(format!("**{}**", positioning.trim()))
        .blank();
}

fn brochure_for_customers(profile: &BusinessProfile) -> String {
    let mut md = Markdown::default();
    hero(&mut md, "🚀 Transform Your Business Today", &profile.company_positioning);

    md.section("✨ What Sets Us Apart");
    for (i, offering) in profile.core_offerings.iter().take(4).enumerate() {
        md.line(format!("**{}. {offering}**", i + 1)).blank();
    }

    if !profile.target_audience.is_empty() {
        md.section("👥 Perfect For")
            .items(&profile.target_audience, 3, |a| format!("✓ {a}"))
            .blank();
    }

    if !profile.unique_value_propositions.is_empty() {
        md.section("💎 Why Choose Us")
            .items(&profile.unique_value_propositions, 4, |v| format!("**→ {v}**"))
            .blank();
    }

    md.section("🎯 Ready to Get Started?")
        .line("Join hundreds of satisfied customers who trust us to deliver exceptional results.");
    md.finish()
}

fn brochure_for_investors(profile: &BusinessProfile) -> String {
    let mut md = Markdown::default();
    hero(&mut md, "💼 Investment Opportunity", &profile.company_positioning);

    md.section("📈 Market Position");
    if !profile.target_audience.is_empty() {
        md.line("**Target Market:**")
            .items(&profile.target_audience, 3, |a| format!("• {a}"))
            .blank();
    }

    if !profile.unique_value_propositions.is_empty() {
        md.section("🏆 Competitive Advantages")
            .items(&profile.unique_value_propositions, 5, |v| format!("**✓ {v}**"))
            .blank();
    }

    if !profile.core_offerings.is_empty() {
        md.section("🎯 Product Portfolio")
            .items(&profile.core_offerings, 4, |o| format!("• **{o}**"))
            .blank();
    }

    md.section("📊 Growth Potential")
        .line("• Scalable business model")
        .line("• Strong customer retention")
        .line("• Expanding market opportunity")
        .line("• Proven track record");
    md.finish()
}

fn brochure_for_partners(profile: &BusinessProfile) -> String {
    let mut md = Markdown::default();
    hero(&mut md, "🤝 Let's Build Something Great Together", &profile.company_positioning);

    if !profile.brand_tone_signals.is_empty() {
        md.section("💫 Our Partnership Values")
            .items(&profile.brand_tone_signals, 4, |t| format!("**✨ {t}**"))
            .blank();
    }

    if !profile.core_offerings.is_empty() {
        md.section("🎁 What We Bring to the Table")
            .items(&profile.core_offerings, 4, |o| format!("• **{o}**"))
            .blank();
    }

    if !profile.unique_value_propositions.is_empty() {
        md.section("🌟 Partnership Benefits")
            .items(&profile.unique_value_propositions, 4, |v| format!("**→ {v}**"))
            .blank();
    }

    md.section("🚀 Ready to Partner?")
        .line("Let's explore how we can create mutual value and drive success together.");
    md.finish()
}
