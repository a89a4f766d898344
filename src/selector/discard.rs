//! Noise Discard Rules
//!
//! Identifies page chrome (scripts, navigation, footers, forms, sidebars,
//! cookie banners, popups, ads) that never contributes content blocks.

use crate::patterns::{contains_any, CHROME_TAGS, NOISE_KEYWORDS, SCRIPT_TAGS};
use crate::selector::utils::{id_class, tag};
use crate::selector::Rule;
use dom_query::Selection;

/// Noise rules in the order the filter applies them.
pub static NOISE_RULES: &[Rule] = &[is_script_like, is_structural_chrome, has_noise_marker];

/// Rule 1: `script`, `style`, `noscript`.
#[must_use]
pub fn is_script_like(sel: &Selection) -> bool {
    SCRIPT_TAGS.contains(&tag(sel).as_str())
}

/// Rule 2: `nav`, `footer`, `form`, `aside`.
#[must_use]
pub fn is_structural_chrome(sel: &Selection) -> bool {
    CHROME_TAGS.contains(&tag(sel).as_str())
}

/// Rule 3: id or class contains a noise keyword (cookie, banner, popup, ...).
///
/// Applies to any tag, including `body`.
#[must_use]
pub fn has_noise_marker(sel: &Selection) -> bool {
    contains_any(&id_class(sel), NOISE_KEYWORDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    fn is_noise(doc: &dom::Document, css: &str) -> bool {
        let sel = doc.select(css);
        sel.exists() && NOISE_RULES.iter().any(|rule| rule(&sel))
    }

    #[test]
    fn scripts_and_styles_are_noise() {
        let doc = dom::parse("<script>x()</script><style>p{}</style><noscript>js</noscript><p>ok</p>");
        assert!(is_script_like(&doc.select("script")));
        assert!(is_script_like(&doc.select("style")));
        assert!(is_script_like(&doc.select("noscript")));
        assert!(!is_script_like(&doc.select("p")));
    }

    #[test]
    fn structural_chrome_is_noise() {
        let doc = dom::parse("<nav>n</nav><aside>a</aside><form>f</form><footer>f</footer><main>m</main>");
        for css in ["nav", "aside", "form", "footer"] {
            assert!(is_structural_chrome(&doc.select(css)), "{css} should be chrome");
        }
        assert!(!is_structural_chrome(&doc.select("main")));
    }

    #[test]
    fn noise_marker_matches_id_and_class() {
        let doc = dom::parse(
            r#"
            <div id="gdpr-notice">a</div>
            <div class="hero Newsletter-Box">b</div>
            <section class="sidebar-ads">c</section>
            <div id="pricing" class="plans">d</div>
        "#,
        );
        assert!(has_noise_marker(&doc.select("#gdpr-notice")));
        assert!(has_noise_marker(&doc.select(".hero")));
        assert!(has_noise_marker(&doc.select("section")));
        assert!(!has_noise_marker(&doc.select("#pricing")));
    }

    #[test]
    fn combined_rules() {
        let doc = dom::parse(r#"<div class="modal">x</div><p class="lead">y</p>"#);
        assert!(is_noise(&doc, "div.modal"));
        assert!(!is_noise(&doc, "p.lead"));
    }
}
