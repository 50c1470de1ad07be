//! Small page helpers: in-page anchors and the footer copyright line.

use chrono::Datelike;

/// Element id targeted by an in-page anchor `href`.
///
/// `"#"` alone and non-fragment links are left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

pub fn footer_text(year: i32, brand: &str) -> String {
    format!("© {year} {brand}. All rights reserved.")
}

/// Footer text for the current local year.
pub fn current_footer_text(brand: &str) -> String {
    footer_text(chrono::Local::now().year(), brand)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#team"), Some("team"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/about"), None);
    }

    #[test]
    fn footer() {
        assert_eq!(
            footer_text(2026, "Smart Care"),
            "© 2026 Smart Care. All rights reserved."
        );
        assert!(current_footer_text("X").ends_with("X. All rights reserved."));
    }
}
