// src/utils.rs

/// Whether a link should open in the in-page document viewer.
pub fn is_pdf_url(url: &str) -> bool {
    url.to_lowercase().contains(".pdf")
}

/// Parse a loose boolean query flag ("true", "1", "yes", "all").
pub fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_lowercase()).as_deref(),
        Some("true") | Some("1") | Some("yes") | Some("all")
    )
}

/// Mask a credential for log output, keeping only the first few characters.
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "<unset>".to_string();
    }
    let visible: String = secret.chars().take(4).collect();
    format!("{}…", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pdf_url() {
        assert!(is_pdf_url("https://host/doc.pdf"));
        assert!(is_pdf_url("https://host/DOC.PDF?download=1"));
        assert!(!is_pdf_url("https://youtu.be/j5ihSZjRxy4"));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some("true")));
        assert!(parse_flag(Some(" YES ")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(None));
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "<unset>");
        assert_eq!(mask_secret("service_19p2axp"), "serv…");
    }
}
