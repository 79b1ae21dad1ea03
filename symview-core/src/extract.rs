use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// `<symbol ...>` opening tag (group 1), lazy body, `</symbol>` close.
/// Dot matches newlines so multi-line symbols are found; nesting is not validated.
static SYMBOL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)(<symbol(?:\s[^>]*)?>).*?</symbol>").expect("symbol regex")
});

/// `id` attribute inside an opening tag. The leading whitespace keeps
/// `data-id` and similar attributes from matching.
static ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\sid\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("symbol id regex")
});

/// One matched `<symbol>…</symbol>` span
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolFragment {
    /// Value of the `id` attribute; `None` when absent or empty
    pub id: Option<String>,
    /// The full matched markup, re-emitted verbatim
    pub markup: String,
    /// Byte offset of the match in the source text
    pub offset: usize,
}

impl SymbolFragment {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Extract every symbol fragment from `input`, in document order
pub fn extract_symbols(input: &str) -> Vec<SymbolFragment> {
    SYMBOL_RE
        .captures_iter(input)
        .filter_map(|capture| {
            let whole = capture.get(0)?;
            let open_tag = capture.get(1)?.as_str();
            Some(SymbolFragment {
                id: symbol_id(open_tag),
                markup: whole.as_str().to_string(),
                offset: whole.start(),
            })
        })
        .collect()
}

/// Read the `id` attribute from a `<symbol ...>` opening tag
pub fn symbol_id(open_tag: &str) -> Option<String> {
    let capture = ID_RE.captures(open_tag)?;
    capture
        .get(1)
        .or_else(|| capture.get(2))
        .map(|m| m.as_str().to_string())
        .filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_fragments_in_document_order() {
        let input = r#"<symbol id="home">...</symbol><symbol id="cart">...</symbol>"#;
        let symbols = extract_symbols(input);

        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].id(), Some("home"));
        assert_eq!(symbols[1].id(), Some("cart"));
        assert_eq!(symbols[0].markup, r#"<symbol id="home">...</symbol>"#);
        assert_eq!(symbols[0].offset, 0);
        assert_eq!(symbols[1].offset, symbols[0].markup.len());
    }

    #[test]
    fn finds_symbols_embedded_in_script_source() {
        let input = r#"
window._iconfont_svg_string_ = '<svg><symbol id="icon-add" viewBox="0 0 1024 1024"><path d="M1 1z"></path></symbol><symbol id="icon-del" viewBox="0 0 1024 1024"><path d="M2 2z"></path></symbol></svg>';
"#;
        let ids: Vec<_> = extract_symbols(input)
            .iter()
            .map(|s| s.id.clone().unwrap())
            .collect();
        assert_eq!(ids, vec!["icon-add", "icon-del"]);
    }

    #[test]
    fn multiline_symbols_match() {
        let input = "<svg>\n  <symbol id=\"a\" viewBox=\"0 0 24 24\">\n    <path d=\"M0 0h24\"/>\n  </symbol>\n</svg>";
        let symbols = extract_symbols(input);

        assert_eq!(symbols.len(), 1);
        assert!(symbols[0].markup.starts_with("<symbol id=\"a\""));
        assert!(symbols[0].markup.ends_with("</symbol>"));
    }

    #[test]
    fn no_symbols_yields_empty() {
        assert!(extract_symbols("").is_empty());
        assert!(extract_symbols("<svg><path d=\"M0 0\"/></svg>").is_empty());
        assert!(extract_symbols("<symbolic id=\"x\"></symbolic>").is_empty());
        assert!(extract_symbols("<symbol id=\"open\">never closed").is_empty());
    }

    #[test]
    fn matching_is_lazy() {
        let input = "<symbol id=\"a\">1</symbol> text <symbol id=\"b\">2</symbol>";
        let symbols = extract_symbols(input);
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].markup, "<symbol id=\"a\">1</symbol>");
    }

    #[test]
    fn id_is_read_from_opening_tag_only() {
        let input = "<symbol viewBox=\"0 0 1 1\"><use id=\"inner\"/></symbol>";
        let symbols = extract_symbols(input);
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].id, None);
    }

    #[test]
    fn id_attribute_forms() {
        assert_eq!(symbol_id("<symbol id=\"x\">"), Some("x".to_string()));
        assert_eq!(symbol_id("<symbol viewBox=\"0 0 1 1\" id='y'>"), Some("y".to_string()));
        assert_eq!(symbol_id("<symbol\n  id = \"z\">"), Some("z".to_string()));
        assert_eq!(symbol_id("<symbol data-id=\"nope\">"), None);
        assert_eq!(symbol_id("<symbol id=\"\">"), None);
        assert_eq!(symbol_id("<symbol>"), None);
    }

    #[test]
    fn id_whitespace_is_kept_verbatim() {
        // Tiles reference the id exactly as written
        assert_eq!(symbol_id("<symbol id=\" x \">"), Some(" x ".to_string()));
        let symbols = extract_symbols("<symbol id=\" x \"></symbol>");
        assert_eq!(symbols[0].id(), Some(" x "));
    }

    #[test]
    fn bare_symbol_tag_matches() {
        let symbols = extract_symbols("<symbol><path/></symbol>");
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].id(), None);
    }
}
