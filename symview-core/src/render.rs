//! Preview document rendering
//!
//! Builds one self-contained HTML page per preview:
//! - a hidden `<svg>` defining every matched symbol verbatim
//! - a grid with one tile per symbol, each drawing it through `<use>`
//! - an inline script posting `{command: "copyToClipboard", text}` on click
//! - a stylesheet link (served) or inline `<style>` (standalone export)
//!
//! Rendering is pure: the same fragments and options give the same bytes.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::extract::SymbolFragment;

/// Bundled preview stylesheet
pub const STYLESHEET: &str = include_str!("../assets/index.css");

/// Command name carried by tile clicks
pub const COPY_COMMAND: &str = "copyToClipboard";

/// Label for tiles whose symbol has no usable `id`
pub const MISSING_ID_LABEL: &str = "(no id)";

/// Where clicked ids are delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBridge {
    /// POST the JSON message to this path on the preview server
    Endpoint(String),
    /// No host process: write to the browser clipboard directly
    BrowserClipboard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stylesheet {
    /// Link to a stylesheet URI (e.g. `/static/index.css`)
    Href(String),
    /// Embed [`STYLESHEET`] in the document
    Inline,
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    pub stylesheet: Stylesheet,
    pub bridge: MessageBridge,
}

impl RenderOptions {
    /// Options for a document served by the preview server
    pub fn served(source: &str, stylesheet_href: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            title: preview_title(source),
            stylesheet: Stylesheet::Href(stylesheet_href.into()),
            bridge: MessageBridge::Endpoint(endpoint.into()),
        }
    }

    /// Options for a document written to disk and opened without a server
    pub fn standalone(source: &str) -> Self {
        Self {
            title: preview_title(source),
            stylesheet: Stylesheet::Inline,
            bridge: MessageBridge::BrowserClipboard,
        }
    }
}

/// Panel title for a source
pub fn preview_title(source: &str) -> String {
    format!("Icon Preview - {}", source)
}

/// Render the full preview document
pub fn render_preview(symbols: &[SymbolFragment], options: &RenderOptions) -> String {
    let definitions: String = symbols.iter().map(|s| s.markup.as_str()).collect();
    let tiles: String = symbols.iter().map(render_tile).collect();

    let style = match &options.stylesheet {
        Stylesheet::Href(href) => format!(
            r#"<link rel="stylesheet" type="text/css" href="{}">"#,
            encode_double_quoted_attribute(href)
        ),
        Stylesheet::Inline => format!("<style>\n{}\n</style>", STYLESHEET),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    {style}
  </head>
  <body>
    <svg aria-hidden="true" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" style="position: absolute; width: 0px; height: 0px; overflow: hidden; fill: currentColor">{definitions}</svg>
    <h1 class="title">{title}</h1>
    <div class="container">{tiles}
    </div>
    <div class="toast" id="toast" hidden></div>
    <script>
{script}
    </script>
  </body>
</html>
"#,
        title = encode_text(&options.title),
        style = style,
        definitions = definitions,
        tiles = tiles,
        script = click_script(&options.bridge),
    )
}

fn render_tile(symbol: &SymbolFragment) -> String {
    match symbol.id() {
        Some(id) => {
            let attr = encode_double_quoted_attribute(id);
            format!(
                r##"
      <div class="icon-item" title="{attr}" data-id="{attr}">
        <svg><use href="#{attr}" xlink:href="#{attr}"></use></svg>
        <p>{label}</p>
      </div>"##,
                attr = attr,
                label = encode_text(id),
            )
        }
        None => format!(
            r#"
      <div class="icon-item icon-item--missing" title="{label}">
        <svg></svg>
        <p>{label}</p>
      </div>"#,
            label = MISSING_ID_LABEL,
        ),
    }
}

fn click_script(bridge: &MessageBridge) -> String {
    let send = match bridge {
        MessageBridge::Endpoint(endpoint) => {
            let endpoint = serde_json::to_string(endpoint).unwrap_or_else(|_| "\"\"".to_string());
            format!(
                r#"      function send(message) {{
        return fetch({endpoint}, {{
          method: 'POST',
          headers: {{ 'Content-Type': 'application/json' }},
          body: JSON.stringify(message)
        }}).then((res) => res.ok);
      }}"#,
                endpoint = endpoint
            )
        }
        MessageBridge::BrowserClipboard => r#"      function send(message) {
        return navigator.clipboard.writeText(message.text).then(() => true, () => false);
      }"#
        .to_string(),
    };

    format!(
        r#"{send}
      const toast = document.getElementById('toast');
      let toastTimer;
      function notify(text) {{
        toast.textContent = text;
        toast.hidden = false;
        clearTimeout(toastTimer);
        toastTimer = setTimeout(() => {{ toast.hidden = true; }}, 2000);
      }}
      document.querySelectorAll('.icon-item[data-id]').forEach((el) => el.addEventListener('click', () => {{
        const id = el.getAttribute('data-id');
        send({{ command: '{command}', text: id }}).then((ok) => {{
          notify(ok ? "Symbol ID: '" + id + "' has been copied to Clipboard!" : 'Copy failed');
        }});
      }}));"#,
        send = send,
        command = COPY_COMMAND,
    )
}
