//! Browser-dialog helpers that work on every renderer through `document::eval`.

use dioxus::prelude::*;
use serde_json::Value;

/// Escape a string so it's safe to embed inside a JS string literal (double-quoted).
pub fn js_string_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Keeps "</script>" inert if the literal ends up inside HTML
            '<' => out.push_str("\\u003c"),
            c if c < '\x20' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Ask the user to confirm. Resolves to `false` if the dialog cannot be shown.
pub async fn confirm(message: &str) -> bool {
    let js = format!("return window.confirm({});", js_string_escape(message));
    match document::eval(&js).join::<bool>().await {
        Ok(answer) => answer,
        Err(e) => {
            tracing::warn!("confirm dialog failed: {e:?}");
            false
        }
    }
}

/// Blocking alert.
pub fn alert(message: &str) {
    document::eval(&format!("window.alert({});", js_string_escape(message)));
}

/// File name for a user's data export.
pub fn export_filename(username: &str) -> String {
    let safe: String = username
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    let safe = if safe.is_empty() { "user".to_string() } else { safe };
    format!("mindvault-export-{safe}.json")
}

/// Offer `value` as a pretty-printed JSON download.
pub fn download_json(filename: &str, value: &Value) {
    let text = match serde_json::to_string_pretty(value) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Failed to serialize export: {e}");
            return;
        }
    };
    let js = format!(
        r#"(function() {{
            var blob = new Blob([{text_js}], {{ type: 'application/json' }});
            var url = URL.createObjectURL(blob);
            var a = document.createElement('a');
            a.href = url;
            a.download = {name_js};
            document.body.appendChild(a);
            a.click();
            a.remove();
            URL.revokeObjectURL(url);
        }})();"#,
        text_js = js_string_escape(&text),
        name_js = js_string_escape(filename),
    );
    document::eval(&js);
}
