//! The site stylesheet and its cache-busting fingerprint.
//!
//! The stylesheet is a fixed artifact shipped with every build. Its
//! filename carries a SHA-1 content fingerprint so pages can reference
//! it with a far-future cache policy.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// The design-system stylesheet shared by every page.
pub const STYLESHEET: &str = r#"
:root {
  --ink: #1f2430;
  --muted: #5b6475;
  --line: #d9dee8;
  --accent: #2457c5;
  --accent-ink: #ffffff;
  --panel: #f6f8fb;
  --code-bg: #13161d;
  --code-ink: #e8ebf2;
}

* { box-sizing: border-box; }

body {
  margin: 0 auto;
  max-width: 52rem;
  padding: 0 1.25rem 4rem;
  color: var(--ink);
  font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
  line-height: 1.6;
}

a { color: var(--accent); }

.module-header { padding: 2.5rem 0 1rem; border-bottom: 1px solid var(--line); }
.module-header h1 { margin: 0.5rem 0 0.25rem; font-size: 1.9rem; }
.module-header .summary { margin: 0; color: var(--muted); }

.badge {
  display: inline-block;
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  background: var(--accent);
  color: var(--accent-ink);
  font-size: 0.78rem;
  letter-spacing: 0.02em;
}

.badge.difficulty { background: var(--panel); color: var(--muted); border: 1px solid var(--line); }

.tab-list {
  display: flex;
  gap: 0.5rem;
  margin: 1.5rem 0 1rem;
  border-bottom: 2px solid var(--line);
}

.tab-trigger {
  padding: 0.5rem 1rem;
  color: var(--muted);
  text-decoration: none;
  border-bottom: 2px solid transparent;
  margin-bottom: -2px;
}

.tab-trigger:hover { color: var(--ink); border-bottom-color: var(--accent); }

.tab-panel { padding: 1rem 0 2rem; }
.tab-panel:target { background: var(--panel); }

.content-section { margin-bottom: 2rem; }
.content-section h2 { font-size: 1.35rem; border-bottom: 1px solid var(--line); padding-bottom: 0.3rem; }

table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--line); padding: 0.45rem 0.7rem; text-align: left; }
th { background: var(--panel); }

dl dt { font-weight: 600; margin-top: 0.6rem; }
dl dd { margin: 0 0 0.4rem 1rem; color: var(--muted); }

.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr)); gap: 0.9rem; }

.card {
  border: 1px solid var(--line);
  border-radius: 0.5rem;
  padding: 0.9rem 1.1rem;
  background: #fff;
}

.card-title { margin: 0 0 0.4rem; font-size: 1.02rem; }

.code-sample { margin: 1.2rem 0; }
.code-sample figcaption { color: var(--muted); font-size: 0.85rem; margin-bottom: 0.3rem; }

pre {
  background: var(--code-bg);
  color: var(--code-ink);
  padding: 0.9rem 1.1rem;
  border-radius: 0.5rem;
  overflow-x: auto;
  font-size: 0.88rem;
}

.exercise { margin-bottom: 1rem; }
.exercise .steps { margin: 0.6rem 0 0; padding-left: 1.4rem; }

.resource-list { list-style: none; padding: 0; }
.resource-list li { padding: 0.35rem 0; border-bottom: 1px dashed var(--line); }

.module-footer { border-top: 1px solid var(--line); padding-top: 1rem; }
.pager { display: flex; justify-content: space-between; gap: 1rem; }

.button {
  display: inline-block;
  padding: 0.5rem 1rem;
  border: 1px solid var(--line);
  border-radius: 0.4rem;
  text-decoration: none;
}

.button:hover { border-color: var(--accent); }

.module-list { list-style: none; padding: 0; }
.module-list li { padding: 0.5rem 0; border-bottom: 1px solid var(--line); }
.module-list .summary { display: block; color: var(--muted); font-size: 0.9rem; }
"#;

/// A small inline favicon so bundles are self-contained.
const FAVICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><rect width="16" height="16" rx="3" fill="#2457c5"/><path d="M4 4h8v2H4zm0 3h8v2H4zm0 3h5v2H4z" fill="#fff"/></svg>"##;

/// First 8 hex chars of the SHA-1 of the given bytes.
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = sha1_smol::Sha1::new();
    hasher.update(bytes);
    let hex = hasher.digest().to_string();
    hex[..8].to_string()
}

/// Fingerprinted stylesheet filename, e.g. `style.3c9a1f02.css`.
pub fn stylesheet_filename() -> String {
    format!("style.{}.css", fingerprint(STYLESHEET.as_bytes()))
}

/// Absolute route of the stylesheet, referenced from every page.
pub fn stylesheet_route() -> String {
    format!("/{}", stylesheet_filename())
}

/// The favicon as a `data:` URI for inlining into page heads.
pub fn favicon_data_uri() -> String {
    format!(
        "data:image/svg+xml;base64,{}",
        BASE64.encode(FAVICON_SVG.as_bytes())
    )
}
