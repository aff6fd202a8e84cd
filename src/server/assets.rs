//! Embedded page served when no static `index.html` is available.

/// Built-in landing page.
pub const INDEX_HTML: &str = include_str!("index.html");
