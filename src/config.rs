//! Page-level configuration.
//!
//! Pages can override the markup and URL conventions with a JSON block:
//! `<script type="application/json" id="lazytube-config">`. Missing fields
//! keep their defaults; anything unparsable falls back to the defaults
//! wholesale.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmbedConfig {
    /// CSS selector marking video placeholders.
    #[serde(default = "default_placeholder_selector")]
    pub placeholder_selector: String,
    /// Attribute on the placeholder holding the video identifier.
    #[serde(default = "default_embed_attr")]
    pub embed_attr: String,
    /// Prefix the thumbnail paths are built under.
    #[serde(default = "default_static_prefix")]
    pub static_prefix: String,
    /// Base URL of the player embed service.
    #[serde(default = "default_embed_base")]
    pub embed_base: String,
}

fn default_placeholder_selector() -> String {
    ".youtube".to_string()
}

fn default_embed_attr() -> String {
    "data-embed".to_string()
}

fn default_static_prefix() -> String {
    "/static/img".to_string()
}

fn default_embed_base() -> String {
    "https://www.youtube.com/embed".to_string()
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            placeholder_selector: default_placeholder_selector(),
            embed_attr: default_embed_attr(),
            static_prefix: default_static_prefix(),
            embed_base: default_embed_base(),
        }
    }
}

impl EmbedConfig {
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_conventions() {
        let cfg = EmbedConfig::default();
        assert_eq!(cfg.placeholder_selector, ".youtube");
        assert_eq!(cfg.embed_attr, "data-embed");
        assert_eq!(cfg.static_prefix, "/static/img");
        assert_eq!(cfg.embed_base, "https://www.youtube.com/embed");
    }

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(EmbedConfig::from_json("{}").unwrap(), EmbedConfig::default());
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let cfg = EmbedConfig::from_json(r#"{"static_prefix": "/cdn/thumbs"}"#).unwrap();
        assert_eq!(cfg.static_prefix, "/cdn/thumbs");
        assert_eq!(cfg.placeholder_selector, ".youtube");
        assert_eq!(cfg.embed_base, "https://www.youtube.com/embed");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let cfg = EmbedConfig::from_json(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(cfg, EmbedConfig::default());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(EmbedConfig::from_json("").is_none());
        assert!(EmbedConfig::from_json("not json").is_none());
        assert!(EmbedConfig::from_json(r#"["youtube"]"#).is_none());
    }
}
