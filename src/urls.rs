//! Thumbnail path and embed URL conventions.

/// Query string every embed carries: no related videos, no title card,
/// autoplay on.
const EMBED_QUERY: &str = "rel=0&showinfo=0&autoplay=1";

const MAX_VIDEO_ID_LEN: usize = 64;

pub fn thumbnail_path(static_prefix: &str, video_id: &str) -> String {
    format!("{}/{}.jpg", static_prefix.trim_end_matches('/'), video_id)
}

pub fn embed_url(embed_base: &str, video_id: &str) -> String {
    format!(
        "{}/{}?{}",
        embed_base.trim_end_matches('/'),
        video_id,
        EMBED_QUERY
    )
}

/// Identifiers are opaque but must stay URL-safe: letters, digits, `-` and
/// `_` only. Anything else would corrupt both the thumbnail path and the
/// embed URL, so those placeholders are skipped at activation.
pub fn is_valid_video_id(video_id: &str) -> bool {
    !video_id.is_empty()
        && video_id.len() <= MAX_VIDEO_ID_LEN
        && video_id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_path_joins_prefix_id_and_extension() {
        assert_eq!(
            thumbnail_path("/static/img", "abc123"),
            "/static/img/abc123.jpg"
        );
    }

    #[test]
    fn thumbnail_path_tolerates_trailing_slash_in_prefix() {
        assert_eq!(
            thumbnail_path("/static/img/", "abc123"),
            "/static/img/abc123.jpg"
        );
    }

    #[test]
    fn embed_url_matches_template() {
        assert_eq!(
            embed_url("https://www.youtube.com/embed", "abc123"),
            "https://www.youtube.com/embed/abc123?rel=0&showinfo=0&autoplay=1"
        );
    }

    #[test]
    fn each_id_maps_to_its_own_urls() {
        for id in ["a", "b", "c"] {
            assert_eq!(
                thumbnail_path("/static/img", id),
                format!("/static/img/{id}.jpg")
            );
            assert_eq!(
                embed_url("https://www.youtube.com/embed", id),
                format!("https://www.youtube.com/embed/{id}?rel=0&showinfo=0&autoplay=1")
            );
        }
    }

    #[test]
    fn accepts_real_world_ids() {
        assert!(is_valid_video_id("dQw4w9WgXcQ"));
        assert!(is_valid_video_id("9bZkp7q19f0"));
        assert!(is_valid_video_id("a-b_c"));
    }

    #[test]
    fn rejects_empty_and_unsafe_ids() {
        assert!(!is_valid_video_id(""));
        assert!(!is_valid_video_id("abc 123"));
        assert!(!is_valid_video_id("abc/123"));
        assert!(!is_valid_video_id("abc?autoplay=1"));
        assert!(!is_valid_video_id(&"x".repeat(MAX_VIDEO_ID_LEN + 1)));
    }
}
