//! YouTube URL parsing for the video block.

/// Extract the video id from a YouTube URL. Supports the watch, embed,
/// shorts and youtu.be short-link forms, with or without a scheme or
/// `www.` prefix. Anything unparseable is `None`; the caller renders
/// nothing for it.
pub fn youtube_video_id(url: &str) -> Option<String> {
    let url = url.trim();
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);

    let candidate = if let Some(tail) = rest.strip_prefix("youtu.be/") {
        tail
    } else if let Some(tail) = rest.strip_prefix("youtube.com/") {
        if let Some(query) = tail.strip_prefix("watch?") {
            query.split('&').find_map(|kv| kv.strip_prefix("v="))?
        } else if let Some(path) = tail.strip_prefix("embed/") {
            path
        } else if let Some(path) = tail.strip_prefix("shorts/") {
            path
        } else {
            return None;
        }
    } else {
        return None;
    };

    let id: String = candidate
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_watch_urls() {
        assert_eq!(
            youtube_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".into())
        );
        assert_eq!(
            youtube_video_id("https://youtube.com/watch?t=42&v=abc123"),
            Some("abc123".into())
        );
    }

    #[test]
    fn parses_short_links() {
        assert_eq!(
            youtube_video_id("https://youtu.be/abc123"),
            Some("abc123".into())
        );
        assert_eq!(
            youtube_video_id("youtu.be/abc123?t=10"),
            Some("abc123".into())
        );
    }

    #[test]
    fn parses_embed_and_shorts_paths() {
        assert_eq!(
            youtube_video_id("https://www.youtube.com/embed/xyz_89-A"),
            Some("xyz_89-A".into())
        );
        assert_eq!(
            youtube_video_id("https://www.youtube.com/shorts/s0rtId99"),
            Some("s0rtId99".into())
        );
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(youtube_video_id("not a url"), None);
        assert_eq!(youtube_video_id(""), None);
        assert_eq!(youtube_video_id("https://vimeo.com/12345"), None);
        assert_eq!(youtube_video_id("https://www.youtube.com/watch?list=PL1"), None);
        assert_eq!(youtube_video_id("https://youtu.be/"), None);
    }
}
