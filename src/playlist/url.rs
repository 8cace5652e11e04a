/// Extract the playlist ID from any of the URL shapes users paste:
/// watch URLs carrying a `list` parameter, short-link URLs, and direct
/// playlist URLs. Returns the parameter value up to the next `#`, `&`
/// or `?`, or `None` when no usable parameter is present.
pub fn extract_playlist_id(url: &str) -> Option<&str> {
    for (idx, _) in url.match_indices("list=") {
        if idx == 0 {
            continue;
        }
        let preceded_by_separator = matches!(url.as_bytes()[idx - 1], b'?' | b'&');
        if !preceded_by_separator {
            continue;
        }
        let value = &url[idx + "list=".len()..];
        let end = value.find(['#', '&', '?']).unwrap_or(value.len());
        if end > 0 {
            return Some(&value[..end]);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        let url = "https://www.youtube.com/watch?v=abc123&list=PLxyz_42";
        assert_eq!(extract_playlist_id(url), Some("PLxyz_42"));
    }

    #[test]
    fn test_playlist_url() {
        let url = "https://www.youtube.com/playlist?list=PL123";
        assert_eq!(extract_playlist_id(url), Some("PL123"));
    }

    #[test]
    fn test_short_url_with_fragment() {
        let url = "https://youtu.be/abc?list=PL999#t=30";
        assert_eq!(extract_playlist_id(url), Some("PL999"));
    }

    #[test]
    fn test_id_stops_at_next_parameter() {
        let url = "https://www.youtube.com/watch?list=PL1&index=4";
        assert_eq!(extract_playlist_id(url), Some("PL1"));
    }

    #[test]
    fn test_no_list_parameter() {
        assert_eq!(extract_playlist_id("https://www.youtube.com/watch?v=abc"), None);
        assert_eq!(extract_playlist_id("not a url"), None);
    }

    #[test]
    fn test_empty_parameter_is_skipped() {
        assert_eq!(extract_playlist_id("https://example.com/?list=&x=1"), None);
    }
}
