//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped inside a path; `/` is kept as the separator
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Root-relative URL for a site path
///
/// # Examples
/// ```ignore
/// url_for("rss.xml") // -> "/rss.xml"
/// ```
pub fn url_for(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// URL path of the page listing posts for `tag`
///
/// # Examples
/// ```ignore
/// tag_path(&config, "Type Script") // -> "/tags/type-script/"
/// ```
pub fn tag_path(config: &SiteConfig, tag: &str) -> String {
    format!("{}{}/", tag_index_path(config), slug::slugify(tag))
}

/// URL path of the page listing every tag
pub fn tag_index_path(config: &SiteConfig) -> String {
    let dir = config.tag_dir.trim_matches('/');
    if dir.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", dir)
    }
}

/// Absolute URL for a site path, percent-encoding what needs it
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/hello world/") // -> "https://example.com/hello%20world/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.site_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, encode_path(path))
}

/// Encode a URL path
pub fn encode_path(path: &str) -> String {
    utf8_percent_encode(path, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site_url = "https://example.com/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        assert_eq!(url_for(""), "/");
        assert_eq!(url_for("rss.xml"), "/rss.xml");
        assert_eq!(url_for("/tags/"), "/tags/");
    }

    #[test]
    fn test_tag_path() {
        let config = test_config();
        assert_eq!(tag_path(&config, "typescript"), "/tags/typescript/");
        assert_eq!(tag_path(&config, "Type Script"), "/tags/type-script/");
        assert_eq!(tag_index_path(&config), "/tags/");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(full_url_for(&config, "/foo/"), "https://example.com/foo/");
        assert_eq!(
            full_url_for(&config, "/hello world/"),
            "https://example.com/hello%20world/"
        );
        assert_eq!(full_url_for(&config, "rss.xml"), "https://example.com/rss.xml");
    }
}
