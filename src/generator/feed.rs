//! RSS 2.0 feed

use chrono::Local;

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{
    absolutize_urls, date_rfc2822, escape_xml, full_url_for, strip_html, strip_invalid_xml_chars,
};

/// Build the feed for `posts`, which must already be newest first
pub fn rss(config: &SiteConfig, posts: &[Post]) -> String {
    let site_url = full_url_for(config, "");
    let limit = config.feed.limit.unwrap_or(posts.len());

    let mut feed = String::new();
    feed.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    feed.push_str(
        "<rss version=\"2.0\" xmlns:content=\"http://purl.org/rss/1.0/modules/content/\" \
         xmlns:atom=\"http://www.w3.org/2005/Atom\">\n",
    );
    feed.push_str("<channel>\n");
    feed.push_str(&format!("  <title>{}</title>\n", escape_xml(&config.title)));
    feed.push_str(&format!(
        "  <description>{}</description>\n",
        escape_xml(&config.description)
    ));
    feed.push_str(&format!("  <link>{}</link>\n", escape_xml(&site_url)));
    feed.push_str(&format!(
        "  <atom:link href=\"{}\" rel=\"self\" type=\"application/rss+xml\"/>\n",
        escape_xml(&full_url_for(config, &config.feed.path))
    ));
    feed.push_str("  <generator>markblog</generator>\n");
    feed.push_str(&format!(
        "  <lastBuildDate>{}</lastBuildDate>\n",
        date_rfc2822(&posts.first().map(|p| p.date).unwrap_or_else(Local::now))
    ));

    for post in posts.iter().take(limit) {
        let link = full_url_for(config, &post.slug);
        let summary = post
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(strip_html)
            .unwrap_or_else(|| post.excerpt.clone());
        let content = strip_invalid_xml_chars(&absolutize_urls(&post.content, &site_url));

        feed.push_str("  <item>\n");
        feed.push_str(&format!("    <title>{}</title>\n", escape_xml(post.display_title())));
        feed.push_str(&format!(
            "    <description>{}</description>\n",
            escape_xml(&summary)
        ));
        feed.push_str(&format!("    <link>{}</link>\n", escape_xml(&link)));
        feed.push_str(&format!(
            "    <guid isPermaLink=\"false\">{}</guid>\n",
            escape_xml(&link)
        ));
        feed.push_str(&format!("    <pubDate>{}</pubDate>\n", date_rfc2822(&post.date)));
        for tag in &post.tags {
            feed.push_str(&format!("    <category>{}</category>\n", escape_xml(tag)));
        }
        feed.push_str(&format!(
            "    <content:encoded><![CDATA[{}]]></content:encoded>\n",
            content.replace("]]>", "]]]]><![CDATA[>")
        ));
        feed.push_str("  </item>\n");
    }

    feed.push_str("</channel>\n</rss>\n");
    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.title = "Tom & Jerry".to_string();
        config.site_url = "https://example.com/".to_string();
        config
    }

    fn post(slug: &str, day: u32) -> Post {
        let mut post = Post::new(slug, Local.with_ymd_and_hms(2020, 7, day, 8, 0, 0).unwrap());
        post.title = Some(format!("Post {}", day));
        post.excerpt = "plain excerpt".to_string();
        post.content = r#"<p><a href="/other/">link</a></p>"#.to_string();
        post.tags = vec!["rust".to_string()];
        post
    }

    #[test]
    fn test_rss_channel_and_items() {
        let posts = vec![post("/b/", 2), post("/a/", 1)];
        let xml = rss(&config(), &posts);

        assert!(xml.contains("<title>Tom &amp; Jerry</title>"));
        assert!(xml.contains("<link>https://example.com/</link>"));
        assert!(xml.contains("<link>https://example.com/b/</link>"));
        assert!(xml.contains("<description>plain excerpt</description>"));
        assert!(xml.contains("<category>rust</category>"));
        assert!(xml.contains(r#"<a href="https://example.com/other/">link</a>"#));
        assert!(xml.find("/b/</link>").unwrap() < xml.find("/a/</link>").unwrap());
    }

    #[test]
    fn test_rss_prefers_description_as_plain_text() {
        let mut p = post("/a/", 1);
        p.description = Some("<em>Rich</em> summary".to_string());
        let xml = rss(&config(), &[p]);
        assert!(xml.contains("<description>Rich summary</description>"));
    }

    #[test]
    fn test_rss_limit() {
        let mut config = config();
        config.feed.limit = Some(1);
        let xml = rss(&config, &[post("/b/", 2), post("/a/", 1)]);
        assert_eq!(xml.matches("<item>").count(), 1);
    }
}
