//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::content::Post;
use crate::query;
use crate::Blog;

/// Print posts or tags
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    let posts = ContentLoader::new(blog).load_posts()?;
    let lines = match content_type {
        "post" | "posts" => post_lines(&posts),
        "tag" | "tags" => tag_lines(&posts),
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    };

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

fn post_lines(posts: &[Post]) -> Vec<String> {
    let mut lines = vec![format!("Posts ({}):", posts.len())];
    lines.extend(posts.iter().map(|post| {
        format!(
            "  {} - {} [{}]",
            post.date.format("%Y-%m-%d"),
            post.display_title(),
            post.source
        )
    }));
    lines
}

fn tag_lines(posts: &[Post]) -> Vec<String> {
    let tags = query::tag_counts(posts);
    let mut lines = vec![format!("Tags ({}):", tags.len())];
    lines.extend(
        tags.iter()
            .map(|(tag, count)| format!("  {} ({})", tag, count)),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn post(slug: &str, tags: &[&str]) -> Post {
        let mut post = Post::new(slug, Local.with_ymd_and_hms(2021, 3, 4, 0, 0, 0).unwrap());
        post.source = format!("{}index.md", slug.trim_start_matches('/'));
        post.tags = tags.iter().map(|t| t.to_string()).collect();
        post
    }

    #[test]
    fn test_post_lines_fall_back_to_slug() {
        let lines = post_lines(&[post("/untitled/", &[])]);
        assert_eq!(lines[0], "Posts (1):");
        assert_eq!(lines[1], "  2021-03-04 - /untitled/ [untitled/index.md]");
    }

    #[test]
    fn test_tag_lines_most_used_first() {
        let posts = vec![post("/a/", &["cli", "rust"]), post("/b/", &["rust"])];
        assert_eq!(tag_lines(&posts), vec!["Tags (2):", "  rust (2)", "  cli (1)"]);
    }

    #[test]
    fn test_unknown_type() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert!(run(&blog, "category").is_err());
    }
}
