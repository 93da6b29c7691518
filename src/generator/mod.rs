//! Generator module - writes the static site using the built-in templates

mod feed;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::components::{HomePage, Layout, PostPage, TagIndex, TagsPage};
use crate::content::loader::is_markdown_file;
use crate::content::Post;
use crate::helpers::{tag_index_path, tag_path};
use crate::query::{self, TagPageContext};
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Counts of what a build wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub posts: usize,
    pub tags: usize,
    pub assets: usize,
    pub feed: bool,
}

/// A tag that gets its own listing page
struct TagRoute {
    ctx: TagPageContext,
    location: String,
    count: usize,
}

/// Static site generator
pub struct Generator<'a> {
    blog: &'a Blog,
    renderer: TemplateRenderer,
}

impl<'a> Generator<'a> {
    pub fn new(blog: &'a Blog) -> Result<Self> {
        Ok(Self {
            blog,
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Generate the entire site from already loaded posts
    pub fn generate(&self, posts: &[Post]) -> Result<BuildSummary> {
        fs::create_dir_all(&self.blog.public_dir)?;

        let mut summary = BuildSummary {
            assets: self.copy_assets()?,
            ..Default::default()
        };

        let mut sorted: Vec<Post> = posts.to_vec();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));

        let tags = self.tag_routes(&sorted)?;

        self.generate_home(&sorted)?;
        summary.posts = self.generate_post_pages(&sorted, &tags)?;
        summary.tags = self.generate_tag_pages(&sorted, &tags)?;
        self.generate_tag_index(&tags)?;

        if self.blog.config.feed.enable {
            let xml = feed::rss(&self.blog.config, &sorted);
            self.write_page(&self.blog.config.feed.path, &xml)?;
            tracing::info!("Generated {}", self.blog.config.feed.path);
            summary.feed = true;
        }

        Ok(summary)
    }

    fn generate_home(&self, posts: &[Post]) -> Result<()> {
        let config = &self.blog.config;
        let collection = query::all_posts(posts, &config.date_format);
        let layout = Layout::new(config, "/", None);
        let html = HomePage::new(config, &collection).render(&layout, &self.renderer)?;
        self.write_page("index.html", &html)
    }

    /// Posts never replace the home page, the tag index or a tag page
    fn generate_post_pages(&self, sorted: &[Post], tags: &[TagRoute]) -> Result<usize> {
        let config = &self.blog.config;

        let mut reserved: HashSet<String> = tags.iter().map(|t| index_file(&t.location)).collect();
        reserved.insert(index_file("/"));
        reserved.insert(index_file(&tag_index_path(config)));

        let mut written = 0;
        for (index, post) in sorted.iter().enumerate() {
            let file = index_file(&post.slug);
            if reserved.contains(&file) {
                tracing::warn!(
                    "Skipping {}: slug {} is a generated page",
                    post.source,
                    post.slug
                );
                continue;
            }
            let page = PostPage::new(config, sorted, index);
            let summary = post
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(&post.excerpt);
            let layout =
                Layout::new(config, &post.slug, Some(&page.title)).with_description(summary);
            let html = page
                .render(&layout, &self.renderer)
                .with_context(|| format!("rendering {}", post.source))?;
            self.write_page(&file, &html)?;
            self.copy_linked_files(post)?;
            written += 1;
        }

        tracing::info!("Generated {} post pages", written);
        Ok(written)
    }

    /// Distinct tags with the route each one is listed at, most used first.
    ///
    /// A tag whose route is already taken by a more used tag, or that would
    /// land on the tag index itself, gets no page.
    fn tag_routes(&self, posts: &[Post]) -> Result<Vec<TagRoute>> {
        let config = &self.blog.config;
        let index_file_path = index_file(&tag_index_path(config));

        let mut taken = HashSet::new();
        let mut routes = Vec::new();
        for (tag, count) in query::tag_counts(posts) {
            let ctx = TagPageContext::new(tag)?;
            let location = tag_path(config, ctx.tag());
            let file = index_file(&location);
            if file == index_file_path || !taken.insert(file) {
                tracing::warn!("Skipping tag {:?}: {} is already taken", ctx.tag(), location);
                continue;
            }
            routes.push(TagRoute {
                ctx,
                location,
                count,
            });
        }

        Ok(routes)
    }

    fn generate_tag_pages(&self, posts: &[Post], tags: &[TagRoute]) -> Result<usize> {
        let config = &self.blog.config;
        let index_path = tag_index_path(config);

        for route in tags {
            let ctx = &route.ctx;
            let collection =
                query::posts_by_tag(posts, ctx, &config.date_format, config.tag_query_limit);
            let layout = Layout::new(config, &route.location, Some(ctx.tag()));
            let html = TagsPage::new(ctx, &collection, &index_path)
                .render(&layout, &self.renderer)?;

            tracing::debug!("Tag {:?}: {} posts", ctx.tag(), collection.total_count());
            self.write_page(&index_file(&route.location), &html)?;
        }

        tracing::info!("Generated {} tag pages", tags.len());
        Ok(tags.len())
    }

    fn generate_tag_index(&self, tags: &[TagRoute]) -> Result<()> {
        let config = &self.blog.config;
        let location = tag_index_path(config);
        let layout = Layout::new(config, &location, Some("Tags"));
        let counts: Vec<(String, usize)> = tags
            .iter()
            .map(|t| (t.ctx.tag().to_string(), t.count))
            .collect();
        let html = TagIndex::new(config, &counts).render(&layout, &self.renderer)?;
        self.write_page(&index_file(&location), &html)
    }

    /// Copy the assets directory into the public root
    fn copy_assets(&self) -> Result<usize> {
        let assets_dir = &self.blog.assets_dir;
        if !assets_dir.exists() {
            return Ok(0);
        }

        let mut copied = 0;
        for entry in WalkDir::new(assets_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let relative = entry.path().strip_prefix(assets_dir)?;
            copy_file(entry.path(), &self.blog.public_dir.join(relative))?;
            copied += 1;
        }

        tracing::debug!("Copied {} asset files", copied);
        Ok(copied)
    }

    /// Copy non-markdown files living next to a post into its output directory
    fn copy_linked_files(&self, post: &Post) -> Result<()> {
        let Some(dir) = post.full_source.parent() else {
            return Ok(());
        };
        // Only posts that own their directory (`slug/index.md`)
        if post.full_source.file_stem().and_then(|s| s.to_str()) != Some("index")
            || dir == self.blog.content_dir.as_path()
        {
            return Ok(());
        }

        let target = self.blog.public_dir.join(post.slug.trim_matches('/'));
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && !is_markdown_file(&path) {
                if let Some(name) = path.file_name() {
                    copy_file(&path, &target.join(name))?;
                }
            }
        }

        Ok(())
    }

    /// Write `content` to a path relative to the public directory
    fn write_page(&self, relative: &str, content: &str) -> Result<()> {
        let output_path = self.blog.public_dir.join(relative.trim_start_matches('/'));
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, content)
            .with_context(|| format!("writing {}", output_path.display()))?;
        Ok(())
    }
}

/// `/foo/` -> `foo/index.html`, `/` -> `index.html`
fn index_file(route: &str) -> String {
    let route = route.trim_matches('/');
    if route.is_empty() {
        "index.html".to_string()
    } else {
        format!("{}/index.html", route)
    }
}

fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(from, to).with_context(|| format!("copying {}", from.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::ContentLoader;

    fn write(base: &Path, relative: &str, content: &str) {
        let path = base.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn build(base: &Path) -> (Blog, BuildSummary) {
        let blog = Blog::new(base).unwrap();
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        let summary = Generator::new(&blog).unwrap().generate(&posts).unwrap();
        (blog, summary)
    }

    #[test]
    fn test_index_file() {
        assert_eq!(index_file("/"), "index.html");
        assert_eq!(index_file("/foo/"), "foo/index.html");
        assert_eq!(index_file("/tags/rust/"), "tags/rust/index.html");
    }

    #[test]
    fn test_full_build() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "_config.yml", "title: Test Blog\nsite_url: https://example.com/\n");
        write(
            dir.path(),
            "content/blog/a/index.md",
            "---\ntitle: A\ndate: 2020-07-01\ntags: [typescript]\n---\nAx",
        );
        write(dir.path(), "content/blog/a/diagram.png", "png");
        write(
            dir.path(),
            "content/blog/b/index.md",
            "---\ntitle: B\ndate: 2020-07-02\ndescription: Bd\ntags: [typescript, rust]\n---\nBody",
        );
        write(dir.path(), "content/assets/icon.png", "icon");

        let (blog, summary) = build(dir.path());
        assert_eq!(
            summary,
            BuildSummary {
                posts: 2,
                tags: 2,
                assets: 1,
                feed: true
            }
        );

        let public = &blog.public_dir;
        for file in [
            "index.html",
            "a/index.html",
            "a/diagram.png",
            "b/index.html",
            "tags/index.html",
            "tags/rust/index.html",
            "icon.png",
            "rss.xml",
        ] {
            assert!(public.join(file).exists(), "missing {}", file);
        }

        let tag_page = fs::read_to_string(public.join("tags/typescript/index.html")).unwrap();
        assert!(tag_page.contains("2 posts for tag \"typescript\""));
        let b = tag_page.find(r#"href="/b/""#).unwrap();
        let a = tag_page.find(r#"href="/a/""#).unwrap();
        assert!(b < a, "newest post first");
        assert!(tag_page.contains("<p>Bd</p>"));
        assert!(tag_page.contains("<p>Ax</p>"));

        let rust_page = fs::read_to_string(public.join("tags/rust/index.html")).unwrap();
        assert!(rust_page.contains("1 post for tag \"rust\""));
    }

    #[test]
    fn test_colliding_tag_urls_keep_most_used() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "content/blog/a.md", "---\ntitle: A\ntags: [rust, \"++\"]\n---\nA");
        write(dir.path(), "content/blog/b.md", "---\ntitle: B\ntags: [rust, Rust]\n---\nB");

        let (blog, summary) = build(dir.path());
        assert_eq!(summary.tags, 1);
        let rust_page = fs::read_to_string(blog.public_dir.join("tags/rust/index.html")).unwrap();
        assert!(rust_page.contains("2 posts for tag \"rust\""));
        let index = fs::read_to_string(blog.public_dir.join("tags/index.html")).unwrap();
        assert!(index.contains("<h1>Tags</h1>"));
        assert!(index.contains(r#"<a href="/tags/rust/">rust (2)</a>"#));
        assert!(!index.contains("++"));
        assert!(!index.contains(">Rust ("));
    }

    #[test]
    fn test_post_cannot_replace_generated_pages() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "content/blog/a.md", "---\ntitle: A\ntags: [rust]\n---\nA");
        write(dir.path(), "content/blog/b.md", "---\ntitle: B\nslug: tags\n---\nB");
        write(dir.path(), "content/blog/c.md", "---\ntitle: C\nslug: tags/rust\n---\nC");
        write(dir.path(), "content/blog/d.md", "---\ntitle: D\nslug: tags/go\n---\nD");

        let (blog, summary) = build(dir.path());
        assert_eq!(summary.posts, 2);

        let index = fs::read_to_string(blog.public_dir.join("tags/index.html")).unwrap();
        assert!(index.contains("<h1>Tags</h1>"));
        let rust_page = fs::read_to_string(blog.public_dir.join("tags/rust/index.html")).unwrap();
        assert!(rust_page.contains("1 post for tag \"rust\""));
        // Not a generated route, so the post keeps it
        assert!(blog.public_dir.join("tags/go/index.html").exists());
    }

    #[test]
    fn test_excerpt_markup_is_escaped_on_listings() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "content/blog/a.md",
            "---\ntitle: A\ntags: [html]\n---\nNever write `<script>alert(1)</script>` or `</article>` here. 5 &lt; 6",
        );

        let (blog, _) = build(dir.path());
        for page in ["index.html", "tags/html/index.html"] {
            let html = fs::read_to_string(blog.public_dir.join(page)).unwrap();
            assert!(!html.contains("<script>"), "{}", page);
            assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"), "{}", page);
            assert!(html.contains("5 &lt; 6"), "{}", page);
            assert_eq!(
                html.matches("<article").count(),
                html.matches("</article>").count(),
                "{}",
                page
            );
        }
    }

    #[test]
    fn test_empty_description_falls_back_to_excerpt() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "_config.yml", "description: Site wide\n");
        write(
            dir.path(),
            "content/blog/a.md",
            "---\ntitle: A\ndescription: \"\"\n---\nOwn words",
        );

        let (blog, _) = build(dir.path());
        let html = fs::read_to_string(blog.public_dir.join("a/index.html")).unwrap();
        assert!(html.contains(r#"<meta name="description" content="Own words">"#));
        assert!(!html.contains("Site wide"));
    }

    #[test]
    fn test_feed_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "_config.yml", "feed:\n  enable: false\n");
        write(dir.path(), "content/blog/a.md", "---\ntitle: A\n---\nAx");

        let (blog, summary) = build(dir.path());
        assert!(!summary.feed);
        assert!(!blog.public_dir.join("rss.xml").exists());
        assert!(blog.public_dir.join("a/index.html").exists());
    }
}
