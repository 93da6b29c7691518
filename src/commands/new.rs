//! Create a new post

use anyhow::{bail, Result};
use std::fs;
use std::path::PathBuf;

use crate::Blog;

/// Write `<content_dir>/<slug>/index.md` with front-matter filled in
pub fn create_post(
    blog: &Blog,
    title: &str,
    tags: &[String],
    description: Option<&str>,
) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        bail!("Cannot derive a slug from title {:?}", title);
    }

    let post_dir = blog.content_dir.join(&slug);
    let file_path = post_dir.join("index.md");
    if file_path.exists() {
        bail!("File already exists: {:?}", file_path);
    }

    let mut front_matter = format!(
        "---\ntitle: {}\ndate: {}\n",
        yaml_string(title),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    if let Some(description) = description {
        front_matter.push_str(&format!("description: {}\n", yaml_string(description)));
    }
    if !tags.is_empty() {
        let tags: Vec<String> = tags.iter().map(|t| yaml_string(t)).collect();
        front_matter.push_str(&format!("tags: [{}]\n", tags.join(", ")));
    }
    front_matter.push_str("---\n\n");

    fs::create_dir_all(&post_dir)?;
    fs::write(&file_path, front_matter)?;

    tracing::info!("Created {:?}", file_path);
    Ok(file_path)
}

/// Double-quoted YAML scalar
fn yaml_string(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
