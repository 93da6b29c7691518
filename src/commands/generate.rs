//! Generate static files

use anyhow::Result;
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebouncedEvent};
use std::path::Path;
use std::time::Duration;

use crate::content::loader::ContentLoader;
use crate::generator::{BuildSummary, Generator};
use crate::Blog;

/// Load every post and write the full site
pub fn run(blog: &Blog) -> Result<()> {
    build(blog).map(|_| ())
}

/// Same as [`run`], returning what was written
pub fn build(blog: &Blog) -> Result<BuildSummary> {
    let start = std::time::Instant::now();

    let posts = ContentLoader::new(blog).load_posts()?;
    tracing::info!("Loaded {} posts", posts.len());

    let summary = Generator::new(blog)?.generate(&posts)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} posts, {} tag pages and {} assets in {:.2}s",
        summary.posts,
        summary.tags,
        summary.assets,
        duration.as_secs_f64()
    );

    Ok(summary)
}

/// Watch for file changes and regenerate until interrupted
pub async fn watch(blog: &Blog) -> Result<()> {
    let blog = blog.clone();
    // The debouncer hands events over a std channel, so keep it off the runtime
    tokio::task::spawn_blocking(move || watch_blocking(&blog, || {})).await?
}

/// Rebuild after every debounced batch of relevant changes.
///
/// `on_rebuild` runs after each successful rebuild. Returns when the
/// watcher shuts down.
pub fn watch_blocking(blog: &Blog, mut on_rebuild: impl FnMut()) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    for dir in [&blog.content_dir, &blog.assets_dir] {
        if dir.exists() {
            debouncer.watcher().watch(dir, RecursiveMode::Recursive)?;
            tracing::debug!("Watching: {:?}", dir);
        }
    }
    let config_path = blog.config_path();
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    for result in rx {
        match result {
            Ok(events) => {
                let changed = changed_paths(&events);
                if changed.is_empty() {
                    continue;
                }
                for path in &changed {
                    tracing::info!("File changed: {}", path.display());
                }

                match reload(blog) {
                    Ok(()) => on_rebuild(),
                    Err(e) => tracing::error!("Generation failed: {:#}", e),
                }
            }
            Err(e) => tracing::error!("Watch error: {:?}", e),
        }
    }

    tracing::debug!("Watcher channel closed");
    Ok(())
}

fn changed_paths(events: &[DebouncedEvent]) -> Vec<&Path> {
    events
        .iter()
        .map(|e| e.path.as_path())
        .filter(|p| is_relevant(p))
        .collect()
}

/// Editor droppings and VCS internals never trigger a rebuild
fn is_relevant(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    !path_str.contains(".git")
        && !path_str.contains(".DS_Store")
        && !path_str.ends_with('~')
        && !path_str.ends_with(".swp")
}

/// Rebuild with a freshly read config, so `_config.yml` edits take effect
pub fn reload(blog: &Blog) -> Result<()> {
    let blog = Blog::new(&blog.base_dir)?;
    run(&blog)
}
