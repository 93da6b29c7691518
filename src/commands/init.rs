//! Initialize a new blog

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

const DEFAULT_CONFIG: &str = r#"# Site metadata
title: My Blog
description: ''
author:
  name: Your Name
  summary: who writes about things they find interesting.
site_url: http://localhost:8000/
social:
  twitter: ''
language: en

# Directories
content_dir: content/blog
assets_dir: content/assets
public_dir: public
tag_dir: tags

# Writing
date_format: MMMM DD, YYYY
excerpt_length: 140
tag_query_limit: 2000
highlight:
  enable: true
  theme: base16-ocean.dark
  line_number: false

# RSS feed
feed:
  enable: true
  path: rss.xml
"#;

/// Create the config file, content directories and a first post
pub fn init_site(target_dir: &Path) -> Result<()> {
    if target_dir.join(CONFIG_FILE).exists() {
        bail!("{:?} already contains a {}", target_dir, CONFIG_FILE);
    }

    fs::create_dir_all(target_dir.join("content/blog/hello-world"))?;
    fs::create_dir_all(target_dir.join("content/assets"))?;

    fs::write(target_dir.join(CONFIG_FILE), DEFAULT_CONFIG)?;

    let sample_post = format!(
        r#"---
title: Hello World
date: {}
description: The first post on this blog.
tags: [welcome]
---

This is your first post. Edit it in `content/blog/hello-world/index.md`.

## Writing

Create another post with:

```bash
$ markblog new "My Second Post" --tags welcome,notes
```

## Previewing

```bash
$ markblog server
```
"#,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    fs::write(
        target_dir.join("content/blog/hello-world/index.md"),
        sample_post,
    )?;

    tracing::debug!("Initialized site layout in {:?}", target_dir);
    Ok(())
}
