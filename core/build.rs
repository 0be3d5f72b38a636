use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const KINDS: &[&str] = &["cover", "intro", "article", "quote", "image", "back"];
const ALIGNMENTS: &[&str] = &["left", "center", "right"];

#[derive(Deserialize)]
struct ContentFile {
    title: Option<String>,
    pages: Vec<PageEntry>,
}

#[derive(Deserialize)]
struct PageEntry {
    id: u32,
    kind: String,
    title: Option<String>,
    subtitle: Option<String>,
    text: Option<String>,
    image_url: Option<String>,
    align: Option<String>,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=MAGAZINE_CONTENT_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let content_path = resolve_content_path(workspace_root);
    println!("cargo:rerun-if-changed={}", content_path.display());

    let contents = fs::read_to_string(&content_path).unwrap_or_else(|err| {
        panic!(
            "failed to read magazine content at {}: {err}",
            content_path.display()
        )
    });

    let content: ContentFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse magazine content at {}: {err}",
            content_path.display()
        )
    });

    if content.pages.is_empty() {
        panic!("magazine content {} has no pages", content_path.display());
    }

    validate_pages(&content.pages, &content_path);

    let title = content.title.as_deref().unwrap_or("MAGAZINE");

    let mut output = String::new();
    writeln!(
        &mut output,
        "pub const MAGAZINE_TITLE: &str = {};",
        rust_string(title)
    )
    .unwrap();
    writeln!(&mut output).unwrap();
    writeln!(&mut output, "pub const MAGAZINE_CONTENT: &[PageContent] = &[").unwrap();
    for page in &content.pages {
        write_page(&mut output, page);
    }
    writeln!(&mut output, "];").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("magazine_content.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_content_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("MAGAZINE_CONTENT_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("content/magazine.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn rust_option(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("Some({})", rust_string(value)),
        None => "None".to_string(),
    }
}

fn alignment_variant(value: Option<&str>) -> &'static str {
    match value {
        Some("center") => "Alignment::Center",
        Some("right") => "Alignment::Right",
        _ => "Alignment::Left",
    }
}

fn write_page(output: &mut String, page: &PageEntry) {
    let title = page.title.as_deref();
    let subtitle = page.subtitle.as_deref();
    let text = page.text.as_deref();
    let image_url = page.image_url.as_deref();
    match page.kind.as_str() {
        "cover" => {
            writeln!(output, "    PageContent::Cover(CoverPage {{").unwrap();
            writeln!(output, "        id: {},", page.id).unwrap();
            writeln!(output, "        title: {},", rust_string(title.unwrap_or_default())).unwrap();
            writeln!(output, "        subtitle: {},", rust_option(subtitle)).unwrap();
            writeln!(output, "        text: {},", rust_option(text)).unwrap();
            writeln!(output, "        image_url: {},", rust_option(image_url)).unwrap();
            writeln!(output, "    }}),").unwrap();
        }
        "intro" | "article" => {
            let variant = if page.kind == "intro" { "Intro" } else { "Article" };
            writeln!(output, "    PageContent::{variant}(TextPage {{").unwrap();
            writeln!(output, "        id: {},", page.id).unwrap();
            writeln!(output, "        title: {},", rust_option(title)).unwrap();
            writeln!(output, "        subtitle: {},", rust_option(subtitle)).unwrap();
            writeln!(output, "        text: {},", rust_option(text)).unwrap();
            writeln!(
                output,
                "        alignment: {},",
                alignment_variant(page.align.as_deref())
            )
            .unwrap();
            writeln!(output, "    }}),").unwrap();
        }
        "quote" => {
            writeln!(output, "    PageContent::Quote(QuotePage {{").unwrap();
            writeln!(output, "        id: {},", page.id).unwrap();
            writeln!(output, "        text: {},", rust_string(text.unwrap_or_default())).unwrap();
            writeln!(output, "        attribution: {},", rust_option(subtitle)).unwrap();
            writeln!(output, "    }}),").unwrap();
        }
        "image" => {
            writeln!(output, "    PageContent::Image(ImagePage {{").unwrap();
            writeln!(output, "        id: {},", page.id).unwrap();
            writeln!(
                output,
                "        image_url: {},",
                rust_string(image_url.unwrap_or_default())
            )
            .unwrap();
            writeln!(output, "        caption: {},", rust_option(text)).unwrap();
            writeln!(output, "    }}),").unwrap();
        }
        "back" => {
            writeln!(output, "    PageContent::Back(BackPage {{").unwrap();
            writeln!(output, "        id: {},", page.id).unwrap();
            writeln!(output, "        title: {},", rust_option(title)).unwrap();
            writeln!(output, "        text: {},", rust_option(text)).unwrap();
            writeln!(output, "        image_url: {},", rust_option(image_url)).unwrap();
            writeln!(output, "    }}),").unwrap();
        }
        other => unreachable!("kind '{other}' passed validation"),
    }
}

fn validate_pages(pages: &[PageEntry], content_path: &Path) {
    let mut ids = HashSet::new();
    let mut previous: Option<u32> = None;

    for page in pages {
        let kind = page.kind.as_str();
        if !KINDS.contains(&kind) {
            panic!(
                "page {} has unknown kind '{}' in {} (expected one of {})",
                page.id,
                page.kind,
                content_path.display(),
                KINDS.join(", ")
            );
        }
        if !ids.insert(page.id) {
            panic!(
                "duplicate page id {} in {}",
                page.id,
                content_path.display()
            );
        }
        if let Some(prev) = previous {
            if page.id <= prev {
                panic!(
                    "page id {} follows {} in {}; ids must ascend in file order",
                    page.id,
                    prev,
                    content_path.display()
                );
            }
        }
        previous = Some(page.id);

        if kind == "cover" && is_blank(page.title.as_deref()) {
            panic!(
                "cover page {} needs a title in {}",
                page.id,
                content_path.display()
            );
        }
        if kind == "quote" && is_blank(page.text.as_deref()) {
            panic!(
                "quote page {} needs text in {}",
                page.id,
                content_path.display()
            );
        }
        if kind == "image" && is_blank(page.image_url.as_deref()) {
            panic!(
                "image page {} needs an image_url in {}",
                page.id,
                content_path.display()
            );
        }
        if let Some(url) = page.image_url.as_deref() {
            if url.trim_start().starts_with("data:") {
                panic!(
                    "page {} image_url cannot be a data URL in {}",
                    page.id,
                    content_path.display()
                );
            }
        }
        if let Some(align) = page.align.as_deref() {
            if kind != "intro" && kind != "article" {
                panic!(
                    "page {} sets align but only intro and article pages are aligned in {}",
                    page.id,
                    content_path.display()
                );
            }
            if !ALIGNMENTS.contains(&align) {
                panic!(
                    "page {} has invalid align '{}' in {} (expected one of {})",
                    page.id,
                    align,
                    content_path.display(),
                    ALIGNMENTS.join(", ")
                );
            }
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map(|value| value.trim().is_empty()).unwrap_or(true)
}
