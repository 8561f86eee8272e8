// File: ./src/render.rs
// Turns the loaded catalog into the final Markdown document
use crate::model::{Catalog, Entry};
use std::cmp::Reverse;

const ARXIV_BADGE: &str = "https://img.shields.io/badge/arXiv-Paper-b31b1b.svg";
const GITHUB_BADGE: &str = "https://img.shields.io/badge/GitHub-Repo-181717.svg?logo=github";

// Static introduction: title, description, contribution instructions,
// cross-reference link, horizontal rule.
const INTRO: &str = concat!(
    "<h1 align=\"center\">Awesome Story Visualization</h1>\n\n",
    "A curated list of resources, papers, and benchmarks focused on ",
    "**Story Visualization**.\n\n",
    "Entries are sorted by date (newest first).\n\n",
    "If you want to contribute, please edit the `citations.json` file, ",
    "run the generator script, and create a pull request.\n\n",
    "If you are looking for Storytelling, text based, take a look at ",
    "[Awesome-Story-Generation](https://github.com/yingpengma/Awesome-Story-Generation).\n\n",
    "---\n"
);

/// Markdown badges for the entry's external links, space-separated, arXiv
/// before GitHub. Empty when neither link is set.
pub fn badges(entry: &Entry) -> String {
    let mut badges = Vec::new();

    if let Some(link) = entry.arxiv_url() {
        badges.push(format!("[![arXiv]({})]({})", ARXIV_BADGE, link));
    }
    if let Some(link) = entry.github_url() {
        badges.push(format!("[![GitHub]({})]({})", GITHUB_BADGE, link));
    }

    badges.join(" ")
}

/// One formatted block: bold title, venue rendered as inline code linking
/// to the entry URL, badges, then a keywords line only when there are
/// keywords to show.
pub fn format_entry(entry: &Entry) -> String {
    let mut line = format!(
        "**{}** <br> [`{}`]({}) {}",
        entry.title,
        entry.venue,
        entry.url,
        badges(entry)
    );

    if !entry.keywords.is_empty() {
        line.push_str(&format!(" <br> _Keywords: {}_", entry.keywords.join(", ")));
    }

    line.push_str(" <br> <br> ");
    line
}

/// Renders one category section, newest first. An empty category produces
/// no output at all, not even the heading.
pub fn render_section(title: &str, entries: &[Entry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    // Decorated stable sort: the key is computed once per entry, and
    // entries sharing a date keep their input order.
    let mut ordered: Vec<&Entry> = entries.iter().collect();
    ordered.sort_by_cached_key(|entry| Reverse(entry.sort_date()));

    let mut blocks = vec![format!("## {}\n", title)];
    for entry in ordered {
        blocks.push(format_entry(entry));
    }

    let mut section = blocks.join("\n");
    section.push('\n');
    section
}

/// Assembles the full document: intro plus the three sections in fixed
/// order, regardless of key order in the source file.
pub fn render_document(catalog: &Catalog) -> String {
    [
        INTRO.to_string(),
        render_section("Papers", &catalog.papers),
        render_section("Benchmarks", &catalog.benchmarks),
        render_section("Datasets", &catalog.datasets),
    ]
    .join("\n")
}
