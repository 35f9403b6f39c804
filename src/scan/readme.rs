//! README heuristics: keyword presence per section plus structural counts.
//!
//! Counts (headings, code, links, images) are taken from the raw markup so
//! both Markdown and inline HTML contribute; keyword checks and the word
//! count run on the body text with HTML tags stripped.

use crate::types::config::ReadmeRules;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadmeSection {
    Title,
    Description,
    Installation,
    Usage,
    Api,
    Configuration,
    Testing,
    Contributing,
    License,
    Faq,
}

impl ReadmeSection {
    pub const ALL: [ReadmeSection; 10] = [
        ReadmeSection::Title,
        ReadmeSection::Description,
        ReadmeSection::Installation,
        ReadmeSection::Usage,
        ReadmeSection::Api,
        ReadmeSection::Configuration,
        ReadmeSection::Testing,
        ReadmeSection::Contributing,
        ReadmeSection::License,
        ReadmeSection::Faq,
    ];

    fn keyword_pattern(self) -> Option<&'static str> {
        match self {
            Self::Title | Self::Description => None,
            Self::Installation => Some(r"(?i)install|setup|getting started"),
            Self::Usage => Some(r"(?i)usage|example|demo"),
            Self::Api => Some(r"(?i)api|endpoint|route"),
            Self::Configuration => Some(r"(?i)config|setting|env"),
            Self::Testing => Some(r"(?i)test|spec|coverage"),
            Self::Contributing => Some(r"(?i)contribut|pull request|pr"),
            Self::License => Some(r"(?i)license|licence"),
            Self::Faq => Some(r"(?i)faq|question|troubleshoot"),
        }
    }

    fn is_present(self, body: &str, rules: &ReadmeRules) -> bool {
        match self {
            Self::Title => body.contains("# "),
            Self::Description => body.chars().count() > rules.description_min_chars,
            section => keyword_patterns()
                .get(&section)
                .map(|pattern| pattern.is_match(body))
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadmeFacts {
    pub exists: bool,
    pub sections: BTreeMap<ReadmeSection, bool>,
    pub score: u32,
    pub quality: u32,
    pub word_count: usize,
    pub heading_count: usize,
    pub code_block_count: usize,
    pub link_count: usize,
    pub image_count: usize,
    pub has_code_examples: bool,
    pub has_images: bool,
    pub has_badges: bool,
    pub has_links: bool,
}

pub fn analyze_readme(raw: &str, rules: &ReadmeRules) -> ReadmeFacts {
    if raw.trim().is_empty() {
        return ReadmeFacts::default();
    }

    let body = body_text(raw);
    let sections: BTreeMap<ReadmeSection, bool> = ReadmeSection::ALL
        .iter()
        .map(|section| (*section, section.is_present(&body, rules)))
        .collect();
    let passed = sections.values().filter(|present| **present).count() as u32;

    let word_count = body.split_whitespace().count();
    let heading_count = count_headings(raw);
    let code_block_count = count_code(raw);
    let image_count = count_images(raw);
    let link_count = count_links(raw);

    let mut quality = 0;
    if heading_count >= rules.heading_min {
        quality += rules.quality_step;
    }
    if code_block_count >= rules.code_block_min {
        quality += rules.quality_step;
    }
    if link_count >= rules.link_min {
        quality += rules.quality_step;
    }
    if word_count >= rules.word_target {
        quality += rules.quality_step;
    }
    if word_count >= rules.word_extended {
        quality += rules.quality_step;
    }

    ReadmeFacts {
        exists: true,
        sections,
        score: (passed * rules.section_points).min(100),
        quality: quality.min(100),
        word_count,
        heading_count,
        code_block_count,
        link_count,
        image_count,
        has_code_examples: code_block_count > 0,
        has_images: image_count > 0,
        has_badges: pattern(&BADGE, r"badge|status|coverage|version").is_match(&body),
        has_links: link_count > rules.links_flag_above,
    }
}

static HTML_TAG: OnceLock<Regex> = OnceLock::new();
static HEADING: OnceLock<Regex> = OnceLock::new();
static HTML_HEADING: OnceLock<Regex> = OnceLock::new();
static INLINE_CODE: OnceLock<Regex> = OnceLock::new();
static HTML_CODE: OnceLock<Regex> = OnceLock::new();
static MD_IMAGE: OnceLock<Regex> = OnceLock::new();
static HTML_IMAGE: OnceLock<Regex> = OnceLock::new();
static MD_LINK: OnceLock<Regex> = OnceLock::new();
static HTML_LINK: OnceLock<Regex> = OnceLock::new();
static BADGE: OnceLock<Regex> = OnceLock::new();

fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("readme pattern should compile"))
}

fn keyword_patterns() -> &'static BTreeMap<ReadmeSection, Regex> {
    static KEYWORDS: OnceLock<BTreeMap<ReadmeSection, Regex>> = OnceLock::new();
    KEYWORDS.get_or_init(|| {
        ReadmeSection::ALL
            .iter()
            .filter_map(|section| {
                section.keyword_pattern().map(|source| {
                    (
                        *section,
                        Regex::new(source).expect("section pattern should compile"),
                    )
                })
            })
            .collect()
    })
}

fn body_text(raw: &str) -> String {
    pattern(&HTML_TAG, r"(?s)<!--.*?-->|</?[A-Za-z][^>]*>")
        .replace_all(raw, "")
        .into_owned()
}

fn count_headings(raw: &str) -> usize {
    pattern(&HEADING, r"(?m)^ {0,3}#{1,6}(?:[ \t]|$)").find_iter(raw).count()
        + pattern(&HTML_HEADING, r"(?i)<h[1-6][\s>]")
            .find_iter(raw)
            .count()
}

/// Fenced blocks, inline spans outside fences, and HTML `<pre>`/`<code>`.
fn count_code(raw: &str) -> usize {
    let mut fence_lines = 0;
    let mut inside_fence = false;
    let mut inline_spans = 0;
    let inline = pattern(&INLINE_CODE, r"`[^`\n]+`");

    for line in raw.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            fence_lines += 1;
            inside_fence = !inside_fence;
            continue;
        }
        if !inside_fence {
            inline_spans += inline.find_iter(line).count();
        }
    }

    let fenced_blocks = (fence_lines + 1) / 2;
    let html_blocks = pattern(&HTML_CODE, r"(?i)<(?:pre|code)[\s>]")
        .find_iter(raw)
        .count();
    fenced_blocks + inline_spans + html_blocks
}

fn count_images(raw: &str) -> usize {
    pattern(&MD_IMAGE, r"!\[[^\]]*\]\([^)]*\)").find_iter(raw).count()
        + pattern(&HTML_IMAGE, r"(?i)<img[\s/>]").find_iter(raw).count()
}

fn count_links(raw: &str) -> usize {
    // The link pattern also matches the bracket part of every image.
    let markdown = pattern(&MD_LINK, r"\[[^\]]*\]\([^)]*\)")
        .find_iter(raw)
        .count()
        .saturating_sub(pattern(&MD_IMAGE, r"!\[[^\]]*\]\([^)]*\)").find_iter(raw).count());
    markdown + pattern(&HTML_LINK, r"(?i)<a\s").find_iter(raw).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ReadmeRules {
        ReadmeRules::default()
    }

    fn filler(words: usize) -> String {
        std::iter::repeat("lorem").take(words).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn empty_readme_does_not_exist() {
        let facts = analyze_readme("   \n", &rules());
        assert!(!facts.exists);
        assert_eq!(facts.score, 0);
        assert_eq!(facts.quality, 0);
    }

    #[test]
    fn structured_readme_scores_sections_and_quality() {
        let readme = format!(
            "# Title\n\n{}\n\n## Installation\n\n```sh\ncargo add thing\n```\n\n## Usage\n\nRun it.\n",
            filler(320)
        );
        let facts = analyze_readme(&readme, &rules());
        assert!(facts.exists);
        assert!(facts.sections[&ReadmeSection::Title]);
        assert!(facts.sections[&ReadmeSection::Description]);
        assert!(facts.sections[&ReadmeSection::Installation]);
        assert!(facts.sections[&ReadmeSection::Usage]);
        assert!(facts.score >= 40);
        assert_eq!(facts.heading_count, 3);
        assert_eq!(facts.code_block_count, 1);
        assert!(facts.has_code_examples);
        // headings + code block + 300 words; no links, under 500 words.
        assert_eq!(facts.quality, 60);
    }

    #[test]
    fn links_exclude_images_and_include_html_anchors() {
        let readme = "![build](https://ci/badge.svg) [docs](https://docs) [api](./API.md) \
                      <a href=\"https://x\">x</a> <img src=\"logo.png\">";
        let facts = analyze_readme(readme, &rules());
        assert_eq!(facts.image_count, 2);
        assert_eq!(facts.link_count, 3);
        assert!(facts.has_images);
        assert!(!facts.has_links);
        assert!(facts.has_badges);
    }

    #[test]
    fn badge_keywords_are_case_sensitive() {
        let shouted = analyze_readme("VERSION 2 and Status: Stable", &rules());
        assert!(!shouted.has_badges);
        let lower = analyze_readme("see the coverage report", &rules());
        assert!(lower.has_badges);
    }

    #[test]
    fn html_tags_are_stripped_before_keyword_checks() {
        let facts = analyze_readme("<p align=\"center\">hello</p>", &rules());
        assert!(!facts.sections[&ReadmeSection::Testing]);
        assert_eq!(facts.word_count, 1);
    }

    #[test]
    fn inline_code_counts_outside_fences_only() {
        let readme = "Use `cargo run` here.\n```\nlet x = `not counted`;\n```\n";
        let facts = analyze_readme(readme, &rules());
        assert_eq!(facts.code_block_count, 2);
    }

    #[test]
    fn score_is_ten_per_section() {
        let facts = analyze_readme("license", &rules());
        assert_eq!(facts.score, 10);
        assert!(facts.sections[&ReadmeSection::License]);
    }
}
