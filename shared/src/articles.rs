//! Presentation helpers for article content.

use chrono::{DateTime, NaiveDate};

use crate::models::Article;

const WORDS_PER_MINUTE: usize = 200;
const DEFAULT_LANGUAGE: &str = "javascript";
const DEFAULT_FILENAME: &str = "_> zsh";
const FALLBACK_FILENAME: &str = "code.js";

/// One terminal-styled code panel on the article page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Code without directive lines.
    pub code: String,
    /// Highlighting language.
    pub language: String,
    /// Name shown in the terminal title bar.
    pub filename: String,
    /// Caption above the panel; empty when none.
    pub title: String,
}

enum Directive<'a> {
    Filename(&'a str),
    Language(&'a str),
    Title(&'a str),
}

/// First `// @key: value` directive anywhere in `line`. A directive with an
/// empty value does not count.
fn directive(line: &str) -> Option<Directive<'_>> {
    line.match_indices("//")
        .find_map(|(at, marker)| directive_after(&line[at + marker.len()..]))
}

fn directive_after(rest: &str) -> Option<Directive<'_>> {
    let (key, value) = rest.trim_start().split_once(':')?;
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match key.to_ascii_lowercase().as_str() {
        "@filename" => Some(Directive::Filename(value)),
        "@language" => Some(Directive::Language(value)),
        "@title" => Some(Directive::Title(value)),
        _ => None,
    }
}

fn starts_comment(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with("//") || line.starts_with("/*")
}

/// Split an article's code text into panels.
///
/// `// @filename:`, `// @language:` and `// @title:` lines configure the
/// block being built and are not rendered. A blank line whose next non-blank
/// line is a comment closes the current block. Filename and language carry
/// over to later blocks; the title does not.
pub fn parse_code_blocks(code: &str) -> Vec<CodeBlock> {
    if code.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = code.split('\n').collect();
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut language = DEFAULT_LANGUAGE.to_string();
    let mut filename = DEFAULT_FILENAME.to_string();
    let mut title = String::new();

    for (index, line) in lines.iter().enumerate() {
        match directive(line) {
            Some(Directive::Filename(value)) => {
                filename = value.to_string();
                continue;
            },
            Some(Directive::Language(value)) => {
                language = value.to_string();
                continue;
            },
            Some(Directive::Title(value)) => {
                title = value.to_string();
                continue;
            },
            None => {},
        }

        if line.trim().is_empty() && !current.is_empty() && index + 1 < lines.len() {
            let next = lines[index + 1..].iter().find(|next| !next.trim().is_empty());
            if next.is_some_and(|next| starts_comment(next)) {
                blocks.push(CodeBlock {
                    code: current.join("\n"),
                    language: language.clone(),
                    filename: filename.clone(),
                    title: std::mem::take(&mut title),
                });
                current.clear();
                continue;
            }
        }

        current.push(line);
    }

    if !current.is_empty() {
        blocks.push(CodeBlock {
            code: current.join("\n"),
            language,
            filename,
            title,
        });
    }

    if blocks.is_empty() {
        blocks.push(CodeBlock {
            code: code.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            filename: FALLBACK_FILENAME.to_string(),
            title: String::new(),
        });
    }
    blocks
}

/// Estimated reading time label, `"N min read"`.
pub fn read_time(description: &str, code: &str) -> String {
    let words = description.split_whitespace().count() + code.split_whitespace().count();
    format!("{} min read", words.div_ceil(WORDS_PER_MINUTE))
}

/// Render an ISO timestamp as `"January 5, 2024"`. Unparseable input is
/// returned as-is.
pub fn format_date(raw: &str) -> String {
    render_date(raw, "%B %-d, %Y")
}

/// Same as [`format_date`] with an abbreviated month, for dense tables.
pub fn format_date_short(raw: &str) -> String {
    render_date(raw, "%b %-d, %Y")
}

fn render_date(raw: &str, pattern: &str) -> String {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|value| value.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format(pattern).to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Category card on the category overview page.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    /// Category name.
    pub name: String,
    /// Number of articles.
    pub count: usize,
    /// The articles, in listing order.
    pub articles: Vec<Article>,
    /// Color slot assigned in first-appearance order.
    pub palette_index: usize,
}

/// Group articles by category name. Largest groups first; equal counts keep
/// the order in which the category first appeared.
pub fn group_by_category(articles: &[Article]) -> Vec<CategorySummary> {
    let mut groups: Vec<CategorySummary> = Vec::new();
    for article in articles {
        match groups.iter_mut().find(|group| group.name == article.category) {
            Some(group) => {
                group.count += 1;
                group.articles.push(article.clone());
            },
            None => {
                let palette_index = groups.len();
                groups.push(CategorySummary {
                    name: article.category.clone(),
                    count: 1,
                    articles: vec![article.clone()],
                    palette_index,
                });
            },
        }
    }
    groups.sort_by(|left, right| right.count.cmp(&left.count));
    groups
}

/// Case-insensitive title search. An empty query keeps everything.
pub fn filter_by_title<'a>(articles: &'a [Article], query: &str) -> Vec<&'a Article> {
    let needle = query.trim().to_lowercase();
    articles
        .iter()
        .filter(|article| needle.is_empty() || article.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, category: &str) -> Article {
        Article {
            id: title.to_lowercase(),
            category: category.to_string(),
            avatar: String::new(),
            img: String::new(),
            title: title.to_string(),
            description: String::new(),
            code: String::new(),
            slug: title.to_lowercase(),
            views: 0,
            likes: 0,
            liked_by: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn directives_configure_blocks_and_are_hidden() {
        let code = "// @filename: server.js\n// @title: Setup\nconst a = 1;\n\n// next part\nconst b = 2;";
        let blocks = parse_code_blocks(code);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].filename, "server.js");
        assert_eq!(blocks[0].title, "Setup");
        assert_eq!(blocks[0].code, "const a = 1;");
        assert_eq!(blocks[1].filename, "server.js");
        assert_eq!(blocks[1].title, "");
        assert_eq!(blocks[1].code, "// next part\nconst b = 2;");
    }

    #[test]
    fn plain_code_uses_terminal_defaults() {
        let blocks = parse_code_blocks("npm install\nnpm run dev");
        assert_eq!(blocks, vec![CodeBlock {
            code: "npm install\nnpm run dev".to_string(),
            language: "javascript".to_string(),
            filename: "_> zsh".to_string(),
            title: String::new(),
        }]);
        assert!(parse_code_blocks("").is_empty());
    }

    #[test]
    fn directive_found_after_trailing_code_comment() {
        let blocks = parse_code_blocks("fetch(\"http://x\"); // @title: Setup\nlet a = 1;");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].title, "Setup");
        assert_eq!(blocks[0].code, "let a = 1;");
    }

    #[test]
    fn directive_without_value_stays_code() {
        let blocks = parse_code_blocks("// @filename:\nlet a = 1;");
        assert_eq!(blocks[0].filename, "_> zsh");
        assert_eq!(blocks[0].code, "// @filename:\nlet a = 1;");
    }

    #[test]
    fn directive_only_input_falls_back_to_single_block() {
        let blocks = parse_code_blocks("// @language: rust");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].filename, "code.js");
        assert_eq!(blocks[0].code, "// @language: rust");
    }

    #[test]
    fn read_time_rounds_up() {
        assert_eq!(read_time("", ""), "0 min read");
        assert_eq!(read_time("one two three", "x"), "1 min read");
        let long = "word ".repeat(401);
        assert_eq!(read_time(&long, ""), "3 min read");
    }

    #[test]
    fn dates_render_long_month() {
        assert_eq!(format_date("2024-01-05T10:30:00.000Z"), "January 5, 2024");
        assert_eq!(format_date("2023-11-20"), "November 20, 2023");
        assert_eq!(format_date_short("2023-11-20"), "Nov 20, 2023");
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn categories_sorted_by_size_with_stable_palette() {
        let articles = vec![
            article("A", "Rust"),
            article("B", "Web"),
            article("C", "Web"),
            article("D", "Ops"),
        ];
        let groups = group_by_category(&articles);
        let names: Vec<_> = groups.iter().map(|group| group.name.as_str()).collect();
        assert_eq!(names, vec!["Web", "Rust", "Ops"]);
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].palette_index, 1);
        assert_eq!(groups[1].palette_index, 0);
    }

    #[test]
    fn title_filter_ignores_case() {
        let articles = vec![article("Intro to Rust", "Rust"), article("CSS Grid", "Web")];
        let hits = filter_by_title(&articles, "  rUsT ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Intro to Rust");
        assert_eq!(filter_by_title(&articles, "").len(), 2);
    }
}
