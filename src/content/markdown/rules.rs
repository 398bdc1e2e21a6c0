//! Ordered rewrite rules
//!
//! Conversion runs in four stages over one string:
//!
//! 1. Extraction. Fenced blocks, then inline spans, are escaped and
//!    swapped for placeholders, then link and image targets are. No later
//!    stage can see their contents, so `*` in a URL stays a `*`.
//! 2. Line rules (headings, blockquotes, list items). They anchor on line
//!    starts, so they run while the text is still raw Markdown. Headings
//!    go `###`, `##`, `#`.
//! 3. Inline rules. `***` before `**` before `*`; images before links,
//!    otherwise the link rule would eat the `[alt](src)` of an image.
//! 4. Paragraph assembly on blank lines, then placeholders are restored.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// A single pattern-to-replacement step
pub struct Rule {
    /// Short identifier, stable across releases
    pub name: &'static str,
    pub pattern: Regex,
    /// Replacement template using `${n}` capture references
    pub replacement: &'static str,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("built-in rule pattern"),
            replacement,
        }
    }

    /// Apply this rule to every match in `text`
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement)
            .into_owned()
    }
}

lazy_static! {
    static ref RULES: Vec<Rule> = vec![
        Rule::new("h3", r"(?m)^### (.*)$", "<h3>${1}</h3>"),
        Rule::new("h2", r"(?m)^## (.*)$", "<h2>${1}</h2>"),
        Rule::new("h1", r"(?m)^# (.*)$", "<h1>${1}</h1>"),
        Rule::new(
            "blockquote",
            r"(?m)^> (.*)$",
            "<blockquote>${1}</blockquote>"
        ),
        // Ordered and unordered items collapse into the same element.
        Rule::new("bullet_item", r"(?m)^[*-] (.*)$", "<li>${1}</li>"),
        Rule::new("numbered_item", r"(?m)^\d+\. (.*)$", "<li>${1}</li>"),
        Rule::new(
            "bold_italic",
            r"\*\*\*([^*\n]+?)\*\*\*",
            "<strong><em>${1}</em></strong>"
        ),
        Rule::new("bold", r"\*\*(.+?)\*\*", "<strong>${1}</strong>"),
        Rule::new("italic", r"\*([^*\n]+?)\*", "<em>${1}</em>"),
        Rule::new(
            "image",
            r"!\[([^\]]*)\]\(([^)]+)\)",
            r#"<img src="${2}" alt="${1}">"#
        ),
        Rule::new(
            "link",
            r"\[([^\]]+)\]\(([^)]+)\)",
            r#"<a href="${2}">${1}</a>"#
        ),
    ];
    // A fence opened right after a bare line marker takes the marker with
    // it, or the marker would be left behind as an empty element.
    static ref FENCED_CODE: Regex =
        Regex::new(r"(?s)(?:(?m:^)[ \t]*(?:>|[*-]|\d+\.)[ \t]+)?```(.*?)```")
            .expect("fenced code pattern");
    static ref INLINE_CODE: Regex = Regex::new(r"`([^`\n]+)`").expect("inline code pattern");
    static ref LINK_TARGET: Regex =
        Regex::new(r"(!?\[[^\]]*\])\(([^)]+)\)").expect("link target pattern");
    static ref PLACEHOLDER: Regex = Regex::new(r"\x00(\d+)\x00").expect("placeholder pattern");
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n(?:[ \t]*\n)+").expect("paragraph pattern");
}

/// Line prefixes produced by the line rules and never wrapped in `<p>`
const BLOCK_PREFIXES: &[&str] = &["<h1>", "<h2>", "<h3>", "<blockquote>", "<li>"];

/// The rule table, in application order
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Apply every rule once, in order, and assemble paragraphs.
///
/// Total over its input: empty or blank text gives an empty string.
pub fn apply_rules(text: &str) -> String {
    let text = normalize(text);
    if text.trim().is_empty() {
        return String::new();
    }

    let mut stash = CodeStash::default();
    let text = stash.extract_fenced(&text);
    let text = stash.extract_inline(&text);
    let text = stash.extract_targets(&text);

    let text = RULES.iter().fold(text, |acc, rule| rule.apply(&acc));

    let html = assemble_paragraphs(&text, &stash);
    stash.restore(&html)
}

/// Unify line endings and drop NULs, which are reserved for placeholders
fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\0', "")
}

/// Escaped code fragments held out of the rule pipeline
#[derive(Default)]
struct CodeStash {
    fragments: Vec<Fragment>,
}

struct Fragment {
    html: String,
    block: bool,
}

impl CodeStash {
    fn push(&mut self, html: String, block: bool) -> String {
        self.fragments.push(Fragment { html, block });
        format!("\x00{}\x00", self.fragments.len() - 1)
    }

    /// Block placeholders get blank lines around them so they always
    /// end up alone in their own chunk.
    fn extract_fenced(&mut self, text: &str) -> String {
        FENCED_CODE
            .replace_all(text, |caps: &Captures| {
                let html = render_code_block(&caps[1]);
                format!("\n\n{}\n\n", self.push(html, true))
            })
            .into_owned()
    }

    fn extract_inline(&mut self, text: &str) -> String {
        INLINE_CODE
            .replace_all(text, |caps: &Captures| {
                let html = format!("<code>{}</code>", escape_code(&caps[1]));
                self.push(html, false)
            })
            .into_owned()
    }

    /// Hide the `(target)` of links and images; the link and image rules
    /// still see the `[label](...)` shape and match the placeholder.
    fn extract_targets(&mut self, text: &str) -> String {
        LINK_TARGET
            .replace_all(text, |caps: &Captures| {
                let target = self.push(caps[2].to_string(), false);
                format!("{}({})", &caps[1], target)
            })
            .into_owned()
    }

    fn is_block_placeholder(&self, line: &str) -> bool {
        PLACEHOLDER
            .captures(line.trim())
            .filter(|caps| caps[0].len() == line.trim().len())
            .and_then(|caps| caps[1].parse::<usize>().ok())
            .and_then(|i| self.fragments.get(i))
            .map(|f| f.block)
            .unwrap_or(false)
    }

    /// A link target may hold a code placeholder, so fragments are
    /// restored too. Fragments only refer to earlier ones.
    fn restore(&self, text: &str) -> String {
        PLACEHOLDER
            .replace_all(text, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| self.fragments.get(i))
                    .map(|f| self.restore(&f.html))
                    .unwrap_or_default()
            })
            .into_owned()
    }
}

/// Render the inside of a ```` ``` ```` fence.
///
/// A single word on the opening line is taken as the language.
fn render_code_block(inner: &str) -> String {
    let (lang, code) = match inner.split_once('\n') {
        Some((info, code)) => {
            let info = info.trim();
            if info.is_empty() || info.contains(char::is_whitespace) {
                (None, inner)
            } else {
                (Some(info), code)
            }
        }
        None => (None, inner),
    };
    let code = code.strip_prefix('\n').unwrap_or(code);
    let code = code.strip_suffix('\n').unwrap_or(code);

    match lang {
        Some(lang) => format!(
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            lang,
            escape_code(code)
        ),
        None => format!("<pre><code>{}</code></pre>", escape_code(code)),
    }
}

fn escape_code(code: &str) -> String {
    code.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn is_block_line(line: &str, stash: &CodeStash) -> bool {
    BLOCK_PREFIXES.iter().any(|p| line.starts_with(p)) || stash.is_block_placeholder(line)
}

/// Split on blank lines; inside each chunk, runs of ordinary lines become
/// one `<p>` and block lines pass through untouched. Empty runs emit
/// nothing, so no `<p></p>` is ever produced.
fn assemble_paragraphs(text: &str, stash: &CodeStash) -> String {
    let mut out: Vec<String> = Vec::new();

    for chunk in PARAGRAPH_BREAK.split(text) {
        let mut run: Vec<&str> = Vec::new();
        for line in chunk.lines() {
            if is_block_line(line, stash) {
                flush_paragraph(&mut run, &mut out);
                out.push(line.trim().to_string());
            } else {
                run.push(line);
            }
        }
        flush_paragraph(&mut run, &mut out);
    }

    out.join("\n")
}

fn flush_paragraph(run: &mut Vec<&str>, out: &mut Vec<String>) {
    let text = run.join("\n");
    let text = text.trim();
    if !text.is_empty() {
        out.push(format!("<p>{}</p>", text));
    }
    run.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(name: &str) -> usize {
        rules()
            .iter()
            .position(|r| r.name == name)
            .unwrap_or_else(|| panic!("missing rule {}", name))
    }

    #[test]
    fn test_rule_order() {
        assert!(position("h3") < position("h2"));
        assert!(position("h2") < position("h1"));
        assert!(position("bullet_item") < position("italic"));
        assert!(position("bold_italic") < position("bold"));
        assert!(position("bold") < position("italic"));
        assert!(position("image") < position("link"));
    }

    #[test]
    fn test_headings_do_not_preempt_each_other() {
        assert_eq!(
            apply_rules("# One\n## Two\n### Three"),
            "<h1>One</h1>\n<h2>Two</h2>\n<h3>Three</h3>"
        );
        assert_eq!(apply_rules("#### Four"), "<p>#### Four</p>");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(apply_rules(""), "");
        assert_eq!(apply_rules("\n\n  \n"), "");
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        assert_eq!(
            apply_rules("first line\nsecond line\n\n\nnext"),
            "<p>first line\nsecond line</p>\n<p>next</p>"
        );
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(
            apply_rules("**b** and *i* and ***bi***"),
            "<p><strong>b</strong> and <em>i</em> and <strong><em>bi</em></strong></p>"
        );
    }

    #[test]
    fn test_image_is_not_mistaken_for_link() {
        assert_eq!(
            apply_rules("![logo](/img/logo.png) see [docs](https://example.com)"),
            r#"<p><img src="/img/logo.png" alt="logo"> see <a href="https://example.com">docs</a></p>"#
        );
    }

    #[test]
    fn test_code_span_is_opaque() {
        assert_eq!(
            apply_rules("use `**not bold**` and `<b>`"),
            "<p>use <code>**not bold**</code> and <code>&lt;b&gt;</code></p>"
        );
    }

    #[test]
    fn test_fenced_block_with_language() {
        let html = apply_rules("Intro\n```html\n<h1># not a heading</h1>\n* not an item\n```\nOutro");
        assert_eq!(
            html,
            "<p>Intro</p>\n<pre><code class=\"language-html\">&lt;h1&gt;# not a heading&lt;/h1&gt;\n* not an item</code></pre>\n<p>Outro</p>"
        );
    }

    #[test]
    fn test_fenced_block_without_language() {
        assert_eq!(
            apply_rules("```\nlet x = `y`;\n```"),
            "<pre><code>let x = `y`;</code></pre>"
        );
    }

    #[test]
    fn test_list_marker_is_not_italic() {
        assert_eq!(
            apply_rules("* one *two*"),
            "<li>one <em>two</em></li>"
        );
    }

    #[test]
    fn test_ordered_items_use_generic_item() {
        assert_eq!(apply_rules("1. a\n2. b"), "<li>a</li>\n<li>b</li>");
    }

    #[test]
    fn test_blockquote_and_text_in_same_chunk() {
        assert_eq!(
            apply_rules("> quoted\nplain"),
            "<blockquote>quoted</blockquote>\n<p>plain</p>"
        );
    }

    #[test]
    fn test_emphasis_does_not_reach_into_urls() {
        assert_eq!(
            apply_rules("[x](http://a/*b*)"),
            r#"<p><a href="http://a/*b*">x</a></p>"#
        );
        assert_eq!(
            apply_rules("![logo](/img/*x*.png)"),
            r#"<p><img src="/img/*x*.png" alt="logo"></p>"#
        );
        assert_eq!(
            apply_rules("[**docs**](https://example.com/a_*b*)"),
            r#"<p><a href="https://example.com/a_*b*"><strong>docs</strong></a></p>"#
        );
    }

    #[test]
    fn test_code_span_inside_link_target_stays_code() {
        assert_eq!(
            apply_rules("`[x](http://a/*b*)`"),
            "<p><code>[x](http://a/*b*)</code></p>"
        );
    }

    #[test]
    fn test_code_span_in_link_target_is_restored() {
        let html = apply_rules("[a](`x`)");
        assert_eq!(html, r#"<p><a href="<code>x</code>">a</a></p>"#);
        assert!(!html.contains('\0'));
    }

    #[test]
    fn test_fence_after_line_marker_leaves_no_empty_element() {
        assert_eq!(
            apply_rules("> ```\ncode\n```"),
            "<pre><code>code</code></pre>"
        );
        assert_eq!(
            apply_rules("Intro\n- ```rust\nfn main() {}\n```\n- next"),
            "<p>Intro</p>\n<pre><code class=\"language-rust\">fn main() {}</code></pre>\n<li>next</li>"
        );
    }

    #[test]
    fn test_fence_after_text_is_still_split_out() {
        assert_eq!(
            apply_rules("see ```x``` here"),
            "<p>see</p>\n<pre><code>x</code></pre>\n<p>here</p>"
        );
    }

    #[test]
    fn test_nul_in_input_is_ignored() {
        assert_eq!(apply_rules("a\0b"), "<p>ab</p>");
    }
}
