//! List wrapping pass

const ITEM_OPEN: &str = "<li>";
const CODE_OPEN: &str = "<pre><code";
const CODE_CLOSE: &str = "</code></pre>";

/// Wrap every maximal run of `<li>` lines in a single `<ul>`.
///
/// Works line by line on converted output. Lines inside a code block are
/// never treated as items, and runs are never nested. A code block always
/// starts its own line with `<pre><code` and ends one with
/// `</code></pre>`; any other `<pre` text is left to the author.
pub fn wrap_lists(html: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    let mut in_list = false;
    let mut in_pre = false;

    for line in html.split('\n') {
        let trimmed = line.trim();
        let is_item = !in_pre && trimmed.starts_with(ITEM_OPEN);

        if !in_pre && trimmed.starts_with(CODE_OPEN) {
            in_pre = true;
        }
        if in_pre && trimmed.ends_with(CODE_CLOSE) {
            in_pre = false;
        }

        match (in_list, is_item) {
            (false, true) => {
                out.push("<ul>");
                in_list = true;
            }
            (true, false) => {
                out.push("</ul>");
                in_list = false;
            }
            _ => {}
        }
        out.push(line);
    }

    if in_list {
        out.push("</ul>");
    }

    out.join("\n")
}
