use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Feed, Item};

static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]").unwrap());
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((.*?)\)").unwrap());

/// Parse a markdown file into a feed, one link item per line.
pub fn parse(name: &str, content: &str) -> Feed {
    Feed {
        title: name.to_owned(),
        items: content.lines().filter_map(parse_line).collect(),
    }
}

/// Extract the link from one line.
///
/// The first `[...]` group is the title and the first `(...)` group is the
/// URL. Lines without a URL carry no link and yield nothing; a missing title
/// is kept empty.
pub fn parse_line(line: &str) -> Option<Item> {
    let url = capture(&URL, line)?;
    let title = capture(&TITLE, line).unwrap_or_default();

    Some(Item { title, url })
}

fn capture(re: &Regex, line: &str) -> Option<String> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
        .filter(|s| !s.is_empty())
}
