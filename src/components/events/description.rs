use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Gyazo share link, optionally written as `@https://gyazo.com/<id>`
    static ref SCREENSHOT_LINK: Regex =
        Regex::new(r"@?https://gyazo\.com/([0-9A-Za-z]+)").expect("screenshot pattern is valid");
}

/// Marker that starts a tag-declaration line
const TAG_MARKER: char = '#';

/// A description split into visible text, tags and screenshot link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDescription {
    pub text: String,
    pub tags: Vec<String>,
    pub screenshot_url: Option<String>,
}

/// Split a raw event description into its visible text, tags and screenshot.
///
/// Tag lines (first non-whitespace character is `#`) contribute every
/// non-empty `#`-separated segment as a tag and are dropped. Lines containing
/// a screenshot link are dropped too; only the first link is kept, rewritten
/// to its direct image URL.
pub fn parse_description(raw: &str) -> ParsedDescription {
    let mut parsed = ParsedDescription::default();
    let mut kept = Vec::new();

    for line in raw.lines() {
        if let Some(url) = screenshot_image_url(line) {
            if parsed.screenshot_url.is_none() {
                parsed.screenshot_url = Some(url);
            }
            continue;
        }

        if is_tag_line(line) {
            parsed.tags.extend(tags_from_line(line));
            continue;
        }

        kept.push(line);
    }

    parsed.text = kept.join("\n").trim().to_string();
    parsed
}

/// Direct image URL for the first screenshot link in `line`, if any
pub fn screenshot_image_url(line: &str) -> Option<String> {
    SCREENSHOT_LINK
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|id| format!("https://i.gyazo.com/{}.png", id.as_str()))
}

fn is_tag_line(line: &str) -> bool {
    line.trim_start().starts_with(TAG_MARKER)
}

fn tags_from_line(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(TAG_MARKER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}
