use once_cell::sync::Lazy;
use regex::Regex;

// `[0-9]` rather than `\d`: only ASCII numerals open a point.
static BOLD_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)\.\s*\*\*(.*?)\*\*:\s*(.*)").expect("valid bold heading regex")
});
static PLAIN_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)\.\s*([^:]+):\s*(.*)").expect("valid plain heading regex")
});

/// The three captures of a numbered heading line, borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingMatch<'a> {
    pub number: &'a str,
    pub title: &'a str,
    pub detail: &'a str,
}

pub trait HeadingMatcher {
    fn match_heading<'a>(&self, line: &'a str) -> Option<HeadingMatch<'a>>;
}

pub type BoxedMatcher = Box<dyn HeadingMatcher + Send + Sync>;

/// `1. **Title**: detail`
#[derive(Debug, Default, Clone, Copy)]
pub struct BoldHeading;

impl HeadingMatcher for BoldHeading {
    fn match_heading<'a>(&self, line: &'a str) -> Option<HeadingMatch<'a>> {
        captures_to_match(&BOLD_HEADING_RE, line)
    }
}

/// `1. Title: detail`
///
/// The title runs up to the first colon and is kept verbatim, stray markers included.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainHeading;

impl HeadingMatcher for PlainHeading {
    fn match_heading<'a>(&self, line: &'a str) -> Option<HeadingMatch<'a>> {
        captures_to_match(&PLAIN_HEADING_RE, line)
    }
}

fn captures_to_match<'a>(re: &Regex, line: &'a str) -> Option<HeadingMatch<'a>> {
    let caps = re.captures(line)?;
    Some(HeadingMatch {
        number: caps.get(1)?.as_str(),
        title: caps.get(2)?.as_str(),
        detail: caps.get(3)?.as_str(),
    })
}

/// Default priority: bold before plain.
pub fn default_matchers() -> Vec<BoxedMatcher> {
    vec![Box::new(BoldHeading) as BoxedMatcher, Box::new(PlainHeading)]
}
