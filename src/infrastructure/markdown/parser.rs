// src/infrastructure/markdown/parser.rs
use crate::constants::HTML_ID_PREFIX;
use html_escape::encode_double_quoted_attribute;
use lazy_static::lazy_static;
use pulldown_cmark::{html, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

lazy_static! {
    // Email first so `www.user@host.tld` is an address, not a web link.
    // Trailing punctuation belongs to the sentence, not the URL.
    static ref AUTOLINK_REGEX: Regex = Regex::new(
        r#"(?P<email>[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,})|(?P<url>\b(?:https?://|www\.)[^\s<>"']*[^\s<>"'.,:;!?)\]])"#
    )
    .expect("Failed to compile autolink regex");
}

/// Markdown dialect switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Render single newlines as `<br>` instead of joining lines.
    pub line_breaks: bool,
    /// GitHub-flavoured extensions: tables, strikethrough, task lists,
    /// footnotes, blockquote alerts and bare-URL autolinks.
    pub gfm: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_breaks: true,
            gfm: true,
        }
    }
}

/// First pipeline stage: Markdown source to (untrusted) HTML.
pub trait MarkdownParser {
    fn parse(&self, markdown: &str) -> String;
}

#[derive(Debug, Clone, Default)]
pub struct CmarkParser {
    options: RenderOptions,
}

impl CmarkParser {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    fn cmark_options(&self) -> Options {
        let mut options = Options::empty();
        if self.options.gfm {
            options.insert(Options::ENABLE_TABLES);
            options.insert(Options::ENABLE_STRIKETHROUGH);
            options.insert(Options::ENABLE_TASKLISTS);
            options.insert(Options::ENABLE_FOOTNOTES);
            options.insert(Options::ENABLE_GFM);
        }
        options
    }
}

impl MarkdownParser for CmarkParser {
    fn parse(&self, markdown: &str) -> String {
        let parser = TextMergeStream::new(Parser::new_ext(markdown, self.cmark_options()));

        let mut events: Vec<Event> = Vec::new();
        // Text inside code blocks, links (Markdown or raw `<a>`) and image alt
        // text is never autolinked.
        let mut code_depth = 0usize;
        let mut link_depth = 0usize;
        let mut footnotes: HashMap<String, usize> = HashMap::new();

        for event in parser {
            match event {
                Event::SoftBreak if self.options.line_breaks => events.push(Event::HardBreak),
                Event::Start(Tag::CodeBlock(_)) => {
                    code_depth += 1;
                    events.push(event);
                }
                Event::End(TagEnd::CodeBlock) => {
                    code_depth = code_depth.saturating_sub(1);
                    events.push(event);
                }
                Event::Start(Tag::Link { .. }) | Event::Start(Tag::Image { .. }) => {
                    link_depth += 1;
                    events.push(event);
                }
                Event::End(TagEnd::Link) | Event::End(TagEnd::Image) => {
                    link_depth = link_depth.saturating_sub(1);
                    events.push(event);
                }
                Event::InlineHtml(html) => {
                    if opens_anchor(&html) {
                        link_depth += 1;
                    } else if closes_anchor(&html) {
                        link_depth = link_depth.saturating_sub(1);
                    }
                    events.push(Event::InlineHtml(html));
                }
                Event::FootnoteReference(name) => {
                    let number = footnote_number(&mut footnotes, &name);
                    events.push(Event::InlineHtml(CowStr::from(format!(
                        r##"<sup><a href="#{HTML_ID_PREFIX}{id}">{number}</a></sup>"##,
                        id = encode_double_quoted_attribute(&*name),
                    ))));
                }
                Event::Start(Tag::FootnoteDefinition(name)) => {
                    let number = footnote_number(&mut footnotes, &name);
                    events.push(Event::Html(CowStr::from(format!(
                        r#"<div id="{id}"><sup>{number}</sup>"#,
                        id = encode_double_quoted_attribute(&*name),
                    ))));
                }
                Event::End(TagEnd::FootnoteDefinition) => {
                    events.push(Event::Html(CowStr::from("</div>\n")));
                }
                Event::Text(text) if self.options.gfm && code_depth == 0 && link_depth == 0 => {
                    push_autolinked(&mut events, text);
                }
                other => events.push(other),
            }
        }

        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }
}

/// Split `text` around bare URLs, `www.` hosts and email addresses, wrapping
/// each in an autolink.
fn push_autolinked<'a>(events: &mut Vec<Event<'a>>, text: CowStr<'a>) {
    if !AUTOLINK_REGEX.is_match(&text) {
        events.push(Event::Text(text));
        return;
    }

    let mut last = 0;
    for caps in AUTOLINK_REGEX.captures_iter(&text) {
        let Some(m) = caps.get(0) else { continue };
        if m.start() > last {
            events.push(Event::Text(CowStr::from(text[last..m.start()].to_string())));
        }
        let matched = m.as_str().to_string();
        // The HTML writer adds `mailto:` for email links itself.
        let (link_type, dest_url) = if caps.name("email").is_some() {
            (LinkType::Email, matched.clone())
        } else if matched.starts_with("www.") {
            (LinkType::Autolink, format!("http://{matched}"))
        } else {
            (LinkType::Autolink, matched.clone())
        };
        events.push(Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::from(dest_url),
            title: CowStr::from(""),
            id: CowStr::from(""),
        }));
        events.push(Event::Text(CowStr::from(matched)));
        events.push(Event::End(TagEnd::Link));
        last = m.end();
    }
    if last < text.len() {
        events.push(Event::Text(CowStr::from(text[last..].to_string())));
    }
}

fn opens_anchor(html: &str) -> bool {
    html.trim_start()
        .to_ascii_lowercase()
        .strip_prefix("<a")
        .is_some_and(|rest| rest.starts_with(|c: char| c == '>' || c.is_whitespace()))
}

fn closes_anchor(html: &str) -> bool {
    html.trim_start()
        .to_ascii_lowercase()
        .strip_prefix("</a")
        .is_some_and(|rest| rest.trim_start().starts_with('>'))
}

/// Footnotes are numbered by first appearance, reference or definition.
fn footnote_number(numbers: &mut HashMap<String, usize>, name: &str) -> usize {
    let next = numbers.len() + 1;
    *numbers.entry(name.to_string()).or_insert(next)
}
