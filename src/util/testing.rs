// src/util/testing.rs

use anyhow::Result;
use std::cell::{Cell, RefCell};
use std::env;
use std::rc::Rc;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::Clock;
use crate::domain::{Note, TrustedHtml};
use crate::infrastructure::markdown::{AmmoniaSanitizer, CmarkParser, HtmlSanitizer, MarkdownParser};

/// Clock under test control. Clones share the same time.
///
/// # Examples
///
/// ```
/// use mdnotes::application::Clock;
/// use mdnotes::util::testing::ManualClock;
///
/// let clock = ManualClock::new(1_000);
/// let handle = clock.clone();
/// handle.advance(5);
/// assert_eq!(clock.now_millis(), 1_005);
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    pub fn new(start_millis: i64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_millis)),
        }
    }

    pub fn set(&self, millis: i64) {
        self.now.set(millis);
    }

    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}

/// Build a note with every field given explicitly.
pub fn note(id: &str, title: &str, content: &str, last_modified: i64) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        last_modified,
    }
}

/// Real parser that counts how often it runs.
#[derive(Debug, Default)]
pub struct CountingParser {
    inner: CmarkParser,
    calls: Cell<usize>,
}

impl CountingParser {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl MarkdownParser for CountingParser {
    fn parse(&self, markdown: &str) -> String {
        self.calls.set(self.calls.get() + 1);
        self.inner.parse(markdown)
    }
}

/// Real sanitizer that counts calls and remembers its last input.
#[derive(Debug, Default)]
pub struct CountingSanitizer {
    inner: AmmoniaSanitizer,
    calls: Cell<usize>,
    last_input: RefCell<Option<String>>,
}

impl CountingSanitizer {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_input(&self) -> Option<String> {
        self.last_input.borrow().clone()
    }
}

impl HtmlSanitizer for CountingSanitizer {
    fn sanitize(&self, html: &str) -> TrustedHtml {
        self.calls.set(self.calls.get() + 1);
        *self.last_input.borrow_mut() = Some(html.to_string());
        self.inner.sanitize(html)
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // html5ever is pulled in by the sanitizer and logs every token at trace
    let noisy_modules = ["html5ever", "markup5ever", "ammonia"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
