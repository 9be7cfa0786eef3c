//! Candidate extraction from provider result pages.
//!
//! Provider markup changes without notice, so extraction is driven by a
//! [`RuleTable`] of CSS selectors tried in priority order:
//!
//! 1. Container strategies locate result blocks. The first strategy that
//!    matches at least one block is used on its own; later strategies are
//!    not consulted and results are never merged across strategies.
//! 2. Inside each block, title, link and snippet each have their own ordered
//!    field strategies. The first one yielding a non-empty value wins.
//!
//! A block produces a [`SearchResult`] only when both title and link are
//! non-empty. Markup that matches no container yields an empty list.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::ScanError;
use crate::types::SearchResult;

/// Where a field strategy reads its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// Concatenated text content of the element.
    Text,
    /// Value of the named attribute.
    Attr(&'static str),
}

/// Uncompiled extraction strategies, in priority order.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    /// Selectors for result blocks.
    pub containers: &'static [&'static str],
    /// Strategies for the result title.
    pub title: &'static [(&'static str, FieldSource)],
    /// Strategies for the result link.
    pub link: &'static [(&'static str, FieldSource)],
    /// Strategies for the result snippet.
    pub snippet: &'static [(&'static str, FieldSource)],
}

/// Strategies for Google's organic result markup, oldest layouts last.
pub const GOOGLE_RULES: RuleTable = RuleTable {
    containers: &["div.g", "div.tF2Cxc", "div.yuRUbf"],
    title: &[
        ("h3", FieldSource::Text),
        ("h2", FieldSource::Text),
        ("a.LC20lb", FieldSource::Text),
        ("span.LC20lb", FieldSource::Text),
    ],
    link: &[("a[href]", FieldSource::Attr("href"))],
    snippet: &[
        ("span.aCOpRe", FieldSource::Text),
        ("div.VwiC3b", FieldSource::Text),
        ("span.st", FieldSource::Text),
        ("div.s3v9rd", FieldSource::Text),
    ],
};

#[derive(Debug)]
struct FieldStrategy {
    selector: Selector,
    source: FieldSource,
}

impl FieldStrategy {
    /// Read the first element matched by this strategy within `block`.
    fn read(&self, block: ElementRef<'_>) -> Option<String> {
        let element = block.select(&self.selector).next()?;
        let value = match self.source {
            FieldSource::Text => collapse_whitespace(&element.text().collect::<String>()),
            FieldSource::Attr(name) => element.value().attr(name)?.trim().to_owned(),
        };
        (!value.is_empty()).then_some(value)
    }
}

/// Compiled form of a [`RuleTable`].
#[derive(Debug)]
struct ExtractionRules {
    containers: Vec<Selector>,
    title: Vec<FieldStrategy>,
    link: Vec<FieldStrategy>,
    snippet: Vec<FieldStrategy>,
}

impl ExtractionRules {
    fn compile(table: &RuleTable) -> Result<Self, ScanError> {
        let containers = table
            .containers
            .iter()
            .map(|css| parse_selector(css))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            containers,
            title: compile_fields(table.title)?,
            link: compile_fields(table.link)?,
            snippet: compile_fields(table.snippet)?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector, ScanError> {
    Selector::parse(css).map_err(|e| ScanError::Parse(format!("invalid selector {css:?}: {e:?}")))
}

fn compile_fields(fields: &[(&str, FieldSource)]) -> Result<Vec<FieldStrategy>, ScanError> {
    fields
        .iter()
        .map(|(css, source)| {
            Ok(FieldStrategy {
                selector: parse_selector(css)?,
                source: *source,
            })
        })
        .collect()
}

/// First non-empty value across `strategies`, in order.
fn first_match(strategies: &[FieldStrategy], block: ElementRef<'_>) -> Option<String> {
    strategies.iter().find_map(|s| s.read(block))
}

/// Extracts [`SearchResult`] candidates from raw result pages.
#[derive(Debug)]
pub struct ResultExtractor {
    rules: ExtractionRules,
}

impl ResultExtractor {
    /// Build an extractor using [`GOOGLE_RULES`].
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Parse`] if a selector fails to compile.
    pub fn new() -> Result<Self, ScanError> {
        Self::with_rules(&GOOGLE_RULES)
    }

    /// Build an extractor from a custom rule table.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Parse`] if a selector fails to compile.
    pub fn with_rules(table: &RuleTable) -> Result<Self, ScanError> {
        Ok(Self {
            rules: ExtractionRules::compile(table)?,
        })
    }

    /// Parse `raw` and return candidates in document order.
    ///
    /// Never fails: unrecognised markup produces an empty list.
    pub fn extract(&self, raw: &str) -> Vec<SearchResult> {
        let document = Html::parse_document(raw);

        let Some((index, blocks)) = self
            .rules
            .containers
            .iter()
            .enumerate()
            .map(|(i, sel)| (i, document.select(sel).collect::<Vec<_>>()))
            .find(|(_, blocks)| !blocks.is_empty())
        else {
            tracing::debug!("no container strategy matched");
            return Vec::new();
        };

        let results: Vec<SearchResult> = blocks
            .into_iter()
            .filter_map(|block| self.extract_block(block))
            .collect();

        tracing::debug!(
            container_strategy = index,
            count = results.len(),
            "candidates extracted"
        );
        results
    }

    fn extract_block(&self, block: ElementRef<'_>) -> Option<SearchResult> {
        let title = first_match(&self.rules.title, block)?;
        let link = first_match(&self.rules.link, block).map(|href| unwrap_redirect(&href))?;
        let snippet = first_match(&self.rules.snippet, block).unwrap_or_default();
        Some(SearchResult {
            title,
            link,
            snippet,
        })
    }
}

/// Resolve Google's `/url?q=<target>` redirect wrapper to its target.
///
/// Any other link is returned unchanged.
fn unwrap_redirect(href: &str) -> String {
    if !href.starts_with("/url?") {
        return href.to_owned();
    }
    Url::parse("https://www.google.com")
        .and_then(|base| base.join(href))
        .ok()
        .and_then(|parsed| {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "q" || key == "url")
                .map(|(_, value)| value.into_owned())
        })
        .filter(|target| !target.is_empty())
        .unwrap_or_else(|| href.to_owned())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
