use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node, Selector};

use crate::application::ports::{DictionaryClient, DictionaryClientError};
use crate::domain::{Dictionary, MaskedToken};

static CONTENT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.inside.block-content").expect("static selector is valid")
});
static ENTRY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("b").expect("static selector is valid"));
static ACCENT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.accent").expect("static selector is valid"));

/// Legend text the results page repeats around real entries: the wildcard
/// syntax explanation and its illustration words. Entries whose text occurs
/// in this string are page furniture, not candidates.
const LEGEND_TEXT: &str = "звездочка * вопросительный знак ? \
                           Звездочка * Вопросительный знак ? \
                           чес*ный,  проф*ес*ор,  ветрен*ый. \
                           фа фа-бекар фа-бемоль фа-бемольный";

/// Dictionary lookups against gramota.ru over one shared connection pool.
pub struct GramotaClient {
    client: reqwest::Client,
    base_url: String,
}

impl GramotaClient {
    pub const DEFAULT_BASE_URL: &'static str = "http://www.gramota.ru/slovari/dic/";

    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DictionaryClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DictionaryClientError::BuildFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// One network round trip: fetch the results page for `word`.
    ///
    /// `Ok(None)` means the site answered with a non-success status, its way
    /// of saying "not found"; `Ok(Some(_))` carries whatever the parsed page
    /// held, possibly nothing.
    async fn fetch(
        &self,
        word: &str,
        dictionaries: &[Dictionary],
    ) -> Result<Option<Vec<String>>, DictionaryClientError> {
        let mut query: Vec<(&str, &str)> = dictionaries
            .iter()
            .map(|dictionary| (dictionary.code(), "x"))
            .collect();
        query.push(("word", word));

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| DictionaryClientError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| DictionaryClientError::RequestFailed(e.to_string()))?;

        Ok(Some(parse_candidates(&body)))
    }
}

#[async_trait]
impl DictionaryClient for GramotaClient {
    async fn lookup(
        &self,
        token: &MaskedToken,
        dictionaries: &[Dictionary],
    ) -> Result<Vec<String>, DictionaryClientError> {
        let mut word = token.as_str().to_string();
        loop {
            // A non-success status is a final "not found" answer; only a
            // page that parsed to nothing gets the generalized retry.
            let Some(candidates) = self.fetch(&word, dictionaries).await? else {
                return Ok(Vec::new());
            };
            if !candidates.is_empty() {
                return Ok(candidates);
            }
            // A conjugated or declined form can still hit its headword once
            // both ends are opened up with wildcards.
            match generalized(&word) {
                Some(wider) => {
                    tracing::debug!(from = %word, to = %wider, "No match, retrying generalized form");
                    word = wider;
                }
                None => return Ok(Vec::new()),
            }
        }
    }
}

/// Widen a masked word for a retry: drop its last two characters and bound
/// the rest with wildcards. Returns `None` once the word is wildcard-bounded
/// on both ends (the literal both-ends check), which every word reaches in
/// at most two steps, so the retry loop always terminates.
pub fn generalized(word: &str) -> Option<String> {
    let chars: Vec<char> = word.chars().collect();
    let bounded = chars.first() == Some(&MaskedToken::WILDCARD)
        && chars.last() == Some(&MaskedToken::WILDCARD);
    if bounded || chars.len() < 2 {
        return None;
    }

    let mut wider = String::from("*");
    wider.extend(&chars[..chars.len() - 2]);
    wider.push(MaskedToken::WILDCARD);
    Some(wider)
}

/// Pull candidate words out of a results page. Hits live as `<b>` elements
/// inside `div.inside.block-content`; a page without that container simply
/// has no results.
pub fn parse_candidates(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let Some(content) = document.select(&CONTENT_SELECTOR).next() else {
        return Vec::new();
    };

    content
        .select(&ENTRY_SELECTOR)
        .filter_map(candidate_from_entry)
        .collect()
}

fn candidate_from_entry(entry: ElementRef<'_>) -> Option<String> {
    let text: String = entry.text().collect();
    if LEGEND_TEXT.contains(text.as_str()) {
        return None;
    }

    if entry.select(&ACCENT_SELECTOR).next().is_some() {
        let mut rebuilt = String::new();
        for child in entry.children() {
            append_node_text(child, &mut rebuilt);
        }
        Some(rebuilt)
    } else {
        Some(text.to_lowercase())
    }
}

/// Rebuild an entry that carries stress markup. Everything is lowercased,
/// `span.em1` wrappers contribute their bare text, and each `span.accent`
/// span starts with a capital letter: the source notation capitalizes the
/// stressed position.
fn append_node_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(&text.to_lowercase()),
        Node::Element(element) => {
            let is_accent = element.name() == "span" && element.classes().any(|c| c == "accent");
            if is_accent {
                let inner: String = ElementRef::wrap(node)
                    .map(|el| el.text().collect())
                    .unwrap_or_default();
                out.push_str(&capitalize_first(&inner.to_lowercase()));
            } else {
                for child in node.children() {
                    append_node_text(child, out);
                }
            }
        }
        _ => {}
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
