/// Symbols exercise books print in place of hidden letters.
const PLACEHOLDER_SYMBOLS: [char; 4] = ['.', '(', ')', '_'];

/// Punctuation that carries no information about the word itself.
const STRIPPED_PUNCTUATION: [char; 6] = [',', '!', ' ', '?', ':', ';'];

/// A normalized word fragment with redacted letters, e.g. `нефт*пр*вод*`.
///
/// Contains only lowercase Cyrillic letters and `*` wildcards, has at least
/// one wildcard and a total length of at least two characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MaskedToken(String);

impl MaskedToken {
    pub const WILDCARD: char = '*';

    /// Extract masked tokens from raw OCR output.
    ///
    /// Words without any placeholder symbol are fully legible and need no
    /// recovery, so they are dropped. Order and duplicates are preserved:
    /// every occurrence gets its own lookup.
    pub fn normalize_text(raw: &str) -> Vec<MaskedToken> {
        join_bracketed_spans(raw)
            .into_iter()
            .filter(|word| {
                word.chars()
                    .any(|c| PLACEHOLDER_SYMBOLS.contains(&c) || c == Self::WILDCARD)
            })
            .filter_map(|word| normalize_word(&word))
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for MaskedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Split on whitespace, but glue chunks back together while a raw word has
/// an unclosed `(`: a bracketed alternative like `миро(воз, вос)зрение`
/// contains a space and must stay one word for the span collapse to see it.
fn join_bracketed_spans(raw: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for chunk in raw.split_whitespace() {
        match words.last_mut() {
            Some(last) if has_unclosed_bracket(last) => last.push_str(chunk),
            _ => words.push(chunk.to_string()),
        }
    }
    words
}

fn has_unclosed_bracket(word: &str) -> bool {
    match (word.rfind('('), word.rfind(')')) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    }
}

fn is_cyrillic(c: char) -> bool {
    ('а'..='я').contains(&c) || c == 'ё'
}

fn normalize_word(word: &str) -> Option<MaskedToken> {
    let mapped: String = word
        .to_lowercase()
        .chars()
        .filter_map(|c| {
            if is_cyrillic(c) || PLACEHOLDER_SYMBOLS.contains(&c) || c == MaskedToken::WILDCARD {
                Some(c)
            } else if STRIPPED_PUNCTUATION.contains(&c) {
                None
            } else {
                Some(MaskedToken::WILDCARD)
            }
        })
        .collect();

    let mapped = collapse_brackets(&mapped);
    let mapped: String = mapped
        .chars()
        .map(|c| {
            if PLACEHOLDER_SYMBOLS.contains(&c) {
                MaskedToken::WILDCARD
            } else {
                c
            }
        })
        .collect();
    let collapsed = collapse_wildcard_runs(&mapped);

    // Anything this short is OCR noise, not a recoverable word.
    if collapsed.chars().count() <= 1 {
        None
    } else {
        Some(MaskedToken(collapsed))
    }
}

/// Replace a bracketed alternative-spelling annotation with one wildcard,
/// turning `миро(воз, вос)зрение` into `миро*зрение`.
fn collapse_brackets(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let open = chars.iter().position(|&c| c == '(');
    let close = chars.iter().rposition(|&c| c == ')');
    match (open, close) {
        (Some(open), Some(close)) if open < close => {
            let mut out: String = chars[..open].iter().collect();
            out.push(MaskedToken::WILDCARD);
            out.extend(&chars[close + 1..]);
            out
        }
        _ => word.to_string(),
    }
}

/// Collapse runs of consecutive wildcards into a single one while keeping
/// leading and trailing wildcards in place. The word is surrounded with
/// sentinels so boundary wildcards survive the split.
fn collapse_wildcard_runs(word: &str) -> String {
    let surrounded = format!("~{word}~");
    let joined = surrounded
        .split(MaskedToken::WILDCARD)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("*");
    joined.trim_matches('~').to_string()
}
