use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;

use propusk::application::ports::DictionaryClient;
use propusk::domain::{Dictionary, MaskedToken};
use propusk::infrastructure::dictionary::{GramotaClient, generalized, parse_candidates};

fn results_page(entries: &str) -> String {
    format!(
        "<html><body><div class=\"inside block-content\">{entries}</div></body></html>"
    )
}

#[test]
fn given_plain_entries_when_parsing_then_lowercased_text_is_collected() {
    let html = results_page("<b>Нефтепровод</b><b>водопровод</b>");

    assert_eq!(parse_candidates(&html), ["нефтепровод", "водопровод"]);
}

#[test]
fn given_accent_markup_when_parsing_then_stressed_letter_is_capitalized() {
    let html = results_page("<b>нефтепров<span class=\"accent\">о</span>д</b>");

    assert_eq!(parse_candidates(&html), ["нефтепровОд"]);
}

#[test]
fn given_em1_wrappers_around_accents_when_parsing_then_wrappers_are_stripped() {
    let html = results_page(
        "<b>з<span class=\"accent\">а</span>мок <span class=\"em1\">и</span> \
         зам<span class=\"accent\">о</span>к</b>",
    );

    assert_eq!(parse_candidates(&html), ["зАмок и замОк"]);
}

#[test]
fn given_legend_entries_when_parsing_then_they_are_skipped() {
    let html = results_page(
        "<b>звездочка</b><b>Вопросительный знак ?</b><b>фа-бемоль</b><b>нефтепровод</b>",
    );

    assert_eq!(parse_candidates(&html), ["нефтепровод"]);
}

#[test]
fn given_page_without_content_container_when_parsing_then_result_is_empty() {
    let html = "<html><body><p>страница не найдена</p><b>мусор</b></body></html>";

    assert!(parse_candidates(html).is_empty());
}

#[test]
fn given_empty_container_when_parsing_then_result_is_empty() {
    assert!(parse_candidates(&results_page("")).is_empty());
}

#[test]
fn given_unbounded_word_when_generalizing_then_last_two_chars_become_wildcards() {
    assert_eq!(generalized("бежать").as_deref(), Some("*бежа*"));
}

#[test]
fn given_generalized_word_when_generalizing_again_then_no_further_retry() {
    // One generalization step bounds the word with wildcards, so the retry
    // loop runs at most once for a plain token.
    let wider = generalized("бежать").unwrap();

    assert_eq!(generalized(&wider), None);
}

#[test]
fn given_word_bounded_on_one_end_when_generalizing_then_retry_still_happens() {
    assert_eq!(generalized("*бежать").as_deref(), Some("**бежа*"));
}

#[test]
fn given_word_bounded_on_both_ends_when_generalizing_then_no_retry() {
    assert_eq!(generalized("*бежа*"), None);
}

fn token(masked: &str) -> MaskedToken {
    MaskedToken::normalize_text(masked).remove(0)
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn stub_client(addr: SocketAddr) -> GramotaClient {
    GramotaClient::new(format!("http://{addr}/slovari/dic/"), Duration::from_secs(1)).unwrap()
}

/// Stub that serves a results page per word and counts round trips.
fn counting_stub(
    pages: &[(&str, &str)],
) -> (Router, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let pages: HashMap<String, String> = pages
        .iter()
        .map(|(word, entries)| (word.to_string(), entries.to_string()))
        .collect();

    let router = Router::new().route(
        "/slovari/dic/",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let counter = Arc::clone(&counter);
            let pages = pages.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                let entries = params
                    .get("word")
                    .and_then(|word| pages.get(word))
                    .cloned()
                    .unwrap_or_default();
                Html(results_page(&entries))
            }
        }),
    );

    (router, hits)
}

#[tokio::test]
async fn given_match_on_first_page_when_looking_up_then_single_round_trip() {
    let (router, hits) = counting_stub(&[("к*т", "<b>кот</b>")]);
    let client = stub_client(serve(router).await);

    let candidates = client
        .lookup(&token("к.т"), Dictionary::default_set())
        .await
        .unwrap();

    assert_eq!(candidates, ["кот"]);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_empty_first_page_when_looking_up_then_generalized_form_finds_the_headword() {
    // "к*т" parses to nothing; the generalized "*к*" carries the match.
    let (router, hits) = counting_stub(&[("*к*", "<b>кот</b>")]);
    let client = stub_client(serve(router).await);

    let candidates = client
        .lookup(&token("к.т"), Dictionary::default_set())
        .await
        .unwrap();

    assert_eq!(candidates, ["кот"]);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn given_every_page_empty_when_looking_up_then_retry_stops_once_bounded() {
    let (router, hits) = counting_stub(&[]);
    let client = stub_client(serve(router).await);

    let candidates = client
        .lookup(&token("к.т"), Dictionary::default_set())
        .await
        .unwrap();

    // One original attempt plus exactly one generalized retry, which is
    // wildcard-bounded and therefore final.
    assert!(candidates.is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn given_wildcard_bounded_token_when_looking_up_then_no_retry_at_all() {
    let (router, hits) = counting_stub(&[]);
    let client = stub_client(serve(router).await);

    let candidates = client
        .lookup(&token("...беж..."), Dictionary::default_set())
        .await
        .unwrap();

    assert!(candidates.is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_not_found_status_when_looking_up_then_no_generalized_retry() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let router = Router::new().route(
        "/slovari/dic/",
        get(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                StatusCode::NOT_FOUND
            }
        }),
    );
    let client = stub_client(serve(router).await);

    let candidates = client
        .lookup(&token("к.т"), Dictionary::default_set())
        .await
        .unwrap();

    // The status already said "not found"; that answer is final.
    assert!(candidates.is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_selected_partitions_when_looking_up_then_their_codes_are_sent() {
    let saw_codes = Arc::new(AtomicBool::new(false));
    let spy = Arc::clone(&saw_codes);
    let router = Router::new().route(
        "/slovari/dic/",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let spy = Arc::clone(&spy);
            async move {
                let all_present = ["lop", "zar", "ag", "pe"]
                    .iter()
                    .all(|code| params.get(*code).map(String::as_str) == Some("x"));
                if all_present && params.get("word").map(String::as_str) == Some("к*т") {
                    spy.store(true, Ordering::SeqCst);
                }
                Html(results_page("<b>кот</b>"))
            }
        }),
    );
    let client = stub_client(serve(router).await);

    client
        .lookup(&token("к.т"), Dictionary::default_set())
        .await
        .unwrap();

    assert!(saw_codes.load(Ordering::SeqCst));
}
