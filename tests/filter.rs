use gototab::engine::exact::locate;
use gototab::fuzzy_matcher::greedy::{EMPTY_QUERY_SCORE, fuzzy_indices, fuzzy_match};
use gototab::prelude::*;
use rand::RngExt as _;

const ALPHABET: &[u8] = b"abcAB-. ";

fn random_string(max_len: usize) -> String {
    let mut rng = rand::rng();
    let len = rng.random_range(0..=max_len);
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

fn is_subsequence(query: &str, candidate: &str) -> bool {
    let mut candidate = candidate.chars().map(|c| c.to_ascii_lowercase());
    query
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .all(|q| candidate.any(|c| c == q))
}

#[test]
fn match_iff_subsequence() {
    for _ in 0..2000 {
        let candidate = random_string(12);
        let query = random_string(4);
        assert_eq!(
            fuzzy_match(&candidate, &query).is_some(),
            is_subsequence(&query, &candidate),
            "query {query:?} candidate {candidate:?}"
        );
    }
}

#[test]
fn indices_spell_the_query() {
    for _ in 0..2000 {
        let candidate = random_string(12);
        let query = random_string(4);
        let Some((_, indices)) = fuzzy_indices(&candidate, &query) else {
            continue;
        };
        assert_eq!(indices.len(), query.chars().count());
        assert!(indices.windows(2).all(|w| w[0] < w[1]), "{indices:?}");
        let chars: Vec<char> = candidate.chars().collect();
        for (q, &i) in query.chars().zip(&indices) {
            assert_eq!(chars[i].to_ascii_lowercase(), q.to_ascii_lowercase());
        }
    }
}

#[test]
fn empty_query_scores_lowest() {
    assert_eq!(fuzzy_match("anything", ""), Some(EMPTY_QUERY_SCORE));
    assert_eq!(fuzzy_match("", ""), Some(EMPTY_QUERY_SCORE));
    assert_eq!(fuzzy_match("", "a"), None);
}

#[test]
fn spans_are_ordered_occurrences() {
    for _ in 0..2000 {
        let text = random_string(16);
        let query = random_string(2);
        let spans = locate(&query, &text);
        if query.is_empty() {
            assert!(spans.is_empty());
            continue;
        }
        assert!(spans.windows(2).all(|w| w[0].end <= w[1].start), "{spans:?}");
        for span in &spans {
            assert!(text[span.start..span.end].eq_ignore_ascii_case(&query));
        }
    }
}

#[test]
fn filter_keeps_only_matches() {
    for _ in 0..200 {
        let items: Vec<String> = (0..8).map(|_| random_string(10)).collect();
        let query = random_string(3);
        let result = filter(&items, &query, |s| vec![s.as_str()], |s, _| s.clone());
        assert!(result.len() <= items.len());
        assert!(result.iter().all(|s| is_subsequence(&query, s)));
        assert_eq!(
            result.len(),
            items.iter().filter(|s| is_subsequence(&query, s)).count()
        );
    }
}

#[test]
fn empty_query_is_identity() {
    for _ in 0..50 {
        let items: Vec<String> = (0..8).map(|_| random_string(10)).collect();
        let result = filter(&items, "", |s| vec![s.as_str()], |s, indicize| indicize(s.as_str()));
        let texts: Vec<&str> = result.iter().map(|s| s.text()).collect();
        assert_eq!(texts, items.iter().map(String::as_str).collect::<Vec<_>>());
        assert!(result.iter().all(|s| s.spans().is_empty()));
    }
}

#[test]
fn avi_scenario() {
    let tabs: Vec<TabItem> = ["Hello world!", "Travis", "Appveyor"]
        .into_iter()
        .map(|title| TabItem::new(title, "", None, ItemAction::noop()))
        .collect();
    let result = filter_tab_items(&tabs, "avi");
    let titles: Vec<&str> = result.iter().map(|t| t.title.text()).collect();
    assert_eq!(titles, vec!["Travis"]);
}

#[test]
fn empty_query_scenario() {
    let items = ["b", "a", "c"];
    let result = filter(&items, "", |s| vec![*s], |s, indicize| indicize(*s));
    let texts: Vec<&str> = result.iter().map(|s| s.text()).collect();
    assert_eq!(texts, vec!["b", "a", "c"]);
    assert!(result.iter().all(|s| !s.is_emphasized()));
}
