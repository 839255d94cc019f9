/// Lowercase a single char without changing the char count.
///
/// Multi-char lowercase expansions (e.g. `İ`) keep only their first char so
/// that indices computed on the folded text stay valid for the original.
#[inline]
pub fn fold_char(ch: char) -> char {
    if ch.is_ascii() {
        ch.to_ascii_lowercase()
    } else {
        ch.to_lowercase().next().unwrap_or(ch)
    }
}

/// Case-fold a whole string char by char, see [`fold_char`].
pub fn fold_chars(s: &str) -> Vec<char> {
    s.chars().map(fold_char).collect()
}

/// Whether a match at `index` starts a word: first char, or preceded by a
/// non-alphanumeric char.
#[inline]
pub fn is_word_start(chars: &[char], index: usize) -> bool {
    index == 0 || chars.get(index - 1).is_some_and(|prev| !prev.is_alphanumeric())
}

#[cfg(test)]
pub fn wrap_matches(line: &str, indices: &[usize]) -> String {
    let mut ret = String::new();
    let mut peekable = indices.iter().peekable();
    for (idx, ch) in line.chars().enumerate() {
        let next_id = **peekable.peek().unwrap_or(&&line.len());
        if next_id == idx {
            ret.push_str(format!("[{}]", ch).as_str());
            peekable.next();
        } else {
            ret.push(ch);
        }
    }

    ret
}

/// Assert that `choices` are ranked in the given order for `pattern`
#[cfg(test)]
pub fn assert_order(matcher: &dyn super::FuzzyMatcher, pattern: &str, choices: &[&'static str]) {
    let result = filter_and_sort(matcher, pattern, choices);

    if result != choices {
        // debug print
        println!("pattern: {}", pattern);
        for &choice in choices.iter() {
            if let Some((score, indices)) = matcher.fuzzy_indices(choice, pattern) {
                println!("{}: {:?}", score, wrap_matches(choice, &indices));
            } else {
                println!("NO MATCH for {}", choice);
            }
        }
    }

    assert_eq!(result, choices);
}

#[cfg(test)]
pub fn filter_and_sort(matcher: &dyn super::FuzzyMatcher, pattern: &str, lines: &[&'static str]) -> Vec<&'static str> {
    let mut lines_with_score: Vec<(i64, &'static str)> = lines
        .iter()
        .filter_map(|&s| matcher.fuzzy_match(s, pattern).map(|score| (score, s)))
        .collect();
    lines_with_score.sort_by(|(a, _), (b, _)| b.cmp(a));
    lines_with_score.into_iter().map(|(_, string)| string).collect()
}
