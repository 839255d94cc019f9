//! Ranked filtering of item collections.
//!
//! [`filter`] keeps the items that fuzzily match the query on at least one of
//! their searchable strings, orders them best first and builds their
//! displayed form with emphasis spans. Ties keep the input order, which is
//! also what makes an empty query return everything unchanged.

use std::cmp::Reverse;

use crate::engine::exact::ExactLocator;
use crate::fuzzy_matcher::FuzzyMatcher;
use crate::fuzzy_matcher::greedy::GreedyMatcher;
use crate::item::{CommandItem, DisplayedCommandItem, DisplayedTabItem, TabItem};
use crate::{AttributedString, Score};

/// Turns a searchable string into its emphasized form for the current query
pub type Indicizer<'a> = dyn Fn(&str) -> AttributedString + 'a;

/// Filters, ranks and projects `items` for `query` using the default matcher.
///
/// - `matchable_fields` lists the searchable strings of an item.
/// - `project` builds the displayed item; it receives an indicizer that
///   wraps a string with the query's emphasis spans and should be applied to
///   every searchable field.
pub fn filter<I, D, F, P>(items: &[I], query: &str, matchable_fields: F, project: P) -> Vec<D>
where
    F: for<'a> Fn(&'a I) -> Vec<&'a str>,
    P: for<'i> Fn(&I, &Indicizer<'i>) -> D,
{
    filter_with(&GreedyMatcher, items, query, matchable_fields, project)
}

/// Same as [`filter`], with an explicit matcher
pub fn filter_with<I, D, F, P>(
    matcher: &dyn FuzzyMatcher,
    items: &[I],
    query: &str,
    matchable_fields: F,
    project: P,
) -> Vec<D>
where
    F: for<'a> Fn(&'a I) -> Vec<&'a str>,
    P: for<'i> Fn(&I, &Indicizer<'i>) -> D,
{
    let mut ranked: Vec<(Score, &I)> = items
        .iter()
        .filter_map(|item| {
            matchable_fields(item)
                .into_iter()
                .filter_map(|field| matcher.fuzzy_match(field, query))
                .max()
                .map(|score| (score, item))
        })
        .collect();
    trace!("filter {query:?}: {} of {} items matched", ranked.len(), items.len());

    // stable: equal scores keep input order
    ranked.sort_by_key(|&(score, _)| Reverse(score));

    let locator = ExactLocator::new(query);
    let indicizer: &Indicizer = &|text: &str| locator.attribute(text);
    ranked.into_iter().map(|(_, item)| project(item, indicizer)).collect()
}

/// Filters tabs on their title and url
pub fn filter_tab_items(items: &[TabItem], query: &str) -> Vec<DisplayedTabItem> {
    filter(
        items,
        query,
        |tab| vec![tab.title.as_str(), tab.url.as_str()],
        |tab, indicize| DisplayedTabItem {
            title: indicize(&tab.title),
            url: indicize(&tab.url),
            favicon_url: tab.favicon_url.clone(),
            action: tab.action.clone(),
        },
    )
}

/// Filters commands on their name
pub fn filter_command_items(items: &[CommandItem], query: &str) -> Vec<DisplayedCommandItem> {
    filter(
        items,
        query,
        |cmd| vec![cmd.name.as_str()],
        |cmd, indicize| DisplayedCommandItem {
            name: indicize(&cmd.name),
            shortcut: cmd.shortcut.clone(),
            action: cmd.action.clone(),
        },
    )
}
