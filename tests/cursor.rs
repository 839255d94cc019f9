use std::cell::RefCell;
use std::rc::Rc;

use gototab::prelude::*;
use rand::RngExt as _;

fn random_lists(list_count: usize) -> Vec<Vec<usize>> {
    let mut rng = rand::rng();
    (0..list_count)
        .map(|_| (0..rng.random_range(0..4)).collect())
        .collect()
}

fn populated(lists: &[Vec<usize>]) -> (MultiListCursor<usize>, Rc<RefCell<Vec<Notification>>>, Subscription) {
    let bus = EventBus::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_clone = seen.clone();
    let sub = bus.subscribe_all(move |n| seen_clone.borrow_mut().push(*n));
    let mut cursor = MultiListCursor::new(lists.len(), bus);
    for (index, items) in lists.iter().enumerate() {
        cursor.replace_list(index, items.clone());
    }
    (cursor, seen, sub)
}

/// Positions in the order `move_next` walks them
fn walk(lists: &[Vec<usize>]) -> Vec<CursorPosition> {
    lists
        .iter()
        .enumerate()
        .flat_map(|(list, items)| (0..items.len()).map(move |item| CursorPosition::new(list, item)))
        .collect()
}

#[test]
fn scenario_empty_then_two_items() {
    let (mut cursor, seen, _sub) = populated(&[vec![], vec![10, 11]]);
    assert_eq!(cursor.position(), Some(CursorPosition::new(1, 0)));
    cursor.move_previous();
    assert_eq!(cursor.position(), Some(CursorPosition::new(1, 0)));
    cursor.move_next();
    assert_eq!(cursor.position(), Some(CursorPosition::new(1, 1)));
    assert_eq!(cursor.highlighted(), Some(&11));
    assert_eq!(
        seen.borrow().last(),
        Some(&Notification::ItemHighlighted { list: 1, item: 1 })
    );
}

#[test]
fn move_next_visits_every_item_once() {
    for _ in 0..200 {
        let lists = random_lists(4);
        let (mut cursor, _, _sub) = populated(&lists);
        let expected = walk(&lists);

        let mut visited = Vec::new();
        while let Some(pos) = cursor.position() {
            if visited.last() == Some(&pos) {
                break;
            }
            visited.push(pos);
            cursor.move_next();
        }
        assert_eq!(visited, expected, "{lists:?}");

        let mut backwards = Vec::new();
        while let Some(pos) = cursor.position() {
            if backwards.last() == Some(&pos) {
                break;
            }
            backwards.push(pos);
            cursor.move_previous();
        }
        backwards.reverse();
        assert_eq!(backwards, expected, "{lists:?}");
    }
}

#[test]
fn next_then_previous_round_trip() {
    for _ in 0..200 {
        let lists = random_lists(4);
        let order = walk(&lists);
        for (rank, &pos) in order.iter().enumerate() {
            let (mut cursor, _, _sub) = populated(&lists);
            cursor.set_highlight(pos.list, pos.item);

            cursor.move_next();
            cursor.move_previous();
            let expected = if rank + 1 == order.len() && rank > 0 { order[rank - 1] } else { pos };
            assert_eq!(cursor.position(), Some(expected), "{lists:?} from {pos:?}");

            cursor.set_highlight(pos.list, pos.item);
            cursor.move_previous();
            cursor.move_next();
            let expected = if rank == 0 && order.len() > 1 { order[1] } else { pos };
            assert_eq!(cursor.position(), Some(expected), "{lists:?} from {pos:?}");
        }
    }
}

#[test]
fn notifications_stay_paired() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let (mut cursor, seen, _sub) = populated(&random_lists(3));
        for _ in 0..30 {
            match rng.random_range(0..4) {
                0 => cursor.move_next(),
                1 => cursor.move_previous(),
                2 => {
                    cursor.set_highlight(rng.random_range(0..3), rng.random_range(0..3));
                }
                _ => {
                    let list = rng.random_range(0..3);
                    cursor.replace_list(list, (0..rng.random_range(0..3)).collect());
                }
            }

            let seen = seen.borrow();
            let last_highlight = seen
                .iter()
                .rev()
                .find(|n| matches!(n, Notification::ItemHighlighted { .. }));
            if let Some(pos) = cursor.position() {
                assert!(cursor.highlighted().is_some());
                assert_eq!(
                    last_highlight,
                    Some(&Notification::ItemHighlighted {
                        list: pos.list,
                        item: pos.item
                    })
                );
            } else {
                assert!((0..3).all(|list| cursor.list(list).is_some_and(|l| l.is_empty())));
            }
        }

        // every unhighlight undoes the highlight right before it
        let seen = seen.borrow();
        let mut current = None;
        for n in seen.iter() {
            match *n {
                Notification::ItemHighlighted { list, item } => current = Some((list, item)),
                Notification::ItemUnhighlighted { list, item } => assert_eq!(current, Some((list, item))),
                Notification::ListsChanged => {}
            }
        }
    }
}

#[test]
fn empty_cursor_ignores_navigation() {
    let (mut cursor, seen, _sub) = populated(&[vec![1], vec![]]);
    cursor.replace_list(0, vec![]);
    let before = seen.borrow().len();
    cursor.move_next();
    cursor.move_previous();
    assert!(cursor.is_empty());
    assert_eq!(cursor.highlighted(), None);
    assert_eq!(seen.borrow().len(), before);
}
