//! Menu state machine tests for coolmenu
//!
//! Scenario tests for filtering, selection and scrolling, plus randomized event sequences
//! checking that selection and scroll invariants hold after every transition.

use coolmenu::app::{MenuEvent, MenuState, Outcome, Step};
use coolmenu::core::{MatchStrategy, Matcher};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn numbered(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("cmd{:02}", i)).collect()
}

fn type_str(menu: &mut MenuState, s: &str) {
    for c in s.chars() {
        menu.apply(MenuEvent::Insert(c));
    }
}

fn assert_invariants(menu: &MenuState, context: &str) {
    if menu.is_empty() {
        assert_eq!(menu.selected(), 0, "{}", context);
        assert_eq!(menu.scroll_offset(), 0, "{}", context);
    } else {
        assert!(menu.selected() < menu.len(), "{}", context);
    }
    assert!(menu.viewport_height() >= 1, "{}", context);
    assert!(menu.scroll_offset() <= menu.selected(), "{}", context);
    assert!(
        menu.selected() < menu.scroll_offset() + menu.viewport_height(),
        "{}",
        context
    );
}

fn random_event(rng: &mut StdRng) -> MenuEvent {
    const ALPHABET: &[char] = &['a', 'c', 'd', 'o', 't', 'x', '0', '1', 'C'];
    match rng.random_range(0..10) {
        0 | 1 => MenuEvent::Insert(ALPHABET[rng.random_range(0..ALPHABET.len())]),
        2 => MenuEvent::Backspace,
        3 => MenuEvent::Clear,
        4 | 5 => MenuEvent::Move(rng.random_range(-7i32..=7) as isize),
        6 => MenuEvent::PageDown,
        7 => MenuEvent::PageUp,
        8 => MenuEvent::Resize(rng.random_range(0..12)),
        _ => {
            if rng.random_bool(0.5) {
                MenuEvent::Last
            } else {
                MenuEvent::First
            }
        }
    }
}

#[test]
fn test_substring_filter_keeps_source_order() {
    let mut menu = MenuState::new(
        names(&["bash", "cat", "catdoc", "echo"]),
        Matcher::default(),
        5,
    );
    type_str(&mut menu, "cat");
    assert_eq!(menu.filtered().collect::<Vec<_>>(), ["cat", "catdoc"]);
}

#[test]
fn test_empty_query_is_identity() {
    let items = names(&["zsh", "awk", "bash"]);
    let menu = MenuState::new(items.clone(), Matcher::default(), 5);
    assert_eq!(menu.query(), "");
    assert_eq!(menu.filtered().collect::<Vec<_>>(), items);
}

#[test]
fn test_move_up_clamps_at_zero() {
    let mut menu = MenuState::new(names(&["bash", "cat"]), Matcher::default(), 5);
    assert_eq!(menu.apply(MenuEvent::Move(-1)), Step::Unchanged);
    assert_eq!(menu.selected(), 0);
}

#[test]
fn test_scrolling_follows_selection() {
    let mut menu = MenuState::new(numbered(20), Matcher::default(), 5);
    for _ in 0..6 {
        menu.apply(MenuEvent::Move(4));
        assert_invariants(&menu, "move +4");
    }
    // 6 * 4 = 24 is clamped to the last index
    assert_eq!(menu.selected(), 19);
    assert_eq!(menu.scroll_offset(), menu.selected() - 4);

    let mut menu = MenuState::new(numbered(20), Matcher::default(), 5);
    for _ in 0..2 {
        menu.apply(MenuEvent::Move(4));
    }
    menu.apply(MenuEvent::Move(1));
    assert_eq!(menu.selected(), 9);
    assert_eq!(menu.scroll_offset(), 5);
}

#[test]
fn test_edits_reset_selection_and_scroll() {
    let edits = [MenuEvent::Insert('c'), MenuEvent::Backspace, MenuEvent::Clear];
    for edit in edits {
        let mut menu = MenuState::new(numbered(30), Matcher::default(), 4);
        menu.apply(MenuEvent::Move(17));
        assert_eq!(menu.selected(), 17);
        assert!(menu.scroll_offset() > 0);

        assert_eq!(menu.apply(edit), Step::Changed);
        assert_eq!(menu.selected(), 0, "{:?}", edit);
        assert_eq!(menu.scroll_offset(), 0, "{:?}", edit);
    }
}

#[test]
fn test_noop_moves_leave_state_unchanged() {
    let mut menu = MenuState::new(numbered(10), Matcher::default(), 3);
    menu.apply(MenuEvent::Move(5));
    let before = (menu.selected(), menu.scroll_offset());
    assert_eq!(menu.apply(MenuEvent::Move(0)), Step::Unchanged);
    assert_eq!((menu.selected(), menu.scroll_offset()), before);

    type_str(&mut menu, "nothing matches this");
    assert!(menu.is_empty());
    for event in [MenuEvent::Move(3), MenuEvent::PageDown, MenuEvent::Last] {
        assert_eq!(menu.apply(event), Step::Unchanged);
        assert_eq!((menu.selected(), menu.scroll_offset()), (0, 0));
    }
}

#[test]
fn test_confirm_and_cancel_end_the_session() {
    let mut menu = MenuState::new(names(&["bash", "cat", "catdoc"]), Matcher::default(), 5);
    type_str(&mut menu, "DOC");
    assert_eq!(
        menu.apply(MenuEvent::Confirm),
        Step::Finished(Outcome::Confirmed("catdoc".into()))
    );

    let mut menu = MenuState::new(names(&["bash"]), Matcher::default(), 5);
    type_str(&mut menu, "ba");
    assert_eq!(menu.apply(MenuEvent::Cancel), Step::Finished(Outcome::Cancelled));
    assert_eq!(menu.apply(MenuEvent::Confirm), Step::Unchanged);
    assert_eq!(menu.outcome(), Some(&Outcome::Cancelled));
}

#[test]
fn test_ignored_events_do_nothing() {
    let mut menu = MenuState::new(names(&["bash", "cat"]), Matcher::default(), 5);
    assert_eq!(menu.apply(MenuEvent::Ignore), Step::Unchanged);
    assert_eq!(menu.query(), "");
    assert_eq!(menu.len(), 2);
}

#[test]
fn test_ranked_fuzzy_menu() {
    let mut menu = MenuState::new(
        names(&["gastropod-tool", "git", "gitk", "great"]),
        Matcher::new(MatchStrategy::Fuzzy, true),
        5,
    );
    type_str(&mut menu, "gt");
    // git and gitk score 20 and 19, great 19, gastropod-tool 17
    assert_eq!(
        menu.filtered().collect::<Vec<_>>(),
        ["git", "gitk", "great", "gastropod-tool"]
    );
}

#[test]
fn test_random_event_sequences_keep_invariants() {
    let items: Vec<String> = (0..40)
        .map(|i| match i % 4 {
            0 => format!("cat{}", i),
            1 => format!("doc{}", i),
            2 => format!("Tool{}", i),
            _ => format!("x{}", i),
        })
        .collect();

    for strategy in [MatchStrategy::Substring, MatchStrategy::Fuzzy, MatchStrategy::Skim] {
        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut menu = MenuState::new(items.clone(), Matcher::new(strategy, seed % 2 == 0), 6);
            assert_invariants(&menu, "initial");

            for step in 0..300 {
                let event = random_event(&mut rng);
                menu.apply(event);
                assert_invariants(
                    &menu,
                    &format!("{:?} seed {} step {} after {:?}", strategy, seed, step, event),
                );
            }
        }
    }
}

#[test]
fn test_filtered_view_matches_exactly_the_containing_candidates() {
    let items = names(&["Bash", "cat", "zcat", "catdoc", "echo", "CATALOG", "tac"]);
    let matcher = Matcher::default();
    for query in ["", "cat", "CaT", "a", "o", "zz", "tac"] {
        let mut menu = MenuState::new(items.clone(), Matcher::default(), 5);
        type_str(&mut menu, query);
        let filtered: Vec<&str> = menu.filtered().collect();
        for item in &items {
            let contains = item.to_lowercase().contains(&query.to_lowercase());
            assert_eq!(
                filtered.contains(&item.as_str()),
                contains,
                "query {:?} item {:?}",
                query,
                item
            );
            assert_eq!(matcher.score(query, item).is_some(), contains);
        }
    }
}
