//! The menu state machine of coolmenu.
//!
//! [MenuState] owns the query, the filtered view over the candidates, the selected index,
//! the scroll offset and the viewport height. Every change goes through [MenuState::apply],
//! which takes one [MenuEvent] and returns a [Step].
//!
//! After every transition:
//! - `selected < len()` whenever the filtered view is non-empty (0 otherwise)
//! - `scroll_offset <= selected < scroll_offset + viewport_height`
//!
//! The machine has one interactive state and two terminal outcomes ([Outcome]). Once an
//! outcome is recorded it is final and every further event is ignored.

use crate::core::matcher::{CandidateSet, Matcher};

/// A discrete input event, already decoded from the raw key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Insert(char),
    Backspace,
    Clear,
    Move(isize),
    PageUp,
    PageDown,
    First,
    Last,
    Confirm,
    Cancel,
    /// New viewport height reported by the renderer.
    Resize(usize),
    /// Unrecognized input.
    Ignore,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Confirmed(String),
    Cancelled,
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Unchanged,
    Changed,
    Finished(Outcome),
}

/// One visible row of the filtered view, resolved for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    pub index: usize,
    pub name: &'a str,
    pub selected: bool,
}

pub struct MenuState {
    candidates: CandidateSet,
    matcher: Matcher,
    query: String,
    filtered: Vec<usize>,
    selected: usize,
    scroll: usize,
    viewport: usize,
    outcome: Option<Outcome>,
}

impl MenuState {
    pub fn new(candidates: Vec<String>, matcher: Matcher, viewport: usize) -> Self {
        let candidates = CandidateSet::new(candidates);
        let filtered = (0..candidates.len()).collect();
        Self {
            candidates,
            matcher,
            query: String::new(),
            filtered,
            selected: 0,
            scroll: 0,
            viewport: viewport.max(1),
            outcome: None,
        }
    }

    // Getters / accessors

    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of entries in the filtered view.
    #[inline]
    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[inline]
    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    #[inline]
    pub fn viewport_height(&self) -> usize {
        self.viewport
    }

    #[inline]
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[inline]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// The filtered view resolved to candidate names, in view order.
    pub fn filtered(&self) -> impl Iterator<Item = &str> + '_ {
        self.filtered
            .iter()
            .filter_map(|&idx| self.candidates.get(idx))
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.filtered
            .get(self.selected)
            .and_then(|&idx| self.candidates.get(idx))
    }

    /// Row of the selection inside the viewport, if the view is non-empty.
    pub fn selected_row(&self) -> Option<usize> {
        if self.filtered.is_empty() {
            None
        } else {
            Some(self.selected - self.scroll)
        }
    }

    /// The slice of the filtered view between the scroll offset and the end of the viewport.
    pub fn visible(&self) -> Vec<VisibleRow<'_>> {
        self.filtered
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(self.viewport)
            .filter_map(|(index, &idx)| {
                self.candidates.get(idx).map(|name| VisibleRow {
                    index,
                    name,
                    selected: index == self.selected,
                })
            })
            .collect()
    }

    /// Character positions of `name` matched by the current query.
    pub fn match_positions(&self, name: &str) -> Vec<usize> {
        self.matcher.match_positions(&self.query, name)
    }

    // State transitions

    /// Applies one event. This is the only way the interactive state changes.
    pub fn apply(&mut self, event: MenuEvent) -> Step {
        if self.outcome.is_some() {
            return Step::Unchanged;
        }

        match event {
            MenuEvent::Insert(c) => {
                self.query.push(c);
                self.refilter();
                Step::Changed
            }
            MenuEvent::Backspace => {
                self.query.pop();
                self.refilter();
                Step::Changed
            }
            MenuEvent::Clear => {
                self.query.clear();
                self.refilter();
                Step::Changed
            }
            MenuEvent::Move(delta) => self.move_by(delta),
            MenuEvent::PageUp => self.move_by(-self.page_delta()),
            MenuEvent::PageDown => self.move_by(self.page_delta()),
            MenuEvent::First => self.move_by(isize::MIN),
            MenuEvent::Last => self.move_by(isize::MAX),
            MenuEvent::Confirm => match self.selected_item().map(str::to_owned) {
                Some(name) => self.finish(Outcome::Confirmed(name)),
                None => Step::Unchanged,
            },
            MenuEvent::Cancel => self.finish(Outcome::Cancelled),
            MenuEvent::Resize(height) => self.set_viewport_height(height),
            MenuEvent::Ignore => Step::Unchanged,
        }
    }

    /// Swaps in a new candidate list, keeping the query.
    ///
    /// The selected name stays selected if it still matches, otherwise the selection
    /// returns to the top.
    pub fn replace_candidates(&mut self, items: Vec<String>) -> Step {
        if self.outcome.is_some() {
            return Step::Unchanged;
        }

        let previous = self.selected_item().map(str::to_owned);
        self.candidates = CandidateSet::new(items);
        self.filtered = self.matcher.filter(&self.query, &self.candidates);

        let kept = previous.and_then(|name| {
            self.filtered
                .iter()
                .position(|&idx| self.candidates.get(idx) == Some(name.as_str()))
        });
        match kept {
            Some(pos) => {
                self.selected = pos;
                self.scroll = self.scroll.min(pos);
                self.rescroll();
            }
            None => {
                self.selected = 0;
                self.scroll = 0;
            }
        }
        Step::Changed
    }

    fn set_viewport_height(&mut self, height: usize) -> Step {
        let height = height.max(1);
        if height == self.viewport {
            return Step::Unchanged;
        }
        self.viewport = height;
        self.rescroll();
        Step::Changed
    }

    fn refilter(&mut self) {
        self.filtered = self.matcher.filter(&self.query, &self.candidates);
        self.selected = 0;
        self.scroll = 0;
    }

    fn move_by(&mut self, delta: isize) -> Step {
        if self.filtered.is_empty() {
            return Step::Unchanged;
        }
        let last = self.filtered.len() - 1;
        let target = if delta < 0 {
            self.selected.saturating_sub(delta.unsigned_abs())
        } else {
            self.selected.saturating_add(delta as usize).min(last)
        };

        let before = (self.selected, self.scroll);
        self.selected = target;
        self.rescroll();

        if before == (self.selected, self.scroll) {
            Step::Unchanged
        } else {
            Step::Changed
        }
    }

    /// Moves the scroll offset the least amount needed to keep the selection visible.
    fn rescroll(&mut self) {
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected - self.scroll >= self.viewport {
            self.scroll = self.selected - (self.viewport - 1);
        }
    }

    fn page_delta(&self) -> isize {
        isize::try_from(self.viewport).unwrap_or(isize::MAX)
    }

    fn finish(&mut self, outcome: Outcome) -> Step {
        self.outcome = Some(outcome.clone());
        Step::Finished(outcome)
    }
}
