//! Application state and controller for coolmenu.
//!
//! [AppState] holds everything the event loop and the renderer need:
//! - the configuration and the keymap built from it
//! - the [MenuState]
//! - the optional refresh worker and the id of the latest refresh request
//!
//! Key events are decoded by the keymap and applied to the menu. Refreshed candidate
//! lists from the worker are picked up in [AppState::tick].

use crate::app::keymap::Keymap;
use crate::app::menu::{MenuEvent, MenuState, Outcome, Step};
use crate::config::Config;
use crate::core::worker::{RefreshStatus, WorkerResponse, Workers};

use crossbeam_channel::TryRecvError;
use crossterm::event::KeyEvent;

/// Viewport height used until the first render reports the real one.
const INITIAL_VIEWPORT: usize = 10;

/// Result of one processed keypress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeypressResult {
    /// Nothing changed.
    Continue,
    /// The menu changed and needs a redraw.
    Consumed,
    Quit(Outcome),
}

pub struct AppState<'a> {
    config: &'a Config,
    keymap: Keymap,
    menu: MenuState,
    workers: Option<Workers>,
    request_id: u64,
    is_loading: bool,
}

impl<'a> AppState<'a> {
    pub fn new(config: &'a Config, items: Vec<String>) -> Self {
        Self {
            config,
            keymap: Keymap::from_keys(config.keys()),
            menu: MenuState::new(items, config.general().build_matcher(), INITIAL_VIEWPORT),
            workers: None,
            request_id: 0,
            is_loading: false,
        }
    }

    // Getters / accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn attach_workers(&mut self, workers: Workers) {
        self.workers = Some(workers);
    }

    /// Asks the refresh worker for a fresh candidate list.
    ///
    /// The request id only advances when the task was actually queued, so the answer to
    /// an already queued refresh is still accepted.
    pub fn request_refresh(&mut self) {
        let Some(workers) = &self.workers else {
            return;
        };
        let next_id = self.request_id.wrapping_add(1);
        match workers.request_refresh(next_id) {
            RefreshStatus::Queued => {
                self.request_id = next_id;
                self.is_loading = true;
            }
            RefreshStatus::Pending => self.is_loading = true,
            RefreshStatus::Disconnected => {
                tracing::warn!("refresh worker is gone");
                self.workers = None;
                self.is_loading = false;
            }
        }
    }

    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        let event = self.keymap.event_for(key);
        self.handle_event(event)
    }

    pub fn handle_event(&mut self, event: MenuEvent) -> KeypressResult {
        match self.menu.apply(event) {
            Step::Unchanged => KeypressResult::Continue,
            Step::Changed => KeypressResult::Consumed,
            Step::Finished(outcome) => KeypressResult::Quit(outcome),
        }
    }

    /// Called by the renderer with the height of the list area.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.menu.apply(MenuEvent::Resize(height));
    }

    /// Drains worker responses. Returns true if a redraw is needed.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;

        loop {
            let Some(workers) = &self.workers else {
                break;
            };
            let response = match workers.response_rx().try_recv() {
                Ok(response) => response,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.workers = None;
                    if self.is_loading {
                        self.is_loading = false;
                        changed = true;
                    }
                    break;
                }
            };
            changed |= self.handle_response(response);
        }
        changed
    }

    fn handle_response(&mut self, response: WorkerResponse) -> bool {
        match response {
            WorkerResponse::Candidates { items, request_id } => {
                if request_id != self.request_id {
                    return false;
                }
                self.is_loading = false;
                tracing::debug!(count = items.len(), "refreshed candidates");
                if self.menu.candidates().items() != items.as_slice() {
                    self.menu.replace_candidates(items);
                }
                true
            }
            WorkerResponse::Error {
                message,
                request_id,
            } => {
                tracing::warn!(error = %message, request_id, "candidate refresh failed");
                if request_id != self.request_id {
                    return false;
                }
                self.is_loading = false;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::{CandidateSource, Candidates, Origin};
    use crate::error::Result;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    struct FixedSource(Vec<String>);

    impl CandidateSource for FixedSource {
        fn load(&self) -> Result<Candidates> {
            Ok(Candidates {
                items: self.0.clone(),
                origin: Origin::Cache,
            })
        }

        fn refresh(&self) -> Result<Vec<String>> {
            Ok(self.0.clone())
        }
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_keypresses_drive_the_menu() {
        let config = Config::default();
        let mut app = AppState::new(&config, names(&["bash", "cat", "catdoc"]));

        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(app.handle_keypress(key(KeyCode::Char('c'))), KeypressResult::Consumed);
        assert_eq!(app.handle_keypress(key(KeyCode::Down)), KeypressResult::Consumed);
        assert_eq!(app.handle_keypress(key(KeyCode::Down)), KeypressResult::Continue);
        assert_eq!(
            app.handle_keypress(key(KeyCode::Enter)),
            KeypressResult::Quit(Outcome::Confirmed("catdoc".into()))
        );
    }

    #[test]
    fn test_refresh_replaces_candidates() {
        let config = Config::default();
        let mut app = AppState::new(&config, names(&["old"]));
        let source = Arc::new(FixedSource(names(&["new", "newer"])));
        app.attach_workers(Workers::spawn(source));
        app.request_refresh();
        assert!(app.is_loading());

        let deadline = Instant::now() + Duration::from_secs(5);
        while !app.tick() {
            assert!(Instant::now() < deadline, "refresh never arrived");
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(!app.is_loading());
        assert_eq!(app.menu().filtered().collect::<Vec<_>>(), ["new", "newer"]);
    }

    struct SlowSource(Vec<String>);

    impl CandidateSource for SlowSource {
        fn load(&self) -> Result<Candidates> {
            Ok(Candidates {
                items: self.0.clone(),
                origin: Origin::Cache,
            })
        }

        fn refresh(&self) -> Result<Vec<String>> {
            std::thread::sleep(Duration::from_millis(100));
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_repeated_refresh_requests_settle() {
        let config = Config::default();
        let mut app = AppState::new(&config, names(&["old"]));
        app.attach_workers(Workers::spawn(Arc::new(SlowSource(names(&["fresh"])))));
        for _ in 0..3 {
            app.request_refresh();
        }
        assert!(app.is_loading());

        let deadline = Instant::now() + Duration::from_secs(5);
        while app.is_loading() {
            assert!(Instant::now() < deadline, "refresh never settled");
            app.tick();
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(app.menu().filtered().collect::<Vec<_>>(), ["fresh"]);
    }

    #[test]
    fn test_stale_refresh_is_ignored() {
        let config = Config::default();
        let mut app = AppState::new(&config, names(&["keep"]));
        app.request_id = 2;
        let changed = app.handle_response(WorkerResponse::Candidates {
            items: names(&["stale"]),
            request_id: 1,
        });
        assert!(!changed);
        assert_eq!(app.menu().selected_item(), Some("keep"));
    }
}
