//! Core runtime logic for coolmenu.
//!
//! This module contains the non-UI "engine" pieces used by the application:
//! - [matcher]: the substring and fuzzy matching rules, see [Matcher] and [CandidateSet].
//! - [scan]: PATH enumeration of executable names.
//! - [cache]: the JSON candidate cache.
//! - [source]: the [CandidateSource] abstraction and the [PathSource] provider.
//! - [worker]: the background refresh thread.
//! - [terminal]: terminal setup/teardown and the main crossterm/ratatui event loop.
//! - [launch]: replacing the process with the chosen command.

pub mod cache;
pub mod launch;
pub mod matcher;
pub mod scan;
pub mod source;
pub mod terminal;
pub mod worker;

pub use matcher::{CandidateSet, MatchStrategy, Matcher, fuzzy_score, substring_match};
pub use source::{CandidateSource, Candidates, Origin, PathSource};
pub use worker::{RefreshStatus, WorkerResponse, WorkerTask, Workers};
