//! qboard — a local question and answer board.
//!
//! Questions are posted with a subject and a body, grow an append-only list
//! of responses, and disappear when resolved. The whole collection is
//! persisted wholesale as a single JSON document, readable by and
//! compatible with boards written by earlier versions.
//!
//! The crate keeps the state manager separate from presentation:
//! [`repo::Repository`] owns the collection and its persisted mirror,
//! [`view::ViewController`] decides detail-view visibility, and
//! [`board::Board`] exposes the user-triggered operations, calling an
//! abstract rendering [`ui::Surface`] with data only. Markup and input
//! handling live entirely in the presentation layer.

pub mod board;
pub mod error;
pub mod models;
pub mod repo;
pub mod search;
pub mod store;
pub mod ui;
pub mod view;
