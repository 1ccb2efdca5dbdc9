//! Domain models for the question board.
//!
//! # Core Concepts
//!
//! - [`Question`]: a posted topic with its ordered, append-only list of
//!   [`Response`]s. Created by form submission, removed when resolved.
//! - [`QuestionId`]: opaque identifier with loose (string-normalized)
//!   equality, tolerant of the numeric ids older boards persisted.
//! - Input types ([`CreateQuestionInput`], [`CreateResponseInput`]) carry
//!   raw form fields into the repository, which validates them.

mod question;
mod response;

pub use question::*;
pub use response::*;
