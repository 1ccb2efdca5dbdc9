//! Presentation collaborators: the rendering contract the core calls
//! into, a plain-text implementation of it, and the interactive shell
//! that drives a board from stdin.

mod shell;
mod text;

pub use shell::Shell;
pub use text::TextSurface;

use crate::models::Question;

/// Rendering contract between the core and a presentation layer.
///
/// The core hands these methods data and treats the returned markup as
/// opaque; what the markup looks like — including the placeholder shown
/// for an empty board — belongs entirely to the implementation.
pub trait Surface {
    /// Render the question list. `None` (or an empty slice) means the
    /// board has nothing to show and the implementation renders its
    /// "no questions" placeholder.
    fn render_list(&self, questions: Option<&[&Question]>) -> String;

    /// Render one question in full, responses included.
    fn render_detail(&self, question: &Question) -> String;

    /// Render the new-question form.
    fn render_create_form(&self) -> String;
}
