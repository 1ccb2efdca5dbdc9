//! Detail-view coherence: which question is expanded, and when the detail
//! view must be dismissed.

use crate::models::{Question, QuestionId};
use crate::repo::Repository;

/// Tracks the at-most-one question currently shown in the detail view.
///
/// The controller never creates or mutates questions; it only decides
/// whether the detail view may stay open as the collection and the search
/// filter change underneath it.
#[derive(Debug, Default)]
pub struct ViewController {
    expanded: Option<QuestionId>,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand a question. Succeeds only when the identifier resolves in
    /// the full collection; the detail view shows the whole question
    /// regardless of the current filter.
    pub fn select<'a>(&mut self, repo: &'a Repository, id: &QuestionId) -> Option<&'a Question> {
        let question = repo.find_by_id(id)?;
        self.expanded = Some(question.id.clone());
        Some(question)
    }

    /// Called after every repository mutation. Clears the expanded
    /// reference when its referent no longer exists.
    pub fn on_mutation(&mut self, repo: &Repository) {
        if let Some(id) = &self.expanded {
            if repo.find_by_id(id).is_none() {
                tracing::debug!(id = %id, "expanded question is gone, closing detail view");
                self.expanded = None;
            }
        }
    }

    /// Called when the filtered view changes. A question that is filtered
    /// out cannot remain in the detail view; returns `true` when the
    /// detail view must close.
    pub fn on_filter_change(&mut self, visible: &[&Question]) -> bool {
        let Some(id) = &self.expanded else {
            return false;
        };
        if visible.iter().any(|q| q.id.matches(id)) {
            return false;
        }
        self.expanded = None;
        true
    }

    /// Explicit reset, used after a resolve or when the creation form
    /// opens.
    pub fn clear(&mut self) {
        self.expanded = None;
    }

    pub fn expanded_id(&self) -> Option<&QuestionId> {
        self.expanded.as_ref()
    }
}

/// List-view presentation decision: `Some` of a non-empty set of questions
/// to display, `None` when the list must show its "no questions"
/// placeholder. The placeholder is a view artifact — never persisted and
/// never a synthetic [`Question`] mixed into real data.
pub fn list_content<'a>(visible: &'a [&'a Question]) -> Option<&'a [&'a Question]> {
    if visible.is_empty() {
        None
    } else {
        Some(visible)
    }
}
