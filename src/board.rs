//! The board surface: the user-triggered operations a presentation layer
//! dispatches, wiring repository, view controller, and renderer together.

use crate::error::{Error, Result};
use crate::models::{CreateQuestionInput, CreateResponseInput, Question, QuestionId};
use crate::repo::Repository;
use crate::search;
use crate::ui::Surface;
use crate::view::{self, ViewController};

/// Which screen regions changed as a result of an operation.
///
/// `list` is the question list, `panel` the detail/creation area of the
/// two-pane layout. `None` leaves a region untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenUpdate {
    pub list: Option<String>,
    pub panel: Option<String>,
}

/// One question board wired to a rendering surface.
///
/// The board receives identifiers and form fields as plain values and
/// calls the [`Surface`] with data only; it owns no markup and never
/// inspects what the presentation layer built from previous renders.
pub struct Board<S: Surface> {
    repo: Repository,
    controller: ViewController,
    query: String,
    surface: S,
}

impl<S: Surface> Board<S> {
    pub fn new(repo: Repository, surface: S) -> Self {
        Self {
            repo,
            controller: ViewController::new(),
            query: String::new(),
            surface,
        }
    }

    /// Initial paint: the (possibly filtered) list plus the creation form.
    pub fn refresh(&mut self) -> ScreenUpdate {
        self.controller.clear();
        ScreenUpdate {
            list: Some(self.render_list()),
            panel: Some(self.surface.render_create_form()),
        }
    }

    /// Repaint the list without touching the detail panel.
    pub fn show_list(&self) -> ScreenUpdate {
        ScreenUpdate {
            list: Some(self.render_list()),
            panel: None,
        }
    }

    /// Open the creation form, dismissing any expanded question.
    pub fn open_create_form(&mut self) -> ScreenUpdate {
        self.controller.clear();
        ScreenUpdate {
            list: None,
            panel: Some(self.surface.render_create_form()),
        }
    }

    /// Post a new question.
    pub fn create_question(&mut self, input: CreateQuestionInput) -> Result<ScreenUpdate> {
        self.repo.add(input)?;
        self.controller.on_mutation(&self.repo);
        Ok(ScreenUpdate {
            list: Some(self.render_list()),
            panel: None,
        })
    }

    /// Expand a question into the detail panel.
    pub fn select_question(&mut self, id: &QuestionId) -> Result<ScreenUpdate> {
        let question = self
            .controller
            .select(&self.repo, id)
            .ok_or_else(|| Error::NotFound { id: id.clone() })?;
        Ok(ScreenUpdate {
            list: None,
            panel: Some(self.surface.render_detail(question)),
        })
    }

    /// Append a response to a question and repaint its detail.
    pub fn append_response(
        &mut self,
        id: &QuestionId,
        input: CreateResponseInput,
    ) -> Result<ScreenUpdate> {
        let question = self.repo.append_response(id, input)?;
        self.controller.on_mutation(&self.repo);
        Ok(ScreenUpdate {
            list: Some(self.render_list()),
            panel: Some(self.surface.render_detail(&question)),
        })
    }

    /// Resolve (remove) a question. The detail view closes and the panel
    /// returns to the creation form.
    pub fn resolve_question(&mut self, id: &QuestionId) -> Result<ScreenUpdate> {
        self.repo.remove(id)?;
        self.controller.on_mutation(&self.repo);
        self.controller.clear();
        Ok(ScreenUpdate {
            list: Some(self.render_list()),
            panel: Some(self.surface.render_create_form()),
        })
    }

    /// Change the search query. Closes the detail view when the expanded
    /// question is filtered out.
    pub fn update_search(&mut self, query: &str) -> ScreenUpdate {
        self.query = query.to_string();
        let visible = search::filter(self.repo.all(), &self.query);
        let must_close = self.controller.on_filter_change(&visible);
        ScreenUpdate {
            list: Some(self.surface.render_list(view::list_content(&visible))),
            panel: must_close.then(|| self.surface.render_create_form()),
        }
    }

    /// Identifier of the currently expanded question, if any.
    pub fn expanded_id(&self) -> Option<&QuestionId> {
        self.controller.expanded_id()
    }

    /// The questions currently visible through the search filter, in
    /// collection order. The presentation layer derives its list-position
    /// to identifier mapping from this.
    pub fn visible(&self) -> Vec<&Question> {
        search::filter(self.repo.all(), &self.query)
    }

    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    fn render_list(&self) -> String {
        let visible = search::filter(self.repo.all(), &self.query);
        self.surface.render_list(view::list_content(&visible))
    }
}
