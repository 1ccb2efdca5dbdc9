//! The question repository: the canonical in-memory collection, kept in
//! agreement with the persistent store on every mutation.

use crate::error::{Error, Result};
use crate::models::{CreateQuestionInput, CreateResponseInput, Question, QuestionId, Response};
use crate::store::QuestionStore;

/// Owns the question collection and its persisted mirror.
///
/// Mutations validate first, then persist, then commit: the updated
/// collection is written to the store before it becomes the in-memory
/// state, so a storage failure leaves the repository exactly as it was
/// and the two copies never diverge.
pub struct Repository {
    store: QuestionStore,
    questions: Vec<Question>,
}

impl Repository {
    /// Open the repository, loading the persisted collection.
    pub fn open(mut store: QuestionStore) -> Result<Self> {
        let questions = store.load()?;
        Ok(Self { store, questions })
    }

    /// Post a new question.
    pub fn add(&mut self, input: CreateQuestionInput) -> Result<Question> {
        let subject = required(&input.subject, "subject")?;
        let body = required(&input.body, "question")?;

        let question = Question {
            id: QuestionId::generate(),
            subject,
            body,
            responses: Vec::new(),
        };

        let mut updated = self.questions.clone();
        updated.push(question.clone());
        self.commit(updated)?;

        tracing::debug!(id = %question.id, "question added");
        Ok(question)
    }

    /// Append a response to an existing question.
    pub fn append_response(
        &mut self,
        id: &QuestionId,
        input: CreateResponseInput,
    ) -> Result<Question> {
        let author = required(&input.author, "name")?;
        let body = required(&input.body, "response")?;

        let index = self
            .index_of(id)
            .ok_or_else(|| Error::NotFound { id: id.clone() })?;

        let mut updated = self.questions.clone();
        updated[index].responses.push(Response { author, body });
        self.commit(updated)?;

        Ok(self.questions[index].clone())
    }

    /// Remove a resolved question.
    pub fn remove(&mut self, id: &QuestionId) -> Result<()> {
        let index = self
            .index_of(id)
            .ok_or_else(|| Error::NotFound { id: id.clone() })?;

        let mut updated = self.questions.clone();
        updated.remove(index);
        self.commit(updated)?;

        tracing::debug!(id = %id, "question resolved");
        Ok(())
    }

    /// Look a question up by identifier.
    ///
    /// A linear scan with loose identifier equality: identifiers coming
    /// back from the presentation layer may have been parsed from a
    /// different representation than the stored one, so the comparison is
    /// over normalized string forms.
    pub fn find_by_id(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id.matches(id))
    }

    /// The full collection in insertion order.
    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    fn index_of(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id.matches(id))
    }

    /// Persist `updated`, then make it the in-memory collection.
    fn commit(&mut self, updated: Vec<Question>) -> Result<()> {
        self.store.save(&updated)?;
        self.questions = updated;
        Ok(())
    }
}

fn required(value: &str, field: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation { field });
    }
    Ok(trimmed.to_string())
}
