//! Case-insensitive substring search over the question collection.

use crate::models::Question;

/// Return the questions whose subject or body contains `query`,
/// case-insensitively, preserving collection order.
///
/// An empty query matches every question. Pure: no repository access, no
/// mutation. Responses are not searched; only the two fields a list entry
/// is built from.
pub fn filter<'a>(questions: &'a [Question], query: &str) -> Vec<&'a Question> {
    let needle = query.to_lowercase();
    questions
        .iter()
        .filter(|q| {
            q.subject.to_lowercase().contains(&needle) || q.body.to_lowercase().contains(&needle)
        })
        .collect()
}
