//! Plain-text rendering of board state.

use crate::models::Question;

use super::Surface;

/// Renders board state as plain text for the interactive shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextSurface;

impl Surface for TextSurface {
    fn render_list(&self, questions: Option<&[&Question]>) -> String {
        let Some(questions) = questions.filter(|qs| !qs.is_empty()) else {
            return "  (no questions yet; post one with `ask`)".to_string();
        };

        let mut out = String::new();
        for (position, question) in questions.iter().enumerate() {
            let count = question.responses.len();
            out.push_str(&format!(
                "  [{}] {} ({} response{})\n",
                position + 1,
                question.subject,
                count,
                if count == 1 { "" } else { "s" },
            ));
        }
        out.pop();
        out
    }

    fn render_detail(&self, question: &Question) -> String {
        let mut out = format!("== {} ==\n{}\n", question.subject, question.body);
        if question.responses.is_empty() {
            out.push_str("\n(no responses yet)");
        } else {
            for response in &question.responses {
                out.push_str(&format!("\n{}: {}", response.author, response.body));
            }
        }
        out
    }

    fn render_create_form(&self) -> String {
        "-- new question --\nsubject and question text are both required".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuestionId, Response};

    fn question(subject: &str, responses: usize) -> Question {
        Question {
            id: QuestionId::generate(),
            subject: subject.to_string(),
            body: "body".to_string(),
            responses: (0..responses)
                .map(|n| Response {
                    author: format!("author {n}"),
                    body: format!("response {n}"),
                })
                .collect(),
        }
    }

    #[test]
    fn empty_list_renders_the_placeholder() {
        let surface = TextSurface;
        assert!(surface.render_list(None).contains("no questions yet"));
        assert!(surface.render_list(Some(&[])).contains("no questions yet"));
    }

    #[test]
    fn list_entries_are_numbered_with_response_counts() {
        let surface = TextSurface;
        let a = question("Printer jam", 1);
        let b = question("WiFi down", 0);

        let markup = surface.render_list(Some(&[&a, &b]));
        assert!(markup.contains("[1] Printer jam (1 response)"));
        assert!(markup.contains("[2] WiFi down (0 responses)"));
    }

    #[test]
    fn detail_includes_every_response_in_order() {
        let surface = TextSurface;
        let markup = surface.render_detail(&question("Printer jam", 2));

        let first = markup.find("response 0").unwrap();
        let second = markup.find("response 1").unwrap();
        assert!(first < second);
    }
}
