//! Interactive shell over a board.

use std::io::{self, BufRead, Write};

use crate::board::{Board, ScreenUpdate};
use crate::error::Error;
use crate::models::{CreateQuestionInput, CreateResponseInput, QuestionId};
use crate::repo::Repository;

use super::TextSurface;

const HELP: &str = "\
commands:
  list              show the question list
  ask               post a new question
  open <n>          expand question n from the list
  respond           answer the open question
  resolve           remove the open question
  search [terms]    filter the list (no terms clears the filter)
  new               back to the new-question form
  help              this text
  quit              leave the board";

/// Line-oriented front end for a question board.
///
/// The shell owns everything the core must not know about: prompting,
/// command parsing, and the mapping from rendered list positions to
/// question identifiers. Identifiers cross into the core as plain values.
pub struct Shell {
    board: Board<TextSurface>,
    /// Identifier behind each entry of the last rendered list, in display
    /// order. `open <n>` resolves through this.
    listed: Vec<QuestionId>,
}

impl Shell {
    pub fn new(repo: Repository) -> Self {
        Self {
            board: Board::new(repo, TextSurface),
            listed: Vec::new(),
        }
    }

    /// Run the read-dispatch-repaint loop until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut out = io::stdout();

        let first = self.board.refresh();
        self.apply(first, &mut out)?;
        writeln!(out, "type `help` for commands")?;

        let mut line = String::new();
        loop {
            write!(out, "> ")?;
            out.flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }

            let input = line.trim();
            let (command, rest) = match input.split_once(char::is_whitespace) {
                Some((command, rest)) => (command, rest.trim()),
                None => (input, ""),
            };

            let update = match command {
                "" => None,
                "help" => {
                    writeln!(out, "{HELP}")?;
                    None
                }
                "quit" | "exit" => break,
                "list" => Some(self.board.show_list()),
                "new" => Some(self.board.open_create_form()),
                "search" => Some(self.board.update_search(rest)),
                "ask" => {
                    let subject = prompt(&stdin, &mut out, "subject")?;
                    let body = prompt(&stdin, &mut out, "question")?;
                    report(
                        self.board
                            .create_question(CreateQuestionInput { subject, body }),
                        &mut out,
                    )?
                }
                "open" => match self.position_to_id(rest) {
                    Some(id) => report(self.board.select_question(&id), &mut out)?,
                    None => {
                        writeln!(out, "usage: open <n>, with n taken from the list")?;
                        None
                    }
                },
                "respond" => match self.board.expanded_id().cloned() {
                    Some(id) => {
                        let author = prompt(&stdin, &mut out, "name")?;
                        let body = prompt(&stdin, &mut out, "response")?;
                        report(
                            self.board
                                .append_response(&id, CreateResponseInput { author, body }),
                            &mut out,
                        )?
                    }
                    None => {
                        writeln!(out, "no question is open; `open <n>` first")?;
                        None
                    }
                },
                "resolve" => match self.board.expanded_id().cloned() {
                    Some(id) => report(self.board.resolve_question(&id), &mut out)?,
                    None => {
                        writeln!(out, "no question is open; `open <n>` first")?;
                        None
                    }
                },
                _ => {
                    writeln!(out, "unknown command `{command}`; try `help`")?;
                    None
                }
            };

            if let Some(update) = update {
                self.apply(update, &mut out)?;
            }
        }

        Ok(())
    }

    fn position_to_id(&self, arg: &str) -> Option<QuestionId> {
        let position: usize = arg.parse().ok()?;
        self.listed.get(position.checked_sub(1)?).cloned()
    }

    /// Print the repainted regions and refresh the position mapping.
    fn apply(&mut self, update: ScreenUpdate, out: &mut impl Write) -> io::Result<()> {
        if let Some(list) = update.list {
            writeln!(out, "{list}")?;
            self.listed = self.board.visible().iter().map(|q| q.id.clone()).collect();
        }
        if let Some(panel) = update.panel {
            writeln!(out, "{panel}")?;
        }
        Ok(())
    }
}

fn prompt(stdin: &io::Stdin, out: &mut impl Write, label: &str) -> io::Result<String> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Print a recovered domain error, or hand the update through.
fn report(
    result: crate::error::Result<ScreenUpdate>,
    out: &mut impl Write,
) -> io::Result<Option<ScreenUpdate>> {
    match result {
        Ok(update) => Ok(Some(update)),
        Err(err @ Error::Validation { .. }) | Err(err @ Error::NotFound { .. }) => {
            tracing::warn!("recovered: {err}");
            writeln!(out, "{err}")?;
            Ok(None)
        }
        Err(err @ Error::Storage(_)) => {
            tracing::error!("storage failure: {err}");
            writeln!(out, "{err}; nothing was changed")?;
            Ok(None)
        }
    }
}
