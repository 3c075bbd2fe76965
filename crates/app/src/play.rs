//! Interactive terminal run over one question group.

use std::error::Error;
use std::io::{self, BufRead, Write};

use quiz_core::{AnswerOutcome, Question, QuestionGroupCollection, Score};
use services::{QuizSession, QuizSessionService, SessionEnd};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    pub end: SessionEnd,
    pub score: Score,
}

enum Reply {
    Answered(AnswerOutcome),
    Quit,
}

/// Ask every question in the group titled `title`, reading self-graded
/// answers from `input`. End of input cancels the run.
///
/// # Errors
///
/// Returns session errors (unknown group, failed score save) and terminal
/// I/O errors.
pub fn play<R: BufRead, W: Write>(
    sessions: &QuizSessionService,
    collection: &mut QuestionGroupCollection,
    title: &str,
    mut input: R,
    out: &mut W,
) -> Result<PlayOutcome, Box<dyn Error>> {
    let mut session = sessions.start_session(collection, title)?;
    writeln!(
        out,
        "{} ({}, {} questions)",
        session.title(),
        session.choice().title(),
        session.progress().total
    )?;

    loop {
        let question = session.current_question()?.clone();
        match ask(&question, &session.index_title(), &mut input, out)? {
            Reply::Answered(outcome) => {
                let result = sessions.answer_current(collection, &mut session, outcome)?;
                if let Some(score) = result.saved_score {
                    writeln!(out)?;
                    writeln!(out, "Done! {}", describe(score))?;
                    return Ok(PlayOutcome {
                        end: SessionEnd::Completed,
                        score,
                    });
                }
            }
            Reply::Quit => return cancel(sessions, collection, &session, out),
        }
    }
}

fn ask<R: BufRead, W: Write>(
    question: &Question,
    index_title: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<Reply> {
    writeln!(out)?;
    writeln!(out, "[{index_title}] {}", question.prompt())?;

    match read_reply(input, out, "enter to reveal, q to quit> ")? {
        Some(line) if !is_quit(&line) => {}
        _ => return Ok(Reply::Quit),
    }

    writeln!(out, "  answer: {}", question.answer())?;
    if question.has_hint() {
        writeln!(out, "  hint: {}", question.hint())?;
    }

    loop {
        let Some(line) = read_reply(input, out, "correct? [y/n/q]> ")? else {
            return Ok(Reply::Quit);
        };
        match line.to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(Reply::Answered(AnswerOutcome::Correct)),
            "n" | "no" => return Ok(Reply::Answered(AnswerOutcome::Incorrect)),
            "q" | "quit" => return Ok(Reply::Quit),
            _ => writeln!(out, "please answer y or n")?,
        }
    }
}

fn cancel<W: Write>(
    sessions: &QuizSessionService,
    collection: &mut QuestionGroupCollection,
    session: &QuizSession,
    out: &mut W,
) -> Result<PlayOutcome, Box<dyn Error>> {
    let score = sessions.cancel_session(collection, session)?;
    writeln!(out)?;
    writeln!(out, "Stopped early. {}", describe(score))?;
    Ok(PlayOutcome {
        end: SessionEnd::Cancelled,
        score,
    })
}

/// Trimmed line, or `None` at end of input.
fn read_reply<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit")
}

pub fn describe(score: Score) -> String {
    format!(
        "{} correct, {} incorrect ({:.0}%)",
        score.correct_count(),
        score.incorrect_count(),
        score.running_percentage() * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use services::AppServices;
    use storage::{SeedSource, StaticSeed, Storage};

    const SEED: &str = r#"[
        { "title": "Pair", "questions": [
            { "answer": "1", "hint": "digit", "prompt": "one" },
            { "answer": "2", "prompt": "two" }
        ] }
    ]"#;

    fn fixture() -> (Storage, AppServices, QuestionGroupCollection) {
        let storage = Storage::in_memory_with_seed(StaticSeed::new(SEED));
        let services = AppServices::from_storage(&storage, "groups");
        let collection = storage.seed.load_seed().unwrap();
        (storage, services, collection)
    }

    fn run(input: &str) -> (PlayOutcome, String, QuestionGroupCollection) {
        let (_storage, services, mut collection) = fixture();
        let mut out = Vec::new();
        let outcome = play(
            &services.sessions(),
            &mut collection,
            "Pair",
            input.as_bytes(),
            &mut out,
        )
        .unwrap();
        (outcome, String::from_utf8(out).unwrap(), collection)
    }

    #[test]
    fn full_run_completes_and_scores() {
        let (outcome, transcript, collection) = run("\ny\n\nn\n");
        assert_eq!(outcome.end, SessionEnd::Completed);
        assert_eq!(outcome.score, Score::new(1, 1));
        assert_eq!(collection.get("Pair").unwrap().score(), Score::new(1, 1));

        assert!(transcript.contains("[1/2] one"));
        assert!(transcript.contains("  answer: 1"));
        assert!(transcript.contains("  hint: digit"));
        assert!(transcript.contains("[2/2] two"));
        assert!(transcript.contains("Done! 1 correct, 1 incorrect (50%)"));
    }

    #[test]
    fn missing_hint_is_not_shown() {
        let (_, transcript, _) = run("\ny\n\ny\n");
        assert_eq!(transcript.matches("hint:").count(), 1);
    }

    #[test]
    fn unrecognized_grade_is_asked_again() {
        let (outcome, transcript, _) = run("\nmaybe\nY\n\nyes\n");
        assert_eq!(outcome.score, Score::new(2, 0));
        assert!(transcript.contains("please answer y or n"));
    }

    #[test]
    fn quitting_saves_partial_score() {
        let (outcome, transcript, collection) = run("\ny\nq\n");
        assert_eq!(outcome.end, SessionEnd::Cancelled);
        assert_eq!(outcome.score, Score::new(1, 0));
        assert_eq!(collection.get("Pair").unwrap().score(), Score::new(1, 0));
        assert!(transcript.contains("Stopped early."));
    }

    #[test]
    fn end_of_input_cancels() {
        let (outcome, _, _) = run("");
        assert_eq!(outcome.end, SessionEnd::Cancelled);
        assert_eq!(outcome.score, Score::default());
    }

    #[test]
    fn unknown_group_is_an_error() {
        let (_storage, services, mut collection) = fixture();
        let mut out = Vec::new();
        let err = play(
            &services.sessions(),
            &mut collection,
            "Missing",
            "".as_bytes(),
            &mut out,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Missing"));
    }
}
