//! Non-interactive subcommands.

use std::error::Error;
use std::io::Write;

use quiz_core::{QuestionGroupBuilder, QuestionGroupCollection, StrategyChoice};
use services::{QuestionGroupService, SettingsService};

use crate::play::describe;

pub fn list_groups<W: Write>(
    collection: &QuestionGroupCollection,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let rows = QuestionGroupService::summaries(collection);
    if rows.is_empty() {
        writeln!(out, "no question groups")?;
        return Ok(());
    }

    let width = rows.iter().map(|row| row.title.chars().count()).max().unwrap_or(0);
    for row in rows {
        let pad = width - row.title.chars().count();
        let last = if row.score.total() == 0 {
            "not played yet".to_owned()
        } else {
            describe(row.score)
        };
        writeln!(
            out,
            "{}{}  {:>3} questions  {last}",
            row.title,
            " ".repeat(pad),
            row.question_count
        )?;
    }
    Ok(())
}

pub fn show_strategy<W: Write>(settings: &SettingsService, out: &mut W) -> Result<(), Box<dyn Error>> {
    let current = settings.strategy_choice()?;
    for choice in StrategyChoice::ALL {
        let marker = if choice == current { '*' } else { ' ' };
        writeln!(out, "{marker} {:<10} {}", choice.as_str(), choice.title())?;
    }
    Ok(())
}

pub fn set_strategy<W: Write>(
    settings: &SettingsService,
    choice: StrategyChoice,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    settings.set_strategy_choice(choice)?;
    writeln!(out, "question order set to {}", choice.title())?;
    Ok(())
}

/// Build a group from `PROMPT|ANSWER[|HINT]` entries and save it.
///
/// # Errors
///
/// Returns the first validation error, in entry order, or a storage error.
pub fn add_group<W: Write>(
    groups: &QuestionGroupService,
    collection: &mut QuestionGroupCollection,
    title: &str,
    entries: &[String],
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let builder = group_builder(title, entries);
    groups.create_group(collection, &builder)?;
    writeln!(
        out,
        "added {title:?} with {} questions",
        builder.questions.len()
    )?;
    Ok(())
}

fn group_builder(title: &str, entries: &[String]) -> QuestionGroupBuilder {
    let mut builder = QuestionGroupBuilder::new().with_title(title);
    for entry in entries {
        let mut parts = entry.splitn(3, '|').map(str::trim);
        let question = builder.add_new_question();
        question.prompt = parts.next().unwrap_or_default().to_owned();
        question.answer = parts.next().unwrap_or_default().to_owned();
        question.hint = parts.next().unwrap_or_default().to_owned();
    }
    builder
}
