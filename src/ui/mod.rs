//! Console session: the list view and the single UI event loop.
//!
//! Renders the roster as summary cards and reads commands line by line. The
//! form dialogue is sticky: prompts default to the current draft value, so a
//! draft kept after a failed submit can be corrected without retyping every
//! answer. All reading and writing goes through the generic `BufRead` and
//! `Write` parameters so tests can script a whole session.

use std::io::{self, BufRead, Write};

use crate::errors::AppError;
use crate::form::{FormMode, Submitted};
use crate::models::{fields, MemberDraft, Prefix};
use crate::store::RosterStore;
use crate::AppState;

const COMMANDS: &str = "Commands: add | edit <n> | delete <n> | list | cancel | quit";

/// Run the event loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    state: &mut AppState,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    writeln!(out, "Parliamentary Member Directory")?;
    render_roster(&state.store, out)?;
    writeln!(out, "{}", COMMANDS)?;

    loop {
        write_prompt(state, out)?;
        let Some(line) = read_line(input)? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, arg) = split_command(line);
        match command.to_ascii_lowercase().as_str() {
            "add" => run_form(state, input, out)?,
            "edit" => edit_command(state, arg, input, out)?,
            "delete" => delete_command(state, arg, out)?,
            "list" => render_roster(&state.store, out)?,
            "cancel" => cancel_command(state, out)?,
            "quit" | "exit" => break,
            other => {
                writeln!(out, "Unknown command '{}'. {}", other, COMMANDS)?;
            }
        }
    }

    writeln!(out, "Goodbye.")?;
    Ok(())
}

/// Prompt for every field in form order, then submit in the current mode.
fn run_form<R: BufRead, W: Write>(
    state: &mut AppState,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    writeln!(out, "--- {} ---", submit_label(state.form.mode()))?;
    if !state.form.draft().is_empty() {
        writeln!(out, "Press Enter to keep the value shown in brackets.")?;
    }

    for field in fields::ALL {
        let current = draft_value(state.form.draft(), field);
        if current.is_empty() {
            write!(out, "{}: ", field_prompt(field))?;
        } else {
            write!(out, "{} [{}]: ", field_prompt(field), current)?;
        }
        out.flush()?;

        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            writeln!(out, "Input ended; the draft was kept.")?;
            return Ok(());
        };
        let answer = line.trim();
        if !answer.is_empty() {
            state.form.update_field(field, answer)?;
        }
    }

    match state.form.submit(&mut state.store, &mut state.photos) {
        Ok(Submitted::Added { index }) => {
            writeln!(out, "Member added as card {}.", index + 1)?;
            render_roster(&state.store, out)?;
        }
        Ok(Submitted::Replaced { index }) => {
            writeln!(out, "Card {} updated.", index + 1)?;
            render_roster(&state.store, out)?;
        }
        Err(errors) => {
            writeln!(out, "Validation failed on {} field(s):", errors.len())?;
            for error in errors.iter() {
                writeln!(out, "  {}: {}", error.field, error.message)?;
            }
            writeln!(out, "Your answers were kept; enter `add` to correct them.")?;
        }
    }
    Ok(())
}

fn edit_command<R: BufRead, W: Write>(
    state: &mut AppState,
    arg: Option<&str>,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let index = match resolve_card(arg, state.store.len()) {
        Ok(index) => index,
        Err(e) => {
            tracing::warn!("edit rejected: {}", e);
            writeln!(out, "{}", e.message())?;
            return Ok(());
        }
    };

    if let Some(member) = state.store.get(index) {
        state.form.load_for_edit(index, member);
        writeln!(out, "Editing card {}: {}", index + 1, member.full_name())?;
        writeln!(out, "The photo must be selected again before saving.")?;
    }
    run_form(state, input, out)
}

fn delete_command<W: Write>(
    state: &mut AppState,
    arg: Option<&str>,
    out: &mut W,
) -> Result<(), AppError> {
    let index = match resolve_card(arg, state.store.len()) {
        Ok(index) => index,
        Err(e) => {
            tracing::warn!("delete rejected: {}", e);
            writeln!(out, "{}", e.message())?;
            return Ok(());
        }
    };

    let removed = state.store.remove_at(index);
    state.photos.release(&removed.photo);
    state.form.note_removal(index);
    writeln!(out, "Deleted card {}: {}", index + 1, removed.full_name())?;
    render_roster(&state.store, out)?;
    Ok(())
}

fn cancel_command<W: Write>(state: &mut AppState, out: &mut W) -> Result<(), AppError> {
    match state.form.mode() {
        FormMode::Editing(index) => {
            state.form.cancel_edit();
            writeln!(out, "Edit of card {} cancelled.", index + 1)?;
        }
        FormMode::Create => {
            if state.form.draft().is_empty() {
                writeln!(out, "Nothing to cancel.")?;
            } else {
                state.form.cancel_edit();
                writeln!(out, "Draft discarded.")?;
            }
        }
    }
    Ok(())
}

/// Render every member as a summary card, numbered from 1.
fn render_roster<W: Write>(store: &RosterStore, out: &mut W) -> io::Result<()> {
    if store.is_empty() {
        writeln!(out, "No members yet.")?;
        return Ok(());
    }

    writeln!(out, "Members:")?;
    for (index, member) in store.iter().enumerate() {
        writeln!(
            out,
            "[{}] {}  <{}>",
            index + 1,
            member.full_name(),
            member.photo.url()
        )?;
        writeln!(out, "    Party: {}", member.party)?;
        writeln!(out, "    Position: {} ({})", member.position, member.ministry)?;
        writeln!(out, "    Experience: {}", member.experience)?;
        writeln!(out, "    Achievement: {}", member.achievement)?;
        writeln!(out, "    Photo file: {}", member.photo.file_name())?;
    }
    Ok(())
}

fn write_prompt<W: Write>(state: &AppState, out: &mut W) -> io::Result<()> {
    match state.form.mode() {
        FormMode::Editing(index) => write!(out, "[editing card {}] > ", index + 1)?,
        FormMode::Create if !state.form.draft().is_empty() => {
            write!(out, "[draft pending] > ")?;
        }
        FormMode::Create => write!(out, "> ")?,
    }
    out.flush()
}

fn submit_label(mode: FormMode) -> &'static str {
    match mode {
        FormMode::Create => "Add member",
        FormMode::Editing(_) => "Save edit",
    }
}

fn field_prompt(field: &str) -> String {
    match field {
        fields::PREFIX => format!("Prefix ({})", prefix_options()),
        fields::FIRST_NAME => "First name".to_string(),
        fields::LAST_NAME => "Last name".to_string(),
        fields::PHOTO => "Photo file".to_string(),
        fields::EXPERIENCE => "Work experience".to_string(),
        fields::ACHIEVEMENT => "Past achievements".to_string(),
        fields::POSITION => "Ministerial position".to_string(),
        fields::MINISTRY => "Ministry".to_string(),
        fields::PARTY => "Political party".to_string(),
        other => other.to_string(),
    }
}

fn prefix_options() -> String {
    let names: Vec<&str> = Prefix::ALL.iter().map(|p| p.as_str()).collect();
    names.join(", ")
}

/// The draft's current answer for a field, as shown in the sticky prompt.
fn draft_value(draft: &MemberDraft, field: &str) -> String {
    match field {
        fields::PREFIX => draft.prefix.clone(),
        fields::FIRST_NAME => draft.first_name.clone(),
        fields::LAST_NAME => draft.last_name.clone(),
        fields::PHOTO => draft
            .photo_selection
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join("; "),
        fields::EXPERIENCE => draft.experience.clone(),
        fields::ACHIEVEMENT => draft.achievement.clone(),
        fields::POSITION => draft.position.clone(),
        fields::MINISTRY => draft.ministry.clone(),
        fields::PARTY => draft.party.clone(),
        _ => String::new(),
    }
}

/// Resolve a 1-based card argument against the current roster length.
fn resolve_card(arg: Option<&str>, len: usize) -> Result<usize, AppError> {
    let raw = arg.ok_or_else(|| AppError::NotFound("Expected a card number".to_string()))?;
    let number: usize = raw
        .parse()
        .map_err(|_| AppError::NotFound(format!("'{}' is not a card number", raw)))?;
    if number == 0 || number > len {
        return Err(AppError::NotFound(format!("No member at card {}", number)));
    }
    Ok(number - 1)
}

fn split_command(line: &str) -> (&str, Option<&str>) {
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => {
            let rest = rest.trim();
            (command, (!rest.is_empty()).then_some(rest))
        }
        None => (line, None),
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        Ok(None)
    } else {
        Ok(Some(buffer))
    }
}
