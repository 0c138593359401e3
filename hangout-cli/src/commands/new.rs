use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dialoguer::{Confirm, Input};
use hangout_core::error::ValidationError;
use hangout_core::image::ImageSlot;
use hangout_core::storage::StoragePort;
use hangout_core::{Editor, EditorError, Field, Hangout, Route, Viewer};
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::utils::date::normalize_date;
use crate::utils::tui::create_spinner;

/// Values given on the command line. Anything missing is asked for.
pub struct NewEvent {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub cost: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<String>,
    pub links: Vec<String>,
    pub image: Option<PathBuf>,
    pub background: Option<PathBuf>,
}

impl NewEvent {
    fn has_all_required(&self) -> bool {
        self.name.is_some()
            && self.phone.is_some()
            && self.date.is_some()
            && self.location.is_some()
            && self.cost.is_some()
            && self.description.is_some()
    }
}

pub async fn run(hangout: &Hangout, input: NewEvent) -> Result<()> {
    let interactive = !input.has_all_required() && std::io::stdin().is_terminal();
    let mut editor = Editor::new(hangout.store()?);

    // --- Required text ---
    let given = [
        (Field::EventName, input.name),
        (Field::Phone, input.phone),
        (Field::DateTime, input.date),
        (Field::Location, input.location),
        (Field::Cost, input.cost),
        (Field::Description, input.description),
    ];
    for (field, value) in given {
        match value {
            Some(value) => apply_given(&mut editor, field, &value, interactive, prompt_field)?,
            None if interactive => prompt_field(&mut editor, field)?,
            None => {}
        }
    }

    // --- Capacity ---
    if let Some(capacity) = input.capacity {
        editor.enable_capacity();
        apply_given(&mut editor, Field::Capacity, &capacity, interactive, prompt_field)?;
    } else if interactive && confirm("  Add a capacity?")? {
        editor.enable_capacity();
        prompt_field(&mut editor, Field::Capacity)?;
    }

    // --- Links ---
    if !input.links.is_empty() {
        editor.enable_links();
        for (i, link) in input.links.into_iter().enumerate() {
            if i > 0 {
                editor.add_link();
            }
            editor.update_link(i, link);
        }
    } else if interactive && confirm("  Add links?")? {
        editor.enable_links();
        prompt_links(&mut editor)?;
    }

    // --- Images ---
    for (slot, path) in [
        (ImageSlot::Foreground, input.image),
        (ImageSlot::Background, input.background),
    ] {
        if let Some(path) = path {
            editor
                .load_image(slot, &path)
                .await
                .with_context(|| format!("Could not use {} for the {}", path.display(), slot))?;
        }
    }

    // --- Go live ---
    let record = loop {
        let spinner = create_spinner("  Going live".to_string());
        let result = editor.go_live();
        spinner.finish_and_clear();

        match result {
            Ok(record) => break record,
            Err(EditorError::Validation(ValidationError::Missing(field))) if interactive => {
                eprintln!("  {}", ValidationError::Missing(field).to_string().red());
                prompt_field(&mut editor, field)?;
            }
            Err(e) => anyhow::bail!("{}", e),
        }
    };

    let route = Route::event(&record.id);
    if interactive {
        println!();
    }
    println!("{}", format!("  Live at {}", route).green());
    println!();

    // Navigate to the event page
    let store = editor.into_store();
    let mut viewer = Viewer::new();
    println!("{}", viewer.load(&store, route.event_id()).render());

    Ok(())
}

fn set_field<S: StoragePort>(editor: &mut Editor<S>, field: Field, value: &str) -> Result<()> {
    let value = match field {
        Field::DateTime => normalize_date(value)?,
        _ => value.to_string(),
    };
    editor.update(field, value).map_err(|e| anyhow::anyhow!("{}", e))
}

/// Set a value from the command line. Interactive sessions ask again when
/// the editor refuses it.
fn apply_given<S: StoragePort>(
    editor: &mut Editor<S>,
    field: Field,
    value: &str,
    interactive: bool,
    ask_again: impl FnOnce(&mut Editor<S>, Field) -> Result<()>,
) -> Result<()> {
    match set_field(editor, field, value) {
        Err(e) if interactive => {
            eprintln!("  {}", e.to_string().red());
            ask_again(editor, field)
        }
        other => other,
    }
}

/// Ask for one field until the editor accepts it.
fn prompt_field<S: StoragePort>(editor: &mut Editor<S>, field: Field) -> Result<()> {
    loop {
        let value: String = Input::new()
            .with_prompt(format!("  {}", field.label()))
            .allow_empty(true)
            .interact_text()?;

        match set_field(editor, field, &value) {
            Ok(()) => return Ok(()),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

fn prompt_links<S: StoragePort>(editor: &mut Editor<S>) -> Result<()> {
    for index in 0.. {
        let link: String = Input::new()
            .with_prompt(format!("  Link {} (skip)", index + 1))
            .allow_empty(true)
            .interact_text()?;

        if link.trim().is_empty() {
            break;
        }
        if index > 0 {
            editor.add_link();
        }
        editor.update_link(index, link);
    }

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangout_core::EventStore;
    use hangout_core::storage::MemoryStorage;

    fn editor() -> Editor<MemoryStorage> {
        Editor::new(EventStore::new(MemoryStorage::new()))
    }

    #[test]
    fn rejected_date_flag_asks_again_when_interactive() {
        let mut editor = editor();

        apply_given(&mut editor, Field::DateTime, "2000-01-01", true, |e, f| {
            set_field(e, f, "2999-01-01")
        })
        .unwrap();

        assert_eq!(editor.draft().get(Field::DateTime), "2999-01-01");
    }

    #[test]
    fn rejected_date_flag_fails_without_a_terminal() {
        let mut editor = editor();

        let err = apply_given(&mut editor, Field::DateTime, "2000-01-01", false, |_, _| {
            panic!("should not ask")
        })
        .unwrap_err();

        assert_eq!(err.to_string(), "Event Date must be sometime in the future");
        assert_eq!(editor.draft().get(Field::DateTime), "");
    }

    #[test]
    fn accepted_flag_does_not_ask() {
        let mut editor = editor();

        apply_given(&mut editor, Field::EventName, "Board Game Night", true, |_, _| {
            panic!("should not ask")
        })
        .unwrap();

        assert_eq!(editor.draft().get(Field::EventName), "Board Game Night");
    }
}
