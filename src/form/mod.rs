//! Form controller: collects and validates one member draft at a time.
//!
//! The controller runs in one of two modes, create or edit, tracked as an
//! explicit tagged state. Validation is deferred to submit; a failed submit
//! returns one message per offending field and leaves both the draft and the
//! roster untouched.

use std::path::{Path, PathBuf};

use crate::errors::AppError;
use crate::models::{fields, Member, MemberDraft, Prefix};
use crate::photo::PhotoBinder;
use crate::store::RosterStore;

/// Whether the form is creating a new member or editing an admitted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Editing the member at this roster position.
    Editing(usize),
}

impl Default for FormMode {
    fn default() -> Self {
        FormMode::Create
    }
}

/// One failed field with its human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Per-field validation failures, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: &str) {
        self.errors.push(FieldError {
            field,
            message: message.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

/// A draft that passed every rule, with the prefix parsed and the photo
/// selection narrowed to its single path.
#[derive(Debug)]
pub struct ValidDraft<'a> {
    pub prefix: Prefix,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub photo_path: &'a Path,
    pub experience: &'a str,
    pub achievement: &'a str,
    pub position: &'a str,
    pub ministry: &'a str,
    pub party: &'a str,
}

fn required_text<'a>(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &'a str,
    message: &str,
) -> Option<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, message);
        None
    } else {
        Some(trimmed)
    }
}

/// Validate a draft against the member schema.
///
/// Every rule is applied independently so the result carries one message per
/// failed field, keyed by the form field key.
pub fn validate(draft: &MemberDraft) -> Result<ValidDraft<'_>, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let prefix_raw = draft.prefix.trim();
    let prefix = if prefix_raw.is_empty() {
        errors.push(fields::PREFIX, "Please select a prefix");
        None
    } else {
        let parsed = Prefix::from_str(prefix_raw);
        if parsed.is_none() {
            errors.push(fields::PREFIX, "Please choose Mr., Mrs. or Ms.");
        }
        parsed
    };

    let first_name = required_text(
        &mut errors,
        fields::FIRST_NAME,
        &draft.first_name,
        "Please enter a first name",
    );
    let last_name = required_text(
        &mut errors,
        fields::LAST_NAME,
        &draft.last_name,
        "Please enter a last name",
    );

    let photo_path = match draft.photo_selection.as_slice() {
        [path] => Some(path.as_path()),
        _ => {
            errors.push(fields::PHOTO, "Please select exactly one photo");
            None
        }
    };

    let experience = required_text(
        &mut errors,
        fields::EXPERIENCE,
        &draft.experience,
        "Please enter the work experience",
    );
    let achievement = required_text(
        &mut errors,
        fields::ACHIEVEMENT,
        &draft.achievement,
        "Please enter past achievements",
    );
    let position = required_text(
        &mut errors,
        fields::POSITION,
        &draft.position,
        "Please enter the ministerial position",
    );
    let ministry = required_text(
        &mut errors,
        fields::MINISTRY,
        &draft.ministry,
        "Please enter the ministry",
    );
    let party = required_text(
        &mut errors,
        fields::PARTY,
        &draft.party,
        "Please enter the political party",
    );

    match (
        prefix,
        first_name,
        last_name,
        photo_path,
        experience,
        achievement,
        position,
        ministry,
        party,
    ) {
        (
            Some(prefix),
            Some(first_name),
            Some(last_name),
            Some(photo_path),
            Some(experience),
            Some(achievement),
            Some(position),
            Some(ministry),
            Some(party),
        ) if errors.is_empty() => Ok(ValidDraft {
            prefix,
            first_name,
            last_name,
            photo_path,
            experience,
            achievement,
            position,
            ministry,
            party,
        }),
        _ => Err(errors),
    }
}

/// Result of a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    /// A new member was appended at this position.
    Added { index: usize },
    /// The member at this position was replaced in place.
    Replaced { index: usize },
}

/// Collects one member draft at a time and admits it into the roster on a
/// successful submit. Lives for the whole session.
#[derive(Debug, Default)]
pub struct FormController {
    draft: MemberDraft,
    mode: FormMode,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &MemberDraft {
        &self.draft
    }

    /// Set one draft field by its form key.
    ///
    /// The photo key takes a `;`-separated list of selected paths; every
    /// other key takes the raw text. No validation happens here.
    pub fn update_field(&mut self, name: &str, value: &str) -> Result<(), AppError> {
        match name {
            fields::PREFIX => self.draft.prefix = value.trim().to_string(),
            fields::FIRST_NAME => self.draft.first_name = value.trim().to_string(),
            fields::LAST_NAME => self.draft.last_name = value.trim().to_string(),
            fields::PHOTO => self.draft.photo_selection = parse_selection(value),
            fields::EXPERIENCE => self.draft.experience = value.trim().to_string(),
            fields::ACHIEVEMENT => self.draft.achievement = value.trim().to_string(),
            fields::POSITION => self.draft.position = value.trim().to_string(),
            fields::MINISTRY => self.draft.ministry = value.trim().to_string(),
            fields::PARTY => self.draft.party = value.trim().to_string(),
            _ => return Err(AppError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    /// Load an admitted member back into the draft for editing.
    ///
    /// The photo selection cannot be reconstructed from a resolved handle
    /// and starts empty; it must be selected again before the edit can pass
    /// validation.
    pub fn load_for_edit(&mut self, index: usize, member: &Member) {
        self.draft = MemberDraft {
            prefix: member.prefix.as_str().to_string(),
            first_name: member.first_name.clone(),
            last_name: member.last_name.clone(),
            photo_selection: Vec::new(),
            experience: member.experience.clone(),
            achievement: member.achievement.clone(),
            position: member.position.clone(),
            ministry: member.ministry.clone(),
            party: member.party.clone(),
        };
        self.mode = FormMode::Editing(index);
        tracing::debug!("Loaded member {} for editing", index);
    }

    /// Abandon the current draft and return to create mode.
    ///
    /// Never touches the roster.
    pub fn cancel_edit(&mut self) {
        self.draft = MemberDraft::default();
        self.mode = FormMode::Create;
    }

    /// Keep a pending edit consistent after the removal of `removed`.
    ///
    /// Positions shift on removal, so an edit target past the removed
    /// position moves down by one; an edit of the removed member itself is
    /// cancelled.
    pub fn note_removal(&mut self, removed: usize) {
        if let FormMode::Editing(target) = self.mode {
            if target == removed {
                tracing::debug!("Edited member {} was deleted, edit cancelled", removed);
                self.cancel_edit();
            } else if target > removed {
                self.mode = FormMode::Editing(target - 1);
            }
        }
    }

    /// Validate the draft and admit it into the roster.
    ///
    /// On success the photo selection is bound into a displayable handle,
    /// the member is appended (create) or replaces its loaded position
    /// (edit, releasing the displaced member's handle), and the form resets
    /// to an empty create draft. On failure the draft is retained.
    pub fn submit(
        &mut self,
        store: &mut RosterStore,
        photos: &mut PhotoBinder,
    ) -> Result<Submitted, ValidationErrors> {
        let valid = validate(&self.draft)?;

        let photo = photos.bind(valid.photo_path);
        let member = Member {
            prefix: valid.prefix,
            first_name: valid.first_name.to_string(),
            last_name: valid.last_name.to_string(),
            photo,
            experience: valid.experience.to_string(),
            achievement: valid.achievement.to_string(),
            position: valid.position.to_string(),
            ministry: valid.ministry.to_string(),
            party: valid.party.to_string(),
        };

        let submitted = match self.mode {
            FormMode::Create => Submitted::Added {
                index: store.append(member),
            },
            FormMode::Editing(index) => {
                let displaced = store.replace_at(index, member);
                photos.release(&displaced.photo);
                Submitted::Replaced { index }
            }
        };

        self.draft = MemberDraft::default();
        self.mode = FormMode::Create;
        Ok(submitted)
    }
}

/// Parse a `;`-separated path list into a photo selection.
fn parse_selection(value: &str) -> Vec<PathBuf> {
    value
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(PathBuf::from)
        .collect()
}
