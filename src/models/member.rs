//! Member model for the parliamentary roster.

use serde::Serialize;
use std::path::PathBuf;

use crate::photo::PhotoHandle;

/// Form field keys, the camelCase names of the member data shape.
///
/// These keys address draft fields in [`MemberDraft`] updates and key the
/// per-field validation messages.
pub mod fields {
    pub const PREFIX: &str = "prefix";
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const PHOTO: &str = "photo";
    pub const EXPERIENCE: &str = "experience";
    pub const ACHIEVEMENT: &str = "achievement";
    pub const POSITION: &str = "position";
    pub const MINISTRY: &str = "ministry";
    pub const PARTY: &str = "party";

    /// All field keys in form order.
    pub const ALL: [&str; 9] = [
        PREFIX,
        FIRST_NAME,
        LAST_NAME,
        PHOTO,
        EXPERIENCE,
        ACHIEVEMENT,
        POSITION,
        MINISTRY,
        PARTY,
    ];
}

/// Honorific prefix, a fixed closed set.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Prefix {
    #[serde(rename = "Mr.")]
    Mr,
    #[serde(rename = "Mrs.")]
    Mrs,
    #[serde(rename = "Ms.")]
    Ms,
}

impl Prefix {
    /// Every allowed prefix, in display order.
    pub const ALL: [Prefix; 3] = [Prefix::Mr, Prefix::Mrs, Prefix::Ms];

    pub fn as_str(&self) -> &'static str {
        match self {
            Prefix::Mr => "Mr.",
            Prefix::Mrs => "Mrs.",
            Prefix::Ms => "Ms.",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Mr." => Some(Prefix::Mr),
            "Mrs." => Some(Prefix::Mrs),
            "Ms." => Some(Prefix::Ms),
            _ => None,
        }
    }
}

/// An admitted roster member.
///
/// Every field passed validation on the way in, so the prefix is typed and
/// the photo is a resolved, displayable binding owned by this record.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub prefix: Prefix,
    pub first_name: String,
    pub last_name: String,
    pub photo: PhotoHandle,
    pub experience: String,
    pub achievement: String,
    pub position: String,
    pub ministry: String,
    pub party: String,
}

impl Member {
    /// Prefixed full name, e.g. "Mr. Somchai Dee".
    pub fn full_name(&self) -> String {
        format!(
            "{} {} {}",
            self.prefix.as_str(),
            self.first_name,
            self.last_name
        )
    }
}

/// The in-progress, not-yet-validated member data held by the form.
///
/// Text fields are raw strings because they hold unvalidated user input;
/// the photo selection holds whatever paths the user picked (zero, one, or
/// many). Admission converts the draft into a typed [`Member`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberDraft {
    pub prefix: String,
    pub first_name: String,
    pub last_name: String,
    pub photo_selection: Vec<PathBuf>,
    pub experience: String,
    pub achievement: String,
    pub position: String,
    pub ministry: String,
    pub party: String,
}

impl MemberDraft {
    /// True when every field is untouched.
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
            && self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.photo_selection.is_empty()
            && self.experience.is_empty()
            && self.achievement.is_empty()
            && self.position.is_empty()
            && self.ministry.is_empty()
            && self.party.is_empty()
    }
}
