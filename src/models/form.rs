// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Form inputs addressed by element identifier, plus the events they raise.
//!
//! Guards never hold on to inputs directly. They remember identifiers and
//! look the inputs up on every event, so a page that lacks an input simply
//! leaves the matching guard inert.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::models::time_of_day::TimeOfDay;

/// Identifier of the appointment date input.
pub const APPOINTMENT_DATE_ID: &str = "id_appointment_date";
/// Identifier of the appointment time input.
pub const APPOINTMENT_TIME_ID: &str = "id_appointment_time";
/// Preferred identifier of the supporting document input.
pub const DOCUMENT_INPUT_ID: &str = "documentInput";
/// Identifier the document input carries when rendered without a custom id.
pub const DOCUMENT_FALLBACK_ID: &str = "id_document";

/// Calendar date field with optional selectable bounds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateInput {
    pub value: Option<NaiveDate>,
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl DateInput {
    /// Clamp a picked date into the selectable range, as a native picker would.
    pub fn clamp_to_bounds(&self, date: NaiveDate) -> NaiveDate {
        let date = self.min.map_or(date, |min| date.max(min));
        self.max.map_or(date, |max| date.min(max))
    }
}

/// Time-of-day field with optional bounds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeInput {
    pub value: Option<TimeOfDay>,
    pub min: Option<TimeOfDay>,
    pub max: Option<TimeOfDay>,
}

/// A file chosen through a file input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name as presented to the user (no directory).
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Location on disk, when the file came from the local filesystem.
    pub path: Option<PathBuf>,
}

/// File upload field; holds the current selection in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileInput {
    pub files: Vec<SelectedFile>,
}

impl FileInput {
    pub fn first(&self) -> Option<&SelectedFile> {
        self.files.first()
    }

    /// Drop the whole selection.
    pub fn clear(&mut self) {
        self.files.clear();
    }
}

/// One addressable form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
    Date(DateInput),
    Time(TimeInput),
    File(FileInput),
}

/// How an input was interacted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// Committed value change.
    Change,
    /// Value edited while typing.
    Input,
    /// Input received keyboard focus.
    Focus,
}

/// Event raised by a form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormEvent {
    pub target: String,
    pub kind: EventKind,
}

impl FormEvent {
    pub fn new(target: impl Into<String>, kind: EventKind) -> Self {
        Self {
            target: target.into(),
            kind,
        }
    }
}

/// Registry of the inputs present on a page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Form {
    elements: BTreeMap<String, Element>,
}

impl Form {
    /// Form with the appointment date, time and document inputs.
    pub fn appointment_details() -> Self {
        let mut form = Self::default();
        form.insert(APPOINTMENT_DATE_ID, Element::Date(DateInput::default()));
        form.insert(APPOINTMENT_TIME_ID, Element::Time(TimeInput::default()));
        form.insert(DOCUMENT_INPUT_ID, Element::File(FileInput::default()));
        form
    }

    /// Add or replace the input registered under `id`.
    pub fn insert(&mut self, id: impl Into<String>, element: Element) {
        self.elements.insert(id.into(), element);
    }

    pub fn date(&self, id: &str) -> Option<&DateInput> {
        match self.elements.get(id) {
            Some(Element::Date(input)) => Some(input),
            _ => None,
        }
    }

    pub fn date_mut(&mut self, id: &str) -> Option<&mut DateInput> {
        match self.elements.get_mut(id) {
            Some(Element::Date(input)) => Some(input),
            _ => None,
        }
    }

    pub fn time(&self, id: &str) -> Option<&TimeInput> {
        match self.elements.get(id) {
            Some(Element::Time(input)) => Some(input),
            _ => None,
        }
    }

    pub fn time_mut(&mut self, id: &str) -> Option<&mut TimeInput> {
        match self.elements.get_mut(id) {
            Some(Element::Time(input)) => Some(input),
            _ => None,
        }
    }

    pub fn file(&self, id: &str) -> Option<&FileInput> {
        match self.elements.get(id) {
            Some(Element::File(input)) => Some(input),
            _ => None,
        }
    }

    pub fn file_mut(&mut self, id: &str) -> Option<&mut FileInput> {
        match self.elements.get_mut(id) {
            Some(Element::File(input)) => Some(input),
            _ => None,
        }
    }
}
