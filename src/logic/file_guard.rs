// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Rejects supporting documents that are not PDFs or exceed the size limit.

use crate::config::FormConfig;
use crate::logic::notifier::ErrorNotifier;
use crate::models::{EventKind, Form, FormEvent, SelectedFile};

pub const NOT_PDF_MESSAGE: &str = "Only PDF files are allowed.";
pub const TOO_LARGE_MESSAGE: &str = "File size must be less than 2MB.";

/// Outcome of checking one selected file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileVerdict {
    Accepted,
    NotPdf,
    TooLarge,
}

impl FileVerdict {
    /// User-facing explanation for a rejection.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            FileVerdict::Accepted => None,
            FileVerdict::NotPdf => Some(NOT_PDF_MESSAGE),
            FileVerdict::TooLarge => Some(TOO_LARGE_MESSAGE),
        }
    }
}

/// Check extension first; the size is only looked at for PDFs.
pub fn check_file(file: &SelectedFile, max_bytes: u64) -> FileVerdict {
    if !file.name.to_lowercase().ends_with(".pdf") {
        FileVerdict::NotPdf
    } else if file.size > max_bytes {
        FileVerdict::TooLarge
    } else {
        FileVerdict::Accepted
    }
}

/// Guard bound to the document input, if the page has one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileGuard {
    input_id: Option<String>,
    max_bytes: u64,
}

impl FileGuard {
    /// Bind to `primary_id`, or `fallback_id` when the primary is missing.
    /// With neither present the guard stays inert.
    pub fn attach(form: &Form, primary_id: &str, fallback_id: &str, config: &FormConfig) -> Self {
        let input_id = [primary_id, fallback_id]
            .into_iter()
            .find(|id| form.file(id).is_some())
            .map(str::to_string);
        if input_id.is_none() {
            log::debug!("No document input on this form; file checks disabled");
        }
        Self {
            input_id,
            max_bytes: config.max_document_bytes,
        }
    }

    /// Identifier of the bound input.
    pub fn input_id(&self) -> Option<&str> {
        self.input_id.as_deref()
    }

    /// Whether `event` is a change of the bound input.
    pub fn listens_to(&self, event: &FormEvent) -> bool {
        event.kind == EventKind::Change && self.input_id.as_deref() == Some(event.target.as_str())
    }

    /// Validate the first selected file, clearing the selection and notifying
    /// on rejection. Returns `None` when nothing is selected.
    pub fn on_change(
        &self,
        form: &mut Form,
        notifier: &mut dyn ErrorNotifier,
    ) -> Option<FileVerdict> {
        let input = form.file_mut(self.input_id.as_deref()?)?;
        let file = input.first()?;

        let verdict = check_file(file, self.max_bytes);
        if let Some(message) = verdict.message() {
            log::debug!("Rejected document {} ({} bytes): {message}", file.name, file.size);
            notifier.notify(message);
            input.clear();
        }
        Some(verdict)
    }
}
