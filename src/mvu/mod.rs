// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring form state, guards, messages, and commands.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::FormConfig;
use crate::logic::{Clock, ErrorModal, FileVerdict, Guards};
use crate::models::{Attendee, Form, FormEvent, SelectedFile, TimeOfDay};
use crate::ui::components::datetime_picker::{self, DateTimeModel, DateTimeMsg};
use crate::ui::components::document::{self, DocumentCommand, DocumentMsg};

/// Top-level application state.
pub struct AppModel {
    /// Limits the guards were built from.
    pub config: FormConfig,
    /// Inputs the guards operate on.
    pub form: Form,
    /// Date/time and document guards bound to `form`.
    pub guards: Guards,
    /// Time field text buffer.
    pub datetime: DateTimeModel,
    /// Free-text reason for the visit.
    pub reason: String,
    /// Preferred staff member.
    pub attendee: Option<Attendee>,
    /// Modal for date/time problems.
    pub time_error: ErrorModal,
    /// Modal for document problems.
    pub file_error: ErrorModal,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
    clock: Box<dyn Clock>,
}

/// Application messages routed through the update function.
pub enum Msg {
    ReasonChanged(String),
    AttendeeSelected(Option<Attendee>),
    DateTime(DateTimeMsg),
    Document(DocumentMsg),
    /// Files dropped onto the window.
    FilesDropped(Vec<PathBuf>),
    /// Result of a file dialog or of inspecting dropped files.
    DocumentLoaded(Result<Vec<SelectedFile>, String>),
    DismissTimeError,
    DismissFileError,
}

/// Commands represent side-effects executed off the UI thread.
pub enum Command {
    PickDocument,
    InspectFiles(Vec<PathBuf>),
}

impl AppModel {
    /// Build the form and attach the guards, running their mount-time setup.
    pub fn new(config: FormConfig, clock: Box<dyn Clock>) -> Self {
        let mut form = Form::appointment_details();
        let mut time_error = ErrorModal::new("Invalid appointment time");
        let guards = Guards::attach(&mut form, &config, clock.as_ref(), &mut time_error);

        Self {
            config,
            form,
            guards,
            datetime: DateTimeModel::default(),
            reason: String::new(),
            attendee: None,
            time_error,
            file_error: ErrorModal::new("Invalid document"),
            status: None,
            pending_commands: 0,
            clock,
        }
    }

    /// Currently selected date, if any.
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.form
            .date(self.guards.datetime.date_id())
            .and_then(|input| input.value)
    }

    /// Currently valid time, if any.
    pub fn selected_time(&self) -> Option<TimeOfDay> {
        self.form
            .time(self.guards.datetime.time_id())
            .and_then(|input| input.value)
    }

    /// One-line description of the chosen slot.
    pub fn slot_summary(&self) -> Option<String> {
        let date = self.selected_date()?;
        Some(match self.selected_time() {
            Some(time) => format!("{} at {time}", date.format("%A, %Y-%m-%d")),
            None => format!("{} (no time selected)", date.format("%A, %Y-%m-%d")),
        })
    }

    /// Run the guards for one form event.
    fn dispatch(&mut self, event: FormEvent) {
        let verdict = self.guards.handle(
            &mut self.form,
            &event,
            self.clock.as_ref(),
            &mut self.time_error,
            &mut self.file_error,
        );
        datetime_picker::sync(&mut self.datetime, &self.form, &self.guards.datetime);

        match verdict {
            Some(FileVerdict::Accepted) => {
                let name = self
                    .guards
                    .file
                    .input_id()
                    .and_then(|id| self.form.file(id))
                    .and_then(|input| input.first())
                    .map(|file| file.name.clone())
                    .unwrap_or_default();
                self.status = Some(format!("Document attached: {name}"));
            }
            Some(rejected) => {
                self.status = rejected.message().map(str::to_string);
            }
            None => {}
        }
    }
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::ReasonChanged(text) => model.reason = text,
        Msg::AttendeeSelected(attendee) => model.attendee = attendee,
        Msg::DismissTimeError => model.time_error.dismiss(),
        Msg::DismissFileError => model.file_error.dismiss(),
        Msg::DateTime(m) => {
            let event = datetime_picker::update(
                &mut model.datetime,
                &mut model.form,
                &model.guards.datetime,
                m,
            );
            if let Some(event) = event {
                model.dispatch(event);
            }
        }
        Msg::Document(m) => {
            let Some(input_id) = model.guards.file.input_id().map(str::to_string) else {
                return;
            };
            let mut doc_cmds = Vec::new();
            if let Some(event) = document::update(&mut model.form, &input_id, m, &mut doc_cmds) {
                model.dispatch(event);
            }
            for c in doc_cmds {
                match c {
                    DocumentCommand::PickFile => cmds.push(Command::PickDocument),
                }
            }
        }
        Msg::FilesDropped(paths) => {
            if model.guards.file.input_id().is_some() && !paths.is_empty() {
                cmds.push(Command::InspectFiles(paths));
            }
        }
        Msg::DocumentLoaded(Ok(files)) => {
            if files.is_empty() {
                model.status = Some("No document selected.".to_string());
            } else {
                update(model, Msg::Document(DocumentMsg::Selected(files)), cmds);
            }
        }
        Msg::DocumentLoaded(Err(err)) => {
            model.status = Some(format!("Could not load document: {err}"));
        }
    }
}

/// Execute a command and return the resulting message.
pub fn run_command(cmd: Command) -> Msg {
    let result = match cmd {
        Command::PickDocument => {
            let file = rfd::FileDialog::new()
                .set_title("Select supporting document")
                .add_filter("PDF", &["pdf"])
                .pick_file();
            match file {
                Some(path) => document::inspect_files(vec![path]),
                None => Ok(Vec::new()),
            }
        }
        Command::InspectFiles(paths) => document::inspect_files(paths),
    };

    Msg::DocumentLoaded(result.map_err(|err| {
        log::warn!("{err:#}");
        format!("{err:#}")
    }))
}
