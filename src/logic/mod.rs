// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Input guards for the appointment details form and their event wiring.

pub mod clock;
pub mod datetime_guard;
pub mod file_guard;
pub mod notifier;

use crate::config::FormConfig;
use crate::models::Form;
use crate::models::FormEvent;
use crate::models::form::{
    APPOINTMENT_DATE_ID, APPOINTMENT_TIME_ID, DOCUMENT_FALLBACK_ID, DOCUMENT_INPUT_ID,
};

pub use clock::{Clock, LocalClock};
pub use datetime_guard::DateTimeGuard;
pub use file_guard::{FileGuard, FileVerdict};
pub use notifier::{ErrorModal, ErrorNotifier};

/// Both guards, bound to one form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Guards {
    pub datetime: DateTimeGuard,
    pub file: FileGuard,
}

impl Guards {
    /// Bind the guards to the standard input identifiers and run the
    /// mount-time setup: the date input gets its selectable range and the
    /// time input is clamped once, silently.
    pub fn attach(
        form: &mut Form,
        config: &FormConfig,
        clock: &dyn Clock,
        time_errors: &mut dyn ErrorNotifier,
    ) -> Self {
        let datetime = DateTimeGuard::new(APPOINTMENT_DATE_ID, APPOINTMENT_TIME_ID, config);
        datetime.init_date_bounds(form, clock.now().date());
        datetime.update_time_limits(form, clock, false, time_errors);

        let file = FileGuard::attach(form, DOCUMENT_INPUT_ID, DOCUMENT_FALLBACK_ID, config);

        Self { datetime, file }
    }

    /// Route a form event to whichever guard listens for it.
    ///
    /// Returns the file verdict when the event was a document change.
    pub fn handle(
        &self,
        form: &mut Form,
        event: &FormEvent,
        clock: &dyn Clock,
        time_errors: &mut dyn ErrorNotifier,
        file_errors: &mut dyn ErrorNotifier,
    ) -> Option<FileVerdict> {
        if let Some(triggered_by_user) = self.datetime.trigger_for(event) {
            self.datetime
                .update_time_limits(form, clock, triggered_by_user, time_errors);
        }
        if self.file.listens_to(event) {
            return self.file.on_change(form, file_errors);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::logic::clock::FixedClock;
    use crate::logic::datetime_guard::PAST_TIME_MESSAGE;
    use crate::logic::file_guard::NOT_PDF_MESSAGE;
    use crate::models::form::Element;
    use crate::models::{EventKind, SelectedFile, TimeOfDay};

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2026, 10, 19)
                .unwrap()
                .and_hms_opt(15, 10, 0)
                .unwrap(),
        )
    }

    fn t(hour: u8, minute: u8) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    #[test]
    fn attach_sets_date_min_and_leaves_empty_fields_alone() {
        let mut form = Form::appointment_details();
        let mut time_errors = Vec::<String>::new();

        let guards = Guards::attach(&mut form, &FormConfig::default(), &clock(), &mut time_errors);

        assert_eq!(
            form.date(APPOINTMENT_DATE_ID).unwrap().min,
            NaiveDate::from_ymd_opt(2026, 10, 19)
        );
        assert!(form.time(APPOINTMENT_TIME_ID).unwrap().min.is_none());
        assert_eq!(guards.file.input_id(), Some(DOCUMENT_INPUT_ID));
        assert!(time_errors.is_empty());
    }

    #[test]
    fn attach_clamps_prefilled_time_silently() {
        let mut form = Form::appointment_details();
        form.date_mut(APPOINTMENT_DATE_ID).unwrap().value = NaiveDate::from_ymd_opt(2026, 10, 19);
        form.time_mut(APPOINTMENT_TIME_ID).unwrap().value = Some(t(10, 0));
        let mut time_errors = Vec::<String>::new();

        Guards::attach(&mut form, &FormConfig::default(), &clock(), &mut time_errors);

        let time = form.time(APPOINTMENT_TIME_ID).unwrap();
        assert!(time.value.is_none());
        assert_eq!(time.min, Some(t(15, 11)));
        assert!(time_errors.is_empty());
    }

    #[test]
    fn date_change_clears_without_modal_but_time_edit_reports() {
        let mut form = Form::appointment_details();
        let mut time_errors = Vec::<String>::new();
        let mut file_errors = Vec::<String>::new();
        let guards = Guards::attach(&mut form, &FormConfig::default(), &clock(), &mut time_errors);

        form.time_mut(APPOINTMENT_TIME_ID).unwrap().value = Some(t(12, 0));
        form.date_mut(APPOINTMENT_DATE_ID).unwrap().value = NaiveDate::from_ymd_opt(2026, 10, 19);
        guards.handle(
            &mut form,
            &FormEvent::new(APPOINTMENT_DATE_ID, EventKind::Change),
            &clock(),
            &mut time_errors,
            &mut file_errors,
        );
        assert!(form.time(APPOINTMENT_TIME_ID).unwrap().value.is_none());
        assert!(time_errors.is_empty());

        form.time_mut(APPOINTMENT_TIME_ID).unwrap().value = Some(t(12, 0));
        guards.handle(
            &mut form,
            &FormEvent::new(APPOINTMENT_TIME_ID, EventKind::Input),
            &clock(),
            &mut time_errors,
            &mut file_errors,
        );
        assert!(form.time(APPOINTMENT_TIME_ID).unwrap().value.is_none());
        assert_eq!(time_errors, vec![PAST_TIME_MESSAGE.to_string()]);
        assert!(file_errors.is_empty());
    }

    #[test]
    fn document_change_goes_to_file_notifier() {
        let mut form = Form::appointment_details();
        let mut time_errors = Vec::<String>::new();
        let mut file_errors = Vec::<String>::new();
        let guards = Guards::attach(&mut form, &FormConfig::default(), &clock(), &mut time_errors);

        form.insert(
            DOCUMENT_INPUT_ID,
            Element::File(crate::models::form::FileInput {
                files: vec![SelectedFile {
                    name: "notes.txt".into(),
                    size: 12,
                    path: None,
                }],
            }),
        );
        let verdict = guards.handle(
            &mut form,
            &FormEvent::new(DOCUMENT_INPUT_ID, EventKind::Change),
            &clock(),
            &mut time_errors,
            &mut file_errors,
        );

        assert_eq!(verdict, Some(FileVerdict::NotPdf));
        assert_eq!(file_errors, vec![NOT_PDF_MESSAGE.to_string()]);
        assert!(time_errors.is_empty());
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let mut form = Form::appointment_details();
        let mut time_errors = Vec::<String>::new();
        let mut file_errors = Vec::<String>::new();
        let guards = Guards::attach(&mut form, &FormConfig::default(), &clock(), &mut time_errors);
        let before = form.clone();

        let verdict = guards.handle(
            &mut form,
            &FormEvent::new("id_reason", EventKind::Change),
            &clock(),
            &mut time_errors,
            &mut file_errors,
        );

        assert_eq!(verdict, None);
        assert_eq!(form, before);
    }
}
