// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Keeps the appointment time inside the bookable window for the chosen date.
//!
//! Today's date only allows times after "now" (plus a short buffer); any other
//! date allows the opening window. Every recomputation rewrites the time
//! input's bounds and clears a value that falls outside them. The user is only
//! told about it when the recomputation came from editing the time directly.

use chrono::{Days, NaiveDate, NaiveDateTime};

use crate::config::FormConfig;
use crate::logic::clock::Clock;
use crate::logic::notifier::ErrorNotifier;
use crate::models::{EventKind, Form, FormEvent, TimeOfDay};

/// Shown when a same-day time lies before the earliest bookable minute.
pub const PAST_TIME_MESSAGE: &str =
    "You cannot select a past time for today. Please choose a future time.";

/// Allowed time range for one selected date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeLimits {
    pub min: TimeOfDay,
    pub max: TimeOfDay,
    /// Whether the limits were derived from the current time.
    pub same_day: bool,
}

impl TimeLimits {
    /// Whether `value` has to be cleared under these limits.
    ///
    /// Same-day limits only reject values before `min`.
    pub fn rejects(&self, value: TimeOfDay) -> bool {
        if self.same_day {
            value < self.min
        } else {
            !value.is_within(self.min, self.max)
        }
    }
}

/// Guard bound to a date input and a time input by identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateTimeGuard {
    date_id: String,
    time_id: String,
    opening: TimeOfDay,
    closing: TimeOfDay,
    buffer_minutes: u32,
    horizon_days: u32,
}

impl DateTimeGuard {
    pub fn new(date_id: impl Into<String>, time_id: impl Into<String>, config: &FormConfig) -> Self {
        Self {
            date_id: date_id.into(),
            time_id: time_id.into(),
            opening: config.opening_time,
            closing: config.closing_time,
            buffer_minutes: config.same_day_buffer_minutes,
            horizon_days: config.booking_horizon_days,
        }
    }

    pub fn date_id(&self) -> &str {
        &self.date_id
    }

    pub fn time_id(&self) -> &str {
        &self.time_id
    }

    /// Restrict the date input to today through the booking horizon.
    pub fn init_date_bounds(&self, form: &mut Form, today: NaiveDate) {
        let Some(date) = form.date_mut(&self.date_id) else {
            return;
        };
        date.min = Some(today);
        date.max = today.checked_add_days(Days::new(u64::from(self.horizon_days)));
        log::debug!(
            "Date input {} limited to {}..={}",
            self.date_id,
            today.format("%Y-%m-%d"),
            date.max
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "unbounded".into())
        );
    }

    /// Time limits applying to `selected` when the current moment is `now`.
    pub fn time_limits(&self, selected: NaiveDate, now: NaiveDateTime) -> TimeLimits {
        if selected == now.date() {
            TimeLimits {
                min: TimeOfDay::from_time(now.time()).plus_minutes(self.buffer_minutes),
                max: self.closing,
                same_day: true,
            }
        } else {
            TimeLimits {
                min: self.opening,
                max: self.closing,
                same_day: false,
            }
        }
    }

    /// Message shown when a time outside the opening window is entered.
    pub fn window_message(&self) -> String {
        format!(
            "Appointments must be scheduled between {} and {}.",
            self.opening, self.closing
        )
    }

    /// Recompute the time input's bounds from the selected date and clear an
    /// out-of-range value. `triggered_by_user` decides whether the clearing
    /// is explained through `notifier`.
    ///
    /// Does nothing when either input is missing or no date is selected.
    pub fn update_time_limits(
        &self,
        form: &mut Form,
        clock: &dyn Clock,
        triggered_by_user: bool,
        notifier: &mut dyn ErrorNotifier,
    ) {
        let Some(selected) = form.date(&self.date_id).and_then(|date| date.value) else {
            return;
        };
        let Some(time) = form.time_mut(&self.time_id) else {
            return;
        };

        let limits = self.time_limits(selected, clock.now());
        time.min = Some(limits.min);
        time.max = Some(limits.max);

        let Some(value) = time.value else {
            return;
        };
        if !limits.rejects(value) {
            return;
        }

        time.value = None;
        log::debug!(
            "Cleared time {value} outside {}..={} for {selected}",
            limits.min,
            limits.max
        );
        if triggered_by_user {
            if limits.same_day {
                notifier.notify(PAST_TIME_MESSAGE);
            } else {
                notifier.notify(&self.window_message());
            }
        }
    }

    /// Map an event to the `triggered_by_user` flag it recomputes with, if any.
    ///
    /// Date changes and time focus recompute silently; time edits are user-triggered.
    pub fn trigger_for(&self, event: &FormEvent) -> Option<bool> {
        if event.target == self.date_id {
            return matches!(event.kind, EventKind::Change).then_some(false);
        }
        if event.target == self.time_id {
            return Some(match event.kind {
                EventKind::Focus => false,
                EventKind::Change | EventKind::Input => true,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::clock::FixedClock;
    use crate::models::form::{APPOINTMENT_DATE_ID, APPOINTMENT_TIME_ID, DateInput, Element};

    const TODAY: (i32, u32, u32) = (2026, 10, 19);

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(TODAY.0, TODAY.1, TODAY.2).unwrap()
    }

    fn tomorrow() -> NaiveDate {
        today().succ_opt().unwrap()
    }

    fn clock_at(hour: u32, minute: u32) -> FixedClock {
        FixedClock(today().and_hms_opt(hour, minute, 42).unwrap())
    }

    fn t(hour: u8, minute: u8) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    fn guard() -> DateTimeGuard {
        DateTimeGuard::new(APPOINTMENT_DATE_ID, APPOINTMENT_TIME_ID, &FormConfig::default())
    }

    fn form_with(date: Option<NaiveDate>, time: Option<TimeOfDay>) -> Form {
        let mut form = Form::appointment_details();
        form.date_mut(APPOINTMENT_DATE_ID).unwrap().value = date;
        form.time_mut(APPOINTMENT_TIME_ID).unwrap().value = time;
        form
    }

    fn time_input(form: &Form) -> &crate::models::form::TimeInput {
        form.time(APPOINTMENT_TIME_ID).unwrap()
    }

    #[test]
    fn init_limits_date_to_today_and_horizon() {
        let mut form = Form::appointment_details();
        guard().init_date_bounds(&mut form, today());

        let date = form.date(APPOINTMENT_DATE_ID).unwrap();
        assert_eq!(
            date.min.map(|d| d.format("%Y-%m-%d").to_string()),
            Some("2026-10-19".to_string())
        );
        assert_eq!(date.max, NaiveDate::from_ymd_opt(2026, 10, 29));
        assert!(date.value.is_none(), "init must not pick a date");
    }

    #[test]
    fn init_without_date_input_is_noop() {
        let mut form = Form::default();
        guard().init_date_bounds(&mut form, today());
        assert_eq!(form, Form::default());
    }

    #[test]
    fn same_day_min_is_now_plus_one_minute() {
        let limits = guard().time_limits(today(), clock_at(14, 25).now());
        assert_eq!(limits.min.to_string(), "14:26");
        assert_eq!(limits.max.to_string(), "22:00");
        assert!(limits.same_day);
    }

    #[test]
    fn same_day_min_carries_minute_overflow() {
        let limits = guard().time_limits(today(), clock_at(10, 59).now());
        assert_eq!(limits.min.to_string(), "11:00");
    }

    #[test]
    fn same_day_at_midnight_minus_one_keeps_hour_24() {
        let limits = guard().time_limits(today(), clock_at(23, 59).now());
        assert_eq!(limits.min.to_string(), "24:00");
        assert!(limits.rejects(t(23, 59)));
    }

    #[test]
    fn other_dates_use_opening_window_regardless_of_now() {
        for (hour, minute) in [(0, 0), (8, 0), (13, 37), (23, 59)] {
            let limits = guard().time_limits(tomorrow(), clock_at(hour, minute).now());
            assert_eq!(limits.min.to_string(), "09:00");
            assert_eq!(limits.max.to_string(), "22:00");
            assert!(!limits.same_day);
        }
    }

    #[test]
    fn late_evening_today_pins_min_to_closing() {
        let mut form = form_with(Some(today()), Some(t(21, 30)));
        let mut notes = Vec::<String>::new();

        guard().update_time_limits(&mut form, &clock_at(21, 59), false, &mut notes);

        let time = time_input(&form);
        assert_eq!(time.min, Some(t(22, 0)));
        assert_eq!(time.max, Some(t(22, 0)));
        assert!(time.value.is_none());
        assert!(notes.is_empty());
    }

    #[test]
    fn same_day_past_time_is_cleared_and_reported_when_user_triggered() {
        let mut form = form_with(Some(today()), Some(t(9, 30)));
        let mut notes = Vec::<String>::new();

        guard().update_time_limits(&mut form, &clock_at(12, 0), true, &mut notes);

        assert!(time_input(&form).value.is_none());
        assert_eq!(notes, vec![PAST_TIME_MESSAGE.to_string()]);
    }

    #[test]
    fn same_day_future_time_is_kept() {
        let mut form = form_with(Some(today()), Some(t(12, 1)));
        let mut notes = Vec::<String>::new();

        guard().update_time_limits(&mut form, &clock_at(12, 0), true, &mut notes);

        assert_eq!(time_input(&form).value, Some(t(12, 1)));
        assert!(notes.is_empty());
    }

    #[test]
    fn same_day_does_not_clear_values_after_closing() {
        let mut form = form_with(Some(today()), Some(t(23, 0)));
        let mut notes = Vec::<String>::new();

        guard().update_time_limits(&mut form, &clock_at(12, 0), true, &mut notes);

        assert_eq!(time_input(&form).value, Some(t(23, 0)));
        assert!(notes.is_empty());
    }

    #[test]
    fn prefilled_past_date_uses_opening_window() {
        let yesterday = today().pred_opt().unwrap();
        let mut form = form_with(Some(yesterday), Some(t(8, 0)));
        let mut notes = Vec::<String>::new();

        guard().update_time_limits(&mut form, &clock_at(12, 0), true, &mut notes);

        let time = time_input(&form);
        assert!(time.value.is_none());
        assert_eq!(time.min, Some(t(9, 0)));
        assert_eq!(time.max, Some(t(22, 0)));
        assert_eq!(
            notes,
            vec!["Appointments must be scheduled between 09:00 and 22:00.".to_string()]
        );
    }

    #[test]
    fn tomorrow_early_time_is_cleared_silently_on_recompute() {
        let mut form = form_with(Some(tomorrow()), Some(t(8, 30)));
        let mut notes = Vec::<String>::new();

        guard().update_time_limits(&mut form, &clock_at(12, 0), false, &mut notes);

        let time = time_input(&form);
        assert!(time.value.is_none());
        assert_eq!(time.min, Some(t(9, 0)));
        assert_eq!(time.max, Some(t(22, 0)));
        assert!(notes.is_empty());
    }

    #[test]
    fn tomorrow_late_time_is_reported_when_user_triggered() {
        let mut form = form_with(Some(tomorrow()), Some(t(22, 1)));
        let mut notes = Vec::<String>::new();

        guard().update_time_limits(&mut form, &clock_at(12, 0), true, &mut notes);

        assert!(time_input(&form).value.is_none());
        assert_eq!(
            notes,
            vec!["Appointments must be scheduled between 09:00 and 22:00.".to_string()]
        );
    }

    #[test]
    fn window_edges_are_accepted() {
        for edge in [t(9, 0), t(22, 0)] {
            let mut form = form_with(Some(tomorrow()), Some(edge));
            let mut notes = Vec::<String>::new();
            guard().update_time_limits(&mut form, &clock_at(12, 0), true, &mut notes);
            assert_eq!(time_input(&form).value, Some(edge));
            assert!(notes.is_empty());
        }
    }

    #[test]
    fn empty_time_only_updates_bounds() {
        let mut form = form_with(Some(tomorrow()), None);
        let mut notes = Vec::<String>::new();

        guard().update_time_limits(&mut form, &clock_at(12, 0), true, &mut notes);

        assert_eq!(time_input(&form).min, Some(t(9, 0)));
        assert!(notes.is_empty());
    }

    #[test]
    fn missing_date_value_is_noop() {
        let mut form = form_with(None, Some(t(6, 0)));
        let before = form.clone();
        let mut notes = Vec::<String>::new();

        guard().update_time_limits(&mut form, &clock_at(12, 0), true, &mut notes);

        assert_eq!(form, before);
        assert!(notes.is_empty());
    }

    #[test]
    fn missing_inputs_are_noop() {
        let mut only_date = Form::default();
        only_date.insert(
            APPOINTMENT_DATE_ID,
            Element::Date(DateInput {
                value: Some(today()),
                ..Default::default()
            }),
        );
        let before = only_date.clone();
        let mut notes = Vec::<String>::new();

        guard().update_time_limits(&mut only_date, &clock_at(12, 0), true, &mut notes);
        assert_eq!(only_date, before);

        let mut empty = Form::default();
        guard().update_time_limits(&mut empty, &clock_at(12, 0), true, &mut notes);
        assert_eq!(empty, Form::default());
        assert!(notes.is_empty());
    }

    #[test]
    fn wiring_maps_events_to_trigger_flag() {
        let guard = guard();
        let event = |target: &str, kind| FormEvent::new(target, kind);

        assert_eq!(guard.trigger_for(&event(APPOINTMENT_DATE_ID, EventKind::Change)), Some(false));
        assert_eq!(guard.trigger_for(&event(APPOINTMENT_DATE_ID, EventKind::Input)), None);
        assert_eq!(guard.trigger_for(&event(APPOINTMENT_TIME_ID, EventKind::Focus)), Some(false));
        assert_eq!(guard.trigger_for(&event(APPOINTMENT_TIME_ID, EventKind::Change)), Some(true));
        assert_eq!(guard.trigger_for(&event(APPOINTMENT_TIME_ID, EventKind::Input)), Some(true));
        assert_eq!(guard.trigger_for(&event("documentInput", EventKind::Change)), None);
    }
}
