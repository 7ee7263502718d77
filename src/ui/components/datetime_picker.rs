// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Appointment date and time inputs in MVU style.
//!
//! The date uses the egui_extras calendar popup; the time is a free-text
//! `HH:MM` field whose value only exists once the text parses, the way a
//! browser time input behaves while the user is still typing.

use chrono::{Local, NaiveDate};
use eframe::egui;
use egui_extras::DatePickerButton;

use crate::logic::DateTimeGuard;
use crate::models::{EventKind, Form, FormEvent, TimeOfDay};

/// Text buffer for the time field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateTimeModel {
    /// Raw text typed into the time field.
    pub time_text: String,
    /// Whether the text changed since the field was last committed.
    dirty: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateTimeMsg {
    /// A date was chosen in the calendar popup.
    DatePicked(NaiveDate),
    /// The time text was edited.
    TimeEdited(String),
    /// The time field lost focus.
    TimeCommitted,
    /// The time field gained focus.
    TimeFocused,
}

/// Apply a message to the form inputs and return the event it raises.
pub fn update(
    model: &mut DateTimeModel,
    form: &mut Form,
    guard: &DateTimeGuard,
    msg: DateTimeMsg,
) -> Option<FormEvent> {
    match msg {
        DateTimeMsg::DatePicked(date) => {
            let input = form.date_mut(guard.date_id())?;
            input.value = Some(input.clamp_to_bounds(date));
            Some(FormEvent::new(guard.date_id(), EventKind::Change))
        }
        DateTimeMsg::TimeEdited(text) => {
            let input = form.time_mut(guard.time_id())?;
            input.value = text.parse::<TimeOfDay>().ok();
            model.time_text = text;
            model.dirty = true;
            Some(FormEvent::new(guard.time_id(), EventKind::Input))
        }
        DateTimeMsg::TimeCommitted => {
            if !std::mem::take(&mut model.dirty) {
                return None;
            }
            form.time(guard.time_id())?;
            Some(FormEvent::new(guard.time_id(), EventKind::Change))
        }
        DateTimeMsg::TimeFocused => {
            form.time(guard.time_id())?;
            Some(FormEvent::new(guard.time_id(), EventKind::Focus))
        }
    }
}

/// Reset the text buffer when a guard cleared or replaced the time value.
///
/// Partially typed text that does not parse yet is left alone.
pub fn sync(model: &mut DateTimeModel, form: &Form, guard: &DateTimeGuard) {
    let value = form.time(guard.time_id()).and_then(|input| input.value);
    let typed = model.time_text.parse::<TimeOfDay>().ok();
    if typed.is_some() && typed != value {
        model.time_text = value.map(|v| v.to_string()).unwrap_or_default();
    }
}

/// Render the date and time inputs and return any triggered messages.
pub fn view(
    model: &DateTimeModel,
    form: &Form,
    guard: &DateTimeGuard,
    ui: &mut egui::Ui,
) -> Vec<DateTimeMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        if let Some(input) = form.date(guard.date_id()) {
            let mut date = input
                .value
                .or(input.min)
                .unwrap_or_else(|| Local::now().date_naive());
            if ui
                .add(
                    DatePickerButton::new(&mut date)
                        .id_salt(guard.date_id())
                        .show_icon(true),
                )
                .changed()
            {
                msgs.push(DateTimeMsg::DatePicked(date));
            }
            if input.value.is_none() {
                ui.label(
                    egui::RichText::new("Pick a date")
                        .small()
                        .color(egui::Color32::from_gray(130)),
                );
            }
        }
        ui.add_space(8.0);

        if let Some(input) = form.time(guard.time_id()) {
            let mut text = model.time_text.clone();
            let response = ui
                .add(
                    egui::TextEdit::singleline(&mut text)
                        .hint_text("HH:MM")
                        .desired_width(56.0),
                )
                .on_hover_text(allowed_range_text(input.min, input.max));

            if response.gained_focus() {
                msgs.push(DateTimeMsg::TimeFocused);
            }
            if response.changed() {
                msgs.push(DateTimeMsg::TimeEdited(text));
            }
            if response.lost_focus() {
                msgs.push(DateTimeMsg::TimeCommitted);
            }

            ui.label(
                egui::RichText::new(egui_phosphor::regular::CLOCK)
                    .color(egui::Color32::from_gray(140)),
            );
        }
    });

    msgs
}

fn allowed_range_text(min: Option<TimeOfDay>, max: Option<TimeOfDay>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("Allowed: {min} to {max}"),
        _ => "Pick a date first to see available times".to_string(),
    }
}
