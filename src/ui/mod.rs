// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the appointment details form.
//! Handles layout, modal dialogs, drag-and-drop, and the command worker.

pub mod components;

use std::path::PathBuf;

use eframe::egui;

use crate::config::FormConfig;
use crate::logic::{ErrorModal, LocalClock};
use crate::models::Attendee;
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::{datetime_picker, document};

/// Stateful egui application for the appointment details step.
pub struct AppointmentApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl AppointmentApp {
    /// Build the model and start the worker threads that run commands.
    pub fn new(config: FormConfig) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().clamp(1, 2))
            .unwrap_or(1);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        Self {
            model: AppModel::new(config, Box::new(LocalClock)),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for AppointmentApp {
    /// Drives a single UI frame: drains worker results, applies queued
    /// messages to the model, then renders the panels and modals. Views push
    /// new messages into the inbox for the next frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command worker.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        self.collect_dropped_files(ctx);

        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Appointment details");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(2.0);
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
        });

        if render_error_modal(ctx, &self.model.time_error, "time_error_modal") {
            self.inbox.push(Msg::DismissTimeError);
        }
        if render_error_modal(ctx, &self.model.file_error, "file_error_modal") {
            self.inbox.push(Msg::DismissFileError);
        }

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_reason_input(ui);
                ui.add_space(12.0);

                self.render_schedule_group(ui);
                ui.add_space(12.0);

                self.render_document_section(ui);
                ui.add_space(8.0);
            });
        });

        // Messages queued by this frame's views or still owed by the worker
        // need another frame to show up.
        if !self.inbox.is_empty() || self.model.pending_commands > 0 {
            ctx.request_repaint();
        }
    }
}

/// Render a centered modal window for `modal` while it holds a message.
/// Returns true when the user dismissed it.
fn render_error_modal(ctx: &egui::Context, modal: &ErrorModal, id: &'static str) -> bool {
    let Some(message) = modal.message() else {
        return false;
    };
    let mut dismissed = false;
    egui::Window::new(modal.title())
        .id(egui::Id::new(id))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::WARNING)
                        .size(20.0)
                        .color(egui::Color32::from_rgb(232, 89, 12)),
                );
                ui.label(message);
            });
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    dismissed
}

impl AppointmentApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// Queue files dropped onto the window as a document selection.
    fn collect_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            self.inbox.push(Msg::FilesDropped(dropped));
        }
    }

    /// Render the reason-for-visit field.
    fn render_reason_input(&mut self, ui: &mut egui::Ui) {
        ui.label("Reason");
        ui.add_space(4.0);
        let mut reason = self.model.reason.clone();
        if ui
            .add(
                egui::TextEdit::multiline(&mut reason)
                    .hint_text("Reason for the visit")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            self.inbox.push(Msg::ReasonChanged(reason));
        }
    }

    /// Grouped date/time and attendee controls.
    fn render_schedule_group(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            egui::Grid::new("schedule_grid")
                .num_columns(2)
                .spacing(egui::vec2(8.0, 10.0))
                .min_col_width(140.0)
                .show(ui, |ui| {
                    ui.label("Date and time");
                    let dt_msgs = datetime_picker::view(
                        &self.model.datetime,
                        &self.model.form,
                        &self.model.guards.datetime,
                        ui,
                    );
                    self.inbox.extend(dt_msgs.into_iter().map(Msg::DateTime));
                    ui.end_row();

                    ui.label("Attendee");
                    self.render_attendee_select(ui);
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(format!(
                    "Appointments run from {} to {}. Same-day bookings must start in the future.",
                    self.model.config.opening_time, self.model.config.closing_time
                ))
                .small()
                .color(egui::Color32::from_gray(110)),
            );
            if let Some(summary) = self.model.slot_summary() {
                ui.label(egui::RichText::new(summary).strong());
            }
        });
    }

    fn render_attendee_select(&mut self, ui: &mut egui::Ui) {
        let mut choice = self.model.attendee;
        egui::ComboBox::from_id_salt("attendee")
            .selected_text(choice.map_or("Select attendee", |a| a.label()))
            .show_ui(ui, |ui| {
                for attendee in Attendee::ALL {
                    ui.selectable_value(&mut choice, Some(attendee), attendee.label());
                }
            });
        if choice != self.model.attendee {
            self.inbox.push(Msg::AttendeeSelected(choice));
        }
    }

    /// Render the document picker when the form has a document input.
    fn render_document_section(&mut self, ui: &mut egui::Ui) {
        let Some(input) = self
            .model
            .guards
            .file
            .input_id()
            .and_then(|id| self.model.form.file(id))
        else {
            return;
        };

        egui::CollapsingHeader::new("Supporting document")
            .default_open(true)
            .show(ui, |ui| {
                let doc_msgs = document::view(ui, input);
                self.inbox.extend(doc_msgs.into_iter().map(Msg::Document));
            });
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            let display = if self.model.pending_commands > 0 {
                format!("{}  ({} working…)", text, self.model.pending_commands)
            } else {
                text.to_string()
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(display).color(egui::Color32::from_gray(68)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0));
                }
            });
        }
    }
}
