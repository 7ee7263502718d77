// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Supporting document picker in MVU style.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eframe::egui;

use crate::models::form::FileInput;
use crate::models::{EventKind, Form, FormEvent, SelectedFile};
use crate::utils::{format_bytes, icon_for};

/// Help text shown under the picker.
pub const HELP_TEXT: &str = "Only PDF files allowed, maximum size 2MB. (Optional)";

/// Messages emitted by the document view or produced by file dialogs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentMsg {
    RequestPick,
    Selected(Vec<SelectedFile>),
    Clear,
}

/// Side effects requested by the document picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentCommand {
    PickFile,
}

/// Apply a message to the bound file input; returns the change event it raises.
pub fn update(
    form: &mut Form,
    input_id: &str,
    msg: DocumentMsg,
    cmds: &mut Vec<DocumentCommand>,
) -> Option<FormEvent> {
    match msg {
        DocumentMsg::RequestPick => {
            cmds.push(DocumentCommand::PickFile);
            None
        }
        DocumentMsg::Selected(files) => {
            form.file_mut(input_id)?.files = files;
            Some(FormEvent::new(input_id, EventKind::Change))
        }
        DocumentMsg::Clear => {
            form.file_mut(input_id)?.clear();
            Some(FormEvent::new(input_id, EventKind::Change))
        }
    }
}

/// Render the picker and the current selection.
pub fn view(ui: &mut egui::Ui, input: &FileInput) -> Vec<DocumentMsg> {
    let mut msgs = Vec::new();

    if ui
        .add(egui::Button::new(format!(
            "{} Choose file",
            egui_phosphor::regular::FOLDER_OPEN
        )))
        .on_hover_text("Choose a PDF document")
        .clicked()
    {
        msgs.push(DocumentMsg::RequestPick);
    }

    ui.add_space(6.0);

    let visuals = ui.visuals().clone();
    egui::Frame::new()
        .fill(visuals.panel_fill)
        .stroke(visuals.window_stroke())
        .inner_margin(8.0)
        .show(ui, |ui| match input.first() {
            None => {
                ui.label(
                    egui::RichText::new("No file chosen").color(egui::Color32::from_gray(150)),
                );
            }
            Some(file) => render_selected(ui, file, &mut msgs),
        });

    ui.label(
        egui::RichText::new(HELP_TEXT)
            .small()
            .color(egui::Color32::from_gray(110)),
    );

    msgs
}

fn render_selected(ui: &mut egui::Ui, file: &SelectedFile, msgs: &mut Vec<DocumentMsg>) {
    let path = file
        .path
        .clone()
        .unwrap_or_else(|| PathBuf::from(&file.name));
    let mime = guess_mime(&path);

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(icon_for(&mime, &path)).size(28.0));
        ui.vertical(|ui| {
            ui.label(file.name.clone());
            ui.label(
                egui::RichText::new(format!("{mime} | {}", format_bytes(file.size)))
                    .small()
                    .color(egui::Color32::from_gray(90)),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(egui::RichText::new(egui_phosphor::regular::TRASH_SIMPLE))
                .on_hover_text("Remove document")
                .clicked()
            {
                msgs.push(DocumentMsg::Clear);
            }
        });
    });
}

pub(crate) fn guess_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Read name and size of each path, in order.
///
/// # Errors
///
/// Fails on the first path whose metadata cannot be read.
pub fn inspect_files(paths: Vec<PathBuf>) -> Result<Vec<SelectedFile>> {
    paths
        .into_iter()
        .map(|path| {
            let size = path
                .metadata()
                .with_context(|| format!("Failed to read file metadata: {}", path.display()))?
                .len();
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok(SelectedFile {
                name,
                size,
                path: Some(path),
            })
        })
        .collect()
}
