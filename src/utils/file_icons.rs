// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges
//! Phosphor icon for a chosen document, based on MIME type and extension.
//!
//! Only distinguishes the kinds people commonly try to upload with an
//! appointment: PDFs, scans/photos, office documents and plain text.

use std::path::Path;

/// Return a Phosphor file icon matching the MIME type or filename.
pub fn icon_for(mime: &str, path: &Path) -> &'static str {
    let mime = mime
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    if mime == "application/pdf" || ext == "pdf" {
        return egui_phosphor::regular::FILE_PDF;
    }
    if mime.starts_with("image/") {
        return match ext.as_str() {
            "png" => egui_phosphor::regular::FILE_PNG,
            "jpg" | "jpeg" => egui_phosphor::regular::FILE_JPG,
            _ => egui_phosphor::regular::FILE_IMAGE,
        };
    }
    if mime == "application/msword"
        || mime == "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        || ext == "doc"
        || ext == "docx"
    {
        return egui_phosphor::regular::FILE_DOC;
    }
    if mime == "application/vnd.oasis.opendocument.text" || ext == "odt" {
        return egui_phosphor::regular::FILE_TEXT;
    }
    if ext == "txt" || mime.starts_with("text/") {
        return egui_phosphor::regular::FILE_TXT;
    }

    egui_phosphor::regular::FILE
}
