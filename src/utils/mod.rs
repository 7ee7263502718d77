// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by UI components.

pub mod file_icons;
pub mod format;

/// Select a Phosphor icon for the given MIME/path.
pub use file_icons::icon_for;
/// Format a byte count with binary units.
pub use format::format_bytes;
