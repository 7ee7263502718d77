// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: form inputs and time values shared between UI and guard logic.

pub mod attendee;
pub mod form;
pub mod time_of_day;

pub use attendee::Attendee;
pub use form::{EventKind, Form, FormEvent, SelectedFile};
pub use time_of_day::TimeOfDay;
