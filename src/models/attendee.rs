// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Staff members an appointment can be booked with.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attendee {
    Member1,
    Member2,
}

impl Attendee {
    pub const ALL: [Attendee; 2] = [Attendee::Member1, Attendee::Member2];

    pub fn label(&self) -> &'static str {
        match self {
            Attendee::Member1 => "Member 1",
            Attendee::Member2 => "Member 2",
        }
    }
}
