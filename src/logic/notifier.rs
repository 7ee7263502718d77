// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Error presentation shared by the guards.

/// Something that can put a validation message in front of the user.
pub trait ErrorNotifier {
    fn notify(&mut self, message: &str);
}

/// Modal dialog state: a fixed title and the message waiting to be shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorModal {
    title: &'static str,
    message: Option<String>,
}

impl ErrorModal {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            message: None,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Message to display, if the modal is open.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }

    /// Close the modal.
    pub fn dismiss(&mut self) {
        self.message = None;
    }
}

impl ErrorNotifier for ErrorModal {
    fn notify(&mut self, message: &str) {
        log::debug!("{}: {message}", self.title);
        self.message = Some(message.to_string());
    }
}

/// Collects messages in order; handy when no UI is attached.
impl ErrorNotifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_string());
    }
}
