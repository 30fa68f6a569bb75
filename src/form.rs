//! Edit-dialog lifecycle for a staging buffer.
//!
//! The buffer is a transient copy of an entity's editable fields: populated
//! when the dialog opens, discarded on cancel, submitted as a whole on save.
//! After a successful save the server's response is the source of truth and
//! the dialog closes.

/// States of one create/edit dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum FormState<B> {
    /// Dialog closed, nothing staged.
    Viewing,
    /// Dialog open with an editable buffer and an inline error slot.
    Editing {
        buffer: B,
        is_new: bool,
        error: Option<String>,
    },
    /// Save in flight; the buffer is frozen until the outcome lands.
    Submitting { buffer: B, is_new: bool },
}

impl<B> Default for FormState<B> {
    fn default() -> Self {
        FormState::Viewing
    }
}

impl<B: Clone> FormState<B> {
    /// Opens the dialog for a brand-new entity.
    pub fn open_new(&mut self, buffer: B) {
        *self = FormState::Editing {
            buffer,
            is_new: true,
            error: None,
        };
    }

    /// Opens the dialog pre-populated from a fresh server snapshot.
    pub fn open_existing(&mut self, buffer: B) {
        *self = FormState::Editing {
            buffer,
            is_new: false,
            error: None,
        };
    }

    /// Discards the buffer without contacting the server.
    pub fn cancel(&mut self) {
        *self = FormState::Viewing;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, FormState::Viewing)
    }

    pub fn buffer(&self) -> Option<&B> {
        match self {
            FormState::Viewing => None,
            FormState::Editing { buffer, .. } | FormState::Submitting { buffer, .. } => {
                Some(buffer)
            }
        }
    }

    /// Mutable access to the buffer, only while editable.
    pub fn buffer_mut(&mut self) -> Option<&mut B> {
        match self {
            FormState::Editing { buffer, .. } => Some(buffer),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FormState::Editing { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Publishes a validation or server error into the editing dialog.
    pub fn set_error(&mut self, message: impl Into<String>) {
        if let FormState::Editing { error, .. } = self {
            *error = Some(message.into());
        }
    }

    /// Freezes the buffer for submission and returns a copy to send.
    /// Returns `None` unless currently editing.
    pub fn begin_submit(&mut self) -> Option<B> {
        if let FormState::Editing { buffer, is_new, .. } = self {
            let staged = buffer.clone();
            *self = FormState::Submitting {
                buffer: staged.clone(),
                is_new: *is_new,
            };
            Some(staged)
        } else {
            None
        }
    }

    /// Reopens the dialog with the failure message; edits are preserved.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        if let FormState::Submitting { buffer, is_new } = self {
            *self = FormState::Editing {
                buffer: buffer.clone(),
                is_new: *is_new,
                error: Some(message.into()),
            };
        }
    }

    /// Closes the dialog after a successful save.
    pub fn submit_ok(&mut self) {
        *self = FormState::Viewing;
    }
}
