// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Load notifications shown in the snackbar

/// Outcome a notification reports
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS severity class
    pub fn severity(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    /// Translation key of the message text
    pub fn message_key(&self) -> &'static str {
        match self {
            NotificationKind::Success => "loadSucceeded",
            NotificationKind::Error => "loadFailed",
        }
    }
}

/// One snackbar notification
///
/// The kind is fixed when the notification is created. The id lets a close
/// request (auto-hide timer, close button) target exactly this notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}
