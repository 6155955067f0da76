// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Application shell state
//!
//! Drawer, about dialog, loading backdrop, snackbar and the clipping
//! highlight. Updated only through [`ShellAction`] so the Yew reducer and the
//! tests drive exactly the same transitions.

use crate::notify::{Notification, NotificationKind};
use ifc_peek_model::ModelId;

/// Shell state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    pub drawer_open: bool,
    pub about_open: bool,
    /// True only between file selection and load completion or failure
    pub loading: bool,
    /// String form of the last load error, cleared when a new load starts
    pub error: Option<String>,
    pub notification: Option<Notification>,
    /// Clipping state as last reported by the viewer
    pub clipping_active: bool,
    pub model: Option<ModelId>,
    next_notification_id: u64,
}

/// Shell transitions
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellAction {
    SetDrawerOpen(bool),
    SetAboutOpen(bool),
    LoadStarted,
    LoadSucceeded(ModelId),
    LoadFailed(String),
    /// Close the notification with this id; stale ids are ignored
    CloseNotification(u64),
    /// Clipping state read back from the viewer after a toggle
    ClippingReported(bool),
}

impl ShellState {
    pub fn apply(&mut self, action: ShellAction) {
        match action {
            ShellAction::SetDrawerOpen(open) => {
                self.drawer_open = open;
            }
            ShellAction::SetAboutOpen(open) => {
                self.about_open = open;
            }
            ShellAction::LoadStarted => {
                self.error = None;
                self.notification = None;
                self.loading = true;
            }
            ShellAction::LoadSucceeded(model) => {
                self.model = Some(model);
                self.loading = false;
                self.notify(NotificationKind::Success);
            }
            ShellAction::LoadFailed(message) => {
                self.error = Some(message);
                self.loading = false;
                self.notify(NotificationKind::Error);
            }
            ShellAction::CloseNotification(id) => {
                if self.notification.map(|n| n.id) == Some(id) {
                    self.notification = None;
                }
            }
            ShellAction::ClippingReported(active) => {
                self.clipping_active = active;
            }
        }
    }

    fn notify(&mut self, kind: NotificationKind) {
        self.next_notification_id += 1;
        self.notification = Some(Notification {
            id: self.next_notification_id,
            kind,
        });
    }
}
