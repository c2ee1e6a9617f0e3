use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::View;
use crate::interceptors::{AppError, AppResult};
use crate::models::{Role, User};

/// How long a toast stays visible
pub const TOAST_TTL_SECS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: DateTime<Utc>,
}

/// Signed-in identity as held by the session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub role: Role,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "service_id", rename_all = "lowercase")]
pub enum ServiceModal {
    #[default]
    Closed,
    Creating,
    Editing(String),
}

/// Per-client UI state: identity, current view and transient flags.
///
/// Views change only when a caller asks; `authorize` is the one place that
/// checks the view against the identity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Session {
    identity: Option<SessionUser>,
    view: View,
    service_modal: ServiceModal,
    selected_service: Option<String>,
    toast: Option<Toast>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(&self) -> Option<&SessionUser> {
        self.identity.as_ref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn service_modal(&self) -> &ServiceModal {
        &self.service_modal
    }

    pub fn selected_service(&self) -> Option<&str> {
        self.selected_service.as_deref()
    }

    pub fn login(&mut self, user: &User, now: DateTime<Utc>) {
        self.identity = Some(SessionUser::from(user));
        self.view = View::for_role(user.role);
        self.notify(format!("Welcome back, {}!", user.name), ToastKind::Success, now);
    }

    pub fn logout(&mut self) {
        self.identity = None;
        self.view = View::Landing;
        self.service_modal = ServiceModal::Closed;
        self.selected_service = None;
    }

    pub fn navigate(&mut self, view: View) {
        self.view = view;
    }

    /// Dashboards require an identity holding the dashboard's role
    pub fn authorize(&self) -> AppResult<()> {
        let Some(required) = self.view.required_role() else {
            return Ok(());
        };

        match &self.identity {
            None => Err(AppError::Unauthorized("Sign in to open this dashboard".to_string())),
            Some(identity) if identity.role != required => Err(AppError::Forbidden(format!(
                "The {} dashboard requires the {} role",
                self.view.as_str(),
                required
            ))),
            Some(_) => Ok(()),
        }
    }

    pub fn open_service_modal(&mut self, editing: Option<String>) {
        self.service_modal = match editing {
            Some(id) => ServiceModal::Editing(id),
            None => ServiceModal::Creating,
        };
    }

    pub fn close_service_modal(&mut self) {
        self.service_modal = ServiceModal::Closed;
    }

    pub fn select_service(&mut self, service_id: impl Into<String>) {
        self.selected_service = Some(service_id.into());
    }

    pub fn clear_selected_service(&mut self) {
        self.selected_service = None;
    }

    /// Show a toast, replacing any current one
    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind, now: DateTime<Utc>) {
        self.toast = Some(Toast {
            message: message.into(),
            kind,
            expires_at: now + Duration::seconds(TOAST_TTL_SECS),
        });
    }

    /// The toast, if it has not expired by `now`
    pub fn toast(&self, now: DateTime<Utc>) -> Option<&Toast> {
        self.toast.as_ref().filter(|t| now < t.expires_at)
    }

    pub fn clear_expired(&mut self, now: DateTime<Utc>) {
        if self.toast(now).is_none() {
            self.toast = None;
        }
    }
}
