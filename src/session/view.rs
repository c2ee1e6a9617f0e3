use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Screen label selected by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Landing,
    Login,
    Register,
    RegisterProvider,
    UserDash,
    ProviderDash,
    AdminDash,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Login => "login",
            View::Register => "register",
            View::RegisterProvider => "register-provider",
            View::UserDash => "user-dash",
            View::ProviderDash => "provider-dash",
            View::AdminDash => "admin-dash",
        }
    }

    /// Dashboard a freshly signed-in identity lands on
    pub fn for_role(role: Role) -> View {
        match role {
            Role::Admin => View::AdminDash,
            Role::Provider => View::ProviderDash,
            Role::User => View::UserDash,
        }
    }

    /// Role a viewer must hold, if this is a dashboard
    pub fn required_role(&self) -> Option<Role> {
        match self {
            View::UserDash => Some(Role::User),
            View::ProviderDash => Some(Role::Provider),
            View::AdminDash => Some(Role::Admin),
            View::Landing | View::Login | View::Register | View::RegisterProvider => None,
        }
    }
}
