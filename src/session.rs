// Session state held by the registry
//
//   Anonymous --sign_in ok--> Authenticated(user)
//   Authenticated(a) --sign_in ok--> Authenticated(b)
//   Authenticated(a) --sign_in failed--> Authenticated(a)
//   * --sign_out--> Anonymous

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "username", rename_all = "snake_case")]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(String),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(username) => Some(username),
        }
    }
}
