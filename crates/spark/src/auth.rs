use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::persist::StateRepository;

/// A signed-in user. Authentication is mocked: there is no backend, the
/// profile exists so the rest of the app has someone to attribute state to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
  pub uid: String,
  pub email: Option<String>,
  pub display_name: Option<String>,
  pub email_verified: bool,
  pub is_anonymous: bool,
}

/// The persisted `auth-state` blob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
  pub user: Option<UserProfile>,
}

/// Session store over the auth snapshot, same write-through behavior as
/// [`crate::store::AppStore`].
pub struct AuthStore {
  state: AuthState,
  repo: Box<dyn StateRepository>,
}

impl AuthStore {
  pub fn open(repo: Box<dyn StateRepository>) -> Self {
    let state = match repo.load_auth() {
      Ok(Some(state)) => state,
      Ok(None) => AuthState::default(),
      Err(e) => {
        warn!("Could not load auth state, starting signed out: {e:#}");
        AuthState::default()
      }
    };
    Self { state, repo }
  }

  pub fn current_user(&self) -> Option<&UserProfile> {
    self.state.user.as_ref()
  }

  /// Mock sign-in: mints a fresh uid and replaces any existing session
  pub fn login(&mut self, email: &str, display_name: Option<&str>) -> UserProfile {
    let user = UserProfile {
      uid: Uuid::new_v4().to_string(),
      email: Some(email.to_string()),
      display_name: display_name.map(|n| n.to_string()),
      email_verified: false,
      is_anonymous: false,
    };
    self.state.user = Some(user.clone());
    self.persist();
    user
  }

  pub fn logout(&mut self) {
    self.state.user = None;
    self.persist();
  }

  fn persist(&self) {
    if let Err(e) = self.repo.save_auth(&self.state) {
      warn!("Could not persist auth state: {e:#}");
    }
  }
}
