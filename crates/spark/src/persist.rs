use anyhow::{anyhow, Context, Result};
use dirs::home_dir;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::auth::AuthState;
use crate::store::AppState;

pub const APP_STATE_FILE: &str = "app-state.json";
pub const AUTH_STATE_FILE: &str = "auth-state.json";

/// Get the state root directory (~/.spark)
pub fn get_state_root() -> Result<PathBuf> {
  // Allow tests or callers to override the root directory via env var
  if let Ok(custom_root) = std::env::var("SPARK_STATE_ROOT") {
    return Ok(PathBuf::from(custom_root));
  }

  let home = home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
  Ok(home.join(".spark"))
}

/// Where snapshots live. The in-memory stores are the source of truth; a
/// repository only loads them at startup and receives full snapshots on
/// every mutation.
pub trait StateRepository {
  fn load_app(&self) -> Result<Option<AppState>>;
  fn save_app(&self, state: &AppState) -> Result<()>;
  fn load_auth(&self) -> Result<Option<AuthState>>;
  fn save_auth(&self, state: &AuthState) -> Result<()>;
  /// Remove every persisted snapshot
  fn clear(&self) -> Result<()>;
}

/// JSON snapshot files under the state root
pub struct FileRepository {
  root: PathBuf,
}

impl FileRepository {
  pub fn new() -> Result<Self> {
    Ok(Self { root: get_state_root()? })
  }

  pub fn with_root(root: PathBuf) -> Self {
    Self { root }
  }

  pub fn root(&self) -> &PathBuf {
    &self.root
  }

  fn load_blob<T: serde::de::DeserializeOwned>(&self, file: &str) -> Result<Option<T>> {
    let path = self.root.join(file);
    if !path.exists() {
      return Ok(None);
    }

    let json = fs::read_to_string(&path)
      .with_context(|| format!("Failed to read {}", path.display()))?;
    let state = serde_json::from_str(&json)
      .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Some(state))
  }

  fn save_blob<T: serde::Serialize>(&self, file: &str, state: &T) -> Result<()> {
    fs::create_dir_all(&self.root)
      .with_context(|| format!("Failed to create directory: {}", self.root.display()))?;

    let path = self.root.join(file);
    let json = serde_json::to_string_pretty(state)?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
  }
}

impl StateRepository for FileRepository {
  fn load_app(&self) -> Result<Option<AppState>> {
    self.load_blob(APP_STATE_FILE)
  }

  fn save_app(&self, state: &AppState) -> Result<()> {
    self.save_blob(APP_STATE_FILE, state)
  }

  fn load_auth(&self) -> Result<Option<AuthState>> {
    self.load_blob(AUTH_STATE_FILE)
  }

  fn save_auth(&self, state: &AuthState) -> Result<()> {
    self.save_blob(AUTH_STATE_FILE, state)
  }

  fn clear(&self) -> Result<()> {
    for file in [APP_STATE_FILE, AUTH_STATE_FILE] {
      let path = self.root.join(file);
      if path.exists() {
        fs::remove_file(&path)
          .with_context(|| format!("Failed to remove {}", path.display()))?;
      }
    }
    Ok(())
  }
}

#[derive(Default)]
struct MemoryInner {
  app: Option<AppState>,
  auth: Option<AuthState>,
  fail_writes: bool,
}

/// In-memory repository for tests. Clones share the same backing state, so
/// a test can hold one handle and hand another to the store.
#[derive(Clone, Default)]
pub struct MemoryRepository {
  inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryRepository {
  pub fn new() -> Self {
    Self::default()
  }

  /// Make every subsequent write fail, to exercise the swallowed-error path
  pub fn fail_writes(&self, fail: bool) {
    self.inner.lock().unwrap().fail_writes = fail;
  }

  /// The last persisted app snapshot, if any
  pub fn app_snapshot(&self) -> Option<AppState> {
    self.inner.lock().unwrap().app.clone()
  }

  pub fn auth_snapshot(&self) -> Option<AuthState> {
    self.inner.lock().unwrap().auth.clone()
  }
}

impl StateRepository for MemoryRepository {
  fn load_app(&self) -> Result<Option<AppState>> {
    Ok(self.inner.lock().unwrap().app.clone())
  }

  fn save_app(&self, state: &AppState) -> Result<()> {
    let mut inner = self.inner.lock().unwrap();
    if inner.fail_writes {
      return Err(anyhow!("Simulated write failure"));
    }
    inner.app = Some(state.clone());
    Ok(())
  }

  fn load_auth(&self) -> Result<Option<AuthState>> {
    Ok(self.inner.lock().unwrap().auth.clone())
  }

  fn save_auth(&self, state: &AuthState) -> Result<()> {
    let mut inner = self.inner.lock().unwrap();
    if inner.fail_writes {
      return Err(anyhow!("Simulated write failure"));
    }
    inner.auth = Some(state.clone());
    Ok(())
  }

  fn clear(&self) -> Result<()> {
    let mut inner = self.inner.lock().unwrap();
    inner.app = None;
    inner.auth = None;
    Ok(())
  }
}
