//! Team selection and theming state.
//!
//! One `SelectionStore` exists per session. It starts from compile-time
//! defaults, can be overwritten once by a restore from persistent storage
//! and any number of times by explicit user action, and republishes the
//! active palette to the presentation channel after every settle.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use crate::teams::{self, ColorScheme, TeamColors, TeamConfig, DEFAULT_TEAM_ABBREV, NHL_TEAMS};

/// Storage key for the selected team abbreviation.
pub const TEAM_KEY: &str = "selected-team";
/// Storage key for the color scheme.
pub const SCHEME_KEY: &str = "color-scheme";

/// Presentation channel names, one per palette slot.
pub const PRIMARY_CHANNEL: &str = "team-primary";
pub const SECONDARY_CHANNEL: &str = "team-secondary";
pub const ACCENT_CHANNEL: &str = "team-accent";
pub const TEXT_CHANNEL: &str = "team-text";

#[derive(Debug, Error)]
pub enum SelectionError {
    /// Programming error: the store was used before the session mounted it.
    #[error("selection store used outside an initialized session")]
    NotInitialized,
}

/// Minimal persistent key-value store. Absence of a key is a normal state,
/// not an error; writes are fire-and-forget and never retried.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store for tests and for sessions without a config directory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// TOML-backed store under the XDG config directory. The whole file is
/// rewritten on every set; it only ever holds the two selection keys.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// Open the store at the default XDG location, if one can be resolved.
    pub fn open_default() -> Option<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix(env!("CARGO_PKG_NAME"));
        let config_home = xdg_dirs.get_config_home()?;
        Some(Self::open(config_home.join("selection.toml")))
    }

    /// Open a store backed by `path`. A missing or unreadable file is an
    /// empty store, never an error.
    pub fn open(path: PathBuf) -> Self {
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default();
        Self { path, values }
    }

    fn flush(&self) {
        let serialized = match toml::to_string(&self.values) {
            Ok(s) => s,
            Err(e) => {
                warn!("could not serialize selection state: {e}");
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("could not create {}: {e}", parent.display());
                return;
            }
        }
        if let Err(e) = fs::write(&self.path, serialized) {
            warn!("could not write {}: {e}", self.path.display());
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
        self.flush();
    }
}

/// Receives the active palette, one named variable at a time, after every
/// transition of the selection store.
pub trait PalettePublisher {
    fn set_var(&mut self, name: &'static str, value: &str);
}

/// Test publisher capturing every published (channel, value) pair. Clones
/// share the same log so a caller can keep one while the store owns the
/// other.
#[derive(Debug, Clone, Default)]
pub struct RecordingPublisher {
    published: std::rc::Rc<std::cell::RefCell<Vec<(&'static str, String)>>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<(&'static str, String)> {
        self.published.borrow().clone()
    }
}

impl PalettePublisher for RecordingPublisher {
    fn set_var(&mut self, name: &'static str, value: &str) {
        self.published.borrow_mut().push((name, value.to_string()));
    }
}

/// The session's current team/scheme selection.
pub struct SelectionStore {
    team_abbrev: String,
    color_scheme: ColorScheme,
    kv: Box<dyn KeyValueStore>,
    publisher: Box<dyn PalettePublisher>,
}

impl SelectionStore {
    /// Start from the compile-time defaults and publish the initial palette.
    pub fn new(kv: Box<dyn KeyValueStore>, publisher: Box<dyn PalettePublisher>) -> Self {
        let mut store = Self {
            team_abbrev: DEFAULT_TEAM_ABBREV.to_string(),
            color_scheme: ColorScheme::default(),
            kv,
            publisher,
        };
        store.publish_palette();
        store
    }

    /// One-time restore from persistent storage. Unknown teams and
    /// unrecognized schemes are silently ignored; stale local state must
    /// never block the session.
    pub fn restore(&mut self) {
        if let Some(saved) = self.kv.get(TEAM_KEY) {
            if teams::team_by_abbrev(&saved).is_some() {
                self.team_abbrev = saved;
            } else {
                debug!("ignoring persisted team {saved:?}: not in registry");
            }
        }
        if let Some(saved) = self.kv.get(SCHEME_KEY) {
            match ColorScheme::parse(&saved) {
                Some(scheme) => self.color_scheme = scheme,
                None => debug!("ignoring persisted color scheme {saved:?}"),
            }
        }
        self.publish_palette();
    }

    /// Select a team. The abbreviation is accepted and persisted as given;
    /// resolution against the registry happens at lookup time.
    pub fn set_team_abbrev(&mut self, abbrev: &str) {
        self.team_abbrev = abbrev.to_string();
        self.kv.set(TEAM_KEY, abbrev);
        self.publish_palette();
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.color_scheme = scheme;
        self.kv.set(SCHEME_KEY, scheme.as_str());
        self.publish_palette();
    }

    pub fn team_abbrev(&self) -> &str {
        &self.team_abbrev
    }

    /// Read back a raw persisted value, mainly for diagnostics and tests.
    pub fn persisted(&self, key: &str) -> Option<String> {
        self.kv.get(key)
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    /// The selected team's catalog entry. An abbreviation that is not in
    /// the registry resolves to the first entry.
    pub fn selected_team(&self) -> &'static TeamConfig {
        teams::team_by_abbrev(&self.team_abbrev).unwrap_or(&NHL_TEAMS[0])
    }

    /// The active palette for the selected team and scheme.
    pub fn palette(&self) -> &'static TeamColors {
        self.selected_team().palette(self.color_scheme)
    }

    fn publish_palette(&mut self) {
        let colors = self.palette();
        self.publisher.set_var(PRIMARY_CHANNEL, colors.primary);
        self.publisher.set_var(SECONDARY_CHANNEL, colors.secondary);
        self.publisher.set_var(ACCENT_CHANNEL, colors.accent);
        self.publisher.set_var(TEXT_CHANNEL, colors.text);
    }
}

/// Initialization boundary for the selection store. Consumers hold a
/// session and must go through [`TeamSession::store`]; access before
/// `mount` fails instead of silently inventing state.
#[derive(Default)]
pub struct TeamSession {
    store: Option<SelectionStore>,
}

impl TeamSession {
    pub fn unmounted() -> Self {
        Self::default()
    }

    pub fn mount(kv: Box<dyn KeyValueStore>, publisher: Box<dyn PalettePublisher>) -> Self {
        Self {
            store: Some(SelectionStore::new(kv, publisher)),
        }
    }

    pub fn store(&self) -> Result<&SelectionStore, SelectionError> {
        self.store.as_ref().ok_or(SelectionError::NotInitialized)
    }

    pub fn store_mut(&mut self) -> Result<&mut SelectionStore, SelectionError> {
        self.store.as_mut().ok_or(SelectionError::NotInitialized)
    }
}
