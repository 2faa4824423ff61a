use crate::api::StockroomApi;
use crate::config::StockConfig;
use crate::store::fs::FileStore;
use directories::{BaseDirs, ProjectDirs};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const STORE_DIR: &str = ".stockroom";
pub const HOME_ENV: &str = "STOCKROOM_HOME";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Project,
    Global,
}

pub struct StockroomContext {
    pub api: StockroomApi<FileStore>,
}

/// Find the project root by walking up from cwd looking for a directory
/// that has both .git and .stockroom. A directory with .git but no .stockroom
/// does not stop the search, so nested repos resolve to the parent's stockroom.
/// Returns None if nothing matches before reaching home or the filesystem root.
pub fn find_project_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(".git").exists() && current.join(STORE_DIR).exists() {
            return Some(current);
        }

        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

/// Global store directory: `$STOCKROOM_HOME` when set, else the platform data dir.
pub fn global_dir() -> PathBuf {
    global_dir_from(std::env::var_os(HOME_ENV))
}

fn global_dir_from(home: Option<OsString>) -> PathBuf {
    if let Some(home) = home.filter(|v| !v.is_empty()) {
        return PathBuf::from(home);
    }
    ProjectDirs::from("com", "stockroom", "stockroom")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(STORE_DIR))
}

/// Directory a scope resolves to from `cwd`.
pub fn store_dir(cwd: &Path, scope: Scope) -> PathBuf {
    match scope {
        Scope::Global => global_dir(),
        Scope::Project => find_project_root(cwd)
            .map(|root| root.join(STORE_DIR))
            .unwrap_or_else(|| cwd.join(STORE_DIR)),
    }
}

pub fn initialize(cwd: &Path, use_global: bool) -> StockroomContext {
    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };
    let dir = store_dir(cwd, scope);

    let config = match StockConfig::load(&dir) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, dir = %dir.display(), "unreadable config, using defaults");
            StockConfig::default()
        }
    };

    tracing::debug!(?scope, dir = %dir.display(), "store resolved");
    let store = FileStore::new(dir.clone()).with_data_file(&config.data_file);
    let api = StockroomApi::new(store, dir, config);

    StockroomContext { api }
}
