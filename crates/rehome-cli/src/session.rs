//! Session storage for persisting login state.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use rehome_core::{ServiceUrl, SessionCookie};
use rehome_http::HttpSession;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
///
/// The cookie is persisted exactly as the service issued it; its contents
/// are never inspected.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    service: String,
    cookie: String,
}

/// Get the session file path.
pub fn session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "rehome").context("Could not determine config directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}

/// Save a session to disk.
pub async fn save_session(service: &ServiceUrl, cookie: &SessionCookie) -> Result<()> {
    let stored = StoredSession {
        service: service.as_str().to_string(),
        cookie: cookie.as_str().to_string(),
    };

    let path = session_path()?;
    let json = serde_json::to_string_pretty(&stored)?;

    fs::write(&path, &json).context("Failed to write session file")?;

    // Set restrictive permissions (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(())
}

/// Load a session from disk.
pub async fn load_session() -> Result<Option<HttpSession>> {
    let path = session_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read session file")?;
    let stored: StoredSession = serde_json::from_str(&json).context("Invalid session file")?;

    let service = ServiceUrl::new(&stored.service).context("Invalid service URL in session")?;
    let cookie = SessionCookie::new(stored.cookie);

    Ok(Some(HttpSession::from_parts(service, cookie)))
}

/// Clear the stored session.
pub async fn clear_session() -> Result<()> {
    let path = session_path()?;

    if path.exists() {
        fs::remove_file(&path).context("Failed to remove session file")?;
    }

    Ok(())
}
