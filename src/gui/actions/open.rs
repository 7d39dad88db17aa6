// src/gui/actions/open.rs
use std::path::{Path, PathBuf};

use crate::gui::app::App;

/// Open the chart directory in the system file explorer.
pub fn open_output_folder(app: &App) {
    let folder = find_nearest_existing_parent(&app.state.options.report.out_dir);

    let absolute_folder = match std::fs::canonicalize(&folder) {
        Ok(abs_path) => abs_path,
        Err(e) => {
            let msg = format!("Cannot resolve folder path: {}", e);
            loge!("{}", msg);
            app.status(msg);
            return;
        }
    };

    if let Err(e) = open_folder_in_explorer(&absolute_folder) {
        loge!("Failed to open folder: {}", e);
        app.status(format!("Failed to open folder: {}", e));
    } else {
        logf!("Opened folder: {}", absolute_folder.display());
    }
}

/// Nearest existing directory at or above `path`; "." when none is.
fn find_nearest_existing_parent(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return PathBuf::from("."),
        }
    }
}

fn open_folder_in_explorer(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("explorer")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn explorer: {}", e))?;
        Ok(())
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn open: {}", e))?;
        Ok(())
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn xdg-open: {}", e))?;
        Ok(())
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        let _ = path;
        Err(s!("Opening folders not supported on this platform"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dirs_fall_back_to_an_existing_parent() {
        let tmp = std::env::temp_dir();
        let deep = tmp.join("bo_scrape_missing").join("a").join("b");
        assert_eq!(find_nearest_existing_parent(&deep), tmp);
        assert_eq!(find_nearest_existing_parent(Path::new("no/such/dir")), PathBuf::from("."));
    }
}
