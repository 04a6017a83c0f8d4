use std::path::{Path, PathBuf};

pub fn user_home() -> Option<PathBuf> {
    home::home_dir()
}

/// Per-user binary directories under `home`, `bin` before `.bin`.
pub fn user_bin_dirs(home: &Path) -> [PathBuf; 2] {
    [home.join("bin"), home.join(".bin")]
}
