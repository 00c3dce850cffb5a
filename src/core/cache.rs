//! File system layout of the local matchup cache
//!
//! The fetcher that talks to Sleeper writes one JSON file per week into a
//! data directory; everything here only locates and reads those files.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{error::GauntletError, Result, Week, DATA_DIR_ENV_VAR};

/// Default data directory: ~/.cache/quantum-gauntlet
pub fn default_data_dir() -> Option<PathBuf> {
    let base = dirs::cache_dir().or_else(|| {
        dirs::home_dir().map(|mut home| {
            home.push(".cache");
            home
        })
    })?;
    Some(base.join("quantum-gauntlet"))
}

/// Resolve the data directory from an explicit argument, then
/// `GAUNTLET_DATA_DIR`, then the default cache location.
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_dir {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    default_data_dir().ok_or_else(|| GauntletError::MissingDataDir {
        env_var: DATA_DIR_ENV_VAR.to_string(),
    })
}

/// Path: {data_dir}/matchups_{week}.json
pub fn matchups_path(data_dir: &Path, week: Week) -> PathBuf {
    data_dir.join(format!("matchups_{}.json", week.as_u16()))
}

/// Read a file into a String, mapping "not found" to `Ok(None)`.
pub fn read_if_exists(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_matchups_path() {
        let path = matchups_path(Path::new("/data"), Week::new(9));
        assert_eq!(path, PathBuf::from("/data/matchups_9.json"));
    }

    #[test]
    fn test_default_data_dir_ends_with_app_name() {
        if let Some(dir) = default_data_dir() {
            assert!(dir.ends_with("quantum-gauntlet"));
        }
    }

    #[test]
    fn test_resolve_data_dir_prefers_explicit_argument() {
        let dir = resolve_data_dir(Some(PathBuf::from("/explicit"))).unwrap();
        assert_eq!(dir, PathBuf::from("/explicit"));
    }

    #[test]
    fn test_read_if_exists_existing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.json");

        fs::write(&file_path, "[]").unwrap();

        let content = read_if_exists(&file_path).unwrap();
        assert_eq!(content, Some("[]".to_string()));
    }

    #[test]
    fn test_read_if_exists_nonexistent_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nonexistent.json");

        assert_eq!(read_if_exists(&file_path).unwrap(), None);
    }

    #[test]
    fn test_read_if_exists_directory_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(read_if_exists(dir.path()).is_err());
    }

    #[test]
    fn test_write_string_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("subdir").join("matchups_1.json");

        write_string(&file_path, "[]").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "[]");
    }
}
