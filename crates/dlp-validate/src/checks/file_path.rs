use std::path::{Path, PathBuf};

use dlp_model::{Grid, GridError, Location, Violations};

use super::{FILE_NAME, data_cell};
use crate::messages;
use crate::validator::Validator;

/// Mount point shared by the host directory and spreadsheet paths.
const MASTERS_PREFIX: &str = "Masters/";

/// Every `File Name` must name a file under the host directory.
#[derive(Debug)]
pub struct FilePathCheck {
    host_dir: Option<PathBuf>,
}

impl FilePathCheck {
    pub fn new(host_dir: Option<PathBuf>) -> Self {
        Self { host_dir }
    }

    /// The on-disk location of a `File Name` value.
    pub fn resolve(host_dir: &Path, value: &str) -> PathBuf {
        let relative = value.strip_prefix(MASTERS_PREFIX).unwrap_or(value);
        host_dir.join(relative.trim_start_matches('/'))
    }
}

impl Validator for FilePathCheck {
    fn validate(&self, profile: &str, location: Location, grid: &Grid) -> Violations {
        let value = match data_cell(grid, location, profile, &[FILE_NAME]) {
            Ok(Some(value)) if !value.trim().is_empty() => value,
            Ok(_) => return Violations::new(),
            Err(err) => return err.into(),
        };

        let Some(host_dir) = self.host_dir.as_deref() else {
            return GridError::new(messages::NO_HOST_DIR, location, profile).into();
        };

        let path = Self::resolve(host_dir, value);
        match path.try_exists() {
            Ok(true) => Violations::new(),
            Ok(false) => GridError::new(messages::file_not_found(&path), location, profile).into(),
            Err(err) => GridError::new(messages::file_not_found(&path), location, profile)
                .with_cause(err)
                .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::{at, grid, messages};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_strips_masters_prefix() {
        let root = Path::new("/mnt/masters");
        assert_eq!(
            FilePathCheck::resolve(root, "Masters/dlmasters/a.tif"),
            Path::new("/mnt/masters/dlmasters/a.tif")
        );
        assert_eq!(
            FilePathCheck::resolve(root, "/abs/b.tif"),
            Path::new("/mnt/masters/abs/b.tif")
        );
    }

    #[test]
    fn test_existing_and_missing_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("present.tif"), b"tiff").unwrap();

        let grid = grid(&[&["File Name"], &["Masters/present.tif"], &["Masters/absent.tif"]]);
        let check = FilePathCheck::new(Some(dir.path().to_path_buf()));

        assert!(check.validate("p", at(1, 0), &grid).is_empty());
        let violations = check.validate("p", at(2, 0), &grid);
        assert!(messages(&violations)[0].starts_with("the file path given does not exist: "));
        assert!(messages(&violations)[0].ends_with("absent.tif"));
    }

    #[test]
    fn test_missing_host_dir_is_reported() {
        let grid = grid(&[&["File Name", "Title"], &["a.tif", "x"]]);
        let check = FilePathCheck::new(None);

        assert_eq!(messages(&check.validate("p", at(1, 0), &grid)), vec![messages::NO_HOST_DIR]);
        assert!(check.validate("p", at(1, 1), &grid).is_empty());
        assert!(check.validate("p", at(0, 0), &grid).is_empty());
    }
}
