use anyhow::Result;
use log::warn;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Directory names never descended into.
const SKIPPED_DIRS: [&str; 3] = ["vendor", "node_modules", "storage"];

/// File scanner for traversing application source directories.
///
/// The `FileScanner` recursively walks a directory and collects every file with the
/// requested extension. Hidden directories (those starting with `.`) and dependency or
/// runtime directories (`vendor`, `node_modules`, `storage`) are skipped.
///
/// # Example
///
/// ```no_run
/// use swagger_from_routes::scanner::FileScanner;
/// use std::path::PathBuf;
///
/// let scanner = FileScanner::new(PathBuf::from("./app"), "php");
/// let result = scanner.scan().unwrap();
/// println!("Found {} PHP files", result.files.len());
/// ```
pub struct FileScanner {
    root_path: PathBuf,
    extension: String,
}

/// Result of directory scanning operation.
pub struct ScanResult {
    /// Every discovered file, in walk order
    pub files: Vec<PathBuf>,
    /// Warning messages for entries that could not be accessed
    pub warnings: Vec<String>,
}

impl FileScanner {
    /// Creates a scanner for files ending in `.{extension}` below `root_path`.
    pub fn new(root_path: PathBuf, extension: &str) -> Self {
        Self {
            root_path,
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Scans the directory tree.
    ///
    /// Inaccessible entries are logged and recorded as warnings; scanning continues.
    /// Entries are sorted by file name so the result is stable across runs.
    pub fn scan(&self) -> Result<ScanResult> {
        let mut files = Vec::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(&self.root_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                if e.path() == self.root_path {
                    return true;
                }
                if !e.file_type().is_dir() {
                    return true;
                }

                let file_name = e.file_name().to_string_lossy();
                !file_name.starts_with('.') && !SKIPPED_DIRS.iter().any(|d| *d == file_name)
            })
        {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file()
                        && path.extension().and_then(|s| s.to_str()) == Some(self.extension.as_str())
                    {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        Ok(ScanResult { files, warnings })
    }
}
