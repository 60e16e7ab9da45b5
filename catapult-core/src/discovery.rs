//! File discovery: turn user-supplied paths into a flat list of files.
//!
//! Each input is resolved to an absolute, symlink-free path. Inputs with a
//! dot-prefixed component anywhere in that path (`.git`, `~/.cache/...`) are
//! dropped before anything is read. Files are kept as they are; directories are
//! expanded one level deep, or fully when recursing. Hidden entries found
//! during expansion are dropped as well, and hidden subdirectories are never
//! entered.
//!
//! Discovery does not fail. Inputs that do not exist are ignored, and entries
//! that cannot be inspected (permission denied, walk errors) are skipped and
//! reported in [`Discovery::skipped`] so the caller can log them.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// An entry that discovery could not inspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a discovery run.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Absolute paths of the files found, in discovery order.
    pub files: Vec<PathBuf>,
    /// Entries skipped because they could not be read.
    pub skipped: Vec<SkippedEntry>,
}

impl Discovery {
    fn skip(&mut self, path: &Path, reason: impl ToString) {
        self.skipped.push(SkippedEntry {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        });
    }
}

/// Discovery options.
///
/// Directory contents are sorted by file name unless `sort` is turned off,
/// in which case filesystem enumeration order is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileDiscovery {
    pub recurse: bool,
    pub sort: bool,
}

impl Default for FileDiscovery {
    fn default() -> Self {
        Self {
            recurse: false,
            sort: true,
        }
    }
}

impl FileDiscovery {
    pub fn new(recurse: bool) -> Self {
        Self {
            recurse,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn sorted(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Runs discovery over `paths`.
    ///
    /// Files given directly come first, in input order, followed by the
    /// contents of each directory input, also in input order. Repeated inputs
    /// are listed again.
    ///
    /// # Arguments
    ///
    /// * `paths` - Files and directories, absolute or relative to the working directory
    ///
    /// # Returns
    ///
    /// * `Discovery::files` - Absolute, symlink-resolved paths with no dot-prefixed component
    /// * `Discovery::skipped` - Entries that could not be resolved or read
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use catapult_core::FileDiscovery;
    ///
    /// let found = FileDiscovery::new(true).discover(["src", "README.md"]);
    /// for file in &found.files {
    ///     println!("{}", file.display());
    /// }
    /// for skipped in &found.skipped {
    ///     eprintln!("skipped {}: {}", skipped.path.display(), skipped.reason);
    /// }
    /// ```
    pub fn discover<I, P>(&self, paths: I) -> Discovery
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut found = Discovery::default();

        let mut resolved = Vec::new();
        for input in paths {
            let input = input.as_ref();
            match fs::canonicalize(input) {
                Ok(path) if !has_dot_component(&path) => resolved.push(path),
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => found.skip(input, e),
            }
        }

        let (files, dirs): (Vec<PathBuf>, Vec<PathBuf>) =
            resolved.into_iter().partition(|path| path.is_file());
        found.files.extend(files);

        for dir in dirs.iter().filter(|path| path.is_dir()) {
            if self.recurse {
                self.walk(dir, &mut found);
            } else {
                self.list(dir, &mut found);
            }
        }

        found.files.retain(|path| !has_dot_component(path));
        found
    }

    /// Collects the files directly inside `dir`.
    fn list(&self, dir: &Path, found: &mut Discovery) {
        let read_dir = match fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                found.skip(dir, e);
                return;
            }
        };

        let mut files = Vec::new();
        for entry in read_dir {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() {
                        files.push(path);
                    }
                }
                Err(e) => found.skip(dir, e),
            }
        }

        if self.sort {
            files.sort();
        }
        found.files.extend(files);
    }

    /// Collects every file below `dir`, pruning hidden subdirectories.
    fn walk(&self, dir: &Path, found: &mut Discovery) {
        let mut walker = WalkDir::new(dir);
        if self.sort {
            walker = walker.sort_by_file_name();
        }

        for entry in walker.into_iter().filter_entry(|e| !is_hidden(e)) {
            match entry {
                Ok(entry) => {
                    if entry.path().is_file() {
                        found.files.push(entry.into_path());
                    }
                }
                Err(e) => {
                    let path = e.path().unwrap_or(dir).to_path_buf();
                    found.skip(&path, e);
                }
            }
        }
    }
}

/// Returns the absolute paths of all files implied by `paths`.
///
/// Shorthand for [`FileDiscovery::discover`] with sorted directory listings,
/// discarding the skipped entries.
///
/// # Arguments
///
/// * `paths` - Files and directories to expand
/// * `recurse` - Whether to descend into subdirectories
pub fn collect_files<I, P>(paths: I, recurse: bool) -> Vec<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    FileDiscovery::new(recurse).discover(paths).files
}

/// Whether any component of `path` starts with a dot.
#[must_use]
pub fn has_dot_component(path: &Path) -> bool {
    path.components().any(|component| match component {
        Component::Normal(name) => name.as_encoded_bytes().starts_with(b"."),
        _ => false,
    })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().as_encoded_bytes().starts_with(b".")
}
