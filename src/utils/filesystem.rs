//! Reading local files into commit payloads
//!
//! A `--file` argument names a file, a directory (walked recursively) or a
//! glob pattern, optionally followed by `:REMOTE` to commit it under another
//! repository path. A local path containing `:` is taken literally when it
//! exists; an existing file is never expanded as a glob.

use crate::github::CommitFile;
use anyhow::{Context, Result, anyhow, bail};
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;
use walkdir::WalkDir;

const GLOB_CHARS: &[char] = &['*', '?', '['];

/// One `--file` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub local: String,
    pub remote: Option<String>,
}

impl FromStr for FileSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if Path::new(s).exists() {
            return Ok(Self {
                local: s.to_string(),
                remote: None,
            });
        }

        // Split at the colon whose prefix names an existing path, else the first one
        let colons: Vec<usize> = s.match_indices(':').map(|(i, _)| i).collect();
        let existing: Vec<usize> = colons
            .iter()
            .copied()
            .filter(|&i| Path::new(&s[..i]).exists())
            .collect();
        let split = match existing.as_slice() {
            [] => colons.first().copied(),
            [i] => Some(*i),
            _ => bail!(
                "File argument '{}' is ambiguous: more than one prefix before ':' is an existing path",
                s
            ),
        };
        let (local, remote) = match split {
            Some(i) => (&s[..i], Some(&s[i + 1..])),
            None => (s, None),
        };

        if local.trim().is_empty() {
            bail!("File argument '{}' has an empty local path", s);
        }
        if let Some(remote) = remote
            && remote.trim().is_empty()
        {
            bail!("File argument '{}' has an empty repository path", s);
        }

        Ok(Self {
            local: local.to_string(),
            remote: remote.map(str::to_string),
        })
    }
}

/// Convert a relative path into a `/`-separated repository path
///
/// Rejects absolute paths and `..` components; `.` components are dropped.
pub fn to_repository_path(path: &Path) -> Result<String> {
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(
                part.to_str()
                    .ok_or_else(|| anyhow!("Path '{}' is not valid UTF-8", path.display()))?
                    .to_string(),
            ),
            Component::CurDir => {}
            Component::ParentDir => {
                bail!("Repository path '{}' must not contain '..'", path.display())
            }
            Component::RootDir | Component::Prefix(_) => {
                bail!("Repository path '{}' must be relative", path.display())
            }
        }
    }

    if parts.is_empty() {
        bail!("Repository path '{}' is empty", path.display());
    }
    Ok(parts.join("/"))
}

/// Read every file named by `specs`, in argument order
pub fn collect_files(specs: &[FileSpec]) -> Result<Vec<CommitFile>> {
    let mut files = Vec::new();
    for spec in specs {
        for (local, remote) in expand(spec)? {
            files.push(CommitFile::new(remote, read_utf8(&local)?));
        }
    }
    Ok(files)
}

/// Local file paths and the repository path each is committed at
fn expand(spec: &FileSpec) -> Result<Vec<(PathBuf, String)>> {
    let local = Path::new(&spec.local);

    if !local.exists() && spec.local.contains(GLOB_CHARS) {
        let base = glob_base(&spec.local);
        let mut matches = Vec::new();
        for entry in glob::glob(&spec.local)
            .with_context(|| format!("Invalid glob pattern '{}'", spec.local))?
        {
            let path = entry?;
            if path.is_file() {
                let remote = remote_path(&path, &base, spec.remote.as_deref())?;
                matches.push((path, remote));
            }
        }
        if matches.is_empty() {
            bail!("Pattern '{}' matched no files", spec.local);
        }
        return Ok(matches);
    }

    if local.is_dir() {
        let mut files = Vec::new();
        for entry in WalkDir::new(local)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.file_name() != ".git")
        {
            let entry = entry?;
            if entry.file_type().is_file() {
                let path = entry.into_path();
                let remote = remote_path(&path, local, spec.remote.as_deref())?;
                files.push((path, remote));
            }
        }
        if files.is_empty() {
            bail!("Directory '{}' contains no files", spec.local);
        }
        return Ok(files);
    }

    let remote = match &spec.remote {
        Some(remote) => to_repository_path(Path::new(remote))?,
        None => to_repository_path(local)?,
    };
    Ok(vec![(local.to_path_buf(), remote)])
}

/// Repository path for `path` found under `base`; `remote` replaces `base`
fn remote_path(path: &Path, base: &Path, remote: Option<&str>) -> Result<String> {
    match remote {
        Some(remote) => {
            let relative = path.strip_prefix(base).unwrap_or(path);
            to_repository_path(&Path::new(remote).join(relative))
        }
        None => to_repository_path(path),
    }
}

/// Leading directories of a glob pattern that contain no wildcards
fn glob_base(pattern: &str) -> PathBuf {
    let mut base = PathBuf::new();
    let mut components = Path::new(pattern).components().peekable();
    while let Some(component) = components.next() {
        let text = component.as_os_str().to_string_lossy();
        // The last component names files, never the base
        if text.contains(GLOB_CHARS) || components.peek().is_none() {
            break;
        }
        base.push(component);
    }
    base
}

fn read_utf8(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    String::from_utf8(bytes).map_err(|_| anyhow!("File {} is not valid UTF-8", path.display()))
}
