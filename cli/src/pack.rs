//! Context packer: concatenate manifest-listed files into one bundle.
//!
//! The manifest is JSON of the form `{"include": ["path", ...]}`. Each
//! listed file is appended after a `----- FILE: <path> -----` banner, in
//! manifest order. Relative paths resolve against the pack root.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error("missing manifest: {0}")]
    MissingManifest(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid manifest {path}: {source}")]
    InvalidManifest { path: PathBuf, source: serde_json::Error },
    #[error("missing file listed in manifest: {0}")]
    MissingFile(String),
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
}

/// Manifest/output locations used by the two project layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    /// `.ai/` layout: skips missing files with a warning.
    #[default]
    Ai,
    /// `.spec/` layout: every listed file must exist.
    Spec,
}

impl Preset {
    #[must_use]
    pub fn manifest(self) -> &'static str {
        match self {
            Self::Ai => ".ai/context.manifest.json",
            Self::Spec => ".spec/context.manifest.json",
        }
    }

    #[must_use]
    pub fn output(self) -> &'static str {
        match self {
            Self::Ai => ".ai/out/context.bundle.txt",
            Self::Spec => ".spec/.out/context.bundle.txt",
        }
    }

    #[must_use]
    pub fn strict(self) -> bool {
        matches!(self, Self::Spec)
    }
}

#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub include: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PackOptions {
    pub root: PathBuf,
    pub manifest: PathBuf,
    pub output: PathBuf,
    /// Fail on missing files instead of skipping them.
    pub strict: bool,
}

impl PackOptions {
    /// Options for `preset` rooted at `root`.
    #[must_use]
    pub fn from_preset(preset: Preset, root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            manifest: PathBuf::from(preset.manifest()),
            output: PathBuf::from(preset.output()),
            strict: preset.strict(),
        }
    }
}

/// Outcome of a successful pack.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PackReport {
    pub output: PathBuf,
    pub included: Vec<String>,
    pub skipped: Vec<String>,
}

/// Banner written before each file's contents.
#[must_use]
pub fn file_banner(path: &str) -> String {
    format!("\n\n----- FILE: {path} -----\n\n")
}

/// Read and parse the manifest at `path`.
///
/// # Errors
///
/// Returns [`PackError::MissingManifest`] if the file does not exist, or a
/// read/parse error otherwise.
pub fn load_manifest(path: &Path) -> Result<Manifest, PackError> {
    if !path.exists() {
        return Err(PackError::MissingManifest(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path).map_err(|source| PackError::Read { path: path.to_path_buf(), source })?;
    serde_json::from_str(&raw).map_err(|source| PackError::InvalidManifest { path: path.to_path_buf(), source })
}

/// Concatenate the manifest's files. Returns the bundle text and report
/// (with `output` left empty). `on_skip` is called for each missing file as
/// it is passed over, before any later error.
///
/// # Errors
///
/// In strict mode a missing file is [`PackError::MissingFile`]. Unreadable
/// files are always an error.
pub fn build_bundle(
    manifest: &Manifest,
    root: &Path,
    strict: bool,
    mut on_skip: impl FnMut(&str),
) -> Result<(String, PackReport), PackError> {
    let mut bundle = String::new();
    let mut report = PackReport::default();

    for entry in &manifest.include {
        let path = root.join(entry);
        if !path.exists() {
            if strict {
                return Err(PackError::MissingFile(entry.clone()));
            }
            on_skip(entry);
            report.skipped.push(entry.clone());
            continue;
        }
        let contents = std::fs::read_to_string(&path).map_err(|source| PackError::Read { path, source })?;
        bundle.push_str(&file_banner(entry));
        bundle.push_str(&contents);
        report.included.push(entry.clone());
    }

    Ok((bundle, report))
}

/// Load the manifest, build the bundle, and write it out. See
/// [`build_bundle`] for `on_skip`.
///
/// # Errors
///
/// Propagates manifest, read, and write failures as [`PackError`].
pub fn run(options: &PackOptions, on_skip: impl FnMut(&str)) -> Result<PackReport, PackError> {
    let manifest = load_manifest(&options.root.join(&options.manifest))?;
    let (bundle, mut report) = build_bundle(&manifest, &options.root, options.strict, on_skip)?;

    let output = options.root.join(&options.output);
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent).map_err(|source| PackError::Write { path: parent.to_path_buf(), source })?;
    }
    std::fs::write(&output, bundle).map_err(|source| PackError::Write { path: output.clone(), source })?;

    report.output = options.output.clone();
    Ok(report)
}

#[cfg(test)]
#[path = "pack_test.rs"]
mod tests;
