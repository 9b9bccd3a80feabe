//! Bundled resources and their mapping into the output directory.
//!
//! Resources are looked up by name in a [`ResourceStore`] and stream-copied to
//! a path derived from an [`InputOutputPair`]. Every path component of the
//! pair is checked before anything touches the file system.

use std::{
    borrow::Cow,
    collections::BTreeMap,
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use pagecraft_core::{InputOutputPair, validate::normalize_relative};
use thiserror::Error;
use tracing::debug;

/// Resource mapping errors.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A path component is absolute or escapes the output directory.
    #[error("unsafe path in `{field}`: {path:?}")]
    PathSecurity { field: &'static str, path: String },

    /// The store has no resource with this name.
    #[error("resource not found: {name}")]
    NotFound { name: String },

    /// IO error while copying.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for resource operations.
pub type Result<T> = std::result::Result<T, ResourceError>;

/// Read-only lookup of bundled resources by name.
pub trait ResourceStore {
    /// Open the named resource, or `None` if it does not exist.
    fn open(&self, name: &str) -> Option<Box<dyn Read + '_>>;
}

/// Resources stored as files under a directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Serve resources from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory resources are served from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceStore for DirectoryStore {
    fn open(&self, name: &str) -> Option<Box<dyn Read + '_>> {
        let relative = normalize_relative(name)?;
        let file = fs::File::open(self.root.join(relative)).ok()?;
        if file.metadata().ok()?.is_dir() {
            return None;
        }
        Some(Box::new(file))
    }
}

/// Resources held in memory, typically from `include_bytes!`.
///
/// ```
/// use pagecraft_generator::resources::{EmbeddedStore, ResourceStore};
///
/// let store = EmbeddedStore::new().with("robots-extra.txt", &b"# extra"[..]);
/// assert!(store.open("robots-extra.txt").is_some());
/// assert!(store.open("missing.txt").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmbeddedStore {
    entries: BTreeMap<String, Cow<'static, [u8]>>,
}

impl EmbeddedStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource.
    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Cow<'static, [u8]>>) {
        self.entries.insert(name.into(), bytes.into());
    }

    /// Add a resource, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        self.insert(name, bytes);
        self
    }

    /// Number of resources held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceStore for EmbeddedStore {
    fn open(&self, name: &str) -> Option<Box<dyn Read + '_>> {
        self.entries
            .get(name)
            .map(|bytes| Box::new(&bytes[..]) as Box<dyn Read + '_>)
    }
}

fn checked(field: &'static str, path: &str) -> Result<PathBuf> {
    normalize_relative(path).ok_or_else(|| ResourceError::PathSecurity {
        field,
        path: path.to_string(),
    })
}

/// Resolve where `pair` is written under `output_root`.
///
/// Fails with [`ResourceError::PathSecurity`] if any component is absolute
/// or climbs out of its starting directory.
pub fn resolve_target(pair: &InputOutputPair, output_root: &Path) -> Result<PathBuf> {
    let input = checked("input_filename", &pair.input_filename)?;
    let dir = checked("output_path", &pair.output_path)?;
    let name = match &pair.output_filename {
        Some(filename) => checked("output_filename", filename)?,
        None => input,
    };

    if name.as_os_str().is_empty() {
        let field = if pair.output_filename.is_some() {
            "output_filename"
        } else {
            "input_filename"
        };
        return Err(ResourceError::PathSecurity {
            field,
            path: pair.target_filename().to_string(),
        });
    }

    Ok(output_root.join(dir).join(name))
}

/// Copy one resource from `store` into `output_root`.
///
/// Returns the path written. Nothing is written when a path is unsafe or the
/// resource is missing.
pub fn copy_resource(
    pair: &InputOutputPair,
    store: &dyn ResourceStore,
    output_root: &Path,
) -> Result<PathBuf> {
    let target = resolve_target(pair, output_root)?;

    let mut reader = store
        .open(&pair.input_filename)
        .ok_or_else(|| ResourceError::NotFound {
            name: pair.input_filename.clone(),
        })?;

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|source| ResourceError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let io_err = |source| ResourceError::Io {
        path: target.clone(),
        source,
    };
    let mut file = fs::File::create(&target).map_err(io_err)?;
    let bytes = io::copy(&mut reader, &mut file).map_err(io_err)?;

    debug!(
        resource = %pair.input_filename,
        dest = %target.display(),
        bytes,
        "copied resource"
    );

    Ok(target)
}
