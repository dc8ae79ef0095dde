use std::fmt;

/// Hard ceiling on the combined root + target byte length.
pub const MAX_PATH_BYTES: usize = 512;

/// A traversal-checked filesystem path under the served root.
///
/// Construction goes through [`resolve`]; holding one means the target began
/// with "/", contained no parent segment or doubled separator, and the
/// combined path fits within [`MAX_PATH_BYTES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath(String);

impl ResolvedPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a request target was refused. Every variant answers 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reject {
    MissingLeadingSlash,
    ParentSegment,
    DoubleSeparator,
    TooLong,
}

/// Maps a request target onto the served root.
///
/// The guard is deliberately coarse: any `..` or `//` anywhere in the target
/// is refused outright, with no normalization or symlink resolution, and a
/// combined path reaching [`MAX_PATH_BYTES`] is refused rather than
/// truncated. Performs no I/O.
pub fn resolve(root: &str, target: &str) -> Result<ResolvedPath, Reject> {
    if !target.starts_with('/') {
        return Err(Reject::MissingLeadingSlash);
    }
    if target.contains("..") {
        return Err(Reject::ParentSegment);
    }
    if target.contains("//") {
        return Err(Reject::DoubleSeparator);
    }
    if root.len() + target.len() >= MAX_PATH_BYTES {
        return Err(Reject::TooLong);
    }

    Ok(ResolvedPath(format!("{}{}", root, target)))
}
