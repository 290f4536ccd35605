//! Asset path resolution for speaker imagery.
//!
//! Speaker images come from either an external CDN (absolute URL, used as
//! is) or the site's bundled-asset directory (relative path, resolved
//! against a base). The resolver is deliberately a black box to the mapper:
//! any total `path -> url` function qualifies.

/// Maps a relative asset path to a fully-qualified URL.
///
/// Must be total: every non-absolute path yields some URL string.
pub trait AssetResolver {
    /// Resolve `path` to a fully-qualified URL.
    fn resolve(&self, path: &str) -> String;
}

impl<F> AssetResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, path: &str) -> String {
        self(path)
    }
}

/// Resolver that prefixes a fixed base (site base path or CDN root).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetBase {
    base: String,
}

impl AssetBase {
    /// Create a resolver rooted at `base`. Trailing slashes are trimmed so
    /// joining never doubles a separator; an empty base resolves to
    /// root-relative paths.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base: String = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }
}

impl AssetResolver for AssetBase {
    fn resolve(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }
}

/// True when `image` already carries an explicit HTTP(S) scheme and needs no
/// resolution.
pub fn is_absolute_url(image: &str) -> bool {
    image.starts_with("http://") || image.starts_with("https://")
}
