//! Asset extension matching.

/// Decides which file names are assets and what their base names are.
///
/// Configured extensions are tried in order and the first one that ends the
/// file name wins; no longest-match resolution is done, so a list holding both
/// `sample` and `htmlsample` must be ordered by the caller. The character in
/// front of the matched suffix is the separator and is dropped from the base
/// name whatever it is. Without a list, any non-empty suffix after the last
/// `.` is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionMatcher {
    extensions: Option<Vec<String>>,
}

impl ExtensionMatcher {
    /// Build a matcher. Leading dots are stripped and empty entries dropped,
    /// so `".js"` and `"js"` are the same extension.
    pub fn new(extensions: Option<Vec<String>>) -> Self {
        let extensions = extensions.map(|list| {
            list.into_iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .filter(|ext| !ext.is_empty())
                .collect()
        });
        Self { extensions }
    }

    /// Matcher that accepts every extension.
    pub fn any() -> Self {
        Self { extensions: None }
    }

    pub fn is_any_extension(&self) -> bool {
        self.extensions.is_none()
    }

    /// Configured extensions, without leading dots.
    pub fn extensions(&self) -> Option<&[String]> {
        self.extensions.as_deref()
    }

    /// Whether `ext` (with or without a leading dot) is a configured extension.
    /// Always false in any-extension mode.
    pub fn is_extension(&self, ext: &str) -> bool {
        let ext = ext.trim_start_matches('.');
        self.extensions
            .as_ref()
            .map(|list| list.iter().any(|e| e == ext))
            .unwrap_or(false)
    }

    /// Split a file name into `(base name, matched extension)`.
    ///
    /// Returns `None` when the file is not an asset, including names whose
    /// base name would be empty (`.js`).
    pub fn split<'n>(&self, file_name: &'n str) -> Option<(&'n str, &'n str)> {
        match &self.extensions {
            Some(list) => list.iter().find_map(|ext| split_suffix(file_name, ext)),
            None => {
                let pos = file_name.rfind('.')?;
                let (base, ext) = (&file_name[..pos], &file_name[pos + 1..]);
                if base.is_empty() || ext.is_empty() {
                    None
                } else {
                    Some((base, ext))
                }
            }
        }
    }

    /// Base name of an asset file, if it is one.
    pub fn base_name<'n>(&self, file_name: &'n str) -> Option<&'n str> {
        self.split(file_name).map(|(base, _)| base)
    }
}

fn split_suffix<'n>(file_name: &'n str, ext: &str) -> Option<(&'n str, &'n str)> {
    let rest = file_name.strip_suffix(ext)?;
    let mut chars = rest.chars();
    chars.next_back()?;
    let base = chars.as_str();
    if base.is_empty() {
        return None;
    }
    Some((base, &file_name[rest.len()..]))
}
