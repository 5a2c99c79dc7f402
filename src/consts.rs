/// Fence line delimiting the front matter block
pub(crate) const FENCE: &str = "---";

/// Key of the single front matter field
pub(crate) const TITLE_KEY: &str = "title";
