use std::path::Path;

use anyhow::Context as _;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCheck {
    pub path: String,
    pub exists: bool,
}

/// Tests every expected page against `home`, in order. A missing page is
/// `exists: false`; only unexpected I/O errors fail the call.
pub fn check_pages<S: AsRef<str>>(home: &Path, pages: &[S]) -> anyhow::Result<Vec<PageCheck>> {
    pages
        .iter()
        .map(|page| {
            let page = page.as_ref();
            let exists = home
                .join(page)
                .try_exists()
                .with_context(|| format!("failed to check {page}"))?;

            debug!(page, exists, "checked expected page");

            Ok(PageCheck {
                path: page.to_string(),
                exists,
            })
        })
        .collect()
}

pub fn all_exist(checks: &[PageCheck]) -> bool {
    checks.iter().all(|c| c.exists)
}
