use std::{ffi::OsStr, io, path::Path};

use tracing::{debug, warn};
use walkdir::WalkDir;

const HTML_SUFFIX: &str = ".html";

/// Counts every entry below `root` whose name ends in `.html`, at any depth.
///
/// Counting never fails the run: a root that is missing or unreadable holds
/// no pages, and subtrees that cannot be read are skipped.
pub fn count_html_pages(root: &Path) -> usize {
    let mut count = 0;

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                if is_not_found(&err) {
                    warn!(root = %root.display(), "site directory not found");
                } else {
                    warn!(root = %root.display(), error = %err, "site directory unreadable");
                }
                return 0;
            }
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if is_html(entry.file_name()) {
            count += 1;
        }
    }

    debug!(root = %root.display(), count, "counted html pages");

    count
}

fn is_not_found(err: &walkdir::Error) -> bool {
    err.io_error()
        .map(|e| e.kind() == io::ErrorKind::NotFound)
        .unwrap_or(false)
}

// Compared as raw bytes so names that are not valid UTF-8 still match.
fn is_html(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(HTML_SUFFIX.as_bytes())
}
