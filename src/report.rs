use std::fmt;

use crate::page::{all_exist, PageCheck};

const PASS: &str = "✓";
const FAIL: &str = "✗";

pub struct Report {
    pub checks: Vec<PageCheck>,
    pub html_pages: usize,
}

impl Report {
    pub fn new(checks: Vec<PageCheck>, html_pages: usize) -> Self {
        Self { checks, html_pages }
    }

    pub fn all_exist(&self) -> bool {
        all_exist(&self.checks)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Checking documentation structure...")?;

        for check in &self.checks {
            let marker = if check.exists { PASS } else { FAIL };
            writeln!(f, "{marker} {}", check.path)?;
        }

        if self.all_exist() {
            writeln!(f, "\n{PASS} All key pages built successfully!")?;
        } else {
            writeln!(f, "\n{FAIL} Some pages are missing")?;
        }

        writeln!(f, "\nTotal HTML pages: {}", self.html_pages)
    }
}
