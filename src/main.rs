use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use manifest::Manifest;
use report::Report;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::{page::check_pages, site::count_html_pages};

mod manifest;
mod page;
mod report;
mod site;

#[derive(Parser, Debug)]
#[command(name = "site-check")]
#[command(author, version, about = "Check that a built documentation site has its key pages", long_about = None)]
struct Args {
    /// Directory the expected pages and site root are resolved against
    #[arg(default_value = ".")]
    path: PathBuf,
    /// TOML file listing `pages` and an optional `site_dir`
    #[arg(short, long)]
    manifest: Option<PathBuf>,
    /// Site root scanned for HTML pages
    #[arg(short, long)]
    site_dir: Option<PathBuf>,
    /// Exit with a failure status when a page is missing
    #[arg(long)]
    strict: bool,
}

struct Context {
    home: PathBuf,
    manifest: Manifest,
}

impl Context {
    fn new(
        home: PathBuf,
        manifest: Option<PathBuf>,
        site_dir: Option<PathBuf>,
    ) -> anyhow::Result<Self> {
        if !home.is_dir() {
            anyhow::bail!("{} is not a directory", home.display());
        }

        let mut manifest = match manifest {
            Some(path) => Manifest::load(&path)?,
            None => Manifest::default(),
        };

        if let Some(site_dir) = site_dir {
            manifest.site_dir = site_dir;
        }

        Ok(Self { home, manifest })
    }

    fn absolute<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.home.join(path.as_ref())
    }

    fn run(&self) -> anyhow::Result<Report> {
        let checks = check_pages(&self.home, self.manifest.pages.as_slice())?;
        let html_pages = count_html_pages(&self.absolute(&self.manifest.site_dir));

        Ok(Report::new(checks, html_pages))
    }
}

fn init_tracing() -> anyhow::Result<()> {
    // stdout carries the report; logs go to stderr.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing()?;

    let args = Args::parse();

    debug!(?args, "running");

    let context = Context::new(args.path, args.manifest, args.site_dir)?;

    debug!(
        home = %context.home.display(),
        site_dir = %context.manifest.site_dir.display(),
        pages = context.manifest.pages.len(),
        "resolved context"
    );

    let report = context.run()?;

    print!("{report}");

    if args.strict && !report.all_exist() {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn touch(root: &Path, path: &str) {
        let path = root.join(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn args_default_to_current_directory() {
        let args = Args::try_parse_from(["site-check"]).unwrap();

        assert_eq!(args.path, PathBuf::from("."));
        assert!(args.manifest.is_none());
        assert!(args.site_dir.is_none());
        assert!(!args.strict);
    }

    #[test]
    fn site_dir_flag_overrides_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("pages.toml");
        fs::write(&manifest, "site_dir = \"public\"\npages = [\"public/index.html\"]\n").unwrap();

        let context = Context::new(
            dir.path().to_path_buf(),
            Some(manifest),
            Some(PathBuf::from("out")),
        )
        .unwrap();

        assert_eq!(context.manifest.site_dir, PathBuf::from("out"));
        assert_eq!(context.manifest.pages, vec!["public/index.html".to_string()]);
    }

    #[test]
    fn home_must_be_a_directory() {
        let dir = tempfile::tempdir().unwrap();

        assert!(Context::new(dir.path().join("missing"), None, None).is_err());
    }

    #[test]
    fn run_combines_checks_and_count() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "site/index.html");
        touch(dir.path(), "site/plugins/index.html");
        touch(dir.path(), "site/extra/page.html");

        let context = Context::new(dir.path().to_path_buf(), None, None).unwrap();
        let report = context.run().unwrap();

        assert_eq!(report.checks.len(), 7);
        assert_eq!(report.checks.iter().filter(|c| c.exists).count(), 2);
        assert!(!report.all_exist());
        assert_eq!(report.html_pages, 3);
    }
}
