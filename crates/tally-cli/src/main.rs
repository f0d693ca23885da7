//! Tally CLI - check and render page manifests.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tally_core::{escape_html, Document, MountError};
use tally_widgets::{PageView, WidgetError};
use tally_yaml::{Page, ParseError};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Check and render Tally widget pages")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a page manifest
    Check {
        /// Path to the page YAML
        manifest: PathBuf,
    },

    /// Mount a page headlessly and print its HTML
    Render {
        /// Path to the page YAML
        manifest: PathBuf,

        /// Click counter ID N times before rendering (repeatable, ID=N)
        #[arg(short, long = "click", value_parser = parse_click)]
        clicks: Vec<(String, usize)>,

        /// Wrap the output in a complete HTML document
        #[arg(long)]
        standalone: bool,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Widget(#[from] WidgetError),

    #[error(transparent)]
    Mount(#[from] MountError),

    #[error("no counter with id '{0}'")]
    UnknownCounter(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Upper bound for one `--click ID=N`.
const MAX_CLICKS: usize = 10_000;

fn parse_click(arg: &str) -> Result<(String, usize), String> {
    let (id, times) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected ID=N, got '{arg}'"))?;
    if id.is_empty() {
        return Err(format!("missing widget id in '{arg}'"));
    }
    let times: usize = times
        .parse()
        .map_err(|_| format!("invalid click count '{times}'"))?;
    if times > MAX_CLICKS {
        return Err(format!("click count {times} exceeds {MAX_CLICKS}"));
    }
    Ok((id.to_string(), times))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Error initializing tracing: {e}");
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { manifest } => check_manifest(&manifest),
        Commands::Render {
            manifest,
            clicks,
            standalone,
            output,
        } => render(&manifest, &clicks, standalone, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn check_manifest(path: &Path) -> Result<(), CliError> {
    println!("Checking page: {}", path.display());
    let page = Page::from_file(path)?;

    // Mounting headlessly catches unknown widget types and bad props.
    let mut doc = Document::new();
    let root = doc.root();
    let view = PageView::mount(&page, &mut doc, &root)?;

    println!("Page valid!");
    println!("  Name: {}", page.name);
    if let Some(title) = &page.title {
        println!("  Title: {title}");
    }
    println!("  Widgets: {}", view.len());
    Ok(())
}

fn render(
    path: &Path,
    clicks: &[(String, usize)],
    standalone: bool,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let page = Page::from_file(path)?;
    let html = render_page(&page, clicks, standalone)?;

    match output {
        Some(out) => {
            fs::write(out, &html).map_err(|source| CliError::Write {
                path: out.to_path_buf(),
                source,
            })?;
            info!(path = %out.display(), bytes = html.len(), "page written");
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn render_page(
    page: &Page,
    clicks: &[(String, usize)],
    standalone: bool,
) -> Result<String, CliError> {
    let mut doc = Document::new();
    let root = doc.root();
    let mut view = PageView::mount(page, &mut doc, &root)?;

    for (id, times) in clicks {
        let value = view
            .click_counter(id, *times, &mut doc)?
            .ok_or_else(|| CliError::UnknownCounter(id.clone()))?;
        info!(id = %id, clicks = times, value, "clicked");
    }

    let body = doc.to_html(root)?;
    if !standalone {
        return Ok(body);
    }

    let title = escape_html(page.title.as_deref().unwrap_or(&page.name));

    Ok(format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>{body}</body>\n</html>"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r"
name: demo
title: Demo & co
widgets:
  - id: main
    type: counter
    props: {start: 5, step: 10}
";

    fn page() -> Page {
        Page::from_yaml(PAGE).unwrap()
    }

    #[test]
    fn test_parse_click() {
        assert_eq!(parse_click("main=3").unwrap(), ("main".to_string(), 3));
        assert!(parse_click("main").is_err());
        assert!(parse_click("=3").is_err());
        assert!(parse_click("main=-1").is_err());
    }

    #[test]
    fn test_parse_click_bound() {
        assert_eq!(parse_click("main=10000").unwrap().1, MAX_CLICKS);
        let err = parse_click("main=10001").unwrap_err();
        assert!(err.contains("exceeds"));
        assert!(parse_click("main=18446744073709551615").is_err());
    }

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "tally", "render", "page.yaml", "--click", "main=2", "-c", "other=1", "--standalone",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                manifest,
                clicks,
                standalone,
                output,
            } => {
                assert_eq!(manifest, PathBuf::from("page.yaml"));
                assert_eq!(
                    clicks,
                    vec![("main".to_string(), 2), ("other".to_string(), 1)]
                );
                assert!(standalone);
                assert!(output.is_none());
            }
            Commands::Check { .. } => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_click() {
        assert!(Cli::try_parse_from(["tally", "render", "p.yaml", "--click", "x"]).is_err());
    }

    #[test]
    fn test_render_page_without_clicks() {
        let html = render_page(&page(), &[], false).unwrap();
        assert_eq!(
            html,
            "<div><div id=\"main\" style=\"display: contents;\">\
             <button>Click me</button><span>5</span></div></div>"
        );
    }

    #[test]
    fn test_render_page_with_clicks_ignores_step() {
        let html = render_page(&page(), &[("main".to_string(), 2)], false).unwrap();
        assert!(html.contains("<span>7</span>"));
    }

    #[test]
    fn test_render_page_unknown_counter() {
        let err = render_page(&page(), &[("nope".to_string(), 1)], false).unwrap_err();
        assert_eq!(err.to_string(), "no counter with id 'nope'");
    }

    #[test]
    fn test_render_page_standalone_escapes_title() {
        let html = render_page(&page(), &[], true).unwrap();
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Demo &amp; co</title>"));
        assert!(html.contains("<body><div><div id=\"main\" style=\"display: contents;\">"));
    }

    fn demo_page() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/hello-world/page.yaml")
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tally-cli-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_check_manifest_demo_page() {
        check_manifest(&demo_page()).unwrap();
    }

    #[test]
    fn test_check_manifest_unknown_type() {
        let path = temp_path("unknown-type.yaml");
        fs::write(&path, "name: p\nwidgets:\n  - {id: a, type: clock}\n").unwrap();
        let result = check_manifest(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(
            result,
            Err(CliError::Widget(WidgetError::UnknownKind(kind))) if kind == "clock"
        ));
    }

    #[test]
    fn test_check_manifest_missing_file() {
        let result = check_manifest(&temp_path("missing.yaml"));
        assert!(matches!(result, Err(CliError::Parse(ParseError::Io(_)))));
    }

    #[test]
    fn test_render_writes_output_file() {
        let out = temp_path("hello.html");
        render(&demo_page(), &[("main".to_string(), 2)], false, Some(out.as_path())).unwrap();
        let html = fs::read_to_string(&out).unwrap();
        fs::remove_file(&out).unwrap();
        assert!(html.contains("<div id=\"main\" style=\"display: contents;\">"));
        assert!(html.contains("<span>7</span>"));
    }

    #[test]
    fn test_render_output_write_failure() {
        let out = temp_path("no-such-dir").join("page.html");
        let err = render(&demo_page(), &[], false, Some(out.as_path())).unwrap_err();
        match err {
            CliError::Write { path, .. } => assert_eq!(path, out),
            other => panic!("Expected Write error, got {other}"),
        }
    }
}
