use anyhow::{anyhow, Result};
use clap::Parser;
use tileguide::cli::{CheckArgs, Command, RenderArgs, RootArgs};
use tileguide::content::{builtin_guide, load_guide, Guide};
use tileguide::output::{build_meta, write_document, write_meta};
use tileguide::render::render_guide;
use tileguide::validate::{check_assets, validate_guide, CheckReport};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = RootArgs::parse();
    match args.command {
        Command::Render(args) => cmd_render(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let guide = resolve_guide(args.content.as_deref())?;
    if let Some(errors) = validate_guide(&guide) {
        return Err(anyhow!("guide content is invalid:\n  {}", errors.join("\n  ")));
    }

    let rendered = render_guide(&guide);
    match &args.out {
        Some(out) => write_document(out, &rendered.html)?,
        None => print!("{}", rendered.html),
    }
    if let Some(meta_path) = &args.meta {
        let meta = build_meta(rendered.summary, rendered.html.len());
        write_meta(meta_path, &meta)?;
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> Result<()> {
    let guide = resolve_guide(args.content.as_deref())?;
    let errors = validate_guide(&guide).unwrap_or_default();
    let warnings = match &args.assets {
        Some(assets) => check_assets(&guide, assets),
        None => Vec::new(),
    };

    let report = CheckReport {
        schema_version: 1,
        content_source: content_source(args.content.as_deref()),
        errors,
        warnings,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_check_report(&report);
    }

    if report.errors.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("guide failed {} check(s)", report.errors.len()))
    }
}

fn resolve_guide(content: Option<&std::path::Path>) -> Result<Guide> {
    match content {
        Some(path) => load_guide(path),
        None => builtin_guide(),
    }
}

fn content_source(content: Option<&std::path::Path>) -> String {
    match content {
        Some(path) => path.display().to_string(),
        None => "<built-in>".to_string(),
    }
}

fn print_check_report(report: &CheckReport) {
    println!("content: {}", report.content_source);
    if report.errors.is_empty() {
        println!("invariants: ok");
    } else {
        println!("invariants: {} error(s)", report.errors.len());
        for error in &report.errors {
            println!("  error: {error}");
        }
    }
    for warning in &report.warnings {
        println!("  warning: {warning}");
    }
}
