use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "facade", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a facade document to a PNG.
    Render(RenderArgs),
    /// Build a facade document and print its resolved components.
    Check(CheckArgs),
    /// List the registered component tags.
    Tags,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input facade document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Asset root directory (defaults to the document's directory).
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Resampling filter for stretched and fitted rasters.
    #[arg(long, value_enum, default_value_t = FilterChoice::Bilinear)]
    filter: FilterChoice,

    /// Background colour under the scene, as RRGGBB or RRGGBBAA.
    #[arg(long)]
    background: Option<String>,

    /// Reject invalid width/height attributes.
    #[arg(long)]
    strict: bool,

    /// Load assets one at a time.
    #[arg(long)]
    sequential: bool,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input facade document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Reject invalid width/height attributes.
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterChoice {
    Nearest,
    Bilinear,
}

impl From<FilterChoice> for facade::ResampleFilter {
    fn from(value: FilterChoice) -> Self {
        match value {
            FilterChoice::Nearest => Self::Nearest,
            FilterChoice::Bilinear => Self::Bilinear,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Check(args) => cmd_check(args),
        Command::Tags => cmd_tags(),
    }
}

fn read_document(path: &Path) -> anyhow::Result<facade::DocumentDef> {
    facade::DocumentDef::from_path(path)
        .with_context(|| format!("load facade document '{}'", path.display()))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let registry = facade::Registry::builtin()?;

    let background = args
        .background
        .as_deref()
        .map(facade::Rgba8Premul::parse_hex)
        .transpose()
        .context("parse --background")?;
    let opts = facade::RenderOpts {
        filter: args.filter.into(),
        background,
        parallel_loads: !args.sequential,
        strict_attrs: args.strict,
    };

    let assets_root = match args.assets {
        Some(dir) => dir,
        None => args
            .in_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    let loader = facade::AssetLoader::new(facade::FsAssetSource::new(&assets_root))
        .with_parallel(opts.parallel_loads);

    let mut scene = facade::Scene::build(&doc, &registry, opts)?;
    let report = scene.load(&loader);
    for url in &report.failed {
        tracing::info!(url = %url, "asset not loaded");
    }
    let surface = scene.compose();

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    surface
        .to_rgba_image()?
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    tracing::info!(
        out = %args.out.display(),
        size = %surface.dimensions(),
        loaded = report.loaded,
        failed = report.failed.len(),
        "rendered facade"
    );
    println!(
        "{} ({}, {}/{} assets loaded)",
        args.out.display(),
        surface.dimensions(),
        report.loaded,
        report.requested
    );
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let registry = facade::Registry::builtin()?;
    let opts = facade::RenderOpts {
        strict_attrs: args.strict,
        ..facade::RenderOpts::default()
    };
    let scene = facade::Scene::build(&doc, &registry, opts)?;

    print_node(scene.root(), 0, (0, 0));
    Ok(())
}

fn print_node(node: &facade::SceneNode, depth: usize, (x, y): (i64, i64)) {
    let dims = node.component().dimensions();
    println!(
        "{:indent$}{} {dims} at {x},{y}",
        "",
        node.component().kind(),
        indent = depth * 2
    );
    for child in node.children() {
        let offset = child
            .position()
            .resolve(dims, child.component().dimensions());
        print_node(child, depth + 1, offset);
    }
}

fn cmd_tags() -> anyhow::Result<()> {
    let registry = facade::Registry::builtin()?;
    for (tag, kind) in registry.tags() {
        if tag == kind.tag() {
            println!("{tag}");
        } else {
            println!("{tag} (alias of {kind})");
        }
    }
    Ok(())
}
