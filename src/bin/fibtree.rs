use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fibtree", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the animated call tree as SVG.
    Svg(SvgArgs),
    /// Render the call tree at one instant as a PNG.
    Frame(FrameArgs),
    /// Print the call tree as JSON.
    Tree(TreeArgs),
    /// Print node count, leaves, height and animation length.
    Stats(SceneArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Fibonacci argument of the root call.
    #[arg(long, allow_hyphen_values = true)]
    n: Option<i64>,

    /// JSON config file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    layout: Option<LayoutChoice>,

    #[arg(long, value_enum)]
    choreography: Option<ChoreographyChoice>,

    /// Seconds between consecutive node reveals.
    #[arg(long)]
    step: Option<f64>,

    /// Fixed canvas width in pixels.
    #[arg(long, requires = "height", conflicts_with = "container_width")]
    width: Option<u32>,

    /// Fixed canvas height in pixels.
    #[arg(long, requires = "width")]
    height: Option<u32>,

    /// Size the canvas from a container width (height = max(600, 0.75 * width)).
    #[arg(long)]
    container_width: Option<u32>,

    /// Hide the value labels.
    #[arg(long)]
    no_labels: bool,
}

#[derive(Args, Debug)]
struct SvgArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Scene time in seconds.
    #[arg(long)]
    at: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct TreeArgs {
    #[arg(long, allow_hyphen_values = true)]
    n: i64,

    /// Largest accepted `n`.
    #[arg(long, default_value_t = fibtree::DEFAULT_MAX_N)]
    max_n: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutChoice {
    Tidy,
    Cluster,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ChoreographyChoice {
    Still,
    Presence,
    Transition,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Svg(args) => cmd_svg(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Tree(args) => cmd_tree(args),
        Command::Stats(args) => cmd_stats(args),
    }
}

fn load_config(args: &SceneArgs) -> anyhow::Result<fibtree::VizConfig> {
    let mut cfg = match &args.config {
        Some(path) => fibtree::VizConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => fibtree::VizConfig::default(),
    };

    if let Some(n) = args.n {
        cfg.n = n;
    }
    if let Some(layout) = args.layout {
        cfg.layout = match layout {
            LayoutChoice::Tidy => fibtree::LayoutKind::Tidy,
            LayoutChoice::Cluster => fibtree::LayoutKind::Cluster,
        };
    }
    if let Some(kind) = args.choreography {
        cfg.choreography.kind = match kind {
            ChoreographyChoice::Still => fibtree::ChoreographyKind::Still,
            ChoreographyChoice::Presence => fibtree::ChoreographyKind::Presence,
            ChoreographyChoice::Transition => fibtree::ChoreographyKind::Transition,
        };
    }
    if let Some(step) = args.step {
        cfg.choreography.step_secs = step;
    }
    if let (Some(width), Some(height)) = (args.width, args.height) {
        cfg.canvas = fibtree::CanvasSpec::Fixed { width, height };
    }
    if let Some(container_width) = args.container_width {
        let min_height = match cfg.canvas {
            fibtree::CanvasSpec::Responsive { min_height, .. } => min_height,
            fibtree::CanvasSpec::Fixed { .. } => fibtree::RESPONSIVE_MIN_HEIGHT,
        };
        cfg.canvas = fibtree::CanvasSpec::Responsive {
            container_width,
            min_height,
        };
    }
    if args.no_labels {
        cfg.style.show_labels = false;
    }

    cfg.validate()?;
    Ok(cfg)
}

fn ensure_parent(out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.scene)?;
    let scene = fibtree::scene_for(&cfg)?;
    let svg = fibtree::render_svg(&scene)?;

    ensure_parent(&args.out)?;
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.scene)?;
    let scene = fibtree::scene_for(&cfg)?;
    let frame = fibtree::render_frame(&scene, args.at)?;
    fibtree::write_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_tree(args: TreeArgs) -> anyhow::Result<()> {
    let tree = fibtree::TreeBuilder::with_max_n(args.max_n)?.build(args.n)?;
    let json = serde_json::to_string_pretty(&tree).context("serialize tree")?;
    println!("{json}");
    Ok(())
}

fn cmd_stats(args: SceneArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    let tree = cfg.tree_builder()?.build(cfg.n)?;
    let scene = fibtree::compose_scene(&tree, &cfg)?;

    println!("n:         {}", scene.n);
    println!("nodes:     {}", tree.len());
    println!("leaves:    {}", tree.leaf_count());
    println!("links:     {}", scene.links.len());
    println!("height:    {}", tree.height());
    println!("duration:  {:.2}s", scene.duration_secs);
    Ok(())
}
