use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use zebra::{Edges, FrameRGBA, SizeConstraint, StripeRenderer, ZebraConfig, measure};

#[derive(Parser, Debug)]
#[command(name = "zebra", version)]
struct Cli {
    /// Log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the striped background as a PNG.
    Render(RenderArgs),
    /// Print the negotiated outer and content sizes.
    Measure(MeasureArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Style configuration JSON.
    #[arg(long)]
    config: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Exact outer width (defaults to the intrinsic size).
    #[arg(long)]
    width: Option<u32>,

    /// Exact outer height (defaults to the intrinsic size).
    #[arg(long)]
    height: Option<u32>,

    /// Padding on every side.
    #[arg(long, default_value_t = 0)]
    padding: u32,
}

#[derive(Args, Debug)]
struct MeasureArgs {
    /// Style configuration JSON.
    #[arg(long)]
    config: PathBuf,

    /// Exact outer width.
    #[arg(long, conflicts_with = "max_width")]
    width: Option<u32>,

    /// Upper bound on the content width.
    #[arg(long)]
    max_width: Option<u32>,

    /// Exact outer height.
    #[arg(long, conflicts_with = "max_height")]
    height: Option<u32>,

    /// Upper bound on the content height.
    #[arg(long)]
    max_height: Option<u32>,

    /// Padding on every side.
    #[arg(long, default_value_t = 0)]
    padding: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Measure(args) => cmd_measure(args),
    }
}

fn constraint(exact: Option<u32>, at_most: Option<u32>) -> SizeConstraint {
    match (exact, at_most) {
        (Some(n), _) => SizeConstraint::Exactly(n),
        (None, Some(n)) => SizeConstraint::AtMost(n),
        (None, None) => SizeConstraint::Unconstrained,
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = ZebraConfig::from_path(&args.config)?;
    let m = measure(
        cfg.orientation,
        constraint(args.width, None),
        constraint(args.height, None),
        Edges::all(args.padding),
    );

    let mut canvas = FrameRGBA::transparent(m.outer_width, m.outer_height);
    let mut renderer = StripeRenderer::new(cfg);
    match renderer.render(m.content)? {
        Some(content) => {
            let (x, y) = m.content_origin();
            content.blit_onto(&mut canvas, x, y)?;
        }
        None => tracing::warn!(content = %m.content, "content box is empty, writing blank canvas"),
    }
    anyhow::ensure!(
        canvas.width > 0 && canvas.height > 0,
        "output size {}x{} is empty",
        canvas.width,
        canvas.height
    );

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &canvas.to_straight_rgba8(),
        canvas.width,
        canvas.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_measure(args: MeasureArgs) -> anyhow::Result<()> {
    let cfg = ZebraConfig::from_path(&args.config)?;
    let m = measure(
        cfg.orientation,
        constraint(args.width, args.max_width),
        constraint(args.height, args.max_height),
        Edges::all(args.padding),
    );
    let (x, y) = m.content_origin();
    println!("outer {}x{}", m.outer_width, m.outer_height);
    println!("content {} at {x},{y}", m.content);
    Ok(())
}
