use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "public/images/logo-source.png";
const DEFAULT_OUTPUT: &str = "public/images/logo-processed.png";

#[derive(Parser, Debug)]
#[command(name = "logomark", version)]
struct Cli {
    /// Without a subcommand, processes `public/images/logo-source.png` with the default preset.
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite a logo onto a white disk and write a PNG.
    Process(ProcessArgs),
    /// Print the computed circle and logo geometry.
    Layout(SpecArgs),
}

#[derive(Parser, Debug)]
struct ProcessArgs {
    /// Input image (PNG with alpha).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    spec: SpecArgs,
}

#[derive(Args, Debug)]
struct SpecArgs {
    /// Base parameters.
    #[arg(long, value_enum, default_value_t = Preset::Default)]
    preset: Preset,

    /// JSON file with `canvas_size`, `circle_ratio` and `logo_ratio`; replaces the preset.
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Output side in pixels.
    #[arg(long)]
    canvas_size: Option<u32>,

    /// Circle diameter as a fraction of the canvas.
    #[arg(long)]
    circle_ratio: Option<f64>,

    /// Logo side as a fraction of the circle.
    #[arg(long)]
    logo_ratio: Option<f64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    /// 200px canvas, 90% circle, 75% logo.
    Default,
    /// 150px canvas, 85% circle, 80% logo.
    Header,
}

impl SpecArgs {
    fn resolve(&self) -> anyhow::Result<logomark::LogoSpec> {
        let mut spec = match &self.spec {
            Some(path) => logomark::LogoSpec::from_path(path)
                .with_context(|| format!("load spec '{}'", path.display()))?,
            None => match self.preset {
                Preset::Default => logomark::LogoSpec::DEFAULT,
                Preset::Header => logomark::LogoSpec::HEADER,
            },
        };
        if let Some(v) = self.canvas_size {
            spec.canvas_size = v;
        }
        if let Some(v) = self.circle_ratio {
            spec.circle_ratio = v;
        }
        if let Some(v) = self.logo_ratio {
            spec.logo_ratio = v;
        }
        Ok(spec)
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        None => {
            cmd_default();
            Ok(())
        }
        Some(Command::Process(args)) => cmd_process(args),
        Some(Command::Layout(args)) => cmd_layout(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Failures are reported but never turn into a non-zero exit.
fn cmd_default() {
    let input = Path::new(DEFAULT_INPUT);
    let output = Path::new(DEFAULT_OUTPUT);

    if !input.exists() {
        tracing::error!(path = %input.display(), "source logo not found");
        eprintln!(
            "place the source logo at '{}' and run again",
            input.display()
        );
        return;
    }

    let spec = logomark::LogoSpec::DEFAULT;
    match logomark::process_logo(input, output, &spec) {
        Ok(layout) => print_summary(input, output, &layout),
        Err(err) => tracing::error!(error = %err, "logo processing failed"),
    }
}

fn cmd_process(args: ProcessArgs) -> anyhow::Result<()> {
    let spec = args.spec.resolve()?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let layout = logomark::process_logo(&args.in_path, &args.out, &spec)?;
    print_summary(&args.in_path, &args.out, &layout);
    Ok(())
}

fn cmd_layout(args: SpecArgs) -> anyhow::Result<()> {
    let spec = args.resolve()?;
    let layout = logomark::LogoLayout::compute(&spec)?;
    println!("canvas: {0}x{0}", layout.canvas_size);
    println!(
        "circle: diameter={} offset={}",
        layout.circle.diameter, layout.circle.offset
    );
    println!(
        "logo:   side={} offset={}",
        layout.logo.side, layout.logo.offset
    );
    Ok(())
}

fn print_summary(input: &Path, output: &Path, layout: &logomark::LogoLayout) {
    eprintln!("wrote {}", output.display());
    eprintln!("  source:  {}", input.display());
    eprintln!("  size:    {0}x{0}px", layout.canvas_size);
    eprintln!("  circle:  {}px diameter", layout.circle.diameter);
    eprintln!("  logo:    {}px", layout.logo.side);
}
