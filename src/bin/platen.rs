use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use platen::{
    Canvas, CompositionRequest, DesignPlacement, EditorViewport, ImageSource, MockupMode,
    OutputFormat,
};

#[derive(Parser, Debug)]
#[command(name = "platen", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose capture + guide payloads for a mockup generation call.
    Compose(ComposeArgs),
    /// Rasterize the raw design plate and dump it as a PNG.
    Plate(PlateArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Product photograph (defines the output resolution).
    #[arg(long)]
    base: PathBuf,

    /// Design image in paint order; repeat once per design.
    #[arg(long = "design", required = true)]
    designs: Vec<PathBuf>,

    /// Placement manifest JSON: {"viewport": {..}, "placements": [..]}.
    #[arg(long)]
    manifest: PathBuf,

    /// Mockup mode: print, engrave or emboss.
    #[arg(long)]
    mode: String,

    /// Output path for the capture preview (JPEG).
    #[arg(long)]
    out_capture: PathBuf,

    /// Output path for the AI guide payload (JPEG).
    #[arg(long)]
    out_guide: PathBuf,
}

#[derive(Parser, Debug)]
struct PlateArgs {
    /// Product photograph (defines the plate resolution).
    #[arg(long)]
    base: PathBuf,

    /// Design image in paint order; repeat once per design.
    #[arg(long = "design", required = true)]
    designs: Vec<PathBuf>,

    /// Placement manifest JSON: {"viewport": {..}, "placements": [..]}.
    #[arg(long)]
    manifest: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(serde::Deserialize, Debug)]
struct PlacementManifest {
    viewport: EditorViewport,
    placements: Vec<DesignPlacement>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Plate(args) => cmd_plate(args),
    }
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let manifest = read_manifest(&args.manifest)?;
    let request = CompositionRequest {
        base: ImageSource::from_path(&args.base),
        designs: args.designs.iter().map(ImageSource::from_path).collect(),
        placements: manifest.placements,
        viewport: manifest.viewport,
        mode: parse_mode(&args.mode)?,
    };

    let assets = platen::compose(&request)?;
    write_payload(&args.out_capture, &assets.capture.bytes)?;
    write_payload(&args.out_guide, &assets.guide.bytes)?;
    Ok(())
}

fn cmd_plate(args: PlateArgs) -> anyhow::Result<()> {
    let manifest = read_manifest(&args.manifest)?;
    let request = CompositionRequest {
        base: ImageSource::from_path(&args.base),
        designs: args.designs.iter().map(ImageSource::from_path).collect(),
        placements: manifest.placements,
        viewport: manifest.viewport,
        mode: MockupMode::Print,
    };
    request.validate()?;

    let sources = platen::prepare_sources(&request.base, &request.designs)?;
    let canvas = Canvas {
        width: sources.base.width,
        height: sources.base.height,
    };
    let plate = platen::rasterize_design_plate(
        canvas,
        &sources.designs,
        &request.placements,
        request.viewport,
    )?;

    let encoded = platen::encode_raster(&plate, OutputFormat::Png)?;
    write_payload(&args.out, &encoded.bytes)?;
    Ok(())
}

fn parse_mode(s: &str) -> anyhow::Result<MockupMode> {
    match s.to_ascii_lowercase().as_str() {
        "print" => Ok(MockupMode::Print),
        "engrave" => Ok(MockupMode::Engrave),
        "emboss" => Ok(MockupMode::Emboss),
        other => anyhow::bail!("unknown mode '{other}' (expected print, engrave or emboss)"),
    }
}

fn read_manifest(path: &PathBuf) -> anyhow::Result<PlacementManifest> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read manifest '{}'", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parse manifest '{}'", path.display()))
}

fn write_payload(path: &PathBuf, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
