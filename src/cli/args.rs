use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spritecut", version, about = "SPRITECUT CLI")]
pub struct CliArgs {
    /// Input sprite sheet (PNG with transparent background, 3x3 poses)
    #[arg(short, long, default_value = "images/monkey_poses-removebg-preview.png")]
    pub input: PathBuf,

    /// Output directory for the extracted poses
    #[arg(short, long, default_value = "images/monkey_poses")]
    pub output_dir: PathBuf,

    /// Filename prefix for the extracted poses (<prefix>_<label>.png)
    #[arg(long, default_value = "monkey")]
    pub prefix: String,

    /// Optional JSON preset file with slicing parameters
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Capture margin in pixels around each nominal grid cell
    /// (overrides the preset)
    #[arg(long)]
    pub margin: Option<u32>,

    /// Write a manifest.json sidecar describing the extracted poses
    #[arg(long, default_value_t = false)]
    pub manifest: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
