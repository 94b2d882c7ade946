use std::fs;

use tracing::info;

use spritecut::SliceParams;
use spritecut::api::slice_sheet_to_path;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let mut params = match &args.params {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(AppError::Io)?;
            serde_json::from_str::<SliceParams>(&text).map_err(|source| {
                AppError::InvalidParams {
                    path: path.display().to_string(),
                    source,
                }
            })?
        }
        None => SliceParams::default(),
    };

    if let Some(margin) = args.margin {
        params.cell_margin = margin;
    }

    info!("Slicing: {:?} -> {:?}", args.input, args.output_dir);

    let report = slice_sheet_to_path(
        &args.input,
        &args.output_dir,
        &args.prefix,
        &params,
        args.manifest,
    )
    .map_err(AppError::Slicer)?;

    info!(
        "Done: {}x{} sheet, {} poses written, {} empty tiles",
        report.sheet_width, report.sheet_height, report.written, report.empty_tiles
    );

    Ok(())
}
