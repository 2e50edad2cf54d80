use std::fs;

use tracing::{info, warn};

use sprixel::api::process_image_to_path;
use sprixel::types::SmoothParams;
use sprixel::{ProcessingParams, is_supported_raster};

use super::args::CliArgs;
use super::errors::AppError;

fn build_params(args: &CliArgs) -> Result<ProcessingParams, AppError> {
    if args.size == 0 {
        return Err(AppError::ZeroSize { size: args.size });
    }
    if let Some(colors) = args.colors {
        if colors == 0 {
            return Err(AppError::InvalidColors { colors });
        }
    }

    Ok(ProcessingParams {
        format: args.format,
        size: args.size,
        colors: args.colors,
        smooth: args.smooth_kernel.map(|kernel| SmoothParams {
            kernel,
            iterations: args.smooth_iterations,
        }),
        metadata: args.metadata,
        seed: args.seed,
    })
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = build_params(&args)?;
    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        fs::create_dir_all(&output_dir)?;

        info!("Starting batch processing from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let mut processed = 0;
        let mut skipped = 0;
        let mut errors = 0;

        for entry in fs::read_dir(&input_dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_supported_raster(&path) {
                let stem = path.file_stem().unwrap().to_string_lossy();
                let output_name = format!("{}.{}", stem, params.format.extension());
                let output_path = output_dir.join(&output_name);

                info!("Processing: {:?} -> {:?}", path, output_path);

                match process_image_to_path(&path, &output_path, &params) {
                    Ok(()) => {
                        info!("Successfully processed: {:?}\n", path);
                        processed += 1;
                    }
                    Err(e) => {
                        warn!("Error processing {:?}: {}", path, e);
                        errors += 1;
                        if !args.batch {
                            return Err(e.into());
                        }
                    }
                }
            } else {
                info!("Skipping unsupported entry: {:?}", path);
                skipped += 1;
            }
        }

        info!("Batch processing complete!");
        info!("Processed: {}", processed);
        info!("Skipped: {}", skipped);
        info!("Errors: {}", errors);
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let output = args.output.ok_or(AppError::MissingArgument {
            arg: "--output".to_string(),
        })?;

        process_image_to_path(&input, &output, &params)?;
        info!("Successfully processed: {:?} -> {:?}\n", input, output);
    }

    Ok(())
}
