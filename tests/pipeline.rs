use std::path::Path;

use image::{Rgba, RgbaImage};
use sprixel::{
    Error, ProcessingParams, SmoothParams, iterate_images, load_rgba,
    process_directory_to_path, process_image_to_buffer, process_image_to_path,
    process_pixel_pipeline,
};

fn checkerboard(width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::new(width, height);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        *pixel = if (x + y) % 2 == 0 {
            Rgba([220, 40, 40, 255])
        } else {
            Rgba([40, 40, 220, 255])
        };
    }
    image
}

#[test]
fn single_color_image_survives_the_whole_pipeline() {
    // 100x60 fully opaque single color at size 50: trim is a no-op, padding
    // goes to 100x100, and the covered band of the 50x50 sprite keeps the
    // input color exactly
    let image = RgbaImage::from_pixel(100, 60, Rgba([30, 140, 20, 255]));
    let params = ProcessingParams {
        size: 50,
        ..Default::default()
    };

    let (sprite, report) = process_pixel_pipeline(&image, &params).unwrap();
    assert_eq!(sprite.dimensions(), (50, 50));
    assert_eq!((report.padded_width, report.padded_height), (100, 100));

    let mut colors: Vec<[u8; 4]> = sprite.pixels().map(|p| p.0).collect();
    colors.sort();
    colors.dedup();
    assert_eq!(colors, vec![[0, 0, 0, 0], [30, 140, 20, 255]]);
}

#[test]
fn fully_transparent_image_yields_a_transparent_sprite() {
    let image = RgbaImage::new(10, 10);
    let params = ProcessingParams {
        size: 5,
        ..Default::default()
    };

    let (sprite, _) = process_pixel_pipeline(&image, &params).unwrap();
    assert_eq!(sprite.dimensions(), (5, 5));
    assert!(sprite.pixels().all(|p| p.0 == [0, 0, 0, 0]));
}

#[test]
fn pipeline_output_is_byte_identical_across_runs() {
    let image = checkerboard(37, 23);
    let params = ProcessingParams {
        size: 8,
        colors: Some(2),
        smooth: Some(SmoothParams {
            kernel: 3,
            iterations: 2,
        }),
        ..Default::default()
    };

    let (a, _) = process_pixel_pipeline(&image, &params).unwrap();
    let (b, _) = process_pixel_pipeline(&image, &params).unwrap();
    assert_eq!(a.into_raw(), b.into_raw());
}

#[test]
fn process_to_path_writes_sprite_and_sidecar() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("sprite.png");
    checkerboard(64, 64).save(&input).unwrap();

    let params = ProcessingParams {
        size: 16,
        metadata: true,
        ..Default::default()
    };
    process_image_to_path(&input, &output, &params).unwrap();

    let sprite = load_rgba(&output).unwrap();
    assert_eq!(sprite.dimensions(), (16, 16));

    let sidecar = dir.path().join("sprite.json");
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&sidecar).unwrap()).unwrap();
    assert_eq!(json["source_width"], 64);
    assert_eq!(json["sprite_size"], 16);
}

#[test]
fn missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("sprite.png");

    let result = process_image_to_path(
        Path::new("/nonexistent/input.png"),
        &output,
        &ProcessingParams::default(),
    );
    assert!(matches!(result, Err(Error::Reader(_))));
    assert!(!output.exists());
}

#[test]
fn invalid_arguments_fail_before_any_processing() {
    let image = RgbaImage::new(4, 4);

    let zero_size = ProcessingParams {
        size: 0,
        ..Default::default()
    };
    assert!(matches!(
        process_pixel_pipeline(&image, &zero_size),
        Err(Error::ZeroSize { size: 0 })
    ));

    let zero_colors = ProcessingParams {
        colors: Some(0),
        ..Default::default()
    };
    assert!(matches!(
        process_pixel_pipeline(&image, &zero_colors),
        Err(Error::InvalidArgument { arg: "colors", .. })
    ));
}

#[test]
fn quantized_pipeline_respects_the_color_target() {
    let mut image = checkerboard(40, 40);
    // Sprinkle extra colors so clustering has something to merge
    for x in 0..40 {
        image.put_pixel(x, 0, Rgba([(5 * x % 256) as u8, 200, 100, 255]));
    }
    let params = ProcessingParams {
        size: 10,
        colors: Some(4),
        ..Default::default()
    };

    let (sprite, report) = process_pixel_pipeline(&image, &params).unwrap();
    assert_eq!(report.quantized_colors, Some(4));

    let mut colors: Vec<[u8; 4]> = sprite.pixels().map(|p| p.0).collect();
    colors.sort();
    colors.dedup();
    assert!(colors.len() <= 4);
}

#[test]
fn batch_processing_reports_per_file_outcomes() {
    let dir = tempfile::tempdir().unwrap();
    let input_dir = dir.path().join("in");
    let output_dir = dir.path().join("out");
    std::fs::create_dir_all(&input_dir).unwrap();

    checkerboard(20, 20)
        .save(input_dir.join("good.png"))
        .unwrap();
    checkerboard(32, 12)
        .save(input_dir.join("also_good.png"))
        .unwrap();
    std::fs::write(input_dir.join("broken.png"), b"definitely not a png").unwrap();
    std::fs::write(input_dir.join("notes.txt"), b"ignored").unwrap();

    let params = ProcessingParams {
        size: 8,
        ..Default::default()
    };
    let listed: Vec<_> = iterate_images(&input_dir).unwrap().collect();
    assert_eq!(listed.len(), 3); // the .txt file is not a raster
    assert!(listed.windows(2).all(|w| w[0] < w[1]));

    let report = process_directory_to_path(&input_dir, &output_dir, &params, true).unwrap();

    assert_eq!(report.processed, 2);
    assert_eq!(report.errors, 1);
    assert_eq!(report.skipped, 1);
    assert!(output_dir.join("good.png").exists());
    assert!(output_dir.join("also_good.png").exists());
    assert!(!output_dir.join("broken.png").exists());
}

#[test]
fn buffer_processing_matches_path_processing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("sprite.png");
    checkerboard(30, 18).save(&input).unwrap();

    let params = ProcessingParams {
        size: 6,
        ..Default::default()
    };
    let buffered = process_image_to_buffer(&input, &params).unwrap();
    process_image_to_path(&input, &output, &params).unwrap();

    assert_eq!(load_rgba(&output).unwrap(), buffered.image);
}
