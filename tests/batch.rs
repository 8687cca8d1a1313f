//! End-to-end batch coverage on temporary directories.

use std::path::Path;

use image::{Rgb, RgbImage};
use tempfile::TempDir;

use imgtint::{BatchProcessor, TintConfig, TintError, WorkerPool};

fn write_test_image(path: &Path) {
    let mut img = RgbImage::new(4, 4);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgb([(x * 60) as u8, (y * 60) as u8, 128]);
    }
    img.save(path).unwrap();
}

fn test_config(input: &Path, output: &Path) -> TintConfig {
    let mut config = TintConfig::default();
    config.input_dir = input.to_path_buf();
    config.output_dir = output.to_path_buf();
    config
}

fn processor() -> BatchProcessor {
    BatchProcessor::new(WorkerPool::new(Some(2)))
}

#[tokio::test]
async fn selects_only_supported_extensions() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("in");
    std::fs::create_dir(&input).unwrap();
    write_test_image(&input.join("a.jpg"));
    write_test_image(&input.join("c.PNG"));
    std::fs::write(input.join("b.txt"), "not an image").unwrap();
    std::fs::create_dir(input.join("sub")).unwrap();

    let output = root.path().join("out");
    let config = test_config(&input, &output);

    let summary = processor().run(&config, |_| {}).await.unwrap();

    assert_eq!(summary.total, 2);
    assert_eq!(summary.succeeded, 2);
    assert!(summary.failed.is_empty());
    assert!(output.join("a_redtint.jpg").is_file());
    assert!(output.join("c_redtint.PNG").is_file());
    assert!(!output.join("b_redtint.txt").exists());
}

#[tokio::test]
async fn output_dimensions_match_input() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("in");
    std::fs::create_dir(&input).unwrap();
    write_test_image(&input.join("photo.png"));

    let output = root.path().join("out");
    let config = test_config(&input, &output);

    processor().run(&config, |_| {}).await.unwrap();

    let tinted = image::open(output.join("photo_redtint.png")).unwrap();
    assert_eq!(tinted.width(), 4);
    assert_eq!(tinted.height(), 4);
}

#[tokio::test]
async fn corrupt_file_does_not_abort_batch() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("in");
    std::fs::create_dir(&input).unwrap();
    write_test_image(&input.join("a.jpg"));
    write_test_image(&input.join("c.png"));
    std::fs::write(input.join("broken.png"), b"garbage bytes").unwrap();

    let output = root.path().join("out");
    let config = test_config(&input, &output);

    let summary = processor().run(&config, |_| {}).await.unwrap();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed.len(), 1);
    assert!(summary.failed[0].0.contains("broken.png"));
    assert!(output.join("a_redtint.jpg").is_file());
    assert!(output.join("c_redtint.png").is_file());
    assert!(!output.join("broken_redtint.png").exists());
}

#[tokio::test]
async fn missing_input_dir_is_fatal_and_creates_nothing() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("nope");
    let output = root.path().join("out");
    let config = test_config(&input, &output);

    let err = processor().run(&config, |_| {}).await.unwrap_err();

    assert!(matches!(err, TintError::Config(_)));
    assert!(!output.exists());
}

#[tokio::test]
async fn custom_suffix_is_used() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("in");
    std::fs::create_dir(&input).unwrap();
    write_test_image(&input.join("photo.jpeg"));

    let output = root.path().join("out");
    let mut config = test_config(&input, &output);
    config.settings.suffix = "sepia".to_string();

    let summary = processor().run(&config, |_| {}).await.unwrap();

    assert_eq!(summary.succeeded, 1);
    assert!(output.join("photo_sepia.jpeg").is_file());
}

#[tokio::test]
async fn empty_input_dir_still_creates_output_dir() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("in");
    std::fs::create_dir(&input).unwrap();

    let output = root.path().join("out");
    let config = test_config(&input, &output);

    let summary = processor().run(&config, |_| {}).await.unwrap();

    assert_eq!(summary.total, 0);
    assert_eq!(summary.succeeded, 0);
    assert!(output.is_dir());
}

#[tokio::test]
async fn full_strength_writes_solid_color() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("in");
    std::fs::create_dir(&input).unwrap();
    write_test_image(&input.join("photo.png"));

    let output = root.path().join("out");
    let mut config = test_config(&input, &output);
    config.settings.color = [0, 0, 255];
    config.settings.strength = 1.0;

    processor().run(&config, |_| {}).await.unwrap();

    let tinted = image::open(output.join("photo_redtint.png")).unwrap().to_rgb8();
    assert!(tinted.pixels().all(|pixel| *pixel == Rgb([0, 0, 255])));
}

#[tokio::test]
async fn progress_callback_reports_every_file() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let root = TempDir::new().unwrap();
    let input = root.path().join("in");
    std::fs::create_dir(&input).unwrap();
    write_test_image(&input.join("a.png"));
    write_test_image(&input.join("b.png"));
    write_test_image(&input.join("c.png"));

    let output = root.path().join("out");
    let config = test_config(&input, &output);

    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let summary = processor()
        .run(&config, move |progress| {
            seen.fetch_add(1, Ordering::SeqCst);
            assert_eq!(progress.total_files, 3);
            assert!(progress.processed_files <= 3);
        })
        .await
        .unwrap();

    assert_eq!(summary.succeeded, 3);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
