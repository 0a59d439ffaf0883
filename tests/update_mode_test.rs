// 回写模式与端到端流程（本地 PNG，不访问网络）
use blue_noise_table::cli::{self, Args};
use blue_noise_table::noise_table::{
    BlueNoiseError, NoiseTable, NoiseTableConfig, NoiseTableGenerator, TABLE_LEN, patch_source,
};
use image::{GrayImage, ImageFormat, Luma};
use proptest::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TYPES_H: &str = "#pragma once\n\
\n\
// 64x64 blue noise texture data (single channel, 8-bit)\n\
// Source: momentsingraphics.de (Christoph Peters) - CC0 Public Domain\n\
inline const unsigned char g_blueNoiseData[64 * 64] = {\n     65,247,203,177,\n     54,149, 96,135\n};\n\
\n\
struct Primaries { float rx, ry; };\n";

fn write_png(dir: &TempDir, name: &str, width: u32, height: u32, value: u8) -> PathBuf {
    let path = dir.path().join(name);
    GrayImage::from_pixel(width, height, Luma([value]))
        .save_with_format(&path, ImageFormat::Png)
        .expect("failed to write test png");
    path
}

fn args(input: &Path, update: Option<&Path>) -> Args {
    Args {
        update: update.map(Path::to_path_buf),
        url: None,
        input: Some(input.to_path_buf()),
        name: None,
        qualifier: None,
    }
}

#[tokio::test]
async fn print_mode_writes_only_the_array() {
    let dir = TempDir::new().unwrap();
    let png = write_png(&dir, "gray.png", 64, 64, 128);

    let mut out = Vec::new();
    cli::run_with_output(args(&png, None), &mut out).await.expect("print mode should succeed");

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("// 64x64 blue noise texture data"));
    assert!(text.ends_with("};\n"));
    assert_eq!(text.lines().count(), 261);
}

#[tokio::test]
async fn non_64_source_is_resized_and_still_printed() {
    let dir = TempDir::new().unwrap();
    let png = write_png(&dir, "small.png", 32, 32, 201);

    let mut out = Vec::new();
    cli::run_with_output(args(&png, None), &mut out).await.expect("resize is non-fatal");

    let text = String::from_utf8(out).unwrap();
    let values = text.matches("201").count();
    assert_eq!(values, TABLE_LEN);
}

#[tokio::test]
async fn update_mode_rewrites_matched_region_and_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let png = write_png(&dir, "gray.png", 64, 64, 12);
    let header = dir.path().join("types.h");
    fs::write(&header, TYPES_H).unwrap();

    cli::run_with_output(args(&png, Some(header.as_path())), &mut Vec::<u8>::new())
        .await
        .expect("first update should succeed");
    let first = fs::read_to_string(&header).unwrap();

    cli::run_with_output(args(&png, Some(header.as_path())), &mut Vec::<u8>::new())
        .await
        .expect("second update should succeed");
    let second = fs::read_to_string(&header).unwrap();

    assert_eq!(first, second);
    assert!(first.starts_with("#pragma once\n\n// 64x64 blue noise texture data"));
    assert!(first.ends_with("};\n\nstruct Primaries { float rx, ry; };\n"));
    assert!(first.contains("inline const unsigned char g_blueNoiseData[64 * 64] = {"));
    assert!(!first.contains("65,247"));
}

#[tokio::test]
async fn update_mode_without_array_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let png = write_png(&dir, "gray.png", 64, 64, 12);
    let source = dir.path().join("main.cpp");
    let original = "int main() {\n    return 0;\n}\n";
    fs::write(&source, original).unwrap();

    let err = cli::run_with_output(args(&png, Some(source.as_path())), &mut Vec::<u8>::new())
        .await
        .expect_err("missing array must fail");

    assert!(matches!(
        err,
        blue_noise_table::error::AppError::Noise(BlueNoiseError::PatternNotFound { .. })
    ));
    assert_eq!(err.exit_status(), 1);
    assert_eq!(fs::read(&source).unwrap(), original.as_bytes());
}

#[tokio::test]
async fn generator_rejects_non_image_input() {
    let dir = TempDir::new().unwrap();
    let bogus = dir.path().join("noise.png");
    fs::write(&bogus, "<html>not found</html>").unwrap();

    let generator = NoiseTableGenerator::new(NoiseTableConfig::default()).unwrap();
    let result = generator
        .generate(blue_noise_table::noise_table::NoiseSource::FilePath(
            bogus.to_string_lossy().into_owned(),
        ))
        .await;

    assert!(matches!(result, Err(BlueNoiseError::InvalidFormat(_))));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn patching_same_table_twice_changes_nothing(pixels in prop::collection::vec(any::<u8>(), TABLE_LEN)) {
        let table = NoiseTable::new(pixels).unwrap();
        let config = NoiseTableConfig::default();
        let target = Path::new("types.h");

        let once = patch_source(TYPES_H, &table, &config, target).unwrap();
        let twice = patch_source(&once, &table, &config, target).unwrap();

        prop_assert_eq!(once, twice);
    }
}
