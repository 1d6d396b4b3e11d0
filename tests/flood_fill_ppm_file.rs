use ppm_flood_fill::{flood_fill_ppm_file, CLIParser, Error, FillReport, RGBColor, Result};
use std::fs;
use std::path::{Path, PathBuf};

const P3_IMAGE: &str = "P3\n# created by a test\n3 3\n255\n\
0 0 0 0 0 0 0 0 0\n\
0 0 0 255 255 255 0 0 0\n\
0 0 0 0 0 0 0 0 0\n";

fn get_test_image_path(file_name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
    path.push(file_name);
    path
}

fn write_test_image(file_name: &str, content: &[u8]) -> PathBuf {
    let path = get_test_image_path(file_name);
    fs::write(&path, content).expect("Writing of test image failed");
    path
}

fn binary_test_image(rows: usize, cols: usize, fill: [u8; 3]) -> Vec<u8> {
    let mut content = format!("P6\n# binary test image\n{} {}\n255\n", cols, rows).into_bytes();
    for _ in 0..rows * cols {
        content.extend(fill);
    }
    content
}

fn run(image_path: &Path, seed: [&str; 2], color: [&str; 3]) -> Result<FillReport> {
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser
        .parse(vec![
            "test",
            image_path.to_str().unwrap(),
            seed[0],
            seed[1],
            color[0],
            color[1],
            color[2],
        ])
        .expect("Arguments must be valid");
    assert_eq!(arguments.image_file(), image_path);
    flood_fill_ppm_file(&arguments)
}

#[test]
fn fill_ascii_image_around_enclosed_pixel() {
    let image_path = write_test_image("ascii_enclosed.ppm", P3_IMAGE.as_bytes());
    let report = run(&image_path, ["0", "0"], ["0", "255", "0"]).expect("Flood fill failed");
    assert_eq!(report.filled_pixels, 8);
    assert_eq!(report.original_color, RGBColor::new(0, 0, 0));
    let result = fs::read_to_string(&image_path).unwrap();
    assert_eq!(
        result,
        "P3\n# created by a test\n3 3\n255\n\
0 255 0 0 255 0 0 255 0\n\
0 255 0 255 255 255 0 255 0\n\
0 255 0 0 255 0 0 255 0\n"
    );
}

#[test]
fn fill_binary_image_completely() {
    let image_path = write_test_image("binary_uniform.ppm", &binary_test_image(3, 3, [0, 0, 0]));
    let report = run(&image_path, ["1", "1"], ["255", "0", "0"]).expect("Flood fill failed");
    assert_eq!(report.filled_pixels, 9);
    assert_eq!(fs::read(&image_path).unwrap(), binary_test_image(3, 3, [255, 0, 0]));
}

#[test]
fn noop_fill_reproduces_binary_image() {
    let original = binary_test_image(4, 5, [12, 34, 56]);
    let image_path = write_test_image("binary_noop.ppm", &original);
    let report = run(&image_path, ["3", "4"], ["12", "34", "56"]).expect("Flood fill failed");
    assert_eq!(report.filled_pixels, 0);
    assert_eq!(fs::read(&image_path).unwrap(), original);
}

#[test]
fn noop_fill_keeps_ascii_values_and_comments() {
    let original = "P3\n# first\n# second\n2 1\n255\n1   2 3\n\n4 5\t6";
    let image_path = write_test_image("ascii_noop.ppm", original.as_bytes());
    run(&image_path, ["0", "1"], ["4", "5", "6"]).expect("Flood fill failed");
    let result = fs::read_to_string(&image_path).unwrap();
    assert_eq!(result, "P3\n# first\n# second\n2 1\n255\n1 2 3 4 5 6\n");
    let tokens: Vec<&str> = result.split_whitespace().collect();
    let original_tokens: Vec<&str> = original.split_whitespace().collect();
    assert_eq!(tokens, original_tokens);
}

#[test]
fn seed_outside_image_leaves_file_untouched() {
    let image_path = write_test_image("seed_outside.ppm", P3_IMAGE.as_bytes());
    match run(&image_path, ["3", "0"], ["255", "0", "0"]) {
        Err(Error::InvalidSeed { row: 3, col: 0, .. }) => {}
        _ => panic!("Seed outside of the image was not rejected"),
    }
    assert_eq!(fs::read_to_string(&image_path).unwrap(), P3_IMAGE);
}

#[test]
fn malformed_image_leaves_file_untouched() {
    let content = "P2\n2 2\n255\n0 0 0 0\n";
    let image_path = write_test_image("malformed.ppm", content.as_bytes());
    match run(&image_path, ["0", "0"], ["255", "0", "0"]) {
        Err(Error::UnsupportedEncoding(tag)) => assert_eq!(tag, "P2"),
        _ => panic!("Unsupported encoding was not rejected"),
    }
    assert_eq!(fs::read_to_string(&image_path).unwrap(), content);
}

#[test]
fn missing_image_file() {
    let image_path = get_test_image_path("does_not_exist.ppm");
    match run(&image_path, ["0", "0"], ["255", "0", "0"]) {
        Err(Error::UnableToOpenImageFile(path, _)) => {
            assert!(path.ends_with("does_not_exist.ppm"))
        }
        _ => panic!("Missing image file was not reported"),
    }
    assert!(!image_path.exists(), "Missing image file must not be created");
}
