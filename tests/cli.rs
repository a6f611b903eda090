use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn inkmark_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("inkmark").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

fn pixel(path: &std::path::Path, x: i32, y: i32) -> [u8; 4] {
    let mut file = std::fs::File::open(path).unwrap();
    let mut surface = cairo::ImageSurface::create_from_png(&mut file).unwrap();
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y as usize * stride + x as usize * 4;
    [
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]
}

#[test]
fn help_prints_usage() {
    let home = TempDir::new().unwrap();
    inkmark_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Render an annotation gesture to a PNG"));
}

#[test]
fn output_is_required_for_rendering() {
    let home = TempDir::new().unwrap();
    inkmark_cmd(&home)
        .args(["--point", "1,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required arguments were not provided"));
}

#[test]
fn rejects_unknown_tool() {
    let home = TempDir::new().unwrap();
    inkmark_cmd(&home)
        .args(["--tool", "crayon", "--point", "1,1", "--output", "x.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tool 'crayon'"));
}

#[test]
fn rejects_malformed_points() {
    let home = TempDir::new().unwrap();
    inkmark_cmd(&home)
        .args(["--point", "12;4", "--output", "x.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected `x,y`"));

    inkmark_cmd(&home)
        .args(["--point", "1,2@1.5", "--output", "x.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside 0.0-1.0"));
}

#[test]
fn missing_gesture_is_an_error() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("empty.png");
    inkmark_cmd(&home)
        .args(["--output", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No gesture given"));
    assert!(!out.exists());
}

#[test]
fn renders_a_rectangle_to_png() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("shots").join("rect.png");

    inkmark_cmd(&home)
        .args([
            "--tool",
            "shape:rectangle",
            "--point",
            "10,10",
            "--point",
            "50,30",
            "--size",
            "64x48",
            "--background",
            "white",
            "--color",
            "blue",
            "--width",
            "4",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    // ARGB32 is stored as BGRA on little-endian hosts
    assert_eq!(pixel(&out, 10, 20), [255, 0, 0, 255], "left edge is blue");
    assert_eq!(pixel(&out, 30, 20), [255, 255, 255, 255], "interior stays white");
    assert_eq!(pixel(&out, 2, 2), [255, 255, 255, 255]);
}

#[test]
fn filled_flag_fills_closed_shapes() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("filled.png");

    inkmark_cmd(&home)
        .args([
            "--tool",
            "ellipse",
            "--filled",
            "-p",
            "0,0",
            "-p",
            "40,40",
            "--size",
            "40x40",
            "--color",
            "red",
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert_eq!(pixel(&out, 20, 20), [0, 0, 255, 255]);
    assert_eq!(pixel(&out, 1, 1)[3], 0, "corners stay transparent");
}

#[test]
fn config_file_sets_the_default_background() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "[drawing]\nbackground = \"black\"\n").unwrap();
    let out = home.path().join("bg.png");

    inkmark_cmd(&home)
        .args([
            "--config",
            config.to_str().unwrap(),
            "-p",
            "2,2",
            "--size",
            "16x16",
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert_eq!(pixel(&out, 12, 12), [0, 0, 0, 255]);
}

#[test]
fn print_config_shows_effective_values() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "[arrow]\nlength = 999.0\n").unwrap();

    inkmark_cmd(&home)
        .args(["--config", config.to_str().unwrap(), "--print-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("length = 50.0"))
        .stdout(predicate::str::contains("[tools.pen]"));
}

#[test]
fn broken_config_is_reported() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("broken.toml");
    std::fs::write(&config, "[dash\non = ").unwrap();

    inkmark_cmd(&home)
        .args(["--config", config.to_str().unwrap(), "--print-config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn init_config_writes_once() {
    let home = TempDir::new().unwrap();

    inkmark_cmd(&home)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(home.path().join("inkmark").join("config.toml").exists());

    inkmark_cmd(&home)
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
