//! End-to-end tests over real trees of synthetic nine-patch files.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::fs;

use image::{Rgb, RgbImage, Rgba};
use ninepatch_test_support::NinePatchBuilder;
use predicates::prelude::*;

use common::{ninepatch_fix, pixel, read_rgba, snapshot};

#[test]
fn test_two_by_two_scenario_is_rewritten() {
    let temp = tempfile::tempdir().unwrap();
    let res = temp.path().join("res");
    fs::create_dir(&res).unwrap();
    let path = NinePatchBuilder::two_by_two_scenario()
        .write(&res, "a.9.png")
        .unwrap();

    ninepatch_fix(temp.path())
        .arg(&res)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Flushing bitmap to file"))
        .stdout(predicate::str::contains("(1 pixel(s) fixed)"));

    assert_eq!(pixel(&path, 0, 0), Rgba([0, 0, 0, 255]));
    assert_eq!(pixel(&path, 1, 0), Rgba([0, 0, 255, 255]));
    assert_eq!(pixel(&path, 0, 1), Rgba([0, 0, 255, 255]));
    assert_eq!(pixel(&path, 1, 1), Rgba([0, 0, 255, 255]));
}

#[test]
fn test_interior_artifact_is_not_rewritten() {
    let temp = tempfile::tempdir().unwrap();
    let path = NinePatchBuilder::interior_artifact_scenario()
        .write(temp.path(), "center.9.png")
        .unwrap();
    let before = fs::read(&path).unwrap();

    ninepatch_fix(temp.path())
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("No changes in bitmap of file"))
        .stdout(predicate::str::contains("Flushing").not());

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_alpha_is_preserved_by_default() {
    let temp = tempfile::tempdir().unwrap();
    let path = NinePatchBuilder::new(9, 9)
        .border([0, 0, 0, 255])
        .pixel(4, 0, [255, 0, 0, 128])
        .pixel(0, 4, [1, 0, 0, 0])
        .write(temp.path(), "panel.9.png")
        .unwrap();

    ninepatch_fix(temp.path()).arg(&path).assert().code(0);

    assert_eq!(pixel(&path, 4, 0), Rgba([0, 0, 0, 128]));
    assert_eq!(pixel(&path, 0, 4), Rgba([0, 0, 0, 0]));
    assert_eq!(pixel(&path, 3, 0), Rgba([0, 0, 0, 255]));
}

#[test]
fn test_alpha_clear_makes_fixed_pixels_transparent() {
    let temp = tempfile::tempdir().unwrap();
    let path = NinePatchBuilder::filled(3, 3, [0, 0, 0, 255])
        .pixel(1, 0, [200, 0, 0, 255])
        .write(temp.path(), "a.9.png")
        .unwrap();

    ninepatch_fix(temp.path())
        .arg("--alpha")
        .arg("clear")
        .arg(&path)
        .assert()
        .code(0);

    assert_eq!(pixel(&path, 1, 0), Rgba([0, 0, 0, 0]));
    assert_eq!(pixel(&path, 0, 0), Rgba([0, 0, 0, 255]));
}

#[test]
fn test_second_run_changes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let path = NinePatchBuilder::new(12, 12)
        .red_guides(255)
        .write(temp.path(), "btn.9.png")
        .unwrap();

    ninepatch_fix(temp.path())
        .arg(temp.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Flushing bitmap"));
    let after_first = fs::read(&path).unwrap();

    ninepatch_fix(temp.path())
        .arg(temp.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("No changes in bitmap"))
        .stdout(predicate::str::contains("Flushing").not());
    assert_eq!(fs::read(&path).unwrap(), after_first);
}

#[test]
fn test_non_qualifying_files_are_never_touched() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("res");
    let nested = root.join("drawable-hdpi");
    fs::create_dir_all(&nested).unwrap();
    for (dir, name) in [
        (&root, "icon.png"),
        (&nested, "panel.png"),
        (&nested, "panel.9.png.orig"),
        (&nested, "panel9.png"),
    ] {
        NinePatchBuilder::filled(4, 4, [255, 0, 0, 255])
            .write(dir, name)
            .unwrap();
    }
    let before = snapshot(&root);

    ninepatch_fix(temp.path())
        .arg(&root)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("icon.png"))
        .stdout(predicate::str::contains("0 nine-patch file(s)"));

    assert_eq!(snapshot(&root), before);
}

#[test]
fn test_suffix_match_ignores_case() {
    let temp = tempfile::tempdir().unwrap();
    let path = NinePatchBuilder::filled(2, 2, [9, 0, 0, 255])
        .write(temp.path(), "Upper.9.PNG")
        .unwrap();

    ninepatch_fix(temp.path())
        .arg(temp.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("1 rewritten"));

    assert!(read_rgba(&path).pixels().all(|p| *p == Rgba([0, 0, 0, 255])));
}

#[test]
fn test_nested_tree_is_fixed() {
    let temp = tempfile::tempdir().unwrap();
    let deep = temp.path().join("res/a/b/c");
    fs::create_dir_all(&deep).unwrap();
    let top = NinePatchBuilder::filled(3, 3, [255, 0, 0, 255])
        .write(&temp.path().join("res"), "top.9.png")
        .unwrap();
    let bottom = NinePatchBuilder::filled(3, 3, [255, 0, 0, 255])
        .write(&deep, "bottom.9.png")
        .unwrap();

    ninepatch_fix(temp.path())
        .arg(temp.path().join("res"))
        .assert()
        .code(0)
        .stdout(predicate::str::contains("2 rewritten"));

    for path in [top, bottom] {
        assert_eq!(pixel(&path, 0, 0), Rgba([0, 0, 0, 255]));
        // Interior stays red.
        assert_eq!(pixel(&path, 1, 1), Rgba([255, 0, 0, 255]));
    }
}

#[test]
fn test_rgb_image_without_alpha() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("rgb.9.png");
    RgbImage::from_pixel(3, 3, Rgb([120, 0, 0])).save(&path).unwrap();

    ninepatch_fix(temp.path()).arg(&path).assert().code(0);

    let fixed = image::open(&path).unwrap().to_rgb8();
    assert_eq!(*fixed.get_pixel(0, 0), Rgb([0, 0, 0]));
    assert_eq!(*fixed.get_pixel(1, 1), Rgb([120, 0, 0]));
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let path = NinePatchBuilder::filled(2, 2, [255, 0, 0, 255])
        .write(temp.path(), "a.9.png")
        .unwrap();
    let before = fs::read(&path).unwrap();

    ninepatch_fix(temp.path())
        .arg("--dry-run")
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Would flush bitmap"))
        .stdout(predicate::str::contains("(4 pixel(s) to fix)"));

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_corrupt_file_does_not_stop_siblings() {
    let temp = tempfile::tempdir().unwrap();
    let broken = temp.path().join("a_broken.9.png");
    fs::write(&broken, b"\x89PNG\r\n\x1a\ntruncated").unwrap();
    let good = NinePatchBuilder::filled(2, 2, [255, 0, 0, 255])
        .write(temp.path(), "b_good.9.png")
        .unwrap();

    ninepatch_fix(temp.path())
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: unable to read image"))
        .stderr(predicate::str::contains("a_broken.9.png"))
        .stdout(predicate::str::contains("1 failed"));

    assert_eq!(pixel(&good, 0, 0), Rgba([0, 0, 0, 255]));
    assert_eq!(
        fs::read(&broken).unwrap(),
        b"\x89PNG\r\n\x1a\ntruncated".to_vec()
    );
}

#[cfg(unix)]
#[test]
fn test_symlinked_nine_patch_fixes_target() {
    let temp = tempfile::tempdir().unwrap();
    let shared = temp.path().join("shared");
    let res = temp.path().join("res");
    fs::create_dir(&shared).unwrap();
    fs::create_dir(&res).unwrap();
    let target = NinePatchBuilder::two_by_two_scenario()
        .write(&shared, "real.png")
        .unwrap();
    let link = res.join("a.9.png");
    std::os::unix::fs::symlink(&target, &link).unwrap();

    ninepatch_fix(temp.path())
        .arg(&res)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("(1 pixel(s) fixed)"));

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(pixel(&target, 0, 0), Rgba([0, 0, 0, 255]));
    assert_eq!(pixel(&target, 1, 1), Rgba([0, 0, 255, 255]));
}
