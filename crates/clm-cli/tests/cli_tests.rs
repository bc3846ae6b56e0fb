// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn clm() -> Command {
    Command::cargo_bin("clm").expect("clm binary")
}

#[test]
fn look_at_prints_view_matrix_and_point() {
    clm()
        .args([
            "look-at",
            "--position",
            "0,0,5",
            "--target",
            "0,0,0",
            "--up",
            "0,1,0",
            "--point",
            "0,0,0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.00 0.00 1.00 -5.00 \n"))
        .stdout(predicate::str::contains(
            "(0.00, 0.00, 0.00) -> (0.00, 0.00, -5.00, 1.00)",
        ));
}

#[test]
fn perspective_prints_projection() {
    clm()
        .args([
            "perspective",
            "--fov",
            "90",
            "--aspect",
            "1",
            "--near",
            "1",
            "--far",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.00 0.00 -2.00 -3.00 \n"))
        .stdout(predicate::str::contains("0.00 0.00 -1.00 0.00 \n"));
}

#[test]
fn perspective_rejects_inverted_depth_range() {
    clm()
        .args(["perspective", "--near", "10", "--far", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("far plane"));
}

#[test]
fn unchecked_perspective_prints_degenerate_matrix() {
    clm()
        .args(["perspective", "--near", "1", "--far", "1", "--unchecked"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inf"));
}

#[test]
fn perspective_rejects_negative_near_plane() {
    clm()
        .args(["perspective", "--near", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("near plane must be positive"));
}

#[test]
fn perspective_rejects_negative_field_of_view() {
    clm()
        .args(["perspective", "--fov", "-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("field of view"));
}

#[test]
fn unchecked_perspective_accepts_negative_near_plane() {
    // near = -1, far = 10: m[10] = -9/11, m[14] = -20/-11.
    clm()
        .args([
            "perspective",
            "--near",
            "-1",
            "--far",
            "10",
            "--unchecked",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("-0.82 1.82 \n"));
}

#[test]
fn compose_rejects_zero_rotation_axis() {
    clm()
        .args(["compose", "--step", "rotate:0,0,0:90"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rotation axis must be non-zero"));
}

#[test]
fn compose_applies_last_step_first() {
    clm()
        .args([
            "compose",
            "--step",
            "translate:10,0,0",
            "--step",
            "scale:2,2,2",
            "--point",
            "1,0,0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "(1.00, 0.00, 0.00) -> (12.00, 0.00, 0.00, 1.00)",
        ));
}

#[test]
fn compose_rejects_malformed_step() {
    clm()
        .args(["compose", "--step", "shear:1,2,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid model step"));
}

#[test]
fn scene_file_prints_all_matrices() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{
            "camera": {{ "position": [0, 0, 4], "target": [0, 0, 0] }},
            "projection": {{ "fov_degrees": 90, "aspect": 1, "near": 1, "far": 9 }},
            "model": [ {{ "op": "translate", "by": [0, 0, -1] }} ]
        }}"#
    )
    .expect("write scene");

    clm()
        .arg("scene")
        .arg(file.path())
        .args(["--point", "0,0,0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("model:\n"))
        .stdout(predicate::str::contains("view:\n"))
        .stdout(predicate::str::contains("projection:\n"))
        .stdout(predicate::str::contains("mvp:\n"))
        .stdout(predicate::str::contains("-> (0.00, 0.00, 4.00, 5.00)"));
}

#[test]
fn bundled_scene_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenes/orbit.json");
    clm().args(["scene", path]).assert().success();
}

#[test]
fn missing_scene_file_reports_path() {
    clm()
        .args(["scene", "/definitely/not/here.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read scene file"));
}
