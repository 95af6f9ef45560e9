#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use helpers::instance_path;
use helpers::run_vlsi_sat;
use vlsi_sat::io::parse_instance;
use vlsi_sat::io::parse_solution;
use vlsi_sat::model::PackingSolution;

fn solve_file(name: &str, args: &[&str], prefix: &str) -> PackingSolution {
    let path = instance_path(name);
    let run = run_vlsi_sat(&path, args.iter().map(|arg| (*arg).to_owned()), prefix);
    assert!(run.status.success(), "{}", run.stderr);

    let solution = parse_solution(run.stdout.as_bytes()).expect("the output is a packing");
    let instance = parse_instance(
        std::fs::File::open(&path).expect("the instance file exists"),
    )
    .expect("the instance file is well formed");
    assert_eq!(solution.verify(&instance), Ok(()));

    solution
}

#[test]
fn the_optimal_packing_is_written_to_stdout() {
    let solution = solve_file("tiling.txt", &[], "default");

    assert_eq!(solution.height, 8);
}

#[test]
fn binary_search_finds_the_same_height() {
    let linear = solve_file("five_blocks.txt", &["--strategy", "linear"], "linear");
    let binary = solve_file("five_blocks.txt", &["--strategy", "binary"], "binary");

    assert_eq!(linear.height, 6);
    assert_eq!(binary.height, 6);
}

#[test]
fn encoding_flags_are_accepted() {
    let solution = solve_file(
        "stacked_squares.txt",
        &[
            "--symmetry-breaking",
            "full",
            "--origin-mode",
            "at-least-one",
            "--restart-sequence",
            "geometric",
            "--random-seed",
            "7",
        ],
        "flags",
    );

    assert_eq!(solution.height, 6);
}

#[test]
fn the_corner_symmetry_breaking_is_accepted() {
    let solution = solve_file(
        "five_blocks.txt",
        &["--symmetry-breaking", "corner", "--rotation"],
        "corner",
    );

    assert_eq!(solution.height, 6);
}

#[test]
fn rotation_is_only_used_when_it_helps() {
    let solution = solve_file("upright_bar.txt", &["--rotation"], "rotation");

    assert_eq!(solution.height, 4);
    assert!(!solution.placements[0].is_rotated);
}

#[test]
fn the_packing_can_be_written_to_a_file() {
    let output_path = std::env::temp_dir().join("vlsi-sat-single-row.out");
    let run = run_vlsi_sat(
        instance_path("single_row.txt"),
        [
            "--output".to_owned(),
            output_path.display().to_string(),
        ],
        "output",
    );
    assert!(run.status.success(), "{}", run.stderr);
    assert!(run.stdout.is_empty());

    let written = std::fs::read_to_string(&output_path).expect("the packing was written");
    std::fs::remove_file(output_path).expect("the output file can be removed");
    assert_eq!(written, "10 1\n1\n10 1 0 0\n");
}

#[test]
fn an_exhausted_time_limit_reports_unknown() {
    let run = run_vlsi_sat(
        instance_path("tiling.txt"),
        ["--time-limit".to_owned(), "0".to_owned()],
        "timeout",
    );

    assert!(run.status.success(), "{}", run.stderr);
    assert_eq!(run.stdout.trim(), "UNKNOWN");
}

#[test]
fn statistics_are_logged_on_request() {
    let run = run_vlsi_sat(instance_path("tiling.txt"), ["--log-statistics".to_owned()], "stats");

    assert!(run.status.success(), "{}", run.stderr);
    assert!(run.stderr.contains("search_status=OPTIMAL"), "{}", run.stderr);
    assert!(run.stderr.contains("search_num_probes="), "{}", run.stderr);
}

#[test]
fn invalid_instances_are_rejected() {
    let run = run_vlsi_sat(instance_path("too_wide.txt"), [], "invalid");

    assert!(!run.status.success());
    assert!(run.stderr.contains("exceeds the plate width"), "{}", run.stderr);
}

#[test]
fn malformed_instances_are_rejected() {
    let run = run_vlsi_sat(instance_path("missing_rectangle.txt"), [], "malformed");

    assert!(!run.status.success());
    assert!(run.stdout.is_empty());
}
