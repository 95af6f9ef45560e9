//! Shared utilities of the integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use vlsi_sat::encoders::PackingEncoding;
use vlsi_sat::engine::Assignment;
use vlsi_sat::engine::BundledEngine;
use vlsi_sat::engine::EngineOutcome;
use vlsi_sat::engine::SatEngine;
use vlsi_sat::model::Instance;
use vlsi_sat::model::Rectangle;
use vlsi_sat::optimisation::optimise;
use vlsi_sat::optimisation::OptimisationReport;
use vlsi_sat::optimisation::OptimiserOptions;
use vlsi_sat::solver::termination::Indefinite;
use vlsi_sat::solver::SatOptions;
use wait_timeout::ChildExt;

pub(crate) fn instance(plate_width: i32, dimensions: &[(i32, i32)]) -> Instance {
    Instance::new(
        plate_width,
        dimensions
            .iter()
            .map(|&(width, height)| Rectangle::new(width, height))
            .collect(),
    )
}

pub(crate) fn bundled_engine() -> BundledEngine<Indefinite> {
    BundledEngine::new(SatOptions::default())
}

pub(crate) fn optimise_with(instance: &Instance, options: &OptimiserOptions) -> OptimisationReport {
    optimise(instance, options, bundled_engine).expect("the instance is valid")
}

/// Solves the formula of `encoding` without a time limit.
pub(crate) fn solve(encoding: &PackingEncoding) -> Option<Assignment> {
    let mut engine = bundled_engine();
    encoding.formula().load_into(&mut engine);

    match engine.solve(None) {
        EngineOutcome::Sat(assignment) => Some(assignment),
        EngineOutcome::Unsat => None,
        EngineOutcome::Unknown(reason) => panic!("an unlimited solve gave up: {reason}"),
    }
}

pub(crate) fn instance_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("instances")
        .join(name)
}

#[derive(Debug)]
pub(crate) struct Run {
    pub(crate) status: ExitStatus,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

/// Runs the binary on `instance_path`; `prefix` keeps the output files of runs on the same
/// instance apart.
pub(crate) fn run_vlsi_sat(
    instance_path: impl AsRef<Path>,
    args: impl IntoIterator<Item = String>,
    prefix: &str,
) -> Run {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let instance_path = instance_path.as_ref();
    let binary = PathBuf::from(env!("CARGO_BIN_EXE_vlsi-sat"));

    let log_file_path = instance_path.with_extension(format!("{prefix}.log"));
    let err_file_path = instance_path.with_extension(format!("{prefix}.err"));

    let mut command = Command::new(binary);
    for arg in args {
        let _ = command.arg(arg);
    }

    let mut child = command
        .arg(instance_path)
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(File::create(&err_file_path).expect("Failed to create error file."))
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run vlsi-sat.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("vlsi-sat took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting vlsi-sat: {e}"),
    };

    let stdout = std::fs::read_to_string(&log_file_path).expect("the log file exists");
    let stderr = std::fs::read_to_string(&err_file_path).expect("the error file exists");
    std::fs::remove_file(log_file_path).expect("the log file can be removed");
    std::fs::remove_file(err_file_path).expect("the error file can be removed");

    Run {
        status,
        stdout,
        stderr,
    }
}
