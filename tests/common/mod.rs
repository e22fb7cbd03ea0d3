//! Shared test infrastructure for integration tests.

#![allow(dead_code)]

use repro_options::Options;
use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Canonical text stored alongside older reproducers.
pub const CANNED_NONE: &str = "{Threaded:true Collide:true Repeat:true Procs:1 Sandbox:none Fault:false FaultCall:-1 FaultNth:0 EnableTun:true UseTmpDir:true HandleSegv:true WaitRepeat:true Debug:false Repro:false}";

/// Same record with an empty sandbox.
pub const CANNED_EMPTY: &str = "{Threaded:true Collide:true Repeat:true Procs:1 Sandbox: Fault:false FaultCall:-1 FaultNth:0 EnableTun:true UseTmpDir:true HandleSegv:true WaitRepeat:true Debug:false Repro:false}";

/// Record both canned strings decode to, apart from the sandbox.
pub fn canned_record(sandbox: &str) -> Options {
    Options {
        threaded: true,
        collide: true,
        repeat: true,
        procs: 1,
        sandbox: sandbox.to_string(),
        fault: false,
        fault_call: -1,
        fault_nth: 0,
        enable_tun: true,
        use_tmp_dir: true,
        handle_segv: true,
        wait_repeat: true,
        debug: false,
        repro: false,
    }
}

/// Run the `reproopts` binary with `args` and optional stdin.
pub fn run_cli(args: &[&str], stdin: Option<&str>) -> Output {
    let bin = env!("CARGO_BIN_EXE_reproopts");
    let mut child = Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn reproopts");
    {
        let mut handle = child.stdin.take().expect("child stdin");
        if let Some(input) = stdin {
            handle
                .write_all(input.as_bytes())
                .expect("write child stdin");
        }
    }
    child.wait_with_output().expect("wait for reproopts")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
