use std::sync::atomic::{AtomicBool, Ordering};

use grammar_validator::context::Environment;
use grammar_validator::status::ExitStatus;
use grammar_validator::{launcher, signals, telemetry};

/// Entry point - catches Ctrl+C and hands the process to the launcher
///
/// Returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    ctrlc::set_handler(move || {
        signals::set_interrupted();

        eprintln!("\nInterrupted");

        // Second Ctrl+C forces exit
        static SECOND_CTRL_C: AtomicBool = AtomicBool::new(false);
        if SECOND_CTRL_C.swap(true, Ordering::SeqCst) {
            std::process::exit(ExitStatus::Interrupted as i32);
        }
    })
    .ok();

    telemetry::init_tracing("warn");

    let args: Vec<String> = std::env::args().collect();
    let env = Environment::init();

    let status = launcher::launch(args, env);

    if signals::was_interrupted() {
        return ExitStatus::Interrupted;
    }

    status
}
