//! Integration tests for the turret controller.
//!
//! These exercise the full path a deployed controller runs: bytes in
//! through the line receiver, command processing, driver dispatch, and
//! response lines out.

use std::io::Cursor;
use std::sync::atomic::AtomicBool;

use turret_common::pwm::PwmChannel;
use turret_control::controller::{RESPONSE_INVALID, TurretController, run_command_loop};
use turret_control::drivers::simulation::{PulseTrace, SimulationPwm};

const BANNER: &str = "Turret servo controller ready\nSend commands as X:<0-180> Y:<0-180>\n";

fn new_controller() -> (TurretController, PulseTrace) {
    let sim = SimulationPwm::new();
    let trace = sim.trace();
    let controller = TurretController::new(Box::new(sim)).unwrap();
    (controller, trace)
}

/// Drive the command loop over an in-memory byte stream and return the
/// full serial output as text.
fn run_session(controller: &mut TurretController, input: &str) -> String {
    let running = AtomicBool::new(true);
    let mut output = Vec::new();
    run_command_loop(
        Cursor::new(input.as_bytes().to_vec()),
        &mut output,
        controller,
        &running,
        true,
    )
    .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn banner_is_written_once_at_startup() {
    let (mut controller, _trace) = new_controller();
    let output = run_session(&mut controller, "");
    assert_eq!(output, BANNER);
}

#[test]
fn tracking_session_end_to_end() {
    let (mut controller, trace) = new_controller();
    let output = run_session(&mut controller, "X:90 Y:45\ngarbage\nX:999 Y:-5\n");

    let expected = format!("{BANNER}OK X:90 Y:45\n{RESPONSE_INVALID}\nOK X:180 Y:0\n");
    assert_eq!(output, expected);

    // Final state reflects the last valid command.
    assert_eq!(controller.positions(), (180, 0));
    assert_eq!(trace.last_pulse(PwmChannel::Pan), Some(2400));
    assert_eq!(trace.last_pulse(PwmChannel::Tilt), Some(600));
}

#[test]
fn valid_command_sets_interpolated_pulses() {
    let (mut controller, trace) = new_controller();
    run_session(&mut controller, "X:90 Y:45\n");

    assert_eq!(trace.last_pulse(PwmChannel::Pan), Some(1500));
    assert_eq!(trace.last_pulse(PwmChannel::Tilt), Some(1050));
}

#[test]
fn malformed_line_causes_no_channel_writes() {
    let (mut controller, trace) = new_controller();
    let writes_after_init = trace.write_count();

    let output = run_session(&mut controller, "garbage\n");
    assert!(output.ends_with(&format!("{RESPONSE_INVALID}\n")));
    assert_eq!(trace.write_count(), writes_after_init);
    assert_eq!(controller.positions(), (90, 90));
}

#[test]
fn repeated_command_is_idempotent() {
    let (mut controller, _trace) = new_controller();
    let output = run_session(&mut controller, "X:30 Y:60\nX:30 Y:60\n");
    assert!(output.ends_with("OK X:30 Y:60\nOK X:30 Y:60\n"));
    assert_eq!(controller.positions(), (30, 60));
}

#[test]
fn crlf_terminated_commands_are_accepted() {
    let (mut controller, _trace) = new_controller();
    let output = run_session(&mut controller, "X:10 Y:20\r\n");
    assert!(output.ends_with("OK X:10 Y:20\n"));
}

#[test]
fn partial_line_without_terminator_is_not_processed() {
    let (mut controller, trace) = new_controller();
    let writes_after_init = trace.write_count();

    let output = run_session(&mut controller, "X:10 Y:2");
    assert_eq!(output, BANNER);
    assert_eq!(trace.write_count(), writes_after_init);
    assert_eq!(controller.positions(), (90, 90));
}

#[test]
fn cleared_running_flag_stops_the_loop() {
    let (mut controller, _trace) = new_controller();
    let running = AtomicBool::new(false);
    let mut output = Vec::new();
    run_command_loop(
        Cursor::new(b"X:10 Y:20\n".to_vec()),
        &mut output,
        &mut controller,
        &running,
        true,
    )
    .unwrap();

    // Banner only; the stopped loop never reads.
    assert_eq!(String::from_utf8(output).unwrap(), BANNER);
    assert_eq!(controller.positions(), (90, 90));
}
