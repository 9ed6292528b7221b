//! Each demo emits its full fixed sequence, line for line, and never
//! errors: the one illustrated failure is caught inside the LSP lesson.

use fivefold::demo;

mod common;
use common::collect;

#[test]
fn dip_demo_sequence() {
    assert_eq!(
        collect(demo::dip::run),
        vec![
            "Problematic Code with Direct Dependency:",
            "LightBulb is turned on.",
            "",
            "Corrected Code with Dependency Inversion:",
            "LightBulb is turned on.",
            "Fan is turned on.",
        ]
    );
}

#[test]
fn ocp_demo_sequence() {
    assert_eq!(
        collect(demo::ocp::run),
        vec![
            "Problematic Code with Kind-Keyed Dispatch:",
            "CreditCard payment processed.",
            "PayPal payment processed.",
            "",
            "Corrected Code with Capability Dispatch:",
            "CreditCard payment processed.",
            "PayPal payment processed.",
            "Voucher payment processed.",
        ]
    );
}

#[test]
fn lsp_demo_sequence() {
    assert_eq!(
        collect(demo::lsp::run),
        vec![
            "Problematic Code with a Flying Contract:",
            "Flying",
            "Ostriches can't fly",
            "",
            "Corrected Code with a Movement Contract:",
            "Flying",
            "Running",
        ]
    );
}

#[test]
fn isp_demo_sequence() {
    assert_eq!(
        collect(demo::isp::run),
        vec![
            "Problematic Code with a Monolithic Contract:",
            "Robot is working.",
            "Robot pretends to eat.",
            "",
            "Corrected Code with Segregated Contracts:",
            "HumanWorker is working.",
            "HumanWorker is eating.",
            "Robot is working.",
        ]
    );
}

#[test]
fn srp_demo_sequence() {
    assert_eq!(
        collect(demo::srp::run),
        vec![
            "Problematic Code with Two Responsibilities:",
            "User ada added.",
            "Email \"Welcome\" sent to ada.",
            "",
            "Corrected Code with One Responsibility Each:",
            "User ada added.",
            "Email \"Welcome\" sent to ada.",
        ]
    );
}

#[test]
fn demos_are_repeatable() {
    // Nothing holds state between runs.
    assert_eq!(collect(demo::lsp::run), collect(demo::lsp::run));
}
