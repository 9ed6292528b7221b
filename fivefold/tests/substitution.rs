//! Substituting any conforming variant must not change the dispatcher's
//! code path; a variant that cannot honor a contract fails with exactly
//! its message.

use fivefold::birds::{Fly, FlyingBird, Locomote, Ostrich};
use fivefold::devices::{Device, Fan, LightBulb, switch};
use fivefold::{Capability, CapabilityError, Dispatcher};

// The one dispatch path both devices go through.
fn operate_device<D: Device>(device: D) -> String {
    switch(device).operate().unwrap().as_str().to_owned()
}

#[test]
fn the_same_switch_path_serves_both_devices() {
    assert_eq!(operate_device(LightBulb), "LightBulb is turned on.");
    assert_eq!(operate_device(Fan), "Fan is turned on.");
}

#[test]
fn flightless_variant_fails_the_flying_contract_with_its_exact_message() {
    let err = Dispatcher::new(Fly(Ostrich)).operate().unwrap_err();
    assert!(matches!(err, CapabilityError::Unsupported(_)));
    assert_eq!(err.to_string(), "Ostriches can't fly");
}

#[test]
fn flying_variant_honors_the_flying_contract() {
    assert_eq!(
        Dispatcher::new(Fly(FlyingBird)).operate().unwrap().as_str(),
        "Flying"
    );
}

#[test]
fn the_movement_contract_holds_for_every_bird() {
    // Corrected design: both variants substitute cleanly.
    let birds: Vec<Box<dyn Capability>> =
        vec![Box::new(Locomote(FlyingBird)), Box::new(Locomote(Ostrich))];
    let lines: Vec<String> = birds
        .iter()
        .map(|bird| bird.invoke().unwrap().as_str().to_owned())
        .collect();
    assert_eq!(lines, vec!["Flying", "Running"]);
}
