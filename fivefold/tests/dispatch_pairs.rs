//! Every legitimate dispatcher/variant pair produces exactly its fixed
//! line, with no error and no state change between invocations.

use fivefold::birds::{Locomote, Ostrich};
use fivefold::devices::{Fan, LightBulb, TurnOn, switch};
use fivefold::payments::{Charge, CreditCard, PayPal};
use fivefold::workers::{Feed, HumanWorker, Robot, Work};
use fivefold::{Capability, Dispatcher};
use fivefold::testing::RecordingSink;

mod common;
use common::Siren;

#[test]
fn each_pair_produces_its_fixed_line() {
    assert_eq!(
        switch(LightBulb).operate().unwrap().as_str(),
        "LightBulb is turned on."
    );
    assert_eq!(switch(Fan).operate().unwrap().as_str(), "Fan is turned on.");
    assert_eq!(
        Dispatcher::new(Charge(CreditCard)).operate().unwrap().as_str(),
        "CreditCard payment processed."
    );
    assert_eq!(
        Dispatcher::new(Charge(PayPal)).operate().unwrap().as_str(),
        "PayPal payment processed."
    );
    assert_eq!(
        Dispatcher::new(Work(HumanWorker)).operate().unwrap().as_str(),
        "HumanWorker is working."
    );
    assert_eq!(
        Dispatcher::new(Feed(HumanWorker)).operate().unwrap().as_str(),
        "HumanWorker is eating."
    );
    assert_eq!(
        Dispatcher::new(Work(Robot)).operate().unwrap().as_str(),
        "Robot is working."
    );
    assert_eq!(
        Dispatcher::new(Locomote(Ostrich)).operate().unwrap().as_str(),
        "Running"
    );
}

#[test]
fn operating_twice_produces_the_same_line_twice() {
    let dispatcher = Dispatcher::new(Charge(PayPal));
    let sink = RecordingSink::new();

    dispatcher.operate_into(&sink).unwrap();
    dispatcher.operate_into(&sink).unwrap();

    assert_eq!(
        sink.lines(),
        vec!["PayPal payment processed.", "PayPal payment processed."]
    );
}

#[test]
fn downstream_variants_fit_the_same_dispatcher() {
    let dispatcher = switch(Siren);
    assert_eq!(dispatcher.operate().unwrap().as_str(), "Siren is turned on.");
}

#[test]
fn the_injected_capability_can_be_recovered() {
    let dispatcher = Dispatcher::new(Charge(CreditCard));
    let charge = dispatcher.into_inner();
    assert_eq!(
        charge.invoke().unwrap().as_str(),
        "CreditCard payment processed."
    );
}

#[test]
fn boxed_capabilities_dispatch_through() {
    let boxed: Box<dyn Capability> = Box::new(TurnOn(Fan));
    let dispatcher = Dispatcher::new(boxed);
    assert_eq!(dispatcher.operate().unwrap().as_str(), "Fan is turned on.");
}
