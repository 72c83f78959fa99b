//! Integration tests for the power service driven through the mock vendor engine

use mtk_power_hal::mock::{HintCall, MockHints};
use mtk_power_hal::types::{Boost, Mode};
use mtk_power_hal::{Power, PowerService};
use std::sync::Arc;

/// Console logging for test runs, honoring RUST_LOG
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_ansi(false))
        .try_init();
}

/// Service wired to a recording vendor engine, init record dropped
fn power_under_test() -> (Arc<MockHints>, PowerService) {
    init_logging();

    let hints = Arc::new(MockHints::new());
    let service = PowerService::new(hints.clone());
    hints.clear();

    (hints, service)
}

fn pid() -> i32 {
    nix::unistd::getpid().as_raw()
}

#[test]
fn test_vendor_engine_initialized_before_first_request() {
    init_logging();

    let hints = Arc::new(MockHints::new());
    let _service = PowerService::new(hints.clone());

    assert_eq!(hints.calls(), vec![HintCall::Init { mode: 1 }]);
}

#[test]
fn test_framework_bring_up_sequence() {
    let (hints, service) = power_under_test();

    // The framework probes the support surface before sending traffic
    for mode in Mode::all() {
        assert!(service.is_mode_supported(*mode).unwrap());
    }
    for boost in Boost::all() {
        assert!(service.is_boost_supported(*boost).unwrap());
    }
    assert!(hints.calls().is_empty());

    // Screen on, app launch, interaction, launch done
    service.set_mode(Mode::INTERACTIVE, true).unwrap();
    service.set_mode(Mode::LAUNCH, true).unwrap();
    service.set_boost(Boost::INTERACTION, 0).unwrap();
    service.set_mode(Mode::LAUNCH, false).unwrap();

    assert_eq!(
        hints.calls(),
        vec![
            HintCall::RestoreAll,
            HintCall::Acquire { hint: 11, duration_ms: 30000, pid: pid() },
            HintCall::Acquire { hint: 0, duration_ms: 80, pid: pid() },
            HintCall::Release { handle: 1 },
        ]
    );
}

#[test]
fn test_screen_off_then_on_round_trip() {
    let (hints, service) = power_under_test();

    service.set_mode(Mode::INTERACTIVE, false).unwrap();
    service.set_mode(Mode::INTERACTIVE, true).unwrap();

    assert_eq!(hints.calls(), vec![HintCall::DisableAll, HintCall::RestoreAll]);
}

#[test]
fn test_low_power_gates_launch_and_boosts() {
    let (hints, service) = power_under_test();

    service.set_mode(Mode::LAUNCH, true).unwrap();
    service.set_mode(Mode::LOW_POWER, true).unwrap();

    // The held launch lock is still dropped, but nothing new is taken
    service.set_mode(Mode::LAUNCH, true).unwrap();
    service.set_boost(Boost::INTERACTION, 100).unwrap();
    service.set_boost(Boost::CAMERA_SHOT, 500).unwrap();

    // Leaving low power restores normal service
    service.set_mode(Mode::LOW_POWER, false).unwrap();
    service.set_boost(Boost::INTERACTION, 100).unwrap();

    assert_eq!(
        hints.calls(),
        vec![
            HintCall::Acquire { hint: 11, duration_ms: 30000, pid: pid() },
            HintCall::Release { handle: 1 },
            HintCall::Acquire { hint: 0, duration_ms: 100, pid: pid() },
        ]
    );
}

#[test]
fn test_concurrent_launches_hold_at_most_one_lock() {
    let (hints, service) = power_under_test();
    let service = Arc::new(service);

    let mut workers = Vec::new();
    for _ in 0..8 {
        let service = Arc::clone(&service);
        workers.push(std::thread::spawn(move || {
            for _ in 0..10 {
                service.set_mode(Mode::LAUNCH, true).unwrap();
            }
        }));
    }
    for worker in workers {
        worker.join().unwrap();
    }

    // Every new launch lock must be preceded by the release of the previous
    // one, regardless of thread interleaving
    let calls = hints.calls();
    assert_eq!(calls.len(), 2 * 80 - 1);

    for (i, call) in calls.iter().enumerate() {
        if i % 2 == 0 {
            assert!(
                matches!(call, HintCall::Acquire { hint: 11, .. }),
                "call {} should be a launch acquire: {:?}",
                i,
                call
            );
        } else {
            let handle = (i as i32 + 1) / 2;
            assert_eq!(*call, HintCall::Release { handle }, "call {} out of order", i);
        }
    }
}

#[test]
fn test_hint_session_surface_reports_unsupported() {
    let (_hints, service) = power_under_test();
    let service: &dyn Power = &service;

    let err = service
        .create_hint_session(1000, 10010, &[1001, 1002], 16_666_666)
        .unwrap_err();
    assert!(err.is_unsupported());

    let err = service.get_hint_session_preferred_rate().unwrap_err();
    assert!(err.is_unsupported());
}

#[test]
fn test_undeclared_values_are_answered_not_errored() {
    let (hints, service) = power_under_test();

    assert!(!service.is_mode_supported(Mode(100)).unwrap());
    assert!(!service.is_boost_supported(Boost(100)).unwrap());

    // An undeclared mode toggle is accepted and ignored
    service.set_mode(Mode(100), true).unwrap();
    assert!(hints.calls().is_empty());

    // An undeclared boost is passed straight to the vendor, like the
    // declared ones outside the handled set
    service.set_boost(Boost(100), 50).unwrap();
    assert_eq!(
        hints.calls(),
        vec![HintCall::Acquire { hint: 100, duration_ms: 50, pid: pid() }]
    );
}
