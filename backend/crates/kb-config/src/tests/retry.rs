use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok, some};
use serial_test::serial;

#[test]
#[serial]
fn given_max_attempts_zero_when_validate_then_error() {
    let (_temp, _guard) = setup_config_dir();
    let _attempts = EnvGuard::set("KB_RETRY_MAX_ATTEMPTS", "0");

    let config = Config::load().unwrap();

    let error = config.validate().unwrap_err();
    assert_that!(error.section(), some(eq("retry")));
}

#[test]
#[serial]
fn given_max_delay_below_initial_when_validate_then_error() {
    let (_temp, _guard) = setup_config_dir();
    let _initial = EnvGuard::set("KB_RETRY_INITIAL_DELAY_MS", "500");
    let _max = EnvGuard::set("KB_RETRY_MAX_DELAY_MS", "100");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_backoff_multiplier_below_min_when_validate_then_error() {
    let (_temp, _guard) = setup_config_dir();
    let _multiplier = EnvGuard::set("KB_RETRY_BACKOFF_MULTIPLIER", "0.5");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_valid_retry_config_when_validate_then_ok() {
    let (_temp, _guard) = setup_config_dir();
    let _attempts = EnvGuard::set("KB_RETRY_MAX_ATTEMPTS", "5");
    let _delay = EnvGuard::set("KB_RETRY_INITIAL_DELAY_MS", "200");
    let _multiplier = EnvGuard::set("KB_RETRY_BACKOFF_MULTIPLIER", "3.0");
    let _jitter = EnvGuard::set("KB_RETRY_JITTER", "0");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), ok(anything()));
    assert!(!config.retry.jitter);
}
