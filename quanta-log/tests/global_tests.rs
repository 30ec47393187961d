use quanta_core::Error;
use quanta_log::{LogProfile, Logger};

#[test]
fn test_install_global_only_once() {
    let first = Logger::with_writer(LogProfile::Production, std::io::sink);
    first.install_global().unwrap();

    let second = Logger::new(LogProfile::Development);
    let err = second.install_global().unwrap_err();
    assert!(matches!(err, Error::Logging { .. }));
}
