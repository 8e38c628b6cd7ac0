use std::io::Write;
use std::sync::{Arc, Mutex};

use guard_cli::{load_settings, logging};
use tempfile::NamedTempFile;
use tracing::Level;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capturing_subscriber() -> (
    Capture,
    impl tracing::Subscriber + Send + Sync + 'static,
    logging::LevelHandle,
) {
    let capture = Capture::default();
    let writer = capture.clone();
    let (subscriber, handle) = logging::subscriber(move || writer.clone());
    (capture, subscriber, handle)
}

#[test]
fn settings_load_is_logged() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"logLevel":"DEBUG","passphraseEnv":"VAULT_KEY"}"#)
        .unwrap();

    let (capture, subscriber, handle) = capturing_subscriber();
    tracing::subscriber::with_default(subscriber, || {
        let settings = load_settings(Some(file.path())).unwrap();
        logging::set_level(&handle, settings.tracing_level().unwrap()).unwrap();
        tracing::debug!("level switched");
    });

    let logs = capture.contents();
    assert!(logs.contains("loaded successfully"), "logs: {}", logs);
    assert!(logs.contains("level switched"), "logs: {}", logs);
}

#[test]
fn settings_load_failure_is_logged() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");

    let (capture, subscriber, _handle) = capturing_subscriber();
    let err = tracing::subscriber::with_default(subscriber, || {
        load_settings(Some(missing.as_path())).unwrap_err()
    });

    assert_eq!(err.code(), "CONFIG_LOAD_ERROR");
    assert!(capture.contents().contains("Error loading configuration"));
}

#[test]
fn debug_events_hidden_until_level_raised() {
    let (capture, subscriber, handle) = capturing_subscriber();
    tracing::subscriber::with_default(subscriber, || {
        tracing::debug!("before switch");
        logging::set_level(&handle, Level::DEBUG).unwrap();
        tracing::debug!("after switch");
    });

    let logs = capture.contents();
    assert!(!logs.contains("before switch"));
    assert!(logs.contains("after switch"));
}
