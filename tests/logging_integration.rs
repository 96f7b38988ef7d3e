use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use assert_fs::prelude::*;
use fn_clean::RenameEngine;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt as tsfmt, registry};

/// Appends written bytes into a shared in-memory buffer.
#[derive(Clone)]
struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a scoped subscriber at `level`, returning captured output.
fn capture(level: LevelFilter, json: bool, f: impl FnOnce()) -> String {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let make_writer = {
        let buf = buf.clone();
        move || BufferWriter(buf.clone())
    };
    let filter = EnvFilter::default().add_directive(level.into());

    let dispatch = if json {
        let layer = tsfmt::layer()
            .event_format(tsfmt::format().json())
            .with_writer(make_writer);
        tracing::Dispatch::new(registry().with(filter).with(layer))
    } else {
        let layer = tsfmt::layer()
            .with_writer(make_writer)
            .with_ansi(false)
            .compact();
        tracing::Dispatch::new(registry().with(filter).with(layer))
    };
    tracing::dispatcher::with_default(&dispatch, f);

    let guard = buf.lock().unwrap();
    String::from_utf8_lossy(&guard[..]).into_owned()
}

#[test]
fn skipped_directory_is_logged_only_at_debug() {
    let dir = assert_fs::TempDir::new().unwrap();
    let sub = dir.child("a dir");
    sub.create_dir_all().unwrap();

    let normal = capture(LevelFilter::INFO, false, || {
        RenameEngine::default().run([sub.path()], |_| {});
    });
    assert!(!normal.contains("skipping"), "normal: {normal}");
    assert!(normal.contains("batch finished"), "normal: {normal}");

    let verbose = capture(LevelFilter::DEBUG, false, || {
        RenameEngine::default().run([sub.path()], |_| {});
    });
    assert!(verbose.contains("skipping: not a regular file"), "verbose: {verbose}");
    assert!(verbose.contains("directory"), "verbose: {verbose}");
}

#[test]
fn rename_event_carries_structured_fields() {
    let dir = assert_fs::TempDir::new().unwrap();
    let f = dir.child("m n.txt");
    f.touch().unwrap();

    let out = capture(LevelFilter::INFO, true, || {
        RenameEngine::default().run([f.path()], |_| {});
    });
    let event = out
        .lines()
        .map(|l| serde_json::from_str::<serde_json::Value>(l).expect("valid JSON line"))
        .find(|v| v["fields"]["message"] == "renamed")
        .expect("renamed event");
    let dest = dir.path().join("m_n.txt");
    assert_eq!(event["fields"]["dest"], dest.display().to_string());
}
