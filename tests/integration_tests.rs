//! End-to-end tests for assembled decorator chains.

use std::io::{self, Write, empty, sink};
use std::sync::{Arc, Mutex};

use crossterm::Command;
use crossterm::style::{self, ResetColor, SetForegroundColor};
use herald::{BasicUi, Color, ColorUi, ConcurrentUi, PrefixUi, Ui, UiError};

/// Inspectable sink that can be cloned into a chain and read back afterward.
#[derive(Clone, Debug, Default)]
struct SharedSink(Arc<Mutex<Vec<u8>>>);

impl SharedSink {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn fg_escape(color: style::Color) -> String {
    let mut s = String::new();
    SetForegroundColor(color).write_ansi(&mut s).unwrap();
    s
}

fn reset_escape() -> String {
    let mut s = String::new();
    ResetColor.write_ansi(&mut s).unwrap();
    s
}

#[test]
fn full_chain_decorates_and_routes() {
    let normal = SharedSink::default();
    let errors = SharedSink::default();

    let base = BasicUi::new("y\n".as_bytes(), normal.clone(), errors.clone());
    let safe = ConcurrentUi::new(base);
    let colored = ColorUi::new(
        Color::None,
        Color::None,
        Color::Green,
        Color::None,
        Color::None,
        Color::None,
        Color::None,
        safe,
    );
    let ui = PrefixUi::new("", "", "", "[INFO]", "[ERR]", "", "", colored);

    ui.info("starting");
    ui.success("done");
    ui.error("disk full");
    assert_eq!(ui.ask().unwrap(), "y");

    let expected_normal = format!(
        "[INFO] starting\n{}done{}\n",
        fg_escape(style::Color::DarkGreen),
        reset_escape()
    );
    assert_eq!(normal.contents(), expected_normal);
    assert_eq!(errors.contents(), "[ERR] disk full\n");
}

/// Prefix-over-color and color-over-prefix agree byte for byte when the two
/// layers act on different channels. When one channel carries both a prefix
/// and a color the orders nest differently (the prefix lands inside or
/// outside the escape span), which is the documented composition choice.
#[test]
fn wrapper_order_agrees_on_disjoint_channels() {
    let run = |prefix_outer: bool| -> String {
        let normal = SharedSink::default();
        let base = BasicUi::new(empty(), normal.clone(), sink());
        if prefix_outer {
            let colored = ColorUi::new(
                Color::None,
                Color::None,
                Color::Green,
                Color::None,
                Color::None,
                Color::None,
                Color::None,
                base,
            );
            let ui = PrefixUi::new("", "", "", "[INFO]", "", "", "", colored);
            ui.info("starting");
            ui.success("done");
        } else {
            let tagged = PrefixUi::new("", "", "", "[INFO]", "", "", "", base);
            let ui = ColorUi::new(
                Color::None,
                Color::None,
                Color::Green,
                Color::None,
                Color::None,
                Color::None,
                Color::None,
                tagged,
            );
            ui.info("starting");
            ui.success("done");
        }
        normal.contents()
    };

    assert_eq!(run(true), run(false));
}

#[test]
fn concurrency_wrapper_is_content_transparent() {
    let with_lock = SharedSink::default();
    let without_lock = SharedSink::default();

    {
        let ui = PrefixUi::new(
            "",
            "",
            "ok:",
            "",
            "",
            "",
            "",
            ConcurrentUi::new(BasicUi::new(empty(), with_lock.clone(), sink())),
        );
        ui.success("installed");
        ui.log("plain");
    }
    {
        let ui = PrefixUi::new(
            "",
            "",
            "ok:",
            "",
            "",
            "",
            "",
            BasicUi::new(empty(), without_lock.clone(), sink()),
        );
        ui.success("installed");
        ui.log("plain");
    }

    assert_eq!(with_lock.contents(), without_lock.contents());
    assert_eq!(with_lock.contents(), "ok: installed\nplain\n");
}

#[test]
fn boxed_chain_is_assembled_at_runtime() {
    let normal = SharedSink::default();

    let mut ui: Box<dyn Ui> = Box::new(BasicUi::new(empty(), normal.clone(), sink()));
    let want_prefixes = true;
    if want_prefixes {
        ui = Box::new(PrefixUi::new("log:", "", "", "", "", "", "", ui));
    }

    ui.log("boxed");
    ui.output("raw");
    assert_eq!(normal.contents(), "log: boxed\nraw\n");
}

#[test]
fn file_sink_receives_decorated_lines() {
    let file = tempfile::NamedTempFile::new().unwrap();
    {
        let ui = PrefixUi::new(
            "",
            "",
            "",
            "[INFO]",
            "",
            "",
            "",
            BasicUi::new(empty(), file.reopen().unwrap(), sink()),
        );
        ui.info("written to disk");
        ui.log("and this");
    }
    let written = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(written, "[INFO] written to disk\nand this\n");
}

#[test]
fn shared_chain_serializes_full_decoration() {
    const WORKERS: usize = 4;
    const LINES_PER_WORKER: usize = 25;

    let normal = SharedSink::default();
    // Lock outermost: prefix + write is one atomic unit per call.
    let ui = Arc::new(ConcurrentUi::new(PrefixUi::new(
        "worker:",
        "",
        "",
        "",
        "",
        "",
        "",
        BasicUi::new(empty(), normal.clone(), sink()),
    )));

    let handles: Vec<_> = (0..WORKERS)
        .map(|worker| {
            let ui = Arc::clone(&ui);
            std::thread::spawn(move || {
                for line in 0..LINES_PER_WORKER {
                    ui.log(&format!("{worker}-{line}"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let text = normal.contents();
    assert_eq!(text.lines().count(), WORKERS * LINES_PER_WORKER);
    for line in text.lines() {
        let rest = line.strip_prefix("worker: ").expect("prefix missing");
        let (worker, seq) = rest.split_once('-').expect("malformed line");
        assert!(worker.parse::<usize>().unwrap() < WORKERS);
        assert!(seq.parse::<usize>().unwrap() < LINES_PER_WORKER);
    }
}

#[test]
fn ask_failures_pass_through_the_chain() {
    let ui = PrefixUi::new(
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        ColorUi::new(
            Color::None,
            Color::None,
            Color::None,
            Color::None,
            Color::None,
            Color::None,
            Color::None,
            BasicUi::new(empty(), sink(), sink()),
        ),
    );
    assert!(matches!(ui.ask(), Err(UiError::InputClosed)));
}
