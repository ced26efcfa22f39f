//! Select Demo
//!
//! Two selects over the same options:
//! - single selection, starting at the first option
//! - multiple selection, starting with the first option as a badge
//!
//! Pass a JSON file (`[{"label": "One", "value": 1}, ...]`) as the first
//! argument to replace the built-in options. Click to open, choose and
//! remove; `q` or Escape quits. Logs go to `selectbox.log`.

use std::fs::File;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, KeyCode};
use log::LevelFilter;
use selectbox::{
    load_options, options_from, translate_mouse, Edges, Element, SelectConfig, SelectController,
    SelectOption, SelectValue, Style, Terminal,
};
use simplelog::{Config, WriteLogger};

fn default_options() -> Vec<SelectOption> {
    options_from([
        (1, "One"),
        (2, "Two"),
        (3, "Three"),
        (4, "Four"),
        (5, "Five"),
        (6, "Six"),
        (7, "Seven"),
        (8, "Eight"),
        (9, "Nine"),
        (10, "Ten"),
    ])
}

fn describe(value: &SelectValue) -> String {
    let labels: Vec<&str> = value.selected().iter().map(|o| o.label()).collect();
    if labels.is_empty() {
        "(none)".to_string()
    } else {
        labels.join(", ")
    }
}

fn ui(selects: &[SelectController], values: &[SelectValue]) -> Element {
    let status = format!(
        "Single: {}   Multiple: {}",
        describe(&values[0]),
        describe(&values[1])
    );

    Element::col()
        .padding(Edges::all(1))
        .gap(1)
        .child(Element::text("Select demo - q to quit").style(Style::new().bold()))
        .children(selects.iter().map(SelectController::view))
        .child(Element::text(status))
}

fn main() -> selectbox::Result<()> {
    if let Ok(log_file) = File::create("selectbox.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let options = match std::env::args().nth(1) {
        Some(path) => load_options(path)?,
        None => default_options(),
    };

    // Caller-owned selection state
    let mut values = [
        SelectValue::Single(options.first().cloned()),
        SelectValue::Multiple(options.first().cloned().into_iter().collect()),
    ];

    let (tx, rx) = mpsc::channel::<(usize, SelectValue)>();
    let single_tx = tx.clone();
    let mut selects = [
        SelectController::new(
            SelectConfig::new(options.clone()).placeholder("Pick one"),
            values[0].clone(),
            move |value| {
                let _ = single_tx.send((0, value));
            },
        ),
        SelectController::new(
            SelectConfig::new(options).placeholder("Pick any").width(40),
            values[1].clone(),
            move |value| {
                let _ = tx.send((1, value));
            },
        ),
    ];

    let mut term = Terminal::new()?;

    loop {
        let root = ui(&selects, &values);
        term.render(&root)?;

        for event in term.poll(Duration::from_millis(100))? {
            match event {
                CrosstermEvent::Key(key) => {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        return Ok(());
                    }
                }
                CrosstermEvent::Mouse(mouse) => {
                    if let Some(event) = translate_mouse(&mouse, term.layout(), &root) {
                        for select in selects.iter_mut() {
                            select.dispatch(&root, &event);
                        }
                    }
                }
                _ => {}
            }

            // Store proposals and hand them back before the next event
            for (index, value) in rx.try_iter() {
                log::info!("select {} changed to {}", index, describe(&value));
                values[index] = value.clone();
                selects[index].set_value(value)?;
            }
        }
    }
}
