use std::fs::File;

use crossterm::event::{Event as CrosstermEvent, KeyCode};
use scrollview::{Color, InputMap, Label, Rect, ScrollView, Style, Terminal, ViewEvent};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    // TUI owns the screen; log to a file instead.
    let log_file = File::create("labels.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let (width, height) = term.size();

    let mut view = ScrollView::new(width, height);
    view.add_child(Label::new("Label Demo - wheel/click/drag the scrollbar, q=quit").style(Style::new().bold()));
    view.add_child(Label::new(""));
    for i in 1..=50 {
        view.add_child(list_label(i));
    }

    let mut input = InputMap::new(Rect::from_size(width, height));

    loop {
        term.draw(&view, input.rect())?;

        for raw in term.poll(None)? {
            match raw {
                CrosstermEvent::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Up => {
                        view.scroll_by(-1);
                    }
                    KeyCode::Down => {
                        view.scroll_by(1);
                    }
                    KeyCode::PageUp => {
                        view.scroll_by(-(view.viewport_size().1 as i16));
                    }
                    KeyCode::PageDown => {
                        view.scroll_by(view.viewport_size().1 as i16);
                    }
                    _ => {}
                },
                CrosstermEvent::Resize(w, h) => {
                    input.set_rect(Rect::from_size(w, h));
                    view.handle(&ViewEvent::ViewportResized {
                        width: w,
                        height: h,
                    });
                }
                raw => {
                    if let Some(event) = input.map(&raw, &view) {
                        view.handle(&event);
                    }
                }
            }
        }
    }
}

fn list_label(n: u32) -> Label {
    let hue = (n as f32 * 18.0) % 360.0;
    Label::new(format!("Label {n}"))
        .style(Style::new().background(Color::oklch(0.35, 0.08, hue)))
}
