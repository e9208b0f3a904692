//! Interactive walk-through of a spotlight mounted on an in-memory page.
//!
//! Keys: space toggles, c clicks close, t ends the content transition,
//! a ends the body animation, j/k scroll, q quits.
//! Pass a JSON config path as the first argument to override defaults.

use std::fs::File;
use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};
use spotlight::{Dom, Element, Event, Outcome, Page, Spotlight, SpotlightConfig, ToggleState};

const NATURAL_HEIGHT: f64 = 640.0;
const CSS_CEILING: f64 = 500.0;

fn page(config: &SpotlightConfig) -> Page {
    Page::new(
        Element::block()
            .id(config.body_id.clone())
            .child(Element::checkbox().id(config.control_id.clone()).top(40.0).height(48.0))
            .child(
                Element::block()
                    .id(config.content_id.clone())
                    .top(100.0)
                    .height(0.0)
                    .content_height(NATURAL_HEIGHT),
            )
            .child(
                Element::button()
                    .id(config.close_id.clone())
                    .class(config.hidden_class.clone())
                    .top(100.0 + NATURAL_HEIGHT)
                    .height(40.0),
            ),
    )
    .viewport_height(480.0)
}

fn load_config() -> io::Result<SpotlightConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(SpotlightConfig::default());
    };
    let json = std::fs::read_to_string(path)?;
    SpotlightConfig::from_json(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn draw(out: &mut impl Write, spotlight: &Spotlight<Page>, last: &str) -> io::Result<()> {
    let config = spotlight.config();
    let dom = spotlight.dom();
    let style = |id: &str, prop: &str| {
        dom.style(id, prop)
            .ok()
            .flatten()
            .unwrap_or_else(|| "-".to_string())
    };

    let lines = [
        format!("state          {:?}", spotlight.state()),
        format!(
            "{}  {}",
            config.expanded_attribute,
            dom.attribute(&config.control_id, &config.expanded_attribute)
                .ok()
                .flatten()
                .unwrap_or_default()
        ),
        format!("checked        {}", dom.is_checked(&config.control_id).unwrap_or(false)),
        format!("scroll         {}", dom.scroll_y()),
        format!("max-height     {}", style(&config.content_id, "max-height")),
        format!("body transform {}", style(&config.body_id, "transform")),
        format!("focused        {}", dom.focused().unwrap_or("-")),
        format!("pending waits  {}", spotlight.pending()),
        String::new(),
        format!("last: {last}"),
    ];

    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print("spotlight demo\r\n"),
        SetAttribute(Attribute::Reset),
        Print("space toggle  c close  t transitionend  a animationend  j/k scroll  q quit\r\n\r\n"),
    )?;
    for line in lines {
        queue!(out, Print(line), Print("\r\n"))?;
    }
    out.flush()
}

fn describe(outcome: spotlight::DomResult<Outcome>) -> String {
    match outcome {
        Ok(Outcome::Toggled {
            state,
            compensation: Some(s),
        }) => format!("{state:?}, compensated {}px", s.compensation_delta),
        Ok(other) => format!("{other:?}"),
        Err(e) => format!("error: {e}"),
    }
}

fn run(out: &mut impl Write, mut spotlight: Spotlight<Page>) -> io::Result<()> {
    let config = spotlight.config().clone();
    let mut last = String::from("mounted");

    loop {
        draw(out, &spotlight, &last)?;

        let CrosstermEvent::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        last = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Char(' ') => click(&mut spotlight, &config.control_id),
            KeyCode::Char('c') => click(&mut spotlight, &config.close_id),
            KeyCode::Char('t') => {
                // Pretend the stylesheet finished animating max-height
                let settled = match spotlight.state() {
                    ToggleState::Expanded => CSS_CEILING,
                    ToggleState::Collapsed => 0.0,
                };
                let _ = spotlight.dom_mut().settle_height(&config.content_id, settled);
                describe(spotlight.handle(&Event::transition_end(config.content_id.clone())))
            }
            KeyCode::Char('a') => {
                describe(spotlight.handle(&Event::animation_end(config.body_id.clone())))
            }
            KeyCode::Char('j') => scroll_by(&mut spotlight, 100.0),
            KeyCode::Char('k') => scroll_by(&mut spotlight, -100.0),
            _ => continue,
        };
    }
}

fn click(spotlight: &mut Spotlight<Page>, id: &str) -> String {
    match spotlight.dom_mut().click(id) {
        Ok(event) => describe(spotlight.handle(&event)),
        Err(e) => format!("error: {e}"),
    }
}

fn scroll_by(spotlight: &mut Spotlight<Page>, dy: f64) -> String {
    let y = spotlight.dom().scroll_y() + dy;
    spotlight.dom_mut().scroll_to(y);
    format!("scrolled to {}", spotlight.dom().scroll_y())
}

fn main() -> io::Result<()> {
    let log_file = File::create("spotlight-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = load_config()?;
    let spotlight = Spotlight::mount(page(&config), config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut stdout, spotlight);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}
