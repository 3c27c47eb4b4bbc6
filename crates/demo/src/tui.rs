//! Terminal demo.
//!
//! `r` re-draws the random number, `i` increments the counter, `q` or `Esc`
//! quits. Logs are written to `demo-tui.log`.
use anyhow::Context as _;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use demo::{DemoConfig, INCREMENT_ID, RANDOMIZE_ID, RootView};
use hoist::{
    context::Context,
    ssr::{Ssr, SsrElement, SsrNode},
    view::{ViewProperties, ViewText},
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
    widgets::{Block, Paragraph},
};

#[derive(Parser)]
struct Cli {
    #[command(flatten)]
    config: DemoConfig,
}

fn key_hint(id: &str) -> Option<char> {
    match id {
        RANDOMIZE_ID => Some('r'),
        INCREMENT_ID => Some('i'),
        _ => None,
    }
}

/// Flatten the view tree into lines, drawing buttons with their key.
fn lines(element: &SsrElement, out: &mut Vec<Line<'static>>) {
    for child in element.children.get().iter() {
        match child {
            SsrNode::Text(text) => out.push(Line::from(text.get_text().to_string()).centered()),
            SsrNode::Element(child) if child.name == "button" => {
                let label = child
                    .text_nodes()
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                let hint = child
                    .get_property("id")
                    .and_then(|id| key_hint(&id))
                    .map(|key| format!(" ({key})"))
                    .unwrap_or_default();
                out.push(Line::from(format!("[ {label} ]{hint}")).centered().bold());
                out.push(Line::default());
            }
            SsrNode::Element(child) => lines(child, out),
        }
    }
}

fn draw(root: &RootView<Ssr>, frame: &mut Frame) {
    let vertical = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]);
    let [title_area, body_area] = vertical.areas(frame.area());

    let title = root.title.get_text();
    frame.render_widget(Line::from(title.as_str()).centered().bold(), title_area);

    let mut body = vec![];
    lines(&root.random_number.wrapper, &mut body);
    let block = Block::bordered().title("q to quit");
    frame.render_widget(Paragraph::new(body).block(block), body_area);
}

fn run(root: &RootView<Ssr>, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| draw(root, frame))?;
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Char('r') => {
                root.click(RANDOMIZE_ID);
            }
            KeyCode::Char('i') => {
                root.click(INCREMENT_ID);
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                log::info!("quitting");
                return Ok(());
            }
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    simplelog::WriteLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        std::fs::File::create("demo-tui.log").context("could not create demo-tui.log")?,
    )
    .context("could not initialize logging")?;
    log::info!("starting with {:?}", cli.config);

    let root = RootView::<Ssr>::new(&cli.config, &Context::new())?;
    let mut terminal = ratatui::init();
    let result = run(&root, &mut terminal);
    ratatui::restore();
    result
}
