//! toctree: A searchable, collapsible table of contents for documentation trees.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use toctree::{app_state, config, error::TocError, input, location::Location, ui};
use tracing::Level;

#[derive(Parser)]
#[command(name = "toctree")]
#[command(about = "Searchable, collapsible table of contents for documentation trees", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
struct Args {
    /// JSON file holding the section tree
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Initial search term
    #[arg(long, short = 's', default_value = "")]
    search: String,

    /// Page path of the current location
    #[arg(long)]
    pathname: Option<String>,

    /// Fragment of the current location, including '#'
    #[arg(long, default_value = "")]
    hash: String,

    /// Address items with router links instead of anchors
    #[arg(long)]
    router_links: bool,

    /// Render every section expanded
    #[arg(long)]
    no_collapse: bool,

    /// Print the annotated tree as JSON instead of opening the viewer
    #[arg(long)]
    print: bool,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<(), TocError> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_target(args.verbose)
        .with_writer(io::stderr)
        .init();

    let mut cfg = config::Config::load();

    // Override config with command line args
    if args.router_links {
        cfg.use_router_links = true;
    }
    if args.no_collapse {
        cfg.collapsible_sections = false;
    }
    if let Some(pathname) = args.pathname {
        cfg.pathname = pathname;
    }

    let sections = input::read_sections(&args.path)?;
    tracing::debug!(roots = sections.len(), path = %args.path.display(), "loaded sections");

    let location = Location::new(cfg.pathname.clone(), args.hash);
    let mut state = app_state::AppState::new(sections, cfg.toc_options(), location);

    if !args.search.is_empty() {
        state.search_term = args.search;
        state.refresh();
    }

    if args.print {
        let json = serde_json::to_string_pretty(state.contents())?;
        println!("{json}");
        return Ok(());
    }

    run_tui(state)?;
    Ok(())
}

fn run_tui(mut app: app_state::AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    } else {
        println!("{}{}", app.location.pathname, app.location.hash);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.current_view {
            app_state::View::List => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('/') => {
                    app.current_view = app_state::View::Search;
                    app.message = None;
                }
                KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
                KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
                KeyCode::Home => app.cursor_first(),
                KeyCode::End => app.cursor_last(),
                KeyCode::Char(' ') | KeyCode::Right | KeyCode::Char('l') => app.toggle_current(),
                KeyCode::Left | KeyCode::Char('h') => app.collapse_current(),
                KeyCode::Enter => app.navigate_current(),
                KeyCode::Esc => app.clear_search(),
                _ => {}
            },
            app_state::View::Search => match key.code {
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.clear_search();
                }
                KeyCode::Char(c) => app.push_search_char(c),
                KeyCode::Backspace => app.pop_search_char(),
                KeyCode::Enter | KeyCode::Esc => {
                    app.current_view = app_state::View::List;
                }
                KeyCode::Up => app.cursor_up(),
                KeyCode::Down => app.cursor_down(),
                _ => {}
            },
        }
    }
}
