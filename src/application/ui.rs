use std::io;
use std::path;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::Event as CrosstermEvent;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::Backend;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::CloseDecision;
use crate::domain::models::EditingSurface;
use crate::domain::models::StylePicker;
use crate::domain::services::AppState;
use crate::infrastructure::clipboards::SystemClipboard;
use crate::infrastructure::dialogs::about;
use crate::infrastructure::dialogs::TuiDialogs;
use crate::infrastructure::storage::DiskStore;

async fn start_loop<B: Backend + Send>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
) -> Result<()> {
    let mut clipboard = SystemClipboard::default();

    loop {
        terminal.draw(|frame| {
            app_state.render(frame);
        })?;

        match crossterm::event::read()? {
            // Bracketed terminal pastes carry no formatting and read as
            // typed text.
            CrosstermEvent::Paste(text) => {
                if app_state.surface.insert_text(&text) {
                    app_state.document.on_content_changed();
                }
            }
            event => match event.into() {
                Input {
                    key: Key::Char('q'),
                    ctrl: true,
                    ..
                } => {
                    let mut dialogs = TuiDialogs::new(terminal);
                    let decision = app_state
                        .document
                        .request_close(&mut app_state.surface, &mut dialogs)
                        .await?;
                    match decision {
                        CloseDecision::Close => break,
                        CloseDecision::Stay => app_state.set_status("Quit cancelled"),
                    }
                }
                Input {
                    key: Key::Char('n'),
                    ctrl: true,
                    ..
                } => {
                    let mut dialogs = TuiDialogs::new(terminal);
                    let outcome = app_state
                        .document
                        .request_new(&mut app_state.surface, &mut dialogs)
                        .await?;
                    app_state.report_flow(outcome, "New document");
                }
                Input {
                    key: Key::Char('o'),
                    ctrl: true,
                    ..
                } => {
                    let mut dialogs = TuiDialogs::new(terminal);
                    let outcome = app_state
                        .document
                        .request_open(&mut app_state.surface, &mut dialogs)
                        .await?;
                    let name = app_state.document.session().display_name();
                    app_state.report_flow(outcome, &format!("Opened {name}"));
                }
                Input {
                    key: Key::Char('s'),
                    ctrl: true,
                    ..
                } => {
                    let snapshot = app_state.surface.export_markup();
                    let mut dialogs = TuiDialogs::new(terminal);
                    let outcome = app_state.document.save(&snapshot, &mut dialogs).await?;
                    app_state.report_save(outcome);
                }
                Input {
                    key: Key::Char('s'),
                    alt: true,
                    ..
                } => {
                    let snapshot = app_state.surface.export_markup();
                    let mut dialogs = TuiDialogs::new(terminal);
                    let outcome = app_state.document.save_as(&snapshot, &mut dialogs).await?;
                    app_state.report_save(outcome);
                }
                Input {
                    key: Key::Char('c'),
                    ctrl: true,
                    ..
                } => match app_state
                    .document
                    .copy_selection(&app_state.surface, &mut clipboard)
                {
                    Ok(true) => app_state.set_status("Copied selection"),
                    Ok(false) => app_state.set_status("Nothing selected"),
                    Err(err) => {
                        tracing::warn!(err = ?err, "clipboard copy failed");
                        app_state.set_status("Clipboard unavailable");
                    }
                },
                Input {
                    key: Key::Char('x'),
                    ctrl: true,
                    ..
                } => match app_state
                    .document
                    .cut_selection(&mut app_state.surface, &mut clipboard)
                {
                    Ok(true) => app_state.set_status("Cut selection"),
                    Ok(false) => app_state.set_status("Nothing selected"),
                    Err(err) => {
                        tracing::warn!(err = ?err, "clipboard cut failed");
                        app_state.set_status("Clipboard unavailable");
                    }
                },
                Input {
                    key: Key::Char('v'),
                    ctrl: true,
                    ..
                } => match app_state
                    .document
                    .paste_clipboard(&mut app_state.surface, &mut clipboard)
                {
                    Ok(true) => app_state.set_status("Pasted"),
                    Ok(false) => app_state.set_status("Clipboard has no formatted text"),
                    Err(err) => {
                        tracing::warn!(err = ?err, "clipboard paste failed");
                        app_state.set_status("Clipboard unavailable");
                    }
                },
                Input {
                    key: Key::Char('k'),
                    alt: true,
                    ..
                } => {
                    let mut dialogs = TuiDialogs::new(terminal);
                    if let Some(color) = dialogs.pick_color().await? {
                        app_state.surface.set_color(color);
                        app_state.document.on_content_changed();
                        tracing::debug!(style = ?app_state.surface.style(), "style changed");
                    }
                }
                Input {
                    key: Key::Char('e'),
                    alt: true,
                    ..
                } => {
                    let mut dialogs = TuiDialogs::new(terminal);
                    if let Some(choice) = dialogs.pick_emphasis().await? {
                        app_state.surface.set_emphasis(choice);
                        app_state.document.on_content_changed();
                        tracing::debug!(style = ?app_state.surface.style(), "style changed");
                    }
                }
                Input { key: Key::F(1), .. } => {
                    about::show(terminal)?;
                }
                input => {
                    if app_state.surface.input(input) {
                        app_state.document.on_content_changed();
                    }
                }
            },
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let mut app_state = AppState::new(Box::<DiskStore>::default());

    let startup_file = Config::get(ConfigKey::File);
    if !startup_file.is_empty() {
        let outcome = app_state
            .document
            .open_from(path::PathBuf::from(&startup_file), &mut app_state.surface)
            .await;
        let name = app_state.document.session().display_name();
        app_state.report_flow(outcome, &format!("Opened {name}"));
    }

    start_loop(&mut terminal, &mut app_state).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
