use std::io::{self, IsTerminal, Stdout, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;

use glide_core::{AppConfig, ContentSource};
use glide_tui::{
    app::App,
    content::{parse_content, ContentOptions},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    load_theme,
    scroll::ScrollConfigExt,
    ui,
};

type PagerTerminal = Terminal<CrosstermBackend<Stdout>>;

pub fn run(config: Arc<AppConfig>, source: ContentSource, width: Option<usize>) -> Result<()> {
    let bytes = source
        .read()
        .with_context(|| format!("Failed to read {}", source))?;

    let options = ContentOptions {
        width,
        tab_width: config.ui.tab_width,
    };

    // Nothing to page through when output is not a terminal
    if !io::stdout().is_terminal() {
        return copy_through(&bytes, options, &mut io::stdout().lock());
    }

    let content = parse_content(&bytes, options)?;
    info!(
        "Paging {} ({} lines, width {})",
        source,
        content.height(),
        content.width()
    );

    let keymap = Keymap::from_config(&config.keymap);
    let theme = load_theme(&config.ui.theme);
    let events = EventHandler::new(
        Duration::from_millis(config.ui.tick_rate_ms),
        config.ui.scroll.animation_tick_duration(),
    );
    let mut app = App::new(content, source.display_name(), config, theme);

    let mut terminal = init_terminal(&app.title)?;
    let result = event_loop(&mut terminal, &mut app, &keymap, &events);
    restore_terminal(&mut terminal)?;
    result
}

/// Write the input unchanged, after the same validation the pager applies
fn copy_through<W: Write>(bytes: &[u8], options: ContentOptions, out: &mut W) -> Result<()> {
    parse_content(bytes, options)?;
    out.write_all(bytes)?;
    out.flush()?;
    Ok(())
}

fn event_loop(
    terminal: &mut PagerTerminal,
    app: &mut App,
    keymap: &Keymap,
    events: &EventHandler,
) -> Result<()> {
    let mut needs_fast_update = false;

    loop {
        app.update_scroll_animation();
        terminal.draw(|frame| ui::draw(frame, app, keymap))?;

        // Poll at frame rate only while the viewport is converging
        let event = if needs_fast_update {
            events.next_animation()?
        } else {
            events.next()?
        };

        match event {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app, keymap);
                app.handle_action(action);
            }
            Some(AppEvent::Resize(width, height)) => {
                app.resize_to(Rect::new(0, 0, width, height));
            }
            Some(AppEvent::Tick) | None => {}
        }

        needs_fast_update = app.needs_scroll_update();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Enter raw mode and the alternate screen, restoring both on panic
fn init_terminal(title: &str) -> Result<PagerTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(
        stdout,
        EnterAlternateScreen,
        SetTitle(format!("glide - {}", title))
    ) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

fn restore_terminal(terminal: &mut PagerTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
