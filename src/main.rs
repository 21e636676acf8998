use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use timed_quiz::{
    draw_app, handle_key, logger, write_report, App, QuestionBank, QuizConfig, QuizSession,
};
use tokio::time::MissedTickBehavior;

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = QuizConfig::from_env()?;
    if let Some(path) = &config.log_file {
        logger::init(path)?;
    }

    // a broken bank must stop us before the terminal is taken over
    let bank = QuestionBank::builtin()?;
    let session = QuizSession::new(bank, Instant::now()).with_time_limit(config.time_limit);
    let mut app = App::new(session);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, config.tick_rate).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(path) = &config.report_file
        && app.session.is_completed()
        && let Some(results) = app.session.results()
    {
        write_report(path, &results)?;
        logger::log(&format!("Report written to {}", path.display()));
        println!("Results written to {}", path.display());
    }

    result
}

async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(tick_rate);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|f| draw_app(f, app, Instant::now()))?;

        tokio::select! {
            _ = ticker.tick() => {
                app.on_tick(Instant::now());
            }
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => handle_key(app, key, Instant::now()),
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    logger::log(&format!("Terminal event error: {}", e));
                    return Err(e);
                }
                None => break,
            },
        }

        if app.should_quit {
            logger::log("Quit requested");
            break;
        }
    }

    Ok(())
}
