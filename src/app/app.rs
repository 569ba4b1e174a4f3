use std::{io, sync::Arc, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
};
use tracing::info;

use crate::{
    app::ui::{self, DashboardState},
    services::{PortfolioTrackerService, RefreshScheduler},
};

const TICK: Duration = Duration::from_millis(250);

pub struct App {
    tracker: Arc<PortfolioTrackerService>,
    scheduler: RefreshScheduler,
    table_state: TableState,
    demo_mode: bool,
}

impl App {
    pub fn new(
        tracker: Arc<PortfolioTrackerService>,
        scheduler: RefreshScheduler,
        demo_mode: bool,
    ) -> Self {
        Self {
            tracker,
            scheduler,
            table_state: TableState::default(),
            demo_mode,
        }
    }

    /// Runs the refresh on the runtime so drawing never waits on the network.
    fn spawn_refresh(&self) {
        let tracker = Arc::clone(&self.tracker);
        tokio::spawn(async move {
            tracker.refresh().await;
        });
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        self.scheduler.stop();
        result
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.spawn_refresh();

        loop {
            let snapshot = self.tracker.snapshot();
            let state = DashboardState {
                snapshot: &snapshot,
                auto_refresh: self.scheduler.is_running(),
                demo_mode: self.demo_mode,
            };
            terminal.draw(|frame| ui::render(frame, &state, &mut self.table_state))?;

            if !tokio::task::block_in_place(|| event::poll(TICK))? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('r') | KeyCode::F(5) => {
                        info!("manual refresh requested");
                        self.spawn_refresh();
                    }
                    KeyCode::Char('a') => {
                        let enabled = self.scheduler.toggle();
                        info!(enabled, "periodic refresh toggled");
                    }
                    KeyCode::Enter | KeyCode::Esc => {
                        if self.tracker.status().last_error().is_some() {
                            self.tracker.dismiss_error();
                            continue;
                        }
                        if key.code == KeyCode::Esc {
                            self.table_state.select(None);
                        }
                    }
                    KeyCode::Down => {
                        let count = snapshot.views().len();
                        if count > 0 {
                            let i = match self.table_state.selected() {
                                Some(i) if i + 1 < count => i + 1,
                                _ => 0,
                            };
                            self.table_state.select(Some(i));
                        }
                    }
                    KeyCode::Up => {
                        let count = snapshot.views().len();
                        if count > 0 {
                            let i = match self.table_state.selected() {
                                Some(0) | None => count - 1,
                                Some(i) => i - 1,
                            };
                            self.table_state.select(Some(i));
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}
