//! Interactive school browser
//!
//! The renderer owns the terminal and the `SchoolBrowser` component. Page
//! state stays in the dashboard; the component only reports actions.

use std::io;
use std::time::Duration;

use anyhow::Result;
use gradboard_runtime::{Dashboard, SCHOOLS_FAILURE};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::presentation::components::{BrowseAction, SchoolBrowser};

pub struct BrowseRenderer<'a> {
    dashboard: &'a mut Dashboard,
    runtime: &'a Runtime,
    browser: SchoolBrowser,
}

impl<'a> BrowseRenderer<'a> {
    pub fn new(dashboard: &'a mut Dashboard, runtime: &'a Runtime) -> Self {
        let browser = SchoolBrowser::new(dashboard.schema());
        Self {
            dashboard,
            runtime,
            browser,
        }
    }

    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            let page = self.dashboard.current_page(Some(self.browser.widths()));
            terminal.draw(|f| {
                let area = f.area();
                self.browser.render(f, area, &page);
            })?;

            if !event::poll(Duration::from_millis(250))? {
                continue;
            }

            let action = match event::read()? {
                Event::Key(key) => self.browser.handle_key(key, &page),
                Event::Mouse(mouse) => self.browser.handle_mouse(mouse),
                _ => None,
            };

            match action {
                Some(BrowseAction::Quit) => break,
                Some(BrowseAction::GoTo(target)) => {
                    if self.dashboard.show_page(target).is_some() {
                        debug!(page = target, "page changed");
                    }
                }
                Some(BrowseAction::Reload) => self.reload(),
                None => {}
            }
        }

        Ok(())
    }

    /// A failed reload keeps the rows already on screen
    fn reload(&mut self) {
        match self.runtime.block_on(self.dashboard.load_schools()) {
            Ok(page) => {
                debug!(count = page.total_count, "schools reloaded");
                self.browser.set_status(None);
            }
            Err(err) => {
                // the TUI owns the terminal; the status line shows the error
                debug!(error = %err, "reload failed");
                self.browser
                    .set_status(Some(format!("{}: {}", SCHOOLS_FAILURE, err)));
            }
        }
    }
}
