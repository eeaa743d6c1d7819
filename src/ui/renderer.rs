//! Terminal host: sets up the terminal, runs the update loop and the
//! background command runner.

use crate::config::Config;
use crate::constants::TOAST_USER_SOURCE_FAILED;
use crate::logger::LogBuffer;
use crate::ui::app::{self, AppMsg, AppState};
use crate::ui::core::{AppContext, EventHandler, EventType, Immutable, TaskManager, ToastContent};
use crate::users::{directory_from_config, InMemoryUserDirectory, UserDirectory};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Owns the live shell state and feeds messages through `update`
pub struct AppComponent {
    state: Immutable<AppState>,
    ctx: AppContext,
    task_manager: TaskManager<AppMsg>,
}

impl AppComponent {
    pub fn new(ctx: AppContext) -> (Self, mpsc::UnboundedReceiver<AppMsg>) {
        let (task_manager, rx) = TaskManager::new();
        let (state, cmd) = app::init(&ctx);
        let mut component = Self {
            state,
            ctx,
            task_manager,
        };
        component.task_manager.spawn(cmd);
        (component, rx)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.state.exit
    }

    /// Run one message through the shell and spawn the resulting command
    pub fn dispatch(&mut self, msg: AppMsg) {
        log::trace!("Dispatch: {msg:?}");
        let (state, cmd) = app::update(self.state.clone(), msg, &self.ctx);
        self.state = state;
        self.task_manager.spawn(cmd);
    }

    pub fn handle_event(&mut self, event: EventType) -> bool {
        match event {
            EventType::Key(key) => {
                if let Some(msg) = app::handle_key(&self.state, &key, &self.ctx) {
                    self.dispatch(msg);
                }
                true
            }
            EventType::Resize(_, _) => true,
            EventType::Tick => {
                self.task_manager.cleanup_finished();
                false
            }
            EventType::Other => false,
        }
    }

    pub fn render(&self, f: &mut ratatui::Frame) {
        app::view(f, &self.state, &self.ctx);
    }

    pub fn shutdown(&mut self) {
        self.task_manager.abort_all();
    }
}

/// Build the shared context, falling back to the sample users when the
/// configured directory cannot be loaded.
fn build_context(config: Config, logs: LogBuffer) -> (AppContext, Option<ToastContent>) {
    let (users, startup_toast): (Arc<dyn UserDirectory>, _) = match directory_from_config(&config.users) {
        Ok(users) => (users, None),
        Err(e) => {
            log::error!("{e}");
            (
                Arc::new(InMemoryUserDirectory::sample()),
                Some(ToastContent::error("User directory", TOAST_USER_SOURCE_FAILED)),
            )
        }
    };
    (AppContext::new(config, users, logs), startup_toast)
}

/// Run the terminal application until the user quits
pub async fn run_app(config: Config, logs: LogBuffer) -> anyhow::Result<()> {
    let (ctx, startup_toast) = build_context(config, logs);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (mut app, mut rx) = AppComponent::new(ctx);
    if let Some(toast) = startup_toast {
        app.dispatch(AppMsg::ShowToast(toast));
    }
    let mut event_handler = EventHandler::new();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler, &mut rx).await;
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
    rx: &mut mpsc::UnboundedReceiver<AppMsg>,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    while !app.should_quit() {
        if needs_render {
            terminal.draw(|f| app.render(f))?;
        }

        needs_render = tokio::select! {
            event = event_handler.next_event() => app.handle_event(event?),
            Some(msg) = rx.recv() => {
                app.dispatch(msg);
                true
            }
        };
    }

    Ok(())
}
