// Interactive terminal front end
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
mod theme;
mod timestamps;

use anyhow::Result;
pub use app::App;
pub use timestamps::format_timestamp;

use crate::config::ViewConfig;
use crate::controller::Controller;
use terminal::TerminalManager;

/// Run the interactive browser until the user quits
pub fn run_interactive(controller: Controller, view: ViewConfig) -> Result<()> {
    let mut manager = TerminalManager::new()?;

    let mut app = App::new(controller, view);
    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
