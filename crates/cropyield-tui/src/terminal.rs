//! Terminal setup and restoration

use ratatui::DefaultTerminal;

use cropyield_core::prelude::*;

/// Enter raw mode and the alternate screen.
///
/// A panic hook is installed first so the terminal is restored before the
/// panic message is printed.
pub fn enter() -> Result<DefaultTerminal> {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        previous(info);
    }));
    ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))
}

/// Leave the alternate screen and disable raw mode
pub fn leave() {
    ratatui::restore();
}
