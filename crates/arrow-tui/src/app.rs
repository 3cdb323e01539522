use std::path::PathBuf;

use arrow_core::{Command, NavigationModel, Step, Theme};

use crate::input::InputAction;

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
    /// The user picked this directory.
    Confirmed(PathBuf),
    /// Esc or Ctrl-C.
    Cancelled,
}

/// Result of applying one input action.
#[derive(Debug)]
pub enum Flow {
    Continue(App),
    Exit(Exit),
}

/// View-level state wrapping the core [`NavigationModel`].
///
/// The model owns all browsing state; this wrapper adds what only the
/// terminal frontend cares about: colors and whether to draw icons.
#[derive(Debug, Clone)]
pub struct App {
    model: NavigationModel,
    theme: Theme,
    show_icons: bool,
}

impl App {
    pub fn new(model: NavigationModel, theme: Theme, show_icons: bool) -> Self {
        Self {
            model,
            theme,
            show_icons,
        }
    }

    pub fn model(&self) -> &NavigationModel {
        &self.model
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn show_icons(&self) -> bool {
        self.show_icons
    }

    /// Applies `action` and returns the next state (immutable pattern).
    pub fn apply(self, action: InputAction) -> Flow {
        match action {
            InputAction::None => Flow::Continue(self),
            InputAction::Cancel => Flow::Exit(Exit::Cancelled),
            InputAction::Command(cmd) => self.dispatch(cmd),
            InputAction::Open(index) => match self.dispatch(Command::Select(index)) {
                Flow::Continue(app) => app.dispatch(Command::Descend),
                exit => exit,
            },
        }
    }

    fn dispatch(self, cmd: Command) -> Flow {
        let Self {
            model,
            theme,
            show_icons,
        } = self;
        match model.handle(cmd) {
            Step::Continue(model) => Flow::Continue(Self {
                model,
                theme,
                show_icons,
            }),
            Step::Confirmed(path) => Flow::Exit(Exit::Confirmed(path)),
        }
    }
}
