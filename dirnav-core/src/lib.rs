pub mod error;

pub mod config;

pub mod controller {

    pub mod actions;
    pub use actions::Action;

    pub mod action_dispatcher;
    pub use action_dispatcher::{ActionDispatcher, DispatcherStats};
}

pub mod model {
    pub mod nav_state;
    pub use nav_state::{NavState, VisibleRow};

    pub mod app_state;
    pub use app_state::{AppState, Notification, NotificationLevel};
}

pub mod view {
    pub mod theme;

    pub mod ui;

    pub mod components {
        pub mod object_table;
        pub use object_table::FileTable;
        pub mod status_bar;
        pub use status_bar::StatusBar;
    }

    pub use components::*;
}

pub use view::*;

pub mod fs {
    pub mod dir_entry;
    pub use dir_entry::{DirectoryEntry, EntryKind};

    pub mod dir_scanner;
    pub use dir_scanner::{DirectoryLister, OsLister};
}

pub mod logging;
pub use logging::Logger;

pub use error::AppError;

pub use model::app_state::AppState;
