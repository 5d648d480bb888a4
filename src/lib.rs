pub mod layout;
pub mod runtime;
pub mod session;
pub mod ui;
pub mod util;
pub mod view;
