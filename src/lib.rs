//! Most-recently-used ordering of open documents, and a sidebar list that
//! centres the current document so it can be cycled in both directions.

pub mod cli;
pub mod host;
pub mod io;
pub mod logging;
pub mod model;
pub mod ops;
pub mod tui;
pub mod util;
