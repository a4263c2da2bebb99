//! A small to-do board: seed tasks come from a demo REST service, every edit
//! is applied locally first, and adds/renames are mirrored back remotely.

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod remote;
pub mod sync;
pub mod tui;
