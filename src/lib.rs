//! Post Grid (postgrid)
//!
//! Terminal viewer for a JSON collection of post records, with a global
//! filter, single-column sorting and independently paginated grid and tile
//! views.
//!
//! This is the library root. The pure core (`model`, `state`) holds all view
//! logic; the impure shell (`source`, `view`, `config`, `logging`) talks to
//! the network, the filesystem and the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
