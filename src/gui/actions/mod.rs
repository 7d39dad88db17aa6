// src/gui/actions/mod.rs
//
// Button actions for the action bar. Layout stays in components/action_bar.rs.

mod collect;
mod open;
mod report;

pub use collect::collect;
pub use open::open_output_folder;
pub use report::report;
