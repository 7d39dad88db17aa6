// src/gui/components/mod.rs
pub mod action_bar;
pub mod movie_table;
pub mod owner_panel;
pub mod standings_table;
pub mod tabs;
