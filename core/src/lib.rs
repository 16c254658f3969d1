#![no_std]

//! Minesweeper game state: mine layout, flood-fill reveal, flags and win/loss tracking.
//!
//! Drawing and input handling live outside this crate. A frontend owns a [`Game`], forwards player actions
//! through [`Game::on_reveal`] and [`Game::on_toggle_flag`], and draws from [`Game::render_view`].

extern crate alloc;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use flags::*;
pub use grid::*;
pub use reveal::*;
pub use types::*;
pub use view::*;

mod config;
mod engine;
mod error;
mod flags;
mod grid;
mod reveal;
mod types;
mod view;
