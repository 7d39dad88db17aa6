// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping rules for the-numbers.com. Each spec focuses on a
//! single page kind and encodes *where the ground truth lives in the HTML*
//! and *how to extract it*.
//!
//! ## What lives here
//! - **Search results** (`search`): pick the movie link whose text best matches
//!   a drafted title.
//! - **Movie detail** (`movie`): eligibility check plus field extraction into a
//!   `MovieRecord`.
//! - **Field parsers** (`parse`): runtime and date strings as the site prints them.
//!
//! ## What does **not** live here
//! - **HTML parsing** – pages are read through `core::html::Document`
//!   (named accessors such as `table_after_heading`).
//! - **Transport** – pages come from a `core::net::Fetch`.
//! - **Looping over the draft, persistence, reporting** – see `collect`,
//!   `store` and `report`.
//!
//! ## Conventions
//! - `Ok(None)` means "skip this title" (no match, no financial data, missing
//!   section); `Err` means the page was readable but broke a parsing rule.
//! - Log the reason for every skip.
//!
//! ## Testing notes
//! Specs are testable **offline** with `parse_*` entry points against saved HTML.
pub mod movie;
pub mod parse;
pub mod search;
