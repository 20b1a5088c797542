//! # sheet-ranker
//!
//! A small web service that reads a spreadsheet published as CSV and serves it
//! as JSON, either whole or as a top-5 ranking.
//!
//! ## Request flow
//!
//! ```text
//!   GET /api/rows                    GET /api/top5?type=magic
//!         │                                   │
//!         │                          validate `type` ──► 400 on bad mode
//!         │                                   │
//!         └──────────────┬────────────────────┘
//!                        ▼
//!             ┌─────────────────────┐
//!             │  fetch CSV (reqwest)│ ──► 502 on network / status / CSV error
//!             └──────────┬──────────┘
//!                        ▼
//!             ┌─────────────────────┐
//!             │ parse: header → row │
//!             └──────────┬──────────┘
//!                        │
//!          ┌─────────────┴──────────────┐
//!          ▼                            ▼
//!     rows verbatim          rank: primary desc, secondary desc,
//!                            stable, non-numbers = 0, keep top 5
//! ```
//!
//! | mode       | primary          | secondary      |
//! |------------|------------------|----------------|
//! | `magic`    | magic attack     | value          |
//! | `physical` | physical attack  | value          |
//! | `value`    | value            | magic attack   |
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration: bind address, sheet URL, column names
//! - [`models`] - `Record` plus the query and response shapes
//! - [`sheet`] - CSV download and header-keyed parsing
//! - [`ranking`] - Ranking modes and the top-N sort
//! - [`api`] - Axum router and handlers
//! - [`error`] - API error type and its HTTP mapping
//! - [`state`] - Shared application state

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod ranking;
pub mod sheet;
pub mod state;
