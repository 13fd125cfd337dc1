// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (flows)
//!                          menu / release / branch / stash
//!                          undo / sync / build / settings
//!                                      |
//!         +-------------+--------------+-------------+
//!         v             v              v             v
//!       prompt         ui           services       config
//!     dialoguer   banner/spinner   AI + webhook   JSON + env
//!                                      |
//!                                     net
//!                                   reqwest
//!         +-------------+
//!         v             v
//!        git         package
//!   query/cmd/ops   npm / pnpm
//!         |             |
//!   +-----------------------------------------+
//!   |  core::process  Shell over CommandRunner |
//!   +-----------------------------------------+
//!   |  foundation     error, logging           |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
pub mod net;
pub mod package;
pub mod prompt;
pub mod services;
pub mod ui;
