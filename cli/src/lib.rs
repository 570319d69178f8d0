// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end for `caltime-core`.

mod arg;
mod cli;
mod cmd_adjust;
mod cmd_compare;
mod cmd_convert;
mod cmd_epoch;
mod cmd_now;
mod cmd_show;
mod cmd_span;
mod config;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{Config, parse_config};
