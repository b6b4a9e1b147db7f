// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod config;
pub mod models;
pub mod inventory;
pub mod projection;
pub mod state;
pub mod geometry;
pub mod logging;
pub mod utils;
pub mod commands;
