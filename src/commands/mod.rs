// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod locations;
pub mod units;
pub mod project;
pub mod exporter;
pub mod doctor;
pub mod session;
pub mod migrate;
pub mod geometry;
