// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Maps unit outlines drawn on an aerial photo onto a viewport that shows the
//! photo scaled to cover it (centred, overflow cropped).

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

static PATH_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([MC])([0-9.,\s]+)").expect("static regex"));

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoverFit {
    pub scale: f64,
    pub crop_x: f64,
    pub crop_y: f64,
}

impl CoverFit {
    /// `None` until the image size is known.
    pub fn new(image_width: f64, image_height: f64, view_width: f64, view_height: f64) -> Option<Self> {
        if image_width <= 0.0 || image_height <= 0.0 {
            return None;
        }
        let scale = (view_width / image_width).max(view_height / image_height);
        Some(CoverFit {
            scale,
            crop_x: (image_width * scale - view_width) / 2.0 / scale,
            crop_y: (image_height * scale - view_height) / 2.0 / scale,
        })
    }

    pub fn point(&self, x: f64, y: f64) -> (f64, f64) {
        ((x - self.crop_x) * self.scale, (y - self.crop_y) * self.scale)
    }
}

/// Rewrite the `M`/`C` coordinate pairs of an SVG path into viewport space.
pub fn adjust_path(path: &str, fit: Option<&CoverFit>) -> String {
    let Some(fit) = fit else {
        return path.to_string();
    };
    PATH_SEGMENT
        .replace_all(path, |caps: &Captures| {
            let points: Vec<String> = caps[2]
                .split_whitespace()
                .map(|pair| adjust_pair(pair, fit))
                .collect();
            format!("{} {}", &caps[1], points.join(" "))
        })
        .into_owned()
}

fn adjust_pair(pair: &str, fit: &CoverFit) -> String {
    let mut parts = pair.split(',');
    let parsed = match (parts.next(), parts.next()) {
        (Some(x), Some(y)) => x.parse::<f64>().ok().zip(y.parse::<f64>().ok()),
        _ => None,
    };
    match parsed {
        Some((x, y)) => {
            let (ax, ay) = fit.point(x, y);
            format!("{},{}", ax, ay)
        }
        None => pair.to_string(),
    }
}
