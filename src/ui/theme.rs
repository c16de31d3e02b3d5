// irc_overlay — An in-game IRC chat overlay for the terminal
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::config::UiColor;
use ratatui::style::Color;

// Chat text
pub const TEXT: Color = Color::White;
pub const HIGHLIGHT: Color = Color::Rgb(255, 77, 77);

// UI chrome
pub const DIM: Color = Color::DarkGray;
pub const BORDER: Color = Color::Gray;
pub const SELECTED_USER: Color = Color::Yellow;

/// Brightness of the panel background relative to the configured UI color.
const PANEL_SCALE: f32 = 0.2;

/// Convert a hue/saturation/lightness triple, each spanning `0..=255`, to RGB.
#[allow(clippy::many_single_char_names)]
pub fn hsl_to_rgb(hue: u8, sat: u8, lht: u8) -> (f32, f32, f32) {
    let h = f32::from(hue) / 255.0 * 6.0;
    let s = f32::from(sat) / 255.0;
    let l = f32::from(lht) / 255.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 1.0 => (c, x, 0.0),
        h if h < 2.0 => (x, c, 0.0),
        h if h < 3.0 => (0.0, c, x),
        h if h < 4.0 => (0.0, x, c),
        h if h < 5.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    (r + m, g + m, b + m)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub fn rgb(color: UiColor) -> Color {
    let (r, g, b) = hsl_to_rgb(color.hue, color.sat, color.lht);
    Color::Rgb(channel(r), channel(g), channel(b))
}

/// Background of the overlay panels: the UI color dimmed down.
pub fn panel_bg(color: UiColor) -> Color {
    let (r, g, b) = hsl_to_rgb(color.hue, color.sat, color.lht);
    Color::Rgb(channel(r * PANEL_SCALE), channel(g * PANEL_SCALE), channel(b * PANEL_SCALE))
}
