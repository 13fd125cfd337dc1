// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Terminal output.
//!
//! ```text
//!  Otto                      intro
//! │
//! ◇  Title ─────────         note
//! │  body
//! ├──────────────────
//! ✔ Committed                success / warn / info
//!  Bye!                      outro
//! ```
//!
//! Rendering functions take `color: bool` and return a `String`, so tests
//! compare plain text; the printing wrappers pass `true`.

mod banner;
mod spinner;
pub mod text;


pub use banner::{Banner, RepoStatus};
pub use spinner::Spinner;

use colored::Colorize;

/// Apply `style` only when `color` is set.
pub(crate) fn paint(text: &str, color: bool, style: impl Fn(&str) -> String) -> String {
    if color { style(text) } else { text.to_string() }
}

/// Boxed note with a title, as shown after a flow step.
#[must_use]
pub fn render_note(title: &str, body: &str, color: bool) -> String {
    let mut out = format!(
        "{}  {}\n",
        paint("◇", color, |s| s.green().to_string()),
        paint(title, color, |s| s.bold().to_string())
    );
    let bar = paint("│", color, |s| s.dimmed().to_string());
    for line in body.lines() {
        out.push_str(&format!("{bar}  {line}\n"));
    }
    out.push_str(&paint("├──────────────────", color, |s| s.dimmed().to_string()));
    out
}

pub fn note(title: &str, body: &str) {
    println!("{}", render_note(title, body, true));
}

pub fn intro(title: &str) {
    println!("{}", format!(" {title} ").on_cyan().black());
}

pub fn outro(message: &str) {
    println!("{}", message.bold());
}

pub fn success(message: &str) {
    println!("{}", format!("✔ {message}").green());
}

pub fn warn(message: &str) {
    println!("{}", format!("⚠ {message}").yellow());
}

pub fn error(message: &str) {
    println!("{}", format!("✖ {message}").red());
}

pub fn info(message: &str) {
    println!("{}", message.dimmed());
}

pub fn blank() {
    println!();
}
