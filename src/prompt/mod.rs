// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive prompts.
//!
//! ```text
//!            Prompt (trait)
//!           /             \
//!     TermPrompt       ScriptedPrompt
//!     (dialoguer)      (tests only)
//!
//! every answer is a Prompted<T>:
//!   Submitted(T)  user answered
//!   Cancelled     Esc / q / empty where allowed  -> back to the menu
//!   Aborted       Ctrl-C / terminal gone         -> exit the program
//! ```
//!
//! Each call site decides what `Cancelled` means; `Aborted` is always
//! turned into [`OttoError::Aborted`] by [`Prompted::into_result`].

mod term;

#[cfg(test)]
pub mod script;

pub use term::TermPrompt;

use crate::error::{OttoError, OttoResult};

/// Outcome of one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted<T> {
    Submitted(T),
    Cancelled,
    Aborted,
}

impl<T> Prompted<T> {
    /// `Ok(Some(v))` when submitted, `Ok(None)` when cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`OttoError::Aborted`] if the prompt was aborted.
    pub fn into_result(self) -> OttoResult<Option<T>> {
        match self {
            Self::Submitted(value) => Ok(Some(value)),
            Self::Cancelled => Ok(None),
            Self::Aborted => Err(OttoError::Aborted),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Prompted<U> {
        match self {
            Self::Submitted(value) => Prompted::Submitted(f(value)),
            Self::Cancelled => Prompted::Cancelled,
            Self::Aborted => Prompted::Aborted,
        }
    }
}

/// One line of a selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem {
    pub label: String,
    pub hint: Option<String>,
}

/// A selectable value with its label.
#[derive(Debug, Clone)]
pub struct Choice<T> {
    pub value: T,
    pub item: SelectItem,
}

impl<T> Choice<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            item: SelectItem {
                label: label.into(),
                hint: None,
            },
        }
    }

    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.item.hint = Some(hint.into());
        self
    }
}

/// Rejects an input with a message, or accepts it.
pub type Validator = fn(&str) -> Result<(), String>;

/// Free-text question.
#[derive(Debug, Clone, Default)]
pub struct InputRequest<'a> {
    pub message: &'a str,
    /// Editable text the answer starts from.
    pub initial: Option<&'a str>,
    /// An empty answer counts as [`Prompted::Cancelled`] unless set.
    pub allow_empty: bool,
    pub validate: Option<Validator>,
}

impl<'a> InputRequest<'a> {
    #[must_use]
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn initial(mut self, initial: &'a str) -> Self {
        self.initial = Some(initial);
        self
    }

    #[must_use]
    pub const fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    #[must_use]
    pub const fn validate(mut self, validator: Validator) -> Self {
        self.validate = Some(validator);
        self
    }
}

pub trait Prompt {
    /// Pick one of `items`, returning its index.
    fn select(&mut self, message: &str, items: &[SelectItem]) -> Prompted<usize>;

    /// Yes/no question.
    fn confirm(&mut self, message: &str, default: bool) -> Prompted<bool>;

    /// Free text.
    fn input(&mut self, request: &InputRequest<'_>) -> Prompted<String>;
}

/// Pick one of `choices` and return its value.
pub fn choose<T: Clone>(
    prompt: &mut dyn Prompt,
    message: &str,
    choices: &[Choice<T>],
) -> Prompted<T> {
    let items: Vec<SelectItem> = choices.iter().map(|choice| choice.item.clone()).collect();
    match prompt.select(message, &items) {
        Prompted::Submitted(index) => choices
            .get(index)
            .map_or(Prompted::Cancelled, |choice| Prompted::Submitted(choice.value.clone())),
        Prompted::Cancelled => Prompted::Cancelled,
        Prompted::Aborted => Prompted::Aborted,
    }
}
