// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scripted [`Prompt`] for flow tests.
//!
//! Answers are consumed in order. A select answer names the item by a
//! substring of its label. An input the validator rejects is recorded and the
//! question is asked again with the next answer, as the terminal does.
//! Running out of answers aborts, so a flow that asks more than the test
//! expects fails loudly instead of hanging.

use std::collections::VecDeque;

use super::{InputRequest, Prompt, Prompted, SelectItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Select(String),
    Confirm(bool),
    Input(String),
    Cancel,
    Abort,
}

#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Answer>,
    /// Every question asked, in order.
    pub asked: Vec<String>,
    /// Items offered by each select, in order.
    pub offered: Vec<Vec<String>>,
    /// Validation messages shown for rejected inputs.
    pub rejected: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, message: &str) -> Answer {
        self.asked.push(message.to_string());
        self.answers.pop_front().unwrap_or(Answer::Abort)
    }
}

pub fn select(label: &str) -> Answer {
    Answer::Select(label.to_string())
}

pub fn input(text: &str) -> Answer {
    Answer::Input(text.to_string())
}

impl Prompt for ScriptedPrompt {
    fn select(&mut self, message: &str, items: &[SelectItem]) -> Prompted<usize> {
        self.offered
            .push(items.iter().map(|item| item.label.clone()).collect());
        match self.next(message) {
            Answer::Select(wanted) => items
                .iter()
                .position(|item| item.label.contains(&wanted))
                .map_or_else(
                    || panic!("no item matching {wanted:?} in {message:?}: {items:?}"),
                    Prompted::Submitted,
                ),
            Answer::Cancel => Prompted::Cancelled,
            Answer::Abort => Prompted::Aborted,
            other => panic!("expected a select answer for {message:?}, got {other:?}"),
        }
    }

    fn confirm(&mut self, message: &str, _default: bool) -> Prompted<bool> {
        match self.next(message) {
            Answer::Confirm(yes) => Prompted::Submitted(yes),
            Answer::Cancel => Prompted::Cancelled,
            Answer::Abort => Prompted::Aborted,
            other => panic!("expected a confirm answer for {message:?}, got {other:?}"),
        }
    }

    fn input(&mut self, request: &InputRequest<'_>) -> Prompted<String> {
        loop {
            match self.next(request.message) {
                Answer::Input(text) => {
                    let text = text.trim().to_string();
                    if text.is_empty() && !request.allow_empty {
                        return Prompted::Cancelled;
                    }
                    if let Some(validate) = request.validate
                        && let Err(reason) = validate(&text)
                    {
                        self.rejected.push(reason);
                        continue;
                    }
                    return Prompted::Submitted(text);
                }
                Answer::Cancel => return Prompted::Cancelled,
                Answer::Abort => return Prompted::Aborted,
                other => panic!(
                    "expected an input answer for {:?}, got {other:?}",
                    request.message
                ),
            }
        }
    }
}
