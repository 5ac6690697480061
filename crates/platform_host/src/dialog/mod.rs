//! Blocking confirmation prompt contracts.

use std::{cell::RefCell, rc::Rc};

/// Host service that asks the user a yes/no question.
pub trait ConfirmPrompt {
    /// Shows `message` and returns `true` only if the user accepted.
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Default)]
/// Prompt with a fixed answer that records each question it was asked.
pub struct ScriptedConfirmPrompt {
    answer: bool,
    asked: Rc<RefCell<Vec<String>>>,
}

impl ScriptedConfirmPrompt {
    /// Creates a prompt that always answers `answer`.
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Rc::default(),
        }
    }

    /// Messages shown so far, oldest first.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl ConfirmPrompt for ScriptedConfirmPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push(message.to_string());
        self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_prompt_answers_and_records() {
        let prompt = ScriptedConfirmPrompt::answering(true);
        assert!(prompt.confirm("Proceed?"));
        assert_eq!(prompt.asked(), vec!["Proceed?".to_string()]);

        let declining = ScriptedConfirmPrompt::answering(false);
        assert!(!declining.confirm("Clear?"));
        assert_eq!(declining.asked(), vec!["Clear?".to_string()]);
    }
}
