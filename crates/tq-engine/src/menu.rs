//! Numbered and lettered choice menus.

use crate::error::{EngineError, EngineResult};

/// What an input token resolved to.
#[derive(Debug, PartialEq, Eq)]
pub enum Selection<'a, A> {
    /// A regular choice carrying an action.
    Action(&'a A),
    /// One of the reserved letters, e.g. "back".
    Reserved(char),
}

/// A set of choices, each reachable through a short input token.
///
/// Regular choices are numbered from 1 in the order they are added, or
/// carry a single letter. Reserved choices are letters the surrounding
/// loop handles itself. Labels are unique across the whole menu.
#[derive(Debug, Clone)]
pub struct ChoiceMenu<A> {
    numbered: Vec<(String, A)>,
    lettered: Vec<(char, String, A)>,
    reserved: Vec<(char, String)>,
}

fn check_letter(letter: char) -> EngineResult<char> {
    if !letter.is_ascii_alphabetic() {
        return Err(EngineError::InvalidChoiceLetter(letter));
    }
    Ok(letter.to_ascii_lowercase())
}

fn check_label(label: &str) -> EngineResult<String> {
    let label = label.trim();
    if label.is_empty() {
        return Err(EngineError::BlankChoiceLabel);
    }
    Ok(label.to_string())
}

impl<A> ChoiceMenu<A> {
    /// Create a menu with the given reserved `(letter, label)` pairs.
    pub fn new(reserved: &[(char, &str)]) -> EngineResult<Self> {
        let mut menu = Self {
            numbered: Vec::new(),
            lettered: Vec::new(),
            reserved: Vec::with_capacity(reserved.len()),
        };
        for (letter, label) in reserved {
            let (letter, label) = menu.claim(*letter, label)?;
            menu.reserved.push((letter, label));
        }
        Ok(menu)
    }

    /// Add a numbered choice. Returns the number assigned to it.
    pub fn add(&mut self, action: A, label: &str) -> EngineResult<usize> {
        let label = check_label(label)?;
        self.check_label_free(&label)?;
        self.numbered.push((label, action));
        Ok(self.numbered.len())
    }

    /// Add a choice selected by a single letter.
    pub fn add_lettered(&mut self, letter: char, action: A, label: &str) -> EngineResult<()> {
        let (letter, label) = self.claim(letter, label)?;
        self.lettered.push((letter, label, action));
        Ok(())
    }

    fn claim(&self, letter: char, label: &str) -> EngineResult<(char, String)> {
        let letter = check_letter(letter)?;
        let label = check_label(label)?;
        let taken = self.lettered.iter().any(|(l, _, _)| *l == letter)
            || self.reserved.iter().any(|(l, _)| *l == letter);
        if taken {
            return Err(EngineError::DuplicateChoiceLetter(letter));
        }
        self.check_label_free(&label)?;
        Ok((letter, label))
    }

    fn check_label_free(&self, label: &str) -> EngineResult<()> {
        let taken = self.numbered.iter().any(|(l, _)| l == label)
            || self.lettered.iter().any(|(_, l, _)| l == label)
            || self.reserved.iter().any(|(_, l)| l == label);
        if taken {
            return Err(EngineError::DuplicateChoiceLabel(label.to_string()));
        }
        Ok(())
    }

    /// Whether any option already uses this label (compared trimmed).
    pub fn has_label(&self, label: &str) -> bool {
        self.check_label_free(label.trim()).is_err()
    }

    /// `(token, label)` pairs in display order: numbered choices, lettered
    /// choices, then reserved ones.
    pub fn options(&self) -> Vec<(String, &str)> {
        let numbered = self
            .numbered
            .iter()
            .enumerate()
            .map(|(i, (label, _))| ((i + 1).to_string(), label.as_str()));
        let lettered = self
            .lettered
            .iter()
            .map(|(letter, label, _)| (letter.to_string(), label.as_str()));
        let reserved = self
            .reserved
            .iter()
            .map(|(letter, label)| (letter.to_string(), label.as_str()));
        numbered.chain(lettered).chain(reserved).collect()
    }

    /// Resolve raw user input. Surrounding whitespace and case are ignored.
    pub fn select(&self, input: &str) -> Option<Selection<'_, A>> {
        let input = input.trim().to_lowercase();
        if input.starts_with(|c: char| c.is_ascii_digit()) {
            return self
                .numbered
                .iter()
                .enumerate()
                .find(|(i, _)| (i + 1).to_string() == input)
                .map(|(_, (_, action))| Selection::Action(action));
        }
        let mut chars = input.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(letter), None) => letter,
            _ => return None,
        };
        if let Some((_, _, action)) = self.lettered.iter().find(|(l, _, _)| *l == letter) {
            return Some(Selection::Action(action));
        }
        self.reserved
            .iter()
            .find(|(l, _)| *l == letter)
            .map(|(l, _)| Selection::Reserved(*l))
    }

    /// One `token. label` line per option.
    pub fn render(&self) -> String {
        self.options()
            .iter()
            .map(|(token, label)| format!("{token}. {label}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of options, reserved ones included.
    pub fn len(&self) -> usize {
        self.numbered.len() + self.lettered.len() + self.reserved.len()
    }

    /// Returns true if the menu has no options at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
