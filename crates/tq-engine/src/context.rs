//! The generic context loop.
//!
//! A context (a map, a menu, a container screen) describes itself through an
//! entry text and a [`ChoiceMenu`]; [`run`] prints both, reads one line at a
//! time, and hands recognized choices back to the context until it exits or
//! the player backs out.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::LoopConfig;
use crate::error::EngineResult;
use crate::menu::{ChoiceMenu, Selection};
use crate::state::GameState;

/// What the loop should do after a choice was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Stay in the context and show the (possibly new) menu again.
    Continue,
    /// Leave the context.
    Exit,
}

/// How a context loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A choice ended the context.
    Completed,
    /// The player chose "back", or input ran out.
    Back,
}

/// An interactive screen driven by [`run`].
pub trait Context {
    /// The action attached to each choice.
    type Action;

    /// Text printed above the choices.
    fn entry_text(&self, state: &GameState) -> String;

    /// Add this context's choices to a menu that already holds the reserved
    /// back choice.
    fn fill_choices(
        &self,
        state: &GameState,
        menu: &mut ChoiceMenu<Self::Action>,
    ) -> EngineResult<()>;

    /// Carry out a selected action.
    fn apply(&mut self, action: &Self::Action, state: &mut GameState) -> EngineResult<Flow>;
}

fn build_menu<C: Context>(
    context: &C,
    state: &GameState,
    config: &LoopConfig,
) -> EngineResult<ChoiceMenu<C::Action>> {
    let mut menu = ChoiceMenu::new(&[(config.back_token, config.back_label.as_str())])?;
    context.fill_choices(state, &mut menu)?;
    Ok(menu)
}

/// Drive a context until it exits, the player backs out, or input ends.
///
/// Unrecognized input prints `config.unrecognized_message` and re-prompts
/// without re-printing the menu. Errors from the context propagate as-is.
pub fn run<C, R, W>(
    context: &mut C,
    state: &mut GameState,
    input: &mut R,
    output: &mut W,
    config: &LoopConfig,
) -> EngineResult<Outcome>
where
    C: Context,
    R: BufRead,
    W: Write,
{
    let mut menu = build_menu(context, state, config)?;
    let mut render = true;
    let mut line = String::new();

    loop {
        if render {
            writeln!(output, "{}", context.entry_text(state))?;
            writeln!(output)?;
            writeln!(output, "{}", menu.render())?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("input closed, leaving context");
            return Ok(Outcome::Back);
        }

        let flow = match menu.select(&line) {
            Some(Selection::Reserved(token)) if token == config.back_token => {
                return Ok(Outcome::Back);
            }
            Some(Selection::Action(action)) => Some(context.apply(action, state)?),
            _ => None,
        };

        match flow {
            Some(Flow::Exit) => return Ok(Outcome::Completed),
            Some(Flow::Continue) => {
                menu = build_menu(context, state, config)?;
                render = true;
            }
            None => {
                writeln!(output, "{}", config.unrecognized_message)?;
                render = false;
            }
        }
    }
}
