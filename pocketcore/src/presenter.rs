//! The seam between the engine and whatever draws it

use crate::engine::{CalcState, Output};
use crate::format::Formatter;
use crate::input::Input;

/// Receives the two strings after every accepted input.
pub trait Presenter {
    fn set_display(&mut self, text: &str);
    fn set_preview(&mut self, text: &str);
}

impl Presenter for Output {
    fn set_display(&mut self, text: &str) {
        self.display.clear();
        self.display.push_str(text);
    }

    fn set_preview(&mut self, text: &str) {
        self.preview.clear();
        self.preview.push_str(text);
    }
}

/// A calculator wired to a presenter.
///
/// The presenter is told the initial state on construction, then once per
/// recognized input. Unknown symbols never reach it.
pub struct Engine<P: Presenter> {
    state: CalcState,
    presenter: P,
}

impl<P: Presenter> Engine<P> {
    pub fn new(presenter: P) -> Self {
        Self::with_formatter(presenter, Formatter::default())
    }

    pub fn with_formatter(presenter: P, formatter: Formatter) -> Self {
        let mut engine = Self {
            state: CalcState::with_formatter(formatter),
            presenter,
        };
        let output = engine.state.output();
        engine.publish(&output);
        engine
    }

    pub fn press(&mut self, input: Input) -> Output {
        let output = self.state.apply(input);
        tracing::trace!(%input, display = %output.display, preview = %output.preview, "input applied");
        self.publish(&output);
        output
    }

    /// Dispatch a raw button symbol. Returns `false` if it was not recognized.
    pub fn press_symbol(&mut self, symbol: &str) -> bool {
        match Input::from_symbol(symbol) {
            Some(input) => {
                self.press(input);
                true
            }
            None => {
                tracing::debug!(symbol, "ignoring unknown symbol");
                false
            }
        }
    }

    /// All-clear.
    pub fn reset(&mut self) {
        self.press(Input::AllClear);
    }

    pub fn state(&self) -> &CalcState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_parts(self) -> (CalcState, P) {
        (self.state, self.presenter)
    }

    fn publish(&mut self, output: &Output) {
        self.presenter.set_display(&output.display);
        self.presenter.set_preview(&output.preview);
    }
}
