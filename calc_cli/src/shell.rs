//! Interactive menu shell.
//!
//! A line-oriented front end over [`CalculatorApp`]: the menu lists the nine
//! calculators, a calculator screen prompts for its mode and fields, shows the
//! result, and `b` goes back to the menu. End of input quits from anywhere.

use std::io::{self, BufRead, Write};

use calc_core::app::{Action, CalculatorApp, MENU_GREETING};
use calc_core::calculations::Feature;
use calc_core::navigation::Screen;

pub struct Shell<R, W> {
    app: CalculatorApp,
    input: R,
    out: W,
}

enum Prompt {
    Line(String),
    Back,
    Eof,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(app: CalculatorApp, input: R, out: W) -> Self {
        Shell { app, input, out }
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let keep_going = match self.app.current() {
                Screen::Menu => self.menu()?,
                Screen::Feature(feature) => self.calculator(feature)?,
            };
            if !keep_going {
                writeln!(self.out, "Bye!")?;
                return Ok(());
            }
        }
    }

    #[cfg(test)]
    pub fn app(&self) -> &CalculatorApp {
        &self.app
    }

    fn menu(&mut self) -> io::Result<bool> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", MENU_GREETING)?;
        for (i, feature) in Feature::ALL.iter().enumerate() {
            writeln!(self.out, "  {}) {}", i + 1, feature.title())?;
        }
        writeln!(self.out, "  q) Quit")?;

        let choice = match self.prompt("Choose: ")? {
            Prompt::Eof => return Ok(false),
            Prompt::Back => return Ok(true),
            Prompt::Line(line) => line,
        };
        if matches!(choice.as_str(), "q" | "quit" | "exit") {
            return Ok(false);
        }

        match menu_choice(&choice) {
            Some(feature) => self.app.dispatch(Action::Open(feature)),
            None => writeln!(self.out, "Unknown choice '{}'.", choice)?,
        }
        Ok(true)
    }

    fn calculator(&mut self, feature: Feature) -> io::Result<bool> {
        writeln!(self.out)?;
        writeln!(self.out, "== {} ==  (b = back)", feature.title())?;

        if feature.has_modes() {
            let labels = feature.mode_labels();
            for (i, label) in labels.iter().enumerate() {
                writeln!(self.out, "  {}) {}", i + 1, label)?;
            }
            let current = self.app.screen(feature).mode.clone().unwrap_or_default();
            match self.prompt(&format!("Mode [{}]: ", current))? {
                Prompt::Eof => return Ok(false),
                Prompt::Back => return self.back(),
                Prompt::Line(line) if line.is_empty() => {}
                Prompt::Line(line) => {
                    let mode = line
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1))
                        .and_then(|i| labels.get(i).map(|l| l.to_string()))
                        .unwrap_or(line);
                    self.app.dispatch(Action::SelectMode(mode));
                }
            }
        }

        for (index, spec) in feature.inputs().iter().enumerate() {
            match self.prompt(&format!("{}: ", spec.hint))? {
                Prompt::Eof => return Ok(false),
                Prompt::Back => return self.back(),
                Prompt::Line(text) => self.app.dispatch(Action::SetInput { index, text }),
            }
        }

        self.app.dispatch(Action::Calculate);
        if let Some(text) = self.app.result_text() {
            writeln!(self.out, "{}", text)?;
        }

        match self.prompt("Enter = again, b = back: ")? {
            Prompt::Eof => Ok(false),
            Prompt::Back => self.back(),
            Prompt::Line(_) => Ok(true),
        }
    }

    fn back(&mut self) -> io::Result<bool> {
        self.app.dispatch(Action::Back);
        Ok(true)
    }

    fn prompt(&mut self, text: &str) -> io::Result<Prompt> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Prompt::Eof);
        }
        let line = line.trim().to_string();
        if line.eq_ignore_ascii_case("b") || line.eq_ignore_ascii_case("back") {
            return Ok(Prompt::Back);
        }
        Ok(Prompt::Line(line))
    }
}

/// Menu number (1-based) or screen id.
fn menu_choice(choice: &str) -> Option<Feature> {
    if let Ok(n) = choice.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| Feature::ALL.get(i).copied());
    }
    choice.parse().ok()
}
