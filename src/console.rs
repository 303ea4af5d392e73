use color_eyre::{eyre::eyre, eyre::Report, Result};
use superconsole::{style::Stylize, Component, Line, SuperConsole};

#[derive(Debug, Default)]
pub struct ConsoleState {
    pub messages: Vec<String>,
    /// Failure headline and the report it introduces.
    pub report: Option<(String, Report)>,
    pub elapsed: Option<i64>,
}

impl ConsoleState {
    fn report_lines(report: &Report) -> Vec<String> {
        report
            .chain()
            .enumerate()
            .map(|(i, e)| format!("    {i}: {e}"))
            .collect()
    }
}

#[derive(Debug)]
pub struct Console;

impl Component for Console {
    fn draw_unchecked(
        &self,
        state: &superconsole::State,
        _dimensions: superconsole::Dimensions,
        _mode: superconsole::DrawMode,
    ) -> anyhow::Result<superconsole::Lines> {
        let mut lines = vec![];
        let c_state = state.get::<ConsoleState>()?;
        for message in &c_state.messages {
            lines.push(Line(vec![message.to_string().try_into()?]));
        }

        if let Some((headline, report)) = &c_state.report {
            lines.push(Line(vec![
                "✗ ".to_string().dark_red().try_into()?,
                headline.to_string().try_into()?,
            ]));
            lines.push(Line(vec!["Error:".try_into()?]));
            for line in ConsoleState::report_lines(report) {
                lines.push(Line(vec![line.dark_red().try_into()?]));
            }
        }

        if let Some(elapsed) = &c_state.elapsed {
            lines.push(Line(vec![
                "✓ ".to_string().dark_green().try_into()?,
                format!("Built in {elapsed} ms").try_into()?,
            ]));
        }
        Ok(lines)
    }
}

/// Status output for a command run. Draws through superconsole on a terminal
/// and falls back to plain lines otherwise.
pub struct ConsoleHandle {
    console: Option<SuperConsole>,
    state: ConsoleState,
    failures: Vec<String>,
}

impl ConsoleHandle {
    pub fn new() -> ConsoleHandle {
        ConsoleHandle {
            console: SuperConsole::new(Box::new(Console {})),
            state: ConsoleState::default(),
            failures: Vec::new(),
        }
    }

    /// A handle that never draws to a terminal.
    pub fn plain() -> ConsoleHandle {
        ConsoleHandle {
            console: None,
            state: ConsoleState::default(),
            failures: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.state.messages
    }

    /// Headlines of every report logged so far.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    fn render(&mut self) -> Result<()> {
        match &mut self.console {
            Some(console) => console
                .render(&superconsole::state!(&self.state))
                .map_err(|e| eyre!(Box::new(e))),
            None => Ok(()),
        }
    }

    pub fn log(&mut self, message: &str) -> Result<()> {
        if self.console.is_none() {
            println!("{message}");
        }
        self.state.messages.push(message.to_string());
        self.render()
    }

    /// Shows `report`'s error chain under `headline`, e.g. "Build failed".
    pub fn log_report(&mut self, headline: &str, report: Report) -> Result<()> {
        if self.console.is_none() {
            eprintln!("{headline}");
            eprintln!("Error:");
            for line in ConsoleState::report_lines(&report) {
                eprintln!("{line}");
            }
        }
        self.failures.push(headline.to_string());
        self.state.report = Some((headline.to_string(), report));
        self.render()?;
        self.state.report = None;
        Ok(())
    }

    pub fn log_elapsed(&mut self, elapsed: i64) -> Result<()> {
        if self.console.is_none() {
            println!("Built in {elapsed} ms");
        }
        self.state.elapsed = Some(elapsed);
        self.render()?;
        self.state.elapsed = None;
        Ok(())
    }
}

impl Default for ConsoleHandle {
    fn default() -> Self {
        ConsoleHandle::new()
    }
}
