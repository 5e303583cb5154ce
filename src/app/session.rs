use crate::app::form::DonationForm;
use crate::app::render::{self, OutputFormat};
use crate::core::registry::{DonationRegistry, RecordOutcome};
use crate::utils::error::{DeskError, Result};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  campaigns                      show every campaign (alias: view)
  donate                         fill in the donation form field by field
  donate <cause> | <name> | <amount>
                                 donate in one line
  donors                         list donors per campaign
  report                         JSON snapshot of all campaigns
  format <text|json|csv>         change the view format
  help                           show this message
  quit                           leave (alias: exit)";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Campaigns,
    Donors,
    Donate(Option<DonationForm>),
    Report,
    Format(OutputFormat),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "campaigns" | "view" => Ok(Command::Campaigns),
            "donors" => Ok(Command::Donors),
            "donate" if rest.is_empty() => Ok(Command::Donate(None)),
            "donate" => Ok(Command::Donate(Some(DonationForm::parse_inline(rest)))),
            "report" => Ok(Command::Report),
            "format" => Ok(Command::Format(rest.parse()?)),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(DeskError::UnknownCommand {
                command: word.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub donations: usize,
    pub campaigns_opened: usize,
    pub rejected: usize,
}

enum Flow {
    Continue,
    Quit,
}

/// Interactive front desk: reads commands from `input`, writes views and
/// messages to `output`, and routes every donation through the registry.
pub struct Session<R, W> {
    input: R,
    output: W,
    registry: DonationRegistry,
    format: OutputFormat,
    batch: bool,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, registry: DonationRegistry) -> Self {
        Self {
            input,
            output,
            registry,
            format: OutputFormat::default(),
            batch: false,
            summary: SessionSummary::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_batch(mut self, batch: bool) -> Self {
        self.batch = batch;
        self
    }

    pub fn registry(&self) -> &DonationRegistry {
        &self.registry
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn into_registry(self) -> DonationRegistry {
        self.registry
    }

    /// Runs until `quit` or end of input. Input mistakes are reported and the
    /// loop continues; only console and rendering failures end it early.
    pub fn run(&mut self) -> Result<SessionSummary> {
        if !self.batch {
            writeln!(self.output, "Donation Management System")?;
            writeln!(self.output, "Type 'help' for the list of commands.")?;
        }

        loop {
            self.prompt("> ")?;
            let Some(line) = self.read_line()? else {
                break;
            };
            if line.is_empty() {
                continue;
            }

            self.summary.commands += 1;
            match Command::parse(&line).and_then(|command| self.execute(command)) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) if e.is_recoverable() => {
                    tracing::debug!("Input rejected: {}", e);
                    writeln!(self.output, "Error: {}", e.user_friendly_message())?;
                }
                Err(e) => return Err(e),
            }
        }

        self.output.flush()?;
        tracing::debug!("Session finished: {:?}", self.summary);
        Ok(self.summary)
    }

    fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Campaigns => {
                if self.registry.is_empty() && self.format == OutputFormat::Text {
                    writeln!(self.output, "No campaigns yet.")?;
                } else {
                    let view = render::campaigns_view(&self.registry, self.format)?;
                    self.write_view(&view)?;
                }
            }
            Command::Donors => {
                let view = render::donors_view(&self.registry, self.format)?;
                self.write_view(&view)?;
            }
            Command::Donate(form) => {
                let form = match form {
                    Some(form) => form,
                    None => self.fill_form()?,
                };
                self.donate(&form)?;
            }
            Command::Report => {
                let view = render::report(&self.registry)?;
                self.write_view(&view)?;
            }
            Command::Format(format) => {
                self.format = format;
                writeln!(self.output, "Output format set to {}.", format)?;
            }
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn donate(&mut self, form: &DonationForm) -> Result<()> {
        let donation = match form.validate() {
            Ok(donation) => donation,
            Err(e) => {
                self.summary.rejected += 1;
                return Err(e);
            }
        };

        if donation.submit(&mut self.registry) == RecordOutcome::Created {
            self.summary.campaigns_opened += 1;
        }
        self.summary.donations += 1;
        writeln!(self.output, "Donation successful!")?;
        Ok(())
    }

    fn fill_form(&mut self) -> Result<DonationForm> {
        self.prompt("Campaign Cause: ")?;
        let cause = self.read_line()?.unwrap_or_default();
        self.prompt("Your Name: ")?;
        let donor_name = self.read_line()?.unwrap_or_default();
        self.prompt("Donation Amount (Rs): ")?;
        let amount = self.read_line()?.unwrap_or_default();
        Ok(DonationForm::new(cause, donor_name, amount))
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        if !self.batch {
            write!(self.output, "{}", text)?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Invalid UTF-8 bytes come back as U+FFFD instead of failing the read.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&bytes).trim().to_string()))
    }

    fn write_view(&mut self, view: &str) -> Result<()> {
        if view.ends_with('\n') {
            write!(self.output, "{}", view)?;
        } else {
            writeln!(self.output, "{}", view)?;
        }
        Ok(())
    }
}
