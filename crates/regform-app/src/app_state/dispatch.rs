//! Command dispatch: routes parsed commands to the store and pipelines.

use std::io::{self, BufRead, Write};

use regform_common::{ImageSlot, Notification};
use regform_form::{SelectedFile, SubmitOutcome};
use tracing::{info, warn};

use super::command::Command;
use super::core::RegistrationApp;

impl RegistrationApp {
    /// Feed every input line to the app until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            if !self.handle_line(&line?, out)? {
                break;
            }
        }
        Ok(())
    }

    /// Parse and apply one line. Returns `false` when the driver should stop.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(e) => {
                warn!("rejected input line: {e}");
                writeln!(out, "error: {e}")?;
                return Ok(true);
            }
        };

        let keep_going = self.dispatch(command, out)?;
        self.poll_events();
        self.poll_banner();
        self.flush_notifications(out)?;
        Ok(keep_going)
    }

    fn dispatch<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<bool> {
        match command {
            Command::Set { field, value } => {
                self.store.set_field(field, value);
                if let Some(err) = self.store.visible_error(field) {
                    writeln!(out, "{field}: {err}")?;
                }
            }
            Command::Blur(field) => {
                self.store.blur_field(field);
                if let Some(err) = self.store.visible_error(field) {
                    writeln!(out, "{field}: {err}")?;
                }
            }
            Command::Submit => self.submit(out)?,
            Command::Reset => {
                self.store.reset();
                self.after_reset();
                writeln!(out, "form reset")?;
            }
            Command::SelectImage { slot, path } => {
                let file = SelectedFile::from_path(path);
                let handle = match slot {
                    ImageSlot::Profile => self.profile.select_file(file),
                    ImageSlot::Cover => self.cover.select_file(file),
                };
                writeln!(out, "{slot} -> {}", handle.url())?;
            }
            Command::Show => self.render(out)?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn submit<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let ttl = self.notification_ttl();
        match self.store.submit(&mut self.submissions) {
            SubmitOutcome::Submitted => {
                self.after_reset();
                self.notifications.push(
                    Notification::info("Registration", "Form submitted successfully!")
                        .with_ttl(ttl),
                );
            }
            SubmitOutcome::Rejected { error_count } => {
                for (field, err) in self.store.errors() {
                    writeln!(out, "{field}: {err}")?;
                }
                self.notifications.push(
                    Notification::warning(
                        "Registration",
                        format!("{error_count} field(s) need attention"),
                    )
                    .with_ttl(ttl),
                );
            }
        }
        Ok(())
    }

    /// Text fields were reset; images follow only when configured to.
    fn after_reset(&mut self) {
        if self.config.form.reset_clears_images {
            info!("clearing image previews with form reset");
            self.profile.clear();
            self.cover.clear();
        }
    }
}
