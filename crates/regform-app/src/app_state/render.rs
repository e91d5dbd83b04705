//! Plain-text rendering of the form for the `show` command and
//! acknowledgment output.

use std::io::{self, Write};

use regform_common::NotificationLevel;
use regform_form::FieldId;

use super::core::RegistrationApp;

impl RegistrationApp {
    pub(super) fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.banner.css_property() {
            Some((property, value)) => writeln!(out, "[banner] {property}: {value}")?,
            None => writeln!(
                out,
                "[banner] Personal Details: Update your information and find out how it's used."
            )?,
        }
        writeln!(out, "[cover] {}", self.cover.action_label())?;

        let avatar = self.profile.current().map_or("(none)", |h| h.url());
        writeln!(out, "[profile] {avatar} ({})", self.profile.action_label())?;

        writeln!(
            out,
            "[form] phase={:?} dirty={} submits={}",
            self.store.phase(),
            self.store.is_dirty(),
            self.store.submit_count()
        )?;

        for id in FieldId::ALL {
            let props = self.store.field_props(id);
            match props.helper_text {
                Some(help) => writeln!(out, "  {:<9} = {:?}  ! {help}", props.name, props.value)?,
                None => writeln!(out, "  {:<9} = {:?}", props.name, props.value)?,
            }
        }

        if let Some(last) = self.submissions.last() {
            let json = serde_json::to_string(last).unwrap_or_default();
            writeln!(out, "[last submission] {json}")?;
        }
        Ok(())
    }

    pub(super) fn flush_notifications<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        for n in self.notifications.drain_visible() {
            let level = match n.level {
                NotificationLevel::Info => "info",
                NotificationLevel::Warning => "warning",
                NotificationLevel::Error => "error",
            };
            writeln!(out, "[{level}] {}: {}", n.title, n.body)?;
        }
        Ok(())
    }
}
