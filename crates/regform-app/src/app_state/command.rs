//! Line-oriented command grammar.

use std::path::PathBuf;

use regform_common::{FormError, ImageSlot};
use regform_form::FieldId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: FieldId, value: String },
    Blur(FieldId),
    Submit,
    Reset,
    SelectImage { slot: ImageSlot, path: PathBuf },
    Show,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, FormError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = split_word(line);
        let command = match verb {
            "set" => {
                let (field, value) = split_word(rest);
                Command::Set {
                    field: parse_field(verb, field)?,
                    value: value.to_string(),
                }
            }
            "blur" => Command::Blur(parse_field(verb, rest)?),
            "submit" | "confirm" => Command::Submit,
            "reset" | "cancel" => Command::Reset,
            "profile" => image(ImageSlot::Profile, rest)?,
            "cover" => image(ImageSlot::Cover, rest)?,
            "show" => Command::Show,
            "quit" | "exit" => Command::Quit,
            other => return Err(FormError::InvalidCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

fn parse_field(verb: &str, name: &str) -> Result<FieldId, FormError> {
    if name.is_empty() {
        return Err(FormError::InvalidCommand(format!("{verb} needs a field name")));
    }
    name.parse()
}

fn image(slot: ImageSlot, path: &str) -> Result<Command, FormError> {
    if path.is_empty() {
        return Err(FormError::InvalidCommand(format!("{slot} needs a file path")));
    }
    Ok(Command::SelectImage {
        slot,
        path: PathBuf::from(path),
    })
}
