//! Terminal adapters for the contact form capabilities. On the contact page
//! these would be the alert dialog, the generated `mailto:` link and the
//! form's input elements; on the command line the console stands in for all
//! three.

use crate::{
    fields::{FieldId, StaticFields},
    handler::{MailComposer, Notifier},
    mailto::MailtoLink,
};
use std::io::{self, BufRead, Write};

/// Shows validation messages on standard output.
#[derive(Debug)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        println!("{message}");
    }
}

/// "Opens" the mail client by printing the composed `mailto:` URI, ready to
/// be followed by the user.
#[derive(Debug)]
pub struct ConsoleMailComposer;

impl MailComposer for ConsoleMailComposer {
    fn compose(&self, link: &MailtoLink) {
        println!("{}", link.href());
    }
}

/// Prompt for the five contact fields, one line each, and collect the
/// answers into a field surface. Only the line terminator is stripped; any
/// other whitespace the user types is kept.
pub fn read_fields<R, W>(input: &mut R, output: &mut W) -> io::Result<StaticFields>
where
    R: BufRead,
    W: Write,
{
    let mut fields = StaticFields::default();

    for field in FieldId::ALL {
        write!(output, "{field}: ")?;
        output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        fields = fields.set(field, line.trim_end_matches(['\r', '\n']));
    }

    Ok(fields)
}
