use std::fmt::{Display, Formatter};

use derive_getters::Getters;

use crate::submission::recipients::RecipientField::{Bcc, Cc, ReplyTo, To};

/// The recipient-bearing form fields and the bucket each one feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientField {
    To,
    Cc,
    Bcc,
    ReplyTo,
}

impl RecipientField {
    /// Fields carrying exactly one address.
    pub const SINGLE: &'static [RecipientField] = &[To];
    /// Fields packing several addresses separated by `;`.
    pub const DELIMITED: &'static [RecipientField] = &[Cc, Bcc, ReplyTo];

    /// The field name under which the address arrives in a form payload.
    pub fn field_name(&self) -> &'static str {
        match self {
            To => "_to",
            Cc => "_cc",
            Bcc => "_bcc",
            ReplyTo => "_replyTo",
        }
    }
}

impl Display for RecipientField {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.field_name())
    }
}

/// Accumulates resolved addresses while a submission is being validated.
/// Once validation succeeds, the set is carried around immutably inside a
/// `ValidSubmission`.
#[derive(Debug, Clone, Default, PartialEq, Getters)]
pub struct RecipientSet {
    to: Option<String>,
    cc: Vec<String>,
    bcc: Vec<String>,
    reply_to: Vec<String>,
}

impl RecipientSet {
    /// `to` holds a single address; the other buckets append in resolution
    /// order, duplicates included.
    pub fn add(&mut self, field: RecipientField, address: String) {
        match field {
            To => self.to = Some(address),
            Cc => self.cc.push(address),
            Bcc => self.bcc.push(address),
            ReplyTo => self.reply_to.push(address),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::submission::recipients::RecipientField::{Bcc, Cc, ReplyTo, To};
    use crate::submission::recipients::RecipientSet;

    #[test]
    fn should_overwrite_to_bucket() {
        let mut recipients = RecipientSet::default();

        recipients.add(To, "first@example.com".to_owned());
        recipients.add(To, "second@example.com".to_owned());

        assert_eq!(&Some("second@example.com".to_owned()), recipients.to());
    }

    #[test]
    fn should_append_to_delimited_buckets_in_order() {
        let mut recipients = RecipientSet::default();

        recipients.add(Cc, "a@example.com".to_owned());
        recipients.add(Cc, "b@example.com".to_owned());
        recipients.add(Bcc, "c@example.com".to_owned());
        recipients.add(ReplyTo, "d@example.com".to_owned());

        assert_eq!(
            &vec!["a@example.com".to_owned(), "b@example.com".to_owned()],
            recipients.cc()
        );
        assert_eq!(&vec!["c@example.com".to_owned()], recipients.bcc());
        assert_eq!(&vec!["d@example.com".to_owned()], recipients.reply_to());
    }

    #[test]
    fn should_keep_duplicates_in_delimited_buckets() {
        let mut recipients = RecipientSet::default();

        recipients.add(Bcc, "same@example.com".to_owned());
        recipients.add(Bcc, "same@example.com".to_owned());

        assert_eq!(2, recipients.bcc().len());
    }
}
