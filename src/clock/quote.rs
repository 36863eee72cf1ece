use std::fmt;

/// One quote mentioning a time of day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quote {
    /// Time the quote mentions, as `HH:MM`.
    pub time: String,
    /// Text before the time phrase.
    pub quote_first: String,
    /// The time phrase itself.
    pub quote_time: String,
    /// Text after the time phrase.
    pub quote_last: String,
    pub title: String,
    pub author: String,
    pub gutenberg_reference: String,
    /// Stable identifier; empty for the built-in quotes.
    pub id: String,
}

impl Quote {
    /// Shown when no quote exists for the requested time.
    pub fn fallback() -> Self {
        Self {
            quote_first: "Apologies, a quote has not yet been unearthed for the current time, \
                          instead, for now, I leave you with this quote from Douglas Adams.\n\n\n"
                .to_string(),
            quote_last: "\u{201c}Time is an illusion. Lunchtime doubly so.\u{201d}".to_string(),
            title: "The Hitchhiker's Guide to the Galaxy".to_string(),
            author: "Douglas Adams".to_string(),
            ..Self::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}\n\n- {}, {}, {}",
            self.quote_first,
            self.quote_time,
            self.quote_last,
            self.title,
            self.author,
            self.gutenberg_reference
        )
    }
}
