use std::fmt;

/// A single positional reference inside a rule string, e.g. `2B` or `4`.
///
/// `position` indexes the caller's values and choices (zero-based, parsed
/// from the one-based digits in the rule text). `choice` indexes the
/// position's choice list, mapped from the trailing letter (A -> 0,
/// B -> 1, ...); `None` marks a free-input reference with no letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefToken {
    pub(crate) position: usize,
    pub(crate) choice: Option<usize>,
}

impl RefToken {
    pub(crate) fn new(position: usize, choice: Option<usize>) -> Self {
        Self { position, choice }
    }

    /// Zero-based index into the caller's values/choices.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Zero-based choice index, or `None` for a free-input reference.
    #[must_use]
    pub fn choice(&self) -> Option<usize> {
        self.choice
    }
}

impl fmt::Display for RefToken {
    /// Renders the reference as it was spelled in the rule text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position + 1)?;
        if let Some(choice) = self.choice {
            // The grammar only produces a single uppercase letter.
            match u8::try_from(choice).ok().filter(|c| *c < 26) {
                Some(c) => write!(f, "{}", char::from(b'A' + c))?,
                None => write!(f, "#{choice}")?,
            }
        }
        Ok(())
    }
}
