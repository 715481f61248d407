use crate::{Error, Result};

// Permissive shape check: non-blank local part, "@", non-blank domain,
// ".", non-blank suffix. None of the parts may contain whitespace or "@".
const EMAIL_SHAPE_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

#[derive(Debug)]
pub(crate) struct EmailShape {
    backend: fancy_regex::Regex,
}

impl EmailShape {
    pub(crate) fn new() -> Result<Self> {
        let backend = fancy_regex::Regex::new(EMAIL_SHAPE_PATTERN)
            .map_err(|err| Error::Regex(err.to_string()))?;
        Ok(Self { backend })
    }

    pub(crate) fn is_match(&self, input: &str) -> Result<bool> {
        self.backend
            .is_match(input)
            .map_err(|err| Error::Regex(err.to_string()))
    }
}
