/// Highlighting language assumed until a `.. highlight::` directive says otherwise.
pub const DEFAULT_LANGUAGE: &str = "python";

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Options {
    /// Fallback language for anonymous code blocks and the echoed signature.
    pub language: String,
    /// Render a leading `name(args)` line as a code block.
    pub echo_signature: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            echo_signature: true,
        }
    }
}

impl Options {
    /// Create a new `OptionsBuilder` for fluent configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use docmd_rst::Options;
    ///
    /// let options = Options::builder()
    ///     .with_language("cython")
    ///     .without_signature_echo()
    ///     .build();
    /// assert_eq!(options.language, "cython");
    /// ```
    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Equivalent to `Options::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Builder for [`Options`], created with [`Options::builder`].
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct OptionsBuilder {
    language: Option<String>,
    skip_signature: bool,
}

impl OptionsBuilder {
    /// Set the fallback highlighting language.
    ///
    /// An empty or blank language is ignored.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        let language = language.into();
        if !language.trim().is_empty() {
            self.language = Some(language.trim().to_string());
        }
        self
    }

    /// Treat a leading `name(args)` line as ordinary prose.
    #[must_use]
    pub fn without_signature_echo(mut self) -> Self {
        self.skip_signature = true;
        self
    }

    #[must_use]
    pub fn build(self) -> Options {
        Options {
            language: self
                .language
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            echo_signature: !self.skip_signature,
        }
    }
}
