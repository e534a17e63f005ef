//! Recipe emission.
//!
//! A recipe template is plain text (typically a `PKGBUILD`) containing placeholder
//! tokens. [`emit`] replaces each token with the matching field of a
//! [`ResolvedDescriptor`], passed through an escaping function:
//!
//! | Token         | Value                                  |
//! |---------------|----------------------------------------|
//! | `CRATE`       | package name                           |
//! | `VERSION`     | resolved version                       |
//! | `BINARIES`    | binary names, space separated          |
//! | `DESCRIPTION` | description or empty                   |
//! | `URL`         | homepage/repository/documentation      |
//! | `LICENSE`     | license tokens, space separated        |
//!
//! Substitution is a single left-to-right pass over the template. Text inserted for
//! one token is never scanned again, so a description containing the word `VERSION`
//! stays as written. Text that is not one of these tokens is left untouched.
//!
//! ```rust
//! use pkgcrate::package::ResolvedDescriptor;
//! use pkgcrate::recipe::emit;
//! use pkgcrate::utils::shell::quote;
//!
//! let descriptor = ResolvedDescriptor {
//!     name: "fd-find".to_string(),
//!     binaries: vec!["fd".to_string()],
//!     version: "10.2.0".to_string(),
//!     license_tokens: vec!["MIT".to_string(), "Apache-2.0".to_string()],
//!     description: "A simple, fast alternative to 'find'".to_string(),
//!     url: "https://github.com/sharkdp/fd".to_string(),
//! };
//!
//! let recipe = emit(&descriptor, "pkgname=CRATE\nlicense=(LICENSE)\n", quote);
//! assert_eq!(recipe, "pkgname=fd-find\nlicense=(MIT Apache-2.0)\n");
//! ```

pub mod writer;

pub use writer::{RecipeWriter, load_template};

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::package::ResolvedDescriptor;

/// Placeholder tokens recognised in recipe templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Crate,
    Version,
    Binaries,
    Description,
    Url,
    License,
}

impl Token {
    pub const ALL: [Token; 6] = [
        Token::Crate,
        Token::Version,
        Token::Binaries,
        Token::Description,
        Token::Url,
        Token::License,
    ];

    /// Literal text of the token in a template.
    pub const fn as_str(self) -> &'static str {
        match self {
            Token::Crate => "CRATE",
            Token::Version => "VERSION",
            Token::Binaries => "BINARIES",
            Token::Description => "DESCRIPTION",
            Token::Url => "URL",
            Token::License => "LICENSE",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.as_str() == text)
    }

    /// Escaped replacement text for this token.
    ///
    /// List fields escape each item separately and join them with a space, so every
    /// binary name and license token stays one shell word.
    pub fn render<F>(self, descriptor: &ResolvedDescriptor, escape: F) -> String
    where
        F: Fn(&str) -> String,
    {
        match self {
            Token::Crate => escape(&descriptor.name),
            Token::Version => escape(&descriptor.version),
            Token::Binaries => join_escaped(&descriptor.binaries, escape),
            Token::Description => escape(&descriptor.description),
            Token::Url => escape(&descriptor.url),
            Token::License => join_escaped(&descriptor.license_tokens, escape),
        }
    }
}

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation: Vec<&str> = Token::ALL.iter().map(|t| t.as_str()).collect();
    Regex::new(&alternation.join("|")).expect("token alternation is a valid regex")
});

/// Substitute every token in `template` with the escaped descriptor fields.
pub fn emit<F>(descriptor: &ResolvedDescriptor, template: &str, escape: F) -> String
where
    F: Fn(&str) -> String,
{
    TOKEN_PATTERN
        .replace_all(template, |caps: &Captures<'_>| match Token::parse(&caps[0]) {
            Some(token) => token.render(descriptor, &escape),
            None => caps[0].to_string(),
        })
        .into_owned()
}

fn join_escaped<F>(items: &[String], escape: F) -> String
where
    F: Fn(&str) -> String,
{
    items.iter().map(|item| escape(item)).collect::<Vec<_>>().join(" ")
}
