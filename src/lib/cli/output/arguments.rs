//! Types and procedures that represents a command line argument,
//! or collections of command line arguments

use std::ops::Deref;
use std::path::Path;
use std::{borrow::Borrow, ffi::OsStr, path::PathBuf};

/// Type for represent a command line argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument(String);

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Argument {
        Self(value)
    }
}

impl From<&String> for Argument {
    fn from(value: &String) -> Argument {
        Self(value.clone())
    }
}

impl Deref for Argument {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&Path> for Argument {
    fn from(value: &Path) -> Self {
        Self::from(format!("{}", value.display()))
    }
}

impl From<PathBuf> for Argument {
    fn from(value: PathBuf) -> Self {
        Self::from(format!("{}", value.display()))
    }
}

impl Borrow<str> for Argument {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<OsStr> for Argument {
    fn as_ref(&self) -> &OsStr {
        OsStr::new(&self.0)
    }
}

impl core::fmt::Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strong type for represent a linear collection of [`Argument`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Arguments(Vec<Argument>);
impl Arguments {
    /// Returns a new collection of [`Argument`] with the specified capacity
    pub fn with_capacity(cap: usize) -> Self {
        Self(Vec::with_capacity(cap))
    }

    /// Creates and stores a new [`Argument`] to the end of this collection
    pub fn create_and_push<T>(&mut self, val: T)
    where
        T: Into<Argument>,
    {
        self.0.push(val.into())
    }

    /// Given an optional, adds the wrapper inner value if there's some element,
    /// otherwise leaves
    pub fn push_opt(&mut self, arg: Option<Argument>) {
        if let Some(val) = arg {
            self.0.push(val)
        }
    }

    /// Extends the underlying collection from a Iterator of [`Argument`]
    pub fn extend(&mut self, iter: impl IntoIterator<Item = Argument>) {
        self.0.extend(iter);
    }
}

impl Deref for Arguments {
    type Target = [Argument];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Arguments {
    type Item = Argument;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Into<Argument>> FromIterator<T> for Arguments {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl core::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// A program plus the [`Arguments`] that it will receive.
///
/// The arguments are handed to the OS one by one, never through a shell, so
/// its [`core::fmt::Display`] output is only meant to be read by humans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: Argument,
    pub args: Arguments,
}

impl CommandLine {
    pub fn new<P: Into<Argument>>(program: P, args: Arguments) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl core::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.program)
        } else {
            write!(f, "{} {}", self.program, self.args)
        }
    }
}
