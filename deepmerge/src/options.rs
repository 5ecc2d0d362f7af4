//! Merge directives and the option record they produce.

use std::fmt;
use std::str::FromStr;

use crate::ArgumentError;

/// A string argument that adjusts merge behaviour instead of adding data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Directive {
    /// Later values replace earlier ones on conflict.
    Override,
    /// Earlier values are kept on conflict.
    NoOverride,
    /// Explicit nulls never replace existing values.
    NoNullOverride,
    /// Conflicting lists are concatenated.
    AppendLists,
    /// Conflicting lists are concatenated, keeping first occurrences only.
    UnionLists,
}

impl Directive {
    /// Every accepted spelling and the directive it selects.
    pub const VOCABULARY: &'static [(&'static str, Self)] = &[
        ("override", Self::Override),
        ("replace", Self::Override),
        ("no_override", Self::NoOverride),
        ("no_null_override", Self::NoNullOverride),
        ("append", Self::AppendLists),
        ("append_lists", Self::AppendLists),
        ("union", Self::UnionLists),
        ("union_lists", Self::UnionLists),
    ];

    /// Canonical spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Override => "override",
            Self::NoOverride => "no_override",
            Self::NoNullOverride => "no_null_override",
            Self::AppendLists => "append_lists",
            Self::UnionLists => "union_lists",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Directive {
    type Err = ArgumentError;

    /// Matching is exact and case-sensitive.
    fn from_str(option: &str) -> Result<Self, Self::Err> {
        Self::VOCABULARY
            .iter()
            .find_map(|(spelling, directive)| (*spelling == option).then_some(*directive))
            .ok_or_else(|| ArgumentError::unrecognised(option))
    }
}

/// How conflicting list values are combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStrategy {
    /// The winning side replaces the list wholesale.
    Replace,
    /// Earlier elements followed by later ones.
    Append,
    /// Like [`ListStrategy::Append`], without repeated elements.
    Union,
}

/// Conflict-resolution settings for one merge invocation.
///
/// # Examples
///
/// ```rust
/// use deepmerge::{Directive, ListStrategy, MergeOptions};
///
/// let options = MergeOptions::from_directives([Directive::NoOverride, Directive::AppendLists]);
/// assert!(!options.override_existing);
/// assert_eq!(options.list_strategy(), ListStrategy::Append);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeOptions {
    /// Later values win scalar conflicts when set; earlier values otherwise.
    pub override_existing: bool,
    /// Explicit nulls never replace existing values.
    pub no_null_override: bool,
    /// Conflicting lists are concatenated.
    pub append_lists: bool,
    /// Conflicting lists are concatenated and de-duplicated.
    pub union_lists: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            override_existing: true,
            no_null_override: false,
            append_lists: false,
            union_lists: false,
        }
    }
}

impl MergeOptions {
    /// Return a copy with `directive` applied.
    #[must_use]
    pub const fn apply(self, directive: Directive) -> Self {
        match directive {
            Directive::Override => Self {
                override_existing: true,
                ..self
            },
            Directive::NoOverride => Self {
                override_existing: false,
                ..self
            },
            Directive::NoNullOverride => Self {
                no_null_override: true,
                ..self
            },
            Directive::AppendLists => Self {
                append_lists: true,
                ..self
            },
            Directive::UnionLists => Self {
                union_lists: true,
                ..self
            },
        }
    }

    /// Apply `directives` in order on top of the defaults.
    #[must_use]
    pub fn from_directives<I>(directives: I) -> Self
    where
        I: IntoIterator<Item = Directive>,
    {
        Self::default().extend(directives)
    }

    /// Apply `directives` in order on top of `self`.
    #[must_use]
    pub fn extend<I>(self, directives: I) -> Self
    where
        I: IntoIterator<Item = Directive>,
    {
        directives.into_iter().fold(self, Self::apply)
    }

    /// List combination in effect. Union takes precedence over append.
    #[must_use]
    pub const fn list_strategy(&self) -> ListStrategy {
        if self.union_lists {
            ListStrategy::Union
        } else if self.append_lists {
            ListStrategy::Append
        } else {
            ListStrategy::Replace
        }
    }
}
