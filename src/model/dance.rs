//! Dancers and dances.

use std::collections::BTreeSet;
use std::fmt;

/// Title given to dances that do not carry one.
pub const UNTITLED: &str = "Untitled";

/// An opaque dancer identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Dancer(String);

impl Dancer {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Dancer {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Dancer {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Dancer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single dance: a title and the set of dancers performing it.
///
/// The dancer set may be empty, which models an intermission that costs
/// nothing in overlap.
///
/// # Examples
///
/// ```
/// use u_recital::model::Dance;
///
/// let dance = Dance::new(["ana", "ben"]).with_title("Waltz");
/// assert_eq!(dance.title(), "Waltz");
/// assert_eq!(dance.len(), 2);
/// assert_eq!(Dance::new(["ana"]).title(), "Untitled");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dance {
    title: String,
    dancers: BTreeSet<Dancer>,
}

impl Dance {
    /// Creates an untitled dance from any collection of dancer names.
    pub fn new<I, D>(dancers: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Dancer>,
    {
        Self {
            title: UNTITLED.to_string(),
            dancers: dancers.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a dance with no dancers.
    pub fn empty() -> Self {
        Self {
            title: UNTITLED.to_string(),
            dancers: BTreeSet::new(),
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn dancers(&self) -> &BTreeSet<Dancer> {
        &self.dancers
    }

    pub fn len(&self) -> usize {
        self.dancers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dancers.is_empty()
    }

    /// Number of dancers shared with `other`.
    pub fn shared_with(&self, other: &Dance) -> usize {
        self.dancers.intersection(&other.dancers).count()
    }
}

impl fmt::Display for Dance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {{", self.title)?;
        for (i, dancer) in self.dancers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{dancer}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_title() {
        assert_eq!(Dance::new(["a"]).title(), UNTITLED);
        assert_eq!(Dance::empty().title(), UNTITLED);
    }

    #[test]
    fn test_duplicate_dancers_collapse() {
        let dance = Dance::new(["a", "b", "a"]);
        assert_eq!(dance.len(), 2);
    }

    #[test]
    fn test_shared_with() {
        let x = Dance::new(["a", "b", "c"]);
        let y = Dance::new(["b", "c", "d"]);
        assert_eq!(x.shared_with(&y), 2);
        assert_eq!(y.shared_with(&x), 2);
        assert_eq!(x.shared_with(&Dance::empty()), 0);
    }

    #[test]
    fn test_identical_construction_is_value_equal() {
        let first = Dance::new(["a", "b"]).with_title("Jig");
        let second = Dance::new(vec!["b".to_string(), "a".to_string()]).with_title("Jig");
        assert_eq!(first, second);
    }

    #[test]
    fn test_dance_display() {
        let dance = Dance::new(["b", "a"]).with_title("Reel");
        assert_eq!(dance.to_string(), "Reel: {a, b}");
        assert_eq!(Dance::empty().to_string(), "Untitled: {}");
    }

    #[test]
    fn test_dancer_display() {
        assert_eq!(Dancer::from("zoe").to_string(), "zoe");
        assert_eq!(Dancer::new("zoe").name(), "zoe");
    }
}
