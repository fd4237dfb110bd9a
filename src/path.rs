use alloc::string::String;
use core::fmt;

/// Forward-slash path used for sources, headers and install destinations.
/// Backslashes are normalized on construction.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Path(String);

const SEP: &str = "/";

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({})", self.0)
    }
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(path: impl AsRef<str>) -> Self {
        Self(path.as_ref().replace("\\", "/"))
    }

    pub fn join(&self, path: impl AsRef<str>) -> Self {
        if path.as_ref().starts_with(SEP) || self.0.is_empty() {
            return Self(path.as_ref().into());
        }

        let mut new_path = String::from(self.0.trim_end_matches(SEP));
        new_path.push_str(SEP);
        new_path.push_str(path.as_ref());
        Self(new_path)
    }

    /// The containing directory, or an empty path when there is none.
    pub fn parent(&self) -> Self {
        match self.0.rfind(SEP) {
            Some(pos) => Self(self.0[..pos].into()),
            None => Self::new(),
        }
    }

    /// The part before the first separator, or the whole path.
    pub fn first_component(&self) -> &str {
        match self.0.find(SEP) {
            Some(pos) => &self.0[..pos],
            None => &self.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        assert_eq!(Path::from("a/b").join("c.hpp"), Path::from("a/b/c.hpp"));
        assert_eq!(Path::from("a/").join("c.hpp"), Path::from("a/c.hpp"));
        assert_eq!(Path::from("a").join("/abs"), Path::from("/abs"));
        assert_eq!(Path::new().join("c.hpp"), Path::from("c.hpp"));
    }

    #[test]
    fn test_parent() {
        assert_eq!(Path::from("a/b/c.hpp").parent(), Path::from("a/b"));
        assert_eq!(Path::from("c.hpp").parent(), Path::new());
    }

    #[test]
    fn test_first_component() {
        assert_eq!(Path::from("a/b/c.hpp").first_component(), "a");
        assert_eq!(Path::from("c.hpp").first_component(), "c.hpp");
    }

    #[test]
    fn test_backslashes_are_normalized() {
        assert_eq!(Path::from("a\\b\\c.hpp"), Path::from("a/b/c.hpp"));
    }
}
