use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};

/// CSS specificity as `(ids, classes, types)`. Ordering is lexicographic,
/// which is the cascade order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct SpecificityScore {
    pub ids: u32,
    pub classes: u32,
    pub types: u32,
}

impl SpecificityScore {
    pub const fn new(ids: u32, classes: u32, types: u32) -> Self {
        Self {
            ids,
            classes,
            types,
        }
    }

    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.ids, self.classes, self.types)
    }

    /// Single-number form: `ids*10000 + classes*100 + types`. Only ordered
    /// like the tuple while each component stays below 100.
    pub fn score(&self) -> u32 {
        self.ids
            .saturating_mul(10_000)
            .saturating_add(self.classes.saturating_mul(100))
            .saturating_add(self.types)
    }
}

impl Add for SpecificityScore {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.ids + rhs.ids,
            self.classes + rhs.classes,
            self.types + rhs.types,
        )
    }
}

impl AddAssign for SpecificityScore {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for SpecificityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.ids, self.classes, self.types)
    }
}

impl Serialize for SpecificityScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SpecificityScore", 4)?;
        s.serialize_field("ids", &self.ids)?;
        s.serialize_field("classes", &self.classes)?;
        s.serialize_field("types", &self.types)?;
        s.serialize_field("score", &self.score())?;
        s.end()
    }
}

/// Components of the first selector in a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorParts {
    /// Leading type selector, if the selector starts with one.
    pub tag: Option<String>,
    pub ids: Vec<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<String>,
    /// Pseudo-class and pseudo-element names.
    pub pseudo: Vec<String>,
}
