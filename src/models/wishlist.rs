//! Wishlist model.
//!
//! Maps a course code to every `Course` record (all sections, all
//! components) the user is willing to take for it. Keys are unique and
//! keep insertion order; the generator enumerates course subsets in this
//! order.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Course;

/// Insertion-ordered mapping from course code to candidate sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    entries: Vec<(String, Vec<Course>)>,
}

impl Wishlist {
    /// Creates an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups a flat list of course records by code, keeping the order in
    /// which each code first appears.
    pub fn from_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        let mut wishlist = Self::new();
        for course in courses {
            match wishlist.position(&course.code) {
                Some(idx) => wishlist.entries[idx].1.push(course),
                None => wishlist.entries.push((course.code.clone(), vec![course])),
            }
        }
        wishlist
    }

    /// Adds a code with its sections. Replacing an existing code keeps
    /// its position.
    pub fn insert(&mut self, code: impl Into<String>, courses: Vec<Course>) {
        let code = code.into();
        match self.position(&code) {
            Some(idx) => self.entries[idx].1 = courses,
            None => self.entries.push((code, courses)),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_course(mut self, code: impl Into<String>, courses: Vec<Course>) -> Self {
        self.insert(code, courses);
        self
    }

    /// Removes a code, returning its sections.
    pub fn remove(&mut self, code: &str) -> Option<Vec<Course>> {
        let idx = self.position(code)?;
        Some(self.entries.remove(idx).1)
    }

    /// Adds the code when absent, removes it when present.
    ///
    /// Returns `true` if the code is in the wishlist afterwards.
    pub fn toggle(&mut self, code: impl Into<String>, courses: Vec<Course>) -> bool {
        let code = code.into();
        if self.remove(&code).is_some() {
            false
        } else {
            self.entries.push((code, courses));
            true
        }
    }

    /// Sections listed for a code.
    pub fn get(&self, code: &str) -> Option<&[Course]> {
        self.position(code).map(|idx| self.entries[idx].1.as_slice())
    }

    /// Whether the code is present.
    pub fn contains(&self, code: &str) -> bool {
        self.position(code).is_some()
    }

    /// Codes in insertion order.
    pub fn codes(&self) -> Vec<&str> {
        self.entries.iter().map(|(code, _)| code.as_str()).collect()
    }

    /// Iterates `(code, sections)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Course])> {
        self.entries
            .iter()
            .map(|(code, courses)| (code.as_str(), courses.as_slice()))
    }

    /// Number of course codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the wishlist has no codes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of section records across all codes.
    pub fn section_count(&self) -> usize {
        self.entries.iter().map(|(_, c)| c.len()).sum()
    }

    fn position(&self, code: &str) -> Option<usize> {
        self.entries.iter().position(|(c, _)| c == code)
    }
}

impl Serialize for Wishlist {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ordered_map::serialize(&self.entries, serializer)
    }
}

impl<'de> Deserialize<'de> for Wishlist {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = ordered_map::deserialize(deserializer)?;
        Ok(Self { entries })
    }
}

/// Serde helpers that write `Vec<(String, V)>` as a map and read it back
/// in document order. Later duplicates of a key replace earlier values.
pub(crate) mod ordered_map {
    use super::*;

    pub fn serialize<V, S>(entries: &[(String, V)], serializer: S) -> Result<S::Ok, S::Error>
    where
        V: Serialize,
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }

    pub fn deserialize<'de, V, D>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
    where
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }

    struct OrderedVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map keyed by course code")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut entries: Vec<(String, V)> = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, V>()? {
                match entries.iter().position(|(k, _)| *k == key) {
                    Some(idx) => entries[idx].1 = value,
                    None => entries.push((key, value)),
                }
            }
            Ok(entries)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;

    fn course(code: &str, class: &str) -> Course {
        Course::new(code, Section::new(class, "LEC 001"))
    }

    #[test]
    fn test_insertion_order() {
        let w = Wishlist::new()
            .with_course("MATH 135", vec![course("MATH 135", "1")])
            .with_course("CS 136", vec![course("CS 136", "2")])
            .with_course("ECON 101", vec![]);

        assert_eq!(w.codes(), vec!["MATH 135", "CS 136", "ECON 101"]);
        assert_eq!(w.len(), 3);
        assert_eq!(w.section_count(), 2);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut w = Wishlist::new()
            .with_course("A", vec![course("A", "1")])
            .with_course("B", vec![course("B", "2")]);

        w.insert("A", vec![course("A", "3"), course("A", "4")]);
        assert_eq!(w.codes(), vec!["A", "B"]);
        assert_eq!(w.get("A").unwrap().len(), 2);
    }

    #[test]
    fn test_toggle_and_remove() {
        let mut w = Wishlist::new();
        assert!(w.toggle("CS 136", vec![course("CS 136", "1")]));
        assert!(w.contains("CS 136"));
        assert!(!w.toggle("CS 136", vec![]));
        assert!(w.is_empty());
        assert!(w.remove("CS 136").is_none());
    }

    #[test]
    fn test_from_courses_groups_by_code() {
        let w = Wishlist::from_courses(vec![
            course("B", "1"),
            course("A", "2"),
            course("B", "3"),
        ]);
        assert_eq!(w.codes(), vec!["B", "A"]);
        assert_eq!(w.get("B").unwrap().len(), 2);
        assert_eq!(w.get("B").unwrap()[1].section.class_number, "3");
    }

    #[test]
    fn test_serde_preserves_order() {
        let w = Wishlist::new()
            .with_course("ZOOL 100", vec![course("ZOOL 100", "1")])
            .with_course("ART 100", vec![course("ART 100", "2")]);

        let json = serde_json::to_string(&w).unwrap();
        assert!(json.find("ZOOL").unwrap() < json.find("ART").unwrap());

        let back: Wishlist = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
        assert_eq!(back.codes(), vec!["ZOOL 100", "ART 100"]);
    }
}
