//! CSS classes for components.

use dioxus_core::{prelude::*, AttributeValue};
use smallvec::SmallVec;
use std::{borrow::Cow, fmt};

/// An ordered list of CSS classes without duplicates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Class {
    /// A list of classes.
    classes: SmallVec<[&'static str; 6]>,
}

impl Class {
    /// Creates a new instance from a whitespace-separated class string.
    #[inline]
    pub fn new(class: &'static str) -> Self {
        let mut instance = Self::default();
        for class in class.split_whitespace() {
            instance.add(class);
        }
        instance
    }

    /// Creates a new instance from `(condition, class)` pairs,
    /// keeping the classes whose condition holds in the given order.
    pub fn with_conditions<I>(conditions: I) -> Self
    where
        I: IntoIterator<Item = (bool, &'static str)>,
    {
        let mut instance = Self::default();
        for (condition, class) in conditions {
            instance.add_if(condition, class);
        }
        instance
    }

    /// Adds a class to the list, omitting any that are already present.
    #[inline]
    pub fn add(&mut self, class: &'static str) {
        if !(class.is_empty() || self.contains(class)) {
            self.classes.push(class);
        }
    }

    /// Adds a class to the list if the condition is `true`.
    #[inline]
    pub fn add_if(&mut self, condition: bool, class: &'static str) {
        if condition {
            self.add(class);
        }
    }

    /// Appends all the classes from another list.
    #[inline]
    pub fn extend(&mut self, other: &Class) {
        for &class in other.classes.iter() {
            self.add(class);
        }
    }

    /// Removes a class from the list.
    #[inline]
    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|s| s != &class)
    }

    /// Returns `true` if a given class has been added.
    #[inline]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|&s| s == class)
    }

    /// Returns an iterator over the classes.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.classes.iter().copied()
    }

    /// Returns the number of classes.
    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns `true` if the class list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Formats `self` as a `Cow<str>`.
    pub fn format(&self) -> Cow<'_, str> {
        match self.classes.as_slice() {
            [] => Cow::Borrowed(""),
            [class] => Cow::Borrowed(class),
            classes => Cow::Owned(classes.join(" ")),
        }
    }
}

impl From<&'static str> for Class {
    #[inline]
    fn from(class: &'static str) -> Self {
        Self::new(class)
    }
}

impl<const N: usize> From<[&'static str; N]> for Class {
    #[inline]
    fn from(classes: [&'static str; N]) -> Self {
        Self::with_conditions(classes.map(|class| (true, class)))
    }
}

impl fmt::Display for Class {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl IntoAttributeValue for Class {
    #[inline]
    fn into_value(self) -> AttributeValue {
        AttributeValue::Text(self.format().into_owned())
    }
}
