//! The set of sentence types an application decodes.
//!
//! A [`Registry`] hands out descriptors by name or by registration index.
//! Lookups never fail: anything unregistered resolves to the `DUMMY`
//! placeholder, which no line matches, so a decoder bound to it reports the
//! type as absent instead of misreading another type's fields.

use alloc::vec::Vec;

use crate::descriptor::SentenceDescriptor;

/// The set of sentence types an application decodes.
///
/// Lookups never fail: a name or index that matches nothing yields the
/// [`dummy`](SentenceDescriptor::dummy) placeholder, which no sentence
/// matches. Use [`try_get`](Registry::try_get) to tell the two apart.
#[derive(Debug, Clone)]
pub struct Registry {
    descriptors: Vec<SentenceDescriptor>,
    dummy: SentenceDescriptor,
}

impl Registry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
            dummy: SentenceDescriptor::dummy(),
        }
    }

    /// A registry holding every [`catalog`](crate::catalog) descriptor.
    #[must_use]
    pub fn with_catalog() -> Self {
        let mut registry = Self::new();
        for d in crate::catalog::all() {
            registry.add(d);
        }
        registry
    }

    /// Registers `descriptor` and returns the number now registered.
    ///
    /// A descriptor with the same name as an existing one replaces it.
    pub fn add(&mut self, descriptor: SentenceDescriptor) -> usize {
        if let Some(slot) = self
            .descriptors
            .iter_mut()
            .find(|d| d.name() == descriptor.name())
        {
            log::debug!("replacing descriptor {}", descriptor.name());
            *slot = descriptor;
        } else {
            self.descriptors.push(descriptor);
        }
        self.descriptors.len()
    }

    /// Number of registered descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// The descriptor called `name`, or the placeholder.
    #[must_use]
    pub fn get(&self, name: &str) -> &SentenceDescriptor {
        self.try_get(name).unwrap_or(&self.dummy)
    }

    /// The descriptor called `name`, if registered.
    #[must_use]
    pub fn try_get(&self, name: &str) -> Option<&SentenceDescriptor> {
        self.descriptors.iter().find(|d| d.name() == name)
    }

    /// The descriptor registered at `index` (in registration order), or the
    /// placeholder.
    #[must_use]
    pub fn get_index(&self, index: usize) -> &SentenceDescriptor {
        self.descriptors.get(index).unwrap_or(&self.dummy)
    }

    /// Iterates over the registered descriptors in registration order.
    pub fn iter(&self) -> core::slice::Iter<'_, SentenceDescriptor> {
        self.descriptors.iter()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a SentenceDescriptor;
    type IntoIter = core::slice::Iter<'a, SentenceDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
