//! Name lookup over id-addressed registries.

/// A registry whose entries live at numeric ids and carry a name.
///
/// Implementors provide id-level access; name lookups resolve to the lowest
/// id with a matching name.
///
/// # Example
///
/// ```
/// use metasprite::models::SpriteCollection;
/// use metasprite::registry::{MetaSpriteRegistry, Registry};
///
/// let mut registry = MetaSpriteRegistry::with_capacity(4);
/// registry.replace(2, SpriteCollection::new("hero"));
///
/// assert_eq!(registry.id_of("hero"), Some(2));
/// assert!(registry.contains("hero"));
/// assert_eq!(registry.len(), 4);
/// ```
pub trait Registry<V> {
    /// Lowest id whose entry is named `name`.
    fn id_of(&self, name: &str) -> Option<usize>;

    /// Entry stored at `id`, if the slot is populated.
    fn entry(&self, id: usize) -> Option<&V>;

    /// Number of populated entries.
    fn len(&self) -> usize;

    /// Empty every entry.
    fn clear(&mut self);

    /// Names of populated entries in id order.
    fn names(&self) -> Box<dyn Iterator<Item = &String> + '_>;

    fn contains(&self, name: &str) -> bool {
        self.id_of(name).is_some()
    }

    /// Entry with the lowest id named `name`.
    fn get(&self, name: &str) -> Option<&V> {
        self.id_of(name).and_then(|id| self.entry(id))
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
