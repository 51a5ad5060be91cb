//! Lookup from object handles to their layer masks.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::layers::{Layered, Layers};

/// Resolves an object handle to the layer mask it owns.
///
/// The scene graph owns the objects; a [`Selection`](super::Selection) only
/// holds handles and reaches the masks through this trait. Returning `None`
/// means the handle does not name a live object.
pub trait LayerStore<K: ?Sized> {
    /// Mutable access to the mask of `key`, if the object exists.
    fn layers_mut(&mut self, key: &K) -> Option<&mut Layers>;
}

impl<K, V, S> LayerStore<K> for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: Layered,
    S: BuildHasher,
{
    fn layers_mut(&mut self, key: &K) -> Option<&mut Layers> {
        self.get_mut(key).map(Layered::layers_mut)
    }
}

impl<V: Layered> LayerStore<usize> for [V] {
    fn layers_mut(&mut self, key: &usize) -> Option<&mut Layers> {
        self.get_mut(*key).map(Layered::layers_mut)
    }
}

impl<V: Layered> LayerStore<usize> for Vec<V> {
    fn layers_mut(&mut self, key: &usize) -> Option<&mut Layers> {
        self.as_mut_slice().layers_mut(key)
    }
}
