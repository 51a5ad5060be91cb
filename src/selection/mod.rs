//! Object selections backed by a dedicated render layer.
//!
//! A [`Selection`] is a set of object handles paired with one visibility
//! channel. Membership and the channel bit move together: every mutator
//! updates the object's [`Layers`] mask first and commits the membership
//! change second, so a render traversal never sees a member without its bit
//! or a former member with a stale one.
//!
//! Several selections may share the same objects as long as they use
//! disjoint channels. A selection only ever touches its own channel bit,
//! unless it is [exclusive](Selection::set_exclusive).

mod layers;
mod store;

use std::hash::Hash;

use rustc_hash::FxHashSet;

pub use layers::{Layered, Layers};
pub use store::LayerStore;

use crate::options::SelectionOptions;

/// Render layer used for selected objects unless another one is requested.
pub const DEFAULT_CHANNEL: u32 = 10;

/// Channel toggled by [`Selection::set_visible`].
pub const PRIMARY_CHANNEL: u32 = 0;

/// A set of selected objects that share a render layer.
///
/// `K` is the caller's object handle (an entity id, an index, ...). The
/// masks themselves live in the scene and are reached through a
/// [`LayerStore`] passed to each mutator.
///
/// Not `Clone`: two selections on one channel would strip each other's bits.
/// Use [`copy_to_channel`](Selection::copy_to_channel) instead.
#[derive(Debug)]
pub struct Selection<K> {
    members: FxHashSet<K>,
    channel: u32,
    exclusive: bool,
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Self {
            members: FxHashSet::default(),
            channel: DEFAULT_CHANNEL,
            exclusive: false,
        }
    }
}

impl<K: Eq + Hash> Selection<K> {
    /// Empty selection on the given render layer.
    #[must_use]
    pub fn new(channel: u32) -> Self {
        Self {
            channel,
            ..Self::default()
        }
    }

    /// Empty selection configured from options.
    #[must_use]
    pub fn from_options(options: &SelectionOptions) -> Self {
        Self {
            channel: options.channel,
            exclusive: options.exclusive,
            ..Self::default()
        }
    }

    /// Selection on `channel` that starts out holding `objects`.
    pub fn with_objects<S, I>(store: &mut S, objects: I, channel: u32) -> Self
    where
        S: LayerStore<K> + ?Sized,
        I: IntoIterator<Item = K>,
    {
        let mut selection = Self::new(channel);
        selection.set(store, objects);
        selection
    }

    /// The render layer of selected objects.
    ///
    /// Defaults to [`DEFAULT_CHANNEL`]. If that collides with a layer used
    /// elsewhere, move the selection to a free one before rendering.
    #[must_use]
    pub fn channel(&self) -> u32 {
        self.channel
    }

    /// Move the selection to another render layer.
    ///
    /// Every member has its old channel bit cleared and the new one set
    /// before the next member is visited. Bits that exclusivity cleared on
    /// earlier adds are not restored.
    pub fn set_channel<S>(&mut self, store: &mut S, value: u32)
    where
        S: LayerStore<K> + ?Sized,
    {
        let previous = self.channel;
        for object in &self.members {
            if let Some(layers) = store.layers_mut(object) {
                layers.disable(previous);
                layers.enable(value);
            }
        }
        self.channel = value;
        log::debug!(
            "selection moved from layer {previous} to {value} ({} members)",
            self.members.len()
        );
    }

    /// Whether added objects are removed from every other layer.
    #[must_use]
    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    /// Control whether added objects are removed from every other layer.
    ///
    /// Only affects later [`add`](Self::add) calls.
    pub fn set_exclusive(&mut self, exclusive: bool) {
        self.exclusive = exclusive;
    }

    /// Select an object.
    ///
    /// Exclusive selections replace the object's whole mask with the
    /// selection channel; otherwise only the channel bit is enabled. Adding
    /// a member again re-affirms its bit and changes nothing else.
    ///
    /// Handles the store does not know are skipped with a warning.
    pub fn add<S>(&mut self, store: &mut S, object: K)
    where
        S: LayerStore<K> + ?Sized,
    {
        let Some(layers) = store.layers_mut(&object) else {
            log::warn!(
                "ignoring selection of an object without layers (layer {})",
                self.channel
            );
            return;
        };
        if self.exclusive {
            layers.set(self.channel);
        } else {
            layers.enable(self.channel);
        }
        if self.members.insert(object) {
            log::trace!("selected object on layer {}", self.channel);
        }
    }

    /// Deselect an object.
    ///
    /// Returns whether the object was a member. The channel bit of a
    /// non-member is left alone: the object may be on this layer for reasons
    /// unrelated to the selection.
    pub fn delete<S>(&mut self, store: &mut S, object: &K) -> bool
    where
        S: LayerStore<K> + ?Sized,
    {
        if !self.members.contains(object) {
            return false;
        }
        if let Some(layers) = store.layers_mut(object) {
            layers.disable(self.channel);
        }
        self.members.remove(object)
    }

    /// Deselect every object.
    pub fn clear<S>(&mut self, store: &mut S)
    where
        S: LayerStore<K> + ?Sized,
    {
        for object in &self.members {
            if let Some(layers) = store.layers_mut(object) {
                layers.disable(self.channel);
            }
        }
        self.members.clear();
    }

    /// Replace the selection with `objects`, added in iteration order.
    pub fn set<S, I>(&mut self, store: &mut S, objects: I)
    where
        S: LayerStore<K> + ?Sized,
        I: IntoIterator<Item = K>,
    {
        self.clear(store);
        for object in objects {
            self.add(store, object);
        }
    }

    /// Show or hide every member in the primary render layer.
    ///
    /// This toggles [`PRIMARY_CHANNEL`] and does not affect membership.
    pub fn set_visible<S>(&mut self, store: &mut S, visible: bool)
    where
        S: LayerStore<K> + ?Sized,
    {
        for object in &self.members {
            if let Some(layers) = store.layers_mut(object) {
                if visible {
                    layers.enable(PRIMARY_CHANNEL);
                } else {
                    layers.disable(PRIMARY_CHANNEL);
                }
            }
        }
    }

    /// Whether `object` is selected.
    #[must_use]
    pub fn has(&self, object: &K) -> bool {
        self.members.contains(object)
    }

    /// `0` if `object` is selected, `-1` otherwise.
    #[must_use]
    pub fn index_of(&self, object: &K) -> i32 {
        if self.has(object) {
            0
        } else {
            -1
        }
    }

    /// Number of selected objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over the selected objects (arbitrary order).
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.members.iter()
    }
}

impl<K: Eq + Hash + Clone> Selection<K> {
    /// New selection on `channel` holding the same objects.
    ///
    /// Members are added to the new channel without exclusivity, so the bits
    /// backing this selection survive; the copy inherits the exclusive flag
    /// for later adds. Returns `None` when `channel` is this selection's own
    /// channel.
    pub fn copy_to_channel<S>(&self, store: &mut S, channel: u32) -> Option<Self>
    where
        S: LayerStore<K> + ?Sized,
    {
        if channel == self.channel {
            return None;
        }
        let mut copy =
            Self::with_objects(store, self.members.iter().cloned(), channel);
        copy.exclusive = self.exclusive;
        Some(copy)
    }
}

impl<'a, K> IntoIterator for &'a Selection<K> {
    type Item = &'a K;
    type IntoIter = std::collections::hash_set::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
