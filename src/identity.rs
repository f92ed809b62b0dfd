//! Identities for graph and tree participants.
//!
//! Every node placed in a [`crate::system::System`] or [`crate::tree::Tree`] is identified by
//! an [`Identity`]: a string computed once, when the value enters the structure, and compared by
//! value afterwards. Payloads never take part in comparison.
use std::borrow::{Borrow, Cow};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A hashable, ordered name.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity(String);

impl Identity {
    pub fn new(name: impl Into<String>) -> Self {
        Identity(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(name: &str) -> Self {
        Identity(name.to_string())
    }
}

impl From<String> for Identity {
    fn from(name: String) -> Self {
        Identity(name)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets ordered collections keyed by `Identity` be queried with a plain `&str`.
impl Borrow<str> for Identity {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Values which can offer their own name.
///
/// Returning `None` (the default) makes [`name_of`] fall back to the caller's default and then
/// to the value's type name.
pub trait Named {
    fn name(&self) -> Option<Cow<'_, str>> {
        None
    }
}

impl Named for str {
    fn name(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl Named for String {
    fn name(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl Named for Identity {
    fn name(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl Named for char {
    fn name(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.to_string()))
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> Option<Cow<'_, str>> {
        (**self).name()
    }
}

macro_rules! named_by_display {
    ($($t:ty),*) => {
        $(impl Named for $t {
            fn name(&self) -> Option<Cow<'_, str>> {
                Some(Cow::Owned(self.to_string()))
            }
        })*
    };
}

named_by_display!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Compute the [`Identity`] of `value`.
///
/// The value's own [`Named::name`] wins if it is non-empty, then `default` if it is non-empty,
/// and finally the normalized type name of `T`. This never fails.
///
/// ```rust
/// # use dagtree::identity::*;
/// struct Loader;
/// impl Named for Loader {}
///
/// assert_eq!(name_of("fetch", None), Identity::from("fetch"));
/// assert_eq!(name_of(&Loader, Some("load")), Identity::from("load"));
/// assert_eq!(name_of(&Loader, None), Identity::from("loader"));
/// ```
pub fn name_of<T: Named + ?Sized>(value: &T, default: Option<&str>) -> Identity {
    if let Some(name) = value.name().filter(|n| !n.is_empty()) {
        return Identity(name.into_owned());
    }
    match default.filter(|d| !d.is_empty()) {
        Some(d) => Identity::from(d),
        None => Identity(type_name_of::<T>()),
    }
}

/// Normalize a Rust type name: strip references, module paths and generic arguments, then
/// convert to snake case. `alloc::vec::Vec<i32>` becomes `vec`.
pub(crate) fn type_name_of<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    let base = base.trim_start_matches(['&', '*']).trim_start_matches("mut ");
    let last = base.rsplit("::").next().unwrap_or(base);
    snake_case(last)
}

fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// An opaque payload with a name.
///
/// Equality, ordering and hashing use the name only: two nodes with equal names are the same
/// graph participant whatever their payloads.
#[derive(Clone)]
pub struct Node<P> {
    name: Identity,
    pub payload: P,
}

impl<P> Node<P> {
    /// Wrap `payload`, deriving the name with [`name_of`].
    pub fn new(payload: P) -> Self
    where
        P: Named,
    {
        let name = name_of(&payload, None);
        Node { name, payload }
    }

    pub fn named(name: impl Into<Identity>, payload: P) -> Self {
        Node {
            name: name.into(),
            payload,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.name
    }

    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl<P> PartialEq for Node<P> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<P> Eq for Node<P> {}

impl<P> PartialOrd for Node<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P> Ord for Node<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl<P> Hash for Node<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state)
    }
}

impl<P: fmt::Debug> fmt::Debug for Node<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("payload", &self.payload)
            .finish()
    }
}

impl<P> Named for Node<P> {
    fn name(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.name.as_str()))
    }
}

/// Bounds shared by every node type used in a graph representation.
pub trait GraphNode: Ord + Hash + Clone + fmt::Debug {}

impl<N: Ord + Hash + Clone + fmt::Debug> GraphNode for N {}

/// A directed edge `start → stop`.
///
/// This is a passive pair; self-loops are rejected by [`crate::system::System::connect`], not
/// here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<N> {
    pub start: N,
    pub stop: N,
}

impl<N> Edge<N> {
    pub fn new(start: N, stop: N) -> Self {
        Edge { start, stop }
    }
}

impl<N> From<(N, N)> for Edge<N> {
    fn from((start, stop): (N, N)) -> Self {
        Edge { start, stop }
    }
}

impl<N> From<Edge<N>> for (N, N) {
    fn from(edge: Edge<N>) -> Self {
        (edge.start, edge.stop)
    }
}
