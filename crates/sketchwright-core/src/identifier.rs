//! Element and group identifiers
//!
//! This module provides the [`ElementId`] and [`GroupId`] string newtypes and the
//! [`IdAllocator`] that hands them out for one document.
//!
//! Identifiers follow the `"{prefix}-{n}"` scheme where `n` is a counter owned
//! by the allocator. Every document gets its own allocator, so generating the
//! same diagram twice yields the same ids.

use std::{borrow::Borrow, fmt};

use log::trace;
use serde::{Deserialize, Serialize};

/// Base-62 digit alphabet used by fractional ordering keys
const ORDER_KEY_DIGITS: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Unique identifier of an element within a document
///
/// # Examples
///
/// ```
/// use sketchwright_core::identifier::ElementId;
///
/// let id = ElementId::new("rect-1");
/// assert_eq!(id, "rect-1");
/// assert_eq!(id.to_string(), "rect-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Creates an `ElementId` from any string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ElementId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl PartialEq<str> for ElementId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ElementId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Identifier of a group of elements
///
/// Groups are pure tags; elements sharing a [`GroupId`] have no other
/// relationship.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Creates a `GroupId` from any string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for GroupId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Per-document allocator for element ids, group ids and the active group
///
/// The element and group counters are independent and both start at 1.
/// Nested groups are not supported: starting a group while another one is
/// active replaces it.
///
/// # Examples
///
/// ```
/// use sketchwright_core::identifier::IdAllocator;
///
/// let mut ids = IdAllocator::new();
/// assert_eq!(ids.next_element_id("rect"), "rect-1");
/// assert_eq!(ids.next_element_id("element"), "element-2");
///
/// let group = ids.start_group(Some("routing"));
/// assert_eq!(group, "routing-group-1");
/// assert_eq!(ids.active_group(), Some(&group));
/// ids.end_group();
/// assert_eq!(ids.active_group(), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct IdAllocator {
    element_counter: u64,
    group_counter: u64,
    active_group: Option<GroupId>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `"{prefix}-{n}"` with `n` incremented on every call.
    pub fn next_element_id(&mut self, prefix: &str) -> ElementId {
        self.element_counter += 1;
        ElementId(format!("{prefix}-{}", self.element_counter))
    }

    /// Returns the sequence number handed out by the last
    /// [`next_element_id`](Self::next_element_id) call, or 0 if none.
    pub fn element_count(&self) -> u64 {
        self.element_counter
    }

    /// Returns `"group-{n}"`, or `"{name}-group-{n}"` when a name is given.
    pub fn next_group_id(&mut self, name: Option<&str>) -> GroupId {
        self.group_counter += 1;
        match name {
            Some(name) => GroupId(format!("{name}-group-{}", self.group_counter)),
            None => GroupId(format!("group-{}", self.group_counter)),
        }
    }

    /// Set the group new elements are tagged with
    pub fn set_active_group(&mut self, group: Option<GroupId>) {
        if let Some(previous) = &self.active_group {
            trace!(group:% = previous; "Leaving group");
        }
        self.active_group = group;
    }

    /// Returns the group new elements are tagged with, if any
    pub fn active_group(&self) -> Option<&GroupId> {
        self.active_group.as_ref()
    }

    /// Allocate a new group id and make it the active group.
    pub fn start_group(&mut self, name: Option<&str>) -> GroupId {
        let group = self.next_group_id(name);
        trace!(group:% = group; "Starting group");
        self.set_active_group(Some(group.clone()));
        group
    }

    /// Clear the active group
    pub fn end_group(&mut self) {
        self.set_active_group(None);
    }

    /// Reset both counters and the active group
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Returns the fractional ordering key of the `n`-th element.
///
/// Keys use the Excalidraw fractional-index integer encoding: a head letter
/// giving the digit count (`a` = 1, `b` = 2, ...) followed by base-62 digits.
/// Keys compare lexicographically in the same order as `n`.
///
/// # Examples
///
/// ```
/// use sketchwright_core::identifier::order_key;
///
/// assert_eq!(order_key(1), "a1");
/// assert_eq!(order_key(10), "aA");
/// assert_eq!(order_key(62), "b10");
/// assert!(order_key(61) < order_key(62));
/// ```
pub fn order_key(n: u64) -> String {
    let mut digits = Vec::new();
    let mut rest = n;
    loop {
        digits.push(ORDER_KEY_DIGITS[(rest % 62) as usize]);
        rest /= 62;
        if rest == 0 {
            break;
        }
    }
    digits.reverse();

    // 11 base-62 digits cover u64, well inside the 26 available heads.
    let head = b'a' + (digits.len() as u8 - 1);

    let mut key = String::with_capacity(digits.len() + 1);
    key.push(char::from(head));
    key.extend(digits.into_iter().map(char::from));
    key
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_element_ids_count_from_one() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.element_count(), 0);

        assert_eq!(ids.next_element_id("rect"), "rect-1");
        assert_eq!(ids.next_element_id("ellipse"), "ellipse-2");
        assert_eq!(ids.next_element_id("arrow"), "arrow-3");
        assert_eq!(ids.element_count(), 3);
    }

    #[test]
    fn test_group_counter_is_independent() {
        let mut ids = IdAllocator::new();
        ids.next_element_id("rect");
        ids.next_element_id("rect");

        assert_eq!(ids.next_group_id(None), "group-1");
        assert_eq!(ids.next_group_id(Some("parallel")), "parallel-group-2");
        assert_eq!(ids.element_count(), 2);
    }

    #[test]
    fn test_starting_group_replaces_active_group() {
        let mut ids = IdAllocator::new();

        let first = ids.start_group(Some("sequential"));
        let second = ids.start_group(None);

        assert_ne!(first, second);
        assert_eq!(ids.active_group(), Some(&second));
    }

    #[test]
    fn test_set_active_group_directly() {
        let mut ids = IdAllocator::new();
        let group = GroupId::new("custom");

        ids.set_active_group(Some(group.clone()));
        assert_eq!(ids.active_group(), Some(&group));

        ids.set_active_group(None);
        assert!(ids.active_group().is_none());
    }

    #[test]
    fn test_reset_restarts_counters() {
        let mut ids = IdAllocator::new();
        ids.next_element_id("rect");
        ids.start_group(None);

        ids.reset();

        assert_eq!(ids.element_count(), 0);
        assert!(ids.active_group().is_none());
        assert_eq!(ids.next_element_id("rect"), "rect-1");
        assert_eq!(ids.next_group_id(None), "group-1");
    }

    #[test]
    fn test_order_key_boundaries() {
        assert_eq!(order_key(0), "a0");
        assert_eq!(order_key(1), "a1");
        assert_eq!(order_key(9), "a9");
        assert_eq!(order_key(10), "aA");
        assert_eq!(order_key(36), "aa");
        assert_eq!(order_key(61), "az");
        assert_eq!(order_key(62), "b10");
        assert_eq!(order_key(62 * 62), "c100");
    }

    #[test]
    fn test_element_id_serializes_as_string() {
        let id = ElementId::new("text-4");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"text-4\"");
    }

    proptest! {
        #[test]
        fn prop_order_keys_sort_like_counters(a in 0u64..1_000_000, b in 0u64..1_000_000) {
            prop_assert_eq!(a.cmp(&b), order_key(a).cmp(&order_key(b)));
        }

        #[test]
        fn prop_element_ids_never_repeat(prefixes in prop::collection::vec("[a-z]{1,6}", 1..64)) {
            let mut ids = IdAllocator::new();
            let mut seen = HashSet::new();
            for prefix in &prefixes {
                prop_assert!(seen.insert(ids.next_element_id(prefix)));
            }
        }
    }
}
