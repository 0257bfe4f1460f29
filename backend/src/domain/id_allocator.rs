//! Identifier allocator for user records.
//!
//! The counter is derived state: it is rebuilt from the record store on every
//! start by scanning for the highest identifier, and is never persisted.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{User, UserId};

/// Monotonic identifier source owned by the user service.
///
/// # Examples
/// ```
/// use usuarios::domain::{IdAllocator, UserId};
///
/// let allocator = IdAllocator::seeded(UserId::new(4));
/// assert_eq!(allocator.next(), Some(UserId::new(5)));
/// assert_eq!(allocator.current(), UserId::new(5));
/// ```
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: AtomicU64,
}

impl IdAllocator {
    /// Start counting after `last`.
    #[must_use]
    pub fn seeded(last: UserId) -> Self {
        Self {
            last: AtomicU64::new(last.get()),
        }
    }

    /// Seed from the highest identifier among `users`, or zero when empty.
    #[must_use]
    pub fn from_users(users: &[User]) -> Self {
        let max = users.iter().map(User::id).max().unwrap_or_default();
        Self::seeded(max)
    }

    /// Advance the counter and return the newly allocated identifier.
    ///
    /// Returns `None` once `u64::MAX` has been handed out; the counter is left
    /// unchanged in that case.
    pub fn next(&self) -> Option<UserId> {
        self.last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| last.checked_add(1))
            .ok()
            .and_then(|previous| previous.checked_add(1))
            .map(UserId::new)
    }

    /// Last identifier handed out (or the seed when none was allocated yet).
    #[must_use]
    pub fn current(&self) -> UserId {
        UserId::new(self.last.load(Ordering::Acquire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserDraft;
    use rstest::rstest;

    fn user(id: u64) -> User {
        let draft = UserDraft::try_from_parts(
            Some(format!("u{id}@example.com")),
            Some("Ana".to_owned()),
            Some("Lopez".to_owned()),
        )
        .expect("valid draft");
        User::new(UserId::new(id), draft)
    }

    #[rstest]
    fn empty_store_starts_at_one() {
        let allocator = IdAllocator::from_users(&[]);
        assert_eq!(allocator.current(), UserId::new(0));
        assert_eq!(allocator.next(), Some(UserId::new(1)));
        assert_eq!(allocator.next(), Some(UserId::new(2)));
    }

    #[rstest]
    fn seeds_from_maximum_not_last_row() {
        let users = [user(3), user(11), user(7)];
        let allocator = IdAllocator::from_users(&users);
        assert_eq!(allocator.current(), UserId::new(11));
        assert_eq!(allocator.next(), Some(UserId::new(12)));
    }

    #[rstest]
    fn exhausted_counter_stays_at_maximum() {
        let allocator = IdAllocator::from_users(&[user(u64::MAX)]);
        assert_eq!(allocator.next(), None);
        assert_eq!(allocator.next(), None);
        assert_eq!(allocator.current(), UserId::new(u64::MAX));
    }

    #[rstest]
    fn last_identifier_below_maximum_is_still_issued() {
        let allocator = IdAllocator::seeded(UserId::new(u64::MAX - 1));
        assert_eq!(allocator.next(), Some(UserId::new(u64::MAX)));
        assert_eq!(allocator.next(), None);
    }

    #[test]
    fn concurrent_allocations_are_unique() {
        let allocator = std::sync::Arc::new(IdAllocator::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let allocator = allocator.clone();
                std::thread::spawn(move || {
                    (0..100)
                        .filter_map(|_| allocator.next())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        let mut ids: Vec<UserId> = handles
            .into_iter()
            .flat_map(|handle| handle.join().expect("allocator thread"))
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 400);
        assert_eq!(allocator.current(), UserId::new(400));
    }
}
