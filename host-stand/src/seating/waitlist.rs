//! Waitlist - two-tier priority queue of waiting parties
//!
//! Parties holding a reservation are always ahead of walk-ins. Within each
//! tier arrival order is kept. The tiers are two queues read back to back,
//! so inserting into either tier is O(1) and the tier boundary needs no
//! bookkeeping when the last reservation leaves.

use shared::Party;
use shared::seating::WaitlistSnapshot;
use std::collections::VecDeque;
use std::collections::vec_deque;
use std::iter::Chain;

/// 候位队列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Waitlist {
    reserved: VecDeque<Party>,
    walk_ins: VecDeque<Party>,
}

impl Waitlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a party behind the last party of its own tier.
    ///
    /// Returns the 1-based position of the party in the whole list.
    pub fn add(&mut self, party: Party) -> usize {
        if party.has_reservation() {
            self.reserved.push_back(party);
            self.reserved.len()
        } else {
            self.walk_ins.push_back(party);
            self.reserved.len() + self.walk_ins.len()
        }
    }

    /// Remove the first party, front to back, whose id matches `id` ignoring case
    pub fn remove(&mut self, id: &str) -> Option<Party> {
        if let Some(index) = self.reserved.iter().position(|p| p.matches_id(id)) {
            return self.reserved.remove(index);
        }
        let index = self.walk_ins.iter().position(|p| p.matches_id(id))?;
        self.walk_ins.remove(index)
    }

    /// First party, front to back, whose id matches `id` ignoring case
    pub fn find(&self, id: &str) -> Option<&Party> {
        self.iter().find(|p| p.matches_id(id))
    }

    /// 1-based position of the first matching party
    pub fn position(&self, id: &str) -> Option<usize> {
        self.iter().position(|p| p.matches_id(id)).map(|i| i + 1)
    }

    /// The party that would be offered a table first
    pub fn peek(&self) -> Option<&Party> {
        self.reserved.front().or_else(|| self.walk_ins.front())
    }

    /// Every party that fits `capacity` seats, as a new waitlist.
    ///
    /// Relative order and tiers carry over; `self` is left untouched.
    pub fn seatable(&self, capacity: u32) -> Waitlist {
        Waitlist {
            reserved: self
                .reserved
                .iter()
                .filter(|p| p.fits(capacity))
                .cloned()
                .collect(),
            walk_ins: self
                .walk_ins
                .iter()
                .filter(|p| p.fits(capacity))
                .cloned()
                .collect(),
        }
    }

    /// Take a seatable party out of the list.
    ///
    /// With `id` the first matching party is taken, but only if it fits.
    /// Without it the longest-waiting party that fits is taken.
    pub fn take_seatable(&mut self, id: Option<&str>, capacity: u32) -> Option<Party> {
        let index = self.seatable_index(id, capacity)?;
        self.take_at(index)
    }

    /// 0-based index of the party [`Waitlist::take_seatable`] would take
    pub fn seatable_index(&self, id: Option<&str>, capacity: u32) -> Option<usize> {
        self.iter()
            .position(|p| p.fits(capacity) && id.is_none_or(|id| p.matches_id(id)))
    }

    /// Remove the party at 0-based `index`
    pub fn take_at(&mut self, index: usize) -> Option<Party> {
        match index.checked_sub(self.reserved.len()) {
            None => self.reserved.remove(index),
            Some(walk_in) => self.walk_ins.remove(walk_in),
        }
    }

    /// Put a party back at the 0-based `index` it was taken from.
    ///
    /// The index is clamped to the party's own tier.
    pub fn restore(&mut self, index: usize, party: Party) {
        if party.has_reservation() {
            let index = index.min(self.reserved.len());
            self.reserved.insert(index, party);
        } else {
            let index = index
                .saturating_sub(self.reserved.len())
                .min(self.walk_ins.len());
            self.walk_ins.insert(index, party);
        }
    }

    pub fn len(&self) -> usize {
        self.reserved.len() + self.walk_ins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reserved.is_empty() && self.walk_ins.is_empty()
    }

    pub fn reservation_count(&self) -> usize {
        self.reserved.len()
    }

    pub fn walk_in_count(&self) -> usize {
        self.walk_ins.len()
    }

    /// Front to back
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.reserved.iter().chain(self.walk_ins.iter()),
        }
    }

    pub fn snapshot(&self) -> WaitlistSnapshot {
        WaitlistSnapshot {
            entries: self.iter().cloned().collect(),
            total: self.len(),
            with_reservation: self.reservation_count(),
        }
    }
}

/// Borrowing iterator over a [`Waitlist`], front to back
pub struct Iter<'a> {
    inner: Chain<vec_deque::Iter<'a, Party>, vec_deque::Iter<'a, Party>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Party;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Waitlist {
    type Item = &'a Party;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Waitlist {
    type Item = Party;
    type IntoIter = Chain<vec_deque::IntoIter<Party>, vec_deque::IntoIter<Party>>;

    fn into_iter(self) -> Self::IntoIter {
        self.reserved.into_iter().chain(self.walk_ins)
    }
}

impl Extend<Party> for Waitlist {
    fn extend<I: IntoIterator<Item = Party>>(&mut self, iter: I) {
        for party in iter {
            self.add(party);
        }
    }
}

impl FromIterator<Party> for Waitlist {
    fn from_iter<I: IntoIterator<Item = Party>>(iter: I) -> Self {
        let mut waitlist = Waitlist::new();
        waitlist.extend(iter);
        waitlist
    }
}
