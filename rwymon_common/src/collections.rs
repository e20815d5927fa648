/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::{fmt, iter::FusedIterator};

/// a fixed capacity ring buffer that keeps its elements in an inline slot array.
/// Elements are kept in insertion order, pushing into a full buffer evicts the oldest element.
/// Both push and eviction are O(1) and never re-allocate
///
/// ```
/// use rwymon_common::collections::RingBuffer;
/// let mut ring: RingBuffer<u32,3> = RingBuffer::new();
/// for i in 0..5 { ring.push(i); }
/// assert_eq!( vec![2,3,4], ring.to_vec());
/// ```
#[derive(Clone)]
pub struct RingBuffer<T, const N: usize> {
    slots: [Option<T>; N],
    head: usize, // slot index of the oldest element
    len: usize,
}

impl<T, const N: usize> RingBuffer<T,N> {
    pub fn new ()->Self {
        RingBuffer { slots: std::array::from_fn(|_| None), head: 0, len: 0 }
    }

    #[inline] pub const fn capacity (&self)->usize { N }
    #[inline] pub fn len (&self)->usize { self.len }
    #[inline] pub fn is_empty (&self)->bool { self.len == 0 }
    #[inline] pub fn is_full (&self)->bool { self.len == N }

    #[inline]
    fn slot_index (&self, idx: usize)->usize { (self.head + idx) % N }

    /// append a new element, returning the evicted oldest element if the buffer was full
    pub fn push (&mut self, t: T)->Option<T> {
        if N == 0 { return Some(t) }

        if self.len < N {
            let idx = self.slot_index( self.len);
            self.slots[idx] = Some(t);
            self.len += 1;
            None
        } else {
            let evicted = self.slots[self.head].replace(t);
            self.head = (self.head + 1) % N;
            evicted
        }
    }

    /// replace the newest element (or push if empty), returning the replaced element
    pub fn replace_back (&mut self, t: T)->Option<T> {
        if self.len == 0 {
            self.push(t)
        } else {
            let idx = self.slot_index( self.len-1);
            self.slots[idx].replace(t)
        }
    }

    /// remove and return the oldest element
    pub fn pop_front (&mut self)->Option<T> {
        if self.len == 0 { return None }

        let t = self.slots[self.head].take();
        self.head = (self.head + 1) % N;
        self.len -= 1;
        t
    }

    pub fn clear (&mut self) {
        for slot in self.slots.iter_mut() { *slot = None; }
        self.head = 0;
        self.len = 0;
    }

    /// element at logical position `idx` (0 is the oldest)
    pub fn get (&self, idx: usize)->Option<&T> {
        if idx < self.len { self.slots[self.slot_index(idx)].as_ref() } else { None }
    }

    #[inline] pub fn front (&self)->Option<&T> { self.get(0) }

    #[inline] pub fn back (&self)->Option<&T> {
        if self.len > 0 { self.get( self.len-1) } else { None }
    }

    pub fn iter (&self)->Iter<'_,T,N> {
        Iter { ring: self, front: 0, back: self.len }
    }

    /// the (up to) `n` oldest elements, oldest first
    pub fn first_n (&self, n: usize)->Iter<'_,T,N> {
        Iter { ring: self, front: 0, back: n.min(self.len) }
    }

    /// the (up to) `n` newest elements, oldest first
    pub fn last_n (&self, n: usize)->Iter<'_,T,N> {
        Iter { ring: self, front: self.len.saturating_sub(n), back: self.len }
    }

    pub fn to_vec (&self)->Vec<T> where T: Clone {
        self.iter().cloned().collect()
    }
}

impl<T, const N: usize> Default for RingBuffer<T,N> {
    fn default()->Self { RingBuffer::new() }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for RingBuffer<T,N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries( self.iter()).finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a RingBuffer<T,N> {
    type Item = &'a T;
    type IntoIter = Iter<'a,T,N>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// double ended iterator over a logical index range [front,back) of a RingBuffer
pub struct Iter<'a, T, const N: usize> {
    ring: &'a RingBuffer<T,N>,
    front: usize,
    back: usize,
}

impl<'a, T, const N: usize> Iterator for Iter<'a,T,N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let idx = self.front;
            self.front += 1;
            self.ring.get(idx)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<'a, T, const N: usize> DoubleEndedIterator for Iter<'a,T,N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            self.ring.get( self.back)
        } else {
            None
        }
    }
}

impl<'a, T, const N: usize> ExactSizeIterator for Iter<'a,T,N> {}
impl<'a, T, const N: usize> FusedIterator for Iter<'a,T,N> {}
