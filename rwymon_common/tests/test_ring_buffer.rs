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

#![allow(unused)]

/// unit tests for the fixed capacity RingBuffer
/// run with "cargo test --test test_ring_buffer -- --nocapture"

use rwymon_common::collections::RingBuffer;

#[test]
fn test_push_evicts_oldest () {
    println!("--- testing ringbuffer push/evict");
    let mut ring: RingBuffer<usize,5> = RingBuffer::new();

    for d in 0..5 {
        assert!( ring.push(d).is_none());
    }
    assert!( ring.is_full());

    let evicted: Vec<usize> = (5..9).filter_map( |d| ring.push(d)).collect();
    println!("{ring:?} evicted: {evicted:?}");

    assert_eq!( vec![0,1,2,3], evicted);
    assert_eq!( vec![4,5,6,7,8], ring.to_vec());
    assert_eq!( Some(&4), ring.front());
    assert_eq!( Some(&8), ring.back());
    assert_eq!( 5, ring.len());
}

#[test]
fn test_windows () {
    println!("--- testing ringbuffer first_n/last_n windows");
    let mut ring: RingBuffer<usize,10> = RingBuffer::new();
    for d in 0..4 { ring.push(d); }

    // windows overlap if there are less than 2*n elements
    let first: Vec<usize> = ring.first_n(3).copied().collect();
    let last: Vec<usize> = ring.last_n(3).copied().collect();
    println!("first: {first:?}, last: {last:?}");
    assert_eq!( vec![0,1,2], first);
    assert_eq!( vec![1,2,3], last);

    for d in 4..13 { ring.push(d); }
    assert_eq!( vec![3,4,5], ring.first_n(3).copied().collect::<Vec<_>>());
    assert_eq!( vec![10,11,12], ring.last_n(3).copied().collect::<Vec<_>>());
    assert_eq!( 3, ring.last_n(3).len());

    let reversed: Vec<usize> = ring.iter().rev().copied().collect();
    assert_eq!( vec![12,11,10,9,8,7,6,5,4,3], reversed);
}

#[test]
fn test_short_buffer () {
    let mut ring: RingBuffer<usize,10> = RingBuffer::new();
    assert!( ring.back().is_none());
    assert_eq!( 0, ring.last_n(3).count());

    ring.push(42);
    assert_eq!( vec![42], ring.first_n(3).copied().collect::<Vec<_>>());
    assert_eq!( vec![42], ring.last_n(3).copied().collect::<Vec<_>>());
}

#[test]
fn test_replace_back_and_pop () {
    println!("--- testing ringbuffer replace_back and pop_front");
    let mut ring: RingBuffer<usize,3> = RingBuffer::new();
    assert!( ring.replace_back(1).is_none()); // pushes into empty buffer
    ring.push(2);
    assert_eq!( Some(2), ring.replace_back(20));
    assert_eq!( vec![1,20], ring.to_vec());

    ring.push(3);
    ring.push(4); // wraps around
    assert_eq!( Some(4), ring.replace_back(40));
    assert_eq!( vec![20,3,40], ring.to_vec());

    assert_eq!( Some(20), ring.pop_front());
    assert_eq!( vec![3,40], ring.to_vec());

    ring.clear();
    assert!( ring.is_empty());
    assert!( ring.pop_front().is_none());
}
