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

use std::{collections::{BTreeMap, BTreeSet, HashMap}, time::Duration};
use chrono::{DateTime,Utc};
use tracing::{debug, warn};
use rwymon_common::datetime;

use crate::classifier::{Classification, OperationKind};

/// the operations bookkeeping for a single runway
#[derive(Debug,Clone,Default,PartialEq)]
pub struct RunwayOps {
    /// callsigns classified in the last cycle (recomputed from scratch each cycle)
    pub current_arrivals: BTreeSet<String>,
    pub current_departures: BTreeSet<String>,

    /// callsign -> start time of its current (or last) detection streak
    pub arrival_history: HashMap<String,DateTime<Utc>>,
    pub departure_history: HashMap<String,DateTime<Utc>>,
}

impl RunwayOps {
    fn sets_mut (&mut self, kind: OperationKind)->(&mut BTreeSet<String>, &mut HashMap<String,DateTime<Utc>>) {
        match kind {
            OperationKind::Arrival => (&mut self.current_arrivals, &mut self.arrival_history),
            OperationKind::Departure => (&mut self.current_departures, &mut self.departure_history),
        }
    }

    pub fn current (&self, kind: OperationKind)->&BTreeSet<String> {
        match kind {
            OperationKind::Arrival => &self.current_arrivals,
            OperationKind::Departure => &self.current_departures,
        }
    }

    pub fn history (&self, kind: OperationKind)->&HashMap<String,DateTime<Utc>> {
        match kind {
            OperationKind::Arrival => &self.arrival_history,
            OperationKind::Departure => &self.departure_history,
        }
    }

    /// replace the current set for `kind`. Callsigns that were not in the previous current set start a new
    /// streak, i.e. get a (new) history entry for `now`. Returns the number of new streaks
    fn replace_current (&mut self, kind: OperationKind, next: BTreeSet<String>, now: DateTime<Utc>)->usize {
        let (current, history) = self.sets_mut( kind);
        let mut n_new = 0;

        for cs in &next {
            if !current.contains(cs) {
                history.insert( cs.clone(), now);
                n_new += 1;
            }
        }
        *current = next;
        n_new
    }

    fn prune (&mut self, now: &DateTime<Utc>, window: Duration) {
        self.arrival_history.retain( |_,t| !datetime::is_older_than( now, t, window));
        self.departure_history.retain( |_,t| !datetime::is_older_than( now, t, window));
    }
}

/// per runway counts as reported to displays
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub struct OperationCounts {
    pub arrivals: usize,          // arrival streaks started within the history window
    pub departures: usize,        // departure streaks started within the history window
    pub current_arrivals: usize,
    pub current_departures: usize,
}

impl OperationCounts {
    pub fn as_tuple (&self)->(usize,usize,usize,usize) {
        (self.arrivals, self.departures, self.current_arrivals, self.current_departures)
    }
}

/// the session wide record of which aircraft currently use which runway, and which operations
/// were started within the history window.
/// Note that a callsign that is continuously detected for longer than the history window is still
/// current but not counted anymore once its history entry is pruned
#[derive(Debug,Clone)]
pub struct OperationLedger {
    history_window: Duration,
    runways: BTreeMap<String,RunwayOps>,
}

impl OperationLedger {
    pub fn new<'a,I> (runway_ids: I, history_window: Duration)->Self where I: IntoIterator<Item=&'a str> {
        let runways = runway_ids.into_iter().map( |id| (id.to_string(), RunwayOps::default())).collect();
        OperationLedger { history_window, runways }
    }

    pub fn history_window (&self)->Duration { self.history_window }

    pub fn runway_ops (&self, runway_id: &str)->Option<&RunwayOps> { self.runways.get( runway_id) }

    /// runway ids in ascending order
    pub fn runway_ids (&self)->impl Iterator<Item=&str> { self.runways.keys().map( |id| id.as_str()) }

    /// drop all history entries that are older than the history window
    pub fn prune (&mut self, now: &DateTime<Utc>) {
        let window = self.history_window;
        for ops in self.runways.values_mut() {
            ops.prune( now, window);
        }
    }

    /// recompute all current sets from the complete list of this cycle's classifications
    /// and record new detection streaks in the respective histories.
    /// Returns the number of new streaks
    pub fn record_cycle (&mut self, classifications: &[Classification], now: DateTime<Utc>)->usize {
        let mut arrivals: HashMap<&str,BTreeSet<String>> = HashMap::new();
        let mut departures: HashMap<&str,BTreeSet<String>> = HashMap::new();

        for c in classifications {
            if !self.runways.contains_key( &c.runway_id) {
                warn!("ignoring {} of {} for unknown runway {}", c.kind, c.callsign, c.runway_id);
                continue
            }
            let sets = match c.kind {
                OperationKind::Arrival => &mut arrivals,
                OperationKind::Departure => &mut departures,
            };
            sets.entry( c.runway_id.as_str()).or_default().insert( c.callsign.clone());
        }

        let mut n_new = 0;
        for (id,ops) in self.runways.iter_mut() {
            let next_arrivals = arrivals.remove( id.as_str()).unwrap_or_default();
            let next_departures = departures.remove( id.as_str()).unwrap_or_default();

            n_new += ops.replace_current( OperationKind::Arrival, next_arrivals, now);
            n_new += ops.replace_current( OperationKind::Departure, next_departures, now);
        }

        if n_new > 0 { debug!("{} new runway operations at {}", n_new, now); }
        n_new
    }

    /// history and current counts for a runway (all zero for unknown runways)
    pub fn counts (&self, runway_id: &str)->OperationCounts {
        match self.runways.get( runway_id) {
            Some(ops) => OperationCounts {
                arrivals: ops.arrival_history.len(),
                departures: ops.departure_history.len(),
                current_arrivals: ops.current_arrivals.len(),
                current_departures: ops.current_departures.len(),
            },
            None => OperationCounts::default()
        }
    }
}
