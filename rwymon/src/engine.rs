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

use std::{collections::{HashMap, HashSet}, time::Duration};
use chrono::{DateTime,Utc};
use tracing::{debug, warn};

use crate::{
    classifier::{Classification, OperationClassifier}, config::MonitorConfig, ledger::OperationLedger,
    runway::RunwayTable, snapshot::{RunwaySnapshot, RunwayStatus}, telemetry::TrafficBatch, track::AircraftTrack
};

/// what happened to the tracks in one cycle (mostly for diagnostics)
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub struct CycleStats {
    pub n_records: usize,
    pub n_skipped: usize,  // records with missing kinematic fields, or all records of a rejected cycle
    pub n_expired: usize,  // tracks that timed out
    pub n_tracks: usize,   // live tracks after expiry
    pub n_classified: usize,
}

/// the runway operations monitor state for one airport session.
/// Each call of `process_cycle` runs to completion - there is no concurrent access to tracks or ledger
pub struct RunwayOperationsEngine {
    runways: RunwayTable,
    classifier: OperationClassifier,
    track_timeout: Duration,
    tracks: HashMap<String,AircraftTrack>,
    ledger: OperationLedger,
    last_cycle: Option<DateTime<Utc>>,
    last_stats: CycleStats,
}

impl RunwayOperationsEngine {
    pub fn new (runways: RunwayTable, config: &MonitorConfig)->Self {
        let classifier = OperationClassifier::new( config.criteria.clone(), config.trace_callsign.clone());
        let ledger = OperationLedger::new( runways.ids(), config.history_window);

        RunwayOperationsEngine {
            runways,
            classifier,
            track_timeout: config.track_timeout,
            tracks: HashMap::new(),
            ledger,
            last_cycle: None,
            last_stats: CycleStats::default(),
        }
    }

    pub fn runways (&self)->&RunwayTable { &self.runways }
    pub fn ledger (&self)->&OperationLedger { &self.ledger }
    pub fn last_stats (&self)->CycleStats { self.last_stats }
    pub fn last_cycle (&self)->Option<DateTime<Utc>> { self.last_cycle }

    pub fn track (&self, callsign: &str)->Option<&AircraftTrack> { self.tracks.get( callsign) }
    pub fn track_count (&self)->usize { self.tracks.len() }

    /// process one traffic batch that was obtained at `now`:
    /// update tracks, drop stale tracks, classify, update the ledger, prune history and
    /// return the resulting per-runway snapshot.
    /// Cycle times have to be non-decreasing. A batch with a `now` before the previous cycle is
    /// rejected and the unchanged snapshot of the previous cycle is returned
    pub fn process_cycle (&mut self, batch: &TrafficBatch, now: DateTime<Utc>)->RunwaySnapshot {
        let mut stats = CycleStats { n_records: batch.len(), ..CycleStats::default() };

        if let Some(last) = self.last_cycle {
            if now < last {
                warn!("rejecting cycle {} before previous cycle {}", now, last);
                stats.n_skipped = batch.len();
                stats.n_tracks = self.tracks.len();
                self.last_stats = stats;
                return self.snapshot( last)
            }
        }
        self.last_cycle = Some(now);

        stats.n_skipped = self.update_tracks( batch, now);
        stats.n_expired = self.expire_tracks( &now);
        stats.n_tracks = self.tracks.len();

        // all classifications of this cycle have to be known before we update the ledger
        let classifications = self.classify_tracks();
        stats.n_classified = classifications.len();

        self.ledger.record_cycle( &classifications, now);
        self.ledger.prune( &now);

        debug!("cycle {}: {:?}", now, stats);
        self.last_stats = stats;

        self.snapshot( now)
    }

    /// returns number of skipped records
    fn update_tracks (&mut self, batch: &TrafficBatch, now: DateTime<Utc>)->usize {
        let mut n_skipped = 0;
        let mut seen: HashSet<String> = HashSet::new();

        for (id,rec) in batch.iter() {
            let Some(sample) = rec.to_sample( id, now) else {
                n_skipped += 1;
                continue
            };

            if !seen.insert( sample.callsign.clone()) {
                debug!("duplicate callsign {} in batch (feed id {}), replacing previous record", sample.callsign, id);
            }

            let track = self.tracks.entry( sample.callsign.clone()).or_insert_with( || AircraftTrack::new( sample.callsign.as_str()));
            if track.last_update() == Some(now) {
                track.replace_latest( sample); // same cycle time - don't fill up the track with duplicates
            } else if !track.update( sample) {
                n_skipped += 1;
            }
        }

        n_skipped
    }

    /// drop all tracks that did not get updated within the track timeout. Returns number of dropped tracks
    pub fn expire_tracks (&mut self, now: &DateTime<Utc>)->usize {
        let n = self.tracks.len();
        let timeout = self.track_timeout;
        self.tracks.retain( |_,track| !track.is_stale( now, timeout));
        n - self.tracks.len()
    }

    fn classify_tracks (&self)->Vec<Classification> {
        let field_elevation = self.runways.field_elevation_ft();
        self.tracks.values()
            .filter_map( |track| self.classifier.classification( track, &self.runways, field_elevation))
            .collect()
    }

    /// the current ledger state for all runways
    pub fn snapshot (&self, now: DateTime<Utc>)->RunwaySnapshot {
        let runways = self.runways.iter().map( |rwy| {
            let counts = self.ledger.counts( &rwy.id);
            let ops = self.ledger.runway_ops( &rwy.id);

            RunwayStatus {
                runway_id: rwy.id.clone(),
                true_bearing: rwy.true_bearing.degrees(),
                mag_bearing: rwy.mag_bearing.degrees(),
                arrival_count_30min: counts.arrivals,
                departure_count_30min: counts.departures,
                current_arrival_count: counts.current_arrivals,
                current_departure_count: counts.current_departures,
                current_arrival_callsigns: ops.map( |o| o.current_arrivals.clone()).unwrap_or_default(),
                current_departure_callsigns: ops.map( |o| o.current_departures.clone()).unwrap_or_default(),
            }
        }).collect();

        RunwaySnapshot { time: now, runways }
    }
}
