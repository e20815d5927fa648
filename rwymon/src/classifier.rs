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

use std::fmt;
use serde::{Serialize,Deserialize};
use tracing::debug;
use rwymon_common::{abs, cos, sin, NM_PER_DEGREE};

use crate::{runway::{RunwayGeometry, RunwayTable}, sample::PositionSample, track::AircraftTrack};

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,PartialOrd,Ord,Serialize,Deserialize)]
pub enum OperationKind {
    Arrival,
    Departure
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Arrival => write!( f, "arrival"),
            OperationKind::Departure => write!( f, "departure"),
        }
    }
}

/// the result of a successful classification of one aircraft in one cycle
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Classification {
    pub callsign: String,
    pub kind: OperationKind,
    pub runway_id: String,
}

/// thresholds used to decide if an aircraft is arriving at or departing from a runway.
/// Distances are in NM, altitudes in ft above field elevation, speeds in kn, angles in degrees
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ClassifierCriteria {
    pub min_samples: usize,
    pub max_cross_track: f64,

    pub arrival_max_track_diff: f64,
    pub arrival_max_speed_trend: f64,
    pub arrival_min_ground_speed: f64,
    pub arrival_max_agl: f64,

    pub departure_max_track_diff: f64,
    pub departure_min_speed_trend: f64,
    pub departure_min_ground_speed: f64,
    pub departure_max_agl: f64,
}

impl Default for ClassifierCriteria {
    fn default()->Self {
        ClassifierCriteria {
            min_samples: 3,
            max_cross_track: 0.05,

            arrival_max_track_diff: 5.0,
            arrival_max_speed_trend: 10.0,
            arrival_min_ground_speed: 50.0,
            arrival_max_agl: 3000.0,

            departure_max_track_diff: 20.0,
            departure_min_speed_trend: 10.0,
            departure_min_ground_speed: 40.0,
            departure_max_agl: 1000.0,
        }
    }
}

/// position of an aircraft relative to the extended centerline of a runway.
/// This is a flat earth approximation (1 deg ~ 60NM, no longitude convergence) that is
/// only valid close to the airport
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct RunwayRelation {
    pub cross_track: f64, // NM from extended centerline, always positive
    pub along_track: f64, // NM from threshold, positive before the threshold (approach side)
    pub track_diff: f64,  // deg between aircraft track and runway true bearing [0..180]
}

impl RunwayRelation {
    pub fn compute (p: &PositionSample, rwy: &RunwayGeometry)->Self {
        let d_lat = p.latitude - rwy.lat;
        let d_lon = p.longitude - rwy.lon;

        let rx = sin( rwy.true_bearing.radians());
        let ry = cos( rwy.true_bearing.radians());

        let cross_track = abs( d_lon * ry - d_lat * rx) * NM_PER_DEGREE;
        let along_track = -(d_lon * rx + d_lat * ry) * NM_PER_DEGREE;
        let track_diff = p.track.abs_difference( &rwy.true_bearing);

        RunwayRelation { cross_track, along_track, track_diff }
    }
}

impl fmt::Display for RunwayRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "XTK: {:.3} DTG: {:.3} BRG: {:.3}", self.cross_track, self.along_track, self.track_diff)
    }
}

/// stateless rule evaluation of aircraft tracks against a runway table
#[derive(Debug,Clone,Default)]
pub struct OperationClassifier {
    criteria: ClassifierCriteria,
    trace_callsign: Option<String>, // if set we trace all runway evaluations for this callsign
}

impl OperationClassifier {
    pub fn new (criteria: ClassifierCriteria, trace_callsign: Option<String>)->Self {
        OperationClassifier { criteria, trace_callsign }
    }

    pub fn criteria (&self)->&ClassifierCriteria { &self.criteria }

    /// check the newest sample of `track` against all runways in ascending id order and return the
    /// operation kind and id of the first matching runway.
    /// If an aircraft satisfies the criteria for several runways the first one in that order wins, not the closest one
    pub fn classify (&self, track: &AircraftTrack, runways: &RunwayTable, field_elevation_ft: f64)->Option<(OperationKind,String)> {
        if track.len() < self.criteria.min_samples { return None }
        let latest = track.latest()?;
        let is_traced = self.trace_callsign.as_deref() == Some( track.callsign());

        let c = &self.criteria;
        let agl = latest.altitude_ft() - field_elevation_ft;
        let gs = latest.ground_speed_kn();

        for rwy in runways.iter() {
            let rel = RunwayRelation::compute( latest, rwy);
            if is_traced {
                debug!( "{} {}: {} alt: {:.0} gs: {:.0}", track.callsign(), rwy.id, rel, agl, gs);
            }

            if rel.cross_track > c.max_cross_track { continue }

            let alt_trend = track.altitude_trend();
            let speed_trend = track.speed_trend();

            if rel.along_track > 0.0
                && alt_trend < 0.0
                && speed_trend < c.arrival_max_speed_trend
                && rel.track_diff < c.arrival_max_track_diff
                && gs > c.arrival_min_ground_speed
                && agl < c.arrival_max_agl {
                debug!( "{} {}: {} Alt_trend: {:.1} speed_trend: {:.1} -> arrival", track.callsign(), rwy.id, rel, alt_trend, speed_trend);
                return Some( (OperationKind::Arrival, rwy.id.clone()) )
            }

            if rel.along_track < 0.0
                && speed_trend > c.departure_min_speed_trend
                && gs > c.departure_min_ground_speed
                && agl < c.departure_max_agl
                && rel.track_diff < c.departure_max_track_diff {
                debug!( "{} {}: {} Alt_trend: {:.1} speed_trend: {:.1} -> departure", track.callsign(), rwy.id, rel, alt_trend, speed_trend);
                return Some( (OperationKind::Departure, rwy.id.clone()) )
            }
        }

        None
    }

    /// classify a track and wrap the result into a Classification record
    pub fn classification (&self, track: &AircraftTrack, runways: &RunwayTable, field_elevation_ft: f64)->Option<Classification> {
        self.classify( track, runways, field_elevation_ft).map( |(kind,runway_id)| {
            Classification { callsign: track.callsign().to_string(), kind, runway_id }
        })
    }
}
