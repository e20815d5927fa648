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

/// synthetic runway/traffic fixtures shared by the rwymon tests

use chrono::{DateTime, TimeDelta, Utc};
use serde_json::{json, Value};
use rwymon::{AircraftTrack, PositionSample, RunwayGeometry, RunwayTable, TrafficBatch};

pub const FIELD_ELEVATION: f64 = 0.0;

pub fn t0 ()->DateTime<Utc> {
    DateTime::<Utc>::from_timestamp( 1_750_000_000, 0).unwrap()
}

pub fn at (secs: i64)->DateTime<Utc> {
    t0() + TimeDelta::seconds(secs)
}

/// runway 09 at the origin (bearing 090) and its reciprocal 27 (threshold 2NM east)
pub fn rwy_09 ()->RunwayGeometry { RunwayGeometry::new( "09", 0.0, 0.0, 90.0, 88.0) }
pub fn rwy_27 ()->RunwayGeometry { RunwayGeometry::new( "27", 0.0, 2.0/60.0, 270.0, 268.0) }

pub fn runway_table ()->RunwayTable {
    RunwayTable::new( vec![ rwy_27(), rwy_09()], FIELD_ELEVATION).unwrap()
}

/// lat/lon for a position that is `along` NM before the threshold (negative: past the threshold)
/// and `cross` NM right of the extended centerline
pub fn position_at (rwy: &RunwayGeometry, along: f64, cross: f64)->(f64,f64) {
    let rx = rwy.true_bearing.radians().sin();
    let ry = rwy.true_bearing.radians().cos();
    let d_lon = (-along * rx + cross * ry) / 60.0;
    let d_lat = (-along * ry - cross * rx) / 60.0;
    (rwy.lat + d_lat, rwy.lon + d_lon)
}

/// (along NM, alt ft, gs kn, track deg)
pub type Kinematics = (f64,f64,f64,f64);

pub fn sample_at (cs: &str, rwy: &RunwayGeometry, k: Kinematics, cross: f64, time: DateTime<Utc>)->PositionSample {
    let (along,alt,gs,trk) = k;
    let (lat,lon) = position_at( rwy, along, cross);
    PositionSample::new( cs, lat, lon, alt, gs, trk, time)
}

pub fn track_from (cs: &str, rwy: &RunwayGeometry, ks: &[Kinematics], cross: f64)->AircraftTrack {
    let mut track = AircraftTrack::new( cs);
    for (i,k) in ks.iter().enumerate() {
        track.update( sample_at( cs, rwy, *k, cross, at( 2*i as i64)));
    }
    track
}

/// descending and decelerating on final, last position 3NM before threshold at 2000ft/120kn
pub const ARRIVAL: [Kinematics;6] = [
    (4.0, 2500.0, 145.0, 91.0),
    (3.8, 2400.0, 140.0, 91.0),
    (3.6, 2300.0, 135.0, 91.0),
    (3.4, 2200.0, 130.0, 91.0),
    (3.2, 2100.0, 125.0, 91.0),
    (3.0, 2000.0, 120.0, 91.0),
];

/// accelerating take-off roll and lift off, last position 0.3NM past threshold at 50ft/45kn
pub const DEPARTURE: [Kinematics;5] = [
    (0.0, 0.0, 0.0, 98.0),
    (0.0, 0.0, 0.0, 98.0),
    (0.0, 0.0, 0.0, 98.0),
    (-0.1, 0.0, 20.0, 98.0),
    (-0.3, 50.0, 45.0, 98.0),
];

/// a traffic feed record array with the fields the monitor uses
pub fn record (lat: Value, lon: Value, trk: Value, alt: Value, gs: Value, cs: &str)->Value {
    json!([ "a1b2c3", lat, lon, trk, alt, gs, null, null, null, null, null, null, null, cs ])
}

pub fn record_for (cs: &str, rwy: &RunwayGeometry, k: Kinematics, cross: f64)->Value {
    let (along,alt,gs,trk) = k;
    let (lat,lon) = position_at( rwy, along, cross);
    record( json!(lat), json!(lon), json!(trk), json!(alt), json!(gs), cs)
}

pub fn batch_of (entries: Vec<(&str,Value)>)->TrafficBatch {
    let mut data = serde_json::Map::new();
    for (id,rec) in entries { data.insert( id.to_string(), rec); }
    TrafficBatch::from_value( &json!({ "status": 200, "data": data })).unwrap()
}

/// altitudes and speeds go through unit conversion, hence no exact float comparison
pub fn assert_close (expected: f64, actual: f64) {
    assert!( (expected - actual).abs() < 1e-6, "expected {expected} but got {actual}");
}
