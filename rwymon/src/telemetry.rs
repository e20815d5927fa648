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

use std::collections::BTreeMap;
use chrono::{DateTime,Utc};
use serde_json::Value;
use tracing::warn;
use rwymon_common::datetime::from_epoch_secs_f64;

use crate::{errors::{Result, RwyMonError, parse_error}, sample::PositionSample};

// positions of the fields we use in the per-aircraft arrays of the traffic feed
pub const LAT_IDX: usize = 1;
pub const LON_IDX: usize = 2;
pub const TRACK_IDX: usize = 3;
pub const ALT_IDX: usize = 4;
pub const GS_IDX: usize = 5;
pub const CALLSIGN_IDX: usize = 13;

/// the fields of a single traffic record we care about. Each of them might be missing or null
#[derive(Debug,Clone,PartialEq,Default)]
pub struct TelemetryRecord {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub track: Option<f64>,
    pub altitude: Option<f64>,     // ft
    pub ground_speed: Option<f64>, // kn
    pub callsign: Option<String>,
}

fn number_at (fields: &[Value], idx: usize)->Option<f64> {
    fields.get(idx).and_then( |v| v.as_f64()).filter( |x| x.is_finite())
}

impl TelemetryRecord {
    pub fn from_fields (fields: &[Value])->Self {
        TelemetryRecord {
            latitude: number_at( fields, LAT_IDX),
            longitude: number_at( fields, LON_IDX),
            track: number_at( fields, TRACK_IDX),
            altitude: number_at( fields, ALT_IDX),
            ground_speed: number_at( fields, GS_IDX),
            callsign: fields.get( CALLSIGN_IDX).and_then( |v| v.as_str()).map( |s| s.trim().to_string()),
        }
    }

    /// the key under which this aircraft is tracked. Aircraft without callsign are tracked under their feed id
    pub fn track_key<'a> (&'a self, aircraft_id: &'a str)->&'a str {
        match &self.callsign {
            Some(cs) if !cs.is_empty() => cs.as_str(),
            _ => aircraft_id
        }
    }

    /// turn into a PositionSample for the given cycle time, or None if any of the kinematic fields is missing
    pub fn to_sample (&self, aircraft_id: &str, time: DateTime<Utc>)->Option<PositionSample> {
        Some( PositionSample::new(
            self.track_key( aircraft_id),
            self.latitude?,
            self.longitude?,
            self.altitude?,
            self.ground_speed?,
            self.track?,
            time
        ))
    }
}

/// one snapshot of the traffic feed: aircraft id -> record
#[derive(Debug,Clone,Default,PartialEq)]
pub struct TrafficBatch {
    records: BTreeMap<String,TelemetryRecord>,
}

impl TrafficBatch {
    pub fn new ()->Self { TrafficBatch::default() }

    pub fn insert (&mut self, aircraft_id: impl Into<String>, record: TelemetryRecord) {
        self.records.insert( aircraft_id.into(), record);
    }

    pub fn len (&self)->usize { self.records.len() }
    pub fn is_empty (&self)->bool { self.records.is_empty() }

    pub fn get (&self, aircraft_id: &str)->Option<&TelemetryRecord> { self.records.get( aircraft_id) }

    pub fn iter (&self)->impl Iterator<Item=(&str,&TelemetryRecord)> {
        self.records.iter().map( |(id,rec)| (id.as_str(), rec))
    }

    pub fn from_json (s: &str)->Result<Self> {
        let v: Value = serde_json::from_str(s)?;
        TrafficBatch::from_value( &v)
    }

    /// accepts either a complete service response (`{"status":200,"data":{..}}`) or just its data object.
    /// Non-array entries of the data object (such as "full_count") are skipped
    pub fn from_value (v: &Value)->Result<Self> {
        let data = service_data( v)?;
        let map = data.as_object().ok_or_else( || parse_error!("traffic data is not an object"))?;

        let mut batch = TrafficBatch::new();
        for (id,entry) in map {
            match entry {
                Value::Array(fields) => batch.insert( id.as_str(), TelemetryRecord::from_fields( fields)),
                Value::Object(_) => warn!("ignoring non-array traffic entry {}", id),
                _ => {} // bookkeeping values like full_count
            }
        }
        Ok(batch)
    }
}

/// return the "data" value of a service response after checking its status, or the value itself
/// if it is not a service response
pub fn service_data (v: &Value)->Result<&Value> {
    if let Some(status) = v.get("status").and_then( |s| s.as_i64()) {
        if status != 200 {
            let msg = v.get("message").and_then( |m| m.as_str()).unwrap_or("").to_string();
            return Err( RwyMonError::ApiStatusError( status, msg))
        }
    }

    match v.get("data") {
        Some(data) => Ok(data),
        None => Ok(v)
    }
}

/// one line of a recorded traffic stream: either a plain traffic response or
/// `{"time": <epoch secs>, "traffic": <response>}`
#[derive(Debug,Clone)]
pub struct ReplayFrame {
    pub time: Option<DateTime<Utc>>,
    pub batch: TrafficBatch,
}

impl ReplayFrame {
    pub fn parse_line (line: &str)->Result<Self> {
        let v: Value = serde_json::from_str( line)?;

        if let Some(traffic) = v.get("traffic") {
            let time = match v.get("time") {
                Some(t) => {
                    let secs = t.as_f64().ok_or_else( || parse_error!("invalid replay time {}", t))?;
                    Some( from_epoch_secs_f64( secs).ok_or_else( || parse_error!("replay time out of range {}", secs))? )
                }
                None => None
            };
            Ok( ReplayFrame { time, batch: TrafficBatch::from_value( traffic)? } )

        } else {
            Ok( ReplayFrame { time: None, batch: TrafficBatch::from_value( &v)? } )
        }
    }
}
