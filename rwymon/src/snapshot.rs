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

use std::{collections::BTreeSet, fmt};
use chrono::{DateTime,Utc};
use serde::Serialize;
use rwymon_common::datetime::{ser_epoch_millis, short_utc_datetime_string};

/// what we report for a single runway after each cycle
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct RunwayStatus {
    pub runway_id: String,
    pub true_bearing: f64,
    pub mag_bearing: f64,

    pub arrival_count_30min: usize,
    pub departure_count_30min: usize,
    pub current_arrival_count: usize,
    pub current_departure_count: usize,

    pub current_arrival_callsigns: BTreeSet<String>,
    pub current_departure_callsigns: BTreeSet<String>,
}

/// the output of one engine cycle, runways in ascending id order
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct RunwaySnapshot {
    #[serde(serialize_with="ser_epoch_millis")]
    pub time: DateTime<Utc>,
    pub runways: Vec<RunwayStatus>,
}

impl RunwaySnapshot {
    pub fn runway (&self, runway_id: &str)->Option<&RunwayStatus> {
        self.runways.iter().find( |r| r.runway_id == runway_id)
    }
}

fn join (callsigns: &BTreeSet<String>)->String {
    callsigns.iter().map( |cs| cs.as_str()).collect::<Vec<&str>>().join(",")
}

/// the console runway table
impl fmt::Display for RunwaySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!( f, "RWY    HDG(T) HDG(M)   ARR (30m)    DEP (30m)")?;
        writeln!( f, "{}", "-".repeat(47))?;

        for r in &self.runways {
            writeln!( f, "{:<7} {:03.0}°   {:03.0}°    {:3} ({})      {:3} ({})",
                r.runway_id, r.true_bearing, r.mag_bearing,
                r.arrival_count_30min, r.current_arrival_count,
                r.departure_count_30min, r.current_departure_count)?;

            if !r.current_arrival_callsigns.is_empty() {
                writeln!( f, "  Arriving: {}", join( &r.current_arrival_callsigns))?;
            }
            if !r.current_departure_callsigns.is_empty() {
                writeln!( f, "  Departing: {}", join( &r.current_departure_callsigns))?;
            }
        }

        write!( f, "\nTraffic time: {}", short_utc_datetime_string( &self.time))
    }
}
