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
use chrono::{DateTime,Utc};
use uom::si::{f64::{Length,Velocity}, length::foot, velocity::knot};
use rwymon_common::angle::Angle360;

/// one position/kinematic reading of an aircraft. Immutable once created
#[derive(Debug,Clone,PartialEq)]
pub struct PositionSample {
    pub callsign: String,
    pub latitude: f64,  // degrees
    pub longitude: f64, // degrees
    pub altitude: Length,
    pub ground_speed: Velocity,
    pub track: Angle360, // true
    pub time: DateTime<Utc>,
}

impl PositionSample {
    /// the traffic feed reports altitude in ft and speed in knots
    pub fn new (callsign: impl Into<String>, latitude: f64, longitude: f64, altitude_ft: f64, ground_speed_kn: f64,
                track_deg: f64, time: DateTime<Utc>)->Self {
        PositionSample {
            callsign: callsign.into(),
            latitude,
            longitude,
            altitude: Length::new::<foot>( altitude_ft),
            ground_speed: Velocity::new::<knot>( ground_speed_kn),
            track: Angle360::from_degrees( track_deg),
            time
        }
    }

    #[inline] pub fn altitude_ft (&self)->f64 { self.altitude.get::<foot>() }
    #[inline] pub fn ground_speed_kn (&self)->f64 { self.ground_speed.get::<knot>() }
}

impl fmt::Display for PositionSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "PositionSample( cs: \"{}\", pos: {:.5},{:.5}, alt: {:.0}, spd: {:.0}, trk: {:.0}, time: {})",
            self.callsign, self.latitude, self.longitude, self.altitude_ft(), self.ground_speed_kn(), self.track.degrees(), self.time)
    }
}
