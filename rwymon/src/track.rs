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

use std::{fmt, time::Duration};
use chrono::{DateTime,Utc};
use rwymon_common::{collections::RingBuffer, datetime, mean};

use crate::sample::PositionSample;

/// max number of position samples we keep per aircraft
pub const MAX_TRACK_SAMPLES: usize = 10;

/// number of oldest/newest samples that are averaged for trends
pub const TREND_WINDOW: usize = 3;

/// the recent position history of a single aircraft, keyed by callsign
#[derive(Debug,Clone)]
pub struct AircraftTrack {
    callsign: String,
    samples: RingBuffer<PositionSample,MAX_TRACK_SAMPLES>, // oldest first
    last_update: Option<DateTime<Utc>>,
}

impl AircraftTrack {
    pub fn new (callsign: impl Into<String>)->Self {
        AircraftTrack { callsign: callsign.into(), samples: RingBuffer::new(), last_update: None }
    }

    pub fn callsign (&self)->&str { self.callsign.as_str() }
    pub fn last_update (&self)->Option<DateTime<Utc>> { self.last_update }

    pub fn len (&self)->usize { self.samples.len() }
    pub fn is_empty (&self)->bool { self.samples.is_empty() }

    pub fn latest (&self)->Option<&PositionSample> { self.samples.back() }
    pub fn samples (&self)->impl DoubleEndedIterator<Item=&PositionSample> { self.samples.iter() }

    /// append a sample, evicting the oldest one if we already have MAX_TRACK_SAMPLES.
    /// Samples that are older than the last update are ignored and false is returned
    pub fn update (&mut self, sample: PositionSample)->bool {
        if let Some(t) = self.last_update {
            if sample.time < t { return false }
        }
        self.last_update = Some(sample.time);
        self.samples.push( sample);
        true
    }

    /// replace the newest sample (e.g. if the same cycle is processed again)
    pub fn replace_latest (&mut self, sample: PositionSample) {
        self.last_update = Some(sample.time);
        self.samples.replace_back( sample);
    }

    /// mean altitude (ft) of the newest samples minus mean altitude of the oldest samples.
    /// Negative means descending. Note the windows overlap if we have less than 2*TREND_WINDOW samples
    pub fn altitude_trend (&self)->f64 {
        self.trend( |p| p.altitude_ft())
    }

    /// same as altitude_trend for ground speed (kn). Positive means accelerating
    pub fn speed_trend (&self)->f64 {
        self.trend( |p| p.ground_speed_kn())
    }

    fn trend<F> (&self, f: F)->f64 where F: Fn(&PositionSample)->f64 {
        if self.samples.len() < 2 { return 0.0 }

        let first = mean( self.samples.first_n( TREND_WINDOW).map(&f));
        let last = mean( self.samples.last_n( TREND_WINDOW).map(&f));
        last - first
    }

    /// answer if the newest sample is more than `max_age` older than `now`. Empty tracks are always stale
    pub fn is_stale (&self, now: &DateTime<Utc>, max_age: Duration)->bool {
        match &self.last_update {
            Some(t) => datetime::is_older_than( now, t, max_age),
            None => true
        }
    }
}

impl fmt::Display for AircraftTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "AircraftTrack( cs: \"{}\", n_pos: {}", self.callsign, self.samples.len())?;
        if let Some(p) = self.latest() {
            write!( f, ", alt: {:.0}, spd: {:.0}, trk: {:.0}", p.altitude_ft(), p.ground_speed_kn(), p.track.degrees())?;
        }
        write!( f, ", alt_trend: {:.1}, spd_trend: {:.1})", self.altitude_trend(), self.speed_trend())
    }
}
