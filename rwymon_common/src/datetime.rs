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

use std::time::Duration;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Serializer, Deserialize, Deserializer};
use parse_duration::parse;

// as of Rust 1.87 the min,hour Duration ctors are still experimental, hence our own wrappers
#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }
#[inline] pub fn minutes (n: u64)->Duration { Duration::from_secs(n * 60) }

/// this should be used wherever we might have to use a replay clock instead of wall clock
#[inline]
pub fn utc_now()->DateTime<Utc> {
    Utc::now()
}

/// DateTime for fractional epoch seconds (as used by most traffic feeds)
pub fn from_epoch_secs_f64 (secs: f64)->Option<DateTime<Utc>> {
    if secs.is_finite() {
        DateTime::<Utc>::from_timestamp_millis( (secs * 1000.0).round() as i64)
    } else {
        None
    }
}

/// elapsed time between two dates, zero if `dt_later` is actually before `dt_earlier`
pub fn duration_since (dt_later: &DateTime<Utc>, dt_earlier: &DateTime<Utc>)->Duration {
    (*dt_later - *dt_earlier).to_std().unwrap_or( Duration::ZERO)
}

/// answer if more than `max_age` has passed between `dt` and `now`
#[inline]
pub fn is_older_than (now: &DateTime<Utc>, dt: &DateTime<Utc>, max_age: Duration)->bool {
    duration_since( now, dt) > max_age
}

/// add a std Duration to a DateTime, saturating at the chrono limits
pub fn add_duration (dt: &DateTime<Utc>, dur: Duration)->DateTime<Utc> {
    TimeDelta::from_std(dur).ok()
        .and_then( |td| dt.checked_add_signed(td))
        .unwrap_or( DateTime::<Utc>::MAX_UTC)
}

pub fn short_utc_datetime_string (dt: &DateTime<Utc>) -> String {
    format!("{}", dt.format("%Y-%m-%d %H:%M:%S UTC"))
}

//--- support for serde

pub fn ser_epoch_millis<S: Serializer> (dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_i64(dt.timestamp_millis())
}

/// deserialize from human readable duration specs such as "120s" or "30min"
pub fn deserialize_duration <'a,D>(deserializer: D) -> Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}

pub fn serialize_duration<S: Serializer> (dur: &Duration, s: S) -> Result<S::Ok, S::Error>  {
    let dfm = format!("{:?}", dur);
    s.serialize_str(&dfm)
}
