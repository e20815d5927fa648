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

use std::{path::Path, time::Duration};
use serde::{Serialize,Deserialize};
use rwymon_common::{datetime::{self, deserialize_duration, serialize_duration}, ron::load_ron_config};

use crate::{classifier::ClassifierCriteria, errors::Result};

/// runtime configuration of the runway monitor, normally loaded from a RON file such as
/// ```ron
/// MonitorConfig(
///     track_timeout: "120s",
///     history_window: "30min",
///     criteria: ( max_cross_track: 0.05 ),
/// )
/// ```
/// all fields are optional and default to the values below
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// tracks without new samples for longer than this are dropped
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub track_timeout: Duration,

    /// how long detected operations count for their runway
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub history_window: Duration,

    /// cycle spacing for traffic data without capture time
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub cycle_interval: Duration,

    pub criteria: ClassifierCriteria,

    #[serde(skip_serializing_if="rwymon_common::is_none")]
    pub trace_callsign: Option<String>,
}

impl Default for MonitorConfig {
    fn default()->Self {
        MonitorConfig {
            track_timeout: datetime::secs(120),
            history_window: datetime::minutes(30),
            cycle_interval: datetime::secs(2),
            criteria: ClassifierCriteria::default(),
            trace_callsign: None,
        }
    }
}

impl MonitorConfig {
    pub fn load<P: AsRef<Path>> (path: P)->Result<Self> {
        Ok( load_ron_config( path)? )
    }
}
