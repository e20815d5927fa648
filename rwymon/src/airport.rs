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

use std::{collections::BTreeMap, fs, path::Path};
use serde::{Serialize,Deserialize};
use serde_json::Value;

use crate::{errors::Result, runway::{RunwayGeometry, RunwayTable}, telemetry::service_data};

/// the airport reference data of an airport-info response
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct AirportRecord {
    #[serde(default, skip_serializing_if="rwymon_common::is_none")]
    pub icao: Option<String>,
    #[serde(default, skip_serializing_if="rwymon_common::is_none")]
    pub name: Option<String>,
    pub elevation: f64, // ft
    pub ref_lat: f64,
    pub ref_lon: f64,
}

/// runway entry of an airport-info response (keyed by runway id)
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct RunwayRecord {
    pub lat: f64,
    pub lon: f64,
    pub true_brg: f64,
    pub mag_brg: f64,
}

/// decoded airport-info response
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct AirportInfo {
    pub airport: AirportRecord,
    pub runways: BTreeMap<String,RunwayRecord>,
}

impl AirportInfo {
    pub fn from_json (s: &str)->Result<Self> {
        let v: Value = serde_json::from_str(s)?;
        let data = service_data( &v)?;
        Ok( AirportInfo::deserialize( data)? )
    }

    pub fn from_file<P: AsRef<Path>> (path: P)->Result<Self> {
        let s = fs::read_to_string( path.as_ref())?;
        AirportInfo::from_json( &s)
    }

    pub fn field_elevation_ft (&self)->f64 { self.airport.elevation }

    /// the validated runway table for this airport. This fails if any runway geometry is malformed
    pub fn runway_table (&self)->Result<RunwayTable> {
        let runways = self.runways.iter().map( |(id,r)| RunwayGeometry::new( id.as_str(), r.lat, r.lon, r.true_brg, r.mag_brg));
        RunwayTable::new( runways, self.airport.elevation)
    }
}
