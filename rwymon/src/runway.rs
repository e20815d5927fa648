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

use std::{collections::BTreeMap, fmt};
use serde::{Serialize,Deserialize};
use uom::si::{f64::Length, length::foot};
use rwymon_common::angle::Angle360;

use crate::errors::{Result, RwyMonError, invalid_runway};

/// threshold position and bearing of a single runway end
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct RunwayGeometry {
    pub id: String,
    pub lat: f64, // threshold latitude in degrees
    pub lon: f64, // threshold longitude in degrees
    pub true_bearing: Angle360,
    pub mag_bearing: Angle360, // only used for display
}

impl RunwayGeometry {
    pub fn new (id: impl Into<String>, lat: f64, lon: f64, true_bearing_deg: f64, mag_bearing_deg: f64)->Self {
        RunwayGeometry {
            id: id.into(),
            lat,
            lon,
            true_bearing: Angle360::from_degrees( true_bearing_deg),
            mag_bearing: Angle360::from_degrees( mag_bearing_deg),
        }
    }

    pub fn check (&self)->Result<()> {
        if self.id.trim().is_empty() {
            return Err( invalid_runway!("empty runway id"))
        }
        if !self.lat.is_finite() || self.lat.abs() > 90.0 {
            return Err( invalid_runway!("{}: latitude out of range {}", self.id, self.lat))
        }
        if !self.lon.is_finite() || self.lon.abs() > 180.0 {
            return Err( invalid_runway!("{}: longitude out of range {}", self.id, self.lon))
        }
        if !self.true_bearing.is_finite() {
            return Err( invalid_runway!("{}: non-finite true bearing", self.id))
        }
        if !self.mag_bearing.is_finite() {
            return Err( invalid_runway!("{}: non-finite magnetic bearing", self.id))
        }
        Ok(())
    }
}

impl fmt::Display for RunwayGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Runway( {}, thr: {:.5},{:.5}, brg: {}T/{}M )", self.id, self.lat, self.lon, self.true_bearing, self.mag_bearing)
    }
}

/// the validated runway set of the monitored airport plus its field elevation.
/// Runways are kept (and iterated) in ascending id order, which is the order in which
/// the classifier tries to match them
#[derive(Debug,Clone)]
pub struct RunwayTable {
    runways: BTreeMap<String,RunwayGeometry>,
    field_elevation: Length,
}

impl RunwayTable {
    /// this is where malformed static config is rejected - once a table is created it is not checked again
    pub fn new<I> (runways: I, field_elevation_ft: f64)->Result<Self> where I: IntoIterator<Item=RunwayGeometry> {
        if !field_elevation_ft.is_finite() {
            return Err( invalid_runway!("non-finite field elevation {}", field_elevation_ft))
        }

        let mut map = BTreeMap::new();
        for rwy in runways {
            rwy.check()?;
            if map.contains_key( &rwy.id) {
                return Err( invalid_runway!("duplicated runway id {}", rwy.id))
            }
            map.insert( rwy.id.clone(), rwy);
        }

        if map.is_empty() {
            return Err( invalid_runway!("no runways"))
        }

        Ok( RunwayTable { runways: map, field_elevation: Length::new::<foot>( field_elevation_ft) } )
    }

    #[inline] pub fn field_elevation_ft (&self)->f64 { self.field_elevation.get::<foot>() }

    pub fn len (&self)->usize { self.runways.len() }
    pub fn is_empty (&self)->bool { self.runways.is_empty() }

    pub fn get (&self, id: &str)->Option<&RunwayGeometry> { self.runways.get(id) }
    pub fn contains (&self, id: &str)->bool { self.runways.contains_key(id) }

    /// runways in ascending id order
    pub fn iter (&self)->impl Iterator<Item=&RunwayGeometry> { self.runways.values() }

    pub fn ids (&self)->impl Iterator<Item=&str> { self.runways.keys().map( |id| id.as_str()) }
}
