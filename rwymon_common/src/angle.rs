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
use serde::{Serialize, Serializer, Deserialize, Deserializer, de::Error as DeError};

/// normalize degrees into [0..360)
#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 { 360.0 + x } else { x }
}

/// smallest absolute difference between two directions in degrees, in [0..180]
/// computed as `|((a - b + 180) mod 360) - 180|` with a floored (always positive) modulo
#[inline]
pub fn abs_difference (a_deg: f64, b_deg: f64) -> f64 {
    ((a_deg - b_deg + 180.0).rem_euclid(360.0) - 180.0).abs()
}

/// a direction in degrees normalized to [0..360). Note that non-finite values are passed
/// through unchanged so that they can be detected by clients
#[derive(Copy, Clone, PartialEq)]
pub struct Angle360 {
    value: f64,
}

impl Angle360 {
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Angle360 { value: normalize_360(deg) }
    }

    #[inline] pub fn radians(&self)->f64 { self.value.to_radians() }
    #[inline] pub fn degrees(&self)->f64 { self.value }
    #[inline] pub fn is_finite(&self)->bool { self.value.is_finite() }

    /// smallest absolute angular distance to `other` in degrees [0..180]
    #[inline] pub fn abs_difference(&self, other: &Self)->f64 { abs_difference( self.value, other.value) }
}

impl fmt::Display for Angle360 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:03.0}°", self.value) }
}

impl fmt::Debug for Angle360 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}deg", self.value) }
}

//--- serde support

impl Serialize for Angle360 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_f64(self.value)
    }
}

// we accept any number (JSON sources frequently use integer bearings) and normalize it
impl<'de> Deserialize<'de> for Angle360 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        let deg = f64::deserialize(deserializer)?;
        if deg.is_finite() {
            Ok( Angle360::from_degrees(deg))
        } else {
            Err( D::Error::custom( format!("not a finite angle: {deg}")))
        }
    }
}
