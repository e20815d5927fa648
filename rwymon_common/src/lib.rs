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
pub mod errors;
pub mod collections;
pub mod angle;
pub mod datetime;
pub mod ron;

// syntactic sugar - this is just more readable in geometric expressions
#[inline(always)] pub fn sin(x:f64) -> f64 { x.sin() }
#[inline(always)] pub fn cos(x:f64) -> f64 { x.cos() }
#[inline(always)] pub fn abs(x:f64) -> f64 { x.abs() }

/// nautical miles per degree of latitude (one arc minute per NM)
pub const NM_PER_DEGREE: f64 = 60.0;

/// arithmetic mean of the provided values, 0.0 for an empty input
pub fn mean<I> (values: I)->f64 where I: IntoIterator<Item=f64> {
    let (n, sum) = values.into_iter().fold( (0usize, 0.0), |(n,sum),v| (n+1, sum+v));
    if n > 0 { sum / n as f64 } else { 0.0 }
}

/// a global fn that can be used with serde(skip_serializing_if="rwymon_common::is_none")
#[inline] pub fn is_none<T> (opt: &Option<T>)->bool { opt.is_none() }
