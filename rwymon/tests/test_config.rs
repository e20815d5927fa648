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

#![allow(unused)]

/// tests for MonitorConfig loading
/// run with "cargo test --test test_config -- --nocapture"

use std::time::Duration;
use rwymon::{ClassifierCriteria, MonitorConfig};
use rwymon_common::ron::{parse_ron_config, to_config_ron};

#[test]
fn test_defaults () {
    let config = MonitorConfig::default();
    assert_eq!( Duration::from_secs(120), config.track_timeout);
    assert_eq!( Duration::from_secs(1800), config.history_window);
    assert_eq!( 0.05, config.criteria.max_cross_track);
    assert_eq!( 3, config.criteria.min_samples);

    println!("{}", to_config_ron( &config).unwrap());
}

#[test]
fn test_partial_config () {
    let config: MonitorConfig = parse_ron_config( r#"MonitorConfig(
        track_timeout: "90s",
        history_window: "45min",
        criteria: ( max_cross_track: 0.1 ),
        trace_callsign: Some("DAL123"),
    )"#).unwrap();
    println!("{config:?}");

    assert_eq!( Duration::from_secs(90), config.track_timeout);
    assert_eq!( Duration::from_secs(45*60), config.history_window);
    assert_eq!( Duration::from_secs(2), config.cycle_interval);
    assert_eq!( 0.1, config.criteria.max_cross_track);
    assert_eq!( ClassifierCriteria::default().arrival_max_agl, config.criteria.arrival_max_agl);
    assert_eq!( Some("DAL123"), config.trace_callsign.as_deref());
}

#[test]
fn test_config_file () {
    let path = concat!( env!("CARGO_MANIFEST_DIR"), "/configs/rwymon.ron");
    let config = MonitorConfig::load( path).unwrap();
    assert_eq!( MonitorConfig::default(), config);
}

#[test]
fn test_invalid_duration () {
    assert!( parse_ron_config::<MonitorConfig>( r#"( track_timeout: "soon" )"#).is_err());
}
