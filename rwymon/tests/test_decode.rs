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

/// tests for decoding traffic and airport-info responses
/// run with "cargo test --test test_decode -- --nocapture"

mod common;

use rwymon::{AirportInfo, ReplayFrame, RwyMonError, TrafficBatch};
use common::*;

const TRAFFIC: &'static str = r#"{"status":200,"dataepoch":1750000000,"full_count":3,"data":{
  "full_count": 3,
  "a0b1c2":["a0b1c2",37.5812,-122.2493,297.6,1825,142,-704,"A320",null,null,null,null,null,"UAL1732"],
  "a0b1c3":["a0b1c3",37.6213,-122.3790,null,0,0,0,"B738",null,null,null,null,null,"SWA902"],
  "a0b1c4":["a0b1c4",37.6101,-122.3611,118.0,25,48,0,"C172",null,null,null,null,null,""]
}}"#;

const AIRPORT_INFO: &'static str = r#"{"status":200,"message":"OK","data":{
  "airport":{"icao":"KSFO","name":"San Francisco Intl","elevation":13,"ref_lat":37.6188,"ref_lon":-122.3754},
  "runways":{
    "28L":{"lat":37.6117,"lon":-122.3581,"true_brg":297.9,"mag_brg":284,"length":11870},
    "10R":{"lat":37.6288,"lon":-122.3931,"true_brg":117.9,"mag_brg":104,"length":11870}
  }
}}"#;

#[test]
fn test_decode_traffic () {
    println!("--- testing traffic response decoding");
    let batch = TrafficBatch::from_json( TRAFFIC).unwrap();
    assert_eq!( 3, batch.len()); // full_count is not a record

    let rec = batch.get("a0b1c2").unwrap();
    println!("{rec:?}");
    assert_eq!( Some(37.5812), rec.latitude);
    assert_eq!( Some(297.6), rec.track);
    assert_eq!( Some(1825.0), rec.altitude);
    assert_eq!( Some("UAL1732"), rec.callsign.as_deref());
    assert!( rec.to_sample( "a0b1c2", at(0)).is_some());

    // null track
    let rec = batch.get("a0b1c3").unwrap();
    assert!( rec.track.is_none());
    assert!( rec.to_sample( "a0b1c3", at(0)).is_none());

    // no callsign -> tracked under feed id
    let rec = batch.get("a0b1c4").unwrap();
    let sample = rec.to_sample( "a0b1c4", at(0)).unwrap();
    assert_eq!( "a0b1c4", sample.callsign);
    assert_close( 25.0, sample.altitude_ft());
}

#[test]
fn test_status_error () {
    let res = TrafficBatch::from_json( r#"{"status":403,"message":"invalid GUID"}"#);
    match res {
        Err(RwyMonError::ApiStatusError(status,msg)) => {
            assert_eq!( 403, status);
            assert_eq!( "invalid GUID", msg);
        }
        other => panic!("unexpected result {other:?}")
    }
}

#[test]
fn test_decode_airport_info () {
    println!("--- testing airport info decoding");
    let info = AirportInfo::from_json( AIRPORT_INFO).unwrap();
    println!("{info:?}");
    assert_eq!( Some("KSFO"), info.airport.icao.as_deref());
    assert_close( 13.0, info.field_elevation_ft());

    let runways = info.runway_table().unwrap();
    assert_eq!( vec!["10R","28L"], runways.ids().collect::<Vec<&str>>());
    let rwy = runways.get("28L").unwrap();
    assert_close( 297.9, rwy.true_bearing.degrees());
    assert_close( 284.0, rwy.mag_bearing.degrees());
}

#[test]
fn test_replay_frames () {
    let line = format!( r#"{{"time":1750000002.5,"traffic":{}}}"#, TRAFFIC.replace('\n', ""));
    let frame = ReplayFrame::parse_line( &line).unwrap();
    assert_eq!( Some( at(2) + chrono::TimeDelta::milliseconds(500)), frame.time);
    assert_eq!( 3, frame.batch.len());

    let frame = ReplayFrame::parse_line( &TRAFFIC.replace('\n', "")).unwrap();
    assert!( frame.time.is_none());
    assert_eq!( 3, frame.batch.len());

    assert!( ReplayFrame::parse_line( r#"{"time":"yesterday","traffic":{}}"#).is_err());
}
