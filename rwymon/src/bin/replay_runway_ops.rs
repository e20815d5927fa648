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

use std::{fs::File, io::{BufRead, BufReader}, path::{Path, PathBuf}};
use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use rwymon_common::datetime::{self, add_duration};
use rwymon::{AirportInfo, MonitorConfig, ReplayFrame, RunwayOperationsEngine};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "replay recorded traffic responses through the runway operations monitor")]
pub struct Args {
    /// airport-info response (JSON) of the monitored airport
    #[arg(short,long)]
    pub airport: PathBuf,

    /// optional MonitorConfig (RON)
    #[arg(short,long)]
    pub config: Option<PathBuf>,

    /// print classification debug info
    #[arg(short,long)]
    pub debug: bool,

    /// callsign for which all runway evaluations are traced
    #[arg(short='p', long)]
    pub callsign: Option<String>,

    /// print snapshots as JSON instead of the runway table
    #[arg(long)]
    pub json: bool,

    /// recorded traffic responses, one JSON document per line
    pub traffic: PathBuf,
}

fn main()->Result<()> {
    let args = Args::parse();

    let filter = if args.debug || args.callsign.is_some() { EnvFilter::new("debug") } else { EnvFilter::from_default_env() };
    let _ = tracing_subscriber::fmt().with_env_filter( filter).try_init();

    let mut config = match &args.config {
        Some(path) => MonitorConfig::load( path)?,
        None => MonitorConfig::default()
    };
    if args.callsign.is_some() { config.trace_callsign = args.callsign.clone(); }

    let airport = AirportInfo::from_file( &args.airport)?;
    let runways = airport.runway_table()?; // fail right here if runway geometry is malformed
    info!("monitoring {} runways at field elevation {:.0}ft", runways.len(), runways.field_elevation_ft());

    let mut engine = RunwayOperationsEngine::new( runways, &config);
    let frames = read_frames( &args.traffic)?;

    // unwrapped documents continue from the first capture time in the file
    let mut next_time = frames.iter().find_map( |f| f.time).unwrap_or_else( datetime::utc_now);

    for frame in &frames {
        let now = frame.time.unwrap_or( next_time);
        next_time = add_duration( &now, config.cycle_interval);

        let snapshot = engine.process_cycle( &frame.batch, now);
        if args.json {
            println!("{}", serde_json::to_string( &snapshot)?);
        } else {
            println!("{snapshot}\n");
        }
    }

    Ok(())
}

fn read_frames (path: &Path)->Result<Vec<ReplayFrame>> {
    let reader = BufReader::new( File::open( path)?);
    let mut frames = Vec::new();

    for (i,line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue }

        match ReplayFrame::parse_line( &line) {
            Ok(frame) => frames.push( frame),
            Err(e) => warn!("skipping traffic line {}: {}", i+1, e)
        }
    }
    Ok(frames)
}
