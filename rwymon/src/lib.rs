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

//! detection of runway arrivals and departures from periodic aircraft position reports.
//!
//! Each polling cycle a [`TrafficBatch`] is fed into the [`RunwayOperationsEngine`], which updates
//! per-aircraft [`AircraftTrack`]s, classifies them against the [`RunwayTable`] of the airport
//! and keeps an [`OperationLedger`] of current and recent (history window) operations per runway.

pub mod errors;
pub mod sample;
pub mod runway;
pub mod track;
pub mod classifier;
pub mod ledger;
pub mod config;
pub mod telemetry;
pub mod airport;
pub mod snapshot;
pub mod engine;

pub use errors::{Result, RwyMonError};
pub use sample::PositionSample;
pub use runway::{RunwayGeometry, RunwayTable};
pub use track::AircraftTrack;
pub use classifier::{Classification, ClassifierCriteria, OperationClassifier, OperationKind, RunwayRelation};
pub use ledger::{OperationCounts, OperationLedger, RunwayOps};
pub use config::MonitorConfig;
pub use telemetry::{ReplayFrame, TelemetryRecord, TrafficBatch};
pub use airport::AirportInfo;
pub use snapshot::{RunwaySnapshot, RunwayStatus};
pub use engine::{CycleStats, RunwayOperationsEngine};
