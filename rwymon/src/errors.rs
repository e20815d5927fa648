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

use thiserror::Error;
use rwymon_common::errors::RwyMonCommonError;

pub type Result<T> = std::result::Result<T,RwyMonError>;

#[derive(Error,Debug)]
pub enum RwyMonError {

    #[error("invalid runway geometry {0}")]
    InvalidRunwayError(String),

    #[error("parse error {0}")]
    ParseError(String),

    #[error("service returned status {0}: {1}")]
    ApiStatusError(i64,String),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("config error {0}")]
    ConfigError( #[from] RwyMonCommonError),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),
}

macro_rules! parse_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        RwyMonError::ParseError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use parse_error;

macro_rules! invalid_runway {
    ($fmt:literal $(, $arg:expr )* ) => {
        RwyMonError::InvalidRunwayError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use invalid_runway;
