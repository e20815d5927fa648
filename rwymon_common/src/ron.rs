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

/// module with utility functions for RON config files

use std::{fs, path::Path};
use lazy_static::lazy_static;
use ron::ser::PrettyConfig;
use serde::{Serialize, de::DeserializeOwned};
use crate::errors::Result;

lazy_static! {
    static ref CONFIG_RON: PrettyConfig = PrettyConfig::new()
        .struct_names(true)
        .depth_limit(3);
}

/// read and deserialize a RON config file
pub fn load_ron_config<T,P> (path: P)->Result<T> where T: DeserializeOwned, P: AsRef<Path> {
    let s = fs::read_to_string( path.as_ref())?;
    parse_ron_config( &s)
}

pub fn parse_ron_config<T> (s: &str)->Result<T> where T: DeserializeOwned {
    Ok( ron::from_str(s)? )
}

/// pretty print a config value the way we store config files
pub fn to_config_ron<T> (v: &T)->Result<String> where T: Serialize {
    Ok( ron::ser::to_string_pretty( v, CONFIG_RON.clone())? )
}
