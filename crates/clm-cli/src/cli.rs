// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clm_core::math::Vec3;

use crate::scene::{parse_vec3, ModelStep};

fn vec3_arg(s: &str) -> Result<Vec3, String> {
    parse_vec3(s).map_err(|e| e.to_string())
}

fn step_arg(s: &str) -> Result<ModelStep, String> {
    s.parse().map_err(|e: anyhow::Error| e.to_string())
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Evaluate model, view, and projection matrices")]
pub struct Args {
    /// Command to execute
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a perspective projection matrix
    Perspective {
        /// Vertical field of view in degrees
        #[arg(long, default_value_t = 45.0, allow_negative_numbers = true)]
        fov: f32,
        /// Aspect ratio (width / height)
        #[arg(long, default_value_t = 16.0 / 9.0, allow_negative_numbers = true)]
        aspect: f32,
        /// Near plane distance
        #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
        near: f32,
        /// Far plane distance
        #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
        far: f32,
        /// Skip frustum validation and print whatever the formulas produce
        #[arg(long)]
        unchecked: bool,
    },
    /// Print a look-at view matrix
    LookAt {
        /// Eye position as x,y,z
        #[arg(long, value_parser = vec3_arg, allow_hyphen_values = true)]
        position: Vec3,
        /// Target point as x,y,z
        #[arg(long, value_parser = vec3_arg, allow_hyphen_values = true, default_value = "0,0,0")]
        target: Vec3,
        /// Up hint as x,y,z
        #[arg(long, value_parser = vec3_arg, allow_hyphen_values = true, default_value = "0,1,0")]
        up: Vec3,
        /// Also transform this point (w = 1) and print it
        #[arg(long, value_parser = vec3_arg, allow_hyphen_values = true)]
        point: Option<Vec3>,
    },
    /// Compose model steps onto an identity matrix, in order
    Compose {
        /// translate:x,y,z | rotate:x,y,z:degrees | scale:x,y,z (repeatable)
        #[arg(long = "step", value_parser = step_arg, allow_hyphen_values = true)]
        steps: Vec<ModelStep>,
        /// Also transform this point (w = 1) and print it
        #[arg(long, value_parser = vec3_arg, allow_hyphen_values = true)]
        point: Option<Vec3>,
    },
    /// Load a JSON scene file and print its model, view, projection, and MVP
    Scene {
        /// Path to the scene file
        path: PathBuf,
        /// Also transform this model-space point through the MVP
        #[arg(long, value_parser = vec3_arg, allow_hyphen_values = true)]
        point: Option<Vec3>,
    },
}
