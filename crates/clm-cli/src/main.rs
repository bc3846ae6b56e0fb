// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! clm CLI entrypoint.
//!
//! Evaluates the transforms a renderer would upload and prints them in the
//! row-by-row debug format of `clm-core`.
//!
//! # Usage
//! ```text
//! clm perspective --fov 60 --aspect 1.5 --near 0.1 --far 100
//! clm look-at --position 0,0,5 --point 0,0,0
//! clm compose --step translate:1,0,0 --step rotate:0,0,1:90 --point 1,0,0
//! clm scene scenes/orbit.json --point 0,0,0
//! ```
//!
//! Results go to stdout, logs to stderr (`RUST_LOG` overrides the default
//! `info` filter). Exits non-zero on invalid input.

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;
mod scene;

use anyhow::Result;
use clap::Parser;
use clm_core::math::{self, Mat4, Vec3, Vec4};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};
use crate::scene::SceneConfig;

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    run(args.cmd)
}

fn run(cmd: Command) -> Result<()> {
    match cmd {
        Command::Perspective {
            fov,
            aspect,
            near,
            far,
            unchecked,
        } => {
            let radians = math::deg_to_rad(fov);
            let proj = if unchecked {
                math::perspective(radians, aspect, near, far)
            } else {
                math::try_perspective(radians, aspect, near, far)?
            };
            info!(fov, aspect, near, far, unchecked, "built perspective projection");
            print!("{proj}");
        }
        Command::LookAt {
            position,
            target,
            up,
            point,
        } => {
            let view = math::look_at(position, target, up);
            info!(%position, %target, %up, "built look-at view");
            print!("{view}");
            print_point(&view, point);
        }
        Command::Compose { steps, point } => {
            let model = scene::compose(&steps)?;
            info!(steps = steps.len(), "composed model transform");
            print!("{model}");
            print_point(&model, point);
        }
        Command::Scene { path, point } => {
            let scene = SceneConfig::load(&path)?;
            let m = scene.evaluate()?;
            for (label, matrix) in [
                ("model", m.model),
                ("view", m.view),
                ("projection", m.projection),
                ("mvp", m.mvp),
            ] {
                println!("{label}:");
                print!("{matrix}");
            }
            print_point(&m.mvp, point);
        }
    }
    Ok(())
}

fn print_point(matrix: &Mat4, point: Option<Vec3>) {
    if let Some(p) = point {
        let mut v = Vec4::from_point(p);
        matrix.multiply_vector(&mut v);
        println!("{p} -> {v}");
    }
}
