//! Catalogue of the four demos and dispatch to their entry routines.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::{debug, info};

use crate::graph::{InheritanceStyle, TypeGraph};
use crate::{hierarchical, multi_level, multiple, single};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    Hierarchical,
    MultiLevel,
    Multiple,
    Single,
}

impl Demo {
    pub const ALL: [Demo; 4] = [
        Demo::Hierarchical,
        Demo::MultiLevel,
        Demo::Multiple,
        Demo::Single,
    ];

    /// Name accepted on the `lineage` command line.
    pub fn name(self) -> &'static str {
        match self {
            Demo::Hierarchical => "hierarchical",
            Demo::MultiLevel => "multi-level",
            Demo::Multiple => "multiple",
            Demo::Single => "single",
        }
    }

    /// Standalone executable for this demo.
    pub fn binary(self) -> &'static str {
        match self {
            Demo::Hierarchical => "hierarchical-inheritance",
            Demo::MultiLevel => "multi-level-inheritance",
            Demo::Multiple => "multiple-inheritance",
            Demo::Single => "single-inheritance",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Demo::Hierarchical => "Animal with Dog and Cat below it, WhiteCat and BlackCat below Cat",
            Demo::MultiLevel => "Animal -> Mammal -> Dog chain, one behavior added per level",
            Demo::Multiple => "SmartCar combining unrelated Vehicle and Device bases",
            Demo::Single => "Car deriving from Vehicle, each carrying one text field",
        }
    }

    pub fn style(self) -> InheritanceStyle {
        match self {
            Demo::Hierarchical => InheritanceStyle::Hierarchical,
            Demo::MultiLevel => InheritanceStyle::MultiLevel,
            Demo::Multiple => InheritanceStyle::Multiple,
            Demo::Single => InheritanceStyle::Single,
        }
    }

    /// Write the demo's fixed output to `out`.
    pub fn run(self, out: &mut dyn Write) -> io::Result<()> {
        debug!(demo = self.name(), "running demo");
        match self {
            Demo::Hierarchical => hierarchical::run(out),
            Demo::MultiLevel => multi_level::run(out),
            Demo::Multiple => multiple::run(out),
            Demo::Single => single::run(out),
        }
    }

    /// Run against locked stdout and flush.
    pub fn run_stdout(self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run(&mut out)
            .and_then(|()| out.flush())
            .with_context(|| format!("write {} output", self.name()))?;
        info!(demo = self.name(), "demo complete");
        Ok(())
    }

    pub fn graph(self) -> TypeGraph {
        match self {
            Demo::Hierarchical => hierarchical::graph(),
            Demo::MultiLevel => multi_level::graph(),
            Demo::Multiple => multiple::graph(),
            Demo::Single => single::graph(),
        }
    }
}
