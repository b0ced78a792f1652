//! Multiple inheritance: `SmartCar` embeds both a `Vehicle` and a `Device`.
//!
//! The two bases expose disjoint behavior names, so `SmartCar` picks up both
//! capability traits without any name resolution.

use std::io::{self, Write};

use crate::graph::{InheritanceStyle, TypeDecl, TypeGraph};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Vehicle;

impl Vehicle {
    pub fn show_type(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "This is a vehicle.")
    }
}

pub trait VehicleBehavior {
    fn vehicle(&self) -> &Vehicle;

    fn show_type(&self, out: &mut dyn Write) -> io::Result<()> {
        self.vehicle().show_type(out)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Device;

impl Device {
    pub fn show_name(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "This is a device.")
    }
}

pub trait DeviceBehavior {
    fn device(&self) -> &Device;

    fn show_name(&self, out: &mut dyn Write) -> io::Result<()> {
        self.device().show_name(out)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SmartCar {
    vehicle: Vehicle,
    device: Device,
}

impl SmartCar {
    /// Inherited `show_type`, inherited `show_name`, then its own line.
    pub fn show_details(&self, out: &mut dyn Write) -> io::Result<()> {
        self.show_type(out)?;
        self.show_name(out)?;
        writeln!(out, "This is a smart car.")
    }
}

impl VehicleBehavior for SmartCar {
    fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }
}

impl DeviceBehavior for SmartCar {
    fn device(&self) -> &Device {
        &self.device
    }
}

/// Entry routine: one `SmartCar`, only the combined behavior invoked.
pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let car = SmartCar::default();
    car.show_details(out)
}

/// Declared shape of this demo.
pub fn graph() -> TypeGraph {
    TypeGraph::new(
        "multiple-inheritance",
        InheritanceStyle::Multiple,
        vec![
            TypeDecl::new("Vehicle").behavior("showType"),
            TypeDecl::new("Device").behavior("showName"),
            TypeDecl::new("SmartCar")
                .base("Vehicle")
                .base("Device")
                .behavior("showDetails"),
        ],
    )
}
