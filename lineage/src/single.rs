//! Single inheritance: `Car` embeds a `Vehicle` and adds a field and a
//! behavior of its own.

use std::io::{self, Write};

use crate::graph::{InheritanceStyle, TypeDecl, TypeGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vehicle {
    pub brand: &'static str,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self { brand: "Ford" }
    }
}

impl Vehicle {
    pub fn color(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Color: Red")
    }
}

/// Types that embed a [`Vehicle`]: its field and behavior come along.
pub trait VehicleBehavior {
    fn vehicle(&self) -> &Vehicle;

    fn brand(&self) -> &'static str {
        self.vehicle().brand
    }

    fn color(&self, out: &mut dyn Write) -> io::Result<()> {
        self.vehicle().color(out)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Car {
    vehicle: Vehicle,
    pub model: &'static str,
}

impl Default for Car {
    fn default() -> Self {
        Self {
            vehicle: Vehicle::default(),
            model: "Mustang",
        }
    }
}

impl Car {
    pub fn speed(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Max speed is 200km/h")
    }
}

impl VehicleBehavior for Car {
    fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }
}

/// Entry routine: inherited behavior, both fields, then the derived behavior.
pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let car = Car::default();
    car.color(out)?;
    writeln!(out, "Brand: {}", car.brand())?;
    writeln!(out, "Model: {}", car.model)?;
    car.speed(out)
}

/// Declared shape of this demo.
pub fn graph() -> TypeGraph {
    TypeGraph::new(
        "single-inheritance",
        InheritanceStyle::Single,
        vec![
            TypeDecl::new("Vehicle")
                .field("brand", "Ford")
                .behavior("color"),
            TypeDecl::new("Car")
                .base("Vehicle")
                .field("model", "Mustang")
                .behavior("speed"),
        ],
    )
}
