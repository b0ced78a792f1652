//! Multi-level inheritance: `Animal` -> `Mammal` -> `Dog`, each level adding
//! one behavior on top of everything above it.

use std::io::{self, Write};

use crate::graph::{InheritanceStyle, TypeDecl, TypeGraph};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Animal;

impl Animal {
    pub fn eat(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "I can eat.")
    }

    pub fn sleep(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "I can sleep.")
    }
}

/// Types that embed an [`Animal`].
pub trait AnimalBehavior {
    fn animal(&self) -> &Animal;

    fn eat(&self, out: &mut dyn Write) -> io::Result<()> {
        self.animal().eat(out)
    }

    fn sleep(&self, out: &mut dyn Write) -> io::Result<()> {
        self.animal().sleep(out)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Mammal {
    animal: Animal,
}

impl Mammal {
    pub fn walk(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "I can walk.")
    }
}

impl AnimalBehavior for Mammal {
    fn animal(&self) -> &Animal {
        &self.animal
    }
}

/// Types that embed a [`Mammal`], and through it an [`Animal`].
pub trait MammalBehavior: AnimalBehavior {
    fn mammal(&self) -> &Mammal;

    fn walk(&self, out: &mut dyn Write) -> io::Result<()> {
        self.mammal().walk(out)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dog {
    mammal: Mammal,
}

impl Dog {
    pub fn bark(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "I can bark.")
    }
}

impl AnimalBehavior for Dog {
    fn animal(&self) -> &Animal {
        self.mammal.animal()
    }
}

impl MammalBehavior for Dog {
    fn mammal(&self) -> &Mammal {
        &self.mammal
    }
}

/// Entry routine: one `Dog`, behaviors invoked root-most first.
pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let dog = Dog::default();
    dog.eat(out)?;
    dog.sleep(out)?;
    dog.walk(out)?;
    dog.bark(out)
}

/// Declared shape of this demo.
pub fn graph() -> TypeGraph {
    TypeGraph::new(
        "multi-level-inheritance",
        InheritanceStyle::MultiLevel,
        vec![
            TypeDecl::new("Animal").behavior("eat").behavior("sleep"),
            TypeDecl::new("Mammal").base("Animal").behavior("walk"),
            TypeDecl::new("Dog").base("Mammal").behavior("bark"),
        ],
    )
}
