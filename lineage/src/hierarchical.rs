//! Hierarchical inheritance.
//!
//! ```text
//! Animal
//! ├── Dog
//! └── Cat
//!     ├── WhiteCat
//!     └── BlackCat
//! ```
//!
//! `WhiteCat::colour` and `BlackCat::colour` share a name but nothing else:
//! `Cat` declares no `colour`, so each is an inherent method of its own type.

use std::io::{self, Write};

use tracing::debug;

use crate::graph::{InheritanceStyle, TypeDecl, TypeGraph};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Animal;

impl Animal {
    pub fn eat(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "This animal eats food.")
    }
}

/// Types that embed an [`Animal`] and forward its behaviors.
pub trait AnimalBehavior {
    fn animal(&self) -> &Animal;

    fn eat(&self, out: &mut dyn Write) -> io::Result<()> {
        self.animal().eat(out)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dog {
    animal: Animal,
}

impl Dog {
    pub fn bark(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "The dog barks.")
    }
}

impl AnimalBehavior for Dog {
    fn animal(&self) -> &Animal {
        &self.animal
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cat {
    animal: Animal,
}

impl Cat {
    pub fn meow(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "The cat meows.")
    }
}

impl AnimalBehavior for Cat {
    fn animal(&self) -> &Animal {
        &self.animal
    }
}

/// Types that embed a [`Cat`]; everything `Cat` inherits comes along.
pub trait CatBehavior: AnimalBehavior {
    fn cat(&self) -> &Cat;

    fn meow(&self, out: &mut dyn Write) -> io::Result<()> {
        self.cat().meow(out)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WhiteCat {
    cat: Cat,
}

impl WhiteCat {
    pub fn colour(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "The white cat is white.")
    }
}

impl AnimalBehavior for WhiteCat {
    fn animal(&self) -> &Animal {
        self.cat.animal()
    }
}

impl CatBehavior for WhiteCat {
    fn cat(&self) -> &Cat {
        &self.cat
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlackCat {
    cat: Cat,
}

impl BlackCat {
    pub fn colour(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "The black cat is black.")
    }
}

impl AnimalBehavior for BlackCat {
    fn animal(&self) -> &Animal {
        self.cat.animal()
    }
}

impl CatBehavior for BlackCat {
    fn cat(&self) -> &Cat {
        &self.cat
    }
}

/// Entry routine: one value per non-root type, every available behavior
/// invoked inherited-first, one labeled section per value.
pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let dog = Dog::default();
    let cat = Cat::default();
    let white_cat = WhiteCat::default();
    let black_cat = BlackCat::default();

    debug!(instance = "Dog", "invoking behaviors");
    writeln!(out, "Dog actions:")?;
    dog.eat(out)?;
    dog.bark(out)?;

    debug!(instance = "Cat", "invoking behaviors");
    writeln!(out)?;
    writeln!(out, "Cat actions:")?;
    cat.eat(out)?;
    cat.meow(out)?;

    debug!(instance = "WhiteCat", "invoking behaviors");
    writeln!(out)?;
    writeln!(out, "White Cat actions:")?;
    white_cat.eat(out)?;
    white_cat.meow(out)?;
    white_cat.colour(out)?;

    debug!(instance = "BlackCat", "invoking behaviors");
    writeln!(out)?;
    writeln!(out, "Black Cat actions:")?;
    black_cat.eat(out)?;
    black_cat.meow(out)?;
    black_cat.colour(out)?;

    Ok(())
}

/// Declared shape of this demo.
pub fn graph() -> TypeGraph {
    TypeGraph::new(
        "hierarchical-inheritance",
        InheritanceStyle::Hierarchical,
        vec![
            TypeDecl::new("Animal").behavior("eat"),
            TypeDecl::new("Dog").base("Animal").behavior("bark"),
            TypeDecl::new("Cat").base("Animal").behavior("meow"),
            TypeDecl::new("WhiteCat").base("Cat").behavior("colour"),
            TypeDecl::new("BlackCat").base("Cat").behavior("colour"),
        ],
    )
}
