use serde::{Deserialize, Serialize};

/// A live turtle as tracked by the spawner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Turtle {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub theta: f64,
}

/// Snapshot of every live turtle, in the order they were registered.
///
/// This is the payload of the alive-turtles feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AliveTurtles {
    pub turtles: Vec<Turtle>,
}

impl AliveTurtles {
    pub fn names(&self) -> Vec<&str> {
        self.turtles.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.turtles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turtles.is_empty()
    }
}
