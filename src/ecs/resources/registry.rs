use bevy_ecs::resource::Resource;

use crate::model::{AliveTurtles, Turtle};

/// Turtles currently alive, in registration order. Unique by name.
///
/// Append/remove only: a registered turtle is never modified in place.
#[derive(Resource, Debug, Clone, Default)]
pub struct AliveRegistry {
    turtles: Vec<Turtle>,
}

impl AliveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turtle. Refused (returns false) if the name is already taken.
    pub fn register(&mut self, turtle: Turtle) -> bool {
        if self.contains(&turtle.name) {
            return false;
        }
        self.turtles.push(turtle);
        true
    }

    /// Remove the first turtle named `name`, scanning in registration order.
    pub fn remove_first(&mut self, name: &str) -> Option<Turtle> {
        let index = self.turtles.iter().position(|t| t.name == name)?;
        Some(self.turtles.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.turtles.iter().any(|t| t.name == name)
    }

    pub fn turtles(&self) -> &[Turtle] {
        &self.turtles
    }

    pub fn len(&self) -> usize {
        self.turtles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turtles.is_empty()
    }

    /// An owned copy of the current contents.
    pub fn snapshot(&self) -> AliveTurtles {
        AliveTurtles {
            turtles: self.turtles.clone(),
        }
    }
}
