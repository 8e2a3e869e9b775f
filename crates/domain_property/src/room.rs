//! Rooms and their furniture inventory

use serde::{Deserialize, Serialize};

use core_kernel::{FurnitureId, PropertyId, RoomId};

/// Kind of room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    Bedroom,
    Kitchen,
    Bathroom,
    LivingRoom,
    Other,
}

/// A furniture item in a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Furniture {
    pub id: FurnitureId,
    pub name: String,
    pub quantity: u32,
}

/// A room of a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub property_id: PropertyId,
    pub name: String,
    pub kind: RoomKind,
    pub furniture: Vec<Furniture>,
}

impl Room {
    /// Creates an empty room
    pub fn new(property_id: PropertyId, name: impl Into<String>, kind: RoomKind) -> Self {
        Self {
            id: RoomId::new_v7(),
            property_id,
            name: name.into(),
            kind,
            furniture: Vec::new(),
        }
    }

    /// Adds a furniture item and returns its id
    pub fn add_furniture(&mut self, name: impl Into<String>, quantity: u32) -> FurnitureId {
        let item = Furniture {
            id: FurnitureId::new_v7(),
            name: name.into(),
            quantity,
        };
        let id = item.id;
        self.furniture.push(item);
        id
    }

    /// Total number of furniture pieces
    pub fn furniture_count(&self) -> u32 {
        self.furniture.iter().map(|f| f.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_furniture_count_sums_quantities() {
        let mut room = Room::new(PropertyId::new_v7(), "Bedroom", RoomKind::Bedroom);
        room.add_furniture("Chair", 2);
        room.add_furniture("Bed", 1);

        assert_eq!(room.furniture_count(), 3);
    }

    #[test]
    fn test_room_kind_wire_name() {
        assert_eq!(serde_json::to_string(&RoomKind::LivingRoom).unwrap(), "\"living_room\"");
    }
}
