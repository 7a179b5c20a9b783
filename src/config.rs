use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Shortest ship `Ship::new` accepts.
pub const MIN_SHIP_LENGTH: usize = 2;
/// Longest ship `Ship::new` accepts.
pub const MAX_SHIP_LENGTH: usize = 5;

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random draws allowed per ship before fleet deployment gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Lengths of the standard fleet, in placement order.
pub fn fleet_lengths() -> [usize; NUM_SHIPS] {
    core::array::from_fn(|i| SHIPS[i].length())
}

/// Display name of the ship at `index` in the standard fleet.
pub fn ship_name(index: usize) -> Option<&'static str> {
    SHIPS.get(index).map(|def| def.name())
}
