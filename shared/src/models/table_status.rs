//! Table status and occupancy class

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a table currently holds a party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OccupancyClass {
    Occupied,
    Unoccupied,
}

/// Service stage of a table (桌台状态)
///
/// ```text
/// READY ─seat→ AWAITING_ORDER → AWAITING_FOOD → SERVED → CHECK_DELIVERED ─vacate→ VACATED ─reset→ READY
/// ```
///
/// `Ready` and `Vacated` belong to the unoccupied class, the other four to the
/// occupied class. The numeric codes 0-5 follow that same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    /// 空闲，可入座
    #[default]
    Ready,
    /// 已入座，待点单
    AwaitingOrder,
    /// 已点单，待上菜
    AwaitingFood,
    /// 已上菜
    Served,
    /// 已送账单
    CheckDelivered,
    /// 已离座，待清台
    Vacated,
}

impl TableStatus {
    /// All statuses in cycle order
    pub const ALL: [TableStatus; 6] = [
        TableStatus::Ready,
        TableStatus::AwaitingOrder,
        TableStatus::AwaitingFood,
        TableStatus::Served,
        TableStatus::CheckDelivered,
        TableStatus::Vacated,
    ];

    /// The occupancy class this status belongs to
    pub const fn occupancy(self) -> OccupancyClass {
        match self {
            TableStatus::Ready | TableStatus::Vacated => OccupancyClass::Unoccupied,
            TableStatus::AwaitingOrder
            | TableStatus::AwaitingFood
            | TableStatus::Served
            | TableStatus::CheckDelivered => OccupancyClass::Occupied,
        }
    }

    #[inline]
    pub const fn is_occupied(self) -> bool {
        matches!(self.occupancy(), OccupancyClass::Occupied)
    }

    /// Whether moving to `other` keeps the table in the same occupancy class
    #[inline]
    pub fn same_class(self, other: TableStatus) -> bool {
        self.occupancy() == other.occupancy()
    }

    /// Numeric status code (0 = ready ... 5 = vacated)
    pub const fn code(self) -> u8 {
        match self {
            TableStatus::Ready => 0,
            TableStatus::AwaitingOrder => 1,
            TableStatus::AwaitingFood => 2,
            TableStatus::Served => 3,
            TableStatus::CheckDelivered => 4,
            TableStatus::Vacated => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Next status in the service cycle, wrapping from `Vacated` to `Ready`
    pub fn next(self) -> Self {
        Self::ALL[(self.code() as usize + 1) % Self::ALL.len()]
    }

    /// Human-readable label used by the host stand display
    pub const fn label(self) -> &'static str {
        match self {
            TableStatus::Ready => "Ready for patrons",
            TableStatus::AwaitingOrder => "Waiting to order",
            TableStatus::AwaitingFood => "Waiting for food",
            TableStatus::Served => "Served",
            TableStatus::CheckDelivered => "Check delivered",
            TableStatus::Vacated => "Table vacated",
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
