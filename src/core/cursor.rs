//=========================================================================
// Cursor Map
//=========================================================================
//
// Static mapping from renderer cursor-shape IDs to host cursor shapes.
//
// IDs outside the table (custom cursors, future shapes) fall back to the
// arrow cursor.
//
//=========================================================================

//=== CursorShape =========================================================

/// Cursor-shape identifier as reported by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorShape(pub i32);

impl CursorShape {
    pub const DEFAULT: Self = Self(0);
    pub const ARROW: Self = Self(1);
    pub const SIZE_NE: Self = Self(2);
    pub const SIZE_NW: Self = Self(3);
    pub const SIZE_SW: Self = Self(4);
    pub const SIZE_SE: Self = Self(5);
    pub const SIZE_NS: Self = Self(6);
    pub const SIZE_WE: Self = Self(7);
    pub const SIZE_ALL: Self = Self(8);
    pub const HAND: Self = Self(9);
    pub const CROSSHAIR: Self = Self(10);
}

//=== HostCursor ==========================================================

/// Cursor shapes the host toolkit is asked to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostCursor {
    Arrow,
    /// Diagonal resize, bottom-left to top-right.
    SizeBDiag,
    /// Diagonal resize, top-left to bottom-right.
    SizeFDiag,
    SizeVer,
    SizeHor,
    SizeAll,
    PointingHand,
    Cross,
    /// No visible cursor.
    Blank,
}

//=== Table ===============================================================

/// Host cursor for each renderer cursor ID, indexed by ID.
pub const CURSOR_MAP: [HostCursor; 11] = [
    HostCursor::Arrow,        // DEFAULT
    HostCursor::Arrow,        // ARROW
    HostCursor::SizeBDiag,    // SIZE_NE
    HostCursor::SizeFDiag,    // SIZE_NW
    HostCursor::SizeBDiag,    // SIZE_SW
    HostCursor::SizeFDiag,    // SIZE_SE
    HostCursor::SizeVer,      // SIZE_NS
    HostCursor::SizeHor,      // SIZE_WE
    HostCursor::SizeAll,      // SIZE_ALL
    HostCursor::PointingHand, // HAND
    HostCursor::Cross,        // CROSSHAIR
];

/// Maps a renderer cursor to the host cursor, defaulting to the arrow.
pub fn host_cursor_for(shape: CursorShape) -> HostCursor {
    usize::try_from(shape.0)
        .ok()
        .and_then(|index| CURSOR_MAP.get(index).copied())
        .unwrap_or(HostCursor::Arrow)
}

//=========================================================================
// Unit Tests
//=========================================================================
