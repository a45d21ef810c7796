use crate::table::ColumnSchema;

/// Columns never shrink below this many px
pub const MIN_COLUMN_WIDTH: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeState {
    Idle,
    Resizing {
        column: usize,
        start_x: i32,
        start_width: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer pressed on the drag handle of `column`
    Down { column: usize, x: i32 },
    Move { x: i32 },
    /// Pointer released anywhere
    Up,
}

/// Drag-to-resize state for the header cells of one table.
///
/// At most one column is being resized at a time. Separate tables own
/// separate resizers, so their drags never interfere.
#[derive(Debug, Clone)]
pub struct ColumnResizer {
    defaults: Vec<u32>,
    widths: Vec<u32>,
    resizable: Vec<bool>,
    state: ResizeState,
}

impl ColumnResizer {
    pub fn new(widths: Vec<u32>) -> Self {
        let resizable = vec![true; widths.len()];
        Self {
            defaults: widths.clone(),
            widths,
            resizable,
            state: ResizeState::Idle,
        }
    }

    pub fn for_schema(schema: &ColumnSchema) -> Self {
        Self {
            defaults: schema.default_widths(),
            widths: schema.default_widths(),
            resizable: schema.columns().iter().map(|c| c.resizable).collect(),
            state: ResizeState::Idle,
        }
    }

    pub fn state(&self) -> ResizeState {
        self.state
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.state, ResizeState::Resizing { .. })
    }

    pub fn active_column(&self) -> Option<usize> {
        match self.state {
            ResizeState::Resizing { column, .. } => Some(column),
            ResizeState::Idle => None,
        }
    }

    pub fn widths(&self) -> &[u32] {
        &self.widths
    }

    pub fn width(&self, column: usize) -> Option<u32> {
        self.widths.get(column).copied()
    }

    /// Start a drag. Returns false when a drag is already active or the
    /// column has no handle.
    pub fn pointer_down(&mut self, column: usize, x: i32) -> bool {
        if self.is_resizing() || !self.resizable.get(column).copied().unwrap_or(false) {
            return false;
        }
        self.state = ResizeState::Resizing {
            column,
            start_x: x,
            start_width: self.widths[column],
        };
        true
    }

    /// Apply the pointer position to the active column. Returns the new width,
    /// or `None` while idle.
    pub fn pointer_move(&mut self, x: i32) -> Option<u32> {
        let ResizeState::Resizing {
            column,
            start_x,
            start_width,
        } = self.state
        else {
            return None;
        };

        let proposed = i64::from(start_width) + (i64::from(x) - i64::from(start_x));
        let width = proposed.clamp(i64::from(MIN_COLUMN_WIDTH), i64::from(u32::MAX)) as u32;
        self.widths[column] = width;
        Some(width)
    }

    /// End the drag. Returns the released column, if one was active.
    pub fn pointer_up(&mut self) -> Option<usize> {
        let released = self.active_column();
        self.state = ResizeState::Idle;
        released
    }

    /// Dispatch a pointer event; returns the new width when one was applied.
    pub fn handle(&mut self, event: PointerEvent) -> Option<u32> {
        match event {
            PointerEvent::Down { column, x } => {
                self.pointer_down(column, x);
                None
            }
            PointerEvent::Move { x } => self.pointer_move(x),
            PointerEvent::Up => {
                self.pointer_up();
                None
            }
        }
    }

    /// Drop all drag results and return to the default widths
    pub fn reset(&mut self) {
        self.widths = self.defaults.clone();
        self.state = ResizeState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::school_columns;
    use proptest::prelude::*;

    #[test]
    fn test_drag_widens_column() {
        let mut resizer = ColumnResizer::new(vec![100, 80]);
        assert!(resizer.pointer_down(0, 500));
        assert_eq!(resizer.pointer_move(530), Some(130));
        assert_eq!(resizer.pointer_move(520), Some(120));
        assert_eq!(resizer.widths(), &[120, 80]);
    }

    #[test]
    fn test_width_is_clamped_to_minimum() {
        let mut resizer = ColumnResizer::new(vec![100]);
        resizer.pointer_down(0, 200);
        assert_eq!(resizer.pointer_move(0), Some(MIN_COLUMN_WIDTH));
        assert_eq!(resizer.width(0), Some(40));
    }

    #[test]
    fn test_release_stops_further_changes() {
        let mut resizer = ColumnResizer::new(vec![100]);
        resizer.pointer_down(0, 10);
        resizer.pointer_move(60);
        assert_eq!(resizer.pointer_up(), Some(0));
        assert_eq!(resizer.pointer_move(500), None);
        assert_eq!(resizer.width(0), Some(150));
        assert_eq!(resizer.state(), ResizeState::Idle);
    }

    #[test]
    fn test_only_one_column_resizes_at_a_time() {
        let mut resizer = ColumnResizer::new(vec![100, 100]);
        assert!(resizer.pointer_down(0, 0));
        assert!(!resizer.pointer_down(1, 0));
        resizer.pointer_move(20);
        assert_eq!(resizer.widths(), &[120, 100]);
    }

    #[test]
    fn test_out_of_bounds_and_fixed_columns_are_ignored() {
        let schema = crate::table::ColumnSchema::new(vec![
            crate::table::ColumnSpec::text("a", "A", 90).fixed(),
        ]);
        let mut resizer = ColumnResizer::for_schema(&schema);
        assert!(!resizer.pointer_down(0, 0));
        assert!(!resizer.pointer_down(7, 0));
        assert!(!resizer.is_resizing());
    }

    #[test]
    fn test_tables_have_independent_state() {
        let mut left = ColumnResizer::for_schema(&school_columns());
        let mut right = ColumnResizer::for_schema(&school_columns());

        left.handle(PointerEvent::Down { column: 0, x: 0 });
        right.handle(PointerEvent::Down { column: 2, x: 100 });
        assert_eq!(left.handle(PointerEvent::Move { x: 20 }), Some(200));
        assert_eq!(right.handle(PointerEvent::Move { x: 90 }), Some(70));

        left.handle(PointerEvent::Up);
        assert!(!left.is_resizing());
        assert!(right.is_resizing());
        assert_eq!(right.handle(PointerEvent::Move { x: 110 }), Some(90));
    }

    #[test]
    fn test_reset_restores_schema_defaults() {
        let mut resizer = ColumnResizer::for_schema(&school_columns());
        resizer.pointer_down(0, 0);
        resizer.pointer_move(300);
        resizer.reset();
        assert_eq!(resizer.widths(), school_columns().default_widths().as_slice());
        assert!(!resizer.is_resizing());
    }

    proptest! {
        #[test]
        fn prop_width_is_max_of_minimum_and_drag(start in 0u32..2_000, x0 in -5_000i32..5_000, dx in -3_000i32..3_000) {
            let mut resizer = ColumnResizer::new(vec![start]);
            resizer.pointer_down(0, x0);
            let width = resizer.pointer_move(x0 + dx).unwrap();
            let expected = (i64::from(start) + i64::from(dx)).max(i64::from(MIN_COLUMN_WIDTH));
            prop_assert_eq!(i64::from(width), expected);

            resizer.pointer_up();
            prop_assert_eq!(resizer.pointer_move(x0 + dx + 77), None);
            prop_assert_eq!(resizer.width(0), Some(width));
        }
    }
}
