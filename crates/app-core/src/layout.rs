//! Stack Packer: turns a dollar amount into a grid of bill stacks.
//!
//! The grid aims for a roughly cubic pile: column/row counts derive from the
//! cube root of the total stack volume and the bill's aspect ratio, capped at
//! fixed maxima. Tall amounts are absorbed by stacking multiple 100-bill
//! layers per grid cell instead of growing the footprint without bound.

use crate::constants::*;
use fnv::FnvHashMap;

/// One placed pile: footprint center on the ground plane and the number of
/// bills it holds. A descriptor aggregates every vertical layer at its cell,
/// so `bill_count` may exceed 100.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackDescriptor {
    pub position_x: f32,
    pub position_z: f32,
    pub bill_count: u32,
}

/// Output of the packer: the placed stacks plus the grid shape they occupy.
#[derive(Clone, Debug, Default)]
pub struct StackLayout {
    pub stacks: Vec<StackDescriptor>,
    pub grid_cols: u32,
    pub grid_rows: u32,
    pub amount: u64,
}

impl StackLayout {
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Total bills across all stacks; equals `amount / 100` by construction.
    pub fn bill_count(&self) -> u64 {
        self.stacks.iter().map(|s| s.bill_count as u64).sum()
    }
}

/// Clamp and round a raw dollar figure to something the packer accepts:
/// non-finite and negative inputs become 0, everything else is rounded to the
/// nearest $100 and capped at [`MAX_AMOUNT`].
pub fn normalize_amount(raw: f64) -> u64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    let rounded = (raw / BILL_VALUE as f64).round() * BILL_VALUE as f64;
    if rounded <= 0.0 {
        return 0;
    }
    (rounded as u64).min(MAX_AMOUNT)
}

/// Column/row counts for a stack count, shaped by the bill aspect ratio and
/// clamped to the grid maxima.
fn grid_for(stack_count: u64, target_ratio: f32) -> (u32, u32) {
    let cols = ((stack_count as f32 / target_ratio).sqrt().ceil() as u64)
        .clamp(1, MAX_GRID_COLS as u64) as u32;
    let rows = (stack_count.div_ceil(cols as u64)).min(MAX_GRID_ROWS as u64) as u32;
    (cols, rows)
}

/// Plan the stack grid for a normalized amount.
///
/// Every cell first receives the bills of all complete layers, then the
/// remainder is dealt out row-major, at most 100 bills per cell, until
/// exhausted. Amounts below $100 produce an empty layout.
pub fn plan_stacks(amount: u64) -> StackLayout {
    let bills = amount / BILL_VALUE;
    if bills == 0 {
        return StackLayout {
            amount,
            ..StackLayout::default()
        };
    }

    let stack_count = bills.div_ceil(BILLS_PER_STACK as u64);
    let stack_h = stack_height();

    // Footprint target: a box whose width comes from the cube root of the
    // total stack volume, widened a little so piles read as piles rather
    // than towers.
    let total_volume = stack_count as f32 * BILL_WIDTH * BILL_DEPTH * stack_h;
    let target_width = (total_volume * FOOTPRINT_VOLUME_SCALE).cbrt();
    let target_ratio = (BILL_WIDTH / BILL_DEPTH).sqrt();

    let (mut cols, mut rows) = grid_for(stack_count, target_ratio);

    // If a single layer would rise past the target height, spread the stacks
    // over several vertical layers and re-shrink the footprint accordingly.
    let target_height = target_width * TARGET_HEIGHT_RATIO;
    let layers = (target_height / stack_h).ceil().max(1.0) as u64;
    if layers > 1 {
        let per_layer = stack_count.div_ceil(layers);
        (cols, rows) = grid_for(per_layer, target_ratio);
    }

    let cell_count = cols as u64 * rows as u64;
    let bills_per_complete_layer = cell_count * BILLS_PER_STACK as u64;
    let complete_layers = bills / bills_per_complete_layer;
    let mut remaining = bills - complete_layers * bills_per_complete_layer;
    let base_bills = complete_layers * BILLS_PER_STACK as u64;

    let mut cells: FnvHashMap<(u32, u32), u64> =
        FnvHashMap::with_capacity_and_hasher(cell_count as usize, Default::default());
    for row in 0..rows {
        for col in 0..cols {
            cells.insert((row, col), base_bills);
        }
    }

    // Partial layer: deal the remainder out row-major, 100 bills per cell.
    'partial: for row in 0..rows {
        for col in 0..cols {
            if remaining == 0 {
                break 'partial;
            }
            let take = remaining.min(BILLS_PER_STACK as u64);
            remaining -= take;
            if let Some(count) = cells.get_mut(&(row, col)) {
                *count += take;
            }
        }
    }

    let spacing_x = BILL_WIDTH * STACK_SPACING;
    let spacing_z = BILL_DEPTH * STACK_SPACING;

    let mut stacks = Vec::with_capacity(cell_count as usize);
    for row in 0..rows {
        for col in 0..cols {
            let count = cells[&(row, col)];
            if count == 0 {
                continue;
            }
            stacks.push(StackDescriptor {
                position_x: (col as f32 - (cols - 1) as f32 / 2.0) * spacing_x,
                position_z: (row as f32 - (rows - 1) as f32 / 2.0) * spacing_z,
                bill_count: count as u32,
            });
        }
    }

    StackLayout {
        stacks,
        grid_cols: cols,
        grid_rows: rows,
        amount,
    }
}
