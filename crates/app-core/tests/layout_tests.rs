// Integration tests for amount normalization and the stack packer.

use app_core::constants::{BILLS_PER_STACK, BILL_VALUE, MAX_AMOUNT, MAX_GRID_COLS, MAX_GRID_ROWS};
use app_core::layout::{normalize_amount, plan_stacks};

#[test]
fn normalize_rounds_to_nearest_hundred() {
    assert_eq!(normalize_amount(0.0), 0);
    assert_eq!(normalize_amount(49.0), 0);
    assert_eq!(normalize_amount(50.0), 100);
    assert_eq!(normalize_amount(99.0), 100);
    assert_eq!(normalize_amount(100.0), 100);
    assert_eq!(normalize_amount(149.0), 100);
    assert_eq!(normalize_amount(150.0), 200);
    assert_eq!(normalize_amount(1_234_549.0), 1_234_500);
}

#[test]
fn normalize_rejects_garbage() {
    assert_eq!(normalize_amount(-5.0), 0);
    assert_eq!(normalize_amount(-1e12), 0);
    assert_eq!(normalize_amount(f64::NAN), 0);
    assert_eq!(normalize_amount(f64::INFINITY), 0);
    assert_eq!(normalize_amount(f64::NEG_INFINITY), 0);
}

#[test]
fn normalize_clamps_to_cap() {
    // A trillion dollars is capped at half a trillion
    assert_eq!(normalize_amount(1_000_000_000_000.0), MAX_AMOUNT);
    assert_eq!(normalize_amount(MAX_AMOUNT as f64), MAX_AMOUNT);
    assert_eq!(normalize_amount(1e30), MAX_AMOUNT);
}

#[test]
fn zero_amount_is_a_noop() {
    let layout = plan_stacks(0);
    assert!(layout.is_empty());
    assert_eq!(layout.bill_count(), 0);
    assert_eq!(layout.grid_cols, 0);
    assert_eq!(layout.grid_rows, 0);
}

#[test]
fn bill_totals_match_amount() {
    for amount in [
        100u64,
        500,
        10_000,
        999_900,
        1_000_000,
        123_456_700,
        5_000_000_000,
        MAX_AMOUNT,
    ] {
        let layout = plan_stacks(amount);
        assert_eq!(
            layout.bill_count(),
            amount / BILL_VALUE,
            "total bills wrong for amount {amount}"
        );
    }
}

#[test]
fn grid_dimensions_stay_capped() {
    for amount in [100u64, 1_000_000, 1_000_000_000, MAX_AMOUNT] {
        let layout = plan_stacks(amount);
        assert!(
            layout.grid_cols <= MAX_GRID_COLS,
            "cols {} exceed cap for amount {amount}",
            layout.grid_cols
        );
        assert!(
            layout.grid_rows <= MAX_GRID_ROWS,
            "rows {} exceed cap for amount {amount}",
            layout.grid_rows
        );
    }
    // The largest renderable amount uses the full grid
    let layout = plan_stacks(MAX_AMOUNT);
    assert_eq!(layout.grid_cols, MAX_GRID_COLS);
    assert_eq!(layout.grid_rows, MAX_GRID_ROWS);
}

#[test]
fn single_stack_sits_at_origin() {
    // $10,000 is exactly one 100-bill stack
    let layout = plan_stacks(10_000);
    assert_eq!(layout.stacks.len(), 1);
    let stack = layout.stacks[0];
    assert_eq!(stack.bill_count, BILLS_PER_STACK);
    assert_eq!(stack.position_x, 0.0);
    assert_eq!(stack.position_z, 0.0);
}

#[test]
fn stack_count_matches_for_partial_only_layouts() {
    // Below one complete layer, the number of placed stacks is ceil(bills/100)
    for amount in [100u64, 300, 10_000, 25_000, 99_900] {
        let layout = plan_stacks(amount);
        let bills = amount / BILL_VALUE;
        let cells = layout.grid_cols as u64 * layout.grid_rows as u64;
        if bills < cells * BILLS_PER_STACK as u64 {
            let expected = bills.div_ceil(BILLS_PER_STACK as u64);
            assert_eq!(
                layout.stacks.len() as u64,
                expected.min(cells),
                "stack count wrong for amount {amount}"
            );
        }
    }
}

#[test]
fn remainder_distributes_front_to_back() {
    // Cells are emitted row-major; the remainder tops up the earliest cells,
    // so bill counts never increase along the emission order.
    for amount in [12_300u64, 1_234_500, 98_765_400, 1_000_000_100] {
        let layout = plan_stacks(amount);
        let counts: Vec<u32> = layout.stacks.iter().map(|s| s.bill_count).collect();
        for pair in counts.windows(2) {
            assert!(
                pair[0] >= pair[1],
                "bill counts increase along emission order for amount {amount}: {pair:?}"
            );
        }
        // The spread between the fullest and emptiest stack is at most one
        // partial layer.
        let max = counts.iter().max().unwrap();
        let min = counts.iter().min().unwrap();
        assert!(max - min <= BILLS_PER_STACK);
    }
}

#[test]
fn full_grids_are_centered() {
    let layout = plan_stacks(MAX_AMOUNT);
    assert_eq!(
        layout.stacks.len(),
        (layout.grid_cols * layout.grid_rows) as usize
    );
    let n = layout.stacks.len() as f32;
    let mean_x: f32 = layout.stacks.iter().map(|s| s.position_x).sum::<f32>() / n;
    let mean_z: f32 = layout.stacks.iter().map(|s| s.position_z).sum::<f32>() / n;
    assert!(mean_x.abs() < 0.05, "grid not centered in x: {mean_x}");
    assert!(mean_z.abs() < 0.05, "grid not centered in z: {mean_z}");
}
