//! Scene state shared by the web and native frontends.
//!
//! Holds the current amount and comparison selection, and recomputes the full
//! scene (box instances, combined bounds, camera fit, info line) on every
//! change. There is no incremental update; a change re-runs everything.

use crate::bounds::{union_opt, Aabb};
use crate::catalog::{self, CatalogError, ComparisonObject};
use crate::constants::*;
use crate::framer::{frame_scene, CameraFit};
use crate::layout::{normalize_amount, plan_stacks, StackLayout};
use glam::Vec3;

/// How a box's surfaces are drawn by the renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceKind {
    /// Flat instance color on every face (ground, comparison placeholder).
    Flat,
    /// Bill face on top, edge texture on the sides.
    BillTextured,
    /// Bill face on top, plain paper color on the sides.
    BillPlainSides,
}

impl SurfaceKind {
    /// Encoding used in per-instance vertex data.
    #[inline]
    pub fn as_f32(self) -> f32 {
        match self {
            SurfaceKind::Flat => 0.0,
            SurfaceKind::BillTextured => 1.0,
            SurfaceKind::BillPlainSides => 2.0,
        }
    }
}

/// One box-shaped renderable handed to the render layer.
#[derive(Clone, Copy, Debug)]
pub struct BoxInstance {
    pub center: Vec3,
    pub size: Vec3,
    pub color: [f32; 4],
    pub surface: SurfaceKind,
}

#[derive(Clone, Debug, Default)]
pub struct SceneState {
    pub amount: u64,
    pub layout: StackLayout,
    pub comparison: Option<&'static ComparisonObject>,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw amount string (select value or CLI argument); malformed
    /// input counts as zero.
    pub fn set_amount_input(&mut self, raw: &str) {
        let parsed = raw.trim().parse::<f64>().unwrap_or(0.0);
        self.set_amount(normalize_amount(parsed));
    }

    pub fn set_amount(&mut self, amount: u64) {
        let t0 = instant::Instant::now();
        self.amount = amount;
        self.layout = plan_stacks(amount);
        log::debug!(
            "planned {} stacks ({}x{}) in {:?}",
            self.layout.stacks.len(),
            self.layout.grid_cols,
            self.layout.grid_rows,
            t0.elapsed()
        );
    }

    /// Resolve a comparison id against the catalog. `"none"` or an empty id
    /// clears the selection; an unknown id clears it and reports the error so
    /// callers can log and degrade.
    pub fn select_comparison(&mut self, id: &str) -> Result<(), CatalogError> {
        if id.is_empty() || id == "none" {
            self.comparison = None;
            return Ok(());
        }
        match catalog::find(id) {
            Ok(object) => {
                self.comparison = Some(object);
                Ok(())
            }
            Err(e) => {
                self.comparison = None;
                Err(e)
            }
        }
    }

    fn surface_kind(&self) -> SurfaceKind {
        if self.amount < EDGE_TEXTURE_MAX_AMOUNT {
            SurfaceKind::BillTextured
        } else {
            SurfaceKind::BillPlainSides
        }
    }

    /// Bounding box of the stacks alone, bottoms resting on y = 0.
    pub fn stack_bounds(&self) -> Option<Aabb> {
        let mut bounds: Option<Aabb> = None;
        for stack in &self.layout.stacks {
            let height = stack.bill_count as f32 * BILL_THICKNESS;
            let bb = Aabb::new(
                Vec3::new(
                    stack.position_x - BILL_WIDTH / 2.0,
                    0.0,
                    stack.position_z - BILL_DEPTH / 2.0,
                ),
                Vec3::new(
                    stack.position_x + BILL_WIDTH / 2.0,
                    height,
                    stack.position_z + BILL_DEPTH / 2.0,
                ),
            );
            bounds = union_opt(bounds, Some(bb));
        }
        bounds
    }

    /// Where the comparison object sits: to the right of the stacks with a
    /// spacing of 20% of the wider footprint, bottom on the ground. With no
    /// stacks it sits at a fixed offset from the origin.
    pub fn comparison_placement(&self) -> Option<(Vec3, Vec3)> {
        let object = self.comparison?;
        let size = object.world_size();
        let center = match self.stack_bounds() {
            Some(stacks) => {
                let stacks_size = stacks.size();
                let spacing = stacks_size.x.max(size.x) * COMPARISON_SPACING_RATIO;
                Vec3::new(
                    stacks.max.x + spacing + size.x / 2.0,
                    size.y / 2.0,
                    stacks.center().z,
                )
            }
            None => Vec3::new(COMPARISON_FALLBACK_X, size.y / 2.0, 0.0),
        };
        Some((center, size))
    }

    pub fn comparison_bounds(&self) -> Option<Aabb> {
        self.comparison_placement()
            .map(|(center, size)| Aabb::from_center_size(center, size))
    }

    /// Combined bounds of everything the camera must contain.
    pub fn scene_bounds(&self) -> Option<Aabb> {
        union_opt(self.stack_bounds(), self.comparison_bounds())
    }

    /// Camera fit for the current content at the given surface aspect ratio.
    pub fn frame(&self, aspect: f32) -> CameraFit {
        frame_scene(self.scene_bounds(), aspect, CAMERA_FOVY_RAD)
    }

    /// Box renderables for the whole scene: ground first, then the stacks,
    /// then the comparison placeholder if one is selected.
    pub fn instances(&self) -> Vec<BoxInstance> {
        let mut out = Vec::with_capacity(self.layout.stacks.len() + 2);
        out.push(BoxInstance {
            center: Vec3::new(0.0, -GROUND_THICKNESS / 2.0, 0.0),
            size: Vec3::new(GROUND_EXTENT, GROUND_THICKNESS, GROUND_EXTENT),
            color: GROUND_COLOR,
            surface: SurfaceKind::Flat,
        });
        let surface = self.surface_kind();
        for stack in &self.layout.stacks {
            let height = stack.bill_count as f32 * BILL_THICKNESS;
            out.push(BoxInstance {
                center: Vec3::new(stack.position_x, height / 2.0, stack.position_z),
                size: Vec3::new(BILL_WIDTH, height, BILL_DEPTH),
                color: PAPER_COLOR,
                surface,
            });
        }
        if let Some((center, size)) = self.comparison_placement() {
            out.push(BoxInstance {
                center,
                size,
                color: COMPARISON_COLOR,
                surface: SurfaceKind::Flat,
            });
        }
        out
    }

    /// Index of the first stack instance within [`Self::instances`].
    pub const STACKS_OFFSET: usize = 1;

    /// Human-readable summary of what is on screen.
    pub fn info_line(&self) -> String {
        let bills = self.amount / BILL_VALUE;
        let mut line = format!(
            "{} x $100 = ${}",
            format_thousands(bills),
            format_thousands(self.amount)
        );
        if let Some(object) = self.comparison {
            line.push_str(&format!(" | vs {}", object.title));
        }
        line
    }
}

/// Format an integer with `,` thousands separators.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
