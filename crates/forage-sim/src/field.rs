//! Field generation by recursive quad subdivision.
//!
//! The map rectangle is split into four quadrants `depth` times; each leaf cell receives
//! exactly one item at a random point inset by the configured padding. The result is an even
//! spread with local randomness, unlike uniform scattering over the whole map.

use forage_core::{Candidate, Vec2};

use crate::config::{ItemTemplate, SimConfig};
use crate::rng::DeterministicRng;

/// Axis-aligned rectangle given by its minimum corner and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Rectangle of the given size centred on the origin.
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(Vec2::new(-width / 2.0, -height / 2.0), Vec2::new(width, height))
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x <= max.x && point.y >= self.min.y && point.y <= max.y
    }

    /// Lower-left, lower-right, upper-left, upper-right.
    pub fn quadrants(&self) -> [Rect; 4] {
        let half = self.size / 2.0;
        let Vec2 { x, y } = self.min;
        [
            Rect::new(Vec2::new(x, y), half),
            Rect::new(Vec2::new(x + half.x, y), half),
            Rect::new(Vec2::new(x, y + half.y), half),
            Rect::new(Vec2::new(x + half.x, y + half.y), half),
        ]
    }
}

/// A generated item: its decision-facing snapshot and the template it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldItem {
    pub candidate: Candidate,
    pub name: String,
}

/// Collectibles of one decade.
#[derive(Debug, Clone, Default)]
pub struct Field {
    candidates: Vec<Candidate>,
    names: Vec<String>,
}

impl Field {
    /// Generate a fresh field; ids start at `first_id` and increase in leaf order.
    pub fn generate<R: DeterministicRng>(config: &SimConfig, rng: &mut R, first_id: u64) -> Self {
        let mut field = Self::default();
        let bounds = Rect::centered(config.map_width, config.map_height);
        let mut next_id = first_id;
        field.subdivide(config, rng, bounds, config.subdivision_depth, &mut next_id);
        tracing::debug!(items = field.candidates.len(), "field generated");
        field
    }

    fn subdivide<R: DeterministicRng>(
        &mut self,
        config: &SimConfig,
        rng: &mut R,
        area: Rect,
        depth: u32,
        next_id: &mut u64,
    ) {
        if depth == 0 {
            self.spawn_in(config, rng, area, next_id);
            return;
        }
        for quadrant in area.quadrants() {
            self.subdivide(config, rng, quadrant, depth - 1, next_id);
        }
    }

    fn spawn_in<R: DeterministicRng>(
        &mut self,
        config: &SimConfig,
        rng: &mut R,
        area: Rect,
        next_id: &mut u64,
    ) {
        if config.items.is_empty() {
            return;
        }
        let max = area.max();
        let position = Vec2::new(
            rng.range_f32(area.min.x + config.padding, max.x - config.padding),
            rng.range_f32(area.min.y + config.padding, max.y - config.padding),
        );
        let template: &ItemTemplate = &config.items[rng.index(config.items.len())];

        self.candidates.push(
            Candidate::new(*next_id, position)
                .with_value(template.value)
                .with_weight(template.weight)
                .with_stress_cost(template.stress),
        );
        self.names.push(template.name.clone());
        *next_id += 1;
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.active).count()
    }

    /// Deactivate every live item within `radius` of `position` and return them.
    pub fn collect_near(&mut self, position: Vec2, radius: f32) -> Vec<FieldItem> {
        let radius_sq = radius * radius;
        let mut collected = Vec::new();
        for (candidate, name) in self.candidates.iter_mut().zip(&self.names) {
            if candidate.active && (candidate.position - position).length_squared() <= radius_sq {
                candidate.active = false;
                collected.push(FieldItem {
                    candidate: *candidate,
                    name: name.clone(),
                });
            }
        }
        collected
    }
}
