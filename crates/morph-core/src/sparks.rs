//! Free-floating sparks pulled from the canvas edge toward target points.

use crate::config::FieldConfig;
use crate::constants::*;
use crate::geom::{CanvasSize, Point};
use crate::rng::Mulberry32;
use crate::surface::Surface;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spark {
    pub pos: Point,
    pub vel: Vec2,
    pub active: bool,
    pub target: usize,
}

#[derive(Clone, Debug, Default)]
pub struct SparkPool {
    sparks: SmallVec<[Spark; 32]>,
    next_spawn_ms: f64,
}

impl SparkPool {
    pub fn new(count: usize, size: CanvasSize, seed: u32) -> Self {
        let mut rng = Mulberry32::new(seed);
        let sparks = (0..count)
            .map(|_| Spark {
                pos: Vec2::new(rng.next_f32() * size.width, rng.next_f32() * size.height),
                ..Spark::default()
            })
            .collect();
        Self {
            sparks,
            next_spawn_ms: 0.0,
        }
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn active_count(&self) -> usize {
        self.sparks.iter().filter(|s| s.active).count()
    }

    /// Launches one idle spark from a random edge if the spawn timer has elapsed.
    ///
    /// Only a bounded sample of the pool is checked for a free slot; when every
    /// candidate hits an active spark the spawn is skipped until the next interval.
    #[allow(clippy::too_many_arguments)]
    pub fn try_spawn(
        &mut self,
        now_ms: f64,
        morph: f32,
        size: CanvasSize,
        target_count: usize,
        config: &FieldConfig,
        rng: &mut Mulberry32,
    ) -> bool {
        if morph < SPARK_MORPH_THRESHOLD || now_ms < self.next_spawn_ms {
            return false;
        }
        if self.sparks.is_empty() || target_count == 0 {
            return false;
        }
        self.next_spawn_ms = now_ms + config.spark_interval_ms + rng.next_f64() * config.spark_jitter_ms;

        let mut slot = None;
        for _ in 0..SPARK_CANDIDATE_TRIES {
            let i = rng.index(self.sparks.len());
            if !self.sparks[i].active {
                slot = Some(i);
                break;
            }
        }
        let Some(i) = slot else {
            return false;
        };

        let (w, h) = (size.width, size.height);
        let pos = match rng.index(4) {
            0 => Vec2::new(-SPARK_EDGE_OFFSET, rng.next_f32() * h),
            1 => Vec2::new(w + SPARK_EDGE_OFFSET, rng.next_f32() * h),
            2 => Vec2::new(rng.next_f32() * w, -SPARK_EDGE_OFFSET),
            _ => Vec2::new(rng.next_f32() * w, h + SPARK_EDGE_OFFSET),
        };
        self.sparks[i] = Spark {
            pos,
            vel: Vec2::ZERO,
            active: true,
            target: rng.index(target_count),
        };
        true
    }

    /// Integrates active sparks toward their targets and draws them.
    ///
    /// Sparks whose target slot no longer exists, or that arrived, go idle.
    pub fn update<S: Surface + ?Sized>(&mut self, targets: &[Point], lines_ease: f32, surface: &mut S) {
        let alpha = SPARK_ALPHA_BASE + SPARK_ALPHA_GAIN * lines_ease;
        for s in self.sparks.iter_mut().filter(|s| s.active) {
            let Some(&target) = targets.get(s.target) else {
                s.active = false;
                continue;
            };
            let d = target - s.pos;
            let dist = d.length() + 0.001;
            s.vel = (s.vel + d / dist * SPARK_ACCEL) * SPARK_DAMPING;
            s.pos += s.vel * SPARK_VELOCITY_SCALE;
            surface.fill_circle(s.pos, SPARK_RADIUS, alpha);
            if dist < SPARK_ARRIVAL_RADIUS {
                s.active = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn pool() -> (SparkPool, FieldConfig) {
        let cfg = FieldConfig::showcase();
        (SparkPool::new(cfg.spark_count, CanvasSize::new(400.0, 300.0), 3), cfg)
    }

    #[test]
    fn no_spawn_below_threshold() {
        let (mut p, cfg) = pool();
        let mut rng = Mulberry32::new(1);
        assert!(!p.try_spawn(0.0, 0.1, CanvasSize::new(400.0, 300.0), 10, &cfg, &mut rng));
        assert_eq!(p.active_count(), 0);
    }

    #[test]
    fn spawn_respects_interval() {
        let (mut p, cfg) = pool();
        let size = CanvasSize::new(400.0, 300.0);
        let mut rng = Mulberry32::new(1);
        assert!(p.try_spawn(0.0, 1.0, size, 10, &cfg, &mut rng));
        assert!(!p.try_spawn(cfg.spark_interval_ms - 1.0, 1.0, size, 10, &cfg, &mut rng));
        let later = cfg.spark_interval_ms + cfg.spark_jitter_ms;
        assert!(p.try_spawn(later, 1.0, size, 10, &cfg, &mut rng));
        assert_eq!(p.active_count(), 2);
    }

    #[test]
    fn empty_pool_never_spawns() {
        let cfg = FieldConfig::symbols();
        let mut p = SparkPool::new(0, CanvasSize::new(100.0, 100.0), 1);
        let mut rng = Mulberry32::new(1);
        assert!(!p.try_spawn(0.0, 1.0, CanvasSize::new(100.0, 100.0), 10, &cfg, &mut rng));
    }

    #[test]
    fn sparks_arrive_and_retire() {
        let (mut p, cfg) = pool();
        let size = CanvasSize::new(400.0, 300.0);
        let mut rng = Mulberry32::new(5);
        assert!(p.try_spawn(0.0, 1.0, size, 1, &cfg, &mut rng));
        let targets = [Vec2::new(200.0, 150.0)];
        let mut surface = RecordingSurface::default();
        for _ in 0..2000 {
            p.update(&targets, 1.0, &mut surface);
            if p.active_count() == 0 {
                break;
            }
        }
        assert_eq!(p.active_count(), 0);
        assert!(!surface.circles.is_empty());
    }
}
