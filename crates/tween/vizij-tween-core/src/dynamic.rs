//! Lazily generated subtrees.

use std::fmt;

use log::debug;

use crate::duration::DurationInfo;
use crate::sequence::Sequence;
use crate::tween::Tween;

type Generator = Box<dyn FnOnce() -> Box<dyn Tween>>;

/// Subtree built from a closure on first use and cached afterwards.
///
/// The generator runs on the first `advance`, `seek_to` or `skip_to_end`.
/// Querying the duration does not build the subtree: until then it reports
/// [`DurationInfo::Unknown`].
pub struct Dynamic {
    generator: Option<Generator>,
    subtree: Option<Box<dyn Tween>>,
}

impl Dynamic {
    pub fn new<N, F>(generator: F) -> Self
    where
        N: Tween + 'static,
        F: FnOnce() -> N + 'static,
    {
        Self {
            generator: Some(Box::new(move || Box::new(generator()) as Box<dyn Tween>)),
            subtree: None,
        }
    }

    pub fn is_materialized(&self) -> bool {
        self.subtree.is_some()
    }

    fn materialize(&mut self) -> &mut dyn Tween {
        let generator = &mut self.generator;
        self.subtree
            .get_or_insert_with(|| {
                debug!("materializing dynamic tween subtree");
                match generator.take() {
                    Some(generate) => generate(),
                    None => Box::new(Sequence::new()),
                }
            })
            .as_mut()
    }
}

impl Tween for Dynamic {
    fn advance(&mut self, dt: f32) -> f32 {
        self.materialize().advance(dt)
    }

    fn is_done(&self) -> bool {
        self.subtree.as_ref().is_some_and(|s| s.is_done())
    }

    fn reset(&mut self) {
        if let Some(subtree) = self.subtree.as_mut() {
            subtree.reset();
        }
    }

    fn seek_to(&mut self, time: f32) {
        self.materialize().seek_to(time);
    }

    fn skip_to_end(&mut self) {
        self.materialize().skip_to_end();
    }

    fn total_duration(&self) -> DurationInfo {
        self.subtree
            .as_ref()
            .map_or(DurationInfo::Unknown, |s| s.total_duration())
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dynamic")
            .field("materialized", &self.is_materialized())
            .finish()
    }
}
