use super::MapOracle;
use crate::state::{Position, VisibilityMap};

/// Field-of-view provider.
///
/// Implementations overwrite the `visible` flags of `visibility` for a
/// viewer standing at `origin`. Merging into `explored` is the engine's job.
pub trait FovOracle {
    fn compute_fov(
        &self,
        map: &dyn MapOracle,
        origin: Position,
        radius: u32,
        visibility: &mut VisibilityMap,
    );
}
