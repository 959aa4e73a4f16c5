use crate::cat::Cat;
use rstar::{RTree, RTreeObject, AABB};

/// Position-only entry so the tree does not clone full cats.
#[derive(Clone, Debug)]
pub struct CatLocation {
    pub index: usize,
    pub position: [f64; 2],
}

impl RTreeObject for CatLocation {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}

/// Build an R*-tree from cat positions via bulk_load (O(n log n)).
pub fn build_index(cats: &[Cat]) -> RTree<CatLocation> {
    let locations: Vec<CatLocation> = cats
        .iter()
        .enumerate()
        .map(|(index, cat)| CatLocation {
            index,
            position: cat.position,
        })
        .collect();
    RTree::bulk_load(locations)
}

/// Whether any cat other than `exclude` lies strictly closer than `radius` to `center`.
/// AABB envelope query, then a Euclidean filter.
pub fn any_within(
    tree: &RTree<CatLocation>,
    center: [f64; 2],
    radius: f64,
    exclude: Option<usize>,
) -> bool {
    let envelope = AABB::from_corners(
        [center[0] - radius, center[1] - radius],
        [center[0] + radius, center[1] + radius],
    );
    tree.locate_in_envelope(&envelope).any(|loc| {
        Some(loc.index) != exclude
            && (loc.position[0] - center[0]).hypot(loc.position[1] - center[1]) < radius
    })
}
